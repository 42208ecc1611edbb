use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adlocal_core::errors::{Error, Result, StoreError};
use adlocal_core::inquiries::{Inquiry, InquiryRepositoryTrait, InquiryStatus};
use async_trait::async_trait;

pub struct MemoryInquiryRepository {
    inquiries: RwLock<Vec<Inquiry>>,
}

impl MemoryInquiryRepository {
    pub fn new(inquiries: Vec<Inquiry>) -> Self {
        MemoryInquiryRepository {
            inquiries: RwLock::new(inquiries),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Boots from the bundled seed fixtures.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_inquiries())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Inquiry>>> {
        self.inquiries
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Inquiry>>> {
        self.inquiries
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

#[async_trait]
impl InquiryRepositoryTrait for MemoryInquiryRepository {
    fn get_inquiries(&self) -> Result<Vec<Inquiry>> {
        Ok(self.read()?.clone())
    }

    fn get_inquiry(&self, id: &str) -> Result<Inquiry> {
        self.read()?
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("inquiry {}", id)))
    }

    async fn update_status(&self, id: &str, status: InquiryStatus) -> Result<Inquiry> {
        let mut inquiries = self.write()?;
        let inquiry = inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::not_found(format!("inquiry {}", id)))?;
        inquiry.status = status;
        Ok(inquiry.clone())
    }

    async fn delete_inquiry(&self, id: &str) -> Result<()> {
        let mut inquiries = self.write()?;
        let before = inquiries.len();
        inquiries.retain(|i| i.id != id);
        if inquiries.len() == before {
            return Err(Error::not_found(format!("inquiry {}", id)));
        }
        Ok(())
    }
}
