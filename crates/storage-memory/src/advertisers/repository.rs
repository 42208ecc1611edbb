use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adlocal_core::advertisers::{
    Advertiser, AdvertiserRepositoryTrait, AdvertiserUpdate, NewAdvertiser,
};
use adlocal_core::errors::{Error, Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;

pub struct MemoryAdvertiserRepository {
    advertisers: RwLock<Vec<Advertiser>>,
}

impl MemoryAdvertiserRepository {
    pub fn new(advertisers: Vec<Advertiser>) -> Self {
        MemoryAdvertiserRepository {
            advertisers: RwLock::new(advertisers),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Boots from the bundled seed fixtures.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_advertisers())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Advertiser>>> {
        self.advertisers
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Advertiser>>> {
        self.advertisers
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

#[async_trait]
impl AdvertiserRepositoryTrait for MemoryAdvertiserRepository {
    fn get_advertisers(&self) -> Result<Vec<Advertiser>> {
        Ok(self.read()?.clone())
    }

    fn get_advertiser(&self, id: &str) -> Result<Advertiser> {
        self.read()?
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("advertiser {}", id)))
    }

    async fn insert_advertiser(&self, new_advertiser: NewAdvertiser) -> Result<Advertiser> {
        let advertiser = new_advertiser.into_advertiser(Utc::now().date_naive());
        self.write()?.push(advertiser.clone());
        Ok(advertiser)
    }

    async fn update_advertiser(&self, id: &str, update: AdvertiserUpdate) -> Result<Advertiser> {
        let mut advertisers = self.write()?;
        let advertiser = advertisers
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::not_found(format!("advertiser {}", id)))?;
        advertiser.apply_update(update);
        Ok(advertiser.clone())
    }

    async fn delete_advertiser(&self, id: &str) -> Result<()> {
        let mut advertisers = self.write()?;
        let before = advertisers.len();
        advertisers.retain(|a| a.id != id);
        if advertisers.len() == before {
            return Err(Error::not_found(format!("advertiser {}", id)));
        }
        Ok(())
    }
}
