use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adlocal_core::errors::{Error, Result, StoreError};
use adlocal_core::sales_reps::{NewSalesRep, SalesRep, SalesRepRepositoryTrait, SalesRepUpdate};
use async_trait::async_trait;
use chrono::Utc;

pub struct MemorySalesRepRepository {
    reps: RwLock<Vec<SalesRep>>,
}

impl MemorySalesRepRepository {
    pub fn new(reps: Vec<SalesRep>) -> Self {
        MemorySalesRepRepository {
            reps: RwLock::new(reps),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Boots from the bundled seed fixtures.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_sales_reps())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<SalesRep>>> {
        self.reps
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<SalesRep>>> {
        self.reps
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

#[async_trait]
impl SalesRepRepositoryTrait for MemorySalesRepRepository {
    fn get_sales_reps(&self) -> Result<Vec<SalesRep>> {
        Ok(self.read()?.clone())
    }

    fn get_sales_rep(&self, id: &str) -> Result<SalesRep> {
        self.read()?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("sales rep {}", id)))
    }

    async fn insert_sales_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep> {
        let rep = new_rep.into_sales_rep(Utc::now().date_naive());
        self.write()?.push(rep.clone());
        Ok(rep)
    }

    async fn update_sales_rep(&self, id: &str, update: SalesRepUpdate) -> Result<SalesRep> {
        let mut reps = self.write()?;
        let rep = reps
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::not_found(format!("sales rep {}", id)))?;
        rep.apply_update(update);
        Ok(rep.clone())
    }

    async fn delete_sales_rep(&self, id: &str) -> Result<()> {
        let mut reps = self.write()?;
        let before = reps.len();
        reps.retain(|r| r.id != id);
        if reps.len() == before {
            return Err(Error::not_found(format!("sales rep {}", id)));
        }
        Ok(())
    }
}
