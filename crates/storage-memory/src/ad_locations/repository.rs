use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adlocal_core::ad_locations::{
    AdLocation, AdLocationRepositoryTrait, AdLocationUpdate, NewAdLocation,
};
use adlocal_core::errors::{Error, Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;

pub struct MemoryAdLocationRepository {
    locations: RwLock<Vec<AdLocation>>,
}

impl MemoryAdLocationRepository {
    pub fn new(locations: Vec<AdLocation>) -> Self {
        MemoryAdLocationRepository {
            locations: RwLock::new(locations),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Boots from the bundled seed fixtures.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_ad_locations())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<AdLocation>>> {
        self.locations
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<AdLocation>>> {
        self.locations
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

#[async_trait]
impl AdLocationRepositoryTrait for MemoryAdLocationRepository {
    fn get_ad_locations(&self) -> Result<Vec<AdLocation>> {
        Ok(self.read()?.clone())
    }

    fn get_ad_location(&self, id: &str) -> Result<AdLocation> {
        self.read()?
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("ad location {}", id)))
    }

    async fn insert_ad_location(&self, new_location: NewAdLocation) -> Result<AdLocation> {
        let location = new_location.into_ad_location(Utc::now().date_naive());
        self.write()?.push(location.clone());
        Ok(location)
    }

    async fn update_ad_location(&self, id: &str, update: AdLocationUpdate) -> Result<AdLocation> {
        let mut locations = self.write()?;
        let location = locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| Error::not_found(format!("ad location {}", id)))?;
        location.apply_update(update);
        Ok(location.clone())
    }

    async fn delete_ad_location(&self, id: &str) -> Result<()> {
        let mut locations = self.write()?;
        let before = locations.len();
        locations.retain(|l| l.id != id);
        if locations.len() == before {
            return Err(Error::not_found(format!("ad location {}", id)));
        }
        Ok(())
    }
}
