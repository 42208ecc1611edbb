use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::advertisers_model::{Advertiser, AdvertiserFilters, AdvertiserUpdate, NewAdvertiser};
use super::advertisers_traits::{AdvertiserRepositoryTrait, AdvertiserServiceTrait};

/// Service for managing advertisers.
pub struct AdvertiserService {
    advertiser_repository: Arc<dyn AdvertiserRepositoryTrait>,
    filters: RwLock<AdvertiserFilters>,
}

impl AdvertiserService {
    pub fn new(advertiser_repository: Arc<dyn AdvertiserRepositoryTrait>) -> Self {
        AdvertiserService {
            advertiser_repository,
            filters: RwLock::new(AdvertiserFilters::default()),
        }
    }
}

#[async_trait]
impl AdvertiserServiceTrait for AdvertiserService {
    fn get_advertisers(&self) -> Result<Vec<Advertiser>> {
        self.advertiser_repository.get_advertisers()
    }

    fn get_advertiser(&self, id: &str) -> Result<Advertiser> {
        self.advertiser_repository.get_advertiser(id)
    }

    async fn add_advertiser(&self, new_advertiser: NewAdvertiser) -> Result<Advertiser> {
        new_advertiser.validate()?;
        let advertiser = self
            .advertiser_repository
            .insert_advertiser(new_advertiser)
            .await?;
        debug!("Registered advertiser {}", advertiser.id);
        Ok(advertiser)
    }

    async fn update_advertiser(&self, id: &str, update: AdvertiserUpdate) -> Result<Advertiser> {
        self.advertiser_repository.update_advertiser(id, update).await
    }

    async fn delete_advertiser(&self, id: &str) -> Result<()> {
        self.advertiser_repository.delete_advertiser(id).await
    }

    fn set_search_query(&self, query: &str) {
        self.filters.write().unwrap().search_query = query.to_string();
    }

    fn set_selected_areas(&self, areas: Vec<String>) {
        self.filters.write().unwrap().selected_areas = areas;
    }

    fn filtered_advertisers(&self) -> Result<Vec<Advertiser>> {
        let filters = self.filters.read().unwrap().clone();
        Ok(self
            .advertiser_repository
            .get_advertisers()?
            .into_iter()
            .filter(|a| filters.matches(a))
            .collect())
    }

    fn unique_areas(&self) -> Result<Vec<String>> {
        let areas: BTreeSet<String> = self
            .advertiser_repository
            .get_advertisers()?
            .into_iter()
            .flat_map(|a| a.preferred_area)
            .filter(|area| !area.is_empty())
            .collect();
        Ok(areas.into_iter().collect())
    }
}
