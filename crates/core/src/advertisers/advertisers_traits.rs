use crate::advertisers::advertisers_model::{Advertiser, AdvertiserUpdate, NewAdvertiser};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for advertiser repository operations.
#[async_trait]
pub trait AdvertiserRepositoryTrait: Send + Sync {
    fn get_advertisers(&self) -> Result<Vec<Advertiser>>;
    fn get_advertiser(&self, id: &str) -> Result<Advertiser>;
    async fn insert_advertiser(&self, new_advertiser: NewAdvertiser) -> Result<Advertiser>;
    async fn update_advertiser(&self, id: &str, update: AdvertiserUpdate) -> Result<Advertiser>;
    async fn delete_advertiser(&self, id: &str) -> Result<()>;
}

/// Trait for advertiser service operations.
#[async_trait]
pub trait AdvertiserServiceTrait: Send + Sync {
    fn get_advertisers(&self) -> Result<Vec<Advertiser>>;
    fn get_advertiser(&self, id: &str) -> Result<Advertiser>;
    async fn add_advertiser(&self, new_advertiser: NewAdvertiser) -> Result<Advertiser>;
    async fn update_advertiser(&self, id: &str, update: AdvertiserUpdate) -> Result<Advertiser>;
    async fn delete_advertiser(&self, id: &str) -> Result<()>;

    fn set_search_query(&self, query: &str);
    fn set_selected_areas(&self, areas: Vec<String>);

    fn filtered_advertisers(&self) -> Result<Vec<Advertiser>>;
    /// Sorted distinct preferred areas across all advertisers.
    fn unique_areas(&self) -> Result<Vec<String>>;
}
