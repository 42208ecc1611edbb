use crate::ad_locations::ad_locations_model::{AdLocation, AdLocationUpdate, NewAdLocation};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for placement-location repository operations.
#[async_trait]
pub trait AdLocationRepositoryTrait: Send + Sync {
    fn get_ad_locations(&self) -> Result<Vec<AdLocation>>;
    fn get_ad_location(&self, id: &str) -> Result<AdLocation>;
    async fn insert_ad_location(&self, new_location: NewAdLocation) -> Result<AdLocation>;
    async fn update_ad_location(&self, id: &str, update: AdLocationUpdate) -> Result<AdLocation>;
    async fn delete_ad_location(&self, id: &str) -> Result<()>;
}

/// Trait for placement-location service operations.
#[async_trait]
pub trait AdLocationServiceTrait: Send + Sync {
    fn get_ad_locations(&self) -> Result<Vec<AdLocation>>;
    fn get_ad_location(&self, id: &str) -> Result<AdLocation>;
    async fn add_ad_location(&self, new_location: NewAdLocation) -> Result<AdLocation>;
    async fn update_ad_location(&self, id: &str, update: AdLocationUpdate) -> Result<AdLocation>;
    async fn delete_ad_location(&self, id: &str) -> Result<()>;

    fn set_search_query(&self, query: &str);
    fn set_selected_areas(&self, areas: Vec<String>);

    fn filtered_ad_locations(&self) -> Result<Vec<AdLocation>>;
    /// Sorted distinct area labels derived from all location addresses.
    fn available_areas(&self) -> Result<Vec<String>>;
}
