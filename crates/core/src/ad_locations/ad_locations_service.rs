use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::ad_locations_model::{AdLocation, AdLocationFilters, AdLocationUpdate, NewAdLocation};
use super::ad_locations_traits::{AdLocationRepositoryTrait, AdLocationServiceTrait};

/// Service for managing advertisement placement locations.
pub struct AdLocationService {
    ad_location_repository: Arc<dyn AdLocationRepositoryTrait>,
    filters: RwLock<AdLocationFilters>,
}

impl AdLocationService {
    pub fn new(ad_location_repository: Arc<dyn AdLocationRepositoryTrait>) -> Self {
        AdLocationService {
            ad_location_repository,
            filters: RwLock::new(AdLocationFilters::default()),
        }
    }
}

#[async_trait]
impl AdLocationServiceTrait for AdLocationService {
    fn get_ad_locations(&self) -> Result<Vec<AdLocation>> {
        self.ad_location_repository.get_ad_locations()
    }

    fn get_ad_location(&self, id: &str) -> Result<AdLocation> {
        self.ad_location_repository.get_ad_location(id)
    }

    async fn add_ad_location(&self, new_location: NewAdLocation) -> Result<AdLocation> {
        new_location.validate()?;
        let location = self
            .ad_location_repository
            .insert_ad_location(new_location)
            .await?;
        debug!("Registered ad location {}", location.id);
        Ok(location)
    }

    async fn update_ad_location(&self, id: &str, update: AdLocationUpdate) -> Result<AdLocation> {
        self.ad_location_repository.update_ad_location(id, update).await
    }

    async fn delete_ad_location(&self, id: &str) -> Result<()> {
        self.ad_location_repository.delete_ad_location(id).await
    }

    fn set_search_query(&self, query: &str) {
        self.filters.write().unwrap().search_query = query.to_string();
    }

    fn set_selected_areas(&self, areas: Vec<String>) {
        self.filters.write().unwrap().selected_areas = areas;
    }

    fn filtered_ad_locations(&self) -> Result<Vec<AdLocation>> {
        let filters = self.filters.read().unwrap().clone();
        Ok(self
            .ad_location_repository
            .get_ad_locations()?
            .into_iter()
            .filter(|l| filters.matches(l))
            .collect())
    }

    fn available_areas(&self) -> Result<Vec<String>> {
        let areas: BTreeSet<String> = self
            .ad_location_repository
            .get_ad_locations()?
            .iter()
            .map(AdLocation::area_label)
            .collect();
        Ok(areas.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::{NaiveDate, Utc};

    struct MockAdLocationRepository {
        locations: RwLock<Vec<AdLocation>>,
    }

    impl MockAdLocationRepository {
        fn new(locations: Vec<AdLocation>) -> Self {
            MockAdLocationRepository {
                locations: RwLock::new(locations),
            }
        }
    }

    #[async_trait]
    impl AdLocationRepositoryTrait for MockAdLocationRepository {
        fn get_ad_locations(&self) -> Result<Vec<AdLocation>> {
            Ok(self.locations.read().unwrap().clone())
        }

        fn get_ad_location(&self, id: &str) -> Result<AdLocation> {
            self.locations
                .read()
                .unwrap()
                .iter()
                .find(|l| l.id == id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("ad location {}", id)))
        }

        async fn insert_ad_location(&self, new_location: NewAdLocation) -> Result<AdLocation> {
            let location = new_location.into_ad_location(Utc::now().date_naive());
            self.locations.write().unwrap().push(location.clone());
            Ok(location)
        }

        async fn update_ad_location(
            &self,
            id: &str,
            update: AdLocationUpdate,
        ) -> Result<AdLocation> {
            let mut locations = self.locations.write().unwrap();
            let location = locations
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| Error::not_found(format!("ad location {}", id)))?;
            location.apply_update(update);
            Ok(location.clone())
        }

        async fn delete_ad_location(&self, id: &str) -> Result<()> {
            let mut locations = self.locations.write().unwrap();
            let before = locations.len();
            locations.retain(|l| l.id != id);
            if locations.len() == before {
                return Err(Error::not_found(format!("ad location {}", id)));
            }
            Ok(())
        }
    }

    fn location(id: &str, name: &str, address: &str, business_type: &str) -> AdLocation {
        AdLocation {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            business_type: business_type.to_string(),
            has_agreement: true,
            fee: 15000,
            contact_person: "佐藤".to_string(),
            contact_info: "03-1234-5678".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        }
    }

    fn make_service(locations: Vec<AdLocation>) -> AdLocationService {
        AdLocationService::new(Arc::new(MockAdLocationRepository::new(locations)))
    }

    #[tokio::test]
    async fn test_add_ad_location_assigns_id() {
        let service = make_service(vec![]);
        let added = service
            .add_ad_location(NewAdLocation {
                name: "美容室ヘアメイク".to_string(),
                address: "東京都渋谷区神南1-2-3".to_string(),
                business_type: "美容室".to_string(),
                has_agreement: false,
                fee: 12000,
                contact_person: "鈴木".to_string(),
                contact_info: "03-0000-1111".to_string(),
            })
            .await
            .unwrap();

        assert!(!added.id.is_empty());
        assert_eq!(service.get_ad_locations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_toggles_agreement() {
        let service = make_service(vec![location(
            "l1",
            "クリーニング白洋",
            "東京都港区六本木5-1",
            "クリーニング",
        )]);

        let updated = service
            .update_ad_location(
                "l1",
                AdLocationUpdate {
                    has_agreement: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.has_agreement);
    }

    #[tokio::test]
    async fn test_delete_missing_location_is_not_found() {
        let service = make_service(vec![]);
        assert!(service
            .delete_ad_location("ghost")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_area_filter_matches_address_substring() {
        let service = make_service(vec![
            location("l1", "カフェ森", "東京都渋谷区神南1-2-3", "カフェ"),
            location("l2", "書店ブックス", "東京都港区六本木5-1", "書店"),
        ]);

        service.set_selected_areas(vec!["渋谷区".to_string()]);
        let filtered = service.filtered_ad_locations().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "l1");
    }

    #[test]
    fn test_search_covers_name_address_and_business_type() {
        let service = make_service(vec![
            location("l1", "カフェ森", "東京都渋谷区神南1-2-3", "カフェ"),
            location("l2", "書店ブックス", "東京都港区六本木5-1", "書店"),
        ]);

        service.set_search_query("書店");
        let filtered = service.filtered_ad_locations().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "l2");
    }

    #[test]
    fn test_available_areas_distinct_labels() {
        let service = make_service(vec![
            location("l1", "カフェ森", "東京都渋谷区神南1-2-3", "カフェ"),
            location("l2", "書店ブックス", "東京都渋谷区宇田川町10", "書店"),
            location("l3", "パン工房", "武蔵野市吉祥寺本町2-4", "ベーカリー"),
        ]);

        let areas = service.available_areas().unwrap();
        assert_eq!(areas.len(), 2);
        assert!(areas.contains(&"渋谷区".to_string()));
        assert!(areas.contains(&"武蔵野市".to_string()));
    }
}
