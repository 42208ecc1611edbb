//! Placement locations module - domain models, services, and traits.

mod ad_locations_model;
mod ad_locations_service;
mod ad_locations_traits;

pub use ad_locations_model::{
    area_label, AdLocation, AdLocationFilters, AdLocationUpdate, NewAdLocation,
};
pub use ad_locations_service::AdLocationService;
pub use ad_locations_traits::{AdLocationRepositoryTrait, AdLocationServiceTrait};
