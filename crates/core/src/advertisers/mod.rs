//! Advertisers module - domain models, services, and traits.

mod advertisers_model;
mod advertisers_service;
mod advertisers_traits;

pub use advertisers_model::{Advertiser, AdvertiserFilters, AdvertiserUpdate, NewAdvertiser};
pub use advertisers_service::AdvertiserService;
pub use advertisers_traits::{AdvertiserRepositoryTrait, AdvertiserServiceTrait};
