//! Sales representatives module - domain models, services, and traits.

mod sales_reps_model;
mod sales_reps_service;
mod sales_reps_traits;

pub use sales_reps_model::{NewSalesRep, SalesRep, SalesRepUpdate};
pub use sales_reps_service::SalesRepService;
pub use sales_reps_traits::{SalesRepRepositoryTrait, SalesRepServiceTrait};
