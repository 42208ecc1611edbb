//! Reports module - derived business metrics across the domain stores.

mod reports_model;
mod reports_service;

pub use reports_model::{DashboardStats, RevenueReport};
pub use reports_service::{ReportsService, ReportsServiceTrait};
