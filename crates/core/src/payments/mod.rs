//! Payments module - domain models, services, and traits.

mod csv_exporter;
mod payments_model;
mod payments_service;
mod payments_traits;



pub use csv_exporter::{export_payments_csv, CSV_HEADERS};
pub use payments_model::{
    MonthlyTrendPoint, Payment, PaymentFilters, PaymentStatus, PaymentStatusHistory,
    PaymentSummary, PaymentUpdate,
};
pub use payments_service::PaymentService;
pub use payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};
