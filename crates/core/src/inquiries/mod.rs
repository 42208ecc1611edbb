//! Inquiries module - domain models, services, and traits.

mod inquiries_model;
mod inquiries_service;
mod inquiries_traits;

pub use inquiries_model::{
    Inquiry, InquiryFilters, InquiryPriority, InquiryStatus, InquiryStatusFilter, SenderType,
};
pub use inquiries_service::InquiryService;
pub use inquiries_traits::{InquiryRepositoryTrait, InquiryServiceTrait};
