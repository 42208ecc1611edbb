use crate::errors::Result;
use crate::inquiries::inquiries_model::{
    Inquiry, InquiryFilters, InquiryPriority, InquiryStatus, InquiryStatusFilter, SenderType,
};
use async_trait::async_trait;

/// Trait for inquiry repository operations. Inquiries arrive from outside
/// the application, so there is no insert path; the store is seeded.
#[async_trait]
pub trait InquiryRepositoryTrait: Send + Sync {
    fn get_inquiries(&self) -> Result<Vec<Inquiry>>;
    fn get_inquiry(&self, id: &str) -> Result<Inquiry>;
    async fn update_status(&self, id: &str, status: InquiryStatus) -> Result<Inquiry>;
    async fn delete_inquiry(&self, id: &str) -> Result<()>;
}

/// Trait for inquiry service operations.
#[async_trait]
pub trait InquiryServiceTrait: Send + Sync {
    fn get_inquiries(&self) -> Result<Vec<Inquiry>>;
    fn get_inquiry(&self, id: &str) -> Result<Inquiry>;
    async fn update_inquiry_status(&self, id: &str, status: InquiryStatus) -> Result<Inquiry>;
    async fn delete_inquiry(&self, id: &str) -> Result<()>;

    fn set_search_query(&self, query: &str);
    fn set_status_filter(&self, status: InquiryStatusFilter);
    fn set_priority_filter(&self, priority: Option<InquiryPriority>);
    fn set_sender_type_filter(&self, sender_type: Option<SenderType>);
    fn filters(&self) -> InquiryFilters;

    fn filtered_inquiries(&self) -> Result<Vec<Inquiry>>;
    fn unread_count(&self) -> Result<usize>;
    /// Unread and read inquiries together: everything still awaiting a
    /// resolution.
    fn pending_count(&self) -> Result<usize>;
}
