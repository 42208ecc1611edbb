use crate::errors::Result;
use crate::payments::payments_model::{
    Payment, PaymentFilters, PaymentStatus, PaymentStatusHistory, PaymentSummary, PaymentUpdate,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for payment repository operations.
///
/// Lookups return `StoreError::NotFound` for missing ids; there are no
/// silent no-ops at this boundary.
#[async_trait]
pub trait PaymentRepositoryTrait: Send + Sync {
    fn get_payments(&self) -> Result<Vec<Payment>>;
    fn get_payment(&self, id: &str) -> Result<Payment>;
    fn get_history(&self, payment_id: &str) -> Result<Vec<PaymentStatusHistory>>;
    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Payment>;
    /// Applies the status change described by `entry` to its payment and
    /// appends `entry` to the history log as one atomic write.
    async fn transition_status(&self, entry: PaymentStatusHistory) -> Result<Payment>;
    /// Removes the payment and cascades its history entries, returning the
    /// number of entries removed.
    async fn delete_payment(&self, id: &str) -> Result<usize>;
}

/// Trait for payment service operations.
#[async_trait]
pub trait PaymentServiceTrait: Send + Sync {
    fn get_payments(&self) -> Result<Vec<Payment>>;
    fn get_payment(&self, id: &str) -> Result<Payment>;
    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Payment>;
    async fn update_payment_status(
        &self,
        id: &str,
        new_status: PaymentStatus,
        notes: Option<String>,
    ) -> Result<Payment>;
    async fn delete_payment(&self, id: &str) -> Result<()>;

    fn set_search_query(&self, query: &str);
    fn set_status_filter(&self, status: Option<PaymentStatus>);
    fn set_advertiser_filter(&self, advertiser: &str);
    fn set_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>);
    fn filters(&self) -> PaymentFilters;

    fn filtered_payments(&self) -> Result<Vec<Payment>>;
    fn payment_summary(&self) -> Result<PaymentSummary>;
    fn payment_history(&self, payment_id: &str) -> Result<Vec<PaymentStatusHistory>>;
    fn export_csv(&self) -> Result<String>;
}
