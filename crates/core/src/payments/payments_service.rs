use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::constants::{DEFAULT_ACTOR, DISPLAY_DECIMAL_PRECISION, TREND_MONTHS};
use crate::errors::Result;

use super::csv_exporter::export_payments_csv;
use super::payments_model::{
    MonthlyTrendPoint, Payment, PaymentFilters, PaymentStatus, PaymentStatusHistory,
    PaymentSummary, PaymentUpdate,
};
use super::payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};

/// Service owning the payment filter state and the status transition path.
///
/// The transition path is the only place where two records (payment and
/// history entry) change together; the repository applies both under one
/// write so the pair is atomic from the caller's perspective.
pub struct PaymentService {
    payment_repository: Arc<dyn PaymentRepositoryTrait>,
    filters: RwLock<PaymentFilters>,
    actor: String,
}

impl PaymentService {
    pub fn new(payment_repository: Arc<dyn PaymentRepositoryTrait>) -> Self {
        PaymentService {
            payment_repository,
            filters: RwLock::new(PaymentFilters::default()),
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    /// Overrides the actor label recorded on history entries.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Aggregates the already-filtered view. The empty set yields all-zero
    /// totals and a zero rate.
    fn summarize(payments: &[Payment]) -> PaymentSummary {
        let total_invoiced: i64 = payments.iter().map(|p| p.amount).sum();
        let total_paid: i64 = payments
            .iter()
            .filter(|p| p.status.is_settled())
            .map(|p| p.amount)
            .sum();
        let total_unpaid: i64 = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Unpaid)
            .map(|p| p.amount)
            .sum();

        let payment_rate = if total_invoiced > 0 {
            (Decimal::from(total_paid) / Decimal::from(total_invoiced) * Decimal::from(100))
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        PaymentSummary {
            total_invoiced,
            total_paid,
            total_unpaid,
            payment_rate,
            monthly_trend: Self::monthly_trend(payments),
        }
    }

    /// Buckets the filtered view into the current month and the five
    /// preceding calendar months, oldest first.
    fn monthly_trend(payments: &[Payment]) -> Vec<MonthlyTrendPoint> {
        let today = Utc::now().date_naive();
        let mut trend = Vec::with_capacity(TREND_MONTHS as usize);

        for offset in (0..TREND_MONTHS).rev() {
            let bucket = today.checked_sub_months(Months::new(offset)).unwrap_or(today);
            let (year, month) = (bucket.year(), bucket.month());

            let mut invoiced = 0i64;
            let mut paid = 0i64;
            for payment in payments {
                if payment.invoice_date.year() == year && payment.invoice_date.month() == month {
                    invoiced += payment.amount;
                    if payment.status.is_settled() {
                        paid += payment.amount;
                    }
                }
            }

            trend.push(MonthlyTrendPoint {
                month: format!("{:04}-{:02}", year, month),
                invoiced,
                paid,
            });
        }

        trend
    }
}

#[async_trait]
impl PaymentServiceTrait for PaymentService {
    fn get_payments(&self) -> Result<Vec<Payment>> {
        self.payment_repository.get_payments()
    }

    fn get_payment(&self, id: &str) -> Result<Payment> {
        self.payment_repository.get_payment(id)
    }

    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Payment> {
        self.payment_repository.update_payment(id, update).await
    }

    async fn update_payment_status(
        &self,
        id: &str,
        new_status: PaymentStatus,
        notes: Option<String>,
    ) -> Result<Payment> {
        let payment = self.payment_repository.get_payment(id)?;
        let entry = PaymentStatusHistory::record(&payment, new_status, &self.actor, notes);
        debug!(
            "Transitioning payment {} from {} to {}",
            payment.id, entry.previous_status, entry.new_status
        );
        self.payment_repository.transition_status(entry).await
    }

    async fn delete_payment(&self, id: &str) -> Result<()> {
        let removed_history = self.payment_repository.delete_payment(id).await?;
        debug!("Deleted payment {} and {} history entries", id, removed_history);
        Ok(())
    }

    fn set_search_query(&self, query: &str) {
        self.filters.write().unwrap().search_query = query.to_string();
    }

    fn set_status_filter(&self, status: Option<PaymentStatus>) {
        self.filters.write().unwrap().status = status;
    }

    fn set_advertiser_filter(&self, advertiser: &str) {
        self.filters.write().unwrap().advertiser = advertiser.to_string();
    }

    fn set_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let mut filters = self.filters.write().unwrap();
        filters.date_from = start;
        filters.date_to = end;
    }

    fn filters(&self) -> PaymentFilters {
        self.filters.read().unwrap().clone()
    }

    fn filtered_payments(&self) -> Result<Vec<Payment>> {
        let filters = self.filters.read().unwrap().clone();
        let mut payments: Vec<Payment> = self
            .payment_repository
            .get_payments()?
            .into_iter()
            .filter(|p| filters.matches(p))
            .collect();
        // Most recent invoice first; sort_by is stable, so ties keep
        // collection order.
        payments.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
        Ok(payments)
    }

    fn payment_summary(&self) -> Result<PaymentSummary> {
        Ok(Self::summarize(&self.filtered_payments()?))
    }

    fn payment_history(&self, payment_id: &str) -> Result<Vec<PaymentStatusHistory>> {
        let mut history = self.payment_repository.get_history(payment_id)?;
        history.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(history)
    }

    fn export_csv(&self) -> Result<String> {
        export_payments_csv(&self.filtered_payments()?)
    }
}
