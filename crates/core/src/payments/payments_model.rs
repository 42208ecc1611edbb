//! Payment domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::utils::contains_ignore_case;

/// Settlement state of an invoice.
///
/// The transition graph is flat: any status may move to any other,
/// self-transitions included. Each transition is recorded in the history
/// log regardless of whether the status actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
    Overpaid,
}

impl PaymentStatus {
    /// Raw token used in serialized state and CSV export.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overpaid => "overpaid",
        }
    }

    /// True for statuses that count toward the paid total.
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::Overpaid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing one invoice/billing record tied to one
/// advertiser and one campaign. Amounts are integer yen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub area: String,
    pub campaign_name: String,
    pub amount: i64,
    pub status: PaymentStatus,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub contract_start_date: NaiveDate,
    pub contract_period: String,
    pub contract_store_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Merges the given fields into this record and refreshes `updated_at`.
    ///
    /// Field values are not re-validated here; that is the caller's
    /// responsibility. `id` and `created_at` are immutable.
    pub fn apply_update(&mut self, update: PaymentUpdate, now: DateTime<Utc>) {
        let PaymentUpdate {
            advertiser_id,
            advertiser_name,
            area,
            campaign_name,
            amount,
            status,
            invoice_date,
            due_date,
            paid_date,
            invoice_url,
            notes,
            contract_start_date,
            contract_period,
            contract_store_count,
        } = update;

        if let Some(v) = advertiser_id {
            self.advertiser_id = v;
        }
        if let Some(v) = advertiser_name {
            self.advertiser_name = v;
        }
        if let Some(v) = area {
            self.area = v;
        }
        if let Some(v) = campaign_name {
            self.campaign_name = v;
        }
        if let Some(v) = amount {
            self.amount = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = invoice_date {
            self.invoice_date = v;
        }
        if let Some(v) = due_date {
            self.due_date = v;
        }
        if let Some(v) = paid_date {
            self.paid_date = Some(v);
        }
        if let Some(v) = invoice_url {
            self.invoice_url = Some(v);
        }
        if let Some(v) = notes {
            self.notes = Some(v);
        }
        if let Some(v) = contract_start_date {
            self.contract_start_date = v;
        }
        if let Some(v) = contract_period {
            self.contract_period = v;
        }
        if let Some(v) = contract_store_count {
            self.contract_store_count = v;
        }
        self.updated_at = now;
    }

    /// Applies a recorded status transition to this record.
    ///
    /// `paid_date` is set to the transition date only when moving to `paid`
    /// with no paid date already recorded; an existing paid date is never
    /// overwritten.
    pub fn apply_transition(&mut self, entry: &PaymentStatusHistory) {
        self.status = entry.new_status;
        self.updated_at = entry.updated_at;
        if entry.new_status == PaymentStatus::Paid && self.paid_date.is_none() {
            self.paid_date = Some(entry.updated_at.date_naive());
        }
    }
}

/// Field-level partial update for a payment. `id` and `created_at` are
/// never updatable.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    pub advertiser_id: Option<String>,
    pub advertiser_name: Option<String>,
    pub area: Option<String>,
    pub campaign_name: Option<String>,
    pub amount: Option<i64>,
    pub status: Option<PaymentStatus>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub invoice_url: Option<String>,
    pub notes: Option<String>,
    pub contract_start_date: Option<NaiveDate>,
    pub contract_period: Option<String>,
    pub contract_store_count: Option<u32>,
}

/// Immutable audit record of one status transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusHistory {
    pub id: String,
    pub payment_id: String,
    pub previous_status: PaymentStatus,
    pub new_status: PaymentStatus,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaymentStatusHistory {
    /// Builds the audit entry for a transition away from the payment's
    /// current status.
    pub fn record(
        payment: &Payment,
        new_status: PaymentStatus,
        updated_by: &str,
        notes: Option<String>,
    ) -> Self {
        PaymentStatusHistory {
            id: Uuid::new_v4().to_string(),
            payment_id: payment.id.clone(),
            previous_status: payment.status,
            new_status,
            updated_by: updated_by.to_string(),
            updated_at: Utc::now(),
            notes,
        }
    }
}

/// Ephemeral filter criteria over the payment collection. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilters {
    /// Free-text search over advertiser and campaign names.
    pub search_query: String,
    /// Exact status match; `None` means all statuses.
    pub status: Option<PaymentStatus>,
    /// Substring match against the advertiser name.
    pub advertiser: String,
    /// Inclusive lower bound on the invoice date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the invoice date.
    pub date_to: Option<NaiveDate>,
}

impl PaymentFilters {
    /// Whether a payment passes every active criterion. Criteria at their
    /// default/empty value are skipped.
    pub fn matches(&self, payment: &Payment) -> bool {
        if let Some(status) = self.status {
            if payment.status != status {
                return false;
            }
        }

        let advertiser = self.advertiser.trim();
        if !advertiser.is_empty() && !contains_ignore_case(&payment.advertiser_name, advertiser) {
            return false;
        }

        if let Some(from) = self.date_from {
            if payment.invoice_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if payment.invoice_date > to {
                return false;
            }
        }

        let query = self.search_query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&payment.advertiser_name, query)
            && !contains_ignore_case(&payment.campaign_name, query)
        {
            return false;
        }

        true
    }
}

/// Aggregate statistics over the filtered payment view. Recomputed on
/// each read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub total_invoiced: i64,
    /// Sum over `paid` and `overpaid` payments.
    pub total_paid: i64,
    /// Sum over `unpaid` payments only; `pending` counts toward neither
    /// total.
    pub total_unpaid: i64,
    /// `totalPaid / totalInvoiced` as a percentage, 0 when nothing has
    /// been invoiced.
    pub payment_rate: Decimal,
    /// Current month and the five preceding months, oldest first.
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

/// Invoiced/paid subtotals for one calendar month of the trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// `YYYY-MM` label of the bucket.
    pub month: String,
    pub invoiced: i64,
    pub paid: i64,
}
