//! Property-based integration tests for the payment core.
//!
//! These tests verify that universal properties of filtering, summary
//! aggregation, and CSV export hold across randomly generated payment
//! collections, using the `proptest` crate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use adlocal_core::errors::Result;
use adlocal_core::payments::{
    export_payments_csv, Payment, PaymentFilters, PaymentRepositoryTrait, PaymentService,
    PaymentServiceTrait, PaymentStatus, PaymentStatusHistory, PaymentUpdate, CSV_HEADERS,
};
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a random payment status.
fn arb_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Unpaid),
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Paid),
        Just(PaymentStatus::Overpaid),
    ]
}

/// Generates a random invoice date within a two-year window.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Generates a random payment with valid structure.
fn arb_payment() -> impl Strategy<Value = Payment> {
    (
        "[a-z0-9]{4,12}",
        "[a-zA-Z ]{3,20}",
        "[a-zA-Z0-9 \"]{0,24}",
        0i64..10_000_000,
        arb_status(),
        arb_date(),
    )
        .prop_map(|(id, advertiser_name, campaign_name, amount, status, invoice_date)| {
            let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            Payment {
                id,
                advertiser_id: "adv".to_string(),
                advertiser_name,
                area: "渋谷区".to_string(),
                campaign_name,
                amount,
                status,
                invoice_date,
                due_date: invoice_date + Duration::days(30),
                paid_date: status.is_settled().then_some(invoice_date),
                invoice_url: None,
                notes: None,
                contract_start_date: invoice_date,
                contract_period: "6ヶ月".to_string(),
                contract_store_count: 1,
                created_at: created,
                updated_at: created,
            }
        })
}

// =============================================================================
// Test harness
// =============================================================================

/// Read-only repository over a fixed collection; the mutation paths are
/// not exercised by these properties.
struct FixedPaymentRepository {
    payments: Vec<Payment>,
}

#[async_trait]
impl PaymentRepositoryTrait for FixedPaymentRepository {
    fn get_payments(&self) -> Result<Vec<Payment>> {
        Ok(self.payments.clone())
    }
    fn get_payment(&self, _: &str) -> Result<Payment> {
        unimplemented!()
    }
    fn get_history(&self, _: &str) -> Result<Vec<PaymentStatusHistory>> {
        unimplemented!()
    }
    async fn update_payment(&self, _: &str, _: PaymentUpdate) -> Result<Payment> {
        unimplemented!()
    }
    async fn transition_status(&self, _: PaymentStatusHistory) -> Result<Payment> {
        unimplemented!()
    }
    async fn delete_payment(&self, _: &str) -> Result<usize> {
        unimplemented!()
    }
}

fn service_over(payments: Vec<Payment>) -> PaymentService {
    PaymentService::new(Arc::new(FixedPaymentRepository { payments }))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The filtered view is always sorted by invoice date, most recent
    /// first, and contains only matching payments.
    #[test]
    fn prop_filtered_view_sorted_and_consistent(
        payments in prop::collection::vec(arb_payment(), 0..40),
        status in prop::option::of(arb_status()),
    ) {
        let service = service_over(payments);
        service.set_status_filter(status);

        let filtered = service.filtered_payments().unwrap();
        prop_assert!(filtered
            .windows(2)
            .all(|w| w[0].invoice_date >= w[1].invoice_date));
        if let Some(status) = status {
            prop_assert!(filtered.iter().all(|p| p.status == status));
        }
    }

    /// Summary totals partition consistently and the payment rate stays
    /// within 0..=100 percent.
    #[test]
    fn prop_summary_totals_consistent(
        payments in prop::collection::vec(arb_payment(), 0..40),
    ) {
        let service = service_over(payments);
        let summary = service.payment_summary().unwrap();

        prop_assert!(summary.total_paid + summary.total_unpaid <= summary.total_invoiced);
        prop_assert!(summary.payment_rate >= Decimal::ZERO);
        prop_assert!(summary.payment_rate <= Decimal::from(100));
        prop_assert_eq!(summary.monthly_trend.len(), 6);
        for point in &summary.monthly_trend {
            prop_assert!(point.paid <= point.invoiced);
        }
    }

    /// Exported CSV always parses back with a header row plus one row per
    /// payment, each carrying the full column set — including fields with
    /// embedded quotes.
    #[test]
    fn prop_csv_round_trips(
        payments in prop::collection::vec(arb_payment(), 0..20),
    ) {
        let csv_text = export_payments_csv(&payments).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_text.as_bytes());
        prop_assert_eq!(reader.headers().unwrap().len(), CSV_HEADERS.len());

        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();
        prop_assert_eq!(rows.len(), payments.len());
        for (row, payment) in rows.iter().zip(&payments) {
            prop_assert_eq!(row.len(), CSV_HEADERS.len());
            prop_assert_eq!(&row[0], payment.id.as_str());
            prop_assert_eq!(&row[2], payment.campaign_name.as_str());
            prop_assert_eq!(&row[4], payment.status.as_str());
        }
    }

    /// A recorded transition always lands the payment on the new status
    /// and never clears an existing paid date.
    #[test]
    fn prop_transition_preserves_paid_date(
        mut payment in arb_payment(),
        new_status in arb_status(),
    ) {
        let paid_date_before = payment.paid_date;
        let entry = PaymentStatusHistory::record(&payment, new_status, "管理者", None);
        payment.apply_transition(&entry);

        prop_assert_eq!(payment.status, new_status);
        if let Some(paid_date) = paid_date_before {
            prop_assert_eq!(payment.paid_date, Some(paid_date));
        }
        prop_assert_eq!(entry.new_status, new_status);
    }

    /// Filters at their defaults never exclude anything.
    #[test]
    fn prop_default_filters_match_all(payment in arb_payment()) {
        prop_assert!(PaymentFilters::default().matches(&payment));
    }
}
