use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::ad_locations::AdLocationRepositoryTrait;
use crate::advertisers::AdvertiserRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::payments::{PaymentRepositoryTrait, PaymentStatus};
use crate::sales_reps::SalesRepRepositoryTrait;

use super::reports_model::{DashboardStats, RevenueReport};

/// Trait for report generation.
pub trait ReportsServiceTrait: Send + Sync {
    fn revenue_report(&self) -> Result<RevenueReport>;
    fn dashboard_stats(&self) -> Result<DashboardStats>;
}

/// Read-only aggregation across the domain stores.
pub struct ReportsService {
    ad_location_repository: Arc<dyn AdLocationRepositoryTrait>,
    advertiser_repository: Arc<dyn AdvertiserRepositoryTrait>,
    payment_repository: Arc<dyn PaymentRepositoryTrait>,
    sales_rep_repository: Arc<dyn SalesRepRepositoryTrait>,
}

impl ReportsService {
    pub fn new(
        ad_location_repository: Arc<dyn AdLocationRepositoryTrait>,
        advertiser_repository: Arc<dyn AdvertiserRepositoryTrait>,
        payment_repository: Arc<dyn PaymentRepositoryTrait>,
        sales_rep_repository: Arc<dyn SalesRepRepositoryTrait>,
    ) -> Self {
        ReportsService {
            ad_location_repository,
            advertiser_repository,
            payment_repository,
            sales_rep_repository,
        }
    }

    fn in_current_month(date: NaiveDate, today: NaiveDate) -> bool {
        date.year() == today.year() && date.month() == today.month()
    }
}

impl ReportsServiceTrait for ReportsService {
    fn revenue_report(&self) -> Result<RevenueReport> {
        debug!("Building revenue report");
        let locations = self.ad_location_repository.get_ad_locations()?;
        let advertisers = self.advertiser_repository.get_advertisers()?;

        let monthly_revenue: i64 = locations.iter().map(|l| l.fee).sum();
        let annual_revenue = monthly_revenue * 12;

        let mut revenue_by_type: HashMap<String, i64> = HashMap::new();
        for location in &locations {
            *revenue_by_type
                .entry(location.business_type.clone())
                .or_insert(0) += location.fee;
        }

        let total_advertiser_budget: i64 = advertisers.iter().map(|a| a.budget).sum();

        let (average_fee, agreement_rate) = if locations.is_empty() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let count = Decimal::from(locations.len());
            let agreed = locations.iter().filter(|l| l.has_agreement).count();
            (
                (Decimal::from(monthly_revenue) / count).round_dp(DISPLAY_DECIMAL_PRECISION),
                (Decimal::from(agreed) / count * Decimal::from(100))
                    .round_dp(DISPLAY_DECIMAL_PRECISION),
            )
        };

        Ok(RevenueReport {
            monthly_revenue,
            annual_revenue,
            revenue_by_type,
            total_advertiser_budget,
            average_fee,
            agreement_rate,
        })
    }

    fn dashboard_stats(&self) -> Result<DashboardStats> {
        let today = Utc::now().date_naive();

        let new_sales_reps = self
            .sales_rep_repository
            .get_sales_reps()?
            .iter()
            .filter(|r| Self::in_current_month(r.created_at, today))
            .count();
        let new_ad_locations = self
            .ad_location_repository
            .get_ad_locations()?
            .iter()
            .filter(|l| Self::in_current_month(l.created_at, today))
            .count();
        let new_advertisers = self
            .advertiser_repository
            .get_advertisers()?
            .iter()
            .filter(|a| Self::in_current_month(a.created_at, today))
            .count();

        // Revenue counts settled invoices by their due month, matching the
        // dashboard's cash-in view. Overpaid records are excluded.
        let monthly_revenue: i64 = self
            .payment_repository
            .get_payments()?
            .iter()
            .filter(|p| {
                p.status == PaymentStatus::Paid && Self::in_current_month(p.due_date, today)
            })
            .map(|p| p.amount)
            .sum();

        Ok(DashboardStats {
            new_sales_reps,
            new_ad_locations,
            new_advertisers,
            monthly_revenue,
        })
    }
}
