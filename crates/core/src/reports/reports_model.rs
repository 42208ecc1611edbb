//! Derived business reports. Recomputed on each read, never stored.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue analysis over the placement-location and advertiser
/// collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    /// Sum of monthly placement fees across all locations.
    pub monthly_revenue: i64,
    /// Monthly revenue projected over a year.
    pub annual_revenue: i64,
    /// Monthly fee subtotals keyed by business type.
    pub revenue_by_type: HashMap<String, i64>,
    pub total_advertiser_budget: i64,
    /// Mean placement fee, 0 when there are no locations.
    pub average_fee: Decimal,
    /// Percentage of locations with a signed agreement, 0 when there are
    /// no locations.
    pub agreement_rate: Decimal,
}

/// Current-month activity shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub new_sales_reps: usize,
    pub new_ad_locations: usize,
    pub new_advertisers: usize,
    /// Sum of `paid` payments whose due date falls in the current month.
    pub monthly_revenue: i64,
}
