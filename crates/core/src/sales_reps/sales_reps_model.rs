//! Sales representative domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::utils::contains_ignore_case;

/// Domain model representing a contracted sales representative.
/// `sales_total` and `incentive_amount` are integer yen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesRep {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub area: String,
    pub notes: String,
    pub sales_total: i64,
    pub incentive_amount: i64,
    /// Advertiser ids this representative brought in.
    pub contracted_advertisers: Vec<String>,
    /// Placement-location ids this representative signed.
    pub contracted_ad_locations: Vec<String>,
    pub created_at: NaiveDate,
}

/// Input model for registering a new sales representative.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesRep {
    pub name: String,
    pub contact: String,
    pub area: String,
    pub notes: String,
    pub sales_total: i64,
    pub incentive_amount: i64,
    pub contracted_advertisers: Vec<String>,
    pub contracted_ad_locations: Vec<String>,
}

impl NewSalesRep {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        Ok(())
    }

    /// Assigns an identifier and registration date, producing the stored
    /// record.
    pub fn into_sales_rep(self, today: NaiveDate) -> SalesRep {
        SalesRep {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            contact: self.contact,
            area: self.area,
            notes: self.notes,
            sales_total: self.sales_total,
            incentive_amount: self.incentive_amount,
            contracted_advertisers: self.contracted_advertisers,
            contracted_ad_locations: self.contracted_ad_locations,
            created_at: today,
        }
    }
}

/// Field-level partial update for a sales representative.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepUpdate {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub area: Option<String>,
    pub notes: Option<String>,
    pub sales_total: Option<i64>,
    pub incentive_amount: Option<i64>,
    pub contracted_advertisers: Option<Vec<String>>,
    pub contracted_ad_locations: Option<Vec<String>>,
}

impl SalesRep {
    /// Merges the given fields into this record. `id` and `created_at`
    /// are immutable.
    pub fn apply_update(&mut self, update: SalesRepUpdate) {
        let SalesRepUpdate {
            name,
            contact,
            area,
            notes,
            sales_total,
            incentive_amount,
            contracted_advertisers,
            contracted_ad_locations,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = contact {
            self.contact = v;
        }
        if let Some(v) = area {
            self.area = v;
        }
        if let Some(v) = notes {
            self.notes = v;
        }
        if let Some(v) = sales_total {
            self.sales_total = v;
        }
        if let Some(v) = incentive_amount {
            self.incentive_amount = v;
        }
        if let Some(v) = contracted_advertisers {
            self.contracted_advertisers = v;
        }
        if let Some(v) = contracted_ad_locations {
            self.contracted_ad_locations = v;
        }
    }

    /// Whether this representative matches the free-text query over name,
    /// area, and contact.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        contains_ignore_case(&self.name, query)
            || contains_ignore_case(&self.area, query)
            || contains_ignore_case(&self.contact, query)
    }
}
