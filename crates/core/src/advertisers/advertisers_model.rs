//! Advertiser domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::utils::contains_ignore_case;

/// Domain model representing an advertiser (a paying customer placing
/// campaigns). Budget is integer yen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    pub id: String,
    pub name: String,
    pub ad_content: String,
    pub preferred_area: Vec<String>,
    pub period: String,
    pub budget: i64,
    pub contact_person: String,
    pub contact_info: String,
    pub created_at: NaiveDate,
}

/// Input model for registering a new advertiser.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvertiser {
    pub name: String,
    pub ad_content: String,
    pub preferred_area: Vec<String>,
    pub period: String,
    pub budget: i64,
    pub contact_person: String,
    pub contact_info: String,
}

impl NewAdvertiser {
    /// Validates the registration input.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.budget < 0 {
            return Err(ValidationError::NegativeAmount(self.budget));
        }
        Ok(())
    }

    /// Assigns an identifier and registration date, producing the stored
    /// record.
    pub fn into_advertiser(self, today: NaiveDate) -> Advertiser {
        Advertiser {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            ad_content: self.ad_content,
            preferred_area: self.preferred_area,
            period: self.period,
            budget: self.budget,
            contact_person: self.contact_person,
            contact_info: self.contact_info,
            created_at: today,
        }
    }
}

/// Field-level partial update for an advertiser.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserUpdate {
    pub name: Option<String>,
    pub ad_content: Option<String>,
    pub preferred_area: Option<Vec<String>>,
    pub period: Option<String>,
    pub budget: Option<i64>,
    pub contact_person: Option<String>,
    pub contact_info: Option<String>,
}

impl Advertiser {
    /// Merges the given fields into this record. `id` and `created_at`
    /// are immutable.
    pub fn apply_update(&mut self, update: AdvertiserUpdate) {
        let AdvertiserUpdate {
            name,
            ad_content,
            preferred_area,
            period,
            budget,
            contact_person,
            contact_info,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = ad_content {
            self.ad_content = v;
        }
        if let Some(v) = preferred_area {
            self.preferred_area = v;
        }
        if let Some(v) = period {
            self.period = v;
        }
        if let Some(v) = budget {
            self.budget = v;
        }
        if let Some(v) = contact_person {
            self.contact_person = v;
        }
        if let Some(v) = contact_info {
            self.contact_info = v;
        }
    }
}

/// Ephemeral filter criteria over the advertiser collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvertiserFilters {
    pub search_query: String,
    /// Keep advertisers whose preferred areas overlap any selected area;
    /// empty means no area restriction.
    pub selected_areas: Vec<String>,
}

impl AdvertiserFilters {
    pub fn matches(&self, advertiser: &Advertiser) -> bool {
        if !self.selected_areas.is_empty() {
            let overlaps = self.selected_areas.iter().any(|area| {
                advertiser
                    .preferred_area
                    .iter()
                    .any(|preferred| contains_ignore_case(preferred, area))
            });
            if !overlaps {
                return false;
            }
        }

        let query = self.search_query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&advertiser.name, query)
            && !advertiser
                .preferred_area
                .iter()
                .any(|area| contains_ignore_case(area, query))
            && !contains_ignore_case(&advertiser.ad_content, query)
        {
            return false;
        }

        true
    }
}
