//! Advertisement placement location domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::utils::contains_ignore_case;

/// Domain model representing one shop/venue where advertisements are
/// placed. `fee` is the monthly placement fee in integer yen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub business_type: String,
    pub has_agreement: bool,
    pub fee: i64,
    pub contact_person: String,
    pub contact_info: String,
    pub created_at: NaiveDate,
}

/// Input model for registering a new placement location.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAdLocation {
    pub name: String,
    pub address: String,
    pub business_type: String,
    pub has_agreement: bool,
    pub fee: i64,
    pub contact_person: String,
    pub contact_info: String,
}

impl NewAdLocation {
    /// Validates the registration input.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.fee < 0 {
            return Err(ValidationError::NegativeAmount(self.fee));
        }
        Ok(())
    }

    /// Assigns an identifier and registration date, producing the stored
    /// record.
    pub fn into_ad_location(self, today: NaiveDate) -> AdLocation {
        AdLocation {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            address: self.address,
            business_type: self.business_type,
            has_agreement: self.has_agreement,
            fee: self.fee,
            contact_person: self.contact_person,
            contact_info: self.contact_info,
            created_at: today,
        }
    }
}

/// Field-level partial update for a placement location.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdLocationUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<String>,
    pub has_agreement: Option<bool>,
    pub fee: Option<i64>,
    pub contact_person: Option<String>,
    pub contact_info: Option<String>,
}

impl AdLocation {
    /// Merges the given fields into this record. `id` and `created_at`
    /// are immutable.
    pub fn apply_update(&mut self, update: AdLocationUpdate) {
        let AdLocationUpdate {
            name,
            address,
            business_type,
            has_agreement,
            fee,
            contact_person,
            contact_info,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = business_type {
            self.business_type = v;
        }
        if let Some(v) = has_agreement {
            self.has_agreement = v;
        }
        if let Some(v) = fee {
            self.fee = v;
        }
        if let Some(v) = contact_person {
            self.contact_person = v;
        }
        if let Some(v) = contact_info {
            self.contact_info = v;
        }
    }

    /// Area label used by the area filter, derived from the address.
    pub fn area_label(&self) -> String {
        area_label(&self.address)
    }
}

/// Derives the area label from a full address. Ward addresses yield the
/// `…区` segment after the prefecture; other addresses fall back to their
/// `…市` prefix. Addresses without a prefecture prefix keep the full
/// segment before the ward marker.
pub fn area_label(address: &str) -> String {
    if let Some((before_ward, _)) = address.split_once('区') {
        let ward = before_ward
            .split_once('都')
            .map(|(_, rest)| rest)
            .unwrap_or(before_ward);
        format!("{}区", ward)
    } else {
        let city = address.split('市').next().unwrap_or(address);
        format!("{}市", city)
    }
}

/// Ephemeral filter criteria over the placement-location collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdLocationFilters {
    pub search_query: String,
    /// Keep locations whose address contains any selected area label;
    /// empty means no area restriction.
    pub selected_areas: Vec<String>,
}

impl AdLocationFilters {
    pub fn matches(&self, location: &AdLocation) -> bool {
        if !self.selected_areas.is_empty()
            && !self
                .selected_areas
                .iter()
                .any(|area| location.address.contains(area.as_str()))
        {
            return false;
        }

        let query = self.search_query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&location.name, query)
            && !contains_ignore_case(&location.address, query)
            && !contains_ignore_case(&location.business_type, query)
        {
            return false;
        }

        true
    }
}
