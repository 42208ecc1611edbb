//! Inbound inquiry domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

/// Who sent an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SenderType {
    Advertiser,
    SalesRep,
    AdLocation,
    General,
}

/// Handling state of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Unread,
    Read,
    Resolved,
    Pending,
}

/// Triage priority of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
}

/// Domain model representing one inbound inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub sender_type: SenderType,
    pub subject: String,
    pub content: String,
    pub status: InquiryStatus,
    pub priority: InquiryPriority,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep_id: Option<String>,
}

/// Status criterion for the inquiry list.
///
/// `Outstanding` is the 未対応 bucket: it selects unread and read
/// inquiries together. The literal `pending` status is reachable only
/// through `All`, mirroring the list screen this was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryStatusFilter {
    #[default]
    All,
    Unread,
    Read,
    Resolved,
    Outstanding,
}

impl InquiryStatusFilter {
    pub fn matches(&self, status: InquiryStatus) -> bool {
        match self {
            InquiryStatusFilter::All => true,
            InquiryStatusFilter::Unread => status == InquiryStatus::Unread,
            InquiryStatusFilter::Read => status == InquiryStatus::Read,
            InquiryStatusFilter::Resolved => status == InquiryStatus::Resolved,
            InquiryStatusFilter::Outstanding => {
                matches!(status, InquiryStatus::Unread | InquiryStatus::Read)
            }
        }
    }
}

/// Ephemeral filter criteria over the inquiry collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryFilters {
    pub search_query: String,
    pub status: InquiryStatusFilter,
    /// Exact priority match; `None` means all priorities.
    pub priority: Option<InquiryPriority>,
    /// Exact sender-type match; `None` means all sender types.
    pub sender_type: Option<SenderType>,
}

impl InquiryFilters {
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        if !self.status.matches(inquiry.status) {
            return false;
        }

        if let Some(priority) = self.priority {
            if inquiry.priority != priority {
                return false;
            }
        }

        if let Some(sender_type) = self.sender_type {
            if inquiry.sender_type != sender_type {
                return false;
            }
        }

        let query = self.search_query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&inquiry.sender_name, query)
            && !contains_ignore_case(&inquiry.subject, query)
            && !contains_ignore_case(&inquiry.sender_email, query)
        {
            return false;
        }

        true
    }
}
