//! Borrow and import request workflows
//!
//! Requests move PENDING -> APPROVED/REJECTED -> DONE/CANCELED/EXPIRED. The
//! transitions happen server-side; this layer only reads the status and
//! triggers actions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::IdRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Done,
    Canceled,
    Expired,
}

impl RequestStatus {
    /// Only pending requests can be approved or rejected
    pub fn is_pending(self) -> bool {
        self == RequestStatus::Pending
    }

    /// No further transition is possible
    pub fn is_final(self) -> bool {
        matches!(
            self,
            RequestStatus::Rejected
                | RequestStatus::Done
                | RequestStatus::Canceled
                | RequestStatus::Expired
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Done => "DONE",
            RequestStatus::Canceled => "CANCELED",
            RequestStatus::Expired => "EXPIRED",
        }
    }

    /// Display label used on request cards
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Done => "Done",
            RequestStatus::Canceled => "Canceled",
            RequestStatus::Expired => "Expired",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Requester {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedDocument {
    pub id: String,
    pub name: String,
}

/// A borrow request as listed by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub status: RequestStatus,
    pub document: RequestedDocument,
    pub created_by: Requester,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrow_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,
}

/// An import request as listed by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub status: RequestStatus,
    pub document: RequestedDocument,
    pub created_by: Requester,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowRequest {
    pub document: IdRef,
    pub description: String,
    pub start_date: DateTime<Utc>,
    /// Loan length in days
    pub borrow_duration: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub name: String,
    pub description: String,
    pub num_of_pages: u32,
    pub folder: IdRef,
    pub category: IdRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateImportRequest {
    pub document: DocumentDraft,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reject {
    pub id: String,
    pub rejected_reason: String,
}

/// Payload of a scanned QR code confirming a request at the counter
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "QRCode")]
    pub qr_code: String,
}

/// Listing filter; unset fields are left out of the query string
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub created_by: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<u32>,
}

impl RequestFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(created_by) = self.created_by.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("createdBy", created_by.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// One bucket of the import/borrow dashboard charts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub name: String,
    #[serde(deserialize_with = "count_from_str_or_int")]
    pub count: u64,
}

// The analysis endpoints return counts as strings (SQL COUNT through JSON).
fn count_from_str_or_int<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
