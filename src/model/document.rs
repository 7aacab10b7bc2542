//! Document records and their categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IdRef, NamedRef};

/// Lifecycle state of a physical document, as reported by the server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Available,
    Pending,
    Borrowed,
    Requesting,
    Lost,
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    /// Whether the document has a physical barcode worth showing.
    ///
    /// Documents that are pending placement, shelved or out on loan carry a
    /// label; requested or lost ones do not.
    pub fn has_barcode(self) -> bool {
        matches!(
            self,
            DocumentStatus::Pending | DocumentStatus::Available | DocumentStatus::Borrowed
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: DocumentStatus,
    pub num_of_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPath {
    pub id: String,
    pub name: String,
    pub department: DepartmentRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerPath {
    pub id: String,
    pub name: String,
    pub room: RoomPath,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderPath {
    pub id: String,
    pub name: String,
    pub locker: LockerPath,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub first_name: String,
    pub last_name: String,
}

/// Single document with its full physical location
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: DocumentStatus,
    pub num_of_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub folder: FolderPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_by: Option<Borrower>,
}

impl DocumentDetail {
    pub fn department_id(&self) -> &str {
        &self.folder.locker.room.department.id
    }

    /// Human readable location, e.g. `Finance / Archive A / L-01 / 2023`
    pub fn location_path(&self) -> String {
        let locker = &self.folder.locker;
        format!(
            "{} / {} / {} / {}",
            locker.room.department.name, locker.room.name, locker.name, self.folder.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeResponse {
    #[serde(default)]
    pub barcode: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub department: IdRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDocument {
    pub id: String,
    pub folder_id: String,
}

/// Staff confirmation that a document sits at the scanned location
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfirmDocument {
    pub id: String,
    #[serde(rename = "locationQRcode")]
    pub location_qr_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_status_does_not_fail() {
        let status: DocumentStatus = serde_json::from_value(json!("ARCHIVED")).unwrap();
        assert_eq!(status, DocumentStatus::Unknown);
    }

    #[test]
    fn barcode_visible_only_for_shelved_states() {
        assert!(DocumentStatus::Available.has_barcode());
        assert!(DocumentStatus::Pending.has_barcode());
        assert!(DocumentStatus::Borrowed.has_barcode());
        assert!(!DocumentStatus::Requesting.has_barcode());
        assert!(!DocumentStatus::Lost.has_barcode());
    }

    #[test]
    fn document_uses_camel_case_pages() {
        let doc: Document = serde_json::from_value(json!({
            "id": "doc1",
            "name": "Contract",
            "description": "Signed copy",
            "status": "AVAILABLE",
            "numOfPages": 12,
            "createdAt": "2023-11-02T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(doc.num_of_pages, 12);
        assert!(doc.created_at.is_some());
        assert!(doc.updated_at.is_none());
    }

    #[test]
    fn detail_location_path() {
        let detail: DocumentDetail = serde_json::from_value(json!({
            "id": "doc1",
            "name": "Contract",
            "status": "BORROWED",
            "numOfPages": 3,
            "folder": {
                "id": "f1", "name": "2023",
                "locker": {
                    "id": "l1", "name": "L-01",
                    "room": {
                        "id": "r1", "name": "Archive A",
                        "department": {"id": "d1", "name": "Finance"}
                    }
                }
            },
            "borrowedBy": {"firstName": "Ana", "lastName": "Ng"}
        }))
        .unwrap();
        assert_eq!(detail.department_id(), "d1");
        assert_eq!(detail.location_path(), "Finance / Archive A / L-01 / 2023");
        assert_eq!(detail.borrowed_by.unwrap().first_name, "Ana");
    }

    #[test]
    fn confirm_document_keeps_wire_name() {
        let confirm = ConfirmDocument {
            id: "doc1".to_string(),
            location_qr_code: "qr-123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(confirm).unwrap(),
            json!({"id": "doc1", "locationQRcode": "qr-123"})
        );
    }
}
