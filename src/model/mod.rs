//! Domain projections exchanged with the records API
//!
//! Every type here mirrors a JSON shape owned by the remote service. Nothing
//! is persisted locally; values live for the duration of one request.

pub mod document;
pub mod hierarchy;
pub mod location;
pub mod request;
pub mod user;

use serde::{Deserialize, Serialize};

pub use document::{
    BarcodeResponse, Category, ConfirmDocument, Document, DocumentDetail, DocumentStatus,
    MoveDocument,
};
pub use hierarchy::{
    CreateDepartment, CreateFolder, CreateLocker, CreateRoom, Department, DepartmentTree, Folder,
    FolderTree, Locker, LockerTree, Room, RoomTree, UpdateDepartment, UpdateFolder, UpdateLocker,
    UpdateRoom,
};
pub use location::{PossibleFolder, PossibleLocation, PossibleLocker};
pub use request::{
    AnalysisData, BorrowRequest, CreateBorrowRequest, CreateImportRequest, DocumentDraft,
    ImportRequest, Reject, RequestFilter, RequestStatus, RequestedDocument, Requester,
    VerifyRequest,
};
pub use user::{Role, User};

/// Reference to another entity by id, as the API nests it in payloads
/// (`{"folder": {"id": "..."}}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: String,
}

/// Id plus display name, used for the location path of a document detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}
