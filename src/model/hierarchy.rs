//! Department, room, locker and folder projections
//!
//! Flat variants come from the list endpoints (`/rooms/?departmentId=`),
//! `*Tree` variants from `/trees`, which nests every level down to documents.

use serde::{Deserialize, Serialize};

use super::{Document, IdRef};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locker {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locker: Option<Locker>,
    /// Pages already stored, when the server computed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTree {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RoomTree>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTree {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub lockers: Vec<LockerTree>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerTree {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub folders: Vec<FolderTree>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateDepartment {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: u32,
    pub department: IdRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateRoom {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateLocker {
    pub name: String,
    pub capacity: u32,
    pub room: IdRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateLocker {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateFolder {
    pub name: String,
    pub capacity: u32,
    pub locker: IdRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateFolder {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}
