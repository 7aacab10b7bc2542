//! Hierarchy tree model
//!
//! Rolls up the load of every container in a department tree and flags the
//! ones at or above the fullness threshold. Rooms and lockers count their
//! immediate children; folders sum the pages of their documents. The flag is
//! a highlighting hint only and never blocks a write.

use serde::Serialize;
use std::fmt;

use crate::model::{Document, DepartmentTree, FolderTree, LockerTree, RoomTree};

/// Fraction of capacity at which a container is flagged full, as
/// `FULL_NUMERATOR / FULL_DENOMINATOR`.
pub const FULL_NUMERATOR: u128 = 4;
pub const FULL_DENOMINATOR: u128 = 5;

/// The same threshold as a float, for clients that render it
pub const FULLNESS_THRESHOLD: f64 = 0.8;

/// Sum of `numOfPages` over the folder's documents, 0 when empty.
pub fn folder_load(folder: &FolderTree) -> u64 {
    pages(&folder.documents)
}

fn pages(documents: &[Document]) -> u64 {
    documents.iter().map(|d| u64::from(d.num_of_pages)).sum()
}

pub fn locker_load(locker: &LockerTree) -> u64 {
    locker.folders.len() as u64
}

pub fn room_load(room: &RoomTree) -> u64 {
    room.lockers.len() as u64
}

/// Folder `id` anywhere in the trees
pub fn find_folder<'a>(trees: &'a [DepartmentTree], id: &str) -> Option<&'a FolderTree> {
    trees
        .iter()
        .flat_map(|d| &d.rooms)
        .flat_map(|r| &r.lockers)
        .flat_map(|l| &l.folders)
        .find(|f| f.id == id)
}

/// `load / capacity >= 0.8`, computed exactly in integers.
///
/// A zero capacity is always full: nothing more should be placed there.
pub fn is_full(load: u64, capacity: u32) -> bool {
    if capacity == 0 {
        return true;
    }
    u128::from(load) * FULL_DENOMINATOR >= u128::from(capacity) * FULL_NUMERATOR
}

/// Load against capacity for one container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub load: u64,
    pub capacity: u32,
    pub full: bool,
}

impl Occupancy {
    pub fn new(load: u64, capacity: u32) -> Self {
        Self {
            load,
            capacity,
            full: is_full(load, capacity),
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.load, self.capacity)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnotatedDepartment {
    pub id: String,
    pub name: String,
    pub rooms: Vec<AnnotatedRoom>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnotatedRoom {
    pub id: String,
    pub name: String,
    pub occupancy: Occupancy,
    pub lockers: Vec<AnnotatedLocker>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnotatedLocker {
    pub id: String,
    pub name: String,
    pub occupancy: Occupancy,
    pub folders: Vec<AnnotatedFolder>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnotatedFolder {
    pub id: String,
    pub name: String,
    pub occupancy: Occupancy,
    pub documents: Vec<Document>,
}

/// Attach an occupancy to every room, locker and folder of the trees.
pub fn annotate(trees: Vec<DepartmentTree>) -> Vec<AnnotatedDepartment> {
    trees.into_iter().map(annotate_department).collect()
}

fn annotate_department(dept: DepartmentTree) -> AnnotatedDepartment {
    AnnotatedDepartment {
        id: dept.id,
        name: dept.name,
        rooms: dept.rooms.into_iter().map(annotate_room).collect(),
    }
}

fn annotate_room(room: RoomTree) -> AnnotatedRoom {
    let occupancy = Occupancy::new(room_load(&room), room.capacity);
    AnnotatedRoom {
        id: room.id,
        name: room.name,
        occupancy,
        lockers: room.lockers.into_iter().map(annotate_locker).collect(),
    }
}

fn annotate_locker(locker: LockerTree) -> AnnotatedLocker {
    let occupancy = Occupancy::new(locker_load(&locker), locker.capacity);
    AnnotatedLocker {
        id: locker.id,
        name: locker.name,
        occupancy,
        folders: locker.folders.into_iter().map(annotate_folder).collect(),
    }
}

fn annotate_folder(folder: FolderTree) -> AnnotatedFolder {
    let occupancy = Occupancy::new(folder_load(&folder), folder.capacity);
    AnnotatedFolder {
        id: folder.id,
        name: folder.name,
        occupancy,
        documents: folder.documents,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Room,
    Locker,
    Folder,
}

/// A flagged container with the names leading to it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FullContainer {
    pub kind: ContainerKind,
    pub id: String,
    pub path: Vec<String>,
    pub occupancy: Occupancy,
}

/// Every flagged container, in tree order (parents before children).
pub fn full_containers(departments: &[AnnotatedDepartment]) -> Vec<FullContainer> {
    let mut out = Vec::new();
    for dept in departments {
        for room in &dept.rooms {
            let room_path = vec![dept.name.clone(), room.name.clone()];
            if room.occupancy.full {
                out.push(FullContainer {
                    kind: ContainerKind::Room,
                    id: room.id.clone(),
                    path: room_path.clone(),
                    occupancy: room.occupancy,
                });
            }
            for locker in &room.lockers {
                let mut locker_path = room_path.clone();
                locker_path.push(locker.name.clone());
                if locker.occupancy.full {
                    out.push(FullContainer {
                        kind: ContainerKind::Locker,
                        id: locker.id.clone(),
                        path: locker_path.clone(),
                        occupancy: locker.occupancy,
                    });
                }
                for folder in locker.folders.iter().filter(|f| f.occupancy.full) {
                    let mut folder_path = locker_path.clone();
                    folder_path.push(folder.name.clone());
                    out.push(FullContainer {
                        kind: ContainerKind::Folder,
                        id: folder.id.clone(),
                        path: folder_path,
                        occupancy: folder.occupancy,
                    });
                }
            }
        }
    }
    out
}
