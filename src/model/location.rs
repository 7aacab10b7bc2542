//! Candidate destinations for a new or moved document

use serde::{Deserialize, Serialize};

use crate::tree::{is_full, Occupancy};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleFolder {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    /// Pages already stored in the folder
    pub current: u64,
}

impl PossibleFolder {
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::new(self.current, self.capacity)
    }

    pub fn is_full(&self) -> bool {
        is_full(self.current, self.capacity)
    }

    /// Whether `pages` more pages still fit under the capacity
    pub fn fits(&self, pages: u32) -> bool {
        self.current.saturating_add(u64::from(pages)) <= u64::from(self.capacity)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleLocker {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub folders: Vec<PossibleFolder>,
}

impl PossibleLocker {
    /// Folders that are not flagged full and can hold `pages` more pages
    pub fn open_folders(&self, pages: u32) -> impl Iterator<Item = &PossibleFolder> {
        self.folders
            .iter()
            .filter(move |f| !f.is_full() && f.fits(pages))
    }
}

/// A room with the lockers and folders that could take a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleLocation {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub lockers: Vec<PossibleLocker>,
}

impl PossibleLocation {
    /// Folders in this room that are not flagged full and can hold `pages`
    pub fn open_folders(&self, pages: u32) -> impl Iterator<Item = &PossibleFolder> {
        self.lockers
            .iter()
            .flat_map(move |locker| locker.open_folders(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, current: u64, capacity: u32) -> PossibleFolder {
        PossibleFolder {
            id: id.to_string(),
            name: id.to_string(),
            capacity,
            current,
        }
    }

    #[test]
    fn open_folders_skips_full_and_overflowing() {
        let room = PossibleLocation {
            id: "r1".to_string(),
            name: "Archive".to_string(),
            capacity: 4,
            lockers: vec![PossibleLocker {
                id: "l1".to_string(),
                name: "L-01".to_string(),
                capacity: 3,
                folders: vec![
                    folder("full", 90, 100),
                    folder("tight", 50, 100),
                    folder("roomy", 10, 100),
                ],
            }],
        };

        let ids: Vec<&str> = room.open_folders(60).map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["roomy"]);
    }

    #[test]
    fn occupancy_uses_current() {
        let f = folder("f", 80, 100);
        assert!(f.occupancy().full);
        assert_eq!(f.occupancy().to_string(), "80/100");
    }
}
