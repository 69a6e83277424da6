use serde::Serialize;
use crate::core::board::Board;
use crate::core::entities::Movable;
use crate::core::location::Location;

/// Serializable view of a board for external renderers. Entity lists are sorted by location.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub player: Location,
    pub walls: Vec<Location>,
    pub boxes: Vec<Location>,
    pub storage: Vec<Location>,
    pub solved: bool,
}

fn sorted(locations: impl Iterator<Item = Location>) -> Vec<Location> {
    let mut locations: Vec<Location> = locations.collect();
    locations.sort_unstable();
    locations
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width(),
            height: self.height(),
            player: self.player().location(),
            walls: sorted(self.walls().map(|w| w.location())),
            boxes: sorted(self.boxes().map(|b| b.location())),
            storage: sorted(self.storage().map(|s| s.location())),
            solved: self.is_solved(),
        }
    }

    pub fn snapshot_json(&self, pretty: bool) -> serde_json::Result<String> {
        let snapshot = self.snapshot();
        if pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        }
    }
}
