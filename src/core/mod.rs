mod board;
mod consts;
mod entities;
mod error;
mod level;
mod location;
mod snapshot;

pub use board::{Board, BoardBuilder, BoundaryPolicy, MoveOutcome};
pub use consts::*;
pub use entities::{EntityId, GameBox, Movable, Player, Storage, Wall};
pub use error::{BoardError, EntityKind, LevelError};
pub use level::{load_level, parse_level, parse_level_with_boundary};
pub use location::{Direction, Location};
pub use snapshot::BoardSnapshot;
