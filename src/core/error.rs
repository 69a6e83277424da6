use std::path::PathBuf;
use thiserror::Error;
use crate::core::location::Location;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no player")]
    MissingPlayer,
    #[error("level has more than one player: {first} and {second}")]
    MultiplePlayers { first: Location, second: Location },
    #[error("could not read level {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Kind of entity, used when reporting overlaps during board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wall,
    Box,
    Storage,
    Player,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cannot place {added:?} at {location}: already holds {existing:?}")]
    Overlap {
        location: Location,
        existing: EntityKind,
        added: EntityKind,
    },
    #[error("board has no player")]
    MissingPlayer,
}
