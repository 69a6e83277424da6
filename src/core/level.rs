//! Plain-text level format.
//!
//! Tiles: `#` wall, `@` player, `$` box, `.` storage, `*` box on storage, `+` player on storage,
//! space for an empty square. Any other character is treated as empty.

use std::path::Path;
use std::str::FromStr;
use log::info;
use crate::core::board::{Board, BoundaryPolicy};
use crate::core::error::LevelError;
use crate::core::location::Location;

/// Parses a level. Height is the number of lines and width the longest line with trailing
/// spaces dropped; short lines are padded with empty squares.
pub fn parse_level(s: &str) -> Result<Board, LevelError> {
    parse_level_with_boundary(s, BoundaryPolicy::default())
}

pub fn parse_level_with_boundary(s: &str, boundary: BoundaryPolicy) -> Result<Board, LevelError> {
    let lines: Vec<&str> = s.lines().collect();
    let height = lines.len() as i32;
    let width = lines
        .iter()
        .map(|line| line.trim_end_matches(' ').chars().count())
        .max()
        .unwrap_or(0) as i32;

    let mut builder = Board::builder(width, height).boundary(boundary);
    let mut player: Option<Location> = None;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let loc = Location::new(x as i32, y as i32);
            let (has_player, has_box, has_storage, has_wall) = match ch {
                '#' => (false, false, false, true),
                '@' => (true, false, false, false),
                '+' => (true, false, true, false),
                '$' => (false, true, false, false),
                '*' => (false, true, true, false),
                '.' => (false, false, true, false),
                _ => continue,
            };

            if has_player {
                if let Some(first) = player {
                    return Err(LevelError::MultiplePlayers { first, second: loc });
                }
                player = Some(loc);
                builder = builder.player(loc);
            }
            if has_box {
                builder = builder.game_box(loc);
            }
            if has_storage {
                builder = builder.storage(loc);
            }
            if has_wall {
                builder = builder.wall(loc);
            }
        }
    }

    if player.is_none() {
        return Err(LevelError::MissingPlayer);
    }
    Ok(builder.build()?)
}

/// Reads and parses a level file.
pub fn load_level(path: impl AsRef<Path>, boundary: BoundaryPolicy) -> Result<Board, LevelError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = parse_level_with_boundary(&text, boundary)?;
    info!(
        "loaded level {} ({}x{}, {} boxes)",
        path.display(),
        board.width(),
        board.height(),
        board.boxes().count()
    );
    Ok(board)
}

impl FromStr for Board {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}
