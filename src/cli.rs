use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::core::BoundaryPolicy;

/// Terminal Sokoban.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a level interactively. Without a level the built-in board is used.
    Play {
        level: Option<PathBuf>,
        /// Let the player and boxes leave the level's bounds
        #[arg(long)]
        open_boundary: bool,
    },
    /// Parse a level and print it back in level format
    Print { level: PathBuf },
    /// Print a level as JSON
    ExportJson {
        level: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to playing the built-in board.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Play { level: None, open_boundary: false })
    }
}

pub fn boundary_for(open_boundary: bool) -> BoundaryPolicy {
    if open_boundary {
        BoundaryPolicy::Open
    } else {
        BoundaryPolicy::Enclosed
    }
}
