// Terminal Sokoban.
// Controls: W/A/S/D or arrow keys to move, R to reload, L to load another level file, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' storage, '*' box on storage, '+' player on storage, ' ' floor.

use clap::Parser;
use log::{info, warn};
use sokoban_rules::cli::{Cli, Command, boundary_for};
use sokoban_rules::console_interface::ConsoleInput::*;
use sokoban_rules::console_interface::{
    ConsoleTerminal, GameRenderState, PathPrompt, PromptAction, cleanup_terminal, handle_input, read_key,
    render_game, setup_terminal,
};
use sokoban_rules::core::{Board, BoundaryPolicy, LevelError, load_level};
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().into_command() {
        Command::Play { level, open_boundary } => {
            let boundary = boundary_for(open_boundary);
            let board = load_or_default(level.as_deref(), boundary)?;
            let mut terminal = setup_terminal()?;
            let result = run_interactive(level, boundary, board, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
        Command::Print { level } => {
            let board = load_level(&level, BoundaryPolicy::default())?;
            print!("{}", board);
        }
        Command::ExportJson { level, pretty } => {
            let board = load_level(&level, BoundaryPolicy::default())?;
            println!("{}", board.snapshot_json(pretty)?);
        }
    }

    Ok(())
}

fn load_or_default(level: Option<&Path>, boundary: BoundaryPolicy) -> Result<Board, LevelError> {
    match level {
        Some(path) => load_level(path, boundary),
        None => Ok(Board::new().with_boundary(boundary)),
    }
}

fn title_for(level: Option<&Path>) -> String {
    match level {
        Some(path) => format!("Sokoban ({})", path.display()),
        None => "Sokoban".to_string(),
    }
}

fn load_failed(err: LevelError) -> String {
    warn!("level load failed: {}", err);
    format!("Could not read the level file: {}", err)
}

fn run_interactive(
    level: Option<PathBuf>,
    boundary: BoundaryPolicy,
    board: Board,
    terminal: &mut ConsoleTerminal,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = level;
    let mut title = title_for(level.as_deref());
    let mut board = board;
    let mut last_move = None;
    let mut error: Option<String> = None;
    let mut prompt: Option<PathPrompt> = None;

    loop {
        render_game(
            terminal,
            &GameRenderState {
                board: &board,
                title: &title,
                last_move,
                error: error.as_deref(),
                prompt: prompt.as_ref(),
            },
        )?;

        if let Some(editing) = prompt.as_mut() {
            let Some(code) = read_key()? else { continue };
            match editing.apply(code) {
                PromptAction::Editing => {}
                PromptAction::Cancel => prompt = None,
                PromptAction::Submit(path) => {
                    prompt = None;
                    match load_level(&path, boundary) {
                        Ok(loaded) => {
                            info!("switched to level {}", path.display());
                            title = title_for(Some(&path));
                            level = Some(path);
                            board = loaded;
                            last_move = None;
                        }
                        Err(err) => error = Some(load_failed(err)),
                    }
                }
            }
            continue;
        }

        if board.is_solved() {
            info!("level solved");
            // Keep showing the win screen until user inputs
            loop {
                match handle_input()? {
                    Timeout => {}
                    _ => break,
                }
            }
            break;
        }

        let input = handle_input()?;
        if !matches!(input, Timeout) {
            error = None;
        }
        match input {
            Quit => break,
            Reload => {
                info!("reloading level");
                match load_or_default(level.as_deref(), boundary) {
                    Ok(reloaded) => {
                        board = reloaded;
                        last_move = None;
                    }
                    Err(err) => error = Some(load_failed(err)),
                }
            }
            Load => prompt = Some(PathPrompt::default()),
            Move(direction) => {
                last_move = Some(board.step(direction));
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
