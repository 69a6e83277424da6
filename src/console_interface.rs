use crate::core::{Board, Direction, INPUT_POLL_INTERVAL, MoveOutcome};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::path::PathBuf;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub struct GameRenderState<'a> {
    pub board: &'a Board,
    pub title: &'a str,
    pub last_move: Option<MoveOutcome>,
    pub error: Option<&'a str>,
    pub prompt: Option<&'a PathPrompt>,
}

pub enum ConsoleInput {
    Move(Direction),
    Reload,
    Load,
    Quit,
    Timeout,
    Unknown,
}

/// Line editor for the level path typed after pressing `L`.
#[derive(Default, Debug)]
pub struct PathPrompt {
    buffer: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PromptAction {
    Editing,
    Cancel,
    Submit(PathBuf),
}

impl PathPrompt {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn apply(&mut self, code: KeyCode) -> PromptAction {
        match code {
            KeyCode::Esc => PromptAction::Cancel,
            KeyCode::Enter => {
                let path = self.buffer.trim();
                if path.is_empty() {
                    PromptAction::Cancel
                } else {
                    PromptAction::Submit(PathBuf::from(path))
                }
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptAction::Editing
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                PromptAction::Editing
            }
            _ => PromptAction::Editing,
        }
    }
}

pub fn setup_terminal() -> Result<ConsoleTerminal, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, Hide)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut ConsoleTerminal,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(state.board.to_string())
            .block(Block::default().borders(Borders::ALL).title(state.title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instruction_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn status_line(state: &GameRenderState) -> String {
    if let Some(prompt) = state.prompt {
        return format!("Load level (Enter to load, Esc to cancel): {}_", prompt.text());
    }

    let board = state.board;
    let instructions = if board.is_solved() {
        "You Win! Press any key to quit."
    } else {
        "Controls: WASD or Arrow keys to move, R to reload, L to load, Q to quit"
    };

    let progress = format!(
        "{} | Stored: {}/{}",
        instructions,
        board.boxes_on_storage(),
        board.storage().count()
    );

    let progress = match state.last_move {
        Some(MoveOutcome::Blocked) => format!("{} | Blocked", progress),
        Some(MoveOutcome::Pushed { .. }) => format!("{} | Pushed", progress),
        _ => progress,
    };

    if let Some(err) = state.error {
        format!("{} | Error: {}", progress, err)
    } else {
        progress
    }
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reload,
        KeyCode::Char('l') | KeyCode::Char('L') => ConsoleInput::Load,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Move(Direction::Right),
        _ => ConsoleInput::Unknown,
    }
}

/// Waits one poll interval for a key press.
pub fn read_key() -> Result<Option<KeyCode>, Box<dyn std::error::Error>> {
    if event::poll(INPUT_POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(Some(code));
        }
    }
    Ok(None)
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    Ok(match read_key()? {
        Some(code) => input_from_key(code),
        None => ConsoleInput::Timeout,
    })
}
