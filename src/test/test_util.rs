pub use dissimilar::diff as __diff;
use crate::core::{Board, Direction, Location, MoveOutcome, Movable, parse_level};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Level text as written in a raw string literal, without the surrounding blank lines.
pub fn level_text(level: &str) -> &str {
    level.trim_matches('\n')
}

pub struct GameTestState {
    pub board: Board,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let board = parse_level(level_text(level))
            .unwrap_or_else(|err| panic!("could not parse level {:?}: {}", level, err));
        Self { board }
    }

    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn game_to_string(&self) -> String {
        self.board.to_string().trim_matches('\n').into()
    }

    pub fn player(&self) -> Location {
        self.board.player().location()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.board.step(direction);
        if !outcome.is_moved() {
            panic!("Expected {:?} to move, was blocked in map\n{}", direction, self.game_to_string());
        }
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Asserts the move is blocked and that nothing on the board changed.
    pub fn assert_blocked(&mut self, direction: Direction) {
        let before = self.game_to_string();
        let player_before = self.player();
        let outcome = self.board.step(direction);
        assert_eq!(outcome, MoveOutcome::Blocked, "Expected {:?} to be blocked in map\n{}", direction, before);
        assert_eq!(player_before, self.player());
        let after = self.game_to_string();
        assert_eq_text!(before.as_str(), after.as_str());
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.board.step(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(level_text(expected), actual.as_str());
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
