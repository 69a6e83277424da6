use std::fmt;
use serde::Serialize;

/// A square on the board. The positive x-direction points right, the positive y-direction points down.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize)]
pub struct Location {
    x: i32,
    y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Location {
        Location { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn left(&self) -> Location {
        self.step(Direction::Left)
    }

    pub fn right(&self) -> Location {
        self.step(Direction::Right)
    }

    pub fn up(&self) -> Location {
        self.step(Direction::Up)
    }

    pub fn down(&self) -> Location {
        self.step(Direction::Down)
    }

    /// The neighbouring location one square away in `direction`.
    pub fn step(&self, direction: Direction) -> Location {
        let (dx, dy) = direction.offset();
        // saturates at the edge of the coordinate space, where the step becomes a no-op
        Location { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    /// True when `other` is exactly one square left, right, above or below.
    /// Diagonal neighbours are not adjacent.
    pub fn is_adjacent_to(&self, other: &Location) -> bool {
        matches!((self.x.abs_diff(other.x), self.y.abs_diff(other.y)), (0, 1) | (1, 0))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.x, self.y)
    }
}
