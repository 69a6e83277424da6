use serde::Serialize;
use crate::core::location::{Direction, Location};

/// Stable identity of an entity within one board. Ids are handed out at construction time and never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct EntityId(pub u32);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Wall {
    id: EntityId,
    location: Location,
}

/// A target square. The level is solved once every storage location holds a box.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Storage {
    id: EntityId,
    location: Location,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct GameBox {
    id: EntityId,
    location: Location,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Player {
    id: EntityId,
    location: Location,
}

impl Wall {
    pub fn new(id: EntityId, location: Location) -> Wall {
        Wall { id, location }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

impl Storage {
    pub fn new(id: EntityId, location: Location) -> Storage {
        Storage { id, location }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

impl GameBox {
    pub fn new(id: EntityId, location: Location) -> GameBox {
        GameBox { id, location }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Player {
    /// Every board has exactly one player, and it always takes this id.
    pub const ID: EntityId = EntityId(0);

    pub fn new(location: Location) -> Player {
        Player { id: Player::ID, location }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

/// Move contract shared by the entities that can change location during play.
///
/// `move_to` is the validated entry point: it only accepts a target adjacent to the current location.
/// The directional moves are unconditional, since a single step is adjacent by construction.
pub trait Movable {
    fn location(&self) -> Location;

    fn set_location(&mut self, location: Location);

    fn move_to(&mut self, target: Location) -> bool {
        if !self.location().is_adjacent_to(&target) {
            return false;
        }
        self.set_location(target);
        true
    }

    fn shift(&mut self, direction: Direction) {
        let next = self.location().step(direction);
        self.set_location(next);
    }

    fn move_left(&mut self) {
        self.shift(Direction::Left)
    }

    fn move_right(&mut self) {
        self.shift(Direction::Right)
    }

    fn move_up(&mut self) {
        self.shift(Direction::Up)
    }

    fn move_down(&mut self) {
        self.shift(Direction::Down)
    }
}

impl Movable for GameBox {
    fn location(&self) -> Location {
        self.location
    }

    fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl Movable for Player {
    fn location(&self) -> Location {
        self.location
    }

    fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}
