use std::collections::HashMap;
use std::fmt;
use log::debug;
use crate::core::consts::{DEFAULT_BOX, DEFAULT_HEIGHT, DEFAULT_PLAYER, DEFAULT_STORAGE, DEFAULT_WIDTH};
use crate::core::entities::{EntityId, GameBox, Movable, Player, Storage, Wall};
use crate::core::error::{BoardError, EntityKind};
use crate::core::location::{Direction, Location};

/// How squares outside `[0, width) x [0, height)` behave.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BoundaryPolicy {
    /// Out-of-bounds squares count as occupied, as if the board were ringed by walls.
    #[default]
    Enclosed,
    /// Out-of-bounds squares are free unless an entity is there.
    Open,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Walked,
    Pushed { from: Location, to: Location },
    Blocked,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// A Sokoban level: one player plus walls, boxes and storage locations.
///
/// Entities are keyed by location, so every query is a map lookup. Walls and storage never change
/// after construction; boxes and the player only change through the directed moves.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    boundary: BoundaryPolicy,
    player: Player,
    walls: HashMap<Location, Wall>,
    boxes: HashMap<Location, GameBox>,
    storage: HashMap<Location, Storage>,
}

impl Board {
    /// The built-in 11x11 level: a player with a box and a storage location directly to its right.
    pub fn new() -> Board {
        let mut boxes = HashMap::new();
        boxes.insert(DEFAULT_BOX, GameBox::new(EntityId(1), DEFAULT_BOX));
        let mut storage = HashMap::new();
        storage.insert(DEFAULT_STORAGE, Storage::new(EntityId(2), DEFAULT_STORAGE));

        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            boundary: BoundaryPolicy::default(),
            player: Player::new(DEFAULT_PLAYER),
            walls: HashMap::new(),
            boxes,
            storage,
        }
    }

    pub fn builder(width: i32, height: i32) -> BoardBuilder {
        BoardBuilder::new(width, height)
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Board {
        self.boundary = boundary;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &GameBox> {
        self.boxes.values()
    }

    pub fn storage(&self) -> impl Iterator<Item = &Storage> {
        self.storage.values()
    }

    pub fn get_box(&self, loc: &Location) -> Option<&GameBox> {
        self.boxes.get(loc)
    }

    pub fn contains(&self, loc: &Location) -> bool {
        loc.x() >= 0 && loc.x() < self.width && loc.y() >= 0 && loc.y() < self.height
    }

    /// True if a wall, box or the player is at `loc`. Storage alone does not occupy a square.
    pub fn is_occupied(&self, loc: &Location) -> bool {
        if self.boundary == BoundaryPolicy::Enclosed && !self.contains(loc) {
            return true;
        }
        self.has_box(loc) || self.has_wall(loc) || self.has_player(loc)
    }

    pub fn is_free(&self, loc: &Location) -> bool {
        !self.is_occupied(loc)
    }

    pub fn has_wall(&self, loc: &Location) -> bool {
        self.walls.contains_key(loc)
    }

    pub fn has_box(&self, loc: &Location) -> bool {
        self.boxes.contains_key(loc)
    }

    pub fn has_storage(&self, loc: &Location) -> bool {
        self.storage.contains_key(loc)
    }

    pub fn has_player(&self, loc: &Location) -> bool {
        self.player.location() == *loc
    }

    /// True when every storage location holds a box. A board without storage is trivially solved.
    pub fn is_solved(&self) -> bool {
        self.storage.keys().all(|loc| self.has_box(loc))
    }

    pub fn boxes_on_storage(&self) -> usize {
        self.storage.keys().filter(|loc| self.has_box(loc)).count()
    }

    pub fn move_player_left(&mut self) -> bool {
        self.move_player(Direction::Left)
    }

    pub fn move_player_right(&mut self) -> bool {
        self.move_player(Direction::Right)
    }

    pub fn move_player_up(&mut self) -> bool {
        self.move_player(Direction::Up)
    }

    pub fn move_player_down(&mut self) -> bool {
        self.move_player(Direction::Down)
    }

    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.step(direction).is_moved()
    }

    /// Moves the player one square in `direction`, pushing a box out of the way if the square
    /// behind it is free. A blocked move leaves the player and every box where they were.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let origin = self.player.location();
        let target = origin.step(direction);
        let beyond = target.step(direction);

        let mut pushed = None;
        if self.has_box(&target) && self.is_free(&beyond) {
            if let Some(mut game_box) = self.boxes.remove(&target) {
                game_box.shift(direction);
                self.boxes.insert(game_box.location(), game_box);
                pushed = Some(MoveOutcome::Pushed { from: target, to: beyond });
            }
        }

        // re-checked after the push: moving the box out is what frees the target
        if !self.is_free(&target) {
            debug!("player at {} blocked moving {:?}", origin, direction);
            return MoveOutcome::Blocked;
        }

        self.player.shift(direction);
        let outcome = pushed.unwrap_or(MoveOutcome::Walked);
        debug!("player moved {:?} from {} to {}: {:?}", direction, origin, target, outcome);
        outcome
    }

    fn symbol_at(&self, loc: &Location) -> char {
        let storage = self.has_storage(loc);
        if self.is_free(loc) {
            if storage { '.' } else { ' ' }
        } else if self.has_wall(loc) {
            '#'
        } else if self.has_box(loc) {
            if storage { '*' } else { '$' }
        } else if storage {
            '+'
        } else {
            '@'
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Renders the board in the level file format, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.symbol_at(&Location::new(x, y)))
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Collects entity placements and checks them before producing a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    width: i32,
    height: i32,
    boundary: BoundaryPolicy,
    player: Option<Location>,
    walls: Vec<Location>,
    boxes: Vec<Location>,
    storage: Vec<Location>,
}

impl BoardBuilder {
    pub fn new(width: i32, height: i32) -> BoardBuilder {
        BoardBuilder {
            width: width.max(0),
            height: height.max(0),
            boundary: BoundaryPolicy::default(),
            player: None,
            walls: Vec::new(),
            boxes: Vec::new(),
            storage: Vec::new(),
        }
    }

    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Places the player, replacing any earlier placement.
    pub fn player(mut self, loc: Location) -> Self {
        self.player = Some(loc);
        self
    }

    pub fn wall(mut self, loc: Location) -> Self {
        self.walls.push(loc);
        self
    }

    pub fn game_box(mut self, loc: Location) -> Self {
        self.boxes.push(loc);
        self
    }

    pub fn storage(mut self, loc: Location) -> Self {
        self.storage.push(loc);
        self
    }

    pub fn build(self) -> Result<Board, BoardError> {
        let player_loc = self.player.ok_or(BoardError::MissingPlayer)?;

        let mut solid: HashMap<Location, EntityKind> = HashMap::new();
        solid.insert(player_loc, EntityKind::Player);
        let mut claim = |loc: Location, kind: EntityKind| -> Result<(), BoardError> {
            if let Some(&existing) = solid.get(&loc) {
                return Err(BoardError::Overlap { location: loc, existing, added: kind });
            }
            solid.insert(loc, kind);
            Ok(())
        };

        // id 0 belongs to the player
        let mut next_id = Player::ID.0 + 1;
        let mut fresh_id = || {
            let id = EntityId(next_id);
            next_id += 1;
            id
        };

        let mut walls = HashMap::new();
        for loc in self.walls {
            claim(loc, EntityKind::Wall)?;
            walls.insert(loc, Wall::new(fresh_id(), loc));
        }

        let mut boxes = HashMap::new();
        for loc in self.boxes {
            claim(loc, EntityKind::Box)?;
            boxes.insert(loc, GameBox::new(fresh_id(), loc));
        }

        let mut storage = HashMap::new();
        for loc in self.storage {
            if storage.contains_key(&loc) {
                return Err(BoardError::Overlap {
                    location: loc,
                    existing: EntityKind::Storage,
                    added: EntityKind::Storage,
                });
            }
            storage.insert(loc, Storage::new(fresh_id(), loc));
        }

        Ok(Board {
            width: self.width,
            height: self.height,
            boundary: self.boundary,
            player: Player::new(player_loc),
            walls,
            boxes,
            storage,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_board_matches_builtin_level() {
        let board = Board::new();
        assert_eq!(board.width(), 11);
        assert_eq!(board.height(), 11);
        assert_eq!(board.player().location(), Location::new(4, 5));
        assert!(board.has_box(&Location::new(5, 5)));
        assert!(board.has_storage(&Location::new(6, 5)));
        assert_eq!(board.walls().count(), 0);
        assert!(!board.is_solved());
        assert_ne!(board.get_box(&DEFAULT_BOX).map(|b| b.id()), Some(board.player().id()));
    }

    #[test]
    fn default_board_solves_with_one_push() {
        let mut board = Board::new();
        assert!(board.move_player_right());
        assert!(board.is_solved());
        assert_eq!(board.player().location(), Location::new(5, 5));
    }

    #[test]
    fn builder_rejects_box_on_wall() {
        let result = Board::builder(3, 1)
            .player(Location::new(0, 0))
            .wall(Location::new(2, 0))
            .game_box(Location::new(2, 0))
            .build();
        assert_eq!(result.unwrap_err(), BoardError::Overlap {
            location: Location::new(2, 0),
            existing: EntityKind::Wall,
            added: EntityKind::Box,
        });
    }

    #[test]
    fn builder_rejects_wall_on_player() {
        let result = Board::builder(2, 1)
            .player(Location::new(0, 0))
            .wall(Location::new(0, 0))
            .build();
        assert!(matches!(result, Err(BoardError::Overlap { existing: EntityKind::Player, .. })));
    }

    #[test]
    fn builder_allows_box_on_storage() {
        let board = Board::builder(2, 1)
            .player(Location::new(0, 0))
            .game_box(Location::new(1, 0))
            .storage(Location::new(1, 0))
            .build()
            .unwrap();
        assert!(board.is_solved());
        assert_eq!(board.to_string(), "@*\n");
    }

    #[test]
    fn builder_requires_player() {
        let result = Board::builder(1, 1).build();
        assert_eq!(result.unwrap_err(), BoardError::MissingPlayer);
    }

    #[test]
    fn builder_assigns_distinct_ids() {
        let board = Board::builder(4, 1)
            .player(Location::new(0, 0))
            .game_box(Location::new(1, 0))
            .game_box(Location::new(2, 0))
            .wall(Location::new(3, 0))
            .build()
            .unwrap();
        let mut ids: Vec<EntityId> = board.boxes().map(|b| b.id())
            .chain(board.walls().map(|w| w.id()))
            .collect();
        ids.push(board.player().id());
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn enclosed_boundary_occupies_outside_squares() {
        let board = Board::new();
        assert!(board.is_occupied(&Location::new(-1, 0)));
        assert!(board.is_occupied(&Location::new(11, 0)));
        assert!(!board.has_wall(&Location::new(-1, 0)));

        let open = Board::new().with_boundary(BoundaryPolicy::Open);
        assert!(open.is_free(&Location::new(-1, 0)));
    }

    #[test]
    fn storage_alone_is_free() {
        let board = Board::new();
        assert!(board.is_free(&Location::new(6, 5)));
        assert!(board.is_occupied(&Location::new(5, 5)));
        assert!(board.is_occupied(&Location::new(4, 5)));
    }

    #[test]
    fn get_box_misses_return_none() {
        let board = Board::new();
        assert!(board.get_box(&Location::new(0, 0)).is_none());
        assert_eq!(board.get_box(&Location::new(5, 5)).map(|b| b.location()), Some(Location::new(5, 5)));
    }
}
