use std::time::Duration;
use crate::core::location::Location;

pub const DEFAULT_WIDTH: i32 = 11;
pub const DEFAULT_HEIGHT: i32 = 11;
pub const DEFAULT_PLAYER: Location = Location::new(4, 5);
pub const DEFAULT_BOX: Location = Location::new(5, 5);
pub const DEFAULT_STORAGE: Location = Location::new(6, 5);

pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
