mod autopilot;
mod board;
mod difficulty;
mod entity;
mod session;
mod types;

pub use autopilot::Autopilot;
pub use board::Board;
pub use difficulty::Difficulty;
pub use entity::{DEFAULT_START, SNAKE_INITIAL_LENGTH, Snake};
pub use session::{Scene, SnakeSession, TickOutcome};
pub use types::{Block, Cell, Direction};
