pub mod action_log;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod navigation;
pub mod pathfinding;
pub mod scoring;
pub mod session;

pub use error::{MazeError, Result};
pub use grid::{CellState, Direction, Grid, Position};
pub use navigation::{InputKind, InputState, MoveOutcome};
pub use session::{new_session, Session};
