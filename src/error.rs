use thiserror::Error;

/// Errors produced while configuring or generating a maze session.
///
/// Rejected moves are not errors; they are reported through
/// [`crate::navigation::MoveOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum MazeError {
    /// Difficulty outside the supported range.
    #[error("difficulty {difficulty} is out of range (expected {min}..={max})")]
    InvalidDifficulty { difficulty: u32, min: u32, max: u32 },

    /// Grid too small to hold distinct start and end columns.
    #[error("grid {width}x{height} is too small (need at least {min_width}x{min_height})")]
    GridTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    /// A hand-built session named an endpoint outside the grid.
    #[error("endpoint ({x}, {y}) is outside the grid")]
    EndpointOutOfBounds { x: i32, y: i32 },

    /// A hand-built session named an endpoint that is not an open cell.
    #[error("endpoint ({x}, {y}) is not an open cell")]
    EndpointNotOpen { x: i32, y: i32 },

    /// Rejection sampling gave up.
    #[error("no solvable {width}x{height} maze found after {attempts} attempts")]
    GenerationExhausted {
        width: i32,
        height: i32,
        attempts: u32,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
