//! Random solvable maze generation.
//!
//! Mazes are produced by rejection sampling: fill the grid with coin-flip
//! walls, pick a start on the second column and an end on the second-to-last
//! column, and keep the grid only if BFS connects them. Obstacles are added
//! once the grid has been accepted.

use crate::error::{MazeError, Result};
use crate::grid::{CellState, Grid, Position};
use crate::pathfinding::{shortest_path, Path};
use log::{debug, info};
use rand::Rng;

pub const MIN_DIFFICULTY: u32 = 1;
pub const MAX_DIFFICULTY: u32 = 7;

/// Start and end columns must differ, and one interior row must exist
pub const MIN_WIDTH: i32 = 4;
pub const MIN_HEIGHT: i32 = 3;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

const BASE_WIDTH: i32 = 20;
const BASE_HEIGHT: i32 = 18;
const WIDTH_PER_LEVEL: i32 = 5;
const HEIGHT_PER_LEVEL: i32 = 3;

/// Validated maze dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeDimensions {
    width: i32,
    height: i32,
}

impl MazeDimensions {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(MazeError::GridTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        Ok(MazeDimensions { width, height })
    }

    /// Level 1 is 20x18; each level adds 5 columns and 3 rows
    pub fn for_difficulty(difficulty: u32) -> Result<Self> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(MazeError::InvalidDifficulty {
                difficulty,
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }
        let level = (difficulty - 1) as i32;
        Self::new(
            BASE_WIDTH + level * WIDTH_PER_LEVEL,
            BASE_HEIGHT + level * HEIGHT_PER_LEVEL,
        )
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// A solvable maze together with its reference path
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    /// Decorated grid (obstacles placed)
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
    /// Shortest start-to-end path, computed before obstacles were placed
    pub reference_path: Path,
    /// Number of sampled grids, including the accepted one
    pub attempts: u32,
}

#[derive(Debug, Clone)]
pub struct MazeGenerator {
    dimensions: MazeDimensions,
    max_attempts: u32,
}

impl MazeGenerator {
    pub fn new(dimensions: MazeDimensions) -> Self {
        MazeGenerator {
            dimensions,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Cap on rejection-sampling rounds; values below 1 are raised to 1
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sample grids until one is solvable, then decorate it with obstacles
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedMaze> {
        let MazeDimensions { width, height } = self.dimensions;

        for attempt in 1..=self.max_attempts {
            let mut grid = sample_grid(width, height, rng);
            let (start, end) = pick_endpoints(width, height, rng);
            grid.set_cell(start, CellState::Open);
            grid.set_cell(end, CellState::Open);

            match shortest_path(&grid, start, end) {
                Some(reference_path) => {
                    let grid = grid.decorate(&[start, end]);
                    info!(
                        "Generated {}x{} maze after {} attempt(s): start {}, end {}, reference path {} cells",
                        width,
                        height,
                        attempt,
                        start,
                        end,
                        reference_path.len()
                    );
                    return Ok(GeneratedMaze {
                        grid,
                        start,
                        end,
                        reference_path,
                        attempts: attempt,
                    });
                }
                None => debug!("attempt {}: {} unreachable from {}", attempt, end, start),
            }
        }

        Err(MazeError::GenerationExhausted {
            width,
            height,
            attempts: self.max_attempts,
        })
    }
}

/// Convenience wrapper: `generate(width, height, rng)`
pub fn generate<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<GeneratedMaze> {
    MazeGenerator::new(MazeDimensions::new(width, height)?).generate(rng)
}

/// Each cell is a wall with probability 1/2
fn sample_grid<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Grid {
    let mut grid = Grid::new(height, width);
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(0.5) {
                grid.set_cell(Position::new(x, y), CellState::Wall);
            }
        }
    }
    grid
}

/// Start on column 1, end on column width-2, both on random interior rows
fn pick_endpoints<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> (Position, Position) {
    let start = Position::new(1, rng.gen_range(1..height - 1));
    let end = Position::new(width - 2, rng.gen_range(1..height - 1));
    (start, end)
}
