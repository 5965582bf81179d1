use crate::error::{MazeError, Result};
use crate::generator::{GeneratedMaze, MazeDimensions, MazeGenerator, DEFAULT_MAX_ATTEMPTS};
use crate::grid::{CellState, Grid, Position};
use crate::navigation::{InputKind, InputState, MoveOutcome, Navigator};
use crate::pathfinding::Path;
use crate::scoring::{PathComparison, ScoreReport};
use log::info;
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Write as _;

/// One game: a generated maze, its reference path and the agent's progress.
///
/// The grid and reference path never change after construction. The agent's
/// position and path change only through [`Session::apply_input`], and stop
/// changing once the end cell is reached.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    start: Position,
    end: Position,
    reference_path: Path,
    navigator: Navigator,
    difficulty: Option<u32>,
}

impl Session {
    /// Generate a maze for `difficulty` (1..=7) and start a session on it
    pub fn new<R: Rng + ?Sized>(difficulty: u32, rng: &mut R) -> Result<Self> {
        Self::with_max_attempts(difficulty, DEFAULT_MAX_ATTEMPTS, rng)
    }

    pub fn with_max_attempts<R: Rng + ?Sized>(
        difficulty: u32,
        max_attempts: u32,
        rng: &mut R,
    ) -> Result<Self> {
        let dimensions = MazeDimensions::for_difficulty(difficulty)?;
        let maze = MazeGenerator::new(dimensions)
            .with_max_attempts(max_attempts)
            .generate(rng)?;
        let mut session = Self::from_generated(maze);
        session.difficulty = Some(difficulty);
        Ok(session)
    }

    /// Endpoints are trusted here; outside callers go through `from_parts`
    fn from_generated(maze: GeneratedMaze) -> Self {
        let navigator = Navigator::new(&maze.grid, maze.start, maze.end);
        Session {
            grid: maze.grid,
            start: maze.start,
            end: maze.end,
            reference_path: maze.reference_path,
            navigator,
            difficulty: None,
        }
    }

    /// Start a session on a hand-built grid.
    /// Both endpoints must be in bounds and open.
    pub fn from_parts(
        grid: Grid,
        start: Position,
        end: Position,
        reference_path: Path,
    ) -> Result<Self> {
        for pos in [start, end] {
            match grid.get_cell(pos) {
                None => return Err(MazeError::EndpointOutOfBounds { x: pos.x, y: pos.y }),
                Some(CellState::Open) => {}
                Some(_) => return Err(MazeError::EndpointNotOpen { x: pos.x, y: pos.y }),
            }
        }
        Ok(Self::from_generated(GeneratedMaze {
            grid,
            start,
            end,
            reference_path,
            attempts: 0,
        }))
    }

    /// Apply one input; illegal moves are reported, not raised
    pub fn apply_input(&mut self, input: InputKind) -> MoveOutcome {
        let outcome = self.navigator.apply(&self.grid, input);
        if outcome == MoveOutcome::ReachedGoal {
            if let Some(report) = self.score_report() {
                info!(
                    "Maze completed: {} (reference {} cells, agent {} cells)",
                    report.message(),
                    report.reference_len,
                    report.agent_len
                );
            }
        }
        outcome
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn difficulty(&self) -> Option<u32> {
        self.difficulty
    }

    pub fn cell_state(&self, x: i32, y: i32) -> Option<CellState> {
        self.grid.get_cell(Position::new(x, y))
    }

    pub fn agent_position(&self) -> Position {
        self.navigator.position()
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn end_position(&self) -> Position {
        self.end
    }

    pub fn input_state(&self) -> InputState {
        self.navigator.input_state()
    }

    pub fn is_completed(&self) -> bool {
        self.navigator.is_completed()
    }

    /// Efficiency score; None until the end cell is reached
    pub fn final_score(&self) -> Option<u32> {
        self.score_report().map(|report| report.score)
    }

    pub fn score_report(&self) -> Option<ScoreReport> {
        if !self.is_completed() {
            return None;
        }
        Some(ScoreReport::new(&self.reference_path, self.navigator.path()))
    }

    pub fn reference_path(&self) -> &[usize] {
        &self.reference_path
    }

    pub fn agent_path(&self) -> &[usize] {
        self.navigator.path()
    }

    pub fn reference_path_cells(&self) -> HashSet<usize> {
        self.reference_path.iter().copied().collect()
    }

    pub fn agent_path_cells(&self) -> HashSet<usize> {
        self.navigator.path().iter().copied().collect()
    }

    pub fn path_comparison(&self) -> PathComparison {
        PathComparison::new(&self.reference_path, self.navigator.path())
    }

    /// Text rendering of the maze: `S` start, `E` end, `@` agent
    pub fn render_text(&self) -> String {
        let agent = self.agent_position();
        let mut out = String::with_capacity(self.grid.cell_count() + self.grid.rows as usize);
        for y in 0..self.grid.rows {
            for x in 0..self.grid.cols {
                let pos = Position::new(x, y);
                let symbol = if pos == agent {
                    '@'
                } else if pos == self.end {
                    'E'
                } else if pos == self.start {
                    'S'
                } else {
                    self.grid.get_cell(pos).map_or(' ', CellState::symbol)
                };
                out.push(symbol);
            }
            let _ = writeln!(out);
        }
        out
    }
}

/// Start a session for `difficulty` using the thread-local RNG
pub fn new_session(difficulty: u32) -> Result<Session> {
    Session::new(difficulty, &mut rand::thread_rng())
}
