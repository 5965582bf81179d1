use crate::grid::{CellState, Direction, Grid, Position};
use crate::pathfinding::Path;
use log::debug;
use serde::{Deserialize, Serialize};

/// Discrete input accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    ArmJump,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl InputKind {
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputKind::ArmJump => None,
            InputKind::MoveUp => Some(Direction::Up),
            InputKind::MoveDown => Some(Direction::Down),
            InputKind::MoveLeft => Some(Direction::Left),
            InputKind::MoveRight => Some(Direction::Right),
        }
    }

    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputKind::MoveUp,
            Direction::Down => InputKind::MoveDown,
            Direction::Left => InputKind::MoveLeft,
            Direction::Right => InputKind::MoveRight,
        }
    }
}

/// Whether the next directional input is a step or a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputState {
    Idle,
    JumpArmed,
}

/// Result of applying one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Jump armed; the next direction is consumed as a jump
    Armed,
    Stepped,
    Jumped,
    /// Moved onto the end cell; the session is now complete
    ReachedGoal,
    /// Illegal step or jump; position and path unchanged
    Rejected,
    /// Input arrived after completion
    Ignored,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Stepped | MoveOutcome::Jumped | MoveOutcome::ReachedGoal)
    }
}

/// Tracks the agent on a fixed grid: position, full visit history and goal state
#[derive(Debug, Clone)]
pub struct Navigator {
    position: Position,
    end: Position,
    path: Path,
    state: InputState,
    completed: bool,
}

impl Navigator {
    /// Place the agent on `start`; the path begins with the start cell
    pub fn new(grid: &Grid, start: Position, end: Position) -> Self {
        Navigator {
            position: start,
            end,
            path: vec![grid.get_id(start)],
            state: InputState::Idle,
            completed: start == end,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn input_state(&self) -> InputState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Feed one input through the armed/idle state machine
    pub fn apply(&mut self, grid: &Grid, input: InputKind) -> MoveOutcome {
        if self.completed {
            return MoveOutcome::Ignored;
        }

        match (input.direction(), self.state) {
            (None, _) => {
                self.state = InputState::JumpArmed;
                MoveOutcome::Armed
            }
            (Some(direction), InputState::JumpArmed) => {
                self.state = InputState::Idle;
                self.jump(grid, direction)
            }
            (Some(direction), InputState::Idle) => self.step(grid, direction),
        }
    }

    /// Plain move onto an adjacent open cell
    pub fn step(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.completed {
            return MoveOutcome::Ignored;
        }
        match step_target(grid, self.position, direction) {
            Some(target) => self.advance(grid, target, MoveOutcome::Stepped),
            None => {
                debug!("step {} from {} rejected", direction, self.position);
                MoveOutcome::Rejected
            }
        }
    }

    /// Move into, out of, or across the edge of an obstacle cell
    pub fn jump(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.completed {
            return MoveOutcome::Ignored;
        }
        match jump_target(grid, self.position, direction) {
            Some(target) => self.advance(grid, target, MoveOutcome::Jumped),
            None => {
                debug!("jump {} from {} rejected", direction, self.position);
                MoveOutcome::Rejected
            }
        }
    }

    fn advance(&mut self, grid: &Grid, target: Position, outcome: MoveOutcome) -> MoveOutcome {
        self.position = target;
        self.path.push(grid.get_id(target));

        if target == self.end {
            self.completed = true;
            self.state = InputState::Idle;
            MoveOutcome::ReachedGoal
        } else {
            outcome
        }
    }
}

/// Destination of a step from `from`, if legal
pub fn step_target(grid: &Grid, from: Position, direction: Direction) -> Option<Position> {
    let target = from.offset(direction);
    match grid.get_cell(target)? {
        CellState::Open => Some(target),
        CellState::Wall | CellState::Obstacle => None,
    }
}

/// Destination of a jump from `from`, if legal.
/// Either the current cell or the target must be an obstacle.
pub fn jump_target(grid: &Grid, from: Position, direction: Direction) -> Option<Position> {
    let target = from.offset(direction);
    let target_state = grid.get_cell(target)?;
    if target_state == CellState::Wall {
        return None;
    }
    if grid.is_obstacle(from) || target_state == CellState::Obstacle {
        Some(target)
    } else {
        None
    }
}
