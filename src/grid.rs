use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};

/// Classification of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Open,
    Wall,
    /// Blocks plain steps; can only be entered or left with a jump
    Obstacle,
}

impl CellState {
    pub fn symbol(self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Wall => '#',
            CellState::Obstacle => '^',
        }
    }
}

/// Orthogonal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector (dx, dy); y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The neighbouring position one cell away in `direction` (may be off-grid)
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Direction leading from `self` to an orthogonally adjacent `other`
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.offset(d) == other)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Maze grid, stored row-major
/// Cell ids are canonical: `id = y * cols + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with all cells open
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) * cols.max(0)) as usize;
        Grid {
            rows,
            cols,
            cells: vec![CellState::Open; len],
        }
    }

    /// Create a grid with specific wall cells
    pub fn with_walls(rows: i32, cols: i32, walls: &[usize]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &cell_id in walls {
            if cell_id < grid.cells.len() {
                grid.cells[cell_id] = CellState::Wall;
            }
        }
        grid
    }

    /// Build a grid from row-major cell states.
    /// Returns None when the cell count does not match the dimensions.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<CellState>) -> Option<Self> {
        if rows < 0 || cols < 0 || cells.len() != (rows * cols) as usize {
            return None;
        }
        Some(Grid { rows, cols, cells })
    }

    pub fn width(&self) -> i32 {
        self.cols
    }

    pub fn height(&self) -> i32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cols && pos.y >= 0 && pos.y < self.rows
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, pos: Position) -> usize {
        (pos.y * self.cols + pos.x) as usize
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: usize) -> Position {
        let id = id as i32;
        Position::new(id % self.cols, id / self.cols)
    }

    /// Cell state at `pos`, or None when off-grid
    pub fn get_cell(&self, pos: Position) -> Option<CellState> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.get_id(pos)])
    }

    pub fn get_cell_by_id(&self, id: usize) -> Option<CellState> {
        self.cells.get(id).copied()
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.get_cell(pos) == Some(CellState::Open)
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.get_cell(pos) == Some(CellState::Wall)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.get_cell(pos) == Some(CellState::Obstacle)
    }

    /// Set cell value at `pos`; off-grid writes are ignored
    pub fn set_cell(&mut self, pos: Position, state: CellState) {
        if self.in_bounds(pos) {
            let id = self.get_id(pos);
            self.cells[id] = state;
        }
    }

    /// Iterate over `(id, state)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, CellState)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Return a copy with obstacles placed on open cells.
    ///
    /// Cells are scanned row-major; an open cell is promoted when neither its
    /// row nor its column already holds an obstacle. Cells in `protected`
    /// keep their state. Obstacles already present in the grid count towards
    /// their row and column.
    pub fn decorate(&self, protected: &[Position]) -> Grid {
        let mut decorated = self.clone();
        let mut used_rows: HashSet<i32> = HashSet::new();
        let mut used_cols: HashSet<i32> = HashSet::new();

        for (id, state) in self.iter() {
            if state == CellState::Obstacle {
                let pos = self.get_coords(id);
                used_rows.insert(pos.y);
                used_cols.insert(pos.x);
            }
        }

        for y in 0..self.rows {
            for x in 0..self.cols {
                let pos = Position::new(x, y);
                if self.get_cell(pos) != Some(CellState::Open) || protected.contains(&pos) {
                    continue;
                }
                if used_rows.contains(&y) || used_cols.contains(&x) {
                    continue;
                }
                decorated.set_cell(pos, CellState::Obstacle);
                used_rows.insert(y);
                used_cols.insert(x);
            }
        }

        decorated
    }

    pub fn obstacles(&self) -> Vec<Position> {
        self.iter()
            .filter(|&(_, state)| state == CellState::Obstacle)
            .map(|(id, _)| self.get_coords(id))
            .collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let id = self.get_id(Position::new(x, y));
                write!(f, "{}", self.cells[id].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
