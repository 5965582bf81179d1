#![allow(dead_code)]

use mazerunner::pathfinding::shortest_path;
use mazerunner::{CellState, Grid, InputKind, InputState, Position, Session};

/// Maze parsed from the text format used in tests
/// - `#`: wall
/// - `.`: open cell
/// - `^`: obstacle
/// - `S`: start (open)
/// - `E`: end (open)
pub struct ParsedMaze {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
}

pub fn parse_maze(text: &str) -> Result<ParsedMaze, String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err("No non-empty lines found in maze".into());
    }

    let cols = lines[0].chars().count() as i32;
    let rows = lines.len() as i32;
    let mut cells = Vec::with_capacity((rows * cols) as usize);
    let mut start = None;
    let mut end = None;

    for (y, line) in lines.iter().enumerate() {
        if line.chars().count() as i32 != cols {
            return Err(format!("Row {} has a different width", y));
        }
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let state = match ch {
                '#' => CellState::Wall,
                '^' => CellState::Obstacle,
                '.' => CellState::Open,
                'S' => {
                    start = Some(pos);
                    CellState::Open
                }
                'E' => {
                    end = Some(pos);
                    CellState::Open
                }
                other => return Err(format!("Unknown maze character '{}'", other)),
            };
            cells.push(state);
        }
    }

    let grid = Grid::from_cells(rows, cols, cells).ok_or("Cell count does not match maze size")?;

    Ok(ParsedMaze {
        grid,
        start: start.ok_or("No start position 'S' found in maze")?,
        end: end.ok_or("No end position 'E' found in maze")?,
    })
}

/// Session on a text maze; the reference path is the strict BFS path on the
/// grid as written (empty when obstacles cut the maze)
pub fn session_from_text(text: &str) -> Session {
    let maze = parse_maze(text).expect("valid maze text");
    let reference = shortest_path(&maze.grid, maze.start, maze.end).unwrap_or_default();
    Session::from_parts(maze.grid, maze.start, maze.end, reference).expect("valid endpoints")
}

/// Obstacles turned back into open cells
pub fn undecorated(grid: &Grid) -> Grid {
    let mut plain = grid.clone();
    for pos in grid.obstacles() {
        plain.set_cell(pos, CellState::Open);
    }
    plain
}

/// Inputs that walk `path`, arming a jump before entering an obstacle
pub fn inputs_for_path(grid: &Grid, path: &[usize]) -> Vec<InputKind> {
    let mut inputs = Vec::new();
    for pair in path.windows(2) {
        let from = grid.get_coords(pair[0]);
        let to = grid.get_coords(pair[1]);
        let direction = from
            .direction_to(to)
            .unwrap_or_else(|| panic!("{} and {} are not adjacent", from, to));
        if grid.is_obstacle(to) {
            inputs.push(InputKind::ArmJump);
        }
        inputs.push(InputKind::from_direction(direction));
    }
    inputs
}

/// Everything an input can change
pub fn snapshot(session: &Session) -> (Position, Vec<usize>, InputState, bool) {
    (
        session.agent_position(),
        session.agent_path().to_vec(),
        session.input_state(),
        session.is_completed(),
    )
}
