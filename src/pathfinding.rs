use crate::grid::{CellState, Direction, Grid, Position};
use log::trace;
use std::collections::VecDeque;

/// Ordered canonical cell ids
pub type Path = Vec<usize>;

/// Open neighbours of `id` in the strict connectivity graph.
///
/// Only `Open` cells carry edges; walls and obstacles are not part of the graph.
pub fn open_neighbors(grid: &Grid, id: usize) -> impl Iterator<Item = usize> + '_ {
    let pos = grid.get_coords(id);
    let from_open = grid.get_cell_by_id(id) == Some(CellState::Open);
    Direction::ALL
        .into_iter()
        .map(move |d| pos.offset(d))
        .filter(move |&next| from_open && grid.is_open(next))
        .map(move |next| grid.get_id(next))
}

/// Breadth-first shortest path between two cells, both endpoints included.
///
/// Returns None when either endpoint is not an open cell or `dest` is not
/// reachable from `source`.
pub fn shortest_path(grid: &Grid, source: Position, dest: Position) -> Option<Path> {
    if !grid.is_open(source) || !grid.is_open(dest) {
        trace!("[bfs] endpoint not open: {} -> {}", source, dest);
        return None;
    }
    shortest_path_by_id(grid, grid.get_id(source), grid.get_id(dest))
}

/// Same as [`shortest_path`], addressed by canonical ids
pub fn shortest_path_by_id(grid: &Grid, source: usize, dest: usize) -> Option<Path> {
    if grid.get_cell_by_id(source) != Some(CellState::Open)
        || grid.get_cell_by_id(dest) != Some(CellState::Open)
    {
        return None;
    }

    let mut came_from: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    let mut expanded = 0usize;
    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if current == dest {
            let path = rebuild_path(&came_from, source, dest);
            trace!(
                "[bfs] {} -> {}: {} cells after {} expansions",
                source,
                dest,
                path.len(),
                expanded
            );
            return Some(path);
        }

        for next in open_neighbors(grid, current) {
            if !visited[next] {
                visited[next] = true;
                came_from[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    trace!("[bfs] {} -> {}: unreachable after {} expansions", source, dest, expanded);
    None
}

/// Whether `dest` can be reached from `source` through open cells
pub fn is_reachable(grid: &Grid, source: Position, dest: Position) -> bool {
    shortest_path(grid, source, dest).is_some()
}

fn rebuild_path(came_from: &[Option<usize>], source: usize, dest: usize) -> Path {
    let mut path = vec![dest];
    let mut current = dest;
    while current != source {
        match came_from[current] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Format path for display
pub fn format_path(grid: &Grid, path: &[usize]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|&id| grid.get_coords(id).to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line() {
        let grid = Grid::new(5, 5);
        let path = shortest_path(&grid, Position::new(0, 2), Position::new(4, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], grid.get_id(Position::new(0, 2)));
        assert_eq!(path[4], grid.get_id(Position::new(4, 2)));
    }

    #[test]
    fn test_same_cell() {
        let grid = Grid::new(3, 3);
        let p = Position::new(1, 1);
        assert_eq!(shortest_path(&grid, p, p), Some(vec![grid.get_id(p)]));
    }

    #[test]
    fn test_detour_around_wall() {
        // .#.
        // .#.
        // ...
        let grid = Grid::with_walls(3, 3, &[1, 4]);
        let path = shortest_path(&grid, Position::new(0, 0), Position::new(2, 0)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(
            format_path(&grid, &path),
            "(0,0) -> (0,1) -> (0,2) -> (1,2) -> (2,2) -> (2,1) -> (2,0)"
        );
    }

    #[test]
    fn test_obstacle_blocks_connectivity() {
        let mut grid = Grid::new(1, 3);
        grid.set_cell(Position::new(1, 0), CellState::Obstacle);
        assert!(!is_reachable(&grid, Position::new(0, 0), Position::new(2, 0)));
    }

    #[test]
    fn test_closed_endpoint() {
        let grid = Grid::with_walls(2, 2, &[3]);
        assert!(shortest_path(&grid, Position::new(0, 0), Position::new(1, 1)).is_none());
        assert!(shortest_path(&grid, Position::new(0, 0), Position::new(5, 5)).is_none());
    }

    #[test]
    fn test_format_empty() {
        let grid = Grid::new(1, 1);
        assert_eq!(format_path(&grid, &[]), "No path");
    }
}
