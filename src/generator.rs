//! Randomized maze generation via depth-first carving.

use crate::grid::{Direction, EdgeOrientation, Maze};
use log::debug;
use nalgebra::Point2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Replaces the maze's interior with a randomly carved perfect maze.
///
/// Every interior edge is first closed, then passages are carved by a
/// depth-first walk: visit a random unvisited neighbor, removing the wall on
/// the shared edge, backtracking via the call stack when a cell has no
/// unvisited neighbor left. The perimeter is never touched. Finishes by
/// placing the start at `(0, 0)` and the exit at `(width-1, height-1)`.
///
/// The result connects every cell to every other by exactly one route.
///
/// # Examples
///
/// ```
/// use maze_util::generator::generate;
/// use maze_util::grid::Maze;
/// use maze_util::solver::find_path;
///
/// let mut maze = Maze::new(16, 16).unwrap();
/// generate(&mut maze, &mut rand::thread_rng());
/// assert!(find_path(&maze).unwrap().is_some());
/// ```
pub fn generate<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let width = maze.width() as i8;
    let height = maze.height() as i8;

    // close every interior edge
    for y in 1..height {
        for x in 0..width {
            if !maze.has_wall_edge(x, y, EdgeOrientation::Horizontal) {
                maze.toggle_wall_edge(x, y, EdgeOrientation::Horizontal);
            }
        }
    }
    for y in 0..height {
        for x in 1..width {
            if !maze.has_wall_edge(x, y, EdgeOrientation::Vertical) {
                maze.toggle_wall_edge(x, y, EdgeOrientation::Vertical);
            }
        }
    }

    let mut visited = vec![vec![false; width as usize]; height as usize];
    carve(maze, rng, &mut visited, Point2::new(0, 0));

    maze.set_start(0, 0);
    maze.set_exit(width - 1, height - 1);

    debug!("generated {}x{} maze", maze.width(), maze.height());
}

fn carve<R: Rng>(maze: &mut Maze, rng: &mut R, visited: &mut [Vec<bool>], cell: Point2<i8>) {
    visited[cell.y as usize][cell.x as usize] = true;
    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    for direction in directions {
        let (dx, dy) = direction.vector();
        let next = Point2::new(cell.x + dx, cell.y + dy);
        if maze.in_bounds(&next) && !visited[next.y as usize][next.x as usize] {
            remove_shared_wall(maze, &cell, direction);
            carve(maze, rng, visited, next);
        }
    }
}

/// Opens the edge between `cell` and its neighbor in the given direction.
fn remove_shared_wall(maze: &mut Maze, cell: &Point2<i8>, direction: Direction) {
    match direction {
        Direction::North => maze.toggle_wall_edge(cell.x, cell.y, EdgeOrientation::Horizontal),
        Direction::South => maze.toggle_wall_edge(cell.x, cell.y + 1, EdgeOrientation::Horizontal),
        Direction::West => maze.toggle_wall_edge(cell.x, cell.y, EdgeOrientation::Vertical),
        Direction::East => maze.toggle_wall_edge(cell.x + 1, cell.y, EdgeOrientation::Vertical),
    }
}
