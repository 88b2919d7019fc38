//! Shortest-path search and translation into turn/move commands.

use crate::grid::{Direction, Maze};
use anyhow::{anyhow, Error};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Enum for the commands a directional agent understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Rotate facing 90° counterclockwise
    TurnLeft,
    /// Rotate facing 90° clockwise
    TurnRight,
    /// Advance one cell in the current facing direction
    MoveForward,
}

/// Returns the shortest path from the maze's start to its exit, if one
/// exists.
///
/// The path includes both the start and the exit. Among equal-length shortest
/// paths, the one implied by north, east, south, west expansion order is
/// returned, so repeated calls on the same maze give identical results.
///
/// Returns `Ok(None)` when the exit is unreachable and an error when the
/// start or exit has not been placed.
///
/// # Examples
///
/// ```
/// use maze_util::grid::Maze;
/// use maze_util::solver::find_path;
///
/// let mut maze = Maze::new(4, 4).unwrap();
/// maze.set_start(0, 0);
/// maze.set_exit(3, 0);
/// let path = find_path(&maze).unwrap().unwrap();
/// assert_eq!(path.len(), 4);
/// ```
pub fn find_path(maze: &Maze) -> Result<Option<Vec<Point2<i8>>>, Error> {
    let start = maze.start().ok_or(anyhow!("Maze has no start position"))?;
    let exit = maze.exit().ok_or(anyhow!("Maze has no exit position"))?;

    let mut prev: HashMap<Point2<i8>, Option<Point2<i8>>> = HashMap::new();
    let mut queue: VecDeque<Point2<i8>> = VecDeque::new();
    prev.insert(start, None);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == exit {
            let mut path = vec![exit];
            let mut next = exit;
            while let Some(Some(before_next)) = prev.get(&next) {
                path.insert(0, *before_next);
                next = *before_next;
            }
            debug!(
                "found path of {} cells from ({}, {}) to ({}, {})",
                path.len(),
                start.x,
                start.y,
                exit.x,
                exit.y
            );
            return Ok(Some(path));
        }
        for neighbor in maze.neighbors(&current) {
            if !prev.contains_key(&neighbor) {
                prev.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }
    debug!(
        "no path from ({}, {}) to ({}, {})",
        start.x, start.y, exit.x, exit.y
    );
    Ok(None)
}

/// Translates a cell path into commands for an agent that starts facing
/// north.
///
/// For each step, the agent first turns towards the next cell, then moves.
/// A 270° clockwise difference is emitted as a single [`Command::TurnLeft`];
/// every other difference is emitted as that many [`Command::TurnRight`]s.
/// Translation always begins from a north facing, regardless of any prior
/// agent state.
///
/// Returns an error if consecutive cells are not 4-adjacent.
///
/// # Examples
///
/// ```
/// use maze_util::solver::{path_to_commands, Command};
/// use nalgebra::Point2;
///
/// let path = vec![Point2::new(0, 0), Point2::new(1, 0)];
/// assert_eq!(
///     path_to_commands(&path).unwrap(),
///     vec![Command::TurnRight, Command::MoveForward],
/// );
/// ```
pub fn path_to_commands(path: &[Point2<i8>]) -> Result<Vec<Command>, Error> {
    let mut commands = vec![];
    let mut facing = Direction::North;
    for pair in path.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let needed = step_direction(&current, &next)?;
        let diff = (u8::from(needed) + 4 - u8::from(facing)) % 4;
        if diff == 3 {
            commands.push(Command::TurnLeft);
        } else {
            for _ in 0..diff {
                commands.push(Command::TurnRight);
            }
        }
        commands.push(Command::MoveForward);
        facing = needed;
    }
    Ok(commands)
}

/// Returns the cardinal direction of a single-cell step.
fn step_direction(current: &Point2<i8>, next: &Point2<i8>) -> Result<Direction, Error> {
    match (next.x - current.x, next.y - current.y) {
        (0, -1) => Ok(Direction::North),
        (1, 0) => Ok(Direction::East),
        (0, 1) => Ok(Direction::South),
        (-1, 0) => Ok(Direction::West),
        _ => Err(anyhow!(
            "Path step from ({}, {}) to ({}, {}) is not a unit cardinal move",
            current.x,
            current.y,
            next.x,
            next.y
        )),
    }
}
