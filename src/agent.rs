//! A positioned, directional agent that executes solver commands.
//!
//! Command execution is a pure function from (maze, agent, command) to a new
//! agent, so callers own all pacing and animation concerns.

use crate::grid::{Direction, Maze};
use crate::solver::Command;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// An agent occupying one maze cell and facing a cardinal direction.
///
/// # Examples
///
/// ```
/// use maze_util::agent::Agent;
/// use maze_util::grid::{Direction, Maze};
/// use maze_util::solver::Command;
/// use nalgebra::Point2;
///
/// let maze = Maze::new(8, 8).unwrap();
/// let agent = Agent::new(Point2::new(0, 0));
/// let agent = agent.apply(&maze, Command::TurnRight);
/// assert_eq!(agent.facing, Direction::East);
/// let agent = agent.apply(&maze, Command::MoveForward);
/// assert_eq!(agent.position, Point2::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// The cell the agent occupies
    pub position: Point2<i8>,
    /// The direction the agent faces
    pub facing: Direction,
}

impl Agent {
    /// Creates an agent at the given cell, facing north.
    pub fn new(position: Point2<i8>) -> Self {
        Self {
            position,
            facing: Direction::North,
        }
    }

    /// Returns whether a forward move from the current cell is unblocked.
    pub fn can_move_forward(&self, maze: &Maze) -> bool {
        let (dx, dy) = self.facing.vector();
        let next = Point2::new(self.position.x + dx, self.position.y + dy);
        maze.in_bounds(&next) && !maze.wall_between(&self.position, self.facing)
    }

    /// Executes one command, returning the new agent state.
    ///
    /// A blocked [`Command::MoveForward`] leaves the agent unchanged.
    pub fn apply(self, maze: &Maze, command: Command) -> Self {
        match command {
            Command::TurnLeft => Self {
                facing: self.facing.left(),
                ..self
            },
            Command::TurnRight => Self {
                facing: self.facing.right(),
                ..self
            },
            Command::MoveForward => {
                if self.can_move_forward(maze) {
                    let (dx, dy) = self.facing.vector();
                    Self {
                        position: Point2::new(self.position.x + dx, self.position.y + dy),
                        ..self
                    }
                } else {
                    self
                }
            }
        }
    }

    /// Executes a command sequence in order, returning the final agent state.
    pub fn run(self, maze: &Maze, commands: &[Command]) -> Self {
        commands
            .iter()
            .fold(self, |agent, &command| agent.apply(maze, command))
    }
}
