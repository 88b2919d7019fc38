//! A set of pre-made general purpose mazes.

use crate::grid::EdgeOrientation::Horizontal;
use crate::grid::Maze;
use serde::{Deserialize, Serialize};

/// Enum for the pre-made [`Maze`]s shipped with the crate.
///
/// These are handy as demo content and as known-good fixtures: every
/// standard maze has its start and exit placed and is solvable.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// An open 16×16 maze with no interior walls
    #[default]
    Blank,
    /// A 4×4 maze with a serpentine corridor from corner to corner
    Snake,
    /// A 3×3 open maze with one interior wall forcing a detour
    Detour,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 3] {
        [Self::Blank, Self::Snake, Self::Detour]
    }

    /// Build the [`Maze`] associated with this enum
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::solver::find_path;
    /// use maze_util::standard_mazes::StandardMaze;
    ///
    /// let maze = StandardMaze::Snake.build();
    /// assert!(find_path(&maze).unwrap().is_some());
    /// ```
    pub fn build(self) -> Maze {
        match self {
            Self::Blank => {
                let mut maze = Maze::new(16, 16).expect("dimensions are valid");
                maze.set_start(0, 0);
                maze.set_exit(15, 15);
                maze
            }
            Self::Snake => {
                let mut maze = Maze::new(4, 4).expect("dimensions are valid");
                // leave one opening per row boundary, alternating ends
                for y in [1, 3] {
                    for x in 0..3 {
                        maze.toggle_wall_edge(x, y, Horizontal);
                    }
                }
                for x in 1..4 {
                    maze.toggle_wall_edge(x, 2, Horizontal);
                }
                maze.set_start(0, 0);
                maze.set_exit(3, 3);
                maze
            }
            Self::Detour => {
                let mut maze = Maze::new(3, 3).expect("dimensions are valid");
                // wall between (1, 0) and (1, 1)
                maze.toggle_wall_edge(1, 1, Horizontal);
                maze.set_start(0, 0);
                maze.set_exit(2, 2);
                maze
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::find_path;

    #[test]
    fn all_standard_mazes_are_solvable() {
        for standard in StandardMaze::get_all() {
            let maze = standard.build();
            assert!(maze.start().is_some(), "{standard:?} has no start");
            assert!(maze.exit().is_some(), "{standard:?} has no exit");
            assert!(
                find_path(&maze).unwrap().is_some(),
                "{standard:?} is not solvable"
            );
        }
    }

    #[test]
    fn blank_path_is_a_straight_shot() {
        let maze = StandardMaze::Blank.build();
        let path = find_path(&maze).unwrap().unwrap();
        // manhattan distance 30, so 31 cells
        assert_eq!(path.len(), 31);
    }

    #[test]
    fn snake_follows_the_corridor() {
        let maze = StandardMaze::Snake.build();
        let path = find_path(&maze).unwrap().unwrap();
        // forced route: across row 0, back along row 1, across row 2, down
        assert_eq!(path.len(), 13);
        assert_eq!(path[0], nalgebra::Point2::new(0, 0));
        assert_eq!(path[4], nalgebra::Point2::new(3, 1));
        assert_eq!(path[12], nalgebra::Point2::new(3, 3));
    }

    #[test]
    fn detour_costs_no_extra_steps() {
        let maze = StandardMaze::Detour.build();
        let path = find_path(&maze).unwrap().unwrap();
        // an equal-length route around the wall exists
        assert_eq!(path.len(), 5);
    }
}
