//! Edge-indexed maze grid structs and utilities.

use anyhow::{anyhow, Error};
use nalgebra::Point2;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Enum for facing direction values, in 90° clockwise steps.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Towards decreasing y
    North = 0,
    /// Towards increasing x
    East = 1,
    /// Towards increasing y
    South = 2,
    /// Towards decreasing x
    West = 3,
}

impl Direction {
    /// All directions, in the order the solver expands neighbors.
    ///
    /// This order decides which of several equal-length shortest paths wins,
    /// so it must stay fixed.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the unit `(dx, dy)` step for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::Direction;
    ///
    /// assert_eq!(Direction::North.vector(), (0, -1));
    /// assert_eq!(Direction::East.vector(), (1, 0));
    /// ```
    pub fn vector(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the direction 90° counterclockwise from this one.
    pub fn left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Returns the direction 90° clockwise from this one.
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// Enum for the two wall edge orientations in a [`Maze`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EdgeOrientation {
    /// An edge on the north side of a cell row
    Horizontal,
    /// An edge on the west side of a cell column
    Vertical,
}

/// Largest allowed maze dimension; cell coordinates are stored as `i8`.
pub const MAX_MAZE_DIM: usize = i8::MAX as usize;

/// A rectangular maze with edge-indexed walls.
///
/// Walls live on the edges *between* cells rather than in the cells
/// themselves, so both neighbors of an edge observe the same wall state.
/// Horizontal edges form a `(height + 1) × width` grid (the edge north of row
/// `y`, column `x`); vertical edges form a `height × (width + 1)` grid (the
/// edge west of column `x`, row `y`). The perimeter edges are initialized to
/// walls so the maze is enclosed.
///
/// All operations are total: out-of-range edge queries report "wall present"
/// and out-of-range mutations are silently ignored, so callers never need
/// separate bounds checks.
///
/// # Examples
///
/// ```
/// use maze_util::grid::{EdgeOrientation, Maze};
///
/// let maze = Maze::new(8, 8).unwrap();
/// assert!(maze.has_wall_edge(3, 0, EdgeOrientation::Horizontal));
/// assert!(!maze.has_wall_edge(3, 3, EdgeOrientation::Horizontal));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,

    /// indexed `h_walls[y][x]`, `y` in `0..=height`, `x` in `0..width`
    h_walls: Vec<Vec<bool>>,
    /// indexed `v_walls[y][x]`, `y` in `0..height`, `x` in `0..=width`
    v_walls: Vec<Vec<bool>>,

    start: Option<Point2<i8>>,
    exit: Option<Point2<i8>>,
}

impl Default for Maze {
    fn default() -> Self {
        Maze::new(16, 16).unwrap()
    }
}

impl Maze {
    /// Creates an enclosed maze with open interior edges.
    ///
    /// Returns an error if either dimension is zero or larger than
    /// [`MAX_MAZE_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::Maze;
    ///
    /// let maze = Maze::new(16, 16).unwrap();
    /// assert_eq!(maze.width(), 16);
    /// assert!(Maze::new(0, 16).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(anyhow!("Maze dimensions must be positive"));
        }
        if width > MAX_MAZE_DIM || height > MAX_MAZE_DIM {
            return Err(anyhow!("Maze dimensions must be at most {}", MAX_MAZE_DIM));
        }

        let mut h_walls = vec![vec![false; width]; height + 1];
        let mut v_walls = vec![vec![false; width + 1]; height];

        // enclose the maze
        for x in 0..width {
            h_walls[0][x] = true;
            h_walls[height][x] = true;
        }
        for row in v_walls.iter_mut() {
            row[0] = true;
            row[width] = true;
        }

        Ok(Self {
            width,
            height,
            h_walls,
            v_walls,
            start: None,
            exit: None,
        })
    }

    /// Returns the width of the maze, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the maze, in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the start cell, if one has been placed.
    pub fn start(&self) -> Option<Point2<i8>> {
        self.start
    }

    /// Returns the exit cell, if one has been placed.
    pub fn exit(&self) -> Option<Point2<i8>> {
        self.exit
    }

    /// Returns whether the given cell coordinate is inside the maze.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::Maze;
    /// use nalgebra::Point2;
    ///
    /// let maze = Maze::new(8, 8).unwrap();
    /// assert!(maze.in_bounds(&Point2::new(0, 7)));
    /// assert!(!maze.in_bounds(&Point2::new(8, 0)));
    /// assert!(!maze.in_bounds(&Point2::new(0, -1)));
    /// ```
    pub fn in_bounds(&self, cell: &Point2<i8>) -> bool {
        cell.x >= 0
            && (cell.x as usize) < self.width
            && cell.y >= 0
            && (cell.y as usize) < self.height
    }

    /// Returns whether the edge at `(x, y)` with the given orientation is a
    /// wall.
    ///
    /// Valid coordinates are `x ∈ [0, width)`, `y ∈ [0, height]` for
    /// horizontal edges and `x ∈ [0, width]`, `y ∈ [0, height)` for vertical
    /// edges. Anything outside those ranges reports `true`, as if the
    /// exterior were solid wall.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::{EdgeOrientation, Maze};
    ///
    /// let maze = Maze::new(8, 8).unwrap();
    /// // perimeter
    /// assert!(maze.has_wall_edge(3, 0, EdgeOrientation::Horizontal));
    /// assert!(maze.has_wall_edge(3, 8, EdgeOrientation::Horizontal));
    /// // out of range
    /// assert!(maze.has_wall_edge(-1, 3, EdgeOrientation::Vertical));
    /// assert!(maze.has_wall_edge(3, 9, EdgeOrientation::Horizontal));
    /// ```
    pub fn has_wall_edge(&self, x: i8, y: i8, orientation: EdgeOrientation) -> bool {
        match self.edge_index(x, y, orientation) {
            Some((x, y)) => match orientation {
                EdgeOrientation::Horizontal => self.h_walls[y][x],
                EdgeOrientation::Vertical => self.v_walls[y][x],
            },
            None => true,
        }
    }

    /// Flips the wall state of the edge at `(x, y)` with the given
    /// orientation.
    ///
    /// Out-of-range coordinates are silently ignored. In-range perimeter
    /// edges are *not* protected; callers that rely on the maze staying
    /// enclosed must leave them alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::{EdgeOrientation, Maze};
    ///
    /// let mut maze = Maze::new(8, 8).unwrap();
    /// maze.toggle_wall_edge(3, 3, EdgeOrientation::Horizontal);
    /// assert!(maze.has_wall_edge(3, 3, EdgeOrientation::Horizontal));
    /// maze.toggle_wall_edge(3, 3, EdgeOrientation::Horizontal);
    /// assert!(!maze.has_wall_edge(3, 3, EdgeOrientation::Horizontal));
    /// ```
    pub fn toggle_wall_edge(&mut self, x: i8, y: i8, orientation: EdgeOrientation) {
        if let Some((x, y)) = self.edge_index(x, y, orientation) {
            match orientation {
                EdgeOrientation::Horizontal => self.h_walls[y][x] = !self.h_walls[y][x],
                EdgeOrientation::Vertical => self.v_walls[y][x] = !self.v_walls[y][x],
            }
        }
    }

    /// Places the start marker, replacing any previous one.
    ///
    /// Out-of-range coordinates are silently rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::Maze;
    /// use nalgebra::Point2;
    ///
    /// let mut maze = Maze::new(8, 8).unwrap();
    /// maze.set_start(0, 0);
    /// assert_eq!(maze.start(), Some(Point2::new(0, 0)));
    /// ```
    pub fn set_start(&mut self, x: i8, y: i8) {
        let cell = Point2::new(x, y);
        if self.in_bounds(&cell) {
            self.start = Some(cell);
        }
    }

    /// Places the exit marker, replacing any previous one.
    ///
    /// Out-of-range coordinates are silently rejected.
    pub fn set_exit(&mut self, x: i8, y: i8) {
        let cell = Point2::new(x, y);
        if self.in_bounds(&cell) {
            self.exit = Some(cell);
        }
    }

    /// Returns whether a wall edge separates `cell` from its neighbor in the
    /// given direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::{Direction, Maze};
    /// use nalgebra::Point2;
    ///
    /// let maze = Maze::new(8, 8).unwrap();
    /// // the perimeter blocks movement off the grid
    /// assert!(maze.wall_between(&Point2::new(0, 0), Direction::West));
    /// assert!(!maze.wall_between(&Point2::new(0, 0), Direction::East));
    /// ```
    pub fn wall_between(&self, cell: &Point2<i8>, direction: Direction) -> bool {
        match direction {
            Direction::North => self.has_wall_edge(cell.x, cell.y, EdgeOrientation::Horizontal),
            Direction::South => self.has_wall_edge(cell.x, cell.y + 1, EdgeOrientation::Horizontal),
            Direction::West => self.has_wall_edge(cell.x, cell.y, EdgeOrientation::Vertical),
            Direction::East => self.has_wall_edge(cell.x + 1, cell.y, EdgeOrientation::Vertical),
        }
    }

    /// Returns all reachable neighbors of the given cell, in north, east,
    /// south, west order.
    ///
    /// A neighbor is reachable if it is in bounds and the shared edge is not
    /// a wall.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_util::grid::Maze;
    /// use nalgebra::Point2;
    ///
    /// let maze = Maze::new(8, 8).unwrap();
    /// let neighbors = maze.neighbors(&Point2::new(0, 0));
    /// assert_eq!(neighbors, vec![Point2::new(1, 0), Point2::new(0, 1)]);
    /// ```
    pub fn neighbors(&self, cell: &Point2<i8>) -> Vec<Point2<i8>> {
        let mut neighbors = vec![];
        for direction in Direction::ALL {
            let (dx, dy) = direction.vector();
            let neighbor = Point2::new(cell.x + dx, cell.y + dy);
            if self.in_bounds(&neighbor) && !self.wall_between(cell, direction) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }

    /// Maps an edge coordinate to array indices, or `None` if out of range.
    fn edge_index(&self, x: i8, y: i8, orientation: EdgeOrientation) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let in_range = match orientation {
            EdgeOrientation::Horizontal => x < self.width && y <= self.height,
            EdgeOrientation::Vertical => x <= self.width && y < self.height,
        };
        if in_range {
            Some((x, y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EdgeOrientation::{Horizontal, Vertical};

    #[test]
    fn new_rejects_bad_dimensions() {
        assert!(Maze::new(0, 8).is_err());
        assert!(Maze::new(8, 0).is_err());
        assert!(Maze::new(MAX_MAZE_DIM + 1, 8).is_err());
        assert!(Maze::new(MAX_MAZE_DIM, MAX_MAZE_DIM).is_ok());
    }

    #[test]
    fn perimeter_is_walled_after_construction() {
        let maze = Maze::new(8, 5).unwrap();
        for x in 0..8 {
            assert!(maze.has_wall_edge(x, 0, Horizontal));
            assert!(maze.has_wall_edge(x, 5, Horizontal));
        }
        for y in 0..5 {
            assert!(maze.has_wall_edge(0, y, Vertical));
            assert!(maze.has_wall_edge(8, y, Vertical));
        }
    }

    #[test]
    fn interior_is_open_after_construction() {
        let maze = Maze::new(8, 5).unwrap();
        for y in 1..5 {
            for x in 0..8 {
                assert!(!maze.has_wall_edge(x, y, Horizontal));
            }
        }
        for y in 0..5 {
            for x in 1..8 {
                assert!(!maze.has_wall_edge(x, y, Vertical));
            }
        }
    }

    #[test]
    fn perimeter_survives_interior_toggles() {
        let mut maze = Maze::new(6, 6).unwrap();
        maze.toggle_wall_edge(2, 3, Horizontal);
        maze.toggle_wall_edge(4, 1, Vertical);
        maze.toggle_wall_edge(2, 3, Horizontal);
        for x in 0..6 {
            assert!(maze.has_wall_edge(x, 0, Horizontal));
            assert!(maze.has_wall_edge(x, 6, Horizontal));
        }
        for y in 0..6 {
            assert!(maze.has_wall_edge(0, y, Vertical));
            assert!(maze.has_wall_edge(6, y, Vertical));
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut maze = Maze::new(8, 8).unwrap();
        let before = maze.clone();
        maze.toggle_wall_edge(3, 4, Horizontal);
        assert!(maze.has_wall_edge(3, 4, Horizontal));
        maze.toggle_wall_edge(3, 4, Horizontal);
        assert_eq!(maze, before);
    }

    #[test]
    fn out_of_range_queries_report_wall() {
        let maze = Maze::new(8, 8).unwrap();
        assert!(maze.has_wall_edge(-1, 0, Horizontal));
        assert!(maze.has_wall_edge(8, 0, Horizontal));
        assert!(maze.has_wall_edge(0, 9, Horizontal));
        assert!(maze.has_wall_edge(0, -1, Vertical));
        assert!(maze.has_wall_edge(9, 0, Vertical));
        assert!(maze.has_wall_edge(0, 8, Vertical));
    }

    #[test]
    fn out_of_range_toggles_have_no_effect() {
        let mut maze = Maze::new(8, 8).unwrap();
        let before = maze.clone();
        maze.toggle_wall_edge(-1, 3, Horizontal);
        maze.toggle_wall_edge(8, 3, Horizontal);
        maze.toggle_wall_edge(3, 9, Horizontal);
        maze.toggle_wall_edge(3, -1, Vertical);
        maze.toggle_wall_edge(9, 3, Vertical);
        maze.toggle_wall_edge(3, 8, Vertical);
        assert_eq!(maze, before);
    }

    #[test]
    fn set_start_replaces_previous_marker() {
        let mut maze = Maze::new(8, 8).unwrap();
        assert_eq!(maze.start(), None);
        maze.set_start(1, 2);
        maze.set_start(3, 4);
        assert_eq!(maze.start(), Some(Point2::new(3, 4)));
    }

    #[test]
    fn set_markers_reject_out_of_range() {
        let mut maze = Maze::new(8, 8).unwrap();
        maze.set_start(-1, 0);
        maze.set_start(8, 0);
        maze.set_exit(0, 8);
        assert_eq!(maze.start(), None);
        assert_eq!(maze.exit(), None);

        maze.set_exit(7, 7);
        maze.set_exit(0, -1);
        assert_eq!(maze.exit(), Some(Point2::new(7, 7)));
    }

    #[test]
    fn neighbors_are_in_expansion_order() {
        let maze = Maze::new(8, 8).unwrap();
        assert_eq!(
            maze.neighbors(&Point2::new(3, 3)),
            vec![
                Point2::new(3, 2),
                Point2::new(4, 3),
                Point2::new(3, 4),
                Point2::new(2, 3),
            ]
        );
    }

    #[test]
    fn neighbors_respect_wall_edges() {
        let mut maze = Maze::new(8, 8).unwrap();
        // wall south of (3, 3)
        maze.toggle_wall_edge(3, 4, Horizontal);
        assert_eq!(
            maze.neighbors(&Point2::new(3, 3)),
            vec![Point2::new(3, 2), Point2::new(4, 3), Point2::new(2, 3)]
        );
        // the shared edge blocks from both sides
        assert!(!maze
            .neighbors(&Point2::new(3, 4))
            .contains(&Point2::new(3, 3)));
    }

    #[test]
    fn direction_rotation() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
        assert_eq!(Direction::South.left(), Direction::East);
    }
}
