// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Owned copy of the board for rendering.

use crate::geometry::{is_on_board, Point};
use crate::state::{BoardGrid, SquareState};

/// The board and cursor at one moment of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    size: usize,
    states: Vec<SquareState>,
    territory: Vec<u32>,
    cursor: Point,
}

impl GridSnapshot {
    /// Copy `grid` with the cursor at `cursor`.
    pub fn capture(grid: &BoardGrid, cursor: Point) -> Self {
        let squares = grid.squares();
        Self {
            size: grid.size(),
            states: squares.iter().map(|s| s.state()).collect(),
            territory: squares.iter().map(|s| s.territory_count()).collect(),
            cursor,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// State of `(x, y)`; `Empty` off the board.
    pub fn state(&self, x: i32, y: i32) -> SquareState {
        self.index(x, y)
            .map_or(SquareState::Empty, |i| self.states[i])
    }

    /// Territory count of `(x, y)`; 0 off the board.
    pub fn territory_count(&self, x: i32, y: i32) -> u32 {
        self.index(x, y).map_or(0, |i| self.territory[i])
    }

    pub fn is_queen(&self, x: i32, y: i32) -> bool {
        self.state(x, y) == SquareState::Queen
    }

    pub fn is_cursor(&self, x: i32, y: i32) -> bool {
        self.cursor == Point::new(x, y)
    }

    /// True if the cursor holds a queen and `(x, y)` is on one of its lines.
    ///
    /// Views use this to highlight the attack lines of the queen just placed.
    /// The cursor square itself counts as on the lines.
    pub fn is_emphasized(&self, x: i32, y: i32) -> bool {
        let c = self.cursor;
        if !self.is_queen(c.x, c.y) {
            return false;
        }
        let dx = x - c.x;
        let dy = y - c.y;
        dx == 0 || dy == 0 || dx.abs() == dy.abs()
    }

    /// Queen locations, row by row.
    pub fn queens(&self) -> Vec<Point> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| self.is_queen(p.x, p.y))
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        is_on_board(self.size, x, y).then(|| y as usize * self.size + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::queen_territory_points;

    fn grid_with_queen(size: usize, queen: Point) -> BoardGrid {
        let mut grid = BoardGrid::new(size);
        grid.set_state(queen, SquareState::Queen);
        grid.adjust_territory(&queen_territory_points(size, queen), 1);
        grid
    }

    #[test]
    fn test_capture() {
        let grid = grid_with_queen(5, Point::new(1, 2));
        let snapshot = GridSnapshot::capture(&grid, Point::new(1, 2));
        assert_eq!(snapshot.size(), 5);
        assert!(snapshot.is_queen(1, 2));
        assert_eq!(snapshot.territory_count(1, 0), 1);
        assert_eq!(snapshot.territory_count(0, 0), 0);
        assert_eq!(snapshot.state(9, 9), SquareState::Empty);
        assert_eq!(snapshot.queens(), vec![Point::new(1, 2)]);
    }

    #[test]
    fn test_emphasis_follows_cursor_queen() {
        let grid = grid_with_queen(5, Point::new(1, 2));
        let on_queen = GridSnapshot::capture(&grid, Point::new(1, 2));
        assert!(on_queen.is_emphasized(1, 4));
        assert!(on_queen.is_emphasized(4, 2));
        assert!(on_queen.is_emphasized(3, 0));
        assert!(on_queen.is_emphasized(0, 3));
        assert!(!on_queen.is_emphasized(2, 4));

        let elsewhere = GridSnapshot::capture(&grid, Point::new(0, 3));
        assert!(!elsewhere.is_emphasized(1, 4));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut grid = grid_with_queen(4, Point::new(0, 0));
        let snapshot = GridSnapshot::capture(&grid, Point::ORIGIN);
        grid.set_state(Point::new(0, 0), SquareState::Success);
        assert!(snapshot.is_queen(0, 0));
    }
}
