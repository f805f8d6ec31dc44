// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The board: a fixed `size × size` matrix of squares.

use crate::geometry::{is_on_board, Point};

use super::square::{Square, SquareState};

/// A square matrix of [`Square`]s, stored row by row.
///
/// The grid is created once per search and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    size: usize,
    squares: Vec<Square>,
}

impl BoardGrid {
    /// Create an all-empty grid with no territory.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::new(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The square at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<&Square> {
        if is_on_board(self.size, x, y) {
            Some(&self.squares[self.index(x, y)])
        } else {
            None
        }
    }

    /// The square at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is off the board.
    pub fn square(&self, p: Point) -> &Square {
        self.get(p.x, p.y)
            .unwrap_or_else(|| panic!("Point {} is off the {} board", p, self.size))
    }

    fn square_mut(&mut self, p: Point) -> &mut Square {
        assert!(
            is_on_board(self.size, p.x, p.y),
            "Point {} is off the {} board",
            p,
            self.size
        );
        let index = self.index(p.x, p.y);
        &mut self.squares[index]
    }

    pub fn state(&self, p: Point) -> SquareState {
        self.square(p).state()
    }

    pub fn set_state(&mut self, p: Point, state: SquareState) {
        self.square_mut(p).set_state(state);
    }

    /// Add `delta` to the territory count of every square in `points`.
    ///
    /// # Panics
    ///
    /// Panics if any count would go negative: every `-1` must undo an earlier `+1`.
    pub fn adjust_territory(&mut self, points: &[Point], delta: i32) {
        for &p in points {
            if self.square_mut(p).add_territory(delta).is_none() {
                panic!("Territory count underflow at {} (delta {})", p, delta);
            }
        }
    }

    /// Reset every square of row `y` to `Empty`. Territory counts are untouched.
    pub fn clear_row(&mut self, y: i32) {
        for x in 0..self.size as i32 {
            self.set_state(Point::new(x, y), SquareState::Empty);
        }
    }

    /// True if any square of row `y` is in `state`.
    pub fn row_has_state(&self, y: i32, state: SquareState) -> bool {
        (0..self.size as i32).any(|x| self.state(Point::new(x, y)) == state)
    }

    /// Locations of all queens, row by row.
    pub fn queens(&self) -> impl Iterator<Item = Point> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_queen())
            .map(move |(i, _)| Point::new((i % self.size) as i32, (i / self.size) as i32))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size + x as usize
    }
}
