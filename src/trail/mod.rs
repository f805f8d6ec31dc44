// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cursor track: the explicit stack that replaces recursion.
//!
//! One entry per open row, from row 0 down to the row under consideration.
//! The top entry is the cursor. Descending into the next row pushes an entry,
//! moving right replaces the top entry, and backtracking pops it.
//!
//! # Invariants
//!
//! - The track is never empty.
//! - Entry `i` lies on row `i`, so `len() == current_row() + 1`.

use crate::geometry::Point;

/// Stack of visited squares, one per open row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorTrack {
    points: Vec<Point>,
}

impl CursorTrack {
    /// Create a track positioned on `(0, 0)`.
    pub fn new(size: usize) -> Self {
        let mut points = Vec::with_capacity(size);
        points.push(Point::ORIGIN);
        Self { points }
    }

    /// The cursor: the square currently under consideration.
    pub fn current(&self) -> Point {
        *self
            .points
            .last()
            .expect("Cursor track is never empty")
    }

    /// The entry one row above the cursor, if any.
    pub fn previous(&self) -> Option<Point> {
        self.points.len().checked_sub(2).map(|i| self.points[i])
    }

    /// Row of the cursor.
    pub fn current_row(&self) -> usize {
        self.points.len() - 1
    }

    /// Open the next row at its first column.
    pub fn descend(&mut self) {
        let row = self.points.len() as i32;
        self.points.push(Point::new(0, row));
    }

    /// Move the cursor one column to the right within its row.
    pub fn advance(&mut self) {
        let top = self
            .points
            .last_mut()
            .expect("Cursor track is never empty");
        top.x += 1;
    }

    /// Close the cursor's row and return to the row above.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is on row 0; the first row is never closed.
    pub fn pop(&mut self) -> Point {
        if self.points.len() < 2 {
            panic!("Cannot backtrack from the first row");
        }
        self.points.pop().expect("Cursor track is never empty")
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; provided for API symmetry with `len()`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entries from row 0 to the cursor.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
