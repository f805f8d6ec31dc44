// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Placement identifiers under the dihedral group of the square.
//!
//! This module computes integer identifiers for a full queen placement (one
//! queen per row), and a group identifier that is the same for every placement
//! in a symmetry class.

use crate::geometry::{Direction, Point, UID_NIBBLE_BITS};
use crate::state::BoardGrid;

/// A way of reading the board: a starting corner and two axes.
///
/// The identifier walks the outer axis (`second`) row by row and the inner
/// axis (`first`) square by square, so each orientation corresponds to one
/// element of the dihedral group D4 applied before reading in the default
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Starting corner, expressed as a multiple of `size - 1` on each axis (0 or 1).
    pub corner: (i32, i32),
    /// Inner axis.
    pub first: Direction,
    /// Outer axis.
    pub second: Direction,
}

impl Orientation {
    const fn new(corner: (i32, i32), first: Direction, second: Direction) -> Self {
        Self {
            corner,
            first,
            second,
        }
    }

    /// Starting square of this orientation on a `size × size` board.
    pub fn start(&self, size: usize) -> Point {
        let last = size as i32 - 1;
        Point::new(self.corner.0 * last, self.corner.1 * last)
    }
}

/// Row-major, left to right, top to bottom.
pub const IDENTITY: Orientation = Orientation::new((0, 0), Direction::RIGHT, Direction::DOWN);

/// The 8 orientations: 4 corners times 2 axis orderings.
///
/// The first element is the identity; entries at odd indices swap the axes
/// (transpositions about a diagonal).
pub const DIHEDRAL_ORIENTATIONS: [Orientation; 8] = [
    IDENTITY,
    Orientation::new((0, 0), Direction::DOWN, Direction::RIGHT),
    Orientation::new((1, 0), Direction::LEFT, Direction::DOWN),
    Orientation::new((1, 0), Direction::DOWN, Direction::LEFT),
    Orientation::new((0, 1), Direction::RIGHT, Direction::UP),
    Orientation::new((0, 1), Direction::UP, Direction::RIGHT),
    Orientation::new((1, 1), Direction::LEFT, Direction::UP),
    Orientation::new((1, 1), Direction::UP, Direction::LEFT),
];

/// Exact identifier of the placement on `grid`, read in `orientation`.
///
/// For outer index `j` and inner index `i`, a queen contributes
/// `(i + 1) << (j * UID_NIBBLE_BITS)`. With one queen per outer line this
/// records the inner position of every queen in its own nibble, so distinct
/// placements never collide.
///
/// Squares are addressed from the orientation's corner, so every orientation
/// stays on the board.
pub fn arranged_uid_with(grid: &BoardGrid, orientation: &Orientation) -> u64 {
    let size = grid.size();
    let start = orientation.start(size);
    let mut id: u64 = 0;

    for j in 0..size {
        let line = start.offset(orientation.second, j as i32);
        for i in 0..size {
            let p = line.offset(orientation.first, i as i32);
            if grid.square(p).is_queen() {
                id |= ((i as u64) + 1) << (j * UID_NIBBLE_BITS);
            }
        }
    }

    id
}

/// Exact identifier of the placement on `grid` in the default (row-major) reading.
pub fn arranged_uid(grid: &BoardGrid) -> u64 {
    arranged_uid_with(grid, &IDENTITY)
}

/// Group identifier: the smallest exact identifier over all 8 orientations.
///
/// Placements related by a rotation or reflection share this value.
pub fn arranged_gid(grid: &BoardGrid) -> u64 {
    DIHEDRAL_ORIENTATIONS
        .iter()
        .map(|orientation| arranged_uid_with(grid, orientation))
        .min()
        .unwrap_or(0)
}
