// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Queen attack rays.

use super::point::{Point, QUEEN_DIRECTIONS};

/// True iff `(x, y)` lies on a `size × size` board.
#[inline]
pub fn is_on_board(size: usize, x: i32, y: i32) -> bool {
    let size = size as i32;
    (0..size).contains(&x) && (0..size).contains(&y)
}

/// All squares attacked by a queen standing on `origin`.
///
/// Rays are walked in [`QUEEN_DIRECTIONS`] order, each from the square next to
/// `origin` outwards, and stop at the first square off the board. The origin
/// itself is never included.
pub fn queen_territory_points(size: usize, origin: Point) -> Vec<Point> {
    let mut points = Vec::with_capacity(4 * size);
    for direction in QUEEN_DIRECTIONS {
        let mut p = origin + direction;
        while is_on_board(size, p.x, p.y) {
            points.push(p);
            p = p + direction;
        }
    }
    points
}
