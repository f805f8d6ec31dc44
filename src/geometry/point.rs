// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board coordinates and unit steps.

use std::fmt;
use std::ops::Add;

/// A location on the board.
///
/// `x` is the column and `y` is the row, both 0-based from the top-left corner.
/// Coordinates are signed so that ray walks can step off the board and be
/// rejected by [`super::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `steps` times along `direction`.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i32) -> Point {
        Point::new(
            self.x + direction.dx * steps,
            self.y + direction.dy * steps,
        )
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Direction) -> Point {
        self.offset(rhs, 1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit step on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const LEFT_UP: Direction = Direction::new(-1, -1);
    pub const UP: Direction = Direction::new(0, -1);
    pub const RIGHT_UP: Direction = Direction::new(1, -1);
    pub const LEFT: Direction = Direction::new(-1, 0);
    pub const RIGHT: Direction = Direction::new(1, 0);
    pub const LEFT_DOWN: Direction = Direction::new(-1, 1);
    pub const DOWN: Direction = Direction::new(0, 1);
    pub const RIGHT_DOWN: Direction = Direction::new(1, 1);

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// The 8 queen rays, upper row first, then left/right, then lower row.
pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    Direction::LEFT_UP,
    Direction::UP,
    Direction::RIGHT_UP,
    Direction::LEFT,
    Direction::RIGHT,
    Direction::LEFT_DOWN,
    Direction::DOWN,
    Direction::RIGHT_DOWN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Point::new(2, 3);
        assert_eq!(p.offset(Direction::RIGHT_UP, 2), Point::new(4, 1));
        assert_eq!(p + Direction::LEFT, Point::new(1, 3));
    }

    #[test]
    fn test_queen_directions_exclude_zero() {
        assert!(QUEEN_DIRECTIONS.iter().all(|d| (d.dx, d.dy) != (0, 0)));
        for (i, a) in QUEEN_DIRECTIONS.iter().enumerate() {
            for b in &QUEEN_DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(0, 7).to_string(), "(0, 7)");
    }
}
