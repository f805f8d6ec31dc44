// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The transition table of the step automaton.
//!
//! A transition is chosen from the cursor square alone: its state, whether it
//! is attacked, and where it sits on the board. Choosing never mutates
//! anything, so a caller can inspect the next move before taking it.

use std::fmt;

use crate::geometry::Point;
use crate::state::{Square, SquareState};

/// One atomic move of the search.
///
/// | cursor square        | position                 | transition  |
/// |----------------------|--------------------------|-------------|
/// | Empty, attacked      | any                      | `Fail`      |
/// | Empty, not attacked  | any                      | `Place`     |
/// | Queen                | not on the last row      | `Descend`   |
/// | Queen                | last row                 | `Backtrack` |
/// | Success or Failed    | not in the last column   | `Advance`   |
/// | Success or Failed    | last column, row > 0     | `Backtrack` |
/// | Success or Failed    | last column, row 0       | `Exhausted` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Mark the attacked cursor square as failed.
    Fail,
    /// Put a queen on the cursor square; may complete a placement.
    Place,
    /// Open the next row at column 0.
    Descend,
    /// Move the cursor one column to the right.
    Advance,
    /// Close the cursor's row and resolve the queen above it.
    Backtrack,
    /// Nothing left to explore; no state changes.
    Exhausted,
}

impl Transition {
    /// Select the transition for the cursor square `square` at `cursor`.
    pub fn decide(square: &Square, cursor: Point, size: usize) -> Transition {
        let on_last_row = cursor.y as usize + 1 >= size;
        let has_next_column = (cursor.x as usize) + 1 < size;

        match square.state() {
            SquareState::Empty if square.is_under_attack() => Transition::Fail,
            SquareState::Empty => Transition::Place,
            SquareState::Queen if on_last_row => Transition::Backtrack,
            SquareState::Queen => Transition::Descend,
            SquareState::Success | SquareState::Failed => {
                if has_next_column {
                    Transition::Advance
                } else if cursor.y > 0 {
                    Transition::Backtrack
                } else {
                    Transition::Exhausted
                }
            }
        }
    }

    /// False only for `Exhausted`.
    pub fn is_executed(self) -> bool {
        self != Transition::Exhausted
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Fail => "fail",
            Transition::Place => "place",
            Transition::Descend => "descend",
            Transition::Advance => "advance",
            Transition::Backtrack => "backtrack",
            Transition::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(state: SquareState, attackers: i32) -> Square {
        let mut square = Square::new();
        square.set_state(state);
        square.add_territory(attackers);
        square
    }

    #[test]
    fn test_empty_square() {
        let p = Point::new(1, 2);
        assert_eq!(
            Transition::decide(&square(SquareState::Empty, 0), p, 8),
            Transition::Place
        );
        assert_eq!(
            Transition::decide(&square(SquareState::Empty, 2), p, 8),
            Transition::Fail
        );
    }

    #[test]
    fn test_queen_square() {
        let queen = square(SquareState::Queen, 0);
        assert_eq!(
            Transition::decide(&queen, Point::new(3, 6), 8),
            Transition::Descend
        );
        assert_eq!(
            Transition::decide(&queen, Point::new(3, 7), 8),
            Transition::Backtrack
        );
    }

    #[test]
    fn test_resolved_square() {
        for state in [SquareState::Success, SquareState::Failed] {
            let resolved = square(state, 1);
            assert_eq!(
                Transition::decide(&resolved, Point::new(2, 3), 4),
                Transition::Advance
            );
            assert_eq!(
                Transition::decide(&resolved, Point::new(3, 3), 4),
                Transition::Backtrack
            );
            assert_eq!(
                Transition::decide(&resolved, Point::new(3, 0), 4),
                Transition::Exhausted
            );
        }
    }

    #[test]
    fn test_is_executed() {
        assert!(Transition::Place.is_executed());
        assert!(Transition::Backtrack.is_executed());
        assert!(!Transition::Exhausted.is_executed());
    }
}
