// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building and querying a search.
//!
//! Only caller mistakes are reported as errors. Broken automaton invariants
//! (a negative territory count, an empty cursor track) panic instead.

use thiserror::Error;

/// Errors returned by the public search API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Board size outside the supported range.
    #[error("board size {size} is not supported (expected {min}..={max})")]
    InvalidConfiguration { size: usize, min: usize, max: usize },

    /// Square coordinates outside the board.
    #[error("square ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SearchError::InvalidConfiguration {
            size: 13,
            min: 4,
            max: 12,
        };
        assert_eq!(
            err.to_string(),
            "board size 13 is not supported (expected 4..=12)"
        );

        let err = SearchError::OutOfBounds { x: 8, y: 0, size: 8 };
        assert_eq!(err.to_string(), "square (8, 0) is outside the 8x8 board");
    }
}
