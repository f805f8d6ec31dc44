// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single board square.

use std::fmt;

/// Search state of a square.
///
/// `Success` and `Failed` mark columns whose subtree has already been
/// explored: `Success` if it contributed at least one placement, `Failed`
/// if the square was attacked or its subtree produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SquareState {
    #[default]
    Empty,
    Queen,
    Success,
    Failed,
}

impl SquareState {
    /// True for `Success` and `Failed`.
    pub fn is_resolved(self) -> bool {
        matches!(self, SquareState::Success | SquareState::Failed)
    }

    /// Single-character label used by text views.
    pub fn symbol(self) -> char {
        match self {
            SquareState::Empty => '.',
            SquareState::Queen => 'Q',
            SquareState::Success => 'o',
            SquareState::Failed => 'x',
        }
    }
}

impl fmt::Display for SquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square: its state and how many placed queens attack it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    state: SquareState,
    territory_count: u32,
}

impl Square {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SquareState {
        self.state
    }

    pub fn set_state(&mut self, state: SquareState) {
        self.state = state;
    }

    pub fn is_empty(&self) -> bool {
        self.state == SquareState::Empty
    }

    pub fn is_queen(&self) -> bool {
        self.state == SquareState::Queen
    }

    /// Number of placed queens whose rays cover this square.
    pub fn territory_count(&self) -> u32 {
        self.territory_count
    }

    /// True when at least one placed queen attacks this square.
    pub fn is_under_attack(&self) -> bool {
        self.territory_count > 0
    }

    /// Add `delta` to the territory count.
    ///
    /// Returns the new count, or `None` (leaving the count unchanged) if it
    /// would go negative.
    pub(crate) fn add_territory(&mut self, delta: i32) -> Option<u32> {
        let count = self.territory_count.checked_add_signed(delta)?;
        self.territory_count = count;
        Some(count)
    }
}
