// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: one N-Queens search instance.
//!
//! The SearchContext owns everything a run needs under a single, immutable
//! [`SearchConfig`]:
//! - the board grid (square states and territory counts)
//! - the cursor track (the explicit stack that replaces recursion)
//! - the result registry (identifiers found so far)
//! - statistics
//!
//! Contexts are never reconfigured. To change the board size or the symmetry
//! option, build a new context and drop the old one.

use std::iter::FusedIterator;

use crate::engine::{self, StepResult, Transition};
use crate::errors::SearchError;
use crate::geometry::{BoardSize, Point};
use crate::state::{BoardGrid, ResultRegistry, Square, SquareState, Statistics};
use crate::trail::CursorTrack;
use crate::view::GridSnapshot;

/// Run configuration: board size and whether symmetric placements count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    board_size: usize,
    exclude_symmetry: bool,
}

impl SearchConfig {
    /// Validate and build a configuration.
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] if `board_size` is outside
    /// `BoardSize::MIN..=BoardSize::MAX`. Sizes are never clamped.
    pub fn new(board_size: usize, exclude_symmetry: bool) -> Result<Self, SearchError> {
        if !BoardSize::is_supported(board_size) {
            return Err(SearchError::InvalidConfiguration {
                size: board_size,
                min: BoardSize::MIN,
                max: BoardSize::MAX,
            });
        }
        Ok(Self {
            board_size,
            exclude_symmetry,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// When true, placements that are rotations or reflections of an earlier
    /// result are not counted again.
    pub fn exclude_symmetry(&self) -> bool {
        self.exclude_symmetry
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::DEFAULT,
            exclude_symmetry: false,
        }
    }
}

/// A search instance.
///
/// The caller owns the context and drives it with [`SearchContext::step`].
/// Nothing is shared between contexts.
///
/// # Example
///
/// ```
/// use nqueen_step::context::{SearchConfig, SearchContext};
///
/// let mut ctx = SearchContext::new(SearchConfig::new(8, true).unwrap());
/// let steps = ctx.steps().count();
/// assert!(steps > 0);
/// assert_eq!(ctx.result_count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub(crate) config: SearchConfig,
    pub(crate) grid: BoardGrid,
    pub(crate) track: CursorTrack,
    pub(crate) registry: ResultRegistry,
    pub(crate) statistics: Statistics,
}

impl SearchContext {
    /// Create a context in the initial state: empty board, cursor on `(0, 0)`.
    pub fn new(config: SearchConfig) -> Self {
        let size = config.board_size();
        Self {
            config,
            grid: BoardGrid::new(size),
            track: CursorTrack::new(size),
            registry: ResultRegistry::new(),
            statistics: Statistics::new(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size()
    }

    /// Perform exactly one transition.
    pub fn step(&mut self) -> StepResult {
        engine::step(self)
    }

    /// The transition the next call to [`step`](Self::step) will perform.
    pub fn next_transition(&self) -> Transition {
        let cursor = self.track.current();
        Transition::decide(self.grid.square(cursor), cursor, self.board_size())
    }

    /// True once every column of the first row has been resolved.
    pub fn is_exhausted(&self) -> bool {
        self.next_transition() == Transition::Exhausted
    }

    /// Iterate over executed steps until the search is exhausted.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { ctx: self }
    }

    /// Step until exhaustion. Returns the number of executed steps.
    pub fn run_to_exhaustion(&mut self) -> u64 {
        self.steps().fold(0, |count, _| count + 1)
    }

    /// The cursor square.
    pub fn current_point(&self) -> Point {
        self.track.current()
    }

    /// Row of the cursor; the cursor track holds `current_row() + 1` entries.
    pub fn current_row(&self) -> usize {
        self.track.current_row()
    }

    /// Cursor track entries from row 0 down to the cursor.
    pub fn track(&self) -> &[Point] {
        self.track.points()
    }

    fn checked_square(&self, x: i32, y: i32) -> Result<&Square, SearchError> {
        self.grid.get(x, y).ok_or(SearchError::OutOfBounds {
            x,
            y,
            size: self.board_size(),
        })
    }

    pub fn square_state(&self, x: i32, y: i32) -> Result<SquareState, SearchError> {
        Ok(self.checked_square(x, y)?.state())
    }

    pub fn is_queen(&self, x: i32, y: i32) -> Result<bool, SearchError> {
        Ok(self.checked_square(x, y)?.is_queen())
    }

    /// Number of placed queens attacking `(x, y)`.
    pub fn territory_count(&self, x: i32, y: i32) -> Result<u32, SearchError> {
        Ok(self.checked_square(x, y)?.territory_count())
    }

    /// Number of registered results.
    pub fn result_count(&self) -> usize {
        self.registry.len()
    }

    /// Registered identifiers in discovery order: exact identifiers, or group
    /// identifiers when symmetry is excluded.
    pub fn result_ids(&self) -> &[u64] {
        self.registry.ids()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    /// Copy of the board and cursor for a view.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid, self.current_point())
    }
}

/// Iterator returned by [`SearchContext::steps`].
///
/// Yields the result of every executed step and ends at exhaustion.
#[derive(Debug)]
pub struct Steps<'a> {
    ctx: &'a mut SearchContext,
}

impl Iterator for Steps<'_> {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        let result = self.ctx.step();
        result.is_executed().then_some(result)
    }
}

impl FusedIterator for Steps<'_> {}
