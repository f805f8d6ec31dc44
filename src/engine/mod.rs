// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step automaton.
//!
//! This module runs the N-Queens backtracking search one observable step at a
//! time. There is no recursion and no hidden call stack: the cursor track in
//! the [`SearchContext`] plays that role, and every call to [`step`] performs
//! exactly one [`Transition`] before returning control to the caller.
//!
//! # Execution model
//!
//! 1. Read the cursor square and select a transition (see [`Transition::decide`])
//! 2. `Fail`: mark the attacked square failed; the next step advances past it
//! 3. `Place`: put a queen down and add its territory; on the last row the
//!    placement is complete and is checked against the result registry
//! 4. `Descend` / `Advance`: move the cursor down a row or right a column
//! 5. `Backtrack`: close the cursor row, resolve the queen above it as
//!    `Success` or `Failed`, and withdraw that queen's territory
//! 6. `Exhausted`: the whole board has been explored; nothing changes
//!
//! Success and failure marks are how the automaton remembers which columns
//! have already been explored when it returns to a row.
//!
//! # Example
//!
//! ```
//! use nqueen_step::context::{SearchConfig, SearchContext};
//!
//! let config = SearchConfig::new(6, false).unwrap();
//! let mut ctx = SearchContext::new(config);
//!
//! while ctx.step().is_executed() {}
//! assert_eq!(ctx.result_count(), 4);
//! ```

pub mod transition;

pub use transition::Transition;

use tracing::{debug, info, trace};

use crate::context::SearchContext;
use crate::geometry::{queen_territory_points, Point};
use crate::state::{Counters, SquareState};
use crate::symmetry::{arranged_gid, arranged_uid};

/// Outcome of one call to [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    transition: Transition,
    solved: bool,
}

impl StepResult {
    /// The result returned once the search is exhausted.
    pub const EXHAUSTED: StepResult = StepResult {
        transition: Transition::Exhausted,
        solved: false,
    };

    /// True if a transition was performed; false once the search is exhausted.
    pub fn is_executed(&self) -> bool {
        self.transition.is_executed()
    }

    /// True if this step completed a placement that was added to the results.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The transition that was performed.
    pub fn transition(&self) -> Transition {
        self.transition
    }
}

/// Perform exactly one transition on `ctx`.
///
/// After exhaustion this returns [`StepResult::EXHAUSTED`] and leaves `ctx`
/// untouched, however many times it is called.
pub fn step(ctx: &mut SearchContext) -> StepResult {
    let size = ctx.config.board_size();
    let cursor = ctx.track.current();
    let transition = Transition::decide(ctx.grid.square(cursor), cursor, size);
    let mut solved = false;

    match transition {
        Transition::Fail => {
            ctx.grid.set_state(cursor, SquareState::Failed);
            ctx.statistics.increment_counter(Counters::Failures);
        }
        Transition::Place => {
            solved = place_queen(ctx, cursor);
        }
        Transition::Descend => {
            ctx.track.descend();
            ctx.statistics.increment_counter(Counters::Descents);
        }
        Transition::Advance => {
            ctx.track.advance();
            ctx.statistics.increment_counter(Counters::Advances);
        }
        Transition::Backtrack => {
            backtrack(ctx);
            ctx.statistics.increment_counter(Counters::Backtracks);
        }
        Transition::Exhausted => return StepResult::EXHAUSTED,
    }

    ctx.statistics.increment_counter(Counters::Steps);
    trace!(%transition, %cursor, solved, "step");

    // Only an executed step can close the search, so this fires once.
    if ctx.is_exhausted() {
        info!(
            results = ctx.registry.len(),
            statistics = %ctx.statistics,
            "search space exhausted"
        );
    }

    StepResult { transition, solved }
}

/// Put a queen on `cursor` and, on the last row, register the placement.
///
/// Returns true if the completed placement is a new result.
fn place_queen(ctx: &mut SearchContext, cursor: Point) -> bool {
    let size = ctx.config.board_size();
    ctx.grid.set_state(cursor, SquareState::Queen);
    let territory = queen_territory_points(size, cursor);
    ctx.grid.adjust_territory(&territory, 1);
    ctx.statistics.increment_counter(Counters::Placements);

    if (cursor.y as usize) + 1 < size {
        return false;
    }

    if ctx.config.exclude_symmetry() {
        let gid = arranged_gid(&ctx.grid);
        if ctx.registry.insert_new(gid) {
            ctx.statistics.increment_counter(Counters::Solutions);
            debug!(gid, count = ctx.registry.len(), "new placement class");
            true
        } else {
            ctx.statistics.increment_counter(Counters::DuplicateSolutions);
            debug!(gid, "symmetric duplicate rejected");
            false
        }
    } else {
        let uid = arranged_uid(&ctx.grid);
        debug_assert!(
            !ctx.registry.contains(uid),
            "Placement {uid} registered twice"
        );
        ctx.registry.push(uid);
        ctx.statistics.increment_counter(Counters::Solutions);
        debug!(uid, count = ctx.registry.len(), "new placement");
        true
    }
}

/// Close the cursor row and resolve the queen in the row above.
///
/// The queen above becomes `Success` if the closed row held a queen or any
/// `Success` mark, `Failed` otherwise. Its territory is withdrawn so that the
/// row can be searched further from the next column.
fn backtrack(ctx: &mut SearchContext) {
    let size = ctx.config.board_size();
    let current = ctx.track.current();
    let previous = ctx
        .track
        .previous()
        .expect("Backtracking requires an open row above the cursor");

    let outcome = if ctx.grid.square(current).is_queen() {
        let territory = queen_territory_points(size, current);
        ctx.grid.adjust_territory(&territory, -1);
        SquareState::Success
    } else if ctx.grid.row_has_state(current.y, SquareState::Success) {
        SquareState::Success
    } else {
        SquareState::Failed
    };

    ctx.grid.clear_row(current.y);
    ctx.track.pop();

    debug_assert!(
        ctx.grid.square(previous).is_queen(),
        "Row above {} has no queen at {}",
        current,
        previous
    );
    ctx.grid.set_state(previous, outcome);
    let territory = queen_territory_points(size, previous);
    ctx.grid.adjust_territory(&territory, -1);
}
