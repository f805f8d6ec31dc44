// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use nqueen_step::geometry::{queen_territory_points, Point};
use nqueen_step::{SearchConfig, SearchContext};

/// Generous cap on the number of steps any search may take.
///
/// Every column of every row is visited at most once per queen configuration
/// above it, so `4 * size^size` is far above the real count.
pub fn step_bound(size: usize) -> u64 {
    4 * (size as u64).pow(size as u32)
}

pub fn new_context(size: usize, exclude_symmetry: bool) -> SearchContext {
    SearchContext::new(SearchConfig::new(size, exclude_symmetry).expect("valid board size"))
}

/// Run a search to exhaustion, panicking if it exceeds [`step_bound`].
pub fn run_bounded(size: usize, exclude_symmetry: bool) -> SearchContext {
    let mut ctx = new_context(size, exclude_symmetry);
    let bound = step_bound(size);
    let mut steps = 0;
    while ctx.step().is_executed() {
        steps += 1;
        assert!(steps <= bound, "search of size {} exceeded {} steps", size, bound);
    }
    ctx
}

/// Territory counts recomputed from scratch from the queens on the board.
pub fn expected_territory(ctx: &SearchContext) -> Vec<u32> {
    let size = ctx.board_size();
    let mut counts = vec![0u32; size * size];
    for queen in ctx.grid().queens() {
        for p in queen_territory_points(size, queen) {
            counts[p.y as usize * size + p.x as usize] += 1;
        }
    }
    counts
}

/// Check every structural invariant of a context, panicking with `label` on failure.
pub fn assert_invariants(ctx: &SearchContext, label: &str) {
    let size = ctx.board_size();

    // Cursor depth
    let track = ctx.track();
    assert_eq!(track.len(), ctx.current_row() + 1, "{}: track depth", label);
    assert!(ctx.current_row() < size, "{}: cursor row in range", label);
    for (row, p) in track.iter().enumerate() {
        assert_eq!(p.y as usize, row, "{}: track entry {} on its row", label, row);
        assert!((0..size as i32).contains(&p.x), "{}: column in range", label);
    }

    // Every row above the cursor holds the queen the track points at
    for p in &track[..track.len() - 1] {
        assert_eq!(ctx.is_queen(p.x, p.y), Ok(true), "{}: queen at {}", label, p);
    }

    // Territory counts match the queens actually on the board
    let expected = expected_territory(ctx);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let actual = ctx.territory_count(x, y).expect("on board");
            assert_eq!(
                actual,
                expected[y as usize * size + x as usize],
                "{}: territory at {}",
                label,
                Point::new(x, y)
            );
        }
    }
}
