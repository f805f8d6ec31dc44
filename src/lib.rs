// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step-by-step N-Queens backtracking search.
//!
//! The search places queens row by row, but instead of recursing it keeps an
//! explicit cursor track and advances one observable transition per call, so a
//! driver can animate it, pause it, or run it to the end.
//!
//! # Architecture
//!
//! ## Board state
//!
//! - Board grid: `size × size` squares, each with a search state
//!   (Empty, Queen, Success, Failed) and a territory count
//! - Cursor track: one entry per open row; the top entry is the cursor
//! - Result registry: identifiers of the placements found so far
//!
//! ## Step automaton
//!
//! Each call to [`SearchContext::step`] looks at the cursor square, selects a
//! [`Transition`] and applies it:
//! place a queen, mark an attacked square failed, descend a row, advance a
//! column, backtrack, or report that the search is exhausted.
//!
//! ## Identifiers
//!
//! A full placement is identified by packing each row's queen column into a
//! 4-bit nibble. With symmetry excluded, the smallest identifier over the 8
//! rotations and reflections of the board is used instead, so each symmetry
//! class is counted once.
//!
//! # Known totals
//!
//! | N | placements | up to symmetry |
//! |---|------------|----------------|
//! | 4 | 2          | 1              |
//! | 5 | 10         | 2              |
//! | 6 | 4          | 1              |
//! | 8 | 92         | 12             |

pub mod context;
pub mod engine;
pub mod errors;
pub mod geometry;
pub mod session;
pub mod state;
pub mod symmetry;
pub mod trail;
pub mod view;

// Re-export commonly used types
pub use context::{SearchConfig, SearchContext};
pub use engine::{StepResult, Transition};
pub use errors::SearchError;
pub use geometry::Point;
pub use state::SquareState;
pub use trail::CursorTrack;
