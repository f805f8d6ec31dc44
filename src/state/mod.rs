// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - Square / SquareState: per-cell state and territory count
//! - BoardGrid: the size × size matrix of squares
//! - ResultRegistry: identifiers of the placements found so far
//! - Statistics: transition counters

pub mod grid;
pub mod registry;
pub mod square;
pub mod statistics;

pub use grid::BoardGrid;
pub use registry::ResultRegistry;
pub use square::{Square, SquareState};
pub use statistics::{Counters, Statistics};
