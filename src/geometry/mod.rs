// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board geometry.
//!
//! Pure functions and value types over board coordinates:
//! - Point: a square location (column, row)
//! - Direction: a unit step, and the 8 queen rays
//! - territory: bounds checking and the squares a queen attacks
//! - constants: supported board sizes and identifier widths

pub mod constants;
pub mod point;
pub mod territory;

// Re-export for convenience
pub use constants::*;
pub use point::{Direction, Point, QUEEN_DIRECTIONS};
pub use territory::{is_on_board, queen_territory_points};
