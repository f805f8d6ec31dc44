// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Presentation boundary.
//!
//! The search never draws anything itself. A driver takes a [`GridSnapshot`]
//! after each step and hands it to a [`BoardView`], which decides how to show
//! it. [`TextView`] is the terminal implementation used by the `nqueen` binary.

pub mod snapshot;
pub mod text;

pub use snapshot::GridSnapshot;
pub use text::TextView;

use std::io;

/// Something that can show a search in progress.
pub trait BoardView {
    /// Show the board after a step.
    fn render(&mut self, snapshot: &GridSnapshot) -> io::Result<()>;

    /// Show a newly found placement; `count` is the result count including it.
    fn report_solution(&mut self, snapshot: &GridSnapshot, count: usize) -> io::Result<()>;

    /// Show the running result count.
    fn report_count(&mut self, count: usize) -> io::Result<()>;
}
