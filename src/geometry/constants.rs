// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board size limits and identifier encoding constants.
//!
//! The exact placement identifier packs one nibble per row into a `u64`:
//! row `j` contributes `(column + 1) << (j * UID_NIBBLE_BITS)`. A nibble can hold
//! columns `0..=14`, and the board height fixes the total width at
//! `UID_NIBBLE_BITS * size` bits. Boards are capped at 12 so that identifiers stay
//! within 48 bits.
//!
//! # Supported sizes
//!
//! - 4: smallest board with any solution (2 placements, 1 up to symmetry)
//! - 8: the classic puzzle (92 placements, 12 up to symmetry) - **default**
//! - 12: largest board the identifier encoding supports

/// Number of bits reserved per row in an exact identifier.
pub const UID_NIBBLE_BITS: usize = 4;

/// Bit width of the identifier for the largest supported board.
pub const MAX_UID_BITS: usize = UID_NIBBLE_BITS * BoardSize::MAX;

/// Board size limits.
///
/// This is a namespace for the size constants rather than a newtype; sizes are
/// carried as `usize` and validated once by [`crate::context::SearchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BoardSize;

impl BoardSize {
    /// Smallest supported board.
    pub const MIN: usize = 4;

    /// Largest supported board (bounded by the identifier encoding).
    pub const MAX: usize = 12;

    /// Board used when no size is given.
    pub const DEFAULT: usize = 8;

    /// Check whether `size` is within `MIN..=MAX`.
    pub const fn is_supported(size: usize) -> bool {
        size >= Self::MIN && size <= Self::MAX
    }
}

// The largest column value (MAX - 1) plus one must fit in a nibble,
// and all nibbles must fit in the identifier type.
const _: () = assert!(BoardSize::MAX < (1 << UID_NIBBLE_BITS));
const _: () = assert!(MAX_UID_BITS <= u64::BITS as usize);
