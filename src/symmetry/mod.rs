// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Placement identifiers and symmetry normalization.
//!
//! ## Module Structure
//!
//! - `identifier`: exact identifiers and group identifiers under the dihedral group D4
//! - `mod`: Public API and re-exports

pub mod identifier;

pub use identifier::{
    arranged_gid, arranged_uid, arranged_uid_with, Orientation, DIHEDRAL_ORIENTATIONS, IDENTITY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;

    #[test]
    fn test_dihedral_orientations_structure() {
        let group = DIHEDRAL_ORIENTATIONS;

        // First element is identity
        assert_eq!(group[0], IDENTITY);
        assert_eq!(group[0].first, Direction::RIGHT);
        assert_eq!(group[0].second, Direction::DOWN);

        // Each corner appears twice, once per axis ordering
        for pair in group.chunks(2) {
            assert_eq!(pair[0].corner, pair[1].corner);
            assert_eq!(pair[0].first, pair[1].second);
            assert_eq!(pair[0].second, pair[1].first);
        }
    }

    #[test]
    fn test_orientation_starts() {
        let starts: Vec<_> = DIHEDRAL_ORIENTATIONS.iter().map(|o| o.start(8)).collect();
        assert_eq!(starts[0].x, 0);
        assert_eq!(starts[2].x, 7);
        assert_eq!(starts[4].y, 7);
        assert_eq!((starts[6].x, starts[6].y), (7, 7));
    }
}
