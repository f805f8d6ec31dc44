// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Identifiers of the placements found so far.

use rustc_hash::FxHashSet;

/// Append-only record of placement identifiers, in discovery order.
///
/// Depending on the run configuration the identifiers are exact placement
/// identifiers or group identifiers; the registry does not care which.
#[derive(Debug, Clone, Default)]
pub struct ResultRegistry {
    ids: Vec<u64>,
    seen: FxHashSet<u64>,
}

impl ResultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }

    /// Append `id` unconditionally.
    pub fn push(&mut self, id: u64) {
        self.seen.insert(id);
        self.ids.push(id);
    }

    /// Append `id` unless it is already present. Returns true if it was added.
    pub fn insert_new(&mut self, id: u64) -> bool {
        if self.seen.insert(id) {
            self.ids.push(id);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in the order they were registered.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_new_rejects_duplicates() {
        let mut registry = ResultRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.insert_new(9235));
        assert!(!registry.insert_new(9235));
        assert!(registry.insert_new(12610));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), &[9235, 12610]);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut registry = ResultRegistry::new();
        registry.push(3);
        registry.push(1);
        registry.push(2);
        assert_eq!(registry.ids(), &[3, 1, 2]);
        assert!(registry.contains(1));
        assert!(!registry.contains(4));
    }
}
