//! Per-kind identifier indexes used to resolve foreign keys.

use std::collections::HashMap;

use crate::model::{HyperlaneId, PlanetId, RegionId, SectorId, SystemId};

/// `wiki_link` -> handle for one entity kind
#[derive(Debug, Clone)]
pub struct KeyIndex<I> {
    by_link: HashMap<String, I>,
}

impl<I: Copy> KeyIndex<I> {
    pub fn new() -> Self {
        Self {
            by_link: HashMap::new(),
        }
    }

    /// Register a handle under its link. The first entity registered under a
    /// link keeps it; returns false for a duplicate.
    pub fn insert(&mut self, link: &str, id: I) -> bool {
        if self.by_link.contains_key(link) {
            return false;
        }
        self.by_link.insert(link.to_string(), id);
        true
    }

    pub fn get(&self, link: &str) -> Option<I> {
        self.by_link.get(link).copied()
    }
}

impl<I: Copy> Default for KeyIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexes for every kind that other sources refer to
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub regions: KeyIndex<RegionId>,
    pub sectors: KeyIndex<SectorId>,
    pub systems: KeyIndex<SystemId>,
    pub planets: KeyIndex<PlanetId>,
    pub hyperlanes: KeyIndex<HyperlaneId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_wins() {
        let mut index = KeyIndex::new();
        assert!(index.insert("core", RegionId(0)));
        assert!(!index.insert("core", RegionId(1)));

        assert_eq!(index.get("core"), Some(RegionId(0)));
    }

    #[test]
    fn test_missing_link_is_none() {
        let index: KeyIndex<SystemId> = KeyIndex::new();
        assert_eq!(index.get("sol"), None);
    }
}
