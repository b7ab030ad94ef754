// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection set for nodes and edges.
//!
//! A thin wrapper over `BTreeSet<EntityId>` so iteration order is
//! deterministic. Selection is interaction state: it is not part of the
//! document and never appears in the undo history.

use crate::model::EntityId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    inner: BTreeSet<EntityId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.inner.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.inner.iter().copied()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn insert(&mut self, id: EntityId) {
        self.inner.insert(id);
    }

    pub fn remove(&mut self, id: EntityId) {
        self.inner.remove(&id);
    }

    /// Make `id` the only selected entity.
    pub fn select_only(&mut self, id: EntityId) {
        self.inner.clear();
        self.inner.insert(id);
    }

    /// Replace the whole selection, e.g. after a box select.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.inner = ids.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> EntityId {
        EntityId::from_raw(raw)
    }

    #[test]
    fn select_only_drops_previous_selection() {
        let mut sel = Selection::new();
        sel.insert(id(1));
        sel.insert(id(2));
        sel.select_only(id(3));

        assert_eq!(sel.len(), 1);
        assert!(sel.contains(id(3)));
    }

    #[test]
    fn replace_takes_an_arbitrary_set() {
        let mut sel = Selection::new();
        sel.insert(id(9));
        sel.replace([id(1), id(2), id(2)]);

        assert_eq!(sel.len(), 2);
        assert!(sel.contains(id(1)) && sel.contains(id(2)));
        assert!(!sel.contains(id(9)));
    }

    #[test]
    fn iteration_is_ordered() {
        let mut sel = Selection::new();
        sel.replace([id(5), id(1), id(3)]);
        let order: Vec<EntityId> = sel.iter().collect();
        assert_eq!(order, vec![id(1), id(3), id(5)]);
    }
}
