// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for nodes and edges.
//!
//! Each `EntityId` is a monotonically increasing `u64` handed out by the
//! scene graph that owns it. IDs are used as keys in `Selection` sets,
//! as hit-test results, and inside undo commands. They are never reused
//! within a session, so a command that re-creates a deleted entity on
//! redo restores it under its original id and stale references stay
//! unambiguous forever.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for an entity (node or edge).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(u64);

impl EntityId {
    /// Build an id from its numeric form. Only tests need this; real
    /// ids always come from a scene's `IdSource`.
    #[allow(dead_code)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The numeric form, for hosts that key external resources by
    /// entity (DOM elements, picking buffers).
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id generator owned by one scene graph instance.
///
/// `bump` keeps the counter ahead of ids restored by undo/redo or a
/// loaded document, preserving the no-reuse guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct IdSource {
    next: u64,
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    pub fn bump(&mut self, seen: EntityId) {
        self.next = self.next.max(seen.0 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = IdSource::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert!(a < b && b < c);
    }

    #[test]
    fn bump_skips_past_restored_ids() {
        let mut ids = IdSource::new();
        ids.bump(EntityId(41));
        assert_eq!(ids.next(), EntityId(42));
    }

    #[test]
    fn bump_never_rewinds() {
        let mut ids = IdSource::new();
        let a = ids.next();
        let b = ids.next();
        ids.bump(a);
        let c = ids.next();
        assert!(c > b);
    }
}
