// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the editor core.
//!
//! Every variant here is recoverable and local: an operation that fails
//! returns the error to the caller and leaves the scene graph exactly as
//! it was. There are no fatal error conditions in the core. A broken
//! structural invariant (an edge referencing a missing node, for example)
//! is a bug to be caught by tests, not a runtime condition to handle.

use crate::model::EntityId;
use thiserror::Error;

/// Errors reported by editor operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EditError {
    /// A pointer event carried a non-finite coordinate.
    #[error("non-finite pointer coordinates ({x}, {y})")]
    InvalidInput { x: f64, y: f64 },

    /// A geometry routine was handed a non-finite coordinate.
    #[error("non-finite coordinate passed to a geometry routine")]
    InvalidGeometry,

    /// The referenced entity does not exist (or no longer exists).
    #[error("no entity with id {0}")]
    NotFound(EntityId),

    /// An edge was requested with a missing endpoint, or with both
    /// endpoints the same node.
    #[error("cannot connect {a} to {b}")]
    InvalidEdge { a: EntityId, b: EntityId },

    /// An edge between the same pair of nodes already exists. Edges are
    /// unordered pairs, so (a, b) duplicates (b, a).
    #[error("an edge between {a} and {b} already exists")]
    DuplicateEdge { a: EntityId, b: EntityId },

    /// Undo or redo was requested with nothing to do. Non-fatal.
    #[error("history stack is empty")]
    EmptyStack,
}
