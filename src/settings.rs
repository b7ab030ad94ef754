// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and tuning constants.
//!
//! This module holds non-visual settings. Anything a host shell might
//! want to restyle (colors, stroke widths) belongs to the shell, not
//! here; the core only knows about interaction distances and camera
//! limits.

// ============================================================================
// POINTER SETTINGS
// ============================================================================
/// Maximum screen-space distance (px) for a pointer event to hit a node
/// or an edge. Converted to world units by dividing by the current zoom.
const PICK_RADIUS: f64 = 8.0;

/// Minimum world-space displacement for a node drag to commit a move to
/// the undo history. Shorter drags leave no history entry.
const DRAG_COMMIT_EPSILON: f64 = 0.5;

/// Minimum screen-space diagonal (px) for a drag on empty canvas to be
/// treated as a box selection instead of a click.
const BOX_SELECT_MIN_DRAG: f64 = 4.0;

// ============================================================================
// CAMERA SETTINGS
// ============================================================================
/// Minimum zoom level (2% of original size)
const MIN_ZOOM: f64 = 0.02;

/// Maximum zoom level (50x original size)
const MAX_ZOOM: f64 = 50.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Pointer interaction distances
pub mod pointer {
    /// Screen-space hit radius for nodes and edges (px)
    pub const PICK_RADIUS: f64 = super::PICK_RADIUS;

    /// World-space displacement below which a drag commits no move
    pub const DRAG_COMMIT_EPSILON: f64 = super::DRAG_COMMIT_EPSILON;

    /// Screen-space drag below which a box select is just a click (px)
    pub const BOX_SELECT_MIN_DRAG: f64 = super::BOX_SELECT_MIN_DRAG;
}

/// Camera (viewport) limits
pub mod camera {
    /// Minimum zoom level
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;
}
