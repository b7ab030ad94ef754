// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Render snapshot: an immutable, screen-space projection of one frame.
//!
//! Building a snapshot reads the session and copies everything a drawing
//! layer needs: node and edge positions with the viewport transform
//! applied, selection flags, and the in-progress gesture preview. The
//! result owns all of its data, so it can cross a thread or frame
//! boundary without synchronization and can never observe a later edit.

use crate::editing::session::EditSession;
use crate::model::EntityId;
use crate::tools::{GesturePreview, ToolId};
use kurbo::{Point, Rect};
use serde::Serialize;

/// A node ready to draw, position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub id: EntityId,
    pub pos: Point,
    pub selected: bool,
}

/// An edge ready to draw, endpoints in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotEdge {
    pub id: EntityId,
    pub from: Point,
    pub to: Point,
    pub selected: bool,
}

/// Gesture overlay, already projected to screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SnapshotPreview {
    PendingEdge { from: Point, to: Point },
    SelectRect(Rect),
}

/// One frame's worth of render-ready editor state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: ToolId,
    pub zoom: f64,
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
    pub preview: Option<SnapshotPreview>,
}

impl Snapshot {
    /// Project the session into a frame. Pure read access; entities come
    /// out in id order.
    pub fn build(session: &EditSession) -> Snapshot {
        let viewport = &session.viewport;

        let nodes = session
            .scene
            .nodes()
            .map(|node| SnapshotNode {
                id: node.id,
                pos: viewport.to_screen(node.pos),
                selected: session.selection.contains(node.id),
            })
            .collect();

        let edges = session
            .scene
            .edges()
            .filter_map(|edge| {
                let seg = session.scene.edge_segment(edge.id)?;
                Some(SnapshotEdge {
                    id: edge.id,
                    from: viewport.to_screen(seg.p0),
                    to: viewport.to_screen(seg.p1),
                    selected: session.selection.contains(edge.id),
                })
            })
            .collect();

        let preview = session.gesture_preview().map(|preview| match preview {
            GesturePreview::PendingEdge { from, to } => SnapshotPreview::PendingEdge {
                from: viewport.to_screen(from),
                to: viewport.to_screen(to),
            },
            GesturePreview::SelectRect(rect) => {
                let p0 = viewport.to_screen(Point::new(rect.x0, rect.y0));
                let p1 = viewport.to_screen(Point::new(rect.x1, rect.y1));
                SnapshotPreview::SelectRect(Rect::from_points(p0, p1))
            }
        });

        Snapshot {
            mode: session.current_tool.id(),
            zoom: viewport.zoom,
            nodes,
            edges,
            preview,
        }
    }
}
