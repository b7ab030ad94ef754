// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system: per-mode pointer handling.
//!
//! Exactly one tool is active at a time. Each tool owns its in-progress
//! gesture state; nothing about a gesture touches the scene graph until
//! the tool commits a command, so cancelling a gesture (or switching
//! tools mid-gesture) can always discard it without leaving the scene
//! half-updated.

use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use kurbo::{Point, Rect};
use serde::Serialize;

// ===== Tool Identifier =====

/// Tool (edit mode) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolId {
    /// Select, drag-move, and box-select entities
    Select,
    /// Place new nodes
    AddNode,
    /// Connect nodes with edges
    AddEdge,
    /// Remove nodes and edges
    Delete,
    /// Move the viewport
    Pan,
}

impl ToolId {
    /// Map a host-side mode code to a tool. Unknown codes are `None`;
    /// the caller decides whether that is worth more than a log line.
    pub fn from_code(code: i32) -> Option<ToolId> {
        match code {
            0 => Some(ToolId::Select),
            1 => Some(ToolId::AddNode),
            2 => Some(ToolId::AddEdge),
            3 => Some(ToolId::Delete),
            4 => Some(ToolId::Pan),
            _ => None,
        }
    }
}

// ===== Gesture Preview =====

/// Transient, render-only state of an in-progress gesture, in world
/// space. Never part of the scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePreview {
    /// A pending edge from an anchored node to the cursor.
    PendingEdge { from: Point, to: Point },
    /// A box-select rubber band.
    SelectRect(Rect),
}

// ===== Tool Trait =====

/// A tool interpreting pointer events for one edit mode.
pub trait Tool {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Handle a (primary) press
    fn pointer_down(&mut self, _event: &PointerEvent, _session: &mut EditSession) {}

    /// Handle motion
    fn pointer_move(&mut self, _event: &PointerEvent, _session: &mut EditSession) {}

    /// Handle a (primary) release
    fn pointer_up(&mut self, _event: &PointerEvent, _session: &mut EditSession) {}

    /// Discard any in-progress gesture without committing anything
    fn cancel(&mut self, _session: &mut EditSession) {}

    /// Render-only preview of the in-progress gesture
    fn preview(&self) -> Option<GesturePreview> {
        None
    }
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Select(select::SelectTool),
    AddNode(add_node::AddNodeTool),
    AddEdge(add_edge::AddEdgeTool),
    Delete(delete::DeleteTool),
    Pan(pan::PanTool),
}

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::Select => ToolBox::Select(select::SelectTool::default()),
            ToolId::AddNode => ToolBox::AddNode(add_node::AddNodeTool::default()),
            ToolId::AddEdge => ToolBox::AddEdge(add_edge::AddEdgeTool::default()),
            ToolId::Delete => ToolBox::Delete(delete::DeleteTool::default()),
            ToolId::Pan => ToolBox::Pan(pan::PanTool::default()),
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        match self {
            ToolBox::Select(tool) => tool.id(),
            ToolBox::AddNode(tool) => tool.id(),
            ToolBox::AddEdge(tool) => tool.id(),
            ToolBox::Delete(tool) => tool.id(),
            ToolBox::Pan(tool) => tool.id(),
        }
    }

    /// Handle pointer down
    pub fn pointer_down(&mut self, event: &PointerEvent, session: &mut EditSession) {
        match self {
            ToolBox::Select(tool) => tool.pointer_down(event, session),
            ToolBox::AddNode(tool) => tool.pointer_down(event, session),
            ToolBox::AddEdge(tool) => tool.pointer_down(event, session),
            ToolBox::Delete(tool) => tool.pointer_down(event, session),
            ToolBox::Pan(tool) => tool.pointer_down(event, session),
        }
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, event: &PointerEvent, session: &mut EditSession) {
        match self {
            ToolBox::Select(tool) => tool.pointer_move(event, session),
            ToolBox::AddNode(tool) => tool.pointer_move(event, session),
            ToolBox::AddEdge(tool) => tool.pointer_move(event, session),
            ToolBox::Delete(tool) => tool.pointer_move(event, session),
            ToolBox::Pan(tool) => tool.pointer_move(event, session),
        }
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self, event: &PointerEvent, session: &mut EditSession) {
        match self {
            ToolBox::Select(tool) => tool.pointer_up(event, session),
            ToolBox::AddNode(tool) => tool.pointer_up(event, session),
            ToolBox::AddEdge(tool) => tool.pointer_up(event, session),
            ToolBox::Delete(tool) => tool.pointer_up(event, session),
            ToolBox::Pan(tool) => tool.pointer_up(event, session),
        }
    }

    /// Cancel the current gesture
    pub fn cancel(&mut self, session: &mut EditSession) {
        match self {
            ToolBox::Select(tool) => tool.cancel(session),
            ToolBox::AddNode(tool) => tool.cancel(session),
            ToolBox::AddEdge(tool) => tool.cancel(session),
            ToolBox::Delete(tool) => tool.cancel(session),
            ToolBox::Pan(tool) => tool.cancel(session),
        }
    }

    /// Gesture preview for the snapshot builder
    pub fn preview(&self) -> Option<GesturePreview> {
        match self {
            ToolBox::Select(tool) => tool.preview(),
            ToolBox::AddNode(tool) => tool.preview(),
            ToolBox::AddEdge(tool) => tool.preview(),
            ToolBox::Delete(tool) => tool.preview(),
            ToolBox::Pan(tool) => tool.preview(),
        }
    }
}

// ===== Tool Modules =====

pub mod add_edge;
pub mod add_node;
pub mod delete;
pub mod pan;
pub mod select;
