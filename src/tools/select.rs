// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The select tool: pick, drag-move, and box-select.
//!
//! A press on a node selects it and starts a drag; the node follows the
//! cursor live and a single `MoveNode` command is committed on release,
//! but only when the total displacement exceeds the commit epsilon.
//! Shorter drags snap back, so a plain click never pollutes the undo
//! history. A press on empty canvas starts a box-select rubber band.

use crate::editing::command::Command;
use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::model::EntityId;
use crate::settings;
use crate::tools::{GesturePreview, Tool, ToolId};
use kurbo::{Point, Rect};

#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    gesture: Gesture,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Dragging a node; `start` is its position at press time, in world
    /// space.
    DragNode { id: EntityId, start: Point },
    /// Rubber-band selection, corners in world space.
    BoxSelect { start: Point, current: Point },
}

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        ToolId::Select
    }

    fn pointer_down(&mut self, event: &PointerEvent, session: &mut EditSession) {
        let world = session.viewport.to_world(event.pos);

        if let Some(id) = session.hit_node(event.pos) {
            session.selection.select_only(id);
            // Present in the scene: hit_node just returned it.
            if let Some(node) = session.scene.node(id) {
                self.gesture = Gesture::DragNode {
                    id,
                    start: node.pos,
                };
            }
            return;
        }

        if let Some(id) = session.hit_edge(event.pos) {
            session.selection.select_only(id);
            return;
        }

        self.gesture = Gesture::BoxSelect {
            start: world,
            current: world,
        };
    }

    fn pointer_move(&mut self, event: &PointerEvent, session: &mut EditSession) {
        let world = session.viewport.to_world(event.pos);
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::DragNode { id, .. } => {
                if let Err(err) = session.scene.move_node(*id, world) {
                    tracing::warn!("drag target vanished: {err}");
                    self.gesture = Gesture::Idle;
                }
            }
            Gesture::BoxSelect { current, .. } => {
                *current = world;
            }
        }
    }

    fn pointer_up(&mut self, _event: &PointerEvent, session: &mut EditSession) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::DragNode { id, start } => {
                let Some(end) = session.scene.node(id).map(|n| n.pos) else {
                    return;
                };
                if start.distance(end) > settings::pointer::DRAG_COMMIT_EPSILON {
                    session.record(Command::MoveNode {
                        id,
                        from: start,
                        to: end,
                    });
                } else if let Err(err) = session.scene.move_node(id, start) {
                    // Sub-epsilon drags snap back instead of leaving an
                    // unrecorded offset.
                    tracing::warn!("could not settle drag: {err}");
                }
            }
            Gesture::BoxSelect { start, current } => {
                let screen_span = session
                    .viewport
                    .to_screen(start)
                    .distance(session.viewport.to_screen(current));
                if screen_span >= settings::pointer::BOX_SELECT_MIN_DRAG {
                    let rect = Rect::from_points(start, current);
                    session.selection.replace(session.scene.nodes_in_rect(rect));
                    tracing::debug!("box select picked {} nodes", session.selection.len());
                } else {
                    // A click on empty canvas clears the selection.
                    session.selection.clear();
                }
            }
        }
    }

    fn cancel(&mut self, session: &mut EditSession) {
        if let Gesture::DragNode { id, start } = self.gesture {
            // Put the node back where the gesture found it.
            if let Err(err) = session.scene.move_node(id, start) {
                tracing::warn!("could not restore cancelled drag: {err}");
            }
        }
        self.gesture = Gesture::Idle;
    }

    fn preview(&self) -> Option<GesturePreview> {
        match self.gesture {
            Gesture::BoxSelect { start, current } => {
                Some(GesturePreview::SelectRect(Rect::from_points(start, current)))
            }
            _ => None,
        }
    }
}
