// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The add-edge tool.
//!
//! A press on a node anchors a pending edge; the free endpoint follows
//! the cursor as render-only preview state. Releasing over a second
//! distinct node commits the connection. Releasing over an existing
//! edge splits that edge at the release point and connects the anchor
//! to the split node, all as one undo step. Any other release discards
//! the gesture with no scene mutation.

use crate::editing::command::Command;
use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::error::EditError;
use crate::model::EntityId;
use crate::tools::{GesturePreview, Tool, ToolId};
use kurbo::Point;

#[derive(Debug, Clone, Default)]
pub struct AddEdgeTool {
    gesture: Gesture,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Anchored at a node, free end at `current` (world space).
    /// `anchor_pos` is captured at press time for the preview line.
    Pending {
        anchor: EntityId,
        anchor_pos: Point,
        current: Point,
    },
}

impl AddEdgeTool {
    fn connect(&self, session: &mut EditSession, anchor: EntityId, target: EntityId) {
        match session.scene.add_edge(anchor, target) {
            Ok(id) => {
                session.selection.select_only(id);
                session.record(Command::AddEdge {
                    id,
                    a: anchor,
                    b: target,
                });
            }
            Err(err @ EditError::DuplicateEdge { .. }) => {
                tracing::debug!("edge gesture discarded: {err}");
            }
            Err(err) => tracing::warn!("edge gesture rejected: {err}"),
        }
    }

    /// Split `edge_id` at the release point and connect the anchor to
    /// the new node, recorded as a single composite command.
    fn split_and_connect(
        &self,
        session: &mut EditSession,
        anchor: EntityId,
        edge_id: EntityId,
        world: Point,
    ) {
        let split = match session.scene.split_edge(edge_id, world) {
            Ok(split) => split,
            Err(err) => {
                tracing::warn!("edge split rejected: {err}");
                return;
            }
        };

        let mut parts = vec![
            Command::RemoveEdge {
                id: split.removed.id,
                a: split.removed.a,
                b: split.removed.b,
            },
            Command::AddNode {
                id: split.node.id,
                pos: split.node.pos,
            },
            Command::AddEdge {
                id: split.left.id,
                a: split.left.a,
                b: split.left.b,
            },
            Command::AddEdge {
                id: split.right.id,
                a: split.right.a,
                b: split.right.b,
            },
        ];

        // The link from the anchor; already covered by a replacement
        // half when the anchor is an endpoint of the split edge.
        if anchor != split.removed.a && anchor != split.removed.b {
            match session.scene.add_edge(anchor, split.node.id) {
                Ok(link) => parts.push(Command::AddEdge {
                    id: link,
                    a: anchor,
                    b: split.node.id,
                }),
                Err(err) => tracing::warn!("split link rejected: {err}"),
            }
        }

        session.selection.select_only(split.node.id);
        session.record(Command::Composite(parts));
    }
}

impl Tool for AddEdgeTool {
    fn id(&self) -> ToolId {
        ToolId::AddEdge
    }

    fn pointer_down(&mut self, event: &PointerEvent, session: &mut EditSession) {
        match session.hit_node(event.pos) {
            Some(anchor) => {
                // Present in the scene: hit_node just returned it.
                let Some(anchor_pos) = session.scene.node(anchor).map(|n| n.pos) else {
                    return;
                };
                self.gesture = Gesture::Pending {
                    anchor,
                    anchor_pos,
                    current: session.viewport.to_world(event.pos),
                };
            }
            None => tracing::debug!("edge gesture needs a starting node"),
        }
    }

    fn pointer_move(&mut self, event: &PointerEvent, session: &mut EditSession) {
        if let Gesture::Pending { current, .. } = &mut self.gesture {
            *current = session.viewport.to_world(event.pos);
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent, session: &mut EditSession) {
        let Gesture::Pending { anchor, .. } = std::mem::take(&mut self.gesture) else {
            return;
        };

        match session.hit_node(event.pos) {
            Some(target) if target != anchor => self.connect(session, anchor, target),
            Some(_) => tracing::debug!("edge gesture released over its own anchor"),
            None => match session.hit_edge(event.pos) {
                Some(edge_id) => {
                    let world = session.viewport.to_world(event.pos);
                    self.split_and_connect(session, anchor, edge_id, world);
                }
                None => tracing::debug!("edge gesture released over empty canvas"),
            },
        }
    }

    fn cancel(&mut self, _session: &mut EditSession) {
        // Nothing was committed; dropping the gesture is enough.
        self.gesture = Gesture::Idle;
    }

    fn preview(&self) -> Option<GesturePreview> {
        match self.gesture {
            Gesture::Pending {
                anchor_pos,
                current,
                ..
            } => Some(GesturePreview::PendingEdge {
                from: anchor_pos,
                to: current,
            }),
            Gesture::Idle => None,
        }
    }
}
