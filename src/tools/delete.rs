// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The delete tool.
//!
//! A press removes the node under the cursor together with its incident
//! edges, recorded as one composite command so a single undo restores
//! the whole neighborhood. With no node in range, the nearest edge is
//! removed instead. Misses do nothing.

use crate::editing::command::Command;
use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Default)]
pub struct DeleteTool;

impl Tool for DeleteTool {
    fn id(&self) -> ToolId {
        ToolId::Delete
    }

    fn pointer_down(&mut self, event: &PointerEvent, session: &mut EditSession) {
        if let Some(id) = session.hit_node(event.pos) {
            match session.scene.remove_node(id) {
                Ok((node, edges)) => {
                    tracing::debug!("deleted node {id} and {} incident edges", edges.len());
                    session.record(Command::removal(node, edges));
                    session.prune_selection();
                }
                Err(err) => tracing::warn!("node delete rejected: {err}"),
            }
            return;
        }

        if let Some(id) = session.hit_edge(event.pos) {
            match session.scene.remove_edge(id) {
                Ok(edge) => {
                    session.record(Command::RemoveEdge {
                        id: edge.id,
                        a: edge.a,
                        b: edge.b,
                    });
                    session.prune_selection();
                }
                Err(err) => tracing::warn!("edge delete rejected: {err}"),
            }
        }
    }
}
