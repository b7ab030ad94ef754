// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The add-node tool.
//!
//! No gesture phase: a press commits an `AddNode` command at the cursor
//! immediately. Coincident positions are allowed; placement never
//! deduplicates.

use crate::editing::command::Command;
use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Default)]
pub struct AddNodeTool;

impl Tool for AddNodeTool {
    fn id(&self) -> ToolId {
        ToolId::AddNode
    }

    fn pointer_down(&mut self, event: &PointerEvent, session: &mut EditSession) {
        let pos = session.viewport.to_world(event.pos);
        match session.scene.add_node(pos) {
            Ok(id) => {
                session.selection.select_only(id);
                session.record(Command::AddNode { id, pos });
                tracing::debug!("placed node {id} at ({:.1}, {:.1})", pos.x, pos.y);
            }
            Err(err) => tracing::warn!("node placement rejected: {err}"),
        }
    }
}
