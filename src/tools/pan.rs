// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The pan tool.
//!
//! Dragging applies the screen-space pointer delta to the viewport
//! offset. Panning is navigation, not an edit, and produces no command.

use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::tools::{Tool, ToolId};
use kurbo::Point;

#[derive(Debug, Clone, Default)]
pub struct PanTool {
    /// Last pointer position (screen space) while the button is held.
    last: Option<Point>,
}

impl Tool for PanTool {
    fn id(&self) -> ToolId {
        ToolId::Pan
    }

    fn pointer_down(&mut self, event: &PointerEvent, _session: &mut EditSession) {
        self.last = Some(event.pos);
    }

    fn pointer_move(&mut self, event: &PointerEvent, session: &mut EditSession) {
        if let Some(last) = self.last {
            session.viewport.pan(event.pos - last);
            self.last = Some(event.pos);
        }
    }

    fn pointer_up(&mut self, _event: &PointerEvent, _session: &mut EditSession) {
        self.last = None;
    }

    fn cancel(&mut self, _session: &mut EditSession) {
        self.last = None;
    }
}
