// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The editor handle consumed by a host shell.
//!
//! One `Editor` is one editing session bound to one drawing surface.
//! The host delivers pointer events in its local pixel space, switches
//! modes with small integer codes (radio buttons map onto these), and
//! pulls a [`Snapshot`] whenever it wants to draw a frame. The core
//! never schedules anything itself; every call returns synchronously
//! with its mutation (or rejection) fully in effect.

use crate::editing::mouse::PointerEvent;
use crate::editing::session::EditSession;
use crate::error::EditError;
use crate::model::{SceneGraph, SceneReadError};
use crate::snapshot::Snapshot;
use crate::tools::ToolId;

pub struct Editor {
    surface_id: String,
    session: EditSession,
}

impl Editor {
    /// Create an editor bound to a host-side surface identifier.
    ///
    /// The id is opaque to the core; it only comes back in logs so a
    /// host with several canvases can tell the sessions apart.
    pub fn create(surface_id: impl Into<String>) -> Editor {
        let surface_id = surface_id.into();
        tracing::info!("editor created for surface {surface_id:?}");
        Editor {
            surface_id,
            session: EditSession::new(),
        }
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// The active edit mode.
    pub fn mode(&self) -> ToolId {
        self.session.current_tool.id()
    }

    /// Read access to the session, for hosts that want richer
    /// inspection than a render snapshot.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    // ===== Frame pull =====

    /// Build the render snapshot for the current frame. Callable once
    /// per animation frame; never mutates anything.
    pub fn render(&self) -> Snapshot {
        Snapshot::build(&self.session)
    }

    // ===== Pointer events =====

    pub fn pointer_down(&mut self, x: f64, y: f64, button: u8) -> Result<(), EditError> {
        let event = PointerEvent::with_button(x, y, button)?;
        self.session.pointer_down(event);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), EditError> {
        let event = PointerEvent::motion(x, y)?;
        self.session.pointer_move(event);
        Ok(())
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, button: u8) -> Result<(), EditError> {
        let event = PointerEvent::with_button(x, y, button)?;
        self.session.pointer_up(event);
        Ok(())
    }

    // ===== Mode switching =====

    /// Switch the edit mode. An unrecognized code is logged and ignored,
    /// leaving the current mode (and no gesture) in place.
    pub fn switch_mode(&mut self, mode_code: i32) {
        match ToolId::from_code(mode_code) {
            Some(id) => self.session.switch_tool(id),
            None => tracing::warn!("ignoring unknown mode code {mode_code}"),
        }
    }

    // ===== History =====

    pub fn undo(&mut self) -> Result<(), EditError> {
        self.session.undo()
    }

    pub fn redo(&mut self) -> Result<(), EditError> {
        self.session.redo()
    }

    // ===== Camera =====

    /// Set the zoom level, clamped to the configured range, anchored at
    /// a screen position (typically the cursor). Non-finite input is
    /// logged and ignored.
    pub fn set_zoom(&mut self, zoom: f64, anchor_x: f64, anchor_y: f64) {
        if !(anchor_x.is_finite() && anchor_y.is_finite()) {
            tracing::warn!("ignoring zoom with non-finite anchor");
            return;
        }
        self.session
            .viewport
            .set_zoom(zoom, kurbo::Point::new(anchor_x, anchor_y));
    }

    // ===== Persistence =====

    /// Serialize the scene as JSON.
    pub fn scene_json(&self) -> Result<String, serde_json::Error> {
        self.session.scene.to_json()
    }

    /// Replace the scene with one loaded from JSON.
    ///
    /// Loading starts a fresh session over the document: the history,
    /// the selection, and any in-progress gesture are discarded, while
    /// the viewport is left where the user had it.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), SceneReadError> {
        let scene = SceneGraph::from_json(json)?;
        let mode = self.mode();
        self.session.scene = scene;
        self.session.selection.clear();
        self.session.history = crate::editing::undo::UndoStack::new();
        // A fresh tool instance drops any half-finished gesture.
        self.session.current_tool = crate::tools::ToolBox::for_id(mode);
        tracing::info!(
            "loaded scene with {} nodes and {} edges",
            self.session.scene.node_count(),
            self.session.scene.edge_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn scenario_connect_two_nodes_then_undo() {
        let mut editor = Editor::create("canvas");

        editor.switch_mode(1); // add-node
        editor.pointer_down(10.0, 10.0, 0).unwrap();
        editor.pointer_up(10.0, 10.0, 0).unwrap();
        editor.pointer_down(50.0, 50.0, 0).unwrap();
        editor.pointer_up(50.0, 50.0, 0).unwrap();

        editor.switch_mode(2); // add-edge
        editor.pointer_down(10.0, 10.0, 0).unwrap();
        editor.pointer_move(50.0, 50.0).unwrap();
        editor.pointer_up(50.0, 50.0, 0).unwrap();

        let frame = editor.render();
        assert_eq!(frame.nodes.len(), 2);
        assert_eq!(frame.edges.len(), 1);

        editor.undo().unwrap();
        let frame = editor.render();
        assert_eq!(frame.nodes.len(), 2);
        assert_eq!(frame.edges.len(), 0);
    }

    #[test]
    fn non_finite_pointer_input_is_rejected_without_effect() {
        let mut editor = Editor::create("canvas");
        editor.switch_mode(1);

        let err = editor.pointer_down(f64::NAN, 10.0, 0);
        assert!(matches!(err, Err(EditError::InvalidInput { .. })));
        assert!(matches!(
            editor.pointer_move(f64::INFINITY, 0.0),
            Err(EditError::InvalidInput { .. })
        ));

        assert_eq!(editor.render().nodes.len(), 0);
    }

    #[test]
    fn unknown_mode_codes_leave_the_mode_unchanged() {
        let mut editor = Editor::create("canvas");
        editor.switch_mode(4);
        assert_eq!(editor.mode(), ToolId::Pan);

        editor.switch_mode(99);
        assert_eq!(editor.mode(), ToolId::Pan);
        editor.switch_mode(-3);
        assert_eq!(editor.mode(), ToolId::Pan);
    }

    #[test]
    fn undo_on_a_fresh_editor_reports_empty_stack() {
        let mut editor = Editor::create("canvas");
        assert_eq!(editor.undo(), Err(EditError::EmptyStack));
        assert_eq!(editor.redo(), Err(EditError::EmptyStack));
    }

    #[test]
    fn zoom_is_clamped_and_anchored() {
        let mut editor = Editor::create("canvas");
        editor.switch_mode(1);
        editor.pointer_down(100.0, 100.0, 0).unwrap();
        editor.pointer_up(100.0, 100.0, 0).unwrap();

        editor.set_zoom(2.0, 100.0, 100.0);
        let frame = editor.render();
        assert_eq!(frame.zoom, 2.0);
        // The node under the anchor stays put on screen.
        assert_eq!(frame.nodes[0].pos, Point::new(100.0, 100.0));

        editor.set_zoom(1e9, 0.0, 0.0);
        assert_eq!(editor.render().zoom, crate::settings::camera::MAX_ZOOM);
    }

    #[test]
    fn scene_round_trips_through_json() {
        let mut editor = Editor::create("canvas");
        editor.switch_mode(1);
        editor.pointer_down(10.0, 10.0, 0).unwrap();
        editor.pointer_up(10.0, 10.0, 0).unwrap();
        editor.pointer_down(50.0, 50.0, 0).unwrap();
        editor.pointer_up(50.0, 50.0, 0).unwrap();
        editor.switch_mode(2);
        editor.pointer_down(10.0, 10.0, 0).unwrap();
        editor.pointer_up(50.0, 50.0, 0).unwrap();

        let json = editor.scene_json().unwrap();

        let mut restored = Editor::create("other-canvas");
        restored.load_scene_json(&json).unwrap();

        assert_eq!(restored.session().scene, editor.session().scene);
        // A loaded document starts with a clean history.
        assert_eq!(restored.undo(), Err(EditError::EmptyStack));
    }
}
