// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session: one scene graph plus everything needed to edit it.
//!
//! The session owns the scene, the viewport, the selection, the undo
//! history, and the active tool, and routes validated pointer events to
//! that tool. Only primary-button presses drive gestures; other buttons
//! are accepted and ignored.

use crate::editing::command::Command;
use crate::editing::mouse::PointerEvent;
use crate::editing::selection::Selection;
use crate::editing::undo::UndoStack;
use crate::editing::viewport::Viewport;
use crate::error::EditError;
use crate::model::{EntityId, SceneGraph};
use crate::settings;
use crate::tools::{GesturePreview, ToolBox, ToolId};
use kurbo::Point;

#[derive(Debug, Clone)]
pub struct EditSession {
    pub scene: SceneGraph,
    pub viewport: Viewport,
    pub selection: Selection,
    pub history: UndoStack,
    pub current_tool: ToolBox,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            viewport: Viewport::new(),
            selection: Selection::new(),
            history: UndoStack::new(),
            current_tool: ToolBox::for_id(ToolId::Select),
        }
    }

    // ===== Mode switching =====

    /// Activate a tool, discarding any gesture the outgoing tool had in
    /// progress. Cancellation never mutates the committed scene.
    pub fn switch_tool(&mut self, id: ToolId) {
        let mut outgoing = std::mem::replace(&mut self.current_tool, ToolBox::for_id(id));
        outgoing.cancel(self);
        tracing::info!("switched to {:?} mode", id);
    }

    // ===== History =====

    /// Record an already-applied command as the newest undo entry.
    pub fn record(&mut self, cmd: Command) {
        self.history.push(cmd);
    }

    pub fn undo(&mut self) -> Result<(), EditError> {
        self.history.undo(&mut self.scene)?;
        self.prune_selection();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), EditError> {
        self.history.redo(&mut self.scene)?;
        self.prune_selection();
        Ok(())
    }

    /// Drop selection entries whose entities no longer exist.
    pub(crate) fn prune_selection(&mut self) {
        let stale: Vec<EntityId> = self
            .selection
            .iter()
            .filter(|&id| self.scene.node(id).is_none() && self.scene.edge(id).is_none())
            .collect();
        for id in stale {
            self.selection.remove(id);
        }
    }

    // ===== Pointer dispatch =====
    //
    // The active tool is taken out of the session for the duration of
    // the call so it can borrow the session mutably.

    pub fn pointer_down(&mut self, event: PointerEvent) {
        if !event.is_primary() {
            tracing::debug!("ignoring non-primary press");
            return;
        }
        let mut tool = std::mem::replace(&mut self.current_tool, ToolBox::for_id(ToolId::Select));
        tool.pointer_down(&event, self);
        self.current_tool = tool;
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        let mut tool = std::mem::replace(&mut self.current_tool, ToolBox::for_id(ToolId::Select));
        tool.pointer_move(&event, self);
        self.current_tool = tool;
    }

    pub fn pointer_up(&mut self, event: PointerEvent) {
        if !event.is_primary() {
            tracing::debug!("ignoring non-primary release");
            return;
        }
        let mut tool = std::mem::replace(&mut self.current_tool, ToolBox::for_id(ToolId::Select));
        tool.pointer_up(&event, self);
        self.current_tool = tool;
    }

    // ===== Hit testing =====

    /// The pick radius in world units at the current zoom.
    pub fn pick_radius_world(&self) -> f64 {
        settings::pointer::PICK_RADIUS / self.viewport.zoom
    }

    /// Nearest node within the pick radius of a screen position.
    pub fn hit_node(&self, screen: Point) -> Option<EntityId> {
        let world = self.viewport.to_world(screen);
        self.scene.nearest_node(world, self.pick_radius_world())
    }

    /// Nearest edge within the pick radius of a screen position.
    pub fn hit_edge(&self, screen: Point) -> Option<EntityId> {
        let world = self.viewport.to_world(screen);
        self.scene.nearest_edge(world, self.pick_radius_world())
    }

    /// The active tool's render-only gesture preview.
    pub fn gesture_preview(&self) -> Option<GesturePreview> {
        self.current_tool.preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(session: &mut EditSession, x: f64, y: f64) {
        session.pointer_down(PointerEvent::with_button(x, y, 0).unwrap());
    }

    fn moved(session: &mut EditSession, x: f64, y: f64) {
        session.pointer_move(PointerEvent::motion(x, y).unwrap());
    }

    fn up(session: &mut EditSession, x: f64, y: f64) {
        session.pointer_up(PointerEvent::with_button(x, y, 0).unwrap());
    }

    fn click(session: &mut EditSession, x: f64, y: f64) {
        down(session, x, y);
        up(session, x, y);
    }

    /// Two nodes at (10,10) and (50,50), created through the tool path.
    fn session_with_two_nodes() -> (EditSession, EntityId, EntityId) {
        let mut session = EditSession::new();
        session.switch_tool(ToolId::AddNode);
        click(&mut session, 10.0, 10.0);
        click(&mut session, 50.0, 50.0);

        let (a, b) = {
            let mut nodes = session.scene.nodes();
            let a = nodes.next().unwrap().id;
            let b = nodes.next().unwrap().id;
            (a, b)
        };
        (session, a, b)
    }

    #[test]
    fn add_node_mode_places_nodes_per_press() {
        let (session, a, b) = session_with_two_nodes();
        assert_eq!(session.scene.node_count(), 2);
        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(10.0, 10.0));
        assert_eq!(session.scene.node(b).unwrap().pos, Point::new(50.0, 50.0));
        assert_eq!(session.history.undo_depth(), 2);
    }

    #[test]
    fn coincident_nodes_get_distinct_ids() {
        let mut session = EditSession::new();
        session.switch_tool(ToolId::AddNode);
        click(&mut session, 0.0, 0.0);
        click(&mut session, 0.0, 0.0);

        assert_eq!(session.scene.node_count(), 2);
        let ids: Vec<EntityId> = session.scene.nodes().map(|n| n.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn edge_gesture_connects_two_nodes_and_undoes_as_one_step() {
        let (mut session, a, b) = session_with_two_nodes();

        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        moved(&mut session, 50.0, 50.0);
        up(&mut session, 50.0, 50.0);

        assert_eq!(session.scene.edge_count(), 1);
        let edge = session.scene.edges().next().unwrap();
        assert!(edge.joins(a, b));

        session.undo().unwrap();
        assert_eq!(session.scene.edge_count(), 0);
        assert_eq!(session.scene.node_count(), 2);
    }

    #[test]
    fn switching_modes_mid_edge_gesture_leaves_the_scene_unchanged() {
        let (mut session, _, _) = session_with_two_nodes();
        let before = session.scene.clone();

        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        moved(&mut session, 30.0, 30.0);
        assert!(session.gesture_preview().is_some());

        session.switch_tool(ToolId::Select);
        assert_eq!(session.scene, before);
        assert!(session.gesture_preview().is_none());

        // A release after the switch must not finish the old gesture.
        up(&mut session, 50.0, 50.0);
        assert_eq!(session.scene, before);
    }

    #[test]
    fn edge_gesture_released_over_empty_canvas_is_discarded() {
        let (mut session, _, _) = session_with_two_nodes();

        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        moved(&mut session, 200.0, 200.0);
        up(&mut session, 200.0, 200.0);

        assert_eq!(session.scene.edge_count(), 0);
        assert_eq!(session.history.undo_depth(), 2);
    }

    #[test]
    fn duplicate_edge_gesture_is_discarded() {
        let (mut session, _, _) = session_with_two_nodes();
        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        up(&mut session, 50.0, 50.0);
        assert_eq!(session.scene.edge_count(), 1);

        // Same pair again, opposite direction.
        down(&mut session, 50.0, 50.0);
        up(&mut session, 10.0, 10.0);
        assert_eq!(session.scene.edge_count(), 1);
        assert_eq!(session.history.undo_depth(), 3);
    }

    #[test]
    fn select_drag_commits_one_move_and_snaps_back_under_epsilon() {
        let (mut session, a, _) = session_with_two_nodes();

        session.switch_tool(ToolId::Select);
        down(&mut session, 10.0, 10.0);
        moved(&mut session, 20.0, 15.0);
        moved(&mut session, 40.0, 20.0);
        up(&mut session, 40.0, 20.0);

        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(40.0, 20.0));
        let moves_before = session.history.undo_depth();

        session.undo().unwrap();
        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(10.0, 10.0));
        session.redo().unwrap();
        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(40.0, 20.0));

        // A wiggle below the commit epsilon leaves no history entry and
        // no displacement.
        down(&mut session, 40.0, 20.0);
        moved(&mut session, 40.2, 20.1);
        up(&mut session, 40.2, 20.1);
        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(40.0, 20.0));
        assert_eq!(session.history.undo_depth(), moves_before);
    }

    #[test]
    fn switching_modes_mid_drag_restores_the_start_position() {
        let (mut session, a, _) = session_with_two_nodes();

        session.switch_tool(ToolId::Select);
        down(&mut session, 10.0, 10.0);
        moved(&mut session, 80.0, 80.0);
        session.switch_tool(ToolId::Pan);

        assert_eq!(session.scene.node(a).unwrap().pos, Point::new(10.0, 10.0));
        assert_eq!(session.history.undo_depth(), 2);
    }

    #[test]
    fn box_select_picks_nodes_inside_the_rect() {
        let (mut session, a, b) = session_with_two_nodes();

        session.switch_tool(ToolId::Select);
        down(&mut session, 0.0, 0.0);
        moved(&mut session, 30.0, 30.0);
        up(&mut session, 30.0, 30.0);

        assert!(session.selection.contains(a));
        assert!(!session.selection.contains(b));

        // Dragging over everything selects both.
        down(&mut session, 0.0, 0.0);
        moved(&mut session, 60.0, 60.0);
        up(&mut session, 60.0, 60.0);
        assert_eq!(session.selection.len(), 2);

        // A bare click on empty canvas clears the selection.
        click(&mut session, 200.0, 200.0);
        assert!(session.selection.is_empty());
    }

    #[test]
    fn delete_mode_removes_a_node_with_its_edges_in_one_undo_step() {
        let (mut session, a, _) = session_with_two_nodes();
        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        up(&mut session, 50.0, 50.0);
        let before = session.scene.clone();

        session.switch_tool(ToolId::Delete);
        click(&mut session, 10.0, 10.0);
        assert_eq!(session.scene.node_count(), 1);
        assert_eq!(session.scene.edge_count(), 0);
        assert!(session.scene.node(a).is_none());

        session.undo().unwrap();
        assert_eq!(session.scene, before);
    }

    #[test]
    fn delete_mode_removes_an_edge_between_nodes() {
        let (mut session, _, _) = session_with_two_nodes();
        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 10.0, 10.0);
        up(&mut session, 50.0, 50.0);

        // Midpoint of the edge, away from both nodes.
        session.switch_tool(ToolId::Delete);
        click(&mut session, 30.0, 30.0);

        assert_eq!(session.scene.edge_count(), 0);
        assert_eq!(session.scene.node_count(), 2);
    }

    #[test]
    fn split_release_divides_an_edge_and_undoes_as_one_step() {
        let mut session = EditSession::new();
        session.switch_tool(ToolId::AddNode);
        click(&mut session, 0.0, 0.0);
        click(&mut session, 100.0, 0.0);
        click(&mut session, 50.0, 80.0);

        session.switch_tool(ToolId::AddEdge);
        down(&mut session, 0.0, 0.0);
        up(&mut session, 100.0, 0.0);
        let before = session.scene.clone();

        // Anchor at the apex, release over the middle of the base edge.
        down(&mut session, 50.0, 80.0);
        moved(&mut session, 50.0, 0.0);
        up(&mut session, 50.0, 0.0);

        // One new node at the split point, base replaced by two halves,
        // plus the connecting edge from the apex.
        assert_eq!(session.scene.node_count(), 4);
        assert_eq!(session.scene.edge_count(), 3);
        let split_node = session
            .scene
            .nodes()
            .find(|n| n.pos == Point::new(50.0, 0.0))
            .expect("split node");
        assert_eq!(session.scene.incident_edges(split_node.id).len(), 3);

        session.undo().unwrap();
        assert_eq!(session.scene, before);
    }

    #[test]
    fn pan_mode_moves_the_viewport_without_touching_history() {
        let (mut session, _, _) = session_with_two_nodes();
        let depth = session.history.undo_depth();

        session.switch_tool(ToolId::Pan);
        down(&mut session, 100.0, 100.0);
        moved(&mut session, 130.0, 90.0);
        up(&mut session, 130.0, 90.0);

        assert_eq!(session.viewport.offset, Point::new(-30.0, 10.0));
        assert_eq!(session.history.undo_depth(), depth);
        assert_eq!(session.history.redo_depth(), 0);

        // Panning does not undo: the next undo still reverts an edit.
        session.undo().unwrap();
        assert_eq!(session.scene.node_count(), 1);
        assert_eq!(session.viewport.offset, Point::new(-30.0, 10.0));
    }

    #[test]
    fn hit_testing_respects_the_zoomed_pick_radius() {
        let (mut session, a, _) = session_with_two_nodes();
        session.viewport.zoom = 2.0;

        // Node a at world (10,10) appears at screen (20,20).
        assert_eq!(session.hit_node(Point::new(23.0, 20.0)), Some(a));
        // 8px pick radius at 2x zoom is 4 world units.
        assert_eq!(session.hit_node(Point::new(40.0, 20.0)), None);
    }

    #[test]
    fn undo_prunes_the_selection() {
        let mut session = EditSession::new();
        session.switch_tool(ToolId::AddNode);
        click(&mut session, 5.0, 5.0);
        assert_eq!(session.selection.len(), 1);

        session.undo().unwrap();
        assert!(session.selection.is_empty());
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut session = EditSession::new();
        session.switch_tool(ToolId::AddNode);
        session.pointer_down(PointerEvent::with_button(5.0, 5.0, 2).unwrap());
        session.pointer_up(PointerEvent::with_button(5.0, 5.0, 2).unwrap());

        assert_eq!(session.scene.node_count(), 0);
    }
}
