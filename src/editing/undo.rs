// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Linear undo/redo history.
//!
//! Standard discipline: recording a new command clears the redo stack,
//! so history never branches. Undoing with an empty stack is a
//! recoverable no-op reported as `EmptyStack`.

use crate::editing::command::Command;
use crate::error::EditError;
use crate::model::SceneGraph;

#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an already-applied command as the newest history entry.
    pub fn push(&mut self, cmd: Command) {
        if !self.redo.is_empty() {
            tracing::debug!("dropping {} redo entries", self.redo.len());
            self.redo.clear();
        }
        self.undo.push(cmd);
    }

    /// Revert the most recent command.
    pub fn undo(&mut self, scene: &mut SceneGraph) -> Result<(), EditError> {
        let cmd = self.undo.pop().ok_or(EditError::EmptyStack)?;
        if let Err(err) = cmd.inverted().apply(scene) {
            // Reverting failed, so the command is still in effect; keep
            // the history consistent with the scene.
            self.undo.push(cmd);
            return Err(err);
        }
        self.redo.push(cmd);
        Ok(())
    }

    /// Re-apply the most recently undone command.
    pub fn redo(&mut self, scene: &mut SceneGraph) -> Result<(), EditError> {
        let cmd = self.redo.pop().ok_or(EditError::EmptyStack)?;
        if let Err(err) = cmd.apply(scene) {
            self.redo.push(cmd);
            return Err(err);
        }
        self.undo.push(cmd);
        Ok(())
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn add_node(scene: &mut SceneGraph, stack: &mut UndoStack, x: f64, y: f64) {
        let pos = Point::new(x, y);
        let id = scene.add_node(pos).unwrap();
        stack.push(Command::AddNode { id, pos });
    }

    #[test]
    fn undo_restores_the_exact_prior_state() {
        let mut scene = SceneGraph::new();
        let mut stack = UndoStack::new();

        add_node(&mut scene, &mut stack, 1.0, 1.0);
        let snapshot = scene.clone();
        add_node(&mut scene, &mut stack, 2.0, 2.0);

        stack.undo(&mut scene).unwrap();
        assert_eq!(scene, snapshot);
    }

    #[test]
    fn redo_round_trips_after_undo() {
        let mut scene = SceneGraph::new();
        let mut stack = UndoStack::new();

        add_node(&mut scene, &mut stack, 1.0, 1.0);
        add_node(&mut scene, &mut stack, 2.0, 2.0);
        let full = scene.clone();

        stack.undo(&mut scene).unwrap();
        stack.redo(&mut scene).unwrap();
        assert_eq!(scene, full);
    }

    #[test]
    fn push_clears_the_redo_stack() {
        let mut scene = SceneGraph::new();
        let mut stack = UndoStack::new();

        add_node(&mut scene, &mut stack, 1.0, 1.0);
        stack.undo(&mut scene).unwrap();
        assert_eq!(stack.redo_depth(), 1);

        add_node(&mut scene, &mut stack, 3.0, 3.0);
        assert_eq!(stack.redo_depth(), 0);
        assert_eq!(stack.undo(&mut scene), Ok(()));
        assert_eq!(stack.undo(&mut scene), Err(EditError::EmptyStack));
    }

    #[test]
    fn empty_stacks_report_empty_stack() {
        let mut scene = SceneGraph::new();
        let mut stack = UndoStack::new();

        assert_eq!(stack.undo(&mut scene), Err(EditError::EmptyStack));
        assert_eq!(stack.redo(&mut scene), Err(EditError::EmptyStack));
    }

    #[test]
    fn long_sequences_unwind_completely() {
        let mut scene = SceneGraph::new();
        let mut stack = UndoStack::new();
        let empty = scene.clone();

        for i in 0..16 {
            add_node(&mut scene, &mut stack, i as f64, 0.0);
        }
        let full = scene.clone();

        while stack.undo(&mut scene).is_ok() {}
        assert_eq!(scene, empty);

        while stack.redo(&mut scene).is_ok() {}
        assert_eq!(scene, full);
    }
}
