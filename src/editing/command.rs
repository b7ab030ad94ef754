// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Reversible scene mutations.
//!
//! A `Command` records one already-validated mutation with enough data
//! to invert it exactly: removals remember what they removed, moves
//! remember both endpoints, and re-creation restores entities under
//! their original ids. Cascading operations (deleting a node with its
//! incident edges, splitting an edge) are grouped into one `Composite`
//! so a single undo restores everything together.
//!
//! Tools mutate the scene first and record the command after, so
//! `apply` only ever runs during undo and redo, where the recorded
//! preconditions are guaranteed to hold again.

use crate::error::EditError;
use crate::model::{Edge, EntityId, Node, SceneGraph};
use kurbo::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddNode { id: EntityId, pos: Point },
    RemoveNode { id: EntityId, pos: Point },
    AddEdge { id: EntityId, a: EntityId, b: EntityId },
    RemoveEdge { id: EntityId, a: EntityId, b: EntityId },
    MoveNode { id: EntityId, from: Point, to: Point },
    Composite(Vec<Command>),
}

impl Command {
    /// The composite recording a node removal with its edge cascade:
    /// edges go first so the inverse restores the node before relinking.
    pub fn removal(node: Node, edges: Vec<Edge>) -> Command {
        let mut parts: Vec<Command> = edges
            .into_iter()
            .map(|e| Command::RemoveEdge {
                id: e.id,
                a: e.a,
                b: e.b,
            })
            .collect();
        parts.push(Command::RemoveNode {
            id: node.id,
            pos: node.pos,
        });
        Command::Composite(parts)
    }

    /// Re-apply this command to the scene (the redo direction).
    pub fn apply(&self, scene: &mut SceneGraph) -> Result<(), EditError> {
        match self {
            Command::AddNode { id, pos } => {
                scene.restore_node(Node { id: *id, pos: *pos });
                Ok(())
            }
            Command::RemoveNode { id, .. } => {
                let (_, cascade) = scene.remove_node(*id)?;
                // Cascades are recorded as explicit composite members.
                debug_assert!(cascade.is_empty(), "unrecorded edge cascade");
                Ok(())
            }
            Command::AddEdge { id, a, b } => {
                scene.restore_edge(Edge {
                    id: *id,
                    a: *a,
                    b: *b,
                });
                Ok(())
            }
            Command::RemoveEdge { id, .. } => {
                scene.remove_edge(*id)?;
                Ok(())
            }
            Command::MoveNode { id, to, .. } => {
                scene.move_node(*id, *to)?;
                Ok(())
            }
            Command::Composite(parts) => {
                for part in parts {
                    part.apply(scene)?;
                }
                Ok(())
            }
        }
    }

    /// The exact inverse of this command. Composites invert in reverse
    /// order so dependencies unwind correctly.
    pub fn inverted(&self) -> Command {
        match self {
            Command::AddNode { id, pos } => Command::RemoveNode { id: *id, pos: *pos },
            Command::RemoveNode { id, pos } => Command::AddNode { id: *id, pos: *pos },
            Command::AddEdge { id, a, b } => Command::RemoveEdge {
                id: *id,
                a: *a,
                b: *b,
            },
            Command::RemoveEdge { id, a, b } => Command::AddEdge {
                id: *id,
                a: *a,
                b: *b,
            },
            Command::MoveNode { id, from, to } => Command::MoveNode {
                id: *id,
                from: *to,
                to: *from,
            },
            Command::Composite(parts) => {
                Command::Composite(parts.iter().rev().map(Command::inverted).collect())
            }
        }
    }
}
