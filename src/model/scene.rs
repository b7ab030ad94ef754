// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! The scene graph: owner of all editable nodes and edges.
//!
//! Nodes are points in world space; edges connect two distinct nodes by
//! id. Entities reference each other only through [`EntityId`], never by
//! direct reference, so deletion can never leave a dangling pointer and
//! undo commands replay exactly after an entity is re-created.
//!
//! Every mutator is atomic: validation completes before the first write,
//! so a returned error means the scene is exactly as it was. The spatial
//! index is maintained inline by each mutator rather than rebuilt per
//! query.

use crate::error::EditError;
use crate::geometry;
use crate::model::entity_id::{EntityId, IdSource};
use crate::model::spatial::SpatialIndex;
use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// A point entity owned by the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: EntityId,
    pub pos: Point,
}

/// A connection between two distinct nodes, referenced by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EntityId,
    pub a: EntityId,
    pub b: EntityId,
}

impl Edge {
    /// Whether this edge connects the same unordered pair as (a, b).
    pub fn joins(&self, a: EntityId, b: EntityId) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }

    /// The endpoint that is not `id`, if `id` is an endpoint at all.
    pub fn other_end(&self, id: EntityId) -> Option<EntityId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Result of splitting an edge at a point on it.
#[derive(Debug, Clone, Copy)]
pub struct EdgeSplit {
    /// The edge that was removed.
    pub removed: Edge,
    /// The node inserted at the split position.
    pub node: Node,
    /// Replacement edge from `removed.a` to the new node.
    pub left: Edge,
    /// Replacement edge from the new node to `removed.b`.
    pub right: Edge,
}

/// Serialized form of a scene, used for save/load round-tripping.
#[derive(Debug, Serialize, Deserialize)]
struct SceneDoc {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: IdSource,
}

/// Errors from decoding a serialized scene.
#[derive(Debug, Error)]
pub enum SceneReadError {
    #[error("malformed scene document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inconsistent scene document: {0}")]
    Invalid(#[from] EditError),
    #[error("duplicate id {0} in scene document")]
    DuplicateId(EntityId),
}

/// The mutable collection of editable entities and their topology.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<EntityId, Node>,
    edges: BTreeMap<EntityId, Edge>,
    /// Node id to the ids of its incident edges.
    adjacency: BTreeMap<EntityId, BTreeSet<EntityId>>,
    ids: IdSource,
    index: SpatialIndex,
}

/// Structural equality: the same node and edge sets. The id counter and
/// the index are derived state and do not participate.
impl PartialEq for SceneGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Read access =====

    pub fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EntityId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids of the edges incident to a node, in id order.
    pub fn incident_edges(&self, id: EntityId) -> Vec<EntityId> {
        self.adjacency
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// World-space segment of an edge.
    ///
    /// `None` for an unknown edge id. A missing endpoint on a live edge
    /// is a broken invariant and only observable as a bug.
    pub fn edge_segment(&self, id: EntityId) -> Option<Line> {
        let edge = self.edges.get(&id)?;
        let a = self.nodes.get(&edge.a)?;
        let b = self.nodes.get(&edge.b)?;
        Some(Line::new(a.pos, b.pos))
    }

    // ===== Spatial queries =====

    pub fn nearest_node(&self, p: Point, max_radius: f64) -> Option<EntityId> {
        self.index.nearest_node(p, max_radius)
    }

    pub fn nearest_edge(&self, p: Point, max_radius: f64) -> Option<EntityId> {
        self.index.nearest_edge(p, max_radius)
    }

    pub fn nodes_in_rect(&self, rect: Rect) -> Vec<EntityId> {
        self.index.nodes_in_rect(rect)
    }

    // ===== Mutators =====

    /// Insert a node at `pos` and return its fresh id.
    ///
    /// Coincident positions are legal; nodes are identified by id, not
    /// by position.
    pub fn add_node(&mut self, pos: Point) -> Result<EntityId, EditError> {
        geometry::ensure_finite(pos)?;

        let id = self.ids.next();
        self.nodes.insert(id, Node { id, pos });
        self.adjacency.insert(id, BTreeSet::new());
        self.index.insert_node(id, pos);
        Ok(id)
    }

    /// Remove a node and all its incident edges.
    ///
    /// Returns the removed node and edges (edges in id order) so the
    /// caller can record a composite command that restores everything in
    /// one undo step.
    pub fn remove_node(&mut self, id: EntityId) -> Result<(Node, Vec<Edge>), EditError> {
        if !self.nodes.contains_key(&id) {
            return Err(EditError::NotFound(id));
        }

        let cascade: Vec<EntityId> = self.incident_edges(id);
        let mut removed_edges = Vec::with_capacity(cascade.len());
        for edge_id in cascade {
            // Infallible: adjacency only holds live edge ids.
            removed_edges.push(self.remove_edge(edge_id)?);
        }

        let node = self.nodes.remove(&id).ok_or(EditError::NotFound(id))?;
        self.adjacency.remove(&id);
        self.index.remove_node(id, node.pos);
        Ok((node, removed_edges))
    }

    /// Connect two distinct existing nodes and return the edge's id.
    pub fn add_edge(&mut self, a: EntityId, b: EntityId) -> Result<EntityId, EditError> {
        self.check_edge(a, b)?;

        let id = self.ids.next();
        self.link_edge(Edge { id, a, b });
        Ok(id)
    }

    /// Remove an edge, returning it for command recording.
    pub fn remove_edge(&mut self, id: EntityId) -> Result<Edge, EditError> {
        let edge = self.edges.remove(&id).ok_or(EditError::NotFound(id))?;
        for end in [edge.a, edge.b] {
            if let Some(set) = self.adjacency.get_mut(&end) {
                set.remove(&id);
            }
        }
        if let (Some(a), Some(b)) = (self.nodes.get(&edge.a), self.nodes.get(&edge.b)) {
            self.index.remove_edge(id, a.pos, b.pos);
        }
        Ok(edge)
    }

    /// Move a node, returning its previous position.
    ///
    /// Incident edges are reindexed so spatial queries stay consistent
    /// with the new geometry.
    pub fn move_node(&mut self, id: EntityId, pos: Point) -> Result<Point, EditError> {
        geometry::ensure_finite(pos)?;
        let old = match self.nodes.get(&id) {
            Some(node) => node.pos,
            None => return Err(EditError::NotFound(id)),
        };

        for edge_id in self.incident_edges(id) {
            if let Some(seg) = self.edge_segment(edge_id) {
                self.index.remove_edge(edge_id, seg.p0, seg.p1);
            }
        }

        if let Some(node) = self.nodes.get_mut(&id) {
            node.pos = pos;
        }
        self.index.move_node(id, old, pos);

        for edge_id in self.incident_edges(id) {
            if let Some(seg) = self.edge_segment(edge_id) {
                self.index.insert_edge(edge_id, seg.p0, seg.p1);
            }
        }
        Ok(old)
    }

    /// Split an edge at the projection of `pos` onto it.
    ///
    /// The edge is replaced by a new node at the projected position and
    /// two edges covering its halves. Validation happens before the
    /// first write; the individual steps below cannot fail after it.
    pub fn split_edge(&mut self, id: EntityId, pos: Point) -> Result<EdgeSplit, EditError> {
        geometry::ensure_finite(pos)?;
        let seg = self.edge_segment(id).ok_or(EditError::NotFound(id))?;
        let (_, split_pos) = geometry::project_onto_segment(pos, seg)?;

        let removed = self.remove_edge(id)?;
        let node_id = self.add_node(split_pos)?;
        let left_id = self.add_edge(removed.a, node_id)?;
        let right_id = self.add_edge(node_id, removed.b)?;

        Ok(EdgeSplit {
            removed,
            node: Node {
                id: node_id,
                pos: split_pos,
            },
            left: Edge {
                id: left_id,
                a: removed.a,
                b: node_id,
            },
            right: Edge {
                id: right_id,
                a: node_id,
                b: removed.b,
            },
        })
    }

    // ===== Command restore paths =====
    //
    // Undo/redo re-creates deleted entities under their original ids.
    // Callers guarantee the id is not live; that invariant is checked in
    // debug builds only.

    pub(crate) fn restore_node(&mut self, node: Node) {
        debug_assert!(
            !self.nodes.contains_key(&node.id),
            "restore of a live node id"
        );
        self.ids.bump(node.id);
        self.nodes.insert(node.id, node);
        self.adjacency.entry(node.id).or_default();
        self.index.insert_node(node.id, node.pos);
    }

    pub(crate) fn restore_edge(&mut self, edge: Edge) {
        debug_assert!(
            !self.edges.contains_key(&edge.id),
            "restore of a live edge id"
        );
        debug_assert!(
            self.nodes.contains_key(&edge.a) && self.nodes.contains_key(&edge.b),
            "restore of an edge with a missing endpoint"
        );
        self.ids.bump(edge.id);
        self.link_edge(edge);
    }

    // ===== Serialization =====

    /// Serialize the scene (entities and id counter) as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let doc = SceneDoc {
            nodes: self.nodes.values().copied().collect(),
            edges: self.edges.values().copied().collect(),
            ids: self.ids.clone(),
        };
        serde_json::to_string(&doc)
    }

    /// Rebuild a scene from its JSON form.
    ///
    /// Topology is re-validated on the way in, so a hand-edited document
    /// with a dangling or duplicate edge is rejected rather than
    /// admitted as a corrupt scene. The id counter is restored (and
    /// bumped past every seen id) to preserve the no-reuse guarantee.
    pub fn from_json(json: &str) -> Result<Self, SceneReadError> {
        let doc: SceneDoc = serde_json::from_str(json)?;

        let mut scene = SceneGraph::new();
        for node in doc.nodes {
            geometry::ensure_finite(node.pos)?;
            if scene.nodes.contains_key(&node.id) {
                return Err(SceneReadError::DuplicateId(node.id));
            }
            scene.restore_node(node);
        }
        for edge in doc.edges {
            scene.check_edge(edge.a, edge.b)?;
            if scene.edges.contains_key(&edge.id) || scene.nodes.contains_key(&edge.id) {
                return Err(SceneReadError::DuplicateId(edge.id));
            }
            scene.restore_edge(edge);
        }
        scene.ids = doc.ids;
        for id in scene.nodes.keys().chain(scene.edges.keys()) {
            let id = *id;
            scene.ids.bump(id);
        }
        Ok(scene)
    }

    // ===== Private helpers =====

    fn check_edge(&self, a: EntityId, b: EntityId) -> Result<(), EditError> {
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return Err(EditError::InvalidEdge { a, b });
        }
        let duplicate = self
            .adjacency
            .get(&a)
            .map(|set| {
                set.iter()
                    .filter_map(|id| self.edges.get(id))
                    .any(|edge| edge.joins(a, b))
            })
            .unwrap_or(false);
        if duplicate {
            return Err(EditError::DuplicateEdge { a, b });
        }
        Ok(())
    }

    /// Insert a pre-validated edge into the maps and the index.
    fn link_edge(&mut self, edge: Edge) {
        let id = edge.id;
        self.edges.insert(id, edge);
        for end in [edge.a, edge.b] {
            self.adjacency.entry(end).or_default().insert(id);
        }
        if let (Some(a), Some(b)) = (self.nodes.get(&edge.a), self.nodes.get(&edge.b)) {
            self.index.insert_edge(id, a.pos, b.pos);
        }
    }
}
