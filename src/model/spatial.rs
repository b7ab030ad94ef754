// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Spatial index for node and edge hit-testing.
//!
//! Nodes and edges are kept in two R*-trees, maintained incrementally by
//! the scene graph on every structural change rather than rebuilt per
//! query. Nearest-entity queries and box selection both run sub-linear
//! in scene size; there is no linear-scan fallback at any scale.
//!
//! Queries operate in world space. Callers converting from screen space
//! are responsible for dividing their pick radius by the current zoom.

use crate::geometry;
use crate::model::EntityId;
use kurbo::{Line, Point, Rect};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// A node entry stored in the R*-tree.
#[derive(Debug, Clone)]
struct IndexedNode {
    id: EntityId,
    pos: [f64; 2],
}

impl PartialEq for IndexedNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl RTreeObject for IndexedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos)
    }
}

impl PointDistance for IndexedNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.pos[0] - point[0];
        let dy = self.pos[1] - point[1];
        dx * dx + dy * dy
    }
}

/// An edge entry stored in the R*-tree, keyed by its current endpoint
/// positions. The scene graph reindexes an edge whenever one of its
/// endpoints moves.
#[derive(Debug, Clone)]
struct IndexedEdge {
    id: EntityId,
    a: [f64; 2],
    b: [f64; 2],
}

impl IndexedEdge {
    fn segment(&self) -> Line {
        Line::new(
            Point::new(self.a[0], self.a[1]),
            Point::new(self.b[0], self.b[1]),
        )
    }
}

impl PartialEq for IndexedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.a[0].min(self.b[0]), self.a[1].min(self.b[1])],
            [self.a[0].max(self.b[0]), self.a[1].max(self.b[1])],
        )
    }
}

impl PointDistance for IndexedEdge {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let p = Point::new(point[0], point[1]);
        let d = geometry::point_segment_distance_raw(p, self.segment());
        d * d
    }
}

/// Incrementally maintained spatial index over one scene graph.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    nodes: RTree<IndexedNode>,
    edges: RTree<IndexedEdge>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Maintenance hooks (called by the scene graph) =====

    pub(crate) fn insert_node(&mut self, id: EntityId, pos: Point) {
        self.nodes.insert(IndexedNode {
            id,
            pos: [pos.x, pos.y],
        });
    }

    pub(crate) fn remove_node(&mut self, id: EntityId, pos: Point) {
        self.nodes.remove(&IndexedNode {
            id,
            pos: [pos.x, pos.y],
        });
    }

    pub(crate) fn move_node(&mut self, id: EntityId, old: Point, new: Point) {
        self.remove_node(id, old);
        self.insert_node(id, new);
    }

    pub(crate) fn insert_edge(&mut self, id: EntityId, a: Point, b: Point) {
        self.edges.insert(IndexedEdge {
            id,
            a: [a.x, a.y],
            b: [b.x, b.y],
        });
    }

    pub(crate) fn remove_edge(&mut self, id: EntityId, a: Point, b: Point) {
        self.edges.remove(&IndexedEdge {
            id,
            a: [a.x, a.y],
            b: [b.x, b.y],
        });
    }

    // ===== Queries =====

    /// Closest node within `max_radius` of `p`, ties broken toward the
    /// lowest id so repeated queries are deterministic.
    pub fn nearest_node(&self, p: Point, max_radius: f64) -> Option<EntityId> {
        let candidates = self
            .nodes
            .locate_within_distance([p.x, p.y], max_radius * max_radius);
        nearest_by_distance(candidates.map(|n| (n.id, n.distance_2(&[p.x, p.y]))))
    }

    /// Closest edge within `max_radius` of `p`, measured by
    /// point-segment distance. Same tie-break rule as `nearest_node`.
    pub fn nearest_edge(&self, p: Point, max_radius: f64) -> Option<EntityId> {
        let candidates = self
            .edges
            .locate_within_distance([p.x, p.y], max_radius * max_radius);
        nearest_by_distance(candidates.map(|e| (e.id, e.distance_2(&[p.x, p.y]))))
    }

    /// All nodes whose position lies inside `rect` (inclusive edges).
    pub fn nodes_in_rect(&self, rect: Rect) -> Vec<EntityId> {
        let rect = rect.abs();
        let aabb = AABB::from_corners([rect.x0, rect.y0], [rect.x1, rect.y1]);
        let mut out: Vec<EntityId> = self
            .nodes
            .locate_in_envelope_intersecting(&aabb)
            .map(|n| n.id)
            .collect();
        out.sort();
        out
    }
}

/// Pick the entry with the smallest distance, then the smallest id.
fn nearest_by_distance(
    candidates: impl Iterator<Item = (EntityId, f64)>,
) -> Option<EntityId> {
    let mut best: Option<(f64, EntityId)> = None;
    for (id, dist_2) in candidates {
        let better = match best {
            None => true,
            Some((best_dist, best_id)) => {
                dist_2 < best_dist || (dist_2 == best_dist && id < best_id)
            }
        };
        if better {
            best = Some((dist_2, id));
        }
    }
    best.map(|(_, id)| id)
}
