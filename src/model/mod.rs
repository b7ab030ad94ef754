// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Document model: entities, the scene graph, and the spatial index.

pub mod entity_id;
pub mod scene;
pub mod spatial;

pub use entity_id::EntityId;
pub use scene::{Edge, EdgeSplit, Node, SceneGraph, SceneReadError};
pub use spatial::SpatialIndex;
