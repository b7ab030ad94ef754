// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Wayline: an interactive 2D node-and-edge map editor core.
//!
//! The crate is the engine behind a canvas-backed editor: a host shell
//! owns the surface, the event loop, and the drawing; this core owns the
//! scene graph, hit-testing, edit modes, and undo history. The whole
//! surface a host needs is [`Editor`]:
//!
//! ```
//! use wayline::Editor;
//!
//! let mut editor = Editor::create("canvas-1");
//! editor.switch_mode(1); // add-node
//! editor.pointer_down(120.0, 80.0, 0).unwrap();
//! editor.pointer_up(120.0, 80.0, 0).unwrap();
//!
//! let frame = editor.render();
//! assert_eq!(frame.nodes.len(), 1);
//! ```
//!
//! All operations are synchronous and single-threaded; the host calls
//! `render` once per animation frame and draws the returned
//! [`Snapshot`].

pub mod editing;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod model;
pub mod settings;
pub mod snapshot;
pub mod tools;

pub use editing::{Command, EditSession, PointerButton, PointerEvent, Selection, Viewport};
pub use editor::Editor;
pub use error::EditError;
pub use model::{Edge, EntityId, Node, SceneGraph, SceneReadError};
pub use snapshot::{Snapshot, SnapshotEdge, SnapshotNode, SnapshotPreview};
pub use tools::ToolId;
