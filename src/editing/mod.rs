// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod command;
pub mod mouse;
pub mod selection;
pub mod session;
pub mod undo;
pub mod viewport;

pub use command::Command;
pub use mouse::{PointerButton, PointerEvent};
pub use selection::Selection;
pub use session::EditSession;
pub use undo::UndoStack;
pub use viewport::Viewport;
