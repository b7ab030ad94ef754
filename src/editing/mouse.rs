// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event types delivered by the host shell.
//!
//! Coordinates arrive in the shell's local pixel space and are validated
//! once, at construction. Everything downstream can assume finite
//! coordinates.

use crate::error::EditError;
use kurbo::Point;

/// A pointer button, mapped from the conventional numeric button codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u8),
}

impl From<u8> for PointerButton {
    fn from(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// One pointer event in screen space.
///
/// `button` is `None` for motion events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    /// A press or release event.
    pub fn with_button(x: f64, y: f64, button: u8) -> Result<Self, EditError> {
        Self::checked(x, y, Some(PointerButton::from(button)))
    }

    /// A motion event.
    pub fn motion(x: f64, y: f64) -> Result<Self, EditError> {
        Self::checked(x, y, None)
    }

    fn checked(x: f64, y: f64, button: Option<PointerButton>) -> Result<Self, EditError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(EditError::InvalidInput { x, y });
        }
        Ok(Self {
            pos: Point::new(x, y),
            button,
        })
    }

    pub fn is_primary(&self) -> bool {
        self.button == Some(PointerButton::Primary)
    }
}
