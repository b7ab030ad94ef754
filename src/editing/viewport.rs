// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transformation between world space and screen space.
//!
//! The viewport is navigation state, not document state: panning and
//! zooming never touch the undo history. `offset` is the world-space
//! point at the screen origin; `zoom` is screen pixels per world unit.

use crate::settings;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset: Point,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            offset: Point::ORIGIN,
            zoom: 1.0,
        }
    }

    /// World to screen.
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            (world.x - self.offset.x) * self.zoom,
            (world.y - self.offset.y) * self.zoom,
        )
    }

    /// Screen to world.
    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.zoom + self.offset.x,
            screen.y / self.zoom + self.offset.y,
        )
    }

    /// Shift the view by a screen-space pointer delta, so the content
    /// follows the cursor.
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.offset -= screen_delta / self.zoom;
    }

    /// Set the zoom level, clamped to the configured range, keeping the
    /// world point under `anchor_screen` fixed on screen.
    pub fn set_zoom(&mut self, zoom: f64, anchor_screen: Point) {
        let clamped = if zoom.is_finite() {
            zoom.clamp(settings::camera::MIN_ZOOM, settings::camera::MAX_ZOOM)
        } else {
            self.zoom
        };

        let anchor_world = self.to_world(anchor_screen);
        self.zoom = clamped;
        self.offset = Point::new(
            anchor_world.x - anchor_screen.x / self.zoom,
            anchor_world.y - anchor_screen.y / self.zoom,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_round_trip() {
        let vp = Viewport {
            offset: Point::new(13.0, -4.0),
            zoom: 2.5,
        };
        let world = Point::new(100.0, 200.0);
        let back = vp.to_world(vp.to_screen(world));
        assert!((back - world).hypot() < 1e-12);
    }

    #[test]
    fn identity_viewport_is_a_no_op() {
        let vp = Viewport::new();
        let p = Point::new(42.0, 7.0);
        assert_eq!(vp.to_screen(p), p);
        assert_eq!(vp.to_world(p), p);
    }

    #[test]
    fn pan_keeps_the_dragged_world_point_under_the_cursor() {
        let mut vp = Viewport {
            offset: Point::new(10.0, 10.0),
            zoom: 2.0,
        };
        let cursor_before = Point::new(50.0, 50.0);
        let world_under = vp.to_world(cursor_before);

        let delta = Vec2::new(30.0, -12.0);
        vp.pan(delta);

        let cursor_after = cursor_before + delta;
        let back = vp.to_screen(world_under);
        assert!((back - cursor_after).hypot() < 1e-12);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = Viewport::new();
        vp.set_zoom(1e6, Point::ORIGIN);
        assert_eq!(vp.zoom, settings::camera::MAX_ZOOM);

        vp.set_zoom(0.0, Point::ORIGIN);
        assert_eq!(vp.zoom, settings::camera::MIN_ZOOM);
    }

    #[test]
    fn zoom_anchors_the_cursor() {
        let mut vp = Viewport::new();
        let anchor = Point::new(200.0, 100.0);
        let world_under = vp.to_world(anchor);

        vp.set_zoom(4.0, anchor);

        let back = vp.to_screen(world_under);
        assert!((back - anchor).hypot() < 1e-9);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let mut vp = Viewport::new();
        vp.set_zoom(f64::NAN, Point::ORIGIN);
        assert_eq!(vp.zoom, 1.0);
    }
}
