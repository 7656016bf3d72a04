//! Mapping between device positions and the drawing surface's local space.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// The surface's current geometric transform.
///
/// Holds the local-to-screen matrix (the surface's "screen CTM") and maps
/// raw pointer positions back through its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    ctm: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            ctm: Affine::IDENTITY,
        }
    }
}

impl Viewport {
    /// Identity mapping: screen and local coordinates coincide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit local-to-screen transform.
    pub fn from_ctm(ctm: Affine) -> Self {
        Self { ctm }
    }

    /// A surface placed at `offset` on screen and scaled by `zoom`.
    pub fn from_offset_zoom(offset: Vec2, zoom: f64) -> Self {
        Self::from_ctm(Affine::translate(offset) * Affine::scale(zoom))
    }

    /// Replace the transform, e.g. after the surface was moved or resized.
    pub fn set_ctm(&mut self, ctm: Affine) {
        self.ctm = ctm;
    }

    /// Local-to-screen transform.
    pub fn ctm(&self) -> Affine {
        self.ctm
    }

    /// Convert a raw screen point to local coordinates.
    pub fn screen_to_local(&self, screen_point: Point) -> Point {
        self.ctm.inverse() * screen_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let viewport = Viewport::new();
        let screen = Point::new(100.0, 200.0);
        let local = viewport.screen_to_local(screen);
        assert!((local.x - screen.x).abs() < f64::EPSILON);
        assert!((local.y - screen.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_local_with_offset() {
        let viewport = Viewport::from_offset_zoom(Vec2::new(50.0, 100.0), 1.0);
        let local = viewport.screen_to_local(Point::new(100.0, 200.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_local_with_zoom() {
        let viewport = Viewport::from_offset_zoom(Vec2::ZERO, 2.0);
        let local = viewport.screen_to_local(Point::new(100.0, 200.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut viewport = Viewport::new();
        viewport.set_ctm(Affine::translate((30.0, -20.0)) * Affine::scale(1.5));

        let original = Point::new(123.0, 456.0);
        let local = viewport.screen_to_local(original);
        let back = viewport.ctm() * local;

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }
}
