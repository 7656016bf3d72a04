//! Rectangle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left (minimum) corner position.
    pub position: Point,
    /// Width of the rectangle, never negative.
    pub width: f64,
    /// Height of the rectangle, never negative.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: width.abs(),
            height: height.abs(),
            style,
        }
    }

    /// Normalize two arbitrary corners into origin + size.
    fn set_corners(&mut self, p1: Point, p2: Point) {
        self.position = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
        self.width = (p2.x - p1.x).abs();
        self.height = (p2.y - p1.y).abs();
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn drag(&mut self, anchor: Point, current: Point) {
        self.set_corners(anchor, current);
    }
}
