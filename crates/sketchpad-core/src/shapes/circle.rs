//! Circle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle given by center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.abs(),
            style,
        }
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn drag(&mut self, anchor: Point, current: Point) {
        // The center stays where the interaction started.
        self.radius = anchor.distance(current);
    }
}
