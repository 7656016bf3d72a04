//! Line shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style,
        }
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn drag(&mut self, _anchor: Point, current: Point) {
        self.end = current;
    }
}
