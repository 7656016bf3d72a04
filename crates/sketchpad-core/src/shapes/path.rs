//! Freehand path shape, stored as SVG path commands.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand stroke kept as an opaque path-command string.
///
/// The string starts with a move-to at the anchor and grows by one
/// line-to per pointer move. The extent of every command point is tracked
/// alongside so the string never has to be parsed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreehandPath {
    pub(crate) id: ShapeId,
    data: String,
    extent: Rect,
    /// Style properties.
    pub style: ShapeStyle,
}

impl FreehandPath {
    /// Start a path with a move-to at `start`.
    pub fn new(start: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            data: format!("M{} {}", start.x, start.y),
            extent: Rect::from_points(start, start),
            style,
        }
    }

    /// Append a line-to command.
    pub fn line_to(&mut self, point: Point) {
        self.data.push_str(&format!(" L{} {}", point.x, point.y));
        self.extent = self.extent.union_pt(point);
    }

    /// The path commands, suitable for an SVG `d` attribute.
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl ShapeTrait for FreehandPath {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.extent
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn drag(&mut self, _anchor: Point, current: Point) {
        self.line_to(current);
    }
}
