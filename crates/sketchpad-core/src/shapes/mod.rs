//! Shape definitions for the drawing surface.

mod circle;
mod color;
mod line;
mod path;
mod polyline;
mod rectangle;

pub use circle::Circle;
pub use color::{ColorParseError, ShapeColor};
pub use line::Line;
pub use path::FreehandPath;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Style properties for shapes.
///
/// Captured from the tool settings when a shape is created and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: ShapeColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<ShapeColor>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: ShapeColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the geometric bounding box (stroke width excluded).
    fn bounds(&self) -> Rect;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Update the geometry while the shape is being drawn.
    ///
    /// `anchor` is where the interaction started, `current` the latest
    /// pointer position.
    fn drag(&mut self, anchor: Point, current: Point);

    /// A shape whose bounding box has neither width nor height, or is not
    /// finite.
    fn is_degenerate(&self) -> bool {
        let bounds = self.bounds();
        !bounds.is_finite() || (bounds.width() == 0.0 && bounds.height() == 0.0)
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Polyline(Polyline),
    Path(FreehandPath),
}

impl Shape {
    /// Create the zero-size shape a new interaction with `tool` starts from.
    pub fn anchored(tool: ToolKind, anchor: Point, style: ShapeStyle) -> Self {
        match tool {
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(anchor, 0.0, 0.0, style)),
            ToolKind::Circle => Shape::Circle(Circle::new(anchor, 0.0, style)),
            ToolKind::Line => Shape::Line(Line::new(anchor, anchor, style)),
            ToolKind::Polyline => Shape::Polyline(Polyline::new(anchor, style)),
            ToolKind::Path => Shape::Path(FreehandPath::new(anchor, style)),
        }
    }

    /// The tool that draws this kind of shape.
    pub fn kind(&self) -> ToolKind {
        match self {
            Shape::Rectangle(_) => ToolKind::Rectangle,
            Shape::Circle(_) => ToolKind::Circle,
            Shape::Line(_) => ToolKind::Line,
            Shape::Polyline(_) => ToolKind::Polyline,
            Shape::Path(_) => ToolKind::Path,
        }
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Line(s) => s,
            Shape::Polyline(s) => s,
            Shape::Path(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Line(s) => s,
            Shape::Polyline(s) => s,
            Shape::Path(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn style(&self) -> &ShapeStyle {
        self.as_trait().style()
    }

    pub fn drag(&mut self, anchor: Point, current: Point) {
        self.as_trait_mut().drag(anchor, current);
    }

    pub fn is_degenerate(&self) -> bool {
        self.as_trait().is_degenerate()
    }
}

/// Union of the bounding boxes of `shapes`, or None if there are none.
pub fn combined_bounds<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Option<Rect> {
    shapes.into_iter().map(Shape::bounds).reduce(|acc, b| acc.union(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_shapes_are_degenerate() {
        let anchor = Point::new(12.0, 34.0);
        for tool in ToolKind::ALL {
            let shape = Shape::anchored(tool, anchor, ShapeStyle::default());
            assert_eq!(shape.kind(), tool);
            assert!(shape.is_degenerate(), "{tool:?} should start zero-size");
        }
    }

    #[test]
    fn test_drag_dispatches_per_kind() {
        let anchor = Point::new(0.0, 0.0);
        let mut circle = Shape::anchored(ToolKind::Circle, anchor, ShapeStyle::default());
        circle.drag(anchor, Point::new(3.0, 4.0));
        let bounds = circle.bounds();
        assert!((bounds.x0 + 5.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combined_bounds() {
        let style = ShapeStyle::default();
        let shapes = vec![
            Shape::Rectangle(Rectangle::new(Point::new(10.0, 10.0), 40.0, 30.0, style.clone())),
            Shape::Line(Line::new(Point::new(-5.0, 20.0), Point::new(0.0, 100.0), style)),
        ];
        let bounds = combined_bounds(&shapes).unwrap();
        assert_eq!(bounds, Rect::new(-5.0, 10.0, 50.0, 100.0));
        assert!(combined_bounds(Vec::<Shape>::new().iter()).is_none());
    }

    #[test]
    fn test_non_finite_bounds_are_degenerate() {
        let style = ShapeStyle::default();
        let nan_rect = Rectangle::new(Point::new(1.0, 1.0), f64::NAN, f64::NAN, style.clone());
        assert!(Shape::Rectangle(nan_rect).is_degenerate());

        let mut line = Shape::anchored(ToolKind::Line, Point::new(0.0, 0.0), style);
        line.drag(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 5.0));
        assert!(line.is_degenerate());
    }
}
