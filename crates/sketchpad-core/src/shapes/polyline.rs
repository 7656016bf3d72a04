//! Freehand polyline shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand drawing recorded as a series of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub(crate) id: ShapeId,
    points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polyline {
    /// Start a polyline at a single point.
    pub fn new(start: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![start],
            style,
        }
    }

    /// Create from existing points. Returns None if `points` is empty.
    pub fn from_points(points: Vec<Point>, style: ShapeStyle) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            points,
            style,
        })
    }

    /// Add a point to the end. Duplicates are kept.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in draw order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Polyline {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn drag(&mut self, _anchor: Point, current: Point) {
        self.add_point(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_creation() {
        let polyline = Polyline::new(Point::new(1.0, 2.0), ShapeStyle::default());
        assert_eq!(polyline.len(), 1);
        assert!(!polyline.is_empty());
        assert!(Polyline::from_points(Vec::new(), ShapeStyle::default()).is_none());
    }

    #[test]
    fn test_drag_appends_without_dedup() {
        let anchor = Point::new(0.0, 0.0);
        let mut polyline = Polyline::new(anchor, ShapeStyle::default());
        polyline.drag(anchor, Point::new(10.0, 10.0));
        polyline.drag(anchor, Point::new(10.0, 10.0));
        polyline.drag(anchor, anchor);
        assert_eq!(polyline.len(), 4);
        assert_eq!(polyline.points()[1], polyline.points()[2]);
    }

    #[test]
    fn test_bounds() {
        let polyline = Polyline::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            ShapeStyle::default(),
        )
        .unwrap();

        let bounds = polyline.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let anchor = Point::new(7.0, 7.0);
        let mut polyline = Polyline::new(anchor, ShapeStyle::default());
        polyline.drag(anchor, anchor);
        polyline.drag(anchor, anchor);
        assert!(polyline.is_degenerate());
    }
}
