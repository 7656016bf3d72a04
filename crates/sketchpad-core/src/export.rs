//! Export framing: where a snapshot's view box goes and how big it is.

use crate::shapes::ShapeColor;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Margin added around the drawing on every side.
pub const DEFAULT_EXPORT_PADDING: f64 = 16.0;

/// File name offered for exported drawings.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "drawing.svg";

/// MIME type of exported drawings.
pub const EXPORT_MIME_TYPE: &str = "image/svg+xml";

/// Snapshot export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Margin around the combined bounds of all shapes.
    pub padding: f64,
    /// Keep the frame origin at or above zero on each axis.
    pub clamp_origin: bool,
    /// Suggested file name for the exported document.
    pub file_name: String,
    /// Optional background fill behind the shapes.
    pub background: Option<ShapeColor>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_EXPORT_PADDING,
            clamp_origin: true,
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            background: None,
        }
    }
}

/// Position and size of an exported document's view box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportFrame {
    pub origin: Point,
    pub size: Size,
}

impl ExportFrame {
    /// Frame `content` (or the zero rect when there is nothing to export).
    ///
    /// The size is computed from the padded content and is not reduced when
    /// the origin gets clamped. Each side is at least 1. Negative padding
    /// counts as none.
    pub fn around(content: Option<Rect>, options: &ExportOptions) -> Self {
        let bounds = content.unwrap_or(Rect::ZERO);
        let pad = options.padding.max(0.0);

        let mut x = bounds.x0 - pad;
        let mut y = bounds.y0 - pad;
        if options.clamp_origin {
            x = x.max(0.0);
            y = y.max(0.0);
        }

        Self {
            origin: Point::new(x, y),
            size: Size::new(
                (bounds.width() + pad * 2.0).max(1.0),
                (bounds.height() + pad * 2.0).max(1.0),
            ),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// `min-x min-y width height`, as used by an SVG `viewBox`.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}
