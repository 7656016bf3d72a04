//! Tool selection and the control inputs that style new shapes.

use crate::config::ConfigError;
use crate::shapes::{ColorParseError, ShapeColor, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Rectangle,
    Circle,
    Line,
    /// Freehand stroke kept as a point list.
    Polyline,
    /// Freehand stroke kept as path commands.
    Path,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Polyline,
        ToolKind::Path,
    ];

    /// Display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Line => "Line",
            ToolKind::Polyline => "Freehand",
            ToolKind::Path => "Freehand Path",
        }
    }
}

/// Current values of the drawing controls.
///
/// These are read when an interaction starts; changing them later never
/// affects shapes that already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Currently selected tool.
    pub tool: ToolKind,
    pub stroke_color: ShapeColor,
    /// Requested stroke width; see [`ToolSettings::effective_stroke_width`].
    pub stroke_width: f64,
    pub fill_color: ShapeColor,
    /// Whether new shapes are filled with `fill_color`.
    pub fill_enabled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            stroke_color: ShapeColor::black(),
            stroke_width: 2.0,
            fill_color: ShapeColor::white(),
            fill_enabled: false,
        }
    }
}

impl ToolSettings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Set the stroke color from a color picker value.
    pub fn set_stroke_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.stroke_color = hex.parse()?;
        Ok(())
    }

    /// Set the fill color from a color picker value.
    pub fn set_fill_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.fill_color = hex.parse()?;
        Ok(())
    }

    /// Stroke width actually applied: unusable input falls back to 1.
    pub fn effective_stroke_width(&self) -> f64 {
        if self.stroke_width.is_finite() && self.stroke_width > 0.0 {
            self.stroke_width
        } else {
            1.0
        }
    }

    /// The style a shape created right now receives.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke_color: self.stroke_color,
            stroke_width: self.effective_stroke_width(),
            fill_color: self.fill_enabled.then_some(self.fill_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool() {
        let settings = ToolSettings::new();
        assert_eq!(settings.tool, ToolKind::Rectangle);
        assert!(!settings.fill_enabled);
    }

    #[test]
    fn test_style_without_fill() {
        let mut settings = ToolSettings::new();
        settings.set_stroke_hex("#ff0000").unwrap();
        let style = settings.style();
        assert_eq!(style.stroke_color, ShapeColor::rgb(255, 0, 0));
        assert!(style.fill_color.is_none());
    }

    #[test]
    fn test_style_with_fill() {
        let mut settings = ToolSettings::new();
        settings.set_fill_hex("#00ff00").unwrap();
        settings.fill_enabled = true;
        assert_eq!(settings.style().fill_color, Some(ShapeColor::rgb(0, 255, 0)));
    }

    #[test]
    fn test_stroke_width_fallback() {
        let mut settings = ToolSettings::new();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            settings.stroke_width = bad;
            assert!((settings.style().stroke_width - 1.0).abs() < f64::EPSILON);
        }
        settings.stroke_width = 4.5;
        assert!((settings.style().stroke_width - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_hex_keeps_previous_color() {
        let mut settings = ToolSettings::new();
        assert!(settings.set_stroke_hex("red").is_err());
        assert_eq!(settings.stroke_color, ShapeColor::black());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = ToolSettings::from_json(r#"{"tool":"Circle","fill_enabled":true}"#).unwrap();
        assert_eq!(settings.tool, ToolKind::Circle);
        assert!(settings.fill_enabled);
        assert!((settings.stroke_width - 2.0).abs() < f64::EPSILON);
        assert!(ToolSettings::from_json("{").is_err());
    }
}
