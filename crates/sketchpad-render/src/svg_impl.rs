//! SVG markup renderer.

use crate::renderer::{RenderContext, RenderResult, Renderer, ShapeRenderer};
use sketchpad_core::shapes::{Shape, ShapeColor, ShapeStyle};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renders shapes as SVG elements into a string buffer.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    out: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a complete document for `ctx`.
    pub fn render_document(ctx: &RenderContext) -> RenderResult<String> {
        let mut renderer = Self::new();
        renderer.build_scene(ctx)?;
        Ok(renderer.finish())
    }

    /// Markup for a single shape, e.g. to patch a live display.
    pub fn shape_element(shape: &Shape) -> RenderResult<String> {
        let mut renderer = Self::new();
        renderer.render_shape(shape)?;
        Ok(renderer.finish())
    }

    /// Take the accumulated markup, leaving the renderer empty.
    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    fn write_style(&mut self, style: &ShapeStyle) -> RenderResult<()> {
        let fill = style
            .fill_color
            .map_or_else(|| "none".to_string(), |c| c.to_hex());
        write!(
            self.out,
            r#" stroke="{}" stroke-width="{}" fill="{}" vector-effect="non-scaling-stroke"/>"#,
            style.stroke_color.to_hex(),
            style.stroke_width,
            fill
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let (x, y, width, height) = match ctx.frame {
            Some(frame) => (frame.origin.x, frame.origin.y, frame.width(), frame.height()),
            None => (0.0, 0.0, ctx.viewport_size.width, ctx.viewport_size.height),
        };

        write!(
            self.out,
            r#"<svg xmlns="{SVG_NS}" viewBox="{x} {y} {width} {height}" width="{width}" height="{height}">"#
        )?;

        if let Some(background) = ctx.background_color {
            write!(
                self.out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                ShapeColor::from(background).to_hex()
            )?;
        }

        self.out.push_str(r#"<g id="layer">"#);
        for shape in ctx.shapes() {
            self.render_shape(shape)?;
        }
        self.out.push_str("</g></svg>");
        Ok(())
    }
}

impl ShapeRenderer for SvgRenderer {
    fn render_shape(&mut self, shape: &Shape) -> RenderResult<()> {
        match shape {
            Shape::Rectangle(rect) => write!(
                self.out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                rect.position.x, rect.position.y, rect.width, rect.height
            )?,
            Shape::Circle(circle) => write!(
                self.out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                circle.center.x, circle.center.y, circle.radius
            )?,
            Shape::Line(line) => write!(
                self.out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                line.start.x, line.start.y, line.end.x, line.end.y
            )?,
            Shape::Polyline(polyline) => {
                self.out.push_str(r#"<polyline points=""#);
                for (i, p) in polyline.points().iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    write!(self.out, "{},{}", p.x, p.y)?;
                }
                self.out.push('"');
            }
            Shape::Path(path) => write!(self.out, r#"<path d="{}""#, path.data())?,
        }
        self.write_style(shape.style())
    }
}
