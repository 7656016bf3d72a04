//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use sketchpad_core::editor::Editor;
use sketchpad_core::export::ExportFrame;
use sketchpad_core::shapes::Shape;
use std::path::PathBuf;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Which shapes a frame draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeSet {
    /// Committed shapes plus the one being drawn.
    #[default]
    Visible,
    /// Committed shapes only.
    Committed,
}

/// Context for a single render.
pub struct RenderContext<'a> {
    /// The editor whose shapes are drawn.
    pub editor: &'a Editor,
    /// Size of the surface in local units.
    pub viewport_size: Size,
    /// Region of local space to show; the whole viewport when None.
    pub frame: Option<ExportFrame>,
    /// Background fill; transparent when None.
    pub background_color: Option<Color>,
    /// Which shapes to draw.
    pub shapes: ShapeSet,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(editor: &'a Editor, viewport_size: Size) -> Self {
        Self {
            editor,
            viewport_size,
            frame: None,
            background_color: None,
            shapes: ShapeSet::Visible,
        }
    }

    /// Show only `frame`, sized to it.
    pub fn with_frame(mut self, frame: ExportFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Choose which shapes to draw.
    pub fn with_shapes(mut self, shapes: ShapeSet) -> Self {
        self.shapes = shapes;
        self
    }

    /// The shapes this context draws, back to front.
    pub fn shapes(&self) -> Box<dyn Iterator<Item = &'a Shape> + 'a> {
        let editor: &'a Editor = self.editor;
        match self.shapes {
            ShapeSet::Visible => Box::new(editor.visible_shapes()),
            ShapeSet::Committed => Box::new(editor.committed_shapes()),
        }
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the complete output for one frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Helper trait for shape rendering (used internally by renderers).
pub trait ShapeRenderer {
    /// Render one shape with its own style.
    fn render_shape(&mut self, shape: &Shape) -> RenderResult<()>;
}
