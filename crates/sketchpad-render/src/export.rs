//! Standalone SVG snapshots of the committed drawing.

use crate::renderer::{RenderContext, RenderResult, ShapeSet};
#[cfg(not(target_arch = "wasm32"))]
use crate::renderer::RendererError;
use crate::svg_impl::SvgRenderer;
use kurbo::Size;
use sketchpad_core::editor::Editor;
use sketchpad_core::export::{DEFAULT_EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ExportFrame, ExportOptions};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// A rendered document ready to hand to the host's download mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Serialized SVG markup.
    pub markup: String,
    /// The region of local space the document covers.
    pub frame: ExportFrame,
    /// Suggested file name.
    pub file_name: String,
}

impl Snapshot {
    pub const MIME_TYPE: &'static str = EXPORT_MIME_TYPE;
    pub const DEFAULT_FILE_NAME: &'static str = DEFAULT_EXPORT_FILE_NAME;

    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    pub fn height(&self) -> f64 {
        self.frame.height()
    }

    /// Markup and pixel dimensions.
    pub fn into_parts(self) -> (String, f64, f64) {
        let (width, height) = (self.frame.width(), self.frame.height());
        (self.markup, width, height)
    }

    /// Write the markup to `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn write_to(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.markup).map_err(|source| RendererError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Exported {}x{} drawing to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Write the markup into `dir` under the snapshot's file name.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_in(&self, dir: impl AsRef<Path>) -> RenderResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }
}

/// Render the committed shapes into a document cropped to their bounds.
///
/// The shape being drawn, if any, is left out. The editor is not modified.
pub fn export_snapshot(editor: &Editor, options: &ExportOptions) -> RenderResult<Snapshot> {
    let frame = editor.export_frame(options);
    let ctx = RenderContext::new(editor, Size::new(frame.width(), frame.height()))
        .with_frame(frame)
        .with_background(options.background.map(Into::into))
        .with_shapes(ShapeSet::Committed);
    let markup = SvgRenderer::render_document(&ctx)?;
    log::debug!(
        "Rendered snapshot of {} shapes, view box {}",
        editor.len(),
        frame.view_box()
    );

    let file_name = if options.file_name.is_empty() {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        options.file_name.clone()
    };
    Ok(Snapshot {
        markup,
        frame,
        file_name,
    })
}
