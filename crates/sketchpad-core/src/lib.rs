//! Sketchpad Core Library
//!
//! Platform-agnostic data model and shape editing state machine for the
//! Sketchpad drawing surface.

pub mod canvas;
pub mod config;
pub mod editor;
pub mod export;
pub mod input;
pub mod shapes;
pub mod tools;
pub mod viewport;

pub use canvas::Canvas;
pub use config::{ConfigError, SketchpadConfig};
pub use editor::{Editor, EditorState, InteractionOutcome};
pub use export::{
    DEFAULT_EXPORT_FILE_NAME, DEFAULT_EXPORT_PADDING, EXPORT_MIME_TYPE, ExportFrame, ExportOptions,
};
pub use input::{MouseButton, PointerEvent};
pub use tools::{ToolKind, ToolSettings};
pub use viewport::Viewport;
