//! Sketchpad Render Library
//!
//! Renderer abstraction and the SVG implementation for Sketchpad:
//! live markup for the drawing surface and standalone export snapshots.

pub mod export;
mod renderer;
mod svg_impl;

pub use export::{Snapshot, export_snapshot};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, ShapeRenderer, ShapeSet};
pub use svg_impl::SvgRenderer;
