//! The drawing surface host: routes pointer events into the editor.

use crate::config::SketchpadConfig;
use crate::editor::{Editor, InteractionOutcome};
use crate::export::{ExportFrame, ExportOptions};
use crate::input::{MouseButton, PointerEvent};
use crate::tools::{ToolKind, ToolSettings};
use crate::viewport::Viewport;
use kurbo::Point;

/// Runtime state of one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// The shape editor.
    pub editor: Editor,
    /// Device-to-local coordinate mapping.
    pub viewport: Viewport,
    /// Current control values.
    pub settings: ToolSettings,
    /// Export settings.
    pub export_options: ExportOptions,
}

impl Canvas {
    /// Create a canvas with an empty editor and default controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas from loaded configuration.
    pub fn with_config(config: SketchpadConfig) -> Self {
        Self {
            settings: config.tools,
            export_options: config.export,
            ..Self::default()
        }
    }

    /// Set the current tool. Takes effect from the next interaction.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.set_tool(tool);
    }

    /// Process a pointer event. Returns true if the surface needs a repaint.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } => {
                if !button.is_primary() {
                    log::trace!("ignoring {:?} button press", button);
                    return false;
                }
                let local = self.viewport.screen_to_local(position);
                self.editor
                    .begin_interaction(self.settings.tool, local, self.settings.style())
                    .is_some()
            }
            PointerEvent::Move { position } => {
                if !self.editor.is_drawing() {
                    return false;
                }
                let local = self.viewport.screen_to_local(position);
                self.editor.update_interaction(local)
            }
            // Leaving ends the gesture exactly like a release.
            PointerEvent::Up | PointerEvent::Leave => self.finish_interaction().is_some(),
        }
    }

    /// End the current interaction at the last known point.
    pub fn finish_interaction(&mut self) -> Option<InteractionOutcome> {
        self.editor.end_interaction()
    }

    /// Convenience for hosts that report raw positions directly.
    pub fn pointer_down(&mut self, position: Point) -> bool {
        self.handle_pointer_event(PointerEvent::Down {
            position,
            button: MouseButton::Left,
        })
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    /// Frame of an export using this canvas's export settings.
    pub fn export_frame(&self) -> ExportFrame {
        self.editor.export_frame(&self.export_options)
    }
}
