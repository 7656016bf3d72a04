//! The shape editor: interaction state machine plus linear undo/redo.

use crate::export::{ExportFrame, ExportOptions};
use crate::shapes::{Shape, ShapeId, ShapeStyle, combined_bounds};
use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// State of the pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Waiting for an interaction to start.
    #[default]
    Idle,
    /// A shape is being drawn.
    Drawing {
        /// Tool chosen when the interaction started.
        tool: ToolKind,
        /// Where the interaction started.
        anchor: Point,
        /// The in-progress shape.
        shape: ShapeId,
    },
}

/// What happened to the in-progress shape when an interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The shape was appended to the history.
    Committed(ShapeId),
    /// The shape had no extent and was thrown away.
    Discarded(ShapeId),
}

/// Owns every shape and the history that orders them.
///
/// Shapes are stored by id. Each stored shape is referenced by exactly one
/// of the history, the redo buffer, or the in-progress slot of
/// [`EditorState::Drawing`].
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    shapes: HashMap<ShapeId, Shape>,
    /// Committed, visible shapes in paint order.
    history: Vec<ShapeId>,
    /// Undone shapes, most recently undone last.
    redo_stack: Vec<ShapeId>,
}

impl Editor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Check if an interaction is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, EditorState::Drawing { .. })
    }

    /// Start drawing a new shape of `tool`'s kind at `point`.
    ///
    /// Invalidates everything that could be redone. Returns the id of the
    /// new in-progress shape, or None if an interaction is already running
    /// or `point` is not finite.
    pub fn begin_interaction(
        &mut self,
        tool: ToolKind,
        point: Point,
        style: ShapeStyle,
    ) -> Option<ShapeId> {
        if self.is_drawing() {
            log::debug!("begin_interaction ignored: already drawing");
            return None;
        }
        if !point.is_finite() {
            log::debug!("begin_interaction ignored: non-finite point {:?}", point);
            return None;
        }

        self.discard_redo();

        let shape = Shape::anchored(tool, point, style);
        let id = shape.id();
        self.shapes.insert(id, shape);
        self.state = EditorState::Drawing {
            tool,
            anchor: point,
            shape: id,
        };
        log::debug!("begin {:?} at ({}, {})", tool, point.x, point.y);
        Some(id)
    }

    /// Update the in-progress shape for the pointer now at `point`.
    ///
    /// Returns false (and does nothing) when idle or when `point` is not finite.
    pub fn update_interaction(&mut self, point: Point) -> bool {
        let EditorState::Drawing { anchor, shape, .. } = self.state else {
            return false;
        };
        if !point.is_finite() {
            log::trace!("update ignored: non-finite point {:?}", point);
            return false;
        }
        match self.shapes.get_mut(&shape) {
            Some(s) => {
                s.drag(anchor, point);
                log::trace!("update {} to ({}, {})", shape, point.x, point.y);
                true
            }
            None => false,
        }
    }

    /// Finish the interaction, committing the shape unless it has no extent.
    ///
    /// Returns None when idle, so repeated calls are harmless.
    pub fn end_interaction(&mut self) -> Option<InteractionOutcome> {
        let EditorState::Drawing { shape: id, .. } = self.state else {
            return None;
        };
        self.state = EditorState::Idle;

        let degenerate = self.shapes.get(&id).map_or(true, Shape::is_degenerate);
        if degenerate {
            self.shapes.remove(&id);
            log::debug!("discarded zero-size shape {}", id);
            Some(InteractionOutcome::Discarded(id))
        } else {
            self.history.push(id);
            log::debug!("committed shape {} ({} in history)", id, self.history.len());
            Some(InteractionOutcome::Committed(id))
        }
    }

    /// Abandon the interaction without committing anything.
    ///
    /// Returns the id of the dropped shape, if there was one.
    pub fn cancel_interaction(&mut self) -> Option<ShapeId> {
        let EditorState::Drawing { shape: id, .. } = self.state else {
            return None;
        };
        self.state = EditorState::Idle;
        self.shapes.remove(&id);
        log::debug!("cancelled shape {}", id);
        Some(id)
    }

    /// Undo the last committed shape.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(id) = self.history.pop() {
            self.redo_stack.push(id);
            log::debug!("undo {}", id);
            true
        } else {
            false
        }
    }

    /// Redo the last undone shape, placing it on top of the history.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(id) = self.redo_stack.pop() {
            self.history.push(id);
            log::debug!("redo {}", id);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Remove every shape, including one being drawn. Cannot be undone.
    pub fn clear(&mut self) {
        self.state = EditorState::Idle;
        self.shapes.clear();
        self.history.clear();
        self.redo_stack.clear();
        log::debug!("cleared all shapes");
    }

    fn discard_redo(&mut self) {
        for id in self.redo_stack.drain(..) {
            self.shapes.remove(&id);
        }
    }

    /// Ids of committed shapes in paint order.
    pub fn history(&self) -> &[ShapeId] {
        &self.history
    }

    /// Ids of undone shapes, most recently undone last.
    pub fn redo_buffer(&self) -> &[ShapeId] {
        &self.redo_stack
    }

    /// Get a shape by ID, wherever it currently lives.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// The shape being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        match self.state {
            EditorState::Drawing { shape, .. } => self.shapes.get(&shape),
            EditorState::Idle => None,
        }
    }

    /// Committed shapes in paint order (back to front).
    pub fn committed_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.history.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Everything on the surface: committed shapes, then the one being drawn.
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.committed_shapes().chain(self.in_progress())
    }

    /// Check if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Get the number of committed shapes.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Union of the bounding boxes of all committed shapes.
    pub fn content_bounds(&self) -> Option<Rect> {
        combined_bounds(self.committed_shapes())
    }

    /// Frame an export of the committed shapes.
    pub fn export_frame(&self, options: &ExportOptions) -> ExportFrame {
        ExportFrame::around(self.content_bounds(), options)
    }
}
