//! Pointer events delivered by the hosting surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Any further button, by platform index.
    Other(u16),
}

impl MouseButton {
    /// Map a DOM-style `MouseEvent.button` index.
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            n => MouseButton::Other(n),
        }
    }

    /// Only the primary button draws.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer event in raw screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    /// Released anywhere, including outside the surface.
    Up,
    /// The pointer left the surface.
    Leave,
}
