//! Pointer and key events delivered to the slider.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::config::Orientation;

/// Primary-pointer event, position relative to the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Cancel,
}

impl PointerEvent {
    /// Position of events that drive the thumb (down and move).
    pub fn drag_position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position } | PointerEvent::Move { position } => Some(*position),
            PointerEvent::Up { .. } | PointerEvent::Cancel => None,
        }
    }
}

/// Directional keys the slider reacts to; anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other(String),
}

/// Direction a key nudges the progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

impl Key {
    /// Map the key to a progress step for the given orientation.
    ///
    /// Up/Down always step. Left/Right step only on horizontal sliders,
    /// where progress grows toward the left edge.
    pub fn step(&self, orientation: Orientation) -> Option<Step> {
        match (self, orientation) {
            (Key::Up, _) => Some(Step::Increment),
            (Key::Down, _) => Some(Step::Decrement),
            (Key::Left, Orientation::Horizontal) => Some(Step::Increment),
            (Key::Right, Orientation::Horizontal) => Some(Step::Decrement),
            _ => None,
        }
    }
}

/// Whether the widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The slider handled the event; the host should stop propagating it.
    Handled,
    /// The host should apply its default handling.
    Ignored,
}

impl EventStatus {
    pub fn is_handled(self) -> bool {
        matches!(self, EventStatus::Handled)
    }
}
