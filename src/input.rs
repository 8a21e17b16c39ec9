//! Input model: tools, modifier keys, and the gesture state machine.
//!
//! `Tool` captures what a pointer-down should do. `InputState` is the gesture
//! tracked between pointer-down and pointer-up, carrying what the engine
//! needs to replay pointer moves against the element captured at the start.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, ElementKind};
use crate::geom::Point;
use crate::hit::Position;
use crate::transform::DragOffsets;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pick, move and resize existing elements.
    Select,
    Line,
    Rectangle,
    Ellipse,
    /// Freehand strokes.
    #[default]
    Pen,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 6] = [Self::Select, Self::Line, Self::Rectangle, Self::Ellipse, Self::Pen, Self::Text];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Pen => "pen",
            Self::Text => "text",
        }
    }

    /// Look a tool up by its [`Tool::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// The element kind this tool creates, if any.
    #[must_use]
    pub fn kind(self) -> Option<ElementKind> {
        match self {
            Self::Select => None,
            Self::Line => Some(ElementKind::Line),
            Self::Rectangle => Some(ElementKind::Rectangle),
            Self::Ellipse => Some(ElementKind::Ellipse),
            Self::Pen => Some(ElementKind::Freehand),
            Self::Text => Some(ElementKind::Text),
        }
    }

    /// Whether pointer drags with this tool draw a new element.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::Ellipse | Self::Pen)
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

/// A keyboard key, named as the host reports it (e.g. `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// The element grabbed by a select-tool gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedElement {
    /// The element as it was when the gesture began.
    pub element: Element,
    /// The part of the element that was grabbed.
    pub position: Position,
    /// Offsets replayed by a move gesture.
    pub offsets: DragOffsets,
}

/// The gesture in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    /// Sizing (or stroking) a freshly created element.
    Drawing {
        id: ElementId,
        tool: Tool,
        /// Where the pointer went down.
        origin: Point,
    },
    /// Dragging an element by its body.
    Moving(SelectedElement),
    /// Dragging one of an element's handles.
    Resizing(SelectedElement),
    /// A text element is open in the host's editor.
    Writing { id: ElementId },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The element this gesture operates on.
    #[must_use]
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Drawing { id, .. } | Self::Writing { id } => Some(*id),
            Self::Moving(sel) | Self::Resizing(sel) => Some(sel.element.id),
        }
    }
}
