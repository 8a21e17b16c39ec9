//! Element model: the five shape kinds and their geometric fields.
//!
//! An [`Element`] pairs a scene-unique integer id with a [`Shape`]. The id is
//! always the element's index in its [`crate::scene::Scene`]; replacement and
//! lookup by id rely on that equality.
//!
//! Elements are plain values. Every edit builds a new element (and a new
//! scene) instead of mutating one that may already live in a history
//! snapshot, so the helpers here all take `&self` and return a fresh value.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::fmt;

use crate::geom::{Corners, Point};
use crate::input::Tool;

/// Identifier of an element; equal to its index in the scene.
pub type ElementId = usize;

/// The kind of an element, without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Straight segment between two endpoints.
    Line,
    /// Axis-aligned rectangle between two opposite corners.
    Rectangle,
    /// Ellipse inscribed in the box between two opposite corners.
    Ellipse,
    /// Freehand pen stroke.
    Freehand,
    /// Text anchored at its top-left corner.
    Text,
}

impl ElementKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Freehand => "freehand",
            Self::Text => "text",
        }
    }
}

/// Geometry of an element, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Corners),
    Rectangle(Corners),
    Ellipse(Corners),
    /// Ordered stroke samples; appended to while the stroke is being drawn.
    Freehand(Vec<Point>),
    /// Anchor plus content. The rendered extent comes from a
    /// [`crate::text::TextMeasure`] implementation.
    Text { anchor: Point, text: String },
}

/// One shape instance in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub shape: Shape,
}

impl Element {
    #[must_use]
    pub fn new(id: ElementId, shape: Shape) -> Self {
        Self { id, shape }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.shape {
            Shape::Line(_) => ElementKind::Line,
            Shape::Rectangle(_) => ElementKind::Rectangle,
            Shape::Ellipse(_) => ElementKind::Ellipse,
            Shape::Freehand(_) => ElementKind::Freehand,
            Shape::Text { .. } => ElementKind::Text,
        }
    }

    /// Stored corners for line, rectangle and ellipse; `None` otherwise.
    #[must_use]
    pub fn corners(&self) -> Option<Corners> {
        match self.shape {
            Shape::Line(c) | Shape::Rectangle(c) | Shape::Ellipse(c) => Some(c),
            Shape::Freehand(_) | Shape::Text { .. } => None,
        }
    }

    /// Stroke samples for a freehand element; empty for every other kind.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match &self.shape {
            Shape::Freehand(points) => points,
            _ => &[],
        }
    }

    /// Text content for a text element.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The `(x1, y1)` point: first corner, text anchor, or first stroke sample.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        match &self.shape {
            Shape::Line(c) | Shape::Rectangle(c) | Shape::Ellipse(c) => Some(c.start()),
            Shape::Text { anchor, .. } => Some(*anchor),
            Shape::Freehand(points) => points.first().copied(),
        }
    }

    /// A copy with new corners. Kinds without corners are returned unchanged.
    #[must_use]
    pub fn with_corners(&self, corners: Corners) -> Self {
        let shape = match self.shape {
            Shape::Line(_) => Shape::Line(corners),
            Shape::Rectangle(_) => Shape::Rectangle(corners),
            Shape::Ellipse(_) => Shape::Ellipse(corners),
            Shape::Freehand(_) | Shape::Text { .. } => return self.clone(),
        };
        Self { id: self.id, shape }
    }

    /// A copy of a freehand stroke with `pt` appended. Other kinds are
    /// returned unchanged.
    #[must_use]
    pub fn with_point_appended(&self, pt: Point) -> Self {
        match &self.shape {
            Shape::Freehand(points) => {
                let mut points = points.clone();
                points.push(pt);
                Self { id: self.id, shape: Shape::Freehand(points) }
            }
            _ => self.clone(),
        }
    }

    /// A copy of a freehand stroke with all samples replaced.
    #[must_use]
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        match self.shape {
            Shape::Freehand(_) => Self { id: self.id, shape: Shape::Freehand(points) },
            _ => self.clone(),
        }
    }

    /// A copy of a text element with new content.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        match self.shape {
            Shape::Text { anchor, .. } => Self { id: self.id, shape: Shape::Text { anchor, text: text.into() } },
            _ => self.clone(),
        }
    }

    /// A copy of a text element moved to a new anchor.
    #[must_use]
    pub fn with_anchor(&self, anchor: Point) -> Self {
        match &self.shape {
            Shape::Text { text, .. } => Self { id: self.id, shape: Shape::Text { anchor, text: text.clone() } },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.kind().name())?;
        if let Some(c) = self.corners() {
            return write!(f, " ({}, {})-({}, {})", c.x1, c.y1, c.x2, c.y2);
        }
        match (self.text(), self.origin()) {
            (Some(text), Some(anchor)) => write!(f, " ({}, {}) {text:?}", anchor.x, anchor.y),
            _ => write!(f, " {} points", self.points().len()),
        }
    }
}

/// Build a new element for `tool`.
///
/// Corner-bearing kinds keep the four coordinates verbatim, in whatever order
/// they were given. A freehand stroke starts as a single sample at `(x1, y1)`
/// and ignores `x2`/`y2`. Text starts empty at `(x1, y1)`. The select tool
/// is not a shape and yields `None`; nothing should be added to the scene.
#[must_use]
pub fn construct(id: ElementId, x1: f64, y1: f64, x2: f64, y2: f64, tool: Tool) -> Option<Element> {
    let shape = match tool.kind()? {
        ElementKind::Line => Shape::Line(Corners::new(x1, y1, x2, y2)),
        ElementKind::Rectangle => Shape::Rectangle(Corners::new(x1, y1, x2, y2)),
        ElementKind::Ellipse => Shape::Ellipse(Corners::new(x1, y1, x2, y2)),
        ElementKind::Freehand => Shape::Freehand(vec![Point::new(x1, y1)]),
        ElementKind::Text => Shape::Text { anchor: Point::new(x1, y1), text: String::new() },
    };
    Some(Element::new(id, shape))
}
