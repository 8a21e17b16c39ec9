//! Hit-testing: which element, and which handle or region of it, lies under a point.
//!
//! Each shape kind has its own test, and the tests deliberately differ in how
//! they rank handles against the body:
//!
//! | Kind | Precedence |
//! |------|------------|
//! | Rectangle | topLeft, inside, topRight, bottomLeft, bottomRight |
//! | Ellipse | inside, topLeft, topRight, bottomLeft, bottomRight |
//! | Line | start, end, inside |
//! | Freehand | inside |
//! | Text | inside |
//!
//! So a point that is both inside a rectangle and near its top-right corner
//! reports `Inside`, while the same point near the top-left corner reports
//! `TopLeft`.
//!
//! [`element_at`] scans in creation order and returns the first hit. An older
//! element therefore wins over a newer one drawn on top of it.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_TOLERANCE, LINE_HIT_DISTANCE, STROKE_HIT_RADIUS};
use crate::element::{Element, Shape};
use crate::geom::{Corners, Point};
use crate::scene::Scene;
use crate::text::TextMeasure;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First endpoint of a line.
    Start,
    /// Second endpoint of a line.
    End,
    /// The `(x1, y1)` corner.
    TopLeft,
    /// The `(x2, y1)` corner.
    TopRight,
    /// The `(x1, y2)` corner.
    BottomLeft,
    /// The `(x2, y2)` corner.
    BottomRight,
    /// The element body.
    Inside,
}

impl Position {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
            Self::Inside => "inside",
        }
    }

    /// Whether this is a resize handle rather than the body.
    #[must_use]
    pub fn is_handle(self) -> bool {
        self != Self::Inside
    }
}

/// Result of a scene hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub element: &'a Element,
    pub position: Position,
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    /// Diagonal resize along the NE–SW axis.
    NeswResize,
    /// Diagonal resize along the NW–SE axis.
    NwseResize,
    Crosshair,
}

impl CursorStyle {
    /// CSS `cursor` keyword.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::NeswResize => "nesw-resize",
            Self::NwseResize => "nwse-resize",
            Self::Crosshair => "crosshair",
        }
    }
}

/// Square-tolerance handle test: both axis distances strictly below
/// [`HANDLE_TOLERANCE`].
#[must_use]
pub fn near_point(pt: Point, handle: Point) -> bool {
    (pt.x - handle.x).abs() < HANDLE_TOLERANCE && (pt.y - handle.y).abs() < HANDLE_TOLERANCE
}

/// Perpendicular distance from `pt` to the infinite line through `a` and `b`.
///
/// Falls back to the distance to `a` when the endpoints coincide.
#[must_use]
pub fn distance_to_line(pt: Point, a: Point, b: Point) -> f64 {
    let len = a.distance(b);
    if len == 0.0 {
        return pt.distance(a);
    }
    ((b.y - a.y) * pt.x - (b.x - a.x) * pt.y + b.x * a.y - b.y * a.x).abs() / len
}

/// Whether the perpendicular foot of `pt` lands on the segment `a`–`b`.
#[must_use]
pub fn projects_onto_segment(pt: Point, a: Point, b: Point) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return pt == a;
    }
    let t = ((pt.x - a.x) * dx + (pt.y - a.y) * dy) / len_sq;
    (0.0..=1.0).contains(&t)
}

/// Whether `pt` lies inside or on the ellipse inscribed in `corners`.
///
/// An ellipse with a zero-length axis contains nothing.
#[must_use]
pub fn ellipse_contains(corners: &Corners, pt: Point) -> bool {
    let a = corners.width().abs() / 2.0;
    let b = corners.height().abs() / 2.0;
    if a == 0.0 || b == 0.0 {
        return false;
    }
    let cx = (corners.x1 + corners.x2) / 2.0;
    let cy = (corners.y1 + corners.y2) / 2.0;
    let nx = (pt.x - cx) / a;
    let ny = (pt.y - cy) / b;
    nx * nx + ny * ny <= 1.0
}

/// The four corner handles of a box, in test order.
fn corner_handles(c: &Corners) -> [(Position, Point); 4] {
    [
        (Position::TopLeft, Point::new(c.x1, c.y1)),
        (Position::TopRight, Point::new(c.x2, c.y1)),
        (Position::BottomLeft, Point::new(c.x1, c.y2)),
        (Position::BottomRight, Point::new(c.x2, c.y2)),
    ]
}

fn first_corner(pt: Point, c: &Corners) -> Option<Position> {
    corner_handles(c)
        .into_iter()
        .find(|(_, handle)| near_point(pt, *handle))
        .map(|(pos, _)| pos)
}

fn rectangle_position(pt: Point, c: &Corners) -> Option<Position> {
    if near_point(pt, Point::new(c.x1, c.y1)) {
        return Some(Position::TopLeft);
    }
    if c.contains(pt) {
        return Some(Position::Inside);
    }
    first_corner(pt, c)
}

fn ellipse_position(pt: Point, c: &Corners) -> Option<Position> {
    if ellipse_contains(c, pt) {
        return Some(Position::Inside);
    }
    first_corner(pt, c)
}

fn line_position(pt: Point, c: &Corners) -> Option<Position> {
    let (a, b) = (c.start(), c.end());
    if near_point(pt, a) {
        return Some(Position::Start);
    }
    if near_point(pt, b) {
        return Some(Position::End);
    }
    if distance_to_line(pt, a, b) <= LINE_HIT_DISTANCE && projects_onto_segment(pt, a, b) {
        return Some(Position::Inside);
    }
    None
}

fn stroke_position(pt: Point, points: &[Point]) -> Option<Position> {
    points
        .iter()
        .any(|sample| sample.distance(pt) <= STROKE_HIT_RADIUS)
        .then_some(Position::Inside)
}

fn text_position(pt: Point, anchor: Point, text: &str, metrics: &dyn TextMeasure) -> Option<Position> {
    let (width, height) = metrics.measure(text);
    let inside = anchor.x <= pt.x && pt.x <= anchor.x + width && anchor.y <= pt.y && pt.y <= anchor.y + height;
    inside.then_some(Position::Inside)
}

/// Which part of `element`, if any, lies under `pt`.
#[must_use]
pub fn position_within(pt: Point, element: &Element, metrics: &dyn TextMeasure) -> Option<Position> {
    match &element.shape {
        Shape::Rectangle(c) => rectangle_position(pt, c),
        Shape::Ellipse(c) => ellipse_position(pt, c),
        Shape::Line(c) => line_position(pt, c),
        Shape::Freehand(points) => stroke_position(pt, points),
        Shape::Text { anchor, text } => text_position(pt, *anchor, text, metrics),
    }
}

/// The first element in creation order with any part under `pt`.
#[must_use]
pub fn element_at<'a>(pt: Point, scene: &'a Scene, metrics: &dyn TextMeasure) -> Option<Hit<'a>> {
    scene
        .iter()
        .find_map(|element| position_within(pt, element, metrics).map(|position| Hit { element, position }))
}

/// Cursor to show while hovering `position`.
#[must_use]
pub fn cursor_for(position: Option<Position>) -> CursorStyle {
    match position {
        Some(Position::Inside) => CursorStyle::Move,
        Some(Position::Start | Position::End | Position::TopRight | Position::BottomLeft) => CursorStyle::NeswResize,
        Some(Position::TopLeft | Position::BottomRight) => CursorStyle::NwseResize,
        None => CursorStyle::Default,
    }
}
