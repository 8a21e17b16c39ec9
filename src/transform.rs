//! Geometry transforms applied while and after an element is edited.
//!
//! Nothing here reads mutable state: every function maps an element (or its
//! corners) plus pointer input to new geometry. Corners may be inverted
//! (`x1 > x2`, `y1 > y2`) for the whole of a drag; [`canonicalize`] restores
//! the stored order once, when the gesture ends. Hit-testing copes with
//! inverted corners on its own through min/max bounds.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::element::{Element, ElementKind, Shape};
use crate::geom::{Corners, Point};
use crate::hit::Position;

/// Canonical corner order for `kind`.
///
/// Rectangles and ellipses get `(min x, min y, max x, max y)`. Lines keep
/// their endpoints but order them so `x1 < x2`, or `y1 < y2` when the x
/// coordinates tie. Other kinds have no corner order and pass through.
#[must_use]
pub fn canonical_corners(kind: ElementKind, c: Corners) -> Corners {
    match kind {
        ElementKind::Rectangle | ElementKind::Ellipse => Corners::new(c.min_x(), c.min_y(), c.max_x(), c.max_y()),
        ElementKind::Line => {
            if c.x1 < c.x2 || (c.x1 == c.x2 && c.y1 < c.y2) {
                c
            } else {
                Corners::new(c.x2, c.y2, c.x1, c.y1)
            }
        }
        ElementKind::Freehand | ElementKind::Text => c,
    }
}

/// `element` with its corners in canonical order. Freehand strokes and text
/// are returned unchanged.
#[must_use]
pub fn canonicalize(element: &Element) -> Element {
    match element.corners() {
        Some(c) => element.with_corners(canonical_corners(element.kind(), c)),
        None => element.clone(),
    }
}

/// New corners after dragging `handle` to `pointer`.
///
/// Each handle owns specific coordinates and leaves the rest fixed:
///
/// | handle | moves |
/// |--------|-------|
/// | `Start`, `TopLeft` | `x1`, `y1` |
/// | `End`, `BottomRight` | `x2`, `y2` |
/// | `TopRight` | `x2`, `y1` |
/// | `BottomLeft` | `x1`, `y2` |
///
/// `Inside` and `None` are not resize handles and return `original`.
#[must_use]
pub fn resize_from(pointer: Point, handle: Option<Position>, original: Corners) -> Corners {
    let Corners { x1, y1, x2, y2 } = original;
    let (px, py) = (pointer.x, pointer.y);
    match handle {
        Some(Position::Start | Position::TopLeft) => Corners::new(px, py, x2, y2),
        Some(Position::End | Position::BottomRight) => Corners::new(x1, y1, px, py),
        Some(Position::TopRight) => Corners::new(x1, py, px, y2),
        Some(Position::BottomLeft) => Corners::new(px, y1, x2, py),
        Some(Position::Inside) | None => original,
    }
}

/// Offsets captured when a move gesture starts, replayed on every pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOffsets {
    /// Pointer minus the element origin, for shapes that move rigidly.
    Rigid { dx: f64, dy: f64 },
    /// Pointer minus each freehand sample, one entry per sample.
    PerPoint(Vec<Point>),
}

/// Offsets that keep `element` fixed relative to a pointer at `pointer`.
#[must_use]
pub fn drag_offsets(element: &Element, pointer: Point) -> DragOffsets {
    match &element.shape {
        Shape::Freehand(points) => {
            DragOffsets::PerPoint(points.iter().map(|p| Point::new(pointer.x - p.x, pointer.y - p.y)).collect())
        }
        _ => {
            let origin = element.origin().unwrap_or_default();
            DragOffsets::Rigid { dx: pointer.x - origin.x, dy: pointer.y - origin.y }
        }
    }
}

/// `element` repositioned under a pointer now at `pointer`.
///
/// Corner-bearing shapes keep their signed width and height. An offsets
/// variant that does not fit the element kind leaves it unchanged.
#[must_use]
pub fn dragged(element: &Element, pointer: Point, offsets: &DragOffsets) -> Element {
    match (&element.shape, offsets) {
        (Shape::Freehand(points), DragOffsets::PerPoint(offs)) if offs.len() == points.len() => {
            element.with_points(offs.iter().map(|o| Point::new(pointer.x - o.x, pointer.y - o.y)).collect())
        }
        (Shape::Line(c) | Shape::Rectangle(c) | Shape::Ellipse(c), DragOffsets::Rigid { dx, dy }) => {
            let x1 = pointer.x - dx;
            let y1 = pointer.y - dy;
            element.with_corners(Corners::new(x1, y1, x1 + c.width(), y1 + c.height()))
        }
        (Shape::Text { .. }, DragOffsets::Rigid { dx, dy }) => {
            element.with_anchor(Point::new(pointer.x - dx, pointer.y - dy))
        }
        _ => element.clone(),
    }
}
