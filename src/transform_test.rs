#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Corners;

fn c(x1: f64, y1: f64, x2: f64, y2: f64) -> Corners {
    Corners::new(x1, y1, x2, y2)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

const ALL_HANDLES: [Option<Position>; 8] = [
    Some(Position::Start),
    Some(Position::End),
    Some(Position::TopLeft),
    Some(Position::TopRight),
    Some(Position::BottomLeft),
    Some(Position::BottomRight),
    Some(Position::Inside),
    None,
];

// =============================================================
// canonicalize
// =============================================================

#[test]
fn rectangle_canonical_is_min_max() {
    assert_eq!(canonical_corners(ElementKind::Rectangle, c(50.0, 10.0, 10.0, 40.0)), c(10.0, 10.0, 50.0, 40.0));
}

#[test]
fn ellipse_canonical_is_min_max() {
    assert_eq!(canonical_corners(ElementKind::Ellipse, c(5.0, 9.0, 1.0, 2.0)), c(1.0, 2.0, 5.0, 9.0));
}

#[test]
fn rectangle_canonicalize_is_idempotent() {
    let samples = [c(50.0, 10.0, 10.0, 40.0), c(0.0, 0.0, 0.0, 0.0), c(-3.0, 7.0, 3.0, -7.0), c(1.0, 2.0, 3.0, 4.0)];
    for corners in samples {
        let el = Element::new(0, Shape::Rectangle(corners));
        let once = canonicalize(&el);
        assert_eq!(canonicalize(&once), once);
    }
}

#[test]
fn line_canonical_orders_by_x_then_y() {
    assert_eq!(canonical_corners(ElementKind::Line, c(10.0, 0.0, 0.0, 5.0)), c(0.0, 5.0, 10.0, 0.0));
    assert_eq!(canonical_corners(ElementKind::Line, c(0.0, 5.0, 10.0, 0.0)), c(0.0, 5.0, 10.0, 0.0));
    assert_eq!(canonical_corners(ElementKind::Line, c(3.0, 9.0, 3.0, 1.0)), c(3.0, 1.0, 3.0, 9.0));
    assert_eq!(canonical_corners(ElementKind::Line, c(3.0, 1.0, 3.0, 9.0)), c(3.0, 1.0, 3.0, 9.0));
}

#[test]
fn canonical_lines_satisfy_total_order() {
    let samples = [c(10.0, 0.0, 0.0, 5.0), c(3.0, 9.0, 3.0, 1.0), c(-1.0, -1.0, -2.0, 4.0), c(7.0, 7.0, 7.0, 7.0)];
    for corners in samples {
        let k = canonical_corners(ElementKind::Line, corners);
        assert!(k.x1 < k.x2 || (k.x1 == k.x2 && k.y1 <= k.y2), "{k:?}");
    }
}

#[test]
fn line_canonicalize_keeps_the_same_segment() {
    let el = Element::new(2, Shape::Line(c(10.0, 0.0, 0.0, 5.0)));
    let canon = canonicalize(&el);
    assert_eq!(canon.id, 2);
    assert_eq!(canon.corners(), Some(c(0.0, 5.0, 10.0, 0.0)));
}

#[test]
fn freehand_and_text_pass_through() {
    let stroke = Element::new(0, Shape::Freehand(vec![pt(9.0, 9.0), pt(1.0, 1.0)]));
    assert_eq!(canonicalize(&stroke), stroke);
    let text = Element::new(1, Shape::Text { anchor: pt(4.0, 4.0), text: "t".into() });
    assert_eq!(canonicalize(&text), text);
}

// =============================================================
// resize_from
// =============================================================

#[test]
fn resize_table() {
    let orig = c(10.0, 20.0, 30.0, 40.0);
    let p = pt(1.0, 2.0);
    assert_eq!(resize_from(p, Some(Position::Start), orig), c(1.0, 2.0, 30.0, 40.0));
    assert_eq!(resize_from(p, Some(Position::End), orig), c(10.0, 20.0, 1.0, 2.0));
    assert_eq!(resize_from(p, Some(Position::TopLeft), orig), c(1.0, 2.0, 30.0, 40.0));
    assert_eq!(resize_from(p, Some(Position::TopRight), orig), c(10.0, 2.0, 1.0, 40.0));
    assert_eq!(resize_from(p, Some(Position::BottomLeft), orig), c(1.0, 20.0, 30.0, 2.0));
    assert_eq!(resize_from(p, Some(Position::BottomRight), orig), c(10.0, 20.0, 1.0, 2.0));
}

#[test]
fn resize_non_handles_are_identity() {
    let orig = c(10.0, 20.0, 30.0, 40.0);
    assert_eq!(resize_from(pt(99.0, 99.0), Some(Position::Inside), orig), orig);
    assert_eq!(resize_from(pt(99.0, 99.0), None, orig), orig);
}

#[test]
fn resize_end_never_moves_start_and_vice_versa() {
    let orig = c(10.0, 20.0, 30.0, 40.0);
    for p in [pt(-50.0, 3.0), pt(0.0, 0.0), pt(1e6, -1e6)] {
        let end = resize_from(p, Some(Position::End), orig);
        assert_eq!((end.x1, end.y1), (orig.x1, orig.y1));
        let start = resize_from(p, Some(Position::Start), orig);
        assert_eq!((start.x2, start.y2), (orig.x2, orig.y2));
    }
}

#[test]
fn resize_may_invert_until_canonicalized() {
    let inverted = resize_from(pt(0.0, 0.0), Some(Position::BottomRight), c(10.0, 10.0, 50.0, 50.0));
    assert_eq!(inverted, c(10.0, 10.0, 0.0, 0.0));
    assert_eq!(canonical_corners(ElementKind::Rectangle, inverted), c(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn resize_is_pure() {
    let orig = c(10.0, 20.0, 30.0, 40.0);
    for handle in ALL_HANDLES {
        assert_eq!(resize_from(pt(5.0, 5.0), handle, orig), resize_from(pt(5.0, 5.0), handle, orig));
    }
}

// =============================================================
// drag
// =============================================================

#[test]
fn rigid_drag_keeps_size() {
    let el = Element::new(0, Shape::Rectangle(c(10.0, 10.0, 50.0, 30.0)));
    let offsets = drag_offsets(&el, pt(20.0, 15.0));
    assert_eq!(offsets, DragOffsets::Rigid { dx: 10.0, dy: 5.0 });
    let moved = dragged(&el, pt(120.0, 215.0), &offsets);
    assert_eq!(moved.corners(), Some(c(110.0, 210.0, 150.0, 230.0)));
}

#[test]
fn rigid_drag_keeps_inverted_line_direction() {
    let el = Element::new(0, Shape::Line(c(50.0, 50.0, 10.0, 10.0)));
    let offsets = drag_offsets(&el, pt(30.0, 30.0));
    let moved = dragged(&el, pt(40.0, 30.0), &offsets);
    assert_eq!(moved.corners(), Some(c(60.0, 50.0, 20.0, 10.0)));
}

#[test]
fn freehand_drag_uses_per_point_offsets() {
    let el = Element::new(3, Shape::Freehand(vec![pt(0.0, 0.0), pt(10.0, 5.0)]));
    let offsets = drag_offsets(&el, pt(5.0, 5.0));
    assert_eq!(offsets, DragOffsets::PerPoint(vec![pt(5.0, 5.0), pt(-5.0, 0.0)]));
    let moved = dragged(&el, pt(105.0, 5.0), &offsets);
    assert_eq!(moved.points(), &[pt(100.0, 0.0), pt(110.0, 5.0)]);
    assert_eq!(moved.id, 3);
}

#[test]
fn text_drag_moves_anchor() {
    let el = Element::new(0, Shape::Text { anchor: pt(10.0, 10.0), text: "hey".into() });
    let offsets = drag_offsets(&el, pt(12.0, 14.0));
    let moved = dragged(&el, pt(22.0, 24.0), &offsets);
    assert_eq!(moved.origin(), Some(pt(20.0, 20.0)));
    assert_eq!(moved.text(), Some("hey"));
}

#[test]
fn mismatched_offsets_leave_element_alone() {
    let el = Element::new(0, Shape::Freehand(vec![pt(0.0, 0.0)]));
    let moved = dragged(&el, pt(50.0, 50.0), &DragOffsets::Rigid { dx: 0.0, dy: 0.0 });
    assert_eq!(moved, el);
    let short = dragged(&el, pt(50.0, 50.0), &DragOffsets::PerPoint(Vec::new()));
    assert_eq!(short, el);
}
