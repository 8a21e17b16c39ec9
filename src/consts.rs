//! Shared numeric constants for the sketchpad crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-width of the square tolerance around a resize handle, in scene units.
///
/// The test is strict (`<`), so a point exactly this far away on either axis
/// does not match.
pub const HANDLE_TOLERANCE: f64 = 5.0;

/// Maximum perpendicular distance from a line's body that still counts as a hit.
pub const LINE_HIT_DISTANCE: f64 = 10.0;

/// Radius around each sampled freehand point that counts as a hit.
pub const STROKE_HIT_RADIUS: f64 = 10.0;

// ── Text metrics ────────────────────────────────────────────────

/// Font size of the text editing overlay, in scene units.
pub const DEFAULT_FONT_PX: f64 = 24.0;

/// Padding around text on every side, in scene units.
pub const DEFAULT_TEXT_PADDING: f64 = 4.0;

/// Average glyph advance as a fraction of the font size.
pub const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// Line height as a fraction of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;
