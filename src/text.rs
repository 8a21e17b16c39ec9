//! Text extent measurement.
//!
//! The engine never lays out text itself. Hit-testing a text element asks a
//! [`TextMeasure`] for the rendered size of its content and tests the box
//! anchored at the element's top-left corner.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use crate::consts::{DEFAULT_FONT_PX, DEFAULT_TEXT_PADDING, GLYPH_ADVANCE_RATIO, LINE_HEIGHT_RATIO};

/// Reports the rendered size of a text string, in scene units.
pub trait TextMeasure {
    /// Returns `(width, height)` of `text` as drawn, padding included.
    fn measure(&self, text: &str) -> (f64, f64);
}

/// Fixed-advance approximation of the editing overlay's font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub font_px: f64,
    pub padding: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self { font_px: DEFAULT_FONT_PX, padding: DEFAULT_TEXT_PADDING }
    }
}

impl TextMeasure for FixedMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str) -> (f64, f64) {
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        let width = longest as f64 * GLYPH_ADVANCE_RATIO * self.font_px + 2.0 * self.padding;
        let height = lines as f64 * LINE_HEIGHT_RATIO * self.font_px + 2.0 * self.padding;
        (width, height)
    }
}
