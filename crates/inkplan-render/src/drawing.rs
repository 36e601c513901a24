//! Drawing primitives consumed by the page renderers
//!
//! Renderers only ever talk to [`DrawingPrimitives`]; the PDF backend in
//! [`crate::pdf`] is one implementation, and tests plug in a recorder.
//! Coordinates are device units with a bottom-left origin.

use inkplan_layout::Rect;

use crate::pdf::text_width;
use crate::theme::Color;

/// How a closed shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fill: bool,
    pub stroke: bool,
}

impl Paint {
    pub const FILL: Paint = Paint {
        fill: true,
        stroke: false,
    };
    pub const STROKE: Paint = Paint {
        fill: false,
        stroke: true,
    };
    pub const FILL_STROKE: Paint = Paint {
        fill: true,
        stroke: true,
    };
}

/// Backend-agnostic drawing surface.
///
/// Text is painted with the fill color; lines and outlines with the stroke
/// color. Bookmarks and outline entries are resolved when the backend
/// finishes the document, so an outline entry may name a bookmark that is
/// registered on a later page.
pub trait DrawingPrimitives {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str, size: f64);

    /// Width of `text` in `font` at `size`
    fn string_width(&self, text: &str, font: &str, size: f64) -> f64 {
        text_width(text, font, size)
    }

    /// Draw text with its baseline starting at (`x`, `y`)
    fn draw_string(&mut self, x: f64, y: f64, text: &str);
    /// Draw text horizontally centered on `x`
    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str);
    /// Draw text ending at `x`
    fn draw_right_string(&mut self, x: f64, y: f64, text: &str);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn rect(&mut self, rect: Rect, paint: Paint);
    fn round_rect(&mut self, rect: Rect, radius: f64, paint: Paint);
    fn circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint);

    /// Make `rect` (page coordinates) a link to the named destination
    fn link_rect(&mut self, destination: &str, rect: Rect);
    /// Register the current page under `key`
    fn bookmark_page(&mut self, key: &str);
    /// Add a document outline entry pointing at bookmark `key`
    fn add_outline_entry(&mut self, title: &str, key: &str, level: usize);

    fn save_state(&mut self);
    fn restore_state(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate counter-clockwise by `degrees`
    fn rotate(&mut self, degrees: f64);

    fn set_title(&mut self, title: &str);
    /// Finish the current page and start a new one
    fn show_page(&mut self);
}
