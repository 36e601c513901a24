//! Content-stream recorder implementing [`DrawingPrimitives`]
//!
//! Each page is recorded as raw PDF operators plus its link rectangles.
//! Nothing touches lopdf until [`PdfCanvas::finish`].

use std::collections::HashMap;

use inkplan_layout::Rect;
use lopdf::Document;

use super::document::build_document;
use super::fonts::{base_font, escape_pdf_text, text_width};
use crate::drawing::{DrawingPrimitives, Paint};
use crate::error::Result;
use crate::theme::Color;

/// Bezier control point factor for a quarter circle (4/3 * (sqrt(2) - 1))
const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

const DEFAULT_FONT: &str = "Helvetica";
const DEFAULT_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Default)]
pub(crate) struct PageRecord {
    pub ops: String,
    pub links: Vec<LinkAnnotation>,
}

impl PageRecord {
    fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.links.is_empty()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LinkAnnotation {
    pub destination: String,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub(crate) struct OutlineEntry {
    pub title: String,
    pub key: String,
    pub level: usize,
}

/// Text state the canvas needs for measuring aligned strings
#[derive(Debug, Clone, Copy)]
struct TextState {
    font: &'static str,
    size: f64,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Format a coordinate for a content stream: three decimals, trailing zeros trimmed
fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn paint_operator(paint: Paint) -> &'static str {
    match (paint.fill, paint.stroke) {
        (true, true) => "B",
        (true, false) => "f",
        (false, true) => "S",
        (false, false) => "n",
    }
}

/// Multi-page PDF canvas with a fixed page size
#[derive(Debug)]
pub struct PdfCanvas {
    pub(crate) page_width: f64,
    pub(crate) page_height: f64,
    pub(crate) title: Option<String>,
    pub(crate) pages: Vec<PageRecord>,
    current: PageRecord,
    text: TextState,
    saved: Vec<TextState>,
    /// Fonts in first-use order; resource name is `F<index + 1>`
    pub(crate) fonts: Vec<&'static str>,
    /// Bookmark key to page index
    pub(crate) bookmarks: HashMap<String, usize>,
    pub(crate) outline: Vec<OutlineEntry>,
}

impl PdfCanvas {
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            title: None,
            pages: Vec::new(),
            current: PageRecord::default(),
            text: TextState::default(),
            saved: Vec::new(),
            fonts: Vec::new(),
            bookmarks: HashMap::new(),
            outline: Vec::new(),
        }
    }

    /// Pages completed with [`DrawingPrimitives::show_page`]
    pub fn finished_pages(&self) -> usize {
        self.pages.len()
    }

    /// Close any open page and assemble the PDF document.
    ///
    /// Fails when a link or outline entry names a bookmark that was never
    /// registered.
    pub fn finish(mut self) -> Result<Document> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.close_page();
        }
        build_document(self)
    }

    /// Finish the document and serialize it
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut doc = self.finish()?;
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }

    fn push(&mut self, op: &str) {
        self.current.ops.push_str(op);
    }

    fn font_index(&mut self, font: &'static str) -> usize {
        match self.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        }
    }

    fn text_at(&mut self, x: f64, y: f64, text: &str) {
        let TextState { font, size } = self.text;
        let index = self.font_index(font);
        let op = format!(
            "BT /F{} {} Tf {} {} Td ({}) Tj ET\n",
            index + 1,
            num(size),
            num(x),
            num(y),
            escape_pdf_text(text)
        );
        self.push(&op);
    }

    fn current_text_width(&self, text: &str) -> f64 {
        text_width(text, self.text.font, self.text.size)
    }

    fn close_page(&mut self) {
        // Content streams must balance q/Q
        for _ in self.saved.drain(..) {
            self.current.ops.push_str("Q\n");
        }
        self.pages.push(std::mem::take(&mut self.current));
        self.text = TextState::default();
    }
}

impl DrawingPrimitives for PdfCanvas {
    fn set_fill_color(&mut self, color: Color) {
        let op = format!("{} {} {} rg\n", num(color.r), num(color.g), num(color.b));
        self.push(&op);
    }

    fn set_stroke_color(&mut self, color: Color) {
        let op = format!("{} {} {} RG\n", num(color.r), num(color.g), num(color.b));
        self.push(&op);
    }

    fn set_line_width(&mut self, width: f64) {
        let op = format!("{} w\n", num(width));
        self.push(&op);
    }

    fn set_font(&mut self, font: &str, size: f64) {
        let resolved = base_font(font).unwrap_or_else(|| {
            log::warn!("Font '{font}' is not a standard PDF font, using {DEFAULT_FONT}");
            DEFAULT_FONT
        });
        self.text = TextState {
            font: resolved,
            size,
        };
    }

    fn draw_string(&mut self, x: f64, y: f64, text: &str) {
        self.text_at(x, y, text);
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.current_text_width(text);
        self.text_at(x - width / 2.0, y, text);
    }

    fn draw_right_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.current_text_width(text);
        self.text_at(x - width, y, text);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let op = format!("{} {} m {} {} l S\n", num(x1), num(y1), num(x2), num(y2));
        self.push(&op);
    }

    fn rect(&mut self, rect: Rect, paint: Paint) {
        let op = format!(
            "{} {} {} {} re {}\n",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            paint_operator(paint)
        );
        self.push(&op);
    }

    fn round_rect(&mut self, rect: Rect, radius: f64, paint: Paint) {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let k = r * BEZIER_CIRCLE_FACTOR;
        let (x, y, right, top) = (rect.x, rect.y, rect.right(), rect.top());

        let mut ops = String::new();
        ops.push_str(&format!("{} {} m\n", num(x + r), num(y)));
        ops.push_str(&format!("{} {} l\n", num(right - r), num(y)));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(right - r + k),
            num(y),
            num(right),
            num(y + r - k),
            num(right),
            num(y + r)
        ));
        ops.push_str(&format!("{} {} l\n", num(right), num(top - r)));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(right),
            num(top - r + k),
            num(right - r + k),
            num(top),
            num(right - r),
            num(top)
        ));
        ops.push_str(&format!("{} {} l\n", num(x + r), num(top)));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x + r - k),
            num(top),
            num(x),
            num(top - r + k),
            num(x),
            num(top - r)
        ));
        ops.push_str(&format!("{} {} l\n", num(x), num(y + r)));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x),
            num(y + r - k),
            num(x + r - k),
            num(y),
            num(x + r),
            num(y)
        ));
        ops.push_str(&format!("h {}\n", paint_operator(paint)));
        self.push(&ops);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint) {
        let r = radius;
        let k = r * BEZIER_CIRCLE_FACTOR;

        let mut ops = String::new();
        ops.push_str(&format!("{} {} m\n", num(x + r), num(y)));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x + r),
            num(y + k),
            num(x + k),
            num(y + r),
            num(x),
            num(y + r)
        ));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x - k),
            num(y + r),
            num(x - r),
            num(y + k),
            num(x - r),
            num(y)
        ));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x - r),
            num(y - k),
            num(x - k),
            num(y - r),
            num(x),
            num(y - r)
        ));
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x + k),
            num(y - r),
            num(x + r),
            num(y - k),
            num(x + r),
            num(y)
        ));
        ops.push_str(&format!("h {}\n", paint_operator(paint)));
        self.push(&ops);
    }

    fn link_rect(&mut self, destination: &str, rect: Rect) {
        self.current.links.push(LinkAnnotation {
            destination: destination.to_string(),
            rect,
        });
    }

    fn bookmark_page(&mut self, key: &str) {
        let page = self.pages.len();
        if let Some(previous) = self.bookmarks.insert(key.to_string(), page) {
            log::debug!("Bookmark '{key}' moved from page {previous} to {page}");
        }
    }

    fn add_outline_entry(&mut self, title: &str, key: &str, level: usize) {
        self.outline.push(OutlineEntry {
            title: title.to_string(),
            key: key.to_string(),
            level,
        });
    }

    fn save_state(&mut self) {
        self.saved.push(self.text);
        self.push("q\n");
    }

    fn restore_state(&mut self) {
        if let Some(text) = self.saved.pop() {
            self.text = text;
            self.push("Q\n");
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        let op = format!("1 0 0 1 {} {} cm\n", num(x), num(y));
        self.push(&op);
    }

    fn rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let op = format!(
            "{} {} {} {} 0 0 cm\n",
            num(cos),
            num(sin),
            num(-sin),
            num(cos)
        );
        self.push(&op);
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn show_page(&mut self) {
        self.close_page();
    }
}
