//! PDF backend built on lopdf

mod canvas;
mod document;
mod fonts;

pub use canvas::PdfCanvas;
pub use fonts::{BASE_FONTS, FALLBACK_CHAR_WIDTH_RATIO, base_font, escape_pdf_text, text_width};
