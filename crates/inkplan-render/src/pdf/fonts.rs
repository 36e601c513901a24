//! Standard Type1 fonts and text measurement
//!
//! Only the 14 standard PDF fonts are used, so no font files are embedded.
//! Helvetica metrics come from the Adobe AFM tables; other faces use an
//! approximation.

/// The 14 standard PDF font names
pub const BASE_FONTS: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-BoldOblique",
    "Courier-Oblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-BoldOblique",
    "Helvetica-Oblique",
    "Symbol",
    "Times-Bold",
    "Times-BoldItalic",
    "Times-Italic",
    "Times-Roman",
    "ZapfDingbats",
];

/// Average glyph width as a fraction of the font size, for faces without a table
pub const FALLBACK_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Courier is monospaced at 600/1000 em
const COURIER_CHAR_WIDTH: u16 = 600;

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Canonical standard font name for `name`, if it is one
pub fn base_font(name: &str) -> Option<&'static str> {
    BASE_FONTS.iter().copied().find(|font| *font == name)
}

fn glyph_width(table: &[u16; 95], c: char) -> f64 {
    let code = c as u32;
    match code {
        32..=126 => f64::from(table[(code - 32) as usize]),
        _ => FALLBACK_CHAR_WIDTH_RATIO * 1000.0,
    }
}

/// Width of `text` set in `font` at `size`, in the same units as `size`
pub fn text_width(text: &str, font: &str, size: f64) -> f64 {
    let em_units: f64 = match font {
        "Helvetica" | "Helvetica-Oblique" => {
            text.chars().map(|c| glyph_width(&HELVETICA_WIDTHS, c)).sum()
        }
        "Helvetica-Bold" | "Helvetica-BoldOblique" => {
            text.chars().map(|c| glyph_width(&HELVETICA_BOLD_WIDTHS, c)).sum()
        }
        f if f.starts_with("Courier") => {
            text.chars().count() as f64 * f64::from(COURIER_CHAR_WIDTH)
        }
        _ => text.chars().count() as f64 * FALLBACK_CHAR_WIDTH_RATIO * 1000.0,
    };
    em_units * size / 1000.0
}

/// Escape text for a PDF literal string.
///
/// Characters outside printable ASCII are replaced with `?` since the
/// standard fonts are set up with WinAnsi encoding.
pub fn escape_pdf_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}
