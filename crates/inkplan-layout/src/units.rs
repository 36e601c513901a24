//! Physical unit conversion into device canvas units
//!
//! Device canvases are addressed in pixels. Physical sizes come in
//! millimeters (layout spacing) or typographic points (text, strokes).

use crate::error::{LayoutError, Result};

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Typographic points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Points per millimeter (≈ 2.83465)
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / MM_PER_INCH;

/// Convert millimeters to points at the fixed 72 pt/inch scale
#[inline]
pub fn mm_to_points(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

fn check_density(pixels_per_inch: f64) -> Result<()> {
    if pixels_per_inch <= 0.0 {
        return Err(LayoutError::validation(
            "device pixels_per_inch must be positive.",
        ));
    }
    Ok(())
}

/// Convert millimeters into device units
pub fn mm_to_units(mm: f64, pixels_per_inch: f64) -> Result<f64> {
    check_density(pixels_per_inch)?;
    Ok(mm / MM_PER_INCH * pixels_per_inch)
}

/// Convert device units back into millimeters
pub fn units_to_mm(units: f64, pixels_per_inch: f64) -> Result<f64> {
    check_density(pixels_per_inch)?;
    Ok(units / pixels_per_inch * MM_PER_INCH)
}

/// Convert points into device units
pub fn pt_to_units(pt: f64, pixels_per_inch: f64) -> Result<f64> {
    check_density(pixels_per_inch)?;
    Ok(pt * (pixels_per_inch / POINTS_PER_INCH))
}

/// Convert a font size in points into device units.
///
/// The device font scale is applied to the point size before conversion.
pub fn font_pt_to_units(pt: f64, pixels_per_inch: f64, font_scale: f64) -> Result<f64> {
    pt_to_units(pt * font_scale, pixels_per_inch)
}

/// Unit converter bound to one device density.
///
/// Construction validates the density once, so the conversion methods
/// themselves cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pixels_per_inch: f64,
    font_scale: f64,
}

impl UnitScale {
    pub fn new(pixels_per_inch: f64, font_scale: f64) -> Result<Self> {
        check_density(pixels_per_inch)?;
        Ok(Self {
            pixels_per_inch,
            font_scale,
        })
    }

    pub fn pixels_per_inch(&self) -> f64 {
        self.pixels_per_inch
    }

    pub fn font_scale(&self) -> f64 {
        self.font_scale
    }

    /// Millimeters to device units
    pub fn mm(&self, mm: f64) -> f64 {
        mm / MM_PER_INCH * self.pixels_per_inch
    }

    /// Points to device units
    pub fn pt(&self, pt: f64) -> f64 {
        pt * (self.pixels_per_inch / POINTS_PER_INCH)
    }

    /// Font points to device units, with the device font scale applied
    pub fn font(&self, pt: f64) -> f64 {
        self.pt(pt * self.font_scale)
    }
}
