use crate::error::Result;
use crate::units::UnitScale;

/// Physical characteristics of a target e-ink device.
///
/// Sizes are in device pixels. The `min_*` and `safe_tap_min` fields are
/// the thresholds the fit evaluator checks layouts against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceProfile {
    /// Display name
    pub name: &'static str,
    pub page_width: f64,
    pub page_height: f64,
    pub pixels_per_inch: f64,
    /// Multiplier applied to template font sizes before unit conversion
    pub template_font_scale: f64,
    /// Use the stacked day-at-glance template body
    pub compact_day_at_glance: bool,
    pub margin: f64,
    pub sidebar_width: f64,
    pub header_height: f64,
    /// Smallest comfortable tap target
    pub safe_tap_min: f64,
    pub min_month_cell_width: f64,
    pub min_week_column_width: f64,
    pub min_daily_section_width: f64,
}

impl DeviceProfile {
    /// Profile with the shared defaults for a device of the given size
    pub const fn new(name: &'static str, page_width: f64, page_height: f64, ppi: f64) -> Self {
        Self {
            name,
            page_width,
            page_height,
            pixels_per_inch: ppi,
            template_font_scale: 1.0,
            compact_day_at_glance: false,
            margin: 50.0,
            sidebar_width: 140.0,
            header_height: 160.0,
            safe_tap_min: 24.0,
            min_month_cell_width: 100.0,
            min_week_column_width: 100.0,
            min_daily_section_width: 220.0,
        }
    }

    /// Unit converter for this device's density and font scale
    pub fn units(&self) -> Result<UnitScale> {
        UnitScale::new(self.pixels_per_inch, self.template_font_scale)
    }
}
