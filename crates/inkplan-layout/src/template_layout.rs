//! Template layout profiles
//!
//! Templates are sized in physical millimeters so that a ruled page has
//! the same line pitch on every device.

use crate::error::{LayoutError, Result};
use crate::geometry::ContentBounds;
use crate::profiles::{DeviceProfile, device_profile};

/// Physical layout parameters shared by every template type
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemplateLayoutProfile {
    pub name: &'static str,
    pub margin_mm: f64,
    pub header_height_mm: f64,
    pub line_spacing_mm: f64,
    pub grid_spacing_mm: f64,
    pub dot_spacing_mm: f64,
    pub dot_radius_mm: f64,
    pub checklist_rows: usize,
    pub priorities_rows: usize,
    pub schedule_start_hour: u32,
    pub schedule_end_hour: u32,
}

impl TemplateLayoutProfile {
    pub const DEFAULT: Self = Self {
        name: "balanced",
        margin_mm: 10.0,
        header_height_mm: 10.0,
        line_spacing_mm: 7.0,
        grid_spacing_mm: 5.0,
        dot_spacing_mm: 5.0,
        dot_radius_mm: 0.35,
        checklist_rows: 18,
        priorities_rows: 6,
        schedule_start_hour: 6,
        schedule_end_hour: 22,
    };

    /// Millimeter fields with the names used in messages
    fn millimeter_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("margin", self.margin_mm),
            ("header height", self.header_height_mm),
            ("line spacing", self.line_spacing_mm),
            ("grid spacing", self.grid_spacing_mm),
            ("dot spacing", self.dot_spacing_mm),
            ("dot radius", self.dot_radius_mm),
        ]
    }

    /// Check every field is within its usable range
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(LayoutError::validation(msg));
        for (label, value) in self.millimeter_fields() {
            if !value.is_finite() {
                return Err(LayoutError::validation(format!(
                    "template {label} must be a finite number."
                )));
            }
        }
        if self.margin_mm <= 0.0 {
            return fail("template margin must be positive.");
        }
        if self.header_height_mm < 0.0 {
            return fail("template header height must be >= 0.");
        }
        if self.line_spacing_mm <= 0.0 {
            return fail("template line spacing must be positive.");
        }
        if self.grid_spacing_mm <= 0.0 {
            return fail("template grid spacing must be positive.");
        }
        if self.dot_spacing_mm <= 0.0 {
            return fail("template dot spacing must be positive.");
        }
        if self.dot_radius_mm <= 0.0 {
            return fail("template dot radius must be positive.");
        }
        if self.checklist_rows < 1 {
            return fail("template checklist rows must be >= 1.");
        }
        if self.priorities_rows < 1 {
            return fail("template priorities rows must be >= 1.");
        }
        if self.schedule_start_hour > 23 {
            return fail("template schedule start hour must be between 0 and 23.");
        }
        if !(1..=24).contains(&self.schedule_end_hour) {
            return fail("template schedule end hour must be between 1 and 24.");
        }
        if self.schedule_end_hour <= self.schedule_start_hour {
            return fail("template schedule end hour must be greater than start hour.");
        }
        Ok(())
    }

    /// [`validate`](Self::validate), then check every millimeter size is
    /// still finite once converted to `device` units
    pub fn validate_for(&self, device: &DeviceProfile) -> Result<()> {
        self.validate()?;
        let units = device.units()?;
        for (label, value) in self.millimeter_fields() {
            if !units.mm(value).is_finite() {
                return Err(LayoutError::validation(format!(
                    "template {label} is too large for device '{}'.",
                    device.name
                )));
            }
        }
        Ok(())
    }

    /// Apply any set fields of `overrides`
    pub fn with_overrides(mut self, overrides: &TemplateLayoutOverrides) -> Self {
        macro_rules! apply {
            ($($field:ident),*) => {
                $(if let Some(value) = overrides.$field {
                    self.$field = value;
                })*
            };
        }
        apply!(
            margin_mm,
            header_height_mm,
            line_spacing_mm,
            grid_spacing_mm,
            dot_spacing_mm,
            dot_radius_mm,
            checklist_rows,
            priorities_rows,
            schedule_start_hour,
            schedule_end_hour
        );
        self
    }
}

impl Default for TemplateLayoutProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-invocation overrides; `None` keeps the profile value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemplateLayoutOverrides {
    pub margin_mm: Option<f64>,
    pub header_height_mm: Option<f64>,
    pub line_spacing_mm: Option<f64>,
    pub grid_spacing_mm: Option<f64>,
    pub dot_spacing_mm: Option<f64>,
    pub dot_radius_mm: Option<f64>,
    pub checklist_rows: Option<usize>,
    pub priorities_rows: Option<usize>,
    pub schedule_start_hour: Option<u32>,
    pub schedule_end_hour: Option<u32>,
}

/// Template layouts keyed by name, sorted by key
pub static TEMPLATE_LAYOUT_PROFILES: [(&str, TemplateLayoutProfile); 3] = [
    ("balanced", TemplateLayoutProfile::DEFAULT),
    (
        "compact",
        TemplateLayoutProfile {
            name: "compact",
            margin_mm: 8.0,
            header_height_mm: 8.0,
            line_spacing_mm: 6.0,
            grid_spacing_mm: 4.5,
            dot_spacing_mm: 4.5,
            dot_radius_mm: 0.3,
            checklist_rows: 22,
            priorities_rows: 8,
            schedule_start_hour: 7,
            schedule_end_hour: 22,
        },
    ),
    (
        "full",
        TemplateLayoutProfile {
            name: "full",
            margin_mm: 12.0,
            header_height_mm: 12.0,
            line_spacing_mm: 8.0,
            grid_spacing_mm: 6.0,
            dot_spacing_mm: 6.0,
            dot_radius_mm: 0.38,
            checklist_rows: 16,
            priorities_rows: 5,
            schedule_start_hour: 6,
            schedule_end_hour: 22,
        },
    ),
];

/// Default template layout for a device key
pub fn default_template_layout_for_device(device: &str) -> Option<&'static str> {
    match device {
        "remarkable" => Some("balanced"),
        "scribe" => Some("full"),
        "palma" => Some("compact"),
        _ => None,
    }
}

/// Device-specific adjustments applied before explicit overrides
pub fn device_template_overrides(device: &str) -> TemplateLayoutOverrides {
    match device {
        "palma" => TemplateLayoutOverrides {
            margin_mm: Some(3.0),
            schedule_start_hour: Some(9),
            schedule_end_hour: Some(19),
            ..TemplateLayoutOverrides::default()
        },
        _ => TemplateLayoutOverrides::default(),
    }
}

/// Sorted template layout keys
pub fn template_layout_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATE_LAYOUT_PROFILES.iter().map(|(key, _)| *key)
}

/// Look up a template layout by key
pub fn template_layout_profile(key: &str) -> Result<&'static TemplateLayoutProfile> {
    TEMPLATE_LAYOUT_PROFILES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| profile)
        .ok_or_else(|| LayoutError::unknown("template layout", key, template_layout_keys()))
}

/// Resolve a template layout for a device.
///
/// The base profile (explicit or device default) gets the device
/// adjustments first, then the explicit overrides; the result is validated.
pub fn resolve_template_layout(
    device: &str,
    layout: Option<&str>,
    overrides: &TemplateLayoutOverrides,
) -> Result<TemplateLayoutProfile> {
    let target = device_profile(device)?;
    let name = layout
        .or_else(|| default_template_layout_for_device(device))
        .unwrap_or(TemplateLayoutProfile::DEFAULT.name);
    let selected = template_layout_profile(name)?
        .with_overrides(&device_template_overrides(device))
        .with_overrides(overrides);
    selected.validate_for(target)?;
    Ok(selected)
}

/// Drawable area of a template page after the layout margin
pub fn content_bounds(
    device: &DeviceProfile,
    layout: &TemplateLayoutProfile,
) -> Result<ContentBounds> {
    let margin = device.units()?.mm(layout.margin_mm);
    let bounds = ContentBounds {
        left: margin,
        bottom: margin,
        right: device.page_width - margin,
        top: device.page_height - margin,
    };
    if bounds.right <= bounds.left || bounds.top <= bounds.bottom {
        return Err(LayoutError::validation(
            "template margins leave no drawable area.",
        ));
    }
    Ok(bounds)
}

/// Header band bottom edge for a template page
pub fn header_bottom(
    device: &DeviceProfile,
    layout: &TemplateLayoutProfile,
    bounds: &ContentBounds,
) -> Result<f64> {
    Ok(bounds.top - device.units()?.mm(layout.header_height_mm))
}
