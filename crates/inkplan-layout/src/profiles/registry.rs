//! Built-in device and layout tables

use super::{
    DailyLayoutProfile, DeviceProfile, LayoutProfile, MonthLayoutProfile, WeekLayoutProfile,
};
use crate::error::{LayoutError, Result};

/// Device used when none is requested
pub const DEFAULT_DEVICE: &str = "remarkable";

/// Planner layouts from least to most dense; fallback walks this order
pub const LAYOUT_DENSITY_ORDER: [&str; 3] = ["full", "balanced", "compact"];

/// Device profiles keyed by CLI name, sorted by key
pub static DEVICE_PROFILES: [(&str, DeviceProfile); 3] = [
    (
        "palma",
        DeviceProfile {
            template_font_scale: 0.75,
            compact_day_at_glance: true,
            margin: 28.0,
            safe_tap_min: 28.0,
            ..DeviceProfile::new("BOOX Palma", 824.0, 1648.0, 300.0)
        },
    ),
    (
        "remarkable",
        DeviceProfile::new("reMarkable 2", 1404.0, 1872.0, 226.0),
    ),
    (
        "scribe",
        DeviceProfile::new("Kindle Scribe", 1860.0, 2480.0, 300.0),
    ),
];

/// Planner layouts keyed by name, sorted by key
pub static LAYOUT_PROFILES: [(&str, LayoutProfile); 3] = [
    (
        "balanced",
        LayoutProfile {
            name: "balanced",
            show_sidebar: true,
            month: MonthLayoutProfile {
                day_number_font_size: 20.0,
                weekday_label_font_size: 16.0,
                week_label_font_size: 12.0,
                ..MonthLayoutProfile::DEFAULT
            },
            week: WeekLayoutProfile::DEFAULT,
            daily: DailyLayoutProfile::DEFAULT,
        },
    ),
    (
        "compact",
        LayoutProfile {
            name: "compact",
            show_sidebar: false,
            month: MonthLayoutProfile {
                show_week_labels: false,
                day_number_font_size: 18.0,
                day_number_box_height: 30.0,
                day_number_box_max_width: 50.0,
                weekday_label_font_size: 14.0,
                draw_writing_line: false,
                ..MonthLayoutProfile::DEFAULT
            },
            week: WeekLayoutProfile {
                segments: &[&[0, 1, 2, 3], &[4, 5, 6]],
            },
            daily: DailyLayoutProfile {
                show_schedule: false,
                show_priorities: false,
                notes_grid_step_mm: 6.0,
            },
        },
    ),
    (
        "full",
        LayoutProfile {
            name: "full",
            show_sidebar: true,
            month: MonthLayoutProfile::DEFAULT,
            week: WeekLayoutProfile::DEFAULT,
            daily: DailyLayoutProfile::DEFAULT,
        },
    ),
];

/// Default planner layout for a device key
pub fn default_layout_for_device(device: &str) -> Option<&'static str> {
    match device {
        "remarkable" | "scribe" => Some("full"),
        "palma" => Some("compact"),
        _ => None,
    }
}

/// Sorted device keys
pub fn device_keys() -> impl Iterator<Item = &'static str> {
    DEVICE_PROFILES.iter().map(|(key, _)| *key)
}

/// Sorted planner layout keys
pub fn layout_keys() -> impl Iterator<Item = &'static str> {
    LAYOUT_PROFILES.iter().map(|(key, _)| *key)
}

/// Look up a device by key
pub fn device_profile(key: &str) -> Result<&'static DeviceProfile> {
    DEVICE_PROFILES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| profile)
        .ok_or_else(|| LayoutError::unknown("device", key, device_keys()))
}

/// Look up a planner layout by key
pub fn layout_profile(key: &str) -> Result<&'static LayoutProfile> {
    LAYOUT_PROFILES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| profile)
        .ok_or_else(|| LayoutError::unknown("layout", key, layout_keys()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        let devices: Vec<_> = device_keys().collect();
        let mut sorted = devices.clone();
        sorted.sort();
        assert_eq!(devices, sorted);

        let layouts: Vec<_> = layout_keys().collect();
        let mut sorted = layouts.clone();
        sorted.sort();
        assert_eq!(layouts, sorted);
    }

    #[test]
    fn test_every_device_has_a_known_default_layout() {
        for key in device_keys() {
            let layout = default_layout_for_device(key).unwrap();
            assert!(layout_profile(layout).is_ok());
        }
    }

    #[test]
    fn test_layout_names_match_keys() {
        for (key, layout) in LAYOUT_PROFILES.iter() {
            assert_eq!(*key, layout.name);
        }
    }
}
