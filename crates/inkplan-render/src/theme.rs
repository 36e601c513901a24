//! Color and font theme
//!
//! A theme starts from a built-in profile and may be overridden key by key
//! from a JSON file. Every value is validated once, when the [`Theme`] is
//! built, so renderers never see an unparsed color.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::pdf::base_font;

// =============================================================================
// Color
// =============================================================================

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Names accepted in place of a hex value
const NAMED_COLORS: [(&str, u32); 11] = [
    ("black", 0x000000),
    ("blue", 0x0000FF),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("grey", 0x808080),
    ("navy", 0x000080),
    ("orange", 0xFFA500),
    ("red", 0xFF0000),
    ("silver", 0xC0C0C0),
    ("white", 0xFFFFFF),
    ("yellow", 0xFFFF00),
];

impl Color {
    pub const BLACK: Color = Color::from_rgb_u32(0x000000);
    pub const WHITE: Color = Color::from_rgb_u32(0xFFFFFF);

    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f64 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f64 / 255.0,
            b: (rgb & 0xFF) as f64 / 255.0,
        }
    }

    /// Parse `#RRGGBB`, `#RGB`, or a basic color name
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(hex) = raw.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(hex, 16).ok()?;
            return match hex.len() {
                6 => Some(Self::from_rgb_u32(value)),
                3 => {
                    let (r, g, b) = ((value >> 8) & 0xF, (value >> 4) & 0xF, value & 0xF);
                    Some(Self::from_rgb_u32(((r * 17) << 16) | ((g * 17) << 8) | (b * 17)))
                }
                _ => None,
            };
        }
        let lower = raw.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| Self::from_rgb_u32(*rgb))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Resolved theme used by every renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub sidebar_bg: Color,
    pub sidebar_text: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub grid_lines: Color,
    pub writing_lines: Color,
    pub link_badge_bg: Color,
    pub font_header: &'static str,
    pub font_regular: &'static str,
    pub font_bold: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb_u32(0xF9F9F9),
            sidebar_bg: Color::from_rgb_u32(0x2C3E50),
            sidebar_text: Color::WHITE,
            text_primary: Color::from_rgb_u32(0x2C3E50),
            text_secondary: Color::from_rgb_u32(0x7F8C8D),
            accent: Color::from_rgb_u32(0xE67E22),
            grid_lines: Color::from_rgb_u32(0xBDC3C7),
            writing_lines: Color::from_rgb_u32(0xEEEEEE),
            link_badge_bg: Color::from_rgb_u32(0xF2F2F2),
            font_header: "Helvetica-Bold",
            font_regular: "Helvetica",
            font_bold: "Helvetica-Bold",
        }
    }
}

/// Serializable theme values, as written in theme files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeProfile {
    pub background: String,
    pub sidebar_bg: String,
    pub sidebar_text: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
    pub grid_lines: String,
    pub writing_lines: String,
    pub link_badge_bg: String,
    pub font_header: String,
    pub font_regular: String,
    pub font_bold: String,
}

impl Default for ThemeProfile {
    fn default() -> Self {
        Self {
            background: "#F9F9F9".into(),
            sidebar_bg: "#2C3E50".into(),
            sidebar_text: "#FFFFFF".into(),
            text_primary: "#2C3E50".into(),
            text_secondary: "#7F8C8D".into(),
            accent: "#E67E22".into(),
            grid_lines: "#BDC3C7".into(),
            writing_lines: "#EEEEEE".into(),
            link_badge_bg: "#F2F2F2".into(),
            font_header: "Helvetica-Bold".into(),
            font_regular: "Helvetica".into(),
            font_bold: "Helvetica-Bold".into(),
        }
    }
}

/// Keys a theme file may set
pub const THEME_KEYS: [&str; 12] = [
    "background",
    "sidebar_bg",
    "sidebar_text",
    "text_primary",
    "text_secondary",
    "accent",
    "grid_lines",
    "writing_lines",
    "link_badge_bg",
    "font_header",
    "font_regular",
    "font_bold",
];

fn is_font_key(key: &str) -> bool {
    key.starts_with("font_")
}

fn parse_color(raw: &str, key: &str) -> Result<Color> {
    if raw.trim().is_empty() {
        return Err(RenderError::Theme(format!(
            "theme key '{key}' must be a non-empty color string."
        )));
    }
    Color::parse(raw).ok_or_else(|| {
        RenderError::Theme(format!("invalid color value '{raw}' for theme key '{key}'."))
    })
}

fn parse_font(raw: &str, key: &str) -> Result<&'static str> {
    if raw.trim().is_empty() {
        return Err(RenderError::Theme(format!(
            "theme key '{key}' must be a non-empty font name string."
        )));
    }
    base_font(raw.trim()).ok_or_else(|| {
        RenderError::Theme(format!(
            "unsupported font '{raw}' for theme key '{key}'. Use a standard PDF font name."
        ))
    })
}

impl ThemeProfile {
    /// Apply the overrides in a theme file's JSON text.
    ///
    /// `source` names the file in error messages.
    pub fn with_json_overrides(self, source: &Path, text: &str) -> Result<Self> {
        let payload: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            RenderError::Theme(format!(
                "theme file '{}' is not valid JSON: {e}.",
                source.display()
            ))
        })?;
        let serde_json::Value::Object(overrides) = payload else {
            return Err(RenderError::Theme(
                "theme file content must be a JSON object.".into(),
            ));
        };

        let mut unknown: Vec<&str> = overrides
            .keys()
            .map(String::as_str)
            .filter(|key| !THEME_KEYS.contains(key))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(RenderError::Theme(format!(
                "unknown theme key(s): {}.",
                unknown.join(", ")
            )));
        }

        for (key, value) in &overrides {
            let non_empty = value.as_str().is_some_and(|s| !s.trim().is_empty());
            if !non_empty {
                let kind = if is_font_key(key) { "font name" } else { "color" };
                return Err(RenderError::Theme(format!(
                    "theme key '{key}' must be a non-empty {kind} string."
                )));
            }
        }

        let mut merged = serde_json::to_value(&self)
            .map_err(|e| RenderError::Theme(format!("theme profile is not serializable: {e}.")))?;
        if let serde_json::Value::Object(base) = &mut merged {
            base.extend(overrides);
        }
        serde_json::from_value(merged)
            .map_err(|e| RenderError::Theme(format!("theme file '{}' is invalid: {e}.", source.display())))
    }

    /// Validate every value and build the runtime theme
    pub fn to_theme(&self) -> Result<Theme> {
        Ok(Theme {
            background: parse_color(&self.background, "background")?,
            sidebar_bg: parse_color(&self.sidebar_bg, "sidebar_bg")?,
            sidebar_text: parse_color(&self.sidebar_text, "sidebar_text")?,
            text_primary: parse_color(&self.text_primary, "text_primary")?,
            text_secondary: parse_color(&self.text_secondary, "text_secondary")?,
            accent: parse_color(&self.accent, "accent")?,
            grid_lines: parse_color(&self.grid_lines, "grid_lines")?,
            writing_lines: parse_color(&self.writing_lines, "writing_lines")?,
            link_badge_bg: parse_color(&self.link_badge_bg, "link_badge_bg")?,
            font_header: parse_font(&self.font_header, "font_header")?,
            font_regular: parse_font(&self.font_regular, "font_regular")?,
            font_bold: parse_font(&self.font_bold, "font_bold")?,
        })
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Built-in theme profile names, sorted
pub const THEME_PROFILE_NAMES: [&str; 1] = ["default"];

/// Look up a built-in theme profile
pub fn builtin_theme_profile(name: &str) -> Result<ThemeProfile> {
    match name {
        "default" => Ok(ThemeProfile::default()),
        _ => Err(RenderError::Theme(format!(
            "unknown theme profile '{name}'. Valid profiles: {}.",
            THEME_PROFILE_NAMES.join(", ")
        ))),
    }
}

/// Resolve a built-in profile plus optional theme file overrides.
///
/// # Arguments
/// * `profile` - Built-in profile name
/// * `theme_file` - Optional JSON file whose keys override the profile
pub async fn resolve_theme(profile: &str, theme_file: Option<&Path>) -> Result<Theme> {
    let mut resolved = builtin_theme_profile(profile)?;
    if let Some(path) = theme_file {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(RenderError::Theme(format!(
                "theme file '{}' does not exist.",
                path.display()
            )));
        }
        let text = tokio::fs::read_to_string(path).await?;
        resolved = resolved.with_json_overrides(path, &text)?;
        info!("Loaded theme overrides from {}", path.display());
    }
    debug!("Resolved theme profile '{profile}'");
    resolved.to_theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        let long = Color::parse("#E67E22").unwrap();
        assert!((long.r - 230.0 / 255.0).abs() < 1e-12);
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("White"), Some(Color::WHITE));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#GG0000"), None);
        assert_eq!(Color::parse("not-a-color"), None);
    }

    #[test]
    fn test_default_profile_matches_default_theme() {
        let theme = ThemeProfile::default().to_theme().unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_overrides_keep_other_keys() {
        let profile = ThemeProfile::default()
            .with_json_overrides(Path::new("t.json"), r##"{"accent": "#000000"}"##)
            .unwrap();
        assert_eq!(profile.accent, "#000000");
        assert_eq!(profile.background, "#F9F9F9");
    }
}
