//! Device and layout name resolution with density fallback

use log::{debug, info, warn};

use super::{
    DEFAULT_DEVICE, LAYOUT_DENSITY_ORDER, ProfileResolution, RenderProfile,
    default_layout_for_device, device_profile, evaluate_render_profile_fit, layout_profile,
};
use crate::error::{LayoutError, Result};

/// Resolve device and layout names into a render profile.
///
/// When `layout` is `None` the device's default layout is used.
pub fn resolve_render_profile(device: &str, layout: Option<&str>) -> Result<RenderProfile> {
    let device_profile = device_profile(device)?;
    let layout_name = requested_layout(device, layout);
    let layout_profile = layout_profile(layout_name)?;
    Ok(RenderProfile::new(*device_profile, *layout_profile))
}

/// Resolve using the default device
pub fn resolve_default_render_profile() -> Result<RenderProfile> {
    resolve_render_profile(DEFAULT_DEVICE, None)
}

fn requested_layout<'a>(device: &str, layout: Option<&'a str>) -> &'a str {
    layout
        .or_else(|| default_layout_for_device(device))
        .unwrap_or(LAYOUT_DENSITY_ORDER[0])
}

/// Layouts to try in order.
///
/// Strict mode, or a layout outside the density order, tries only the
/// requested layout; otherwise the search continues towards denser layouts.
fn layout_candidates(layout: &str, strict: bool) -> Vec<&str> {
    if strict {
        return vec![layout];
    }
    match LAYOUT_DENSITY_ORDER.iter().position(|name| *name == layout) {
        Some(start) => LAYOUT_DENSITY_ORDER[start..].to_vec(),
        None => vec![layout],
    }
}

/// Resolve a profile that fits the device, falling back to denser layouts.
///
/// # Arguments
/// * `device` - Device key
/// * `layout` - Requested layout, or `None` for the device default
/// * `strict` - Fail instead of falling back when the requested layout does not fit
pub fn resolve_fitted_render_profile(
    device: &str,
    layout: Option<&str>,
    strict: bool,
) -> Result<ProfileResolution> {
    device_profile(device)?;
    let requested = requested_layout(device, layout);
    layout_profile(requested)?;

    let candidates = layout_candidates(requested, strict);
    let mut requested_issues: Vec<String> = Vec::new();

    for &candidate in &candidates {
        let profile = resolve_render_profile(device, Some(candidate))?;
        let issues = evaluate_render_profile_fit(&profile);
        if issues.is_empty() {
            let fallback_applied = candidate != requested;
            if fallback_applied {
                warn!(
                    "layout '{requested}' does not fit device '{device}', using '{candidate}'"
                );
            } else {
                info!("resolved layout '{candidate}' for device '{device}'");
            }
            return Ok(ProfileResolution {
                profile,
                requested_layout: requested.to_string(),
                selected_layout: candidate.to_string(),
                fallback_applied,
                requested_issues,
            });
        }
        debug!("layout '{candidate}' rejected for '{device}': {}", issues.join("; "));
        if candidate == requested {
            requested_issues = issues;
        }
    }

    let issue_text = if requested_issues.is_empty() {
        "no detailed issues".to_string()
    } else {
        requested_issues.join("; ")
    };
    let msg = if strict {
        format!("layout '{requested}' does not fit device '{device}': {issue_text}")
    } else {
        format!(
            "no fitting layout for device '{device}' (tried: {}). Issues: {issue_text}",
            candidates.join(", ")
        )
    };
    Err(LayoutError::NoFit(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        assert_eq!(layout_candidates("full", false), vec!["full", "balanced", "compact"]);
        assert_eq!(layout_candidates("balanced", false), vec!["balanced", "compact"]);
        assert_eq!(layout_candidates("full", true), vec!["full"]);
        assert_eq!(layout_candidates("custom", false), vec!["custom"]);
    }
}
