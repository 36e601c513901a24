//! Text and JSON reports printed by the `profiles` and `templates` commands

use std::fmt;

use inkplan_layout::{
    DeviceProfile, device_keys, device_profile, evaluate_render_profile_fit, layout_keys,
    resolve_render_profile,
};
use inkplan_render::templates::TemplateSpec;
use serde::Serialize;

/// Fit of one planner layout on a device
#[derive(Debug, Serialize)]
pub struct LayoutFit {
    pub layout: &'static str,
    pub fits: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeviceReport {
    pub device: &'static str,
    pub profile: DeviceProfile,
    pub layouts: Vec<LayoutFit>,
}

/// Evaluate every planner layout on `device`, or on every device
pub fn profile_reports(device: Option<&str>) -> anyhow::Result<Vec<DeviceReport>> {
    let keys: Vec<&'static str> = match device {
        Some(key) => {
            device_profile(key)?;
            device_keys().filter(|k| *k == key).collect()
        }
        None => device_keys().collect(),
    };

    let mut reports = Vec::with_capacity(keys.len());
    for key in keys {
        let mut layouts = Vec::new();
        for layout in layout_keys() {
            let profile = resolve_render_profile(key, Some(layout))?;
            let issues = evaluate_render_profile_fit(&profile);
            layouts.push(LayoutFit {
                layout,
                fits: issues.is_empty(),
                issues,
            });
        }
        reports.push(DeviceReport {
            device: key,
            profile: *device_profile(key)?,
            layouts,
        });
    }
    Ok(reports)
}

impl fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.profile;
        writeln!(
            f,
            "{}: {} ({} x {} px, {} ppi)",
            self.device, p.name, p.page_width, p.page_height, p.pixels_per_inch
        )?;
        for fit in &self.layouts {
            if fit.fits {
                writeln!(f, "  {}: fits", fit.layout)?;
                continue;
            }
            writeln!(f, "  {}: {} issue(s)", fit.layout, fit.issues.len())?;
            for issue in &fit.issues {
                writeln!(f, "    - {issue}")?;
            }
        }
        Ok(())
    }
}

/// `templates show` output for one template
pub struct TemplateHelp<'a>(pub &'a TemplateSpec);

impl fmt::Display for TemplateHelp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        writeln!(f, "id: {}", spec.id)?;
        writeln!(f, "title: {}", spec.title)?;
        writeln!(f, "description: {}", spec.description)?;
        if !spec.aliases.is_empty() {
            writeln!(f, "aliases: {}", spec.aliases.join(", "))?;
        }
        writeln!(f, "params:")?;
        if spec.params.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for param in spec.params {
            let constraints = param.constraints();
            if constraints.is_empty() {
                writeln!(f, "  {}: {}", param.key, param.description)?;
            } else {
                writeln!(f, "  {}: {} ({constraints})", param.key, param.description)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkplan_render::template_spec;

    #[test]
    fn test_show_lists_aliases_and_constraints() {
        let text = TemplateHelp(template_spec("dag").unwrap()).to_string();
        assert!(text.starts_with("id: day-at-glance\ntitle: Day At A Glance\n"));
        assert!(text.contains("aliases: dag\n"));
        assert!(text.contains("  schedule_end_hour: Schedule end hour in 24h format. (min=1; max=24)\n"));
        assert!(text.contains(
            "  notes_fill: Notes fill type. (choices=lines,grid,dotted-grid,millimeter; default=lines)\n"
        ));
        assert!(text.contains("  margin_mm: Page margin in millimeters. (min=0.000001)\n"));
    }

    #[test]
    fn test_profile_reports_cover_every_layout() {
        let reports = profile_reports(Some("palma")).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].layouts.len(), 3);
        assert!(reports[0].layouts.iter().any(|fit| fit.layout == "compact" && fit.fits));
        assert!(!reports[0].layouts.iter().find(|f| f.layout == "full").unwrap().fits);

        let text = reports[0].to_string();
        assert!(text.starts_with("palma: BOOX Palma (824 x 1648 px, 300 ppi)\n"));
        assert!(text.contains("  compact: fits\n"));
        assert!(text.contains("  full: ") && text.contains("issue(s)\n    - "));
        assert!(profile_reports(Some("kindle")).is_err());
        assert_eq!(profile_reports(None).unwrap().len(), 3);
    }
}
