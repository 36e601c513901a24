//! Single-page note templates
//!
//! A template is looked up by id or alias, its `key=value` parameters are
//! coerced and range-checked, and the resulting layout is drawn on one page.

mod params;
mod renderers;

use std::path::PathBuf;

use inkplan_layout::{DEFAULT_DEVICE, DeviceProfile, TemplateLayoutProfile, device_profile, resolve_template_layout};
use log::{debug, info};

use crate::drawing::DrawingPrimitives;
use crate::error::{RenderError, Result};
use crate::pdf::PdfCanvas;
use crate::theme::Theme;

pub use params::{
    COMMON_PARAMS, ParamType, ParamValue, TemplateParamSpec, TemplateParams, parse_param_pairs,
    resolve_template_params,
};
pub use renderers::{NOTES_FILL_TYPES, NotesFill};
use renderers::TemplatePage;

const SCHEDULE_DEFAULT_START_HOUR: u32 = 6;
const SCHEDULE_DEFAULT_END_HOUR: u32 = 22;

/// Page body drawn by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Lines,
    Grid,
    DottedGrid,
    DayAtGlance,
    Schedule,
    TaskList,
    Notes,
    TodoList,
}

/// Registered template: identity, help text, and accepted parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: TemplateKind,
    pub aliases: &'static [&'static str],
    pub params: &'static [TemplateParamSpec],
}

impl TemplateSpec {
    const fn builtin(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        kind: TemplateKind,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            title,
            description,
            kind,
            aliases,
            params: &COMMON_PARAMS,
        }
    }
}

static TEMPLATE_SPECS: [TemplateSpec; 8] = [
    TemplateSpec::builtin("lines", "Lines", "Ruled writing lines.", TemplateKind::Lines, &[]),
    TemplateSpec::builtin("grid", "Grid", "Square graph grid.", TemplateKind::Grid, &[]),
    TemplateSpec::builtin(
        "dotted-grid",
        "Dotted Grid",
        "Dot-matrix writing grid.",
        TemplateKind::DottedGrid,
        &["dots"],
    ),
    TemplateSpec::builtin(
        "day-at-glance",
        "Day At A Glance",
        "Daily dashboard with schedule and priorities.",
        TemplateKind::DayAtGlance,
        &["dag"],
    ),
    TemplateSpec::builtin(
        "schedule",
        "Schedule",
        "Hour-by-hour schedule template.",
        TemplateKind::Schedule,
        &[],
    ),
    TemplateSpec::builtin(
        "task-list",
        "Task List",
        "Checklist-oriented task list.",
        TemplateKind::TaskList,
        &["tasks"],
    ),
    TemplateSpec::builtin(
        "notes",
        "Notes",
        "Flexible notes page with configurable fill.",
        TemplateKind::Notes,
        &[],
    ),
    TemplateSpec::builtin(
        "todo-list",
        "To Do List",
        "Checklist alias for compatibility.",
        TemplateKind::TodoList,
        &["todo"],
    ),
];

/// Every built-in template, in listing order
pub fn template_specs() -> &'static [TemplateSpec] {
    &TEMPLATE_SPECS
}

/// Look up a template by id or alias
pub fn template_spec(template: &str) -> Result<&'static TemplateSpec> {
    TEMPLATE_SPECS
        .iter()
        .find(|spec| spec.id == template || spec.aliases.contains(&template))
        .ok_or_else(|| {
            let mut ids: Vec<&str> = TEMPLATE_SPECS.iter().map(|spec| spec.id).collect();
            ids.sort_unstable();
            RenderError::Template(format!(
                "unknown template '{template}'. Valid templates: {}.",
                ids.join(", ")
            ))
        })
}

// =============================================================================
// Generation
// =============================================================================

/// Template generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateOptions {
    /// Template id or alias
    pub template: String,
    pub device: String,
    /// Template layout; `None` uses the device default
    pub layout: Option<String>,
    /// Raw `key=value` parameters, in order
    pub params: Vec<(String, String)>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            template: "lines".to_string(),
            device: DEFAULT_DEVICE.to_string(),
            layout: None,
            params: Vec::new(),
        }
    }
}

/// Everything needed to draw one template page
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub spec: &'static TemplateSpec,
    pub device: &'static DeviceProfile,
    pub layout: TemplateLayoutProfile,
    pub notes_fill: NotesFill,
}

impl TemplateOptions {
    /// Validate the device, template, and parameters and resolve the layout
    pub fn resolve(&self) -> Result<ResolvedTemplate> {
        let device = device_profile(&self.device)?;
        let spec = template_spec(&self.template)?;
        let params = resolve_template_params(spec, &self.params)?;

        let mut overrides = params.layout_overrides()?;
        if spec.kind == TemplateKind::Schedule {
            overrides
                .schedule_start_hour
                .get_or_insert(SCHEDULE_DEFAULT_START_HOUR);
            overrides
                .schedule_end_hour
                .get_or_insert(SCHEDULE_DEFAULT_END_HOUR);
        }
        let layout = resolve_template_layout(&self.device, self.layout.as_deref(), &overrides)?;
        let notes_fill = match params.str("notes_fill") {
            Some(fill) => fill.parse()?,
            None => NotesFill::default(),
        };
        debug!(
            "Resolved template '{}' on {} with layout '{}'",
            spec.id, device.name, layout.name
        );
        Ok(ResolvedTemplate {
            spec,
            device,
            layout,
            notes_fill,
        })
    }

    /// `template_<id>_<device>.pdf`, with dashes in the id replaced
    pub fn default_file_name(&self) -> Result<String> {
        let spec = template_spec(&self.template)?;
        Ok(format!(
            "template_{}_{}.pdf",
            spec.id.replace('-', "_"),
            self.device
        ))
    }
}

/// Draw the background and template body on the current page
pub fn draw_template(
    pdf: &mut dyn DrawingPrimitives,
    resolved: &ResolvedTemplate,
    theme: &Theme,
) -> Result<()> {
    let mut page = TemplatePage::new(pdf, resolved.device, &resolved.layout, theme)?;
    page.draw_background();
    page.draw(resolved.spec.kind, resolved.notes_fill)
}

/// Render a single-page template PDF in memory
pub fn render_template(options: &TemplateOptions, theme: &Theme) -> Result<Vec<u8>> {
    let resolved = options.resolve()?;
    let device = resolved.device;
    let mut pdf = PdfCanvas::new(device.page_width, device.page_height);
    pdf.set_title(&format!(
        "{} Template ({}, {})",
        resolved.spec.title, device.name, resolved.layout.name
    ));
    draw_template(&mut pdf, &resolved, theme)?;
    pdf.show_page();
    info!(
        "Rendered template '{}' ({} / {})",
        resolved.spec.id, device.name, resolved.layout.name
    );
    pdf.to_bytes()
}

/// Render a template and write it to `output`, or the default file name.
///
/// # Arguments
/// * `options` - Template, device, layout, and parameter selection
/// * `theme` - Resolved theme
/// * `output` - Output path; parent directories are created
pub async fn generate_template(
    options: &TemplateOptions,
    theme: &Theme,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let destination = match output {
        Some(path) => path,
        None => PathBuf::from(options.default_file_name()?),
    };
    let options = options.clone();
    let theme = *theme;

    let bytes = tokio::task::spawn_blocking(move || render_template(&options, &theme)).await??;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&destination, bytes).await?;
    info!("Wrote template to {}", destination.display());
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_alias() {
        assert_eq!(template_spec("dag").unwrap().id, "day-at-glance");
        assert_eq!(template_spec("todo").unwrap().kind, TemplateKind::TodoList);
        assert_eq!(template_spec("dots").unwrap().id, "dotted-grid");
    }

    #[test]
    fn test_unknown_template_lists_sorted_ids() {
        let err = template_spec("calendar").unwrap_err().to_string();
        assert_eq!(
            err,
            "unknown template 'calendar'. Valid templates: day-at-glance, dotted-grid, grid, \
             lines, notes, schedule, task-list, todo-list."
        );
    }

    #[test]
    fn test_default_file_name_uses_canonical_id() {
        let options = TemplateOptions {
            template: "dag".into(),
            device: "palma".into(),
            ..Default::default()
        };
        assert_eq!(
            options.default_file_name().unwrap(),
            "template_day_at_glance_palma.pdf"
        );
    }

    #[test]
    fn test_schedule_defaults_hours_unless_set() {
        let options = TemplateOptions {
            template: "schedule".into(),
            ..Default::default()
        };
        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.layout.schedule_start_hour, 6);
        assert_eq!(resolved.layout.schedule_end_hour, 22);

        let options = TemplateOptions {
            template: "schedule".into(),
            params: vec![("schedule_start_hour".into(), "8".into())],
            ..Default::default()
        };
        assert_eq!(options.resolve().unwrap().layout.schedule_start_hour, 8);
    }
}
