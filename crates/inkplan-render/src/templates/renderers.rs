//! Single-page template bodies
//!
//! Every template is sized from the physical millimeter values of its
//! [`TemplateLayoutProfile`], so line pitch is the same on every device.

use std::str::FromStr;

use inkplan_layout::{
    ChecklistGeometry, ContentBounds, DayAtGlanceCompactGeometry, DayAtGlanceGeometry,
    DeviceProfile, Rect, ScheduleGeometry, TemplateLayoutProfile, UnitScale,
    ascending_step_positions, constants::WORK_END_HOUR, constants::WORK_START_HOUR,
    content_bounds, descending_step_positions,
};

use super::TemplateKind;
use crate::drawing::{DrawingPrimitives, Paint};
use crate::error::{RenderError, Result};
use crate::theme::Theme;

/// Notes fill names, in help order
pub const NOTES_FILL_TYPES: [&str; 4] = ["lines", "grid", "dotted-grid", "millimeter"];

const BORDER_WIDTH_MM: f64 = 0.22;
const RULE_WIDTH_MM: f64 = 0.16;
const FINE_RULE_WIDTH_MM: f64 = 0.12;
const DIVIDER_WIDTH_MM: f64 = 0.32;

/// Every n-th millimeter line is drawn heavier
const MILLIMETER_MAJOR_EVERY: usize = 5;

/// Fill drawn inside the notes template body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotesFill {
    #[default]
    Lines,
    Grid,
    DottedGrid,
    Millimeter,
}

impl FromStr for NotesFill {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lines" => Ok(NotesFill::Lines),
            "grid" => Ok(NotesFill::Grid),
            "dotted-grid" => Ok(NotesFill::DottedGrid),
            "millimeter" => Ok(NotesFill::Millimeter),
            _ => Err(RenderError::Template(format!(
                "unknown notes fill '{s}'. Valid notes fills: {}.",
                NOTES_FILL_TYPES.join(", ")
            ))),
        }
    }
}

// =============================================================================
// Label fitting
// =============================================================================

/// Baseline that visually centers text of `font_size` in a vertical band
pub fn band_label_baseline(top: f64, bottom: f64, font_size: f64) -> f64 {
    bottom + (top - bottom - font_size) / 2.0 + font_size * 0.2
}

/// Shrink from `preferred` in half-point steps until `text` fits `max_width`,
/// never going below `min`
pub fn fit_font_size(
    pdf: &dyn DrawingPrimitives,
    text: &str,
    font: &str,
    preferred: f64,
    min: f64,
    max_width: f64,
) -> f64 {
    if max_width <= 0.0 {
        return min;
    }
    let mut size = preferred;
    while size > min && pdf.string_width(text, font, size) > max_width {
        size -= 0.5;
    }
    size.max(min)
}

/// First candidate that fits `max_width` once shrunk, or the last candidate
/// at its smallest fitted size
pub fn pick_fitting_label(
    pdf: &dyn DrawingPrimitives,
    candidates: &[&str],
    font: &str,
    preferred: f64,
    min: f64,
    max_width: f64,
) -> (String, f64) {
    let Some(fallback) = candidates.last() else {
        return (String::new(), min);
    };
    for label in candidates {
        let size = fit_font_size(pdf, label, font, preferred, min, max_width);
        if pdf.string_width(label, font, size) <= max_width {
            return (label.to_string(), size);
        }
    }
    let size = fit_font_size(pdf, fallback, font, preferred, min, max_width);
    (fallback.to_string(), size)
}

/// Progressively shorter spellings of a header title
pub fn title_candidates(title: &str) -> Vec<String> {
    let mut variants = vec![title.to_string()];
    if title.contains(" AT A ") {
        variants.push(title.replace(" AT A ", " "));
    }
    if title.contains(" & ") {
        variants.push(title.replace(" & ", "/"));
    }
    if title.contains(' ') {
        variants.push(title.replace(' ', ""));
    }
    let mut deduped: Vec<String> = Vec::with_capacity(variants.len());
    for variant in variants {
        if !deduped.contains(&variant) {
            deduped.push(variant);
        }
    }
    deduped
}

/// Index and position of each millimeter line after `start`, below `end`
fn millimeter_positions(start: f64, end: f64, step: f64) -> Vec<(usize, f64)> {
    let mut positions = Vec::new();
    let mut pos = start + step;
    let mut index = 1;
    while pos < end {
        positions.push((index, pos));
        pos += step;
        index += 1;
    }
    positions
}

// =============================================================================
// Template page
// =============================================================================

/// Drawing context for one template page
pub(crate) struct TemplatePage<'a> {
    pdf: &'a mut dyn DrawingPrimitives,
    device: &'a DeviceProfile,
    layout: &'a TemplateLayoutProfile,
    theme: &'a Theme,
    units: UnitScale,
    bounds: ContentBounds,
}

impl<'a> TemplatePage<'a> {
    pub fn new(
        pdf: &'a mut dyn DrawingPrimitives,
        device: &'a DeviceProfile,
        layout: &'a TemplateLayoutProfile,
        theme: &'a Theme,
    ) -> Result<Self> {
        layout.validate_for(device)?;
        Ok(Self {
            units: device.units()?,
            bounds: content_bounds(device, layout)?,
            pdf,
            device,
            layout,
            theme,
        })
    }

    fn stroke(&mut self, color: crate::theme::Color, width_mm: f64) {
        self.pdf.set_stroke_color(color);
        self.pdf.set_line_width(self.units.mm(width_mm));
    }

    fn border_stroke(&mut self) {
        self.stroke(self.theme.text_secondary, BORDER_WIDTH_MM);
    }

    fn rule_stroke(&mut self) {
        self.stroke(self.theme.grid_lines, RULE_WIDTH_MM);
    }

    fn fine_rule_stroke(&mut self) {
        self.stroke(self.theme.grid_lines, FINE_RULE_WIDTH_MM);
    }

    fn divider_stroke(&mut self) {
        self.stroke(self.theme.text_secondary, DIVIDER_WIDTH_MM);
    }

    fn checkbox_stroke(&mut self) {
        self.stroke(self.theme.accent, RULE_WIDTH_MM);
    }

    fn pick_label(&self, candidates: &[&str], preferred: f64, min: f64, max_width: f64) -> (String, f64) {
        pick_fitting_label(&*self.pdf, candidates, self.theme.font_bold, preferred, min, max_width)
    }

    fn hour_label(&mut self, center_x: f64, row_center: f64, font_size: f64, hour: u32) {
        self.pdf.set_fill_color(self.theme.text_secondary);
        self.pdf.set_font(self.theme.font_bold, font_size);
        self.pdf
            .draw_centred_string(center_x, row_center - font_size * 0.33, &format!("{hour:02}"));
    }

    /// Fill the whole page with the theme background
    pub fn draw_background(&mut self) {
        self.pdf.set_fill_color(self.theme.background);
        self.pdf.rect(
            Rect::new(0.0, 0.0, self.device.page_width, self.device.page_height),
            Paint::FILL,
        );
    }

    /// Draw the title and date band; returns the band's bottom edge
    fn draw_header(&mut self, title: &str) -> f64 {
        let ContentBounds {
            left, right, top, ..
        } = self.bounds;
        let header_height = self.units.mm(self.layout.header_height_mm);
        if header_height <= 0.0 {
            return top;
        }

        let header_bottom = top - header_height;
        self.border_stroke();
        self.pdf.line(left, header_bottom, right, header_bottom);

        let u = self.units;
        let content_width = right - left;
        let date_line_width = u.pt(24.0).max(u.pt(72.0).min(content_width * 0.22));
        let label_gap = u.pt(8.0);
        let title_date_gap = u.pt(10.0);

        let (date_label, date_font_size) = self.pick_label(
            &["DATE", "DT"],
            u.font(10.0),
            u.font(6.0),
            (content_width * 0.16).max(u.pt(22.0)),
        );
        let label_width = self
            .pdf
            .string_width(&date_label, self.theme.font_bold, date_font_size);
        let date_block_width = label_width + label_gap + date_line_width;
        let title_max_width =
            (content_width - date_block_width - title_date_gap).max(content_width * 0.35);
        let candidates = title_candidates(title);
        let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let (title_label, title_font_size) =
            self.pick_label(&candidates, u.font(12.0), u.font(7.0), title_max_width);

        let text_y = header_bottom + header_height * 0.42;
        self.pdf.set_fill_color(self.theme.text_primary);
        self.pdf.set_font(self.theme.font_bold, title_font_size);
        self.pdf.draw_string(left, text_y, &title_label);

        let line_left = right - date_line_width;
        self.pdf.set_fill_color(self.theme.text_secondary);
        self.pdf.set_font(self.theme.font_bold, date_font_size);
        self.pdf
            .draw_string(line_left - label_width - label_gap, text_y, &date_label);
        self.rule_stroke();
        self.pdf.line(line_left, text_y, right, text_y);
        header_bottom
    }

    /// Draw the body for `kind`
    pub fn draw(&mut self, kind: TemplateKind, notes_fill: NotesFill) -> Result<()> {
        match kind {
            TemplateKind::Lines => self.draw_lines(),
            TemplateKind::Grid => self.draw_grid(),
            TemplateKind::DottedGrid => self.draw_dotted_grid(),
            TemplateKind::DayAtGlance if self.device.compact_day_at_glance => {
                self.draw_day_at_glance_compact()
            }
            TemplateKind::DayAtGlance => self.draw_day_at_glance(),
            TemplateKind::Schedule => self.draw_schedule(),
            TemplateKind::TaskList => self.draw_checklist("TASK LIST"),
            TemplateKind::TodoList => self.draw_checklist("TO DO LIST"),
            TemplateKind::Notes => self.draw_notes(notes_fill),
        }
    }

    fn draw_lines(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("LINES");
        let ContentBounds {
            left,
            bottom,
            right,
            ..
        } = self.bounds;
        self.rule_stroke();
        let step = self.units.mm(self.layout.line_spacing_mm);
        for y in descending_step_positions(header_bottom, bottom, step, false, true)? {
            self.pdf.line(left, y, right, y);
        }
        Ok(())
    }

    fn draw_grid(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("GRID");
        let ContentBounds {
            left,
            bottom,
            right,
            ..
        } = self.bounds;
        let step = self.units.mm(self.layout.grid_spacing_mm);
        self.fine_rule_stroke();
        for x in ascending_step_positions(left, right, step, true, true)? {
            self.pdf.line(x, bottom, x, header_bottom);
        }
        for y in descending_step_positions(header_bottom, bottom, step, true, true)? {
            self.pdf.line(left, y, right, y);
        }
        Ok(())
    }

    fn draw_dots(&mut self, top: f64, inclusive: bool) -> Result<()> {
        let ContentBounds {
            left,
            bottom,
            right,
            ..
        } = self.bounds;
        let step = self.units.mm(self.layout.dot_spacing_mm);
        let radius = self.units.mm(self.layout.dot_radius_mm);
        let columns = ascending_step_positions(left, right, step, inclusive, inclusive)?;
        self.pdf.set_fill_color(self.theme.grid_lines);
        for y in ascending_step_positions(bottom, top, step, inclusive, inclusive)? {
            for &x in &columns {
                self.pdf.circle(x, y, radius, Paint::FILL);
            }
        }
        Ok(())
    }

    fn draw_dotted_grid(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("DOTTED GRID");
        self.draw_dots(header_bottom, true)
    }

    fn draw_schedule(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("SCHEDULE");
        let geometry = ScheduleGeometry::compute(
            self.device,
            self.layout,
            &self.bounds,
            header_bottom,
            WORK_START_HOUR,
            WORK_END_HOUR,
        )?;
        let body = geometry.body;

        self.border_stroke();
        self.pdf.rect(body, Paint::STROKE);
        if let Some(highlight) = geometry.highlight_rect {
            self.pdf.set_fill_color(self.theme.link_badge_bg);
            self.pdf.rect(highlight, Paint::FILL);
        }

        self.rule_stroke();
        let hour_col_x = body.x + geometry.hour_col_width;
        self.pdf.line(hour_col_x, body.y, hour_col_x, body.top());

        for (idx, &hour) in geometry.hours.iter().enumerate() {
            let row = geometry.row_bounds(idx)?;
            if idx > 0 {
                self.rule_stroke();
                self.pdf.line(body.x, row.top, body.right(), row.top);
            }
            self.hour_label(
                body.x + geometry.hour_col_width / 2.0,
                row.center,
                geometry.hour_font_size,
                hour,
            );
            self.fine_rule_stroke();
            self.pdf.line(
                hour_col_x + geometry.writing_left_padding,
                row.center,
                body.right() - geometry.writing_right_padding,
                row.center,
            );
            self.pdf.line(body.x, row.bottom, body.right(), row.bottom);
        }
        Ok(())
    }

    fn draw_day_at_glance(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("DAY AT A GLANCE");
        let right = self.bounds.right;
        let g = DayAtGlanceGeometry::compute(self.device, self.layout, &self.bounds, header_bottom)?;
        let u = self.units;

        self.border_stroke();
        let column_height = header_bottom - g.bottom;
        self.pdf.rect(
            Rect::new(g.schedule_left, g.bottom, g.schedule_width, column_height),
            Paint::STROKE,
        );
        self.pdf.rect(
            Rect::new(g.right_left, g.bottom, g.right_width, column_height),
            Paint::STROKE,
        );

        let (schedule_label, schedule_size) = self.pick_label(
            &["SCHEDULE", "SCHED"],
            u.font(11.0),
            g.section_label_min_font,
            g.schedule_label_max_width,
        );
        let (tasks_label, tasks_size) = self.pick_label(
            &["TASKS & NOTES", "TASKS/NOTES", "TASKS"],
            u.font(11.0),
            g.section_label_min_font,
            g.tasks_label_max_width,
        );

        self.pdf.set_fill_color(self.theme.text_primary);
        self.pdf.set_font(self.theme.font_bold, schedule_size);
        self.pdf.draw_string(
            g.schedule_left + g.heading_x_offset,
            band_label_baseline(header_bottom, g.grid_top, schedule_size),
            &schedule_label,
        );
        self.pdf.set_font(self.theme.font_bold, tasks_size);
        self.pdf.draw_string(
            g.right_left + g.heading_x_offset,
            band_label_baseline(header_bottom, g.grid_top, tasks_size),
            &tasks_label,
        );

        self.rule_stroke();
        self.pdf
            .line(g.schedule_left, g.grid_top, g.schedule_right, g.grid_top);
        self.pdf.line(g.right_left, g.grid_top, right, g.grid_top);
        let label_col_x = g.schedule_left + g.label_col_width;
        self.pdf.line(label_col_x, g.bottom, label_col_x, g.grid_top);

        for idx in 0..g.hour_count {
            let row = g.schedule_row_bounds(idx)?;
            if idx > 0 {
                self.rule_stroke();
                self.pdf
                    .line(g.schedule_left, row.top, g.schedule_right, row.top);
            }
            let hour = self.layout.schedule_start_hour + idx as u32;
            self.hour_label(
                g.schedule_left + g.label_col_width / 2.0,
                row.center,
                g.hour_font_size,
                hour,
            );
            self.fine_rule_stroke();
            self.pdf.line(
                label_col_x + g.left_line_padding,
                row.center,
                g.schedule_right - g.right_line_padding,
                row.center,
            );
            self.pdf
                .line(g.schedule_left, row.bottom, g.schedule_right, row.bottom);
        }

        // Priorities block
        self.rule_stroke();
        self.pdf
            .line(g.right_left, g.priorities_bottom, right, g.priorities_bottom);
        self.pdf.set_fill_color(self.theme.text_secondary);
        self.pdf.set_font(self.theme.font_bold, g.label_font_size);
        self.pdf.draw_string(
            g.right_left + g.label_x_offset,
            band_label_baseline(g.priorities_top, g.priorities_rows_top, g.label_font_size),
            "TOP PRIORITIES",
        );
        self.fine_rule_stroke();
        self.pdf
            .line(g.right_left, g.priorities_rows_top, right, g.priorities_rows_top);

        for idx in 0..g.priorities_rows {
            let row = g.priorities_row_bounds(idx)?;
            if idx > 0 {
                self.fine_rule_stroke();
                self.pdf.line(g.right_left, row.top, right, row.top);
            }
            let box_x = g.right_left + g.label_x_offset;
            let box_y = row.center - g.task_box_size / 2.0;
            self.checkbox_stroke();
            self.pdf.rect(
                Rect::new(box_x, box_y, g.task_box_size, g.task_box_size),
                Paint::STROKE,
            );
            self.fine_rule_stroke();
            self.pdf.line(
                box_x + g.task_box_size + g.task_line_gap,
                row.center,
                right - g.task_line_gap,
                row.center,
            );
            self.pdf.line(g.right_left, row.bottom, right, row.bottom);
        }

        // Notes block
        self.pdf.set_fill_color(self.theme.text_secondary);
        self.pdf.set_font(self.theme.font_bold, g.label_font_size);
        self.pdf.draw_string(
            g.right_left + g.label_x_offset,
            band_label_baseline(g.notes_top, g.notes_rows_top, g.label_font_size),
            "NOTES",
        );
        self.fine_rule_stroke();
        self.pdf
            .line(g.right_left, g.notes_rows_top, right, g.notes_rows_top);

        self.rule_stroke();
        for y in descending_step_positions(g.notes_rows_top, g.bottom, g.notes_step, false, true)? {
            self.pdf
                .line(g.right_left + g.notes_padding, y, right - g.notes_padding, y);
        }
        Ok(())
    }

    /// Rotated label centered in the right-hand label strip
    fn vertical_section_label(
        &mut self,
        g: &DayAtGlanceCompactGeometry,
        section_top: f64,
        section_bottom: f64,
        candidates: &[&str],
    ) {
        let section_height = section_top - section_bottom;
        let max_width =
            (section_height - 2.0 * g.vertical_label_padding).max(self.units.pt(40.0));
        let (label, size) = self.pick_label(
            candidates,
            g.section_label_pref,
            g.section_label_min,
            max_width,
        );
        self.pdf.save_state();
        self.pdf.set_fill_color(self.theme.text_secondary);
        self.pdf.set_font(self.theme.font_bold, size);
        self.pdf.translate(
            g.label_left + g.label_strip_width / 2.0,
            section_bottom + section_height / 2.0,
        );
        self.pdf.rotate(90.0);
        self.pdf.draw_centred_string(0.0, -(size * 0.33), &label);
        self.pdf.restore_state();
    }

    fn draw_day_at_glance_compact(&mut self) -> Result<()> {
        let header_bottom = self.draw_header("DAY AT A GLANCE");
        let ContentBounds { left, right, .. } = self.bounds;
        let g = DayAtGlanceCompactGeometry::compute(
            self.device,
            self.layout,
            &self.bounds,
            header_bottom,
        )?;

        self.border_stroke();
        self.pdf.rect(
            Rect::new(left, g.notes_bottom, right - left, g.content_height),
            Paint::STROKE,
        );

        self.divider_stroke();
        self.pdf
            .line(left, g.priorities_bottom, right, g.priorities_bottom);
        self.pdf.line(left, g.schedule_bottom, right, g.schedule_bottom);

        self.rule_stroke();
        for (top, bottom) in [
            (g.priorities_top, g.priorities_bottom),
            (g.schedule_top, g.schedule_bottom),
            (g.notes_top, g.notes_bottom),
        ] {
            self.pdf.line(g.label_left, bottom, g.label_left, top);
        }

        self.vertical_section_label(
            &g,
            g.priorities_top,
            g.priorities_bottom,
            &["TOP PRIORITIES", "PRIORITIES"],
        );
        self.vertical_section_label(&g, g.schedule_top, g.schedule_bottom, &["SCHEDULE", "SCHED"]);
        self.vertical_section_label(&g, g.notes_top, g.notes_bottom, &["NOTES"]);

        for idx in 0..g.priorities_rows {
            let row = g.priorities_row_bounds(idx)?;
            if idx > 0 {
                self.fine_rule_stroke();
                self.pdf.line(left, row.top, g.label_left, row.top);
            }
            self.checkbox_stroke();
            self.pdf.rect(
                Rect::new(
                    g.checkbox_x,
                    row.center - g.checkbox_size / 2.0,
                    g.checkbox_size,
                    g.checkbox_size,
                ),
                Paint::STROKE,
            );
            self.fine_rule_stroke();
            let line_start = g.checkbox_x + g.checkbox_size + g.text_gap;
            self.pdf
                .line(line_start, row.center, g.writing_right, row.center);
            self.pdf.line(left, row.bottom, g.label_left, row.bottom);
        }

        self.rule_stroke();
        let hour_col_x = left + g.hour_col_width;
        self.pdf
            .line(hour_col_x, g.schedule_bottom, hour_col_x, g.schedule_top);

        for (idx, &hour) in g.schedule_hours.iter().enumerate() {
            let row = g.schedule_row_bounds(idx)?;
            if idx > 0 {
                self.rule_stroke();
                self.pdf.line(left, row.top, g.label_left, row.top);
            }
            self.hour_label(
                left + g.hour_col_width / 2.0,
                row.center,
                g.hour_font_size,
                hour,
            );
            self.fine_rule_stroke();
            self.pdf.line(
                hour_col_x + g.schedule_line_left_padding,
                row.center,
                g.writing_right,
                row.center,
            );
            self.pdf.line(left, row.bottom, g.label_left, row.bottom);
        }

        self.rule_stroke();
        for y in descending_step_positions(g.notes_top, g.notes_bottom, g.notes_step, false, true)? {
            self.pdf.line(left + g.x_padding, y, g.writing_right, y);
        }
        Ok(())
    }

    fn draw_checklist(&mut self, title: &str) -> Result<()> {
        let header_bottom = self.draw_header(title);
        let g = ChecklistGeometry::compute(self.device, self.layout, &self.bounds, header_bottom)?;
        let body = g.body;
        let column_x = body.x + g.checkbox_col_width;

        self.border_stroke();
        self.pdf.rect(body, Paint::STROKE);
        self.pdf.line(column_x, body.y, column_x, body.top());

        for idx in 0..g.rows {
            let row = g.row_bounds(idx)?;
            if idx > 0 {
                self.fine_rule_stroke();
                self.pdf.line(body.x, row.top, body.right(), row.top);
            }
            self.checkbox_stroke();
            self.pdf.rect(
                Rect::new(
                    body.x + (g.checkbox_col_width - g.box_size) / 2.0,
                    row.center - g.box_size / 2.0,
                    g.box_size,
                    g.box_size,
                ),
                Paint::STROKE,
            );
            self.fine_rule_stroke();
            self.pdf.line(
                column_x + g.line_padding,
                row.center,
                body.right() - g.line_padding,
                row.center,
            );
            self.pdf.line(body.x, row.bottom, body.right(), row.bottom);
        }
        Ok(())
    }

    fn draw_notes(&mut self, fill: NotesFill) -> Result<()> {
        let header_bottom = self.draw_header("NOTES");
        let ContentBounds {
            left,
            bottom,
            right,
            ..
        } = self.bounds;

        self.border_stroke();
        self.pdf.rect(
            Rect::new(left, bottom, right - left, header_bottom - bottom),
            Paint::STROKE,
        );

        match fill {
            NotesFill::Lines => {
                let step = self.units.mm(self.layout.line_spacing_mm);
                let padding = self.units.pt(8.0);
                self.rule_stroke();
                for y in descending_step_positions(header_bottom, bottom, step, false, true)? {
                    self.pdf.line(left + padding, y, right - padding, y);
                }
            }
            NotesFill::Grid => {
                let step = self.units.mm(self.layout.grid_spacing_mm);
                self.fine_rule_stroke();
                for x in ascending_step_positions(left, right, step, false, false)? {
                    self.pdf.line(x, bottom, x, header_bottom);
                }
                for y in ascending_step_positions(bottom, header_bottom, step, false, false)? {
                    self.pdf.line(left, y, right, y);
                }
            }
            NotesFill::DottedGrid => self.draw_dots(header_bottom, false)?,
            NotesFill::Millimeter => {
                let step = self.units.mm(1.0);
                let columns = millimeter_positions(left, right, step);
                let rows = millimeter_positions(bottom, header_bottom, step);
                for major in [false, true] {
                    if major {
                        self.rule_stroke();
                    } else {
                        self.fine_rule_stroke();
                    }
                    let is_selected = |index: usize| (index % MILLIMETER_MAJOR_EVERY == 0) == major;
                    for &(_, x) in columns.iter().filter(|(i, _)| is_selected(*i)) {
                        self.pdf.line(x, bottom, x, header_bottom);
                    }
                    for &(_, y) in rows.iter().filter(|(i, _)| is_selected(*i)) {
                        self.pdf.line(left, y, right, y);
                    }
                }
            }
        }
        Ok(())
    }
}
