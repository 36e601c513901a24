//! Template page bodies: schedule, day-at-glance, checklist
//!
//! Every builder works inside the template content bounds, below the
//! header band ending at `header_bottom`.

use log::debug;

use super::steps::schedule_hours;
use super::types::{ContentBounds, Rect, RowBounds};
use crate::constants::COMPACT_PRIORITIES_ROWS;
use crate::error::{Result, check_index};
use crate::profiles::DeviceProfile;
use crate::template_layout::TemplateLayoutProfile;

// =============================================================================
// Schedule
// =============================================================================

/// Hourly schedule filling the template body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleGeometry {
    pub body: Rect,
    /// Hour labels, end hour included
    pub hours: Vec<u32>,
    pub row_height: f64,
    pub hour_col_width: f64,
    /// Working-hours band; absent when it misses the schedule range
    pub highlight_rect: Option<Rect>,
    pub hour_font_size: f64,
    pub writing_left_padding: f64,
    pub writing_right_padding: f64,
}

impl ScheduleGeometry {
    /// # Arguments
    /// * `work_start_hour` / `work_end_hour` - Inclusive working hours to highlight
    pub fn compute(
        device: &DeviceProfile,
        layout: &TemplateLayoutProfile,
        bounds: &ContentBounds,
        header_bottom: f64,
        work_start_hour: u32,
        work_end_hour: u32,
    ) -> Result<Self> {
        layout.validate_for(device)?;
        let units = device.units()?;
        let start = layout.schedule_start_hour;
        let width = bounds.width();
        let height = header_bottom - bounds.bottom;
        let hours = schedule_hours(start, layout.schedule_end_hour, true);
        let row_height = height / hours.len() as f64;

        let highlight_start = start.max(work_start_hour);
        let highlight_end = layout.schedule_end_hour.min(work_end_hour);
        let highlight_rect = (highlight_end >= highlight_start).then(|| {
            let top = header_bottom - (highlight_start - start) as f64 * row_height;
            let band = (highlight_end - highlight_start + 1) as f64 * row_height;
            Rect::new(bounds.left, top - band, width, band)
        });

        Ok(Self {
            body: Rect::new(bounds.left, bounds.bottom, width, height),
            hours,
            row_height,
            hour_col_width: units.pt(34.0).min(width * 0.2),
            highlight_rect,
            hour_font_size: units.font(9.0),
            writing_left_padding: units.pt(6.0),
            writing_right_padding: units.pt(8.0),
        })
    }

    pub fn row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.hours.len())?;
        Ok(RowBounds::stacked(self.body.top(), self.row_height, index))
    }
}

// =============================================================================
// Day at a Glance (full)
// =============================================================================

/// Side-by-side day-at-glance body: schedule on the left, priorities
/// above notes on the right
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayAtGlanceGeometry {
    pub schedule_left: f64,
    pub schedule_right: f64,
    pub schedule_width: f64,
    pub right_left: f64,
    pub right_width: f64,
    pub grid_top: f64,
    pub bottom: f64,
    pub heading_x_offset: f64,
    pub schedule_label_max_width: f64,
    pub tasks_label_max_width: f64,
    pub section_label_min_font: f64,
    pub label_col_width: f64,
    pub hour_count: usize,
    pub row_height: f64,
    pub hour_font_size: f64,
    pub left_line_padding: f64,
    pub right_line_padding: f64,
    pub priorities_top: f64,
    pub priorities_bottom: f64,
    pub priorities_rows_top: f64,
    pub priorities_rows: usize,
    pub priority_row_height: f64,
    pub label_font_size: f64,
    pub label_x_offset: f64,
    pub task_line_gap: f64,
    pub task_box_size: f64,
    pub notes_top: f64,
    pub notes_rows_top: f64,
    pub notes_step: f64,
    pub notes_padding: f64,
}

impl DayAtGlanceGeometry {
    pub fn compute(
        device: &DeviceProfile,
        layout: &TemplateLayoutProfile,
        bounds: &ContentBounds,
        header_bottom: f64,
    ) -> Result<Self> {
        layout.validate_for(device)?;
        let units = device.units()?;
        let bottom = bounds.bottom;
        let width = bounds.width();
        let gutter = (width * 0.015).clamp(8.0, 18.0);
        let schedule_width = width * 0.38;
        let right_width = width - schedule_width - gutter;
        let schedule_right = bounds.left + schedule_width;

        // Shrink the heading band when the grid would get too short
        let mut grid_top = header_bottom - units.pt(20.0);
        if grid_top - bottom < units.pt(180.0) {
            grid_top = header_bottom - units.pt(12.0);
        }

        let hour_count = (layout.schedule_end_hour - layout.schedule_start_hour) as usize;
        let body_height = grid_top - bottom;

        let priorities_top = grid_top;
        let priorities_bottom = priorities_top - body_height * 0.35;
        let priorities_band = units.pt(18.0).min((priorities_top - priorities_bottom) * 0.35);
        let mut priorities_rows_top = priorities_top - priorities_band;
        if priorities_rows_top <= priorities_bottom {
            priorities_rows_top = priorities_top;
        }

        let notes_top = priorities_bottom;
        let notes_band = units.pt(18.0).min((notes_top - bottom) * 0.3);
        let mut notes_rows_top = notes_top - notes_band;
        if notes_rows_top <= bottom {
            notes_rows_top = notes_top;
        }

        let heading_x_offset = units.pt(8.0);
        Ok(Self {
            schedule_left: bounds.left,
            schedule_right,
            schedule_width,
            right_left: schedule_right + gutter,
            right_width,
            grid_top,
            bottom,
            heading_x_offset,
            schedule_label_max_width: (schedule_width - 2.0 * heading_x_offset)
                .max(units.pt(28.0)),
            tasks_label_max_width: (right_width - 2.0 * heading_x_offset).max(units.pt(34.0)),
            section_label_min_font: units.font(6.0),
            label_col_width: units.pt(34.0).min(schedule_width * 0.34),
            hour_count,
            row_height: body_height / hour_count as f64,
            hour_font_size: units.font(9.0),
            left_line_padding: units.pt(4.0),
            right_line_padding: units.pt(6.0),
            priorities_top,
            priorities_bottom,
            priorities_rows_top,
            priorities_rows: layout.priorities_rows,
            priority_row_height: (priorities_rows_top - priorities_bottom)
                / layout.priorities_rows as f64,
            label_font_size: units.font(10.0),
            label_x_offset: units.pt(8.0),
            task_line_gap: units.pt(8.0),
            task_box_size: units.pt(10.0),
            notes_top,
            notes_rows_top,
            notes_step: units.mm(layout.line_spacing_mm),
            notes_padding: units.pt(8.0),
        })
    }

    pub fn schedule_row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.hour_count)?;
        Ok(RowBounds::stacked(self.grid_top, self.row_height, index))
    }

    pub fn priorities_row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.priorities_rows)?;
        Ok(RowBounds::stacked(
            self.priorities_rows_top,
            self.priority_row_height,
            index,
        ))
    }
}

// =============================================================================
// Day at a Glance (compact)
// =============================================================================

/// Stacked day-at-glance body for narrow devices: priorities, schedule,
/// and notes bands from top to bottom, with a vertical label strip on
/// the right edge
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayAtGlanceCompactGeometry {
    pub left: f64,
    pub right: f64,
    pub content_height: f64,
    pub priorities_top: f64,
    pub priorities_bottom: f64,
    pub schedule_top: f64,
    pub schedule_bottom: f64,
    pub notes_top: f64,
    pub notes_bottom: f64,
    pub label_left: f64,
    pub label_strip_width: f64,
    pub x_padding: f64,
    pub section_label_pref: f64,
    pub section_label_min: f64,
    pub vertical_label_padding: f64,
    pub priorities_rows: usize,
    pub priorities_row_height: f64,
    pub checkbox_size: f64,
    pub checkbox_x: f64,
    pub text_gap: f64,
    pub writing_right: f64,
    /// Hour labels, end hour excluded
    pub schedule_hours: Vec<u32>,
    pub schedule_row_height: f64,
    pub hour_font_size: f64,
    pub hour_col_width: f64,
    pub schedule_line_left_padding: f64,
    pub notes_step: f64,
}

/// Share of the compact body given to each band
const COMPACT_PRIORITIES_SHARE: f64 = 0.24;
const COMPACT_SCHEDULE_SHARE: f64 = 0.31;

/// Most of the schedule band the notes band may reclaim
const COMPACT_SCHEDULE_RECLAIM: f64 = 0.20;

/// Split a compact body height into (priorities, schedule, notes).
///
/// When notes fall below `min_notes_height`, up to 20% of the schedule
/// band moves to notes.
pub fn compact_band_heights(content_height: f64, min_notes_height: f64) -> (f64, f64, f64) {
    let priorities = content_height * COMPACT_PRIORITIES_SHARE;
    let mut schedule = content_height * COMPACT_SCHEDULE_SHARE;
    let mut notes = content_height - priorities - schedule;
    if notes < min_notes_height {
        let reclaimed = (min_notes_height - notes).min(schedule * COMPACT_SCHEDULE_RECLAIM);
        debug!("compact notes band short by {:.1}, reclaiming {reclaimed:.1}", min_notes_height - notes);
        schedule -= reclaimed;
        notes += reclaimed;
    }
    (priorities, schedule, notes)
}

impl DayAtGlanceCompactGeometry {
    pub fn compute(
        device: &DeviceProfile,
        layout: &TemplateLayoutProfile,
        bounds: &ContentBounds,
        header_bottom: f64,
    ) -> Result<Self> {
        layout.validate_for(device)?;
        let units = device.units()?;
        let (left, right) = (bounds.left, bounds.right);
        let content_height = header_bottom - bounds.bottom;
        let x_padding = units.pt(8.0);
        let label_strip_width = units.mm(6.0).min((right - left) * 0.14);
        let label_left = right - label_strip_width;

        let (priorities_height, schedule_height, _) =
            compact_band_heights(content_height, units.pt(110.0));
        let priorities_top = header_bottom;
        let priorities_bottom = priorities_top - priorities_height;
        let schedule_top = priorities_bottom;
        let schedule_bottom = schedule_top - schedule_height;

        let hours = schedule_hours(layout.schedule_start_hour, layout.schedule_end_hour, false);
        let schedule_row_height = (schedule_top - schedule_bottom) / hours.len() as f64;

        Ok(Self {
            left,
            right,
            content_height,
            priorities_top,
            priorities_bottom,
            schedule_top,
            schedule_bottom,
            notes_top: schedule_bottom,
            notes_bottom: bounds.bottom,
            label_left,
            label_strip_width,
            x_padding,
            section_label_pref: units.font(10.0),
            section_label_min: units.font(7.0),
            vertical_label_padding: units.mm(1.0),
            priorities_rows: COMPACT_PRIORITIES_ROWS,
            priorities_row_height: priorities_height / COMPACT_PRIORITIES_ROWS as f64,
            checkbox_size: units.pt(10.0),
            checkbox_x: left + x_padding,
            text_gap: units.pt(8.0),
            writing_right: label_left - x_padding,
            schedule_hours: hours,
            schedule_row_height,
            hour_font_size: units.font(9.0),
            hour_col_width: units.pt(24.0).min((label_left - left) * 0.18),
            schedule_line_left_padding: units.pt(6.0),
            notes_step: units.mm(layout.line_spacing_mm),
        })
    }

    pub fn priorities_row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.priorities_rows)?;
        Ok(RowBounds::stacked(
            self.priorities_top,
            self.priorities_row_height,
            index,
        ))
    }

    pub fn schedule_row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.schedule_hours.len())?;
        Ok(RowBounds::stacked(
            self.schedule_top,
            self.schedule_row_height,
            index,
        ))
    }
}

// =============================================================================
// Checklist
// =============================================================================

/// Rows of checkbox + writing line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChecklistGeometry {
    pub body: Rect,
    pub rows: usize,
    pub row_height: f64,
    pub checkbox_col_width: f64,
    pub line_padding: f64,
    pub box_size: f64,
}

impl ChecklistGeometry {
    pub fn compute(
        device: &DeviceProfile,
        layout: &TemplateLayoutProfile,
        bounds: &ContentBounds,
        header_bottom: f64,
    ) -> Result<Self> {
        layout.validate_for(device)?;
        let units = device.units()?;
        let height = header_bottom - bounds.bottom;
        let rows = layout.checklist_rows;
        let row_height = height / rows as f64;
        Ok(Self {
            body: Rect::new(bounds.left, bounds.bottom, bounds.width(), height),
            rows,
            row_height,
            checkbox_col_width: units.pt(28.0),
            line_padding: units.pt(8.0),
            box_size: units.pt(12.0).min(row_height * 0.45),
        })
    }

    pub fn row_bounds(&self, index: usize) -> Result<RowBounds> {
        check_index("index", index, self.rows)?;
        Ok(RowBounds::stacked(self.body.top(), self.row_height, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_bands_without_rebalance() {
        let (p, s, n) = compact_band_heights(1000.0, 100.0);
        assert!((p - 240.0).abs() < 1e-9);
        assert!((s - 310.0).abs() < 1e-9);
        assert!((n - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_compact_bands_reclaim_is_capped() {
        // notes = 45, deficit 955, cap = 0.2 * 31 = 6.2
        let (_, s, n) = compact_band_heights(100.0, 1000.0);
        assert!((s - 24.8).abs() < 1e-9);
        assert!((n - 51.2).abs() < 1e-9);
    }
}
