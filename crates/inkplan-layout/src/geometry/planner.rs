//! Planner page geometry: month grid, week columns, daily view

use super::regions::{DailyRegion, MonthRegion, WeekRegion};
use super::types::{Point, Rect, RowBounds};
use crate::constants::*;
use crate::error::{LayoutError, Result, check_index};
use crate::profiles::RenderProfile;
use crate::units::mm_to_points;

// =============================================================================
// Month Grid
// =============================================================================

/// Resolved 6×7 monthly calendar grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthGridGeometry {
    pub start_x: f64,
    /// Top edge of the first row
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    pub col_width: f64,
    pub row_height: f64,
    pub weekday_label_y_offset: f64,
}

impl MonthGridGeometry {
    pub fn compute(profile: &RenderProfile) -> Self {
        let region = MonthRegion::of(profile);
        Self {
            start_x: region.start_x,
            start_y: region.start_y,
            width: region.width,
            height: region.height,
            col_width: region.col_width(),
            row_height: region.row_height(),
            weekday_label_y_offset: MONTH_WEEKDAY_LABEL_Y_OFFSET,
        }
    }

    /// Center of the weekday label above column `col`
    pub fn weekday_label_center(&self, col: usize) -> Result<Point> {
        check_index("col_idx", col, MONTH_COLUMNS)?;
        Ok(Point::new(
            self.start_x + col as f64 * self.col_width + self.col_width / 2.0,
            self.start_y + self.weekday_label_y_offset,
        ))
    }

    /// Cell at `row` (0 = top) and `col` (0 = Monday)
    pub fn cell_rect(&self, row: usize, col: usize) -> Result<Rect> {
        check_index("row_idx", row, MONTH_ROWS)?;
        check_index("col_idx", col, MONTH_COLUMNS)?;
        Ok(Rect::new(
            self.start_x + col as f64 * self.col_width,
            self.start_y - (row + 1) as f64 * self.row_height,
            self.col_width,
            self.row_height,
        ))
    }

    /// Week-label strip left of column 0 for `row`
    pub fn week_label_rect(&self, row: usize, label_width: f64, label_gap: f64) -> Result<Rect> {
        if label_width <= 0.0 {
            return Err(LayoutError::validation("label_width must be positive."));
        }
        let cell = self.cell_rect(row, 0)?;
        Ok(Rect::new(
            self.start_x - label_width - label_gap,
            cell.y,
            label_width,
            self.row_height,
        ))
    }
}

/// Day-number badge anchored at the top-left of a month cell.
///
/// The badge width is clamped to the cell width.
pub fn month_day_badge_rect(cell: &Rect, box_height: f64, box_max_width: f64) -> Result<Rect> {
    if box_height <= 0.0 {
        return Err(LayoutError::validation("box_height must be positive."));
    }
    if box_max_width <= 0.0 {
        return Err(LayoutError::validation("box_max_width must be positive."));
    }
    Ok(Rect::new(
        cell.x,
        cell.top() - box_height,
        box_max_width.min(cell.width),
        box_height,
    ))
}

/// Endpoints of the horizontal writing line through a month cell
pub fn month_writing_line_points(cell: &Rect, margin: f64) -> (Point, Point) {
    let y = cell.center_y();
    (
        Point::new(cell.x + margin, y),
        Point::new(cell.right() - margin, y),
    )
}

// =============================================================================
// Week Grid
// =============================================================================

/// Resolved weekly page with `column_count` equal day columns
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekGridGeometry {
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    pub column_count: usize,
    pub col_width: f64,
    pub label_margin: f64,
    pub label_height: f64,
    pub label_top_offset: f64,
    pub writing_line_top_offset: f64,
    pub writing_line_bottom_margin: f64,
    pub writing_line_horizontal_margin: f64,
    pub writing_line_step: f64,
}

impl WeekGridGeometry {
    pub fn compute(profile: &RenderProfile, column_count: usize) -> Result<Self> {
        if column_count < 1 {
            return Err(LayoutError::validation("column_count must be >= 1."));
        }
        let region = WeekRegion::of(profile);
        Ok(Self {
            start_x: region.start_x,
            start_y: region.start_y,
            width: region.width,
            height: region.height,
            column_count,
            col_width: region.column_width(column_count),
            label_margin: WEEK_LABEL_MARGIN,
            label_height: WEEK_LABEL_HEIGHT,
            label_top_offset: WEEK_LABEL_TOP_OFFSET,
            writing_line_top_offset: WEEK_WRITING_LINE_TOP_OFFSET,
            writing_line_bottom_margin: WEEK_WRITING_LINE_BOTTOM_MARGIN,
            writing_line_horizontal_margin: WEEK_WRITING_LINE_HORIZONTAL_MARGIN,
            writing_line_step: WEEK_WRITING_LINE_STEP,
        })
    }

    /// Full-height column for position `col`
    pub fn column_rect(&self, col: usize) -> Result<Rect> {
        check_index("col_idx", col, self.column_count)?;
        Ok(Rect::new(
            self.start_x + col as f64 * self.col_width,
            self.start_y - self.height,
            self.col_width,
            self.height,
        ))
    }

    /// Day-number badge near the top of a column
    pub fn day_label_rect(&self, column: &Rect) -> Rect {
        let label_top = self.start_y - self.label_top_offset;
        Rect::new(
            column.x + self.label_margin,
            label_top - self.label_height,
            column.width - 2.0 * self.label_margin,
            self.label_height,
        )
    }

    /// Writing line heights in a column, top to bottom
    pub fn writing_line_y_positions(&self, column: &Rect) -> Vec<f64> {
        let min_y = column.y + self.writing_line_bottom_margin;
        let mut positions = Vec::new();
        let mut y = self.start_y - self.writing_line_top_offset;
        while y >= min_y {
            positions.push(y);
            y -= self.writing_line_step;
        }
        positions
    }
}

// =============================================================================
// Daily View
// =============================================================================

/// Resolved daily page sections.
///
/// The schedule occupies the left third. The right column stacks the
/// priorities checklist above the notes grid. Layouts that hide both the
/// schedule and priorities draw one notes grid over the whole region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyViewGeometry {
    pub start_x: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub show_schedule: bool,
    pub show_priorities: bool,
    /// Notes grid pitch in device units
    pub notes_grid_step: f64,
    pub schedule_width: f64,
    pub section_gutter: f64,
    pub right_x: f64,
    pub right_width: f64,
    pub schedule_label_width: f64,
    pub schedule_x: f64,
    pub schedule_y: f64,
    pub schedule_height: f64,
    pub schedule_start_hour: u32,
    pub schedule_end_hour: u32,
    pub schedule_hour_count: usize,
    pub schedule_hour_height: f64,
    pub priorities_height: f64,
    pub priorities_y: f64,
    pub notes_y: f64,
    pub section_gap: f64,
    pub notes_top_y: f64,
    pub notes_height: f64,
    pub checklist_items: usize,
    pub checklist_item_height: f64,
    pub checklist_box_size: f64,
}

impl DailyViewGeometry {
    pub fn compute(profile: &RenderProfile) -> Self {
        let daily = &profile.layout.daily;
        let region = DailyRegion::of(profile);
        let schedule_width = region.schedule_width();
        let hour_count = (DAILY_SCHEDULE_END_HOUR - DAILY_SCHEDULE_START_HOUR) as usize;
        let priorities_height = region.total_height * DAILY_PRIORITIES_SHARE;
        let priorities_y = region.top_y - priorities_height;
        let notes_top_y = priorities_y - DAILY_SECTION_GAP;

        Self {
            start_x: region.start_x,
            top_y: region.top_y,
            bottom_y: region.bottom_y,
            total_width: region.total_width,
            total_height: region.total_height,
            show_schedule: daily.show_schedule,
            show_priorities: daily.show_priorities,
            notes_grid_step: mm_to_points(daily.notes_grid_step_mm),
            schedule_width,
            section_gutter: DAILY_SECTION_GUTTER,
            right_x: region.start_x + schedule_width + DAILY_SECTION_GUTTER,
            right_width: region.right_width(),
            schedule_label_width: DAILY_SCHEDULE_LABEL_WIDTH,
            schedule_x: region.start_x,
            schedule_y: region.bottom_y,
            schedule_height: region.total_height,
            schedule_start_hour: DAILY_SCHEDULE_START_HOUR,
            schedule_end_hour: DAILY_SCHEDULE_END_HOUR,
            schedule_hour_count: hour_count,
            schedule_hour_height: region.total_height / hour_count as f64,
            priorities_height,
            priorities_y,
            notes_y: region.bottom_y,
            section_gap: DAILY_SECTION_GAP,
            notes_top_y,
            notes_height: notes_top_y - region.bottom_y,
            checklist_items: DAILY_CHECKLIST_ITEMS,
            checklist_item_height: priorities_height / DAILY_CHECKLIST_ITEMS as f64,
            checklist_box_size: DAILY_CHECKLIST_BOX_SIZE,
        }
    }

    /// True when the page is a single full-bleed notes grid
    pub fn is_notes_only(&self) -> bool {
        !self.show_schedule && !self.show_priorities
    }

    pub fn schedule_row_bounds(&self, hour_idx: usize) -> Result<RowBounds> {
        check_index("hour_idx", hour_idx, self.schedule_hour_count)?;
        Ok(RowBounds::stacked(
            self.top_y,
            self.schedule_hour_height,
            hour_idx,
        ))
    }

    pub fn priorities_row_bounds(&self, item_idx: usize) -> Result<RowBounds> {
        check_index("item_idx", item_idx, self.checklist_items)?;
        Ok(RowBounds::stacked(
            self.priorities_y + self.priorities_height,
            self.checklist_item_height,
            item_idx,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::resolve_render_profile;

    #[test]
    fn test_badge_clamped_to_cell() {
        let cell = Rect::new(0.0, 0.0, 40.0, 100.0);
        let badge = month_day_badge_rect(&cell, 30.0, 58.0).unwrap();
        assert_eq!(badge.width, 40.0);
        assert_eq!(badge.top(), cell.top());
    }

    #[test]
    fn test_writing_line_centered() {
        let cell = Rect::new(10.0, 20.0, 100.0, 60.0);
        let (a, b) = month_writing_line_points(&cell, 10.0);
        assert_eq!(a, Point::new(20.0, 50.0));
        assert_eq!(b, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_week_lines_stay_above_column_bottom() {
        let profile = resolve_render_profile("remarkable", Some("full")).unwrap();
        let week = WeekGridGeometry::compute(&profile, 7).unwrap();
        let column = week.column_rect(0).unwrap();
        let lines = week.writing_line_y_positions(&column);
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|y| *y >= column.y + week.writing_line_bottom_margin));
        assert_eq!(lines[0], week.start_y - week.writing_line_top_offset);
    }
}
