//! Planner page regions
//!
//! These are the raw region dimensions a planner page is carved from.
//! The fit evaluator checks them against device thresholds and the
//! geometry builders subdivide them, so both always agree.

use crate::constants::*;
use crate::profiles::RenderProfile;

/// Area available to the monthly calendar grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthRegion {
    pub start_x: f64,
    /// Top edge of the grid
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
}

impl MonthRegion {
    pub fn of(profile: &RenderProfile) -> Self {
        let month = &profile.layout.month;
        Self {
            start_x: profile.sidebar_width() + month.side_padding,
            start_y: profile.page_height() - profile.header_height() - month.top_padding,
            width: profile.page_width() - profile.sidebar_width() - 2.0 * month.side_padding,
            height: profile.page_height() - profile.header_height() - month.bottom_padding,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn col_width(&self) -> f64 {
        self.width / MONTH_COLUMNS as f64
    }

    pub fn row_height(&self) -> f64 {
        self.height / MONTH_ROWS as f64
    }
}

/// Area available to the weekly day columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekRegion {
    pub start_x: f64,
    /// Top edge of the columns
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
}

impl WeekRegion {
    pub fn of(profile: &RenderProfile) -> Self {
        Self {
            start_x: profile.sidebar_width() + WEEK_SIDE_INSET,
            start_y: profile.page_height() - profile.header_height() - WEEK_TOP_INSET,
            width: profile.page_width() - profile.sidebar_width() - 2.0 * WEEK_SIDE_INSET,
            height: profile.page_height() - profile.header_height() - WEEK_VERTICAL_RESERVE,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn column_width(&self, column_count: usize) -> f64 {
        self.width / column_count as f64
    }

    /// Width of the day-number badge inside a column
    pub fn day_label_width(column_width: f64) -> f64 {
        column_width - 2.0 * WEEK_LABEL_MARGIN
    }
}

/// Area available to the daily page sections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRegion {
    pub start_x: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    pub total_width: f64,
    pub total_height: f64,
}

impl DailyRegion {
    pub fn of(profile: &RenderProfile) -> Self {
        let top_y = profile.page_height() - profile.header_height() - DAILY_TOP_INSET;
        Self {
            start_x: profile.sidebar_width() + DAILY_SIDE_INSET,
            top_y,
            bottom_y: DAILY_BOTTOM_Y,
            total_width: profile.page_width() - profile.sidebar_width() - 2.0 * DAILY_SIDE_INSET,
            total_height: top_y - DAILY_BOTTOM_Y,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.total_width > 0.0 && self.total_height > 0.0
    }

    /// Schedule column: the left third
    pub fn schedule_width(&self) -> f64 {
        self.total_width / 3.0
    }

    /// Priorities and notes column right of the schedule and gutter
    pub fn right_width(&self) -> f64 {
        self.total_width - self.schedule_width() - DAILY_SECTION_GUTTER
    }

    /// Schedule width left for writing after the hour labels
    pub fn schedule_writable_width(&self) -> f64 {
        self.schedule_width() - DAILY_SCHEDULE_LABEL_WIDTH
    }
}
