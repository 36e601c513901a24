//! Shared constants for planner page geometry
//!
//! Offsets are in device units unless noted otherwise.

// =============================================================================
// Month Grid
// =============================================================================

/// Columns in the month grid (Monday..Sunday)
pub const MONTH_COLUMNS: usize = 7;

/// Rows in the month grid; months never span more than six weeks
pub const MONTH_ROWS: usize = 6;

/// Weekday labels sit this far above the grid top
pub const MONTH_WEEKDAY_LABEL_Y_OFFSET: f64 = 20.0;

// =============================================================================
// Week Grid
// =============================================================================

/// Days in a week; segment indexes live in `0..DAYS_PER_WEEK`
pub const DAYS_PER_WEEK: usize = 7;

pub const WEEK_SIDE_INSET: f64 = 40.0;
pub const WEEK_TOP_INSET: f64 = 80.0;
pub const WEEK_VERTICAL_RESERVE: f64 = 260.0;

pub const WEEK_LABEL_MARGIN: f64 = 8.0;
pub const WEEK_LABEL_HEIGHT: f64 = 56.0;
pub const WEEK_LABEL_TOP_OFFSET: f64 = 10.0;

pub const WEEK_WRITING_LINE_TOP_OFFSET: f64 = 82.0;
pub const WEEK_WRITING_LINE_BOTTOM_MARGIN: f64 = 16.0;
pub const WEEK_WRITING_LINE_HORIZONTAL_MARGIN: f64 = 8.0;
pub const WEEK_WRITING_LINE_STEP: f64 = 30.0;

// =============================================================================
// Daily View
// =============================================================================

pub const DAILY_SIDE_INSET: f64 = 40.0;
pub const DAILY_TOP_INSET: f64 = 90.0;
pub const DAILY_BOTTOM_Y: f64 = 110.0;

pub const DAILY_SECTION_GUTTER: f64 = 16.0;
pub const DAILY_SECTION_GAP: f64 = 28.0;

/// Width of the hour label column in the schedule section
pub const DAILY_SCHEDULE_LABEL_WIDTH: f64 = 42.0;
pub const DAILY_SCHEDULE_START_HOUR: u32 = 6;
pub const DAILY_SCHEDULE_END_HOUR: u32 = 22;

/// Fraction of the daily height given to the priorities checklist
pub const DAILY_PRIORITIES_SHARE: f64 = 0.25;
pub const DAILY_CHECKLIST_ITEMS: usize = 6;
pub const DAILY_CHECKLIST_BOX_SIZE: f64 = 13.0;

// =============================================================================
// Template Bodies
// =============================================================================

/// Working hours highlighted on the schedule template
pub const WORK_START_HOUR: u32 = 9;
pub const WORK_END_HOUR: u32 = 18;

/// Fixed priorities rows in the compact day-at-glance layout
pub const COMPACT_PRIORITIES_ROWS: usize = 5;
