/// Monthly page layout parameters (device units and font points)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthLayoutProfile {
    pub side_padding: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,
    pub show_week_labels: bool,
    pub weekday_label_font_size: f64,
    pub day_number_font_size: f64,
    pub day_number_box_height: f64,
    pub day_number_box_max_width: f64,
    pub week_label_width: f64,
    pub week_label_gap: f64,
    pub week_label_font_size: f64,
    pub draw_writing_line: bool,
    pub writing_line_margin: f64,
}

impl MonthLayoutProfile {
    pub const DEFAULT: Self = Self {
        side_padding: 40.0,
        top_padding: 60.0,
        bottom_padding: 150.0,
        show_week_labels: true,
        weekday_label_font_size: 18.0,
        day_number_font_size: 22.0,
        day_number_box_height: 34.0,
        day_number_box_max_width: 58.0,
        week_label_width: 24.0,
        week_label_gap: 8.0,
        week_label_font_size: 14.0,
        draw_writing_line: true,
        writing_line_margin: 10.0,
    };
}

impl Default for MonthLayoutProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Weekly page layout: each segment becomes one page per week
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekLayoutProfile {
    /// Ordered day-index groups (0 = Monday)
    pub segments: &'static [&'static [usize]],
}

impl WeekLayoutProfile {
    pub const DEFAULT: Self = Self {
        segments: &[&[0, 1, 2, 3, 4, 5, 6]],
    };
}

impl Default for WeekLayoutProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Daily page layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyLayoutProfile {
    pub show_schedule: bool,
    pub show_priorities: bool,
    /// Notes grid pitch in millimeters
    pub notes_grid_step_mm: f64,
}

impl DailyLayoutProfile {
    pub const DEFAULT: Self = Self {
        show_schedule: true,
        show_priorities: true,
        notes_grid_step_mm: 5.0,
    };
}

impl Default for DailyLayoutProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Logical planner layout density
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutProfile {
    pub name: &'static str,
    pub show_sidebar: bool,
    pub month: MonthLayoutProfile,
    pub week: WeekLayoutProfile,
    pub daily: DailyLayoutProfile,
}
