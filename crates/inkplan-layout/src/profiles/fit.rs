//! Layout fit evaluation against device thresholds

use super::RenderProfile;
use crate::constants::DAYS_PER_WEEK;
use crate::geometry::{DailyRegion, MonthRegion, WeekRegion};

/// Return the reasons a profile is unusable on its device.
///
/// An empty result means the profile fits. Month, week, and daily regions
/// are checked independently, so one failing region does not hide issues
/// in another.
pub fn evaluate_render_profile_fit(profile: &RenderProfile) -> Vec<String> {
    let mut issues = Vec::new();
    check_month(profile, &mut issues);
    check_week(profile, &mut issues);
    check_daily(profile, &mut issues);

    if profile.layout.daily.notes_grid_step_mm <= 0.0 {
        issues.push("daily notes grid step must be positive".to_string());
    }
    issues
}

fn check_month(profile: &RenderProfile, issues: &mut Vec<String>) {
    let device = &profile.device;
    let month = &profile.layout.month;
    let region = MonthRegion::of(profile);
    if !region.is_positive() {
        issues.push("monthly grid area is non-positive".to_string());
        return;
    }

    let col_width = region.col_width();
    let row_height = region.row_height();
    if col_width < device.min_month_cell_width {
        issues.push(format!(
            "monthly cell width {col_width:.1} < {}",
            device.min_month_cell_width
        ));
    }
    if row_height < device.safe_tap_min {
        issues.push(format!(
            "monthly cell height {row_height:.1} < {}",
            device.safe_tap_min
        ));
    }
    let badge_width = month.day_number_box_max_width.min(col_width);
    if badge_width < device.safe_tap_min {
        issues.push(format!(
            "monthly day badge width {badge_width:.1} < {}",
            device.safe_tap_min
        ));
    }
    if month.day_number_box_height < device.safe_tap_min {
        issues.push(format!(
            "monthly day badge height {} < {}",
            month.day_number_box_height, device.safe_tap_min
        ));
    }
}

fn check_week(profile: &RenderProfile, issues: &mut Vec<String>) {
    let device = &profile.device;
    let region = WeekRegion::of(profile);
    if !region.is_positive() {
        issues.push("weekly grid area is non-positive".to_string());
        return;
    }

    for segment in profile.layout.week.segments {
        if segment.is_empty() {
            issues.push("weekly segment cannot be empty".to_string());
            continue;
        }
        if segment.iter().any(|&idx| idx >= DAYS_PER_WEEK) {
            issues.push("weekly segment indexes must be between 0 and 6".to_string());
            continue;
        }
        let col_width = region.column_width(segment.len());
        if col_width < device.min_week_column_width {
            issues.push(format!(
                "weekly column width {col_width:.1} < {}",
                device.min_week_column_width
            ));
        }
        let label_width = WeekRegion::day_label_width(col_width);
        if label_width < device.safe_tap_min {
            issues.push(format!(
                "weekly day badge width {label_width:.1} < {}",
                device.safe_tap_min
            ));
        }
    }
}

fn check_daily(profile: &RenderProfile, issues: &mut Vec<String>) {
    let device = &profile.device;
    let daily = &profile.layout.daily;
    let region = DailyRegion::of(profile);
    if !region.is_positive() {
        issues.push("daily view area is non-positive".to_string());
        return;
    }

    let min_section = device.min_daily_section_width;
    if daily.show_schedule {
        let schedule_width = region.schedule_width();
        let right_width = region.right_width();
        let writable = region.schedule_writable_width();
        if schedule_width < min_section {
            issues.push(format!(
                "daily schedule section width {schedule_width:.1} < {min_section}"
            ));
        }
        if right_width < min_section {
            issues.push(format!(
                "daily notes section width {right_width:.1} < {min_section}"
            ));
        }
        if writable < device.safe_tap_min {
            issues.push(format!(
                "daily schedule writable width {writable:.1} < {}",
                device.safe_tap_min
            ));
        }
    } else if daily.show_priorities && region.total_width < min_section {
        issues.push(format!(
            "daily priorities section width {:.1} < {min_section}",
            region.total_width
        ));
    }
}
