use inkplan_layout::*;

fn full_profile() -> RenderProfile {
    resolve_render_profile("remarkable", Some("full")).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

#[test]
fn test_month_geometry_uses_profile_dimensions() {
    let profile = full_profile();
    let month = MonthGridGeometry::compute(&profile);
    assert_eq!(month.start_x, 140.0 + 40.0);
    assert_eq!(month.start_y, 1872.0 - 160.0 - 60.0);
    assert_close(month.col_width * 7.0, month.width);
    assert_close(month.row_height * 6.0, month.height);
}

#[test]
fn test_month_cells_tile_the_grid() {
    let month = MonthGridGeometry::compute(&full_profile());
    for row in 0..6 {
        for col in 0..7 {
            let cell = month.cell_rect(row, col).unwrap();
            assert_close(cell.x, month.start_x + col as f64 * month.col_width);
            assert_close(cell.top(), month.start_y - row as f64 * month.row_height);
            if col < 6 {
                let next = month.cell_rect(row, col + 1).unwrap();
                assert_close(cell.right(), next.x);
            }
            if row < 5 {
                let below = month.cell_rect(row + 1, col).unwrap();
                assert_close(cell.y, below.top());
            }
        }
    }
}

#[test]
fn test_month_cell_badge_and_label() {
    let profile = full_profile();
    let month = MonthGridGeometry::compute(&profile);
    let cell = month.cell_rect(1, 2).unwrap();
    let badge = month_day_badge_rect(
        &cell,
        profile.layout.month.day_number_box_height,
        profile.layout.month.day_number_box_max_width,
    )
    .unwrap();
    let center = month.weekday_label_center(2).unwrap();

    assert_close(cell.y, month.start_y - 2.0 * month.row_height);
    assert!(badge.width <= cell.width);
    assert_close(badge.top(), cell.top());
    assert_close(center.x, month.start_x + 2.5 * month.col_width);
    assert_close(center.y, month.start_y + 20.0);
}

#[test]
fn test_month_accessors_reject_out_of_range() {
    let month = MonthGridGeometry::compute(&full_profile());
    assert!(month.cell_rect(6, 0).is_err());
    assert!(month.cell_rect(0, 7).is_err());
    assert!(month.weekday_label_center(7).is_err());
    match month.cell_rect(6, 0) {
        Err(LayoutError::Validation(msg)) => assert_eq!(msg, "row_idx must be between 0 and 5."),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_month_week_label_sits_left_of_grid() {
    let month = MonthGridGeometry::compute(&full_profile());
    let label = month.week_label_rect(3, 24.0, 8.0).unwrap();
    let cell = month.cell_rect(3, 0).unwrap();
    assert_close(label.right() + 8.0, month.start_x);
    assert_close(label.y, cell.y);
    assert_close(label.height, month.row_height);
    assert!(month.week_label_rect(0, 0.0, 8.0).is_err());
}

#[test]
fn test_badge_rejects_non_positive_sizes() {
    let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(month_day_badge_rect(&cell, 0.0, 10.0).is_err());
    assert!(month_day_badge_rect(&cell, 10.0, -1.0).is_err());
}

#[test]
fn test_week_geometry_rejects_invalid_column_count() {
    assert!(WeekGridGeometry::compute(&full_profile(), 0).is_err());
}

#[test]
fn test_week_columns_are_bounds_checked() {
    let week = WeekGridGeometry::compute(&full_profile(), 4).unwrap();
    assert!(week.column_rect(3).is_ok());
    match week.column_rect(4) {
        Err(LayoutError::Validation(msg)) => assert_eq!(msg, "col_idx must be between 0 and 3."),
        _ => panic!("Expected Validation error"),
    }
    let last = week.column_rect(3).unwrap();
    assert_close(last.right(), week.start_x + week.width);
}

#[test]
fn test_week_label_and_lines_stay_within_column() {
    let week = WeekGridGeometry::compute(&full_profile(), 7).unwrap();
    let column = week.column_rect(2).unwrap();
    let label = week.day_label_rect(&column);
    assert_close(label.x, column.x + 8.0);
    assert_close(label.width, column.width - 16.0);
    assert_close(label.top(), week.start_y - 10.0);

    let lines = week.writing_line_y_positions(&column);
    assert!(lines.windows(2).all(|w| (w[0] - w[1] - 30.0).abs() < 1e-9));
    for y in lines {
        assert!(y >= column.y + 16.0);
        assert!(y <= column.top());
    }
}

#[test]
fn test_daily_geometry_uses_compact_profile_flags() {
    let profile = resolve_render_profile("palma", Some("compact")).unwrap();
    let daily = DailyViewGeometry::compute(&profile);
    assert!(!daily.show_schedule);
    assert!(!daily.show_priorities);
    assert!(daily.is_notes_only());
    assert_close(daily.notes_grid_step, mm_to_points(6.0));
}

#[test]
fn test_daily_sections() {
    let daily = DailyViewGeometry::compute(&full_profile());
    assert_eq!(daily.schedule_hour_count, 16);
    assert_close(daily.schedule_width * 3.0, daily.total_width);
    assert_close(daily.right_x + daily.right_width, daily.start_x + daily.total_width);
    assert_close(daily.priorities_y + daily.priorities_height, daily.top_y);
    assert_close(daily.notes_top_y, daily.priorities_y - 28.0);

    let first = daily.schedule_row_bounds(0).unwrap();
    let last = daily.schedule_row_bounds(15).unwrap();
    assert_close(first.top, daily.top_y);
    assert_close(last.bottom, daily.bottom_y);
    assert_close(first.center, first.top - daily.schedule_hour_height / 2.0);
}

#[test]
fn test_daily_row_bounds_validation() {
    let daily = DailyViewGeometry::compute(&full_profile());
    assert!(daily.schedule_row_bounds(daily.schedule_hour_count).is_err());
    assert!(daily.schedule_row_bounds(usize::MAX).is_err());
    assert!(daily.priorities_row_bounds(daily.checklist_items).is_err());

    let last = daily.priorities_row_bounds(5).unwrap();
    assert_close(last.bottom, daily.priorities_y);
}
