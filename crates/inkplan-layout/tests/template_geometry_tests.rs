use inkplan_layout::*;

struct Frame {
    device: DeviceProfile,
    layout: TemplateLayoutProfile,
    bounds: ContentBounds,
    header_bottom: f64,
}

fn frame(device: &str, layout: Option<&str>) -> Frame {
    let device_profile = *device_profile(device).unwrap();
    let layout =
        resolve_template_layout(device, layout, &TemplateLayoutOverrides::default()).unwrap();
    let bounds = content_bounds(&device_profile, &layout).unwrap();
    let header_bottom = header_bottom(&device_profile, &layout, &bounds).unwrap();
    Frame {
        device: device_profile,
        layout,
        bounds,
        header_bottom,
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

#[test]
fn test_content_bounds_inset_by_margin() {
    let f = frame("remarkable", Some("balanced"));
    let margin = mm_to_units(10.0, 226.0).unwrap();
    assert_close(f.bounds.left, margin);
    assert_close(f.bounds.top, 1872.0 - margin);
    assert_close(f.header_bottom, f.bounds.top - margin);
}

#[test]
fn test_schedule_highlight_within_body() {
    let f = frame("remarkable", Some("balanced"));
    let schedule =
        ScheduleGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom, 9, 18)
            .unwrap();
    assert_eq!(schedule.hours.len(), 17);
    let highlight = schedule.highlight_rect.unwrap();
    assert!(highlight.y >= schedule.body.y);
    assert!(highlight.top() <= schedule.body.top());
    // Hours 9..=18 are ten rows
    assert_close(highlight.height, 10.0 * schedule.row_height);
    assert_close(highlight.top(), schedule.body.top() - 3.0 * schedule.row_height);
}

#[test]
fn test_schedule_highlight_omitted_outside_range() {
    let f = frame("remarkable", Some("balanced"));
    let layout = TemplateLayoutProfile {
        schedule_start_hour: 19,
        schedule_end_hour: 23,
        ..f.layout
    };
    let schedule =
        ScheduleGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom, 9, 18).unwrap();
    assert!(schedule.highlight_rect.is_none());
}

#[test]
fn test_schedule_row_bounds_validation() {
    let f = frame("remarkable", Some("balanced"));
    let schedule =
        ScheduleGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom, 9, 18)
            .unwrap();
    assert!(schedule.row_bounds(schedule.hours.len()).is_err());
    let last = schedule.row_bounds(schedule.hours.len() - 1).unwrap();
    assert_close(last.bottom, schedule.body.y);
}

#[test]
fn test_full_day_at_glance_columns() {
    let f = frame("remarkable", Some("balanced"));
    let dag = DayAtGlanceGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom)
        .unwrap();
    let width = f.bounds.width();
    let gutter = dag.right_left - dag.schedule_right;
    assert!((8.0..=18.0).contains(&gutter));
    assert_close(dag.schedule_width, width * 0.38);
    assert_close(dag.right_left + dag.right_width, f.bounds.right);
    assert_eq!(dag.hour_count, 16);
    assert_close(dag.notes_top, dag.priorities_bottom);
}

#[test]
fn test_full_day_at_glance_row_bounds_validation() {
    let f = frame("remarkable", Some("balanced"));
    let dag = DayAtGlanceGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom)
        .unwrap();
    assert!(dag.schedule_row_bounds(dag.hour_count).is_err());
    assert!(dag.priorities_row_bounds(dag.priorities_rows).is_err());
    let last = dag.priorities_row_bounds(dag.priorities_rows - 1).unwrap();
    assert_close(last.bottom, dag.priorities_bottom);
}

#[test]
fn test_compact_geometry_clamps_notes_to_minimum() {
    let f = frame("remarkable", Some("balanced"));
    let bounds = ContentBounds {
        left: 0.0,
        bottom: 0.0,
        right: 900.0,
        top: 800.0,
    };
    let compact =
        DayAtGlanceCompactGeometry::compute(&f.device, &f.layout, &bounds, 740.0).unwrap();
    let min_notes = pt_to_units(110.0, 226.0).unwrap();
    assert_close(compact.notes_top - compact.notes_bottom, min_notes);
    assert_close(compact.priorities_top, 740.0);
    assert_close(compact.label_left, 900.0 - compact.label_strip_width);
}

#[test]
fn test_compact_row_bounds_validation() {
    let f = frame("palma", None);
    let compact =
        DayAtGlanceCompactGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom)
            .unwrap();
    // Palma overrides the schedule to 9..19, end hour excluded
    assert_eq!(compact.schedule_hours, (9..19).collect::<Vec<_>>());
    assert!(compact.priorities_row_bounds(compact.priorities_rows).is_err());
    assert!(compact.schedule_row_bounds(compact.schedule_hours.len()).is_err());
    let last = compact.schedule_row_bounds(compact.schedule_hours.len() - 1).unwrap();
    assert_close(last.bottom, compact.schedule_bottom);
}

#[test]
fn test_checklist_rows() {
    let f = frame("remarkable", Some("balanced"));
    let checklist =
        ChecklistGeometry::compute(&f.device, &f.layout, &f.bounds, f.header_bottom).unwrap();
    assert_eq!(checklist.rows, 18);
    assert!(checklist.box_size <= checklist.row_height * 0.45 + 1e-9);
    assert!(checklist.row_bounds(checklist.rows).is_err());
    match checklist.row_bounds(18) {
        Err(LayoutError::Validation(msg)) => assert_eq!(msg, "index must be between 0 and 17."),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_template_geometry_rejects_inverted_schedule() {
    let f = frame("remarkable", Some("balanced"));
    let layout = TemplateLayoutProfile {
        schedule_start_hour: 20,
        schedule_end_hour: 8,
        ..f.layout
    };
    let expected = "template schedule end hour must be greater than start hour.";
    match DayAtGlanceGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom) {
        Err(LayoutError::Validation(msg)) => assert_eq!(msg, expected),
        other => panic!("Expected Validation error, got {other:?}"),
    }
    assert!(
        DayAtGlanceCompactGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom)
            .is_err()
    );
    assert!(
        ScheduleGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom, 9, 18).is_err()
    );
}

#[test]
fn test_checklist_rejects_zero_rows() {
    let f = frame("remarkable", Some("balanced"));
    let layout = TemplateLayoutProfile {
        checklist_rows: 0,
        ..f.layout
    };
    assert!(ChecklistGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom).is_err());
}

#[test]
fn test_non_finite_millimeter_sizes_rejected() {
    let layout = TemplateLayoutProfile {
        dot_radius_mm: f64::NAN,
        ..TemplateLayoutProfile::DEFAULT
    };
    match layout.validate() {
        Err(LayoutError::Validation(msg)) => {
            assert_eq!(msg, "template dot radius must be a finite number.")
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_spacing_overflowing_device_units_rejected() {
    let overrides = TemplateLayoutOverrides {
        line_spacing_mm: Some(1e308),
        ..TemplateLayoutOverrides::default()
    };
    // Finite in millimeters, infinite once scaled to device units
    let layout = TemplateLayoutProfile::DEFAULT.with_overrides(&overrides);
    assert!(layout.validate().is_ok());

    match resolve_template_layout("remarkable", None, &overrides) {
        Err(LayoutError::Validation(msg)) => assert_eq!(
            msg,
            "template line spacing is too large for device 'reMarkable 2'."
        ),
        other => panic!("Expected Validation error, got {other:?}"),
    }

    let f = frame("remarkable", Some("balanced"));
    assert!(
        DayAtGlanceGeometry::compute(&f.device, &layout, &f.bounds, f.header_bottom).is_err()
    );
}
