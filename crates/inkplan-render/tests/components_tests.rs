use std::collections::HashMap;

use chrono::NaiveDate;
use inkplan_layout::{Rect, RenderProfile, resolve_render_profile};
use inkplan_render::components::*;
use inkplan_render::*;

/// Records the calls the components make
#[derive(Default)]
struct Recorder {
    strings: Vec<String>,
    links: Vec<(String, Rect)>,
    rects: usize,
    fills: Vec<Color>,
    rotations: usize,
}

impl DrawingPrimitives for Recorder {
    fn set_fill_color(&mut self, color: Color) {
        self.fills.push(color);
    }
    fn set_stroke_color(&mut self, _color: Color) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn set_font(&mut self, _font: &str, _size: f64) {}
    fn draw_string(&mut self, _x: f64, _y: f64, text: &str) {
        self.strings.push(text.to_string());
    }
    fn draw_centred_string(&mut self, _x: f64, _y: f64, text: &str) {
        self.strings.push(text.to_string());
    }
    fn draw_right_string(&mut self, _x: f64, _y: f64, text: &str) {
        self.strings.push(text.to_string());
    }
    fn line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) {}
    fn rect(&mut self, _rect: Rect, _paint: Paint) {
        self.rects += 1;
    }
    fn round_rect(&mut self, _rect: Rect, _radius: f64, _paint: Paint) {
        self.rects += 1;
    }
    fn circle(&mut self, _x: f64, _y: f64, _radius: f64, _paint: Paint) {}
    fn link_rect(&mut self, destination: &str, rect: Rect) {
        self.links.push((destination.to_string(), rect));
    }
    fn bookmark_page(&mut self, _key: &str) {}
    fn add_outline_entry(&mut self, _title: &str, _key: &str, _level: usize) {}
    fn save_state(&mut self) {}
    fn restore_state(&mut self) {}
    fn translate(&mut self, _x: f64, _y: f64) {}
    fn rotate(&mut self, _degrees: f64) {
        self.rotations += 1;
    }
    fn set_title(&mut self, _title: &str) {}
    fn show_page(&mut self) {}
}

fn profile(layout: &str) -> RenderProfile {
    resolve_render_profile("remarkable", Some(layout)).unwrap()
}

#[test]
fn test_sidebar_links_every_month() {
    let mut pdf = Recorder::default();
    let theme = Theme::default();
    draw_sidebar(&mut pdf, &profile("full"), &theme, 3).unwrap();

    let destinations: Vec<&str> = pdf.links.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(destinations.len(), 12);
    assert_eq!(destinations[0], "Month_1");
    assert_eq!(destinations[11], "Month_12");
    assert!(pdf.strings.contains(&"MAR".to_string()));
    assert!(pdf.fills.contains(&theme.accent));
}

#[test]
fn test_sidebar_hidden_and_validated() {
    let mut pdf = Recorder::default();
    draw_sidebar(&mut pdf, &profile("compact"), &Theme::default(), 1).unwrap();
    assert!(pdf.links.is_empty());
    assert_eq!(pdf.rects, 0);

    let err = draw_sidebar(&mut pdf, &profile("full"), &Theme::default(), 13).unwrap_err();
    assert_eq!(err.to_string(), "active_month_idx must be between 0 and 12.");
}

#[test]
fn test_breadcrumbs_link_only_targets() {
    let mut pdf = Recorder::default();
    let theme = Theme::default();
    draw_breadcrumbs(
        &mut pdf,
        &profile("full"),
        &theme,
        &[("2026", Some("Cover")), ("JAN", Some("Month_1")), ("W01", None)],
    )
    .unwrap();

    assert_eq!(pdf.links.len(), 2);
    assert_eq!(pdf.links[1].0, "Month_1");
    assert_eq!(
        pdf.strings,
        vec!["2026", " > ", "JAN", " > ", "W01"]
    );
    assert!(draw_breadcrumbs(&mut pdf, &profile("full"), &theme, &[]).is_err());
}

#[test]
fn test_link_row_right_alignment_ends_near_page_edge() {
    let mut pdf = Recorder::default();
    let profile = profile("full");
    let links = [("PREV", "Day_1".to_string()), ("NEXT", "Day_2".to_string())];
    draw_link_row(&mut pdf, &profile, &Theme::default(), &links, 100.0, Align::Right);

    assert_eq!(pdf.links.len(), 2);
    let right_padding = (profile.device.margin - 10.0).max(12.0);
    let last = pdf.links[1].1;
    assert!((last.right() - (profile.page_width() - right_padding)).abs() < 1e-6);
    assert!(pdf.links[0].1.right() < last.x);

    let mut empty = Recorder::default();
    draw_link_row(&mut empty, &profile, &Theme::default(), &[], 100.0, Align::Left);
    assert_eq!(empty.rects, 0);
}

#[test]
fn test_month_grid_links_days_and_weeks() {
    let mut pdf = Recorder::default();
    let calendar = vec![[0, 0, 0, 1, 2, 3, 4], [5, 6, 7, 8, 9, 10, 11]];
    let mut links = MonthGridLinks::default();
    links.day_destinations.insert(1, "Day_1".into());
    links.day_destinations.insert(9, "Day_9".into());
    links.week_destinations.insert(2, "Week_1_2".into());
    links.week_labels.insert(2, "W02".into());

    draw_grid(&mut pdf, &profile("full"), &Theme::default(), &calendar, &links).unwrap();

    let destinations: Vec<&str> = pdf.links.iter().map(|(d, _)| d.as_str()).collect();
    assert!(destinations.contains(&"Day_1"));
    assert!(destinations.contains(&"Day_9"));
    assert!(destinations.contains(&"Week_1_2"));
    for weekday in WEEKDAY_LABELS {
        assert!(pdf.strings.contains(&weekday.to_string()));
    }
    assert!(pdf.strings.contains(&"11".to_string()));
}

#[test]
fn test_month_grid_rejects_seven_weeks() {
    let mut pdf = Recorder::default();
    let calendar = vec![[1; 7]; 7];
    let err = draw_grid(
        &mut pdf,
        &profile("full"),
        &Theme::default(),
        &calendar,
        &MonthGridLinks::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "calendar_matrix cannot contain more than six weeks.");
}

#[test]
fn test_week_grid_blank_days_and_validation() {
    let mut pdf = Recorder::default();
    let week = [0, 0, 0, 1, 2, 3, 4];
    let mut destinations = HashMap::new();
    destinations.insert(1, "Day_2026_01_01".to_string());

    draw_week_grid(
        &mut pdf,
        &profile("full"),
        &Theme::default(),
        &week,
        &destinations,
        None,
    )
    .unwrap();
    assert!(pdf.strings.contains(&"-".to_string()));
    assert_eq!(pdf.links.len(), 1);

    let theme = Theme::default();
    let full = profile("full");
    assert!(draw_week_grid(&mut pdf, &full, &theme, &week, &destinations, Some(&[])).is_err());
    let err = draw_week_grid(&mut pdf, &full, &theme, &week, &destinations, Some(&[0, 7]))
        .unwrap_err();
    assert_eq!(err.to_string(), "day_indexes values must be between 0 and 6.");
}

#[test]
fn test_daily_view_writes_iso_date() {
    let mut pdf = Recorder::default();
    let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    draw_daily_view(&mut pdf, &profile("full"), &Theme::default(), date).unwrap();
    assert!(pdf.strings.iter().any(|s| s.contains("2026-03-07")));
}
