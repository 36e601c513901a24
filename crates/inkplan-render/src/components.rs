//! Planner page widgets: sidebar, header, breadcrumbs, navigation badges,
//! and the month, week, and day bodies.
//!
//! Every widget takes the drawing surface, the resolved [`RenderProfile`],
//! and the [`Theme`]. Geometry comes from `inkplan-layout`; this module only
//! decides what to paint where.

use std::collections::HashMap;

use chrono::NaiveDate;
use inkplan_layout::{
    DailyViewGeometry, MonthGridGeometry, Rect, RenderProfile, WeekGridGeometry,
    ascending_step_positions, constants::MONTH_ROWS, month_day_badge_rect,
    month_writing_line_points,
};

use crate::drawing::{DrawingPrimitives, Paint};
use crate::error::{RenderError, Result};
use crate::theme::{Color, Theme};

pub const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const BREADCRUMB_SEPARATOR: &str = " > ";

/// Weekend columns (SAT, SUN) are drawn with the accent color
fn weekday_color(theme: &Theme, weekday_idx: usize) -> Color {
    if weekday_idx >= 5 {
        theme.accent
    } else {
        theme.text_secondary
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Draw the month navigation sidebar.
///
/// `active_month` is 1-12, or 0 when no month is highlighted. Nothing is
/// drawn when the layout hides the sidebar.
pub fn draw_sidebar(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    active_month: u32,
) -> Result<()> {
    if active_month > 12 {
        return Err(RenderError::invalid(
            "active_month_idx must be between 0 and 12.",
        ));
    }
    if !profile.layout.show_sidebar {
        return Ok(());
    }

    let sidebar_width = profile.sidebar_width();
    let page_height = profile.page_height();

    pdf.set_fill_color(theme.sidebar_bg);
    pdf.rect(
        Rect::new(0.0, 0.0, sidebar_width, page_height),
        Paint::FILL,
    );

    let button_height = page_height / MONTH_LABELS.len() as f64;
    let font_size = (button_height * 0.16).floor().clamp(10.0, 24.0);

    for (index, label) in (1u32..).zip(MONTH_LABELS) {
        let y = page_height - f64::from(index) * button_height;
        let button = Rect::new(0.0, y, sidebar_width, button_height);

        if index == active_month {
            pdf.set_fill_color(theme.accent);
            pdf.rect(button, Paint::FILL);
        }

        pdf.set_fill_color(theme.sidebar_text);
        pdf.set_font(theme.font_bold, font_size);
        let text_width = pdf.string_width(label, theme.font_bold, font_size);
        pdf.draw_string(
            (sidebar_width - text_width) / 2.0,
            y + button_height / 2.0 - font_size / 3.0,
            label,
        );

        pdf.link_rect(&format!("Month_{index}"), button);
    }
    Ok(())
}

/// Draw the page title and subtitle at the content-left edge
pub fn draw_header(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    title: &str,
    subtitle: &str,
    title_size: f64,
    subtitle_size: f64,
) {
    pdf.set_fill_color(theme.text_primary);
    pdf.set_font(theme.font_header, title_size);
    pdf.draw_string(profile.content_left(), profile.page_height() - 120.0, title);

    pdf.set_fill_color(theme.accent);
    pdf.set_font(theme.font_header, subtitle_size);
    pdf.draw_string(
        profile.content_left(),
        profile.page_height() - 170.0,
        subtitle,
    );
}

/// Draw the breadcrumb trail near the top of the page.
///
/// Crumbs with a destination are drawn in the accent color and linked.
pub fn draw_breadcrumbs(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    crumbs: &[(&str, Option<&str>)],
) -> Result<()> {
    if crumbs.is_empty() {
        return Err(RenderError::invalid("crumbs cannot be empty."));
    }

    let label_size = 15.0;
    let y = profile.page_height() - 45.0;
    let mut x = profile.content_left();

    for (index, (label, destination)) in crumbs.iter().enumerate() {
        pdf.set_font(theme.font_bold, label_size);
        pdf.set_fill_color(if destination.is_some() {
            theme.accent
        } else {
            theme.text_primary
        });
        pdf.draw_string(x, y, label);
        let label_width = pdf.string_width(label, theme.font_bold, label_size);

        if let Some(destination) = destination {
            pdf.link_rect(
                destination,
                Rect::from_corners(x - 2.0, y - 2.0, x + label_width + 2.0, y + 18.0),
            );
        }

        x += label_width;
        if index + 1 < crumbs.len() {
            pdf.set_font(theme.font_regular, label_size);
            pdf.set_fill_color(theme.text_secondary);
            pdf.draw_string(x, y, BREADCRUMB_SEPARATOR);
            x += pdf.string_width(BREADCRUMB_SEPARATOR, theme.font_regular, label_size);
        }
    }
    Ok(())
}

/// Horizontal placement of a link row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Draw outlined navigation badges, each linked to its destination.
///
/// `links` pairs a label with a bookmark key. An empty row draws nothing.
pub fn draw_link_row(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    links: &[(&str, String)],
    y: f64,
    align: Align,
) {
    if links.is_empty() {
        return;
    }

    let font_size = 14.0;
    let padding = 10.0;
    let gap = 12.0;
    let widths: Vec<f64> = links
        .iter()
        .map(|(label, _)| pdf.string_width(label, theme.font_bold, font_size) + 2.0 * padding)
        .collect();
    let total_width = widths.iter().sum::<f64>() + gap * (widths.len() - 1) as f64;

    let mut x = match align {
        Align::Left => profile.content_left(),
        Align::Right => {
            let right_padding = (profile.device.margin - 10.0).max(12.0);
            profile.page_width() - right_padding - total_width
        }
    };

    for ((label, destination), width) in links.iter().zip(widths) {
        pdf.set_stroke_color(theme.accent);
        pdf.set_line_width(1.2);
        pdf.round_rect(Rect::new(x, y - 3.0, width, 22.0), 4.0, Paint::STROKE);

        pdf.set_font(theme.font_bold, font_size);
        pdf.set_fill_color(theme.accent);
        pdf.draw_centred_string(x + width / 2.0, y + 3.0, label);

        pdf.link_rect(destination, Rect::new(x, y - 3.0, width, 22.0));
        x += width + gap;
    }
}

// =============================================================================
// Month
// =============================================================================

/// Link targets for a month grid.
///
/// Week maps are keyed by 1-based row number, matching the week label shown
/// for that row.
#[derive(Debug, Clone, Default)]
pub struct MonthGridLinks {
    pub day_destinations: HashMap<u32, String>,
    pub week_destinations: HashMap<usize, String>,
    pub week_labels: HashMap<usize, String>,
}

/// Draw the 6×7 month grid.
///
/// `calendar` holds up to six Monday-first weeks where 0 marks a day outside
/// the month. Missing rows are drawn as empty cells.
pub fn draw_grid(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    calendar: &[[u32; 7]],
    links: &MonthGridLinks,
) -> Result<()> {
    if calendar.len() > MONTH_ROWS {
        return Err(RenderError::invalid(
            "calendar_matrix cannot contain more than six weeks.",
        ));
    }

    let month = &profile.layout.month;
    let geometry = MonthGridGeometry::compute(profile);

    pdf.set_font(theme.font_bold, month.weekday_label_font_size);
    for (col, weekday) in WEEKDAY_LABELS.iter().enumerate() {
        let center = geometry.weekday_label_center(col)?;
        pdf.set_fill_color(weekday_color(theme, col));
        pdf.draw_centred_string(center.x, center.y, weekday);
    }

    pdf.set_line_width(1.0);
    pdf.set_stroke_color(theme.grid_lines);

    for row in 0..MONTH_ROWS {
        let week_destination = (row < calendar.len() && month.show_week_labels)
            .then(|| links.week_destinations.get(&(row + 1)))
            .flatten();
        if let Some(week_destination) = week_destination {
            let label = links
                .week_labels
                .get(&(row + 1))
                .cloned()
                .unwrap_or_else(|| format!("W{}", row + 1));
            let strip = geometry.week_label_rect(row, month.week_label_width, month.week_label_gap)?;

            pdf.set_stroke_color(theme.grid_lines);
            pdf.set_line_width(0.8);
            pdf.rect(strip, Paint::STROKE);

            pdf.save_state();
            pdf.translate(strip.center_x(), strip.center_y());
            pdf.rotate(90.0);
            pdf.set_font(theme.font_bold, month.week_label_font_size);
            pdf.set_fill_color(theme.accent);
            pdf.draw_centred_string(0.0, -5.0, &label);
            pdf.restore_state();

            pdf.link_rect(week_destination, strip);
        }

        let week = calendar.get(row).copied().unwrap_or([0; 7]);
        for (col, day) in week.into_iter().enumerate() {
            let cell = geometry.cell_rect(row, col)?;
            pdf.set_stroke_color(theme.grid_lines);
            pdf.rect(cell, Paint::STROKE);

            if day == 0 {
                continue;
            }

            let badge = month_day_badge_rect(
                &cell,
                month.day_number_box_height,
                month.day_number_box_max_width,
            )?;
            pdf.set_fill_color(theme.link_badge_bg);
            pdf.set_stroke_color(theme.grid_lines);
            pdf.set_line_width(0.8);
            pdf.rect(badge, Paint::FILL_STROKE);

            pdf.set_fill_color(theme.text_primary);
            pdf.set_font(theme.font_bold, month.day_number_font_size);
            pdf.draw_centred_string(badge.center_x(), badge.y + 10.0, &day.to_string());

            if month.draw_writing_line {
                let (start, end) = month_writing_line_points(&cell, month.writing_line_margin);
                pdf.set_stroke_color(theme.writing_lines);
                pdf.line(start.x, start.y, end.x, end.y);
            }

            if let Some(destination) = links.day_destinations.get(&day) {
                pdf.link_rect(destination, badge);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Week
// =============================================================================

/// Draw one week page body.
///
/// `week` holds the seven Monday-first day numbers (0 = outside the month).
/// `day_indexes` selects which weekdays get a column; `None` means all seven.
pub fn draw_week_grid(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    week: &[u32; 7],
    day_destinations: &HashMap<u32, String>,
    day_indexes: Option<&[usize]>,
) -> Result<()> {
    const ALL_DAYS: [usize; 7] = [0, 1, 2, 3, 4, 5, 6];
    let indexes = day_indexes.unwrap_or(&ALL_DAYS);
    if indexes.is_empty() {
        return Err(RenderError::invalid("day_indexes cannot be empty."));
    }
    if indexes.iter().any(|idx| *idx > 6) {
        return Err(RenderError::invalid(
            "day_indexes values must be between 0 and 6.",
        ));
    }

    let geometry = WeekGridGeometry::compute(profile, indexes.len())?;

    for (col, &weekday_idx) in indexes.iter().enumerate() {
        let day = week[weekday_idx];
        let column = geometry.column_rect(col)?;

        pdf.set_stroke_color(theme.grid_lines);
        pdf.set_line_width(1.0);
        pdf.rect(column, Paint::STROKE);

        if day == 0 {
            pdf.set_fill_color(theme.text_secondary);
            pdf.set_font(theme.font_regular, 18.0);
            pdf.draw_centred_string(column.center_x(), column.center_y(), "-");
            continue;
        }

        let label = geometry.day_label_rect(&column);
        let label_top = geometry.start_y - geometry.label_top_offset;
        let destination = day_destinations.get(&day);

        if destination.is_some() {
            // Outline hints that the label is tappable
            pdf.set_stroke_color(theme.grid_lines);
            pdf.set_line_width(0.8);
            pdf.round_rect(label, 5.0, Paint::STROKE);
        }

        pdf.set_fill_color(weekday_color(theme, weekday_idx));
        pdf.set_font(theme.font_bold, 13.0);
        pdf.draw_centred_string(label.center_x(), label_top - 18.0, WEEKDAY_LABELS[weekday_idx]);

        pdf.set_fill_color(theme.text_primary);
        pdf.set_font(theme.font_bold, 22.0);
        pdf.draw_centred_string(label.center_x(), label_top - 43.0, &format!("{day:02}"));

        pdf.set_stroke_color(theme.writing_lines);
        let margin = geometry.writing_line_horizontal_margin;
        for y in geometry.writing_line_y_positions(&column) {
            pdf.line(column.x + margin, y, column.right() - margin, y);
        }

        if let Some(destination) = destination {
            pdf.link_rect(destination, label);
        }
    }
    Ok(())
}

// =============================================================================
// Day
// =============================================================================

/// Square notes grid inside `area`, lines strictly inside the border
fn draw_notes_grid(pdf: &mut dyn DrawingPrimitives, theme: &Theme, area: Rect, step: f64) -> Result<()> {
    pdf.set_stroke_color(theme.grid_lines);
    pdf.set_line_width(1.0);
    pdf.rect(area, Paint::STROKE);

    pdf.set_stroke_color(theme.writing_lines);
    pdf.set_line_width(0.35);
    for x in ascending_step_positions(area.x, area.right(), step, false, false)? {
        pdf.line(x, area.y, x, area.top());
    }
    for y in ascending_step_positions(area.y, area.top(), step, false, false)? {
        pdf.line(area.x, y, area.right(), y);
    }
    Ok(())
}

fn draw_section_title(pdf: &mut dyn DrawingPrimitives, theme: &Theme, x: f64, y: f64, title: &str) {
    pdf.set_fill_color(theme.text_primary);
    pdf.set_font(theme.font_bold, 18.0);
    pdf.draw_string(x, y, title);
}

fn draw_date_note(pdf: &mut dyn DrawingPrimitives, theme: &Theme, right: f64, y: f64, date: NaiveDate) {
    pdf.set_fill_color(theme.text_secondary);
    pdf.set_font(theme.font_regular, 12.0);
    pdf.draw_right_string(right, y, &date.format("%Y-%m-%d").to_string());
}

/// Draw the daily page body: hourly schedule, priorities checklist, and
/// notes grid, or a single notes grid when the layout hides both sections.
pub fn draw_daily_view(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    page_date: NaiveDate,
) -> Result<()> {
    let g = DailyViewGeometry::compute(profile);

    if g.is_notes_only() {
        let title_y = g.top_y + 12.0;
        draw_section_title(pdf, theme, g.start_x, title_y, "NOTES");
        draw_date_note(pdf, theme, g.start_x + g.total_width, title_y, page_date);
        let area = Rect::new(g.start_x, g.bottom_y, g.total_width, g.total_height);
        return draw_notes_grid(pdf, theme, area, g.notes_grid_step);
    }

    // Schedule: hour labels with half-hour guide lines
    pdf.set_stroke_color(theme.grid_lines);
    pdf.set_line_width(1.0);
    pdf.rect(
        Rect::new(g.schedule_x, g.schedule_y, g.schedule_width, g.schedule_height),
        Paint::STROKE,
    );
    let label_right = g.schedule_x + g.schedule_label_width;
    pdf.line(label_right, g.schedule_y, label_right, g.schedule_y + g.schedule_height);

    draw_section_title(pdf, theme, g.schedule_x, g.top_y + 12.0, "SCHEDULE");

    let schedule_right = g.schedule_x + g.schedule_width;
    for hour_idx in 0..g.schedule_hour_count {
        let row = g.schedule_row_bounds(hour_idx)?;
        let hour = g.schedule_start_hour as usize + hour_idx;

        pdf.set_fill_color(theme.text_secondary);
        pdf.set_font(theme.font_bold, 12.0);
        pdf.draw_centred_string(
            g.schedule_x + g.schedule_label_width / 2.0,
            row.top - 14.0,
            &format!("{hour:02}"),
        );

        pdf.set_stroke_color(theme.grid_lines);
        pdf.line(g.schedule_x, row.bottom, schedule_right, row.bottom);
        pdf.set_stroke_color(theme.writing_lines);
        pdf.line(label_right, row.center, schedule_right, row.center);
    }

    // Priorities checklist
    let right_edge = g.right_x + g.right_width;
    draw_section_title(pdf, theme, g.right_x, g.top_y + 12.0, "PRIORITIES");
    pdf.set_stroke_color(theme.grid_lines);
    pdf.set_line_width(1.0);
    pdf.rect(
        Rect::new(g.right_x, g.priorities_y, g.right_width, g.priorities_height),
        Paint::STROKE,
    );

    for item_idx in 0..g.checklist_items {
        let row = g.priorities_row_bounds(item_idx)?;
        if item_idx > 0 {
            pdf.set_stroke_color(theme.writing_lines);
            pdf.line(g.right_x, row.top, right_edge, row.top);
        }

        let box_x = g.right_x + 10.0;
        let box_y = row.center - g.checklist_box_size / 2.0;
        pdf.set_stroke_color(theme.accent);
        pdf.rect(
            Rect::new(box_x, box_y, g.checklist_box_size, g.checklist_box_size),
            Paint::STROKE,
        );

        pdf.set_stroke_color(theme.writing_lines);
        pdf.line(box_x + g.checklist_box_size + 12.0, row.center, right_edge - 10.0, row.center);
        pdf.line(g.right_x, row.bottom, right_edge, row.bottom);
    }

    // Notes
    let notes_title_y = g.notes_top_y + 8.0;
    draw_section_title(pdf, theme, g.right_x, notes_title_y, "NOTES");
    draw_date_note(pdf, theme, right_edge, notes_title_y, page_date);
    let area = Rect::new(g.right_x, g.notes_y, g.right_width, g.notes_height);
    draw_notes_grid(pdf, theme, area, g.notes_grid_step)
}
