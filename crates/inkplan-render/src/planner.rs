//! Yearly planner: cover, month overviews, week pages, and day pages
//!
//! The year is planned up front ([`plan_year`]) so every page can link to
//! pages that are drawn later. Pages are emitted in the order cover, the
//! twelve months, every week segment, then every day.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use inkplan_layout::{DEFAULT_DEVICE, RenderProfile, resolve_fitted_render_profile};
use log::{debug, info};

use crate::components::{
    Align, MonthGridLinks, WEEKDAY_LABELS, draw_breadcrumbs, draw_daily_view, draw_grid,
    draw_header, draw_link_row, draw_sidebar, draw_week_grid,
};
use crate::drawing::DrawingPrimitives;
use crate::error::{RenderError, Result};
use crate::pdf::PdfCanvas;
use crate::theme::Theme;

pub const DEFAULT_YEAR: i32 = 2026;

static ALL_DAYS: [usize; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Planner generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOptions {
    pub year: i32,
    pub device: String,
    /// Requested layout; `None` uses the device default
    pub layout: Option<String>,
    /// Fail instead of falling back to a denser layout
    pub strict_layout: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            device: DEFAULT_DEVICE.to_string(),
            layout: None,
            strict_layout: false,
        }
    }
}

impl PlannerOptions {
    pub fn resolve_profile(&self) -> Result<RenderProfile> {
        validate_year(self.year)?;
        let resolution =
            resolve_fitted_render_profile(&self.device, self.layout.as_deref(), self.strict_layout)?;
        Ok(resolution.profile)
    }

    /// Output file name used when no path is given
    pub fn default_file_name(&self) -> String {
        format!("planner_{}.pdf", self.year)
    }
}

// =============================================================================
// Calendar
// =============================================================================

fn validate_year(year: i32) -> Result<()> {
    if year < 1 {
        return Err(RenderError::invalid("year must be >= 1."));
    }
    Ok(())
}

fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(RenderError::invalid("month must be between 1 and 12."));
    }
    Ok(())
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| RenderError::invalid(format!("year {year} is out of range.")))
}

fn date_of(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| RenderError::invalid(format!("{year}-{month:02}-{day:02} is not a date.")))
}

/// Number of days in `month` of `year`
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    validate_year(year)?;
    validate_month(month)?;
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Monday-first weeks of a month; days outside the month are 0
pub fn month_matrix(year: i32, month: u32) -> Result<Vec<[u32; 7]>> {
    let days = days_in_month(year, month)?;
    let first = first_of_month(year, month)?;

    let mut weeks = Vec::with_capacity(6);
    let mut week = [0u32; 7];
    let mut col = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days {
        week[col] = day;
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [0; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

/// English month name, e.g. "January"
fn month_name(year: i32, month: u32) -> Result<String> {
    Ok(first_of_month(year, month)?.format("%B").to_string())
}

// =============================================================================
// Bookmarks
// =============================================================================

pub fn month_bookmark(month: u32) -> Result<String> {
    validate_month(month)?;
    Ok(format!("Month_{month}"))
}

/// Bookmark for week `week_idx` (1-based row of the month grid)
pub fn week_bookmark(month: u32, week_idx: usize) -> Result<String> {
    validate_month(month)?;
    if week_idx < 1 {
        return Err(RenderError::invalid("week_idx must be >= 1."));
    }
    Ok(format!("Week_{month}_{week_idx}"))
}

/// Bookmark for one segment of a week page; part 1 is the week bookmark
pub fn week_part_bookmark(month: u32, week_idx: usize, part_idx: usize) -> Result<String> {
    if part_idx < 1 {
        return Err(RenderError::invalid("part_idx must be >= 1."));
    }
    let base = week_bookmark(month, week_idx)?;
    if part_idx == 1 {
        Ok(base)
    } else {
        Ok(format!("{base}_P{part_idx}"))
    }
}

pub fn day_bookmark(date: NaiveDate) -> String {
    format!("Day_{}_{:02}_{:02}", date.year(), date.month(), date.day())
}

// =============================================================================
// Week Plans
// =============================================================================

/// `MON-THU` style label for a segment, or a single day name
pub fn segment_label(day_indexes: &[usize]) -> Result<String> {
    let (Some(&first), Some(&last)) = (day_indexes.first(), day_indexes.last()) else {
        return Err(RenderError::invalid("day_indexes cannot be empty."));
    };
    let label = |idx: usize| {
        WEEKDAY_LABELS.get(idx).copied().ok_or_else(|| {
            RenderError::invalid("week segment indexes must be between 0 and 6.")
        })
    };
    let (first, last) = (label(first)?, label(last)?);
    if first == last {
        Ok(first.to_string())
    } else {
        Ok(format!("{first}-{last}"))
    }
}

/// Layout segments that contain at least one real day of `week`.
///
/// Falls back to the whole week when no segment survives.
pub fn week_segments_for_week(
    week: &[u32; 7],
    profile: &RenderProfile,
) -> Result<Vec<&'static [usize]>> {
    let mut segments = Vec::new();
    for &segment in profile.layout.week.segments {
        if segment.is_empty() {
            continue;
        }
        if segment.iter().any(|idx| *idx > 6) {
            return Err(RenderError::invalid(
                "week segment indexes must be between 0 and 6.",
            ));
        }
        if segment.iter().any(|idx| week[*idx] != 0) {
            segments.push(segment);
        }
    }
    if segments.is_empty() {
        segments.push(&ALL_DAYS[..]);
    }
    Ok(segments)
}

/// One week page: a subset of weekdays with its own bookmark
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSegmentPlan {
    pub bookmark: String,
    pub day_indexes: &'static [usize],
    pub label: String,
}

/// A row of the month grid and the pages it renders to
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    /// 1-based row in the month grid
    pub week_idx: usize,
    /// ISO week of the first real day in the row
    pub iso_week: u32,
    pub days: [u32; 7],
    pub segments: Vec<WeekSegmentPlan>,
}

impl WeekPlan {
    fn first_segment(&self) -> &WeekSegmentPlan {
        &self.segments[0]
    }

    fn last_segment(&self) -> &WeekSegmentPlan {
        &self.segments[self.segments.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthPlan {
    pub month: u32,
    pub name: String,
    pub matrix: Vec<[u32; 7]>,
    pub weeks: Vec<WeekPlan>,
}

impl MonthPlan {
    fn day_destinations(&self, year: i32) -> Result<HashMap<u32, String>> {
        let days = days_in_month(year, self.month)?;
        (1..=days)
            .map(|day| -> Result<(u32, String)> {
                Ok((day, day_bookmark(date_of(year, self.month, day)?)))
            })
            .collect()
    }
}

/// Every page of a planner year, computed before drawing
#[derive(Debug, Clone, PartialEq)]
pub struct YearPlan {
    pub year: i32,
    pub months: Vec<MonthPlan>,
    pub dates: Vec<NaiveDate>,
    /// Week segment bookmark containing each date
    pub date_segments: HashMap<NaiveDate, String>,
    /// ISO week shown for each date's grid row
    pub date_iso_weeks: HashMap<NaiveDate, u32>,
}

impl YearPlan {
    pub fn week_page_count(&self) -> usize {
        self.months
            .iter()
            .flat_map(|month| &month.weeks)
            .map(|week| week.segments.len())
            .sum()
    }

    /// Cover + 12 months + week segments + days
    pub fn page_count(&self) -> usize {
        1 + self.months.len() + self.week_page_count() + self.dates.len()
    }
}

/// Plan every page of `year` for the given profile
pub fn plan_year(year: i32, profile: &RenderProfile) -> Result<YearPlan> {
    validate_year(year)?;
    let mut months = Vec::with_capacity(12);
    let mut dates = Vec::new();
    let mut date_segments = HashMap::new();
    let mut date_iso_weeks = HashMap::new();

    for month in 1..=12 {
        let matrix = month_matrix(year, month)?;
        let mut weeks = Vec::with_capacity(matrix.len());

        for (row, days) in matrix.iter().enumerate() {
            let week_idx = row + 1;
            let Some(&first_day) = days.iter().find(|day| **day != 0) else {
                return Err(RenderError::invalid(
                    "calendar week must include at least one day.",
                ));
            };
            let iso_week = date_of(year, month, first_day)?.iso_week().week();

            let mut segments = Vec::new();
            for (part, day_indexes) in week_segments_for_week(days, profile)?.into_iter().enumerate() {
                let bookmark = week_part_bookmark(month, week_idx, part + 1)?;
                for &idx in day_indexes {
                    if days[idx] != 0 {
                        date_segments.insert(date_of(year, month, days[idx])?, bookmark.clone());
                    }
                }
                segments.push(WeekSegmentPlan {
                    bookmark,
                    day_indexes,
                    label: segment_label(day_indexes)?,
                });
            }

            for &day in days.iter().filter(|day| **day != 0) {
                let date = date_of(year, month, day)?;
                date_iso_weeks.insert(date, iso_week);
                dates.push(date);
            }
            weeks.push(WeekPlan {
                week_idx,
                iso_week,
                days: *days,
                segments,
            });
        }

        months.push(MonthPlan {
            month,
            name: month_name(year, month)?,
            matrix,
            weeks,
        });
    }

    let plan = YearPlan {
        year,
        months,
        dates,
        date_segments,
        date_iso_weeks,
    };
    debug!(
        "Planned {year}: {} week pages, {} day pages",
        plan.week_page_count(),
        plan.dates.len()
    );
    Ok(plan)
}

/// Total pages a planner for `year` will have with the resolved profile
pub fn expected_page_count(
    year: i32,
    device: &str,
    layout: Option<&str>,
    strict_layout: bool,
) -> Result<usize> {
    let options = PlannerOptions {
        year,
        device: device.to_string(),
        layout: layout.map(str::to_string),
        strict_layout,
    };
    let profile = options.resolve_profile()?;
    Ok(plan_year(year, &profile)?.page_count())
}

// =============================================================================
// Pages
// =============================================================================

struct PlannerPages<'a> {
    pdf: &'a mut dyn DrawingPrimitives,
    profile: &'a RenderProfile,
    theme: &'a Theme,
    plan: &'a YearPlan,
}

impl PlannerPages<'_> {
    fn cover(&mut self) -> Result<()> {
        let (profile, theme, plan) = (self.profile, self.theme, self.plan);
        draw_sidebar(self.pdf, profile, theme, 0)?;

        self.pdf.set_fill_color(theme.text_primary);
        self.pdf.set_font(theme.font_header, 100.0);
        let center_x = (profile.page_width() + profile.sidebar_width()) / 2.0;
        self.pdf
            .draw_centred_string(center_x, profile.page_height() / 2.0, &plan.year.to_string());

        let first_date = plan
            .dates
            .first()
            .copied()
            .ok_or_else(|| RenderError::invalid("planner year has no days."))?;
        let links = [
            ("MONTH VIEW", month_bookmark(1)?),
            ("WEEK VIEW", week_bookmark(1, 1)?),
            ("DAY VIEW", day_bookmark(first_date)),
        ];
        draw_link_row(
            self.pdf,
            profile,
            theme,
            &links,
            profile.page_height() / 2.0 - 80.0,
            Align::Left,
        );
        self.pdf.bookmark_page("Cover");
        self.pdf.show_page();
        Ok(())
    }

    fn month(&mut self, month: &MonthPlan) -> Result<()> {
        let (profile, theme, year) = (self.profile, self.theme, self.plan.year);
        let bookmark = month_bookmark(month.month)?;
        let upper_name = month.name.to_uppercase();

        self.pdf.bookmark_page(&bookmark);
        self.pdf
            .add_outline_entry(&format!("{} (Monthly)", month.name), &bookmark, 0);
        // Week entries follow their month so they nest under it
        for week in &month.weeks {
            for (part, segment) in week.segments.iter().enumerate() {
                let title = if part == 0 {
                    format!("Week {:02}", week.iso_week)
                } else {
                    format!("Week {:02} ({})", week.iso_week, segment.label)
                };
                self.pdf.add_outline_entry(&title, &segment.bookmark, 1);
            }
        }

        draw_sidebar(self.pdf, profile, theme, month.month)?;
        draw_header(self.pdf, profile, theme, &upper_name, &year.to_string(), 80.0, 40.0);
        draw_breadcrumbs(
            self.pdf,
            profile,
            theme,
            &[("COVER", Some("Cover")), (upper_name.as_str(), None)],
        )?;

        let links = MonthGridLinks {
            day_destinations: month.day_destinations(year)?,
            week_destinations: month
                .weeks
                .iter()
                .map(|week| (week.week_idx, week.first_segment().bookmark.clone()))
                .collect(),
            week_labels: month
                .weeks
                .iter()
                .map(|week| (week.week_idx, format!("W{:02}", week.iso_week)))
                .collect(),
        };
        draw_grid(self.pdf, profile, theme, &month.matrix, &links)?;
        self.pdf.show_page();
        Ok(())
    }

    fn week_segment(&mut self, month: &MonthPlan, week_pos: usize, part: usize) -> Result<()> {
        let (profile, theme, year) = (self.profile, self.theme, self.plan.year);
        let week = &month.weeks[week_pos];
        let segment = &week.segments[part];
        let multi_part = week.segments.len() > 1;
        let upper_name = month.name.to_uppercase();

        self.pdf.bookmark_page(&segment.bookmark);
        draw_sidebar(self.pdf, profile, theme, month.month)?;

        let suffix = if multi_part {
            format!("{} | ", segment.label)
        } else {
            String::new()
        };
        let subtitle = format!("WEEK {:02} | {suffix}{year}", week.iso_week);
        draw_header(self.pdf, profile, theme, &upper_name, &subtitle, 62.0, 34.0);

        let mut crumb = format!("W{:02}", week.iso_week);
        if multi_part {
            crumb = format!("{crumb} {}", segment.label);
        }
        let month_link = month_bookmark(month.month)?;
        draw_breadcrumbs(
            self.pdf,
            profile,
            theme,
            &[
                ("COVER", Some("Cover")),
                (upper_name.as_str(), Some(month_link.as_str())),
                (crumb.as_str(), None),
            ],
        )?;

        let mut links: Vec<(&str, String)> = Vec::new();
        if part > 0 {
            links.push(("PREV PART", week.segments[part - 1].bookmark.clone()));
        } else if week_pos > 0 {
            let previous = month.weeks[week_pos - 1].last_segment();
            links.push(("PREV WEEK", previous.bookmark.clone()));
        }
        if part + 1 < week.segments.len() {
            links.push(("NEXT PART", week.segments[part + 1].bookmark.clone()));
        } else if let Some(next) = month.weeks.get(week_pos + 1) {
            links.push(("NEXT WEEK", next.first_segment().bookmark.clone()));
        }
        let first_day = segment
            .day_indexes
            .iter()
            .map(|idx| week.days[*idx])
            .find(|day| *day != 0);
        if let Some(day) = first_day {
            links.push(("FIRST DAY", day_bookmark(date_of(year, month.month, day)?)));
        }
        draw_link_row(
            self.pdf,
            profile,
            theme,
            &links,
            profile.page_height() - 215.0,
            Align::Right,
        );

        draw_week_grid(
            self.pdf,
            profile,
            theme,
            &week.days,
            &month.day_destinations(year)?,
            Some(segment.day_indexes),
        )?;
        self.pdf.show_page();
        Ok(())
    }

    fn day(&mut self, index: usize) -> Result<()> {
        let (profile, theme, plan) = (self.profile, self.theme, self.plan);
        let date = plan.dates[index];
        let month_name = date.format("%B").to_string();
        let weekday_name = date.format("%A").to_string().to_uppercase();
        let missing = || RenderError::invalid(format!("{date} is not part of the planner year."));
        let iso_week = *plan.date_iso_weeks.get(&date).ok_or_else(missing)?;
        let segment = plan.date_segments.get(&date).ok_or_else(missing)?;

        self.pdf.bookmark_page(&day_bookmark(date));
        draw_sidebar(self.pdf, profile, theme, date.month())?;
        draw_header(
            self.pdf,
            profile,
            theme,
            &weekday_name,
            &format!("{month_name} {}, {}", date.day(), plan.year),
            56.0,
            32.0,
        );

        let upper_month = month_name.to_uppercase();
        let month_link = month_bookmark(date.month())?;
        let week_crumb = format!("W{iso_week:02}");
        let day_crumb = format!("DAY {:02}", date.day());
        draw_breadcrumbs(
            self.pdf,
            profile,
            theme,
            &[
                ("COVER", Some("Cover")),
                (upper_month.as_str(), Some(month_link.as_str())),
                (week_crumb.as_str(), Some(segment.as_str())),
                (day_crumb.as_str(), None),
            ],
        )?;

        let mut links: Vec<(&str, String)> = Vec::new();
        if index > 0 {
            links.push(("PREV DAY", day_bookmark(plan.dates[index - 1])));
        }
        if let Some(next) = plan.dates.get(index + 1) {
            links.push(("NEXT DAY", day_bookmark(*next)));
        }
        draw_link_row(
            self.pdf,
            profile,
            theme,
            &links,
            profile.page_height() - 215.0,
            Align::Right,
        );

        draw_daily_view(self.pdf, profile, theme, date)?;
        self.pdf.show_page();
        Ok(())
    }
}

/// Draw every planner page for `year` onto `pdf`
pub fn draw_planner(
    pdf: &mut dyn DrawingPrimitives,
    profile: &RenderProfile,
    theme: &Theme,
    year: i32,
) -> Result<YearPlan> {
    let plan = plan_year(year, profile)?;
    let mut pages = PlannerPages {
        pdf,
        profile,
        theme,
        plan: &plan,
    };

    pages.cover()?;
    for month in &plan.months {
        pages.month(month)?;
    }
    for month in &plan.months {
        for (week_pos, week) in month.weeks.iter().enumerate() {
            for part in 0..week.segments.len() {
                pages.week_segment(month, week_pos, part)?;
            }
        }
    }
    for index in 0..plan.dates.len() {
        pages.day(index)?;
    }
    Ok(plan)
}

/// Render a planner to PDF bytes
pub fn render_planner(options: &PlannerOptions, theme: &Theme) -> Result<Vec<u8>> {
    let profile = options.resolve_profile()?;
    let mut pdf = PdfCanvas::new(profile.page_width(), profile.page_height());
    pdf.set_title(&format!(
        "Planner {} ({}, {})",
        options.year, profile.device.name, profile.layout.name
    ));

    let plan = draw_planner(&mut pdf, &profile, theme, options.year)?;
    info!(
        "Rendered planner {} with {} pages ({} / {})",
        options.year,
        plan.page_count(),
        profile.device.name,
        profile.layout.name
    );
    pdf.to_bytes()
}

/// Render a planner and write it to `output`, or the default file name.
///
/// # Arguments
/// * `options` - Year, device, and layout selection
/// * `theme` - Resolved theme
/// * `output` - Output path; parent directories are created
pub async fn generate_planner(
    options: &PlannerOptions,
    theme: &Theme,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let destination = output.unwrap_or_else(|| PathBuf::from(options.default_file_name()));
    let options = options.clone();
    let theme = *theme;

    let bytes = tokio::task::spawn_blocking(move || render_planner(&options, &theme)).await??;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&destination, bytes).await?;
    info!("Wrote planner to {}", destination.display());
    Ok(destination)
}
