//! Page renderers and PDF generation for e-ink planners and note templates.
//!
//! Renderers draw through [`DrawingPrimitives`]; [`PdfCanvas`] records the
//! drawing into a lopdf document. Geometry comes from `inkplan-layout`.

pub mod components;
mod drawing;
mod error;
pub mod pdf;
pub mod planner;
pub mod templates;
mod theme;

pub use drawing::*;
pub use error::*;
pub use pdf::PdfCanvas;
pub use planner::{PlannerOptions, expected_page_count, generate_planner, render_planner};
pub use templates::{TemplateOptions, generate_template, render_template, template_spec, template_specs};
pub use theme::*;
