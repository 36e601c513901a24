//! Page geometry
//!
//! Planner pages (month, week, daily) and single-page templates are
//! computed separately; both share the record types and step sequences.

mod planner;
mod regions;
mod steps;
mod template;
mod types;

pub use planner::*;
pub use regions::*;
pub use steps::*;
pub use template::*;
pub use types::*;
