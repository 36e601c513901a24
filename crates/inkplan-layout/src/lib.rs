//! Geometry and profile engine for e-ink planner pages.
//!
//! Everything in this crate is pure: device and layout tables are static,
//! and geometry records are computed fresh from a resolved profile.

pub mod constants;
mod error;
pub mod geometry;
pub mod profiles;
mod template_layout;
mod units;

pub use error::*;
pub use geometry::*;
pub use profiles::*;
pub use template_layout::*;
pub use units::*;
