//! Device and layout profiles, fit evaluation, and resolution

mod device;
mod fit;
mod layout;
mod registry;
mod render;
mod resolve;

pub use device::*;
pub use fit::evaluate_render_profile_fit;
pub use layout::*;
pub use registry::*;
pub use render::*;
pub use resolve::*;
