use super::{DeviceProfile, LayoutProfile};

/// A device paired with a planner layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderProfile {
    pub device: DeviceProfile,
    pub layout: LayoutProfile,
}

impl RenderProfile {
    pub fn new(device: DeviceProfile, layout: LayoutProfile) -> Self {
        Self { device, layout }
    }

    pub fn page_width(&self) -> f64 {
        self.device.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.device.page_height
    }

    pub fn header_height(&self) -> f64 {
        self.device.header_height
    }

    /// Effective sidebar width; zero when the layout hides the sidebar
    pub fn sidebar_width(&self) -> f64 {
        if self.layout.show_sidebar {
            self.device.sidebar_width
        } else {
            0.0
        }
    }

    /// Left edge of the page content, right of the sidebar
    pub fn content_left(&self) -> f64 {
        self.sidebar_width() + self.device.margin
    }
}

/// Outcome of fitted profile resolution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProfileResolution {
    pub profile: RenderProfile,
    pub requested_layout: String,
    pub selected_layout: String,
    pub fallback_applied: bool,
    /// Fit issues recorded for the requested layout (empty if it fit)
    pub requested_issues: Vec<String>,
}
