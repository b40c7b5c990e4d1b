//! egui integration for RotSlider widgets.
//!
//! - **Slider**: `egui::Widget` adapter hosting a [`rotslider_core::SliderWidget`]
//! - **Theme**: egui visuals as slider theme colors, color conversion

pub mod slider;
pub mod theme;

pub use slider::{EguiPainter, Slider};
pub use theme::{EguiTheme, from_color32, to_color32};

/// Standard sizing constants used by the adapter.
pub mod sizing {
    /// Smallest track-axis length offered when the layout gives no size.
    pub const MIN_LENGTH: f32 = 16.0;
    /// Corner radius of the focus outline.
    pub const CORNER_RADIUS: u8 = 4;
}
