//! Bridging egui visuals and colors to the slider core.

use egui::{Color32, Visuals};
use peniko::Color;
use rotslider_core::{ThemeColorRole, ThemeColors};

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an egui color to a peniko color.
pub fn from_color32(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

/// Theme colors taken from the active egui visuals.
///
/// Inactive widget fill stands in for "control normal", the selection fill
/// for "control activated".
#[derive(Debug, Clone, Copy)]
pub struct EguiTheme {
    control_normal: Color32,
    control_activated: Color32,
}

impl EguiTheme {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            control_normal: visuals.widgets.inactive.bg_fill,
            control_activated: visuals.selection.bg_fill,
        }
    }
}

impl ThemeColors for EguiTheme {
    fn color(&self, role: ThemeColorRole) -> Option<Color> {
        let color = match role {
            ThemeColorRole::ControlNormal => self.control_normal,
            ThemeColorRole::ControlActivated => self.control_activated,
        };
        // Fully transparent fills are what egui uses for "unset"
        (color != Color32::TRANSPARENT).then(|| from_color32(color))
    }
}
