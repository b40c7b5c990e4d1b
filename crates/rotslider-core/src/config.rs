//! Pixel-space slider configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Default thumb radius in density-independent pixels.
pub const DEFAULT_THUMB_RADIUS_DP: f64 = 6.0;
/// Default background track thickness in density-independent pixels.
pub const DEFAULT_TRACK_BG_THICKNESS_DP: f64 = 4.0;
/// Default foreground track thickness in density-independent pixels.
pub const DEFAULT_TRACK_FG_THICKNESS_DP: f64 = 2.0;

/// Fallback background track color (#DDDFEB).
pub fn default_track_bg_color() -> Color {
    Color::from_rgba8(0xdd, 0xdf, 0xeb, 0xff)
}

/// Fallback foreground color for the track and thumb (#7DA1AE).
pub fn default_foreground_color() -> Color {
    Color::from_rgba8(0x7d, 0xa1, 0xae, 0xff)
}

/// Axis the track runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Track runs top to bottom; progress 1.0 is at the top.
    #[default]
    Vertical,
    /// Track runs left to right; progress 1.0 is at the left.
    Horizontal,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Where the foreground track is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillOrigin {
    /// Fill between the track midpoint and the thumb (progress 0.5 is neutral).
    #[default]
    Center,
    /// Fill from the progress 0.0 end of the track up to the thumb.
    Start,
}

/// Resolved slider configuration, all dimensions in physical pixels.
///
/// Always fully initialized; build one with [`SliderConfig::default`] and
/// the `with_*` methods, or resolve it from a
/// [`SliderStyle`](crate::style::SliderStyle).
#[derive(Debug, Clone, Copy)]
pub struct SliderConfig {
    /// Radius of the thumb circle.
    pub thumb_radius_px: f64,
    /// Thickness of the background track.
    pub track_bg_thickness_px: f64,
    /// Thickness of the foreground track.
    pub track_fg_thickness_px: f64,
    pub thumb_color: Color,
    pub track_fg_color: Color,
    pub track_bg_color: Color,
    pub orientation: Orientation,
    pub fill_origin: FillOrigin,
    /// Disabled sliders ignore pointer and key input.
    pub enabled: bool,
    /// Whether the slider takes keyboard focus.
    pub focusable: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            thumb_radius_px: DEFAULT_THUMB_RADIUS_DP,
            track_bg_thickness_px: DEFAULT_TRACK_BG_THICKNESS_DP,
            track_fg_thickness_px: DEFAULT_TRACK_FG_THICKNESS_DP,
            thumb_color: default_foreground_color(),
            track_fg_color: default_foreground_color(),
            track_bg_color: default_track_bg_color(),
            orientation: Orientation::Vertical,
            fill_origin: FillOrigin::Center,
            enabled: true,
            focusable: true,
        }
    }
}

impl SliderConfig {
    /// Create a configuration with the 1x-density defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thumb_radius(mut self, radius_px: f64) -> Self {
        self.thumb_radius_px = radius_px;
        self
    }

    pub fn with_track_thickness(mut self, bg_px: f64, fg_px: f64) -> Self {
        self.track_bg_thickness_px = bg_px;
        self.track_fg_thickness_px = fg_px;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_fill_origin(mut self, fill_origin: FillOrigin) -> Self {
        self.fill_origin = fill_origin;
        self
    }

    /// Set thumb, foreground and background colors at once.
    pub fn with_colors(mut self, thumb: Color, track_fg: Color, track_bg: Color) -> Self {
        self.thumb_color = thumb;
        self.track_fg_color = track_fg;
        self.track_bg_color = track_bg;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Inset between the background and a thinner foreground track.
    pub fn track_padding(&self) -> f64 {
        ((self.track_bg_thickness_px - self.track_fg_thickness_px) / 2.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SliderConfig::new();
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.fill_origin, FillOrigin::Center);
        assert!(config.enabled);
        assert!(config.focusable);
        assert!((config.thumb_radius_px - 6.0).abs() < f64::EPSILON);
        let bg = config.track_bg_color.to_rgba8();
        assert_eq!((bg.r, bg.g, bg.b, bg.a), (0xdd, 0xdf, 0xeb, 0xff));
    }

    #[test]
    fn test_track_padding() {
        let config = SliderConfig::new().with_track_thickness(8.0, 2.0);
        assert!((config.track_padding() - 3.0).abs() < f64::EPSILON);

        // A thicker foreground never produces a negative inset
        let config = SliderConfig::new().with_track_thickness(2.0, 8.0);
        assert!(config.track_padding().abs() < f64::EPSILON);
    }

    #[test]
    fn test_orientation_serde() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
        let origin: FillOrigin = serde_json::from_str("\"start\"").unwrap();
        assert_eq!(origin, FillOrigin::Start);
    }
}
