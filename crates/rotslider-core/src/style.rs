//! Declarative slider style and theme color resolution.
//!
//! A [`SliderStyle`] is what a host stores in its layout files: sizes in
//! density-independent pixels and optional hex colors. Resolving it against
//! a display density and a [`ThemeColors`] source yields a [`SliderConfig`].

use crate::config::{
    DEFAULT_THUMB_RADIUS_DP, DEFAULT_TRACK_BG_THICKNESS_DP, DEFAULT_TRACK_FG_THICKNESS_DP,
    FillOrigin, Orientation, SliderConfig, default_foreground_color, default_track_bg_color,
};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to parse style: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid dimension for {field}: {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Theme roles a host can supply default colors for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColorRole {
    /// Color of inactive controls; default for the background track.
    ControlNormal,
    /// Color of active controls; default for the thumb and foreground track.
    ControlActivated,
}

/// Host-supplied theme color lookup.
pub trait ThemeColors {
    /// Resolve a role, or `None` when the theme does not define it.
    fn color(&self, role: ThemeColorRole) -> Option<Color>;
}

/// Theme with no colors; every role falls back to the built-in palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme;

impl ThemeColors for DefaultTheme {
    fn color(&self, _role: ThemeColorRole) -> Option<Color> {
        None
    }
}

/// Declarative slider attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Thumb color as `#rrggbb` or `#rrggbbaa`.
    pub thumb_color: Option<String>,
    pub track_fg_color: Option<String>,
    pub track_bg_color: Option<String>,
    pub thumb_radius_dp: f64,
    pub track_bg_thickness_dp: f64,
    pub track_fg_thickness_dp: f64,
    /// Run the track horizontally instead of vertically.
    pub horizontal: bool,
    pub fill_origin: FillOrigin,
    pub enabled: bool,
    pub focusable: bool,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            thumb_color: None,
            track_fg_color: None,
            track_bg_color: None,
            thumb_radius_dp: DEFAULT_THUMB_RADIUS_DP,
            track_bg_thickness_dp: DEFAULT_TRACK_BG_THICKNESS_DP,
            track_fg_thickness_dp: DEFAULT_TRACK_FG_THICKNESS_DP,
            horizontal: false,
            fill_origin: FillOrigin::Center,
            enabled: true,
            focusable: true,
        }
    }
}

impl SliderStyle {
    /// Parse a style from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the style to pretty-printed JSON.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve against a display density (physical pixels per dp) and a theme.
    ///
    /// Dimensions are truncated to whole pixels. Colors not set on the style
    /// come from the theme, then from the built-in palette.
    pub fn resolve(&self, density: f64, theme: &dyn ThemeColors) -> StyleResult<SliderConfig> {
        let theme_bg = theme_color(theme, ThemeColorRole::ControlNormal, default_track_bg_color);
        let theme_fg =
            theme_color(theme, ThemeColorRole::ControlActivated, default_foreground_color);

        let thumb_color = match &self.thumb_color {
            Some(hex) => parse_hex_color(hex)?,
            None => theme_fg,
        };
        let track_fg_color = match &self.track_fg_color {
            Some(hex) => parse_hex_color(hex)?,
            None => theme_fg,
        };
        let track_bg_color = match &self.track_bg_color {
            Some(hex) => parse_hex_color(hex)?,
            None => theme_bg,
        };

        let orientation = if self.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        Ok(SliderConfig {
            thumb_radius_px: dp_to_px("thumb_radius_dp", self.thumb_radius_dp, density)?,
            track_bg_thickness_px: dp_to_px(
                "track_bg_thickness_dp",
                self.track_bg_thickness_dp,
                density,
            )?,
            track_fg_thickness_px: dp_to_px(
                "track_fg_thickness_dp",
                self.track_fg_thickness_dp,
                density,
            )?,
            thumb_color,
            track_fg_color,
            track_bg_color,
            orientation,
            fill_origin: self.fill_origin,
            enabled: self.enabled,
            focusable: self.focusable,
        })
    }
}

fn theme_color(theme: &dyn ThemeColors, role: ThemeColorRole, fallback: fn() -> Color) -> Color {
    theme.color(role).unwrap_or_else(|| {
        log::debug!("Theme has no {:?} color, using built-in default", role);
        fallback()
    })
}

fn dp_to_px(field: &'static str, dp: f64, density: f64) -> StyleResult<f64> {
    if !dp.is_finite() || dp < 0.0 {
        return Err(StyleError::InvalidDimension { field, value: dp });
    }
    if !density.is_finite() || density <= 0.0 {
        return Err(StyleError::InvalidDimension {
            field: "density",
            value: density,
        });
    }
    Ok((dp * density).trunc())
}

/// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` color string.
pub fn parse_hex_color(s: &str) -> StyleResult<Color> {
    let invalid = || StyleError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => {
            let r = channel(0..1)? * 17;
            let g = channel(1..2)? * 17;
            let b = channel(2..3)? * 17;
            Ok(Color::from_rgba8(r, g, b, 255))
        }
        6 => Ok(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(invalid()),
    }
}
