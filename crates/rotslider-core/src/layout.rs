//! Measure and layout bounds.

use kurbo::{Insets, Rect, Size};

use crate::config::{Orientation, SliderConfig};

/// Constraint on one axis passed down by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The parent dictates this exact size.
    Exactly(f64),
    /// The widget may be as large as it wants up to this size.
    AtMost(f64),
    /// No constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Size for a widget whose preferred size is `min`: the spec size when
    /// one is given, `min` otherwise.
    pub fn default_size(self, min: f64) -> f64 {
        match self {
            MeasureSpec::Unspecified => min,
            MeasureSpec::AtMost(size) | MeasureSpec::Exactly(size) => size,
        }
    }
}

/// Size and padding assigned by the host in the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub size: Size,
    /// Padding: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            padding: Insets::ZERO,
        }
    }
}

impl Bounds {
    pub fn new(size: Size, padding: Insets) -> Self {
        Self { size, padding }
    }

    /// Area inside the padding, in widget-local coordinates.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.padding.x0,
            self.padding.y0,
            self.size.width - self.padding.x1,
            self.size.height - self.padding.y1,
        )
    }

    /// Track travel along the orientation's axis: content length minus
    /// the thumb diameter.
    pub fn usable_extent(&self, orientation: Orientation, thumb_radius: f64) -> f64 {
        let content = self.content_rect();
        let length = match orientation {
            Orientation::Horizontal => content.width(),
            Orientation::Vertical => content.height(),
        };
        length - 2.0 * thumb_radius
    }
}

/// Compute the slider's size for the given constraints.
///
/// The primary axis takes whatever the parent offers; the cross axis only
/// needs room for the thumb unless the parent fixes it.
pub fn measure(
    config: &SliderConfig,
    padding: Insets,
    suggested_min: Size,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size {
    let thumb_diameter = 2.0 * config.thumb_radius_px;
    match config.orientation {
        Orientation::Horizontal => {
            let width = width_spec.default_size(suggested_min.width);
            let content_height = padding.y0 + padding.y1 + thumb_diameter;
            let height = match height_spec {
                MeasureSpec::Exactly(size) => size,
                _ => content_height.max(suggested_min.height),
            };
            Size::new(width, height)
        }
        Orientation::Vertical => {
            let height = height_spec.default_size(suggested_min.height);
            let content_width = padding.x0 + padding.x1 + thumb_diameter;
            let width = match width_spec {
                MeasureSpec::Exactly(size) => size,
                _ => content_width.max(suggested_min.width),
            };
            Size::new(width, height)
        }
    }
}
