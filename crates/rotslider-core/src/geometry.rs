//! Render geometry for a single frame.
//!
//! Everything is computed along an abstract primary axis (the track) and a
//! cross axis, then mapped to x/y by orientation, so both orientations share
//! one formula.

use kurbo::{Circle, Line, Point, Rect, RoundedRect};

use crate::config::{FillOrigin, Orientation, SliderConfig};
use crate::layout::Bounds;

/// Stroke width of the tick drawn across the thumb.
pub const TICK_STROKE_WIDTH: f64 = 10.0;

/// Shapes drawn for one frame, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// Full-length background track.
    pub background: RoundedRect,
    /// Filled portion between the fill origin and the thumb.
    pub foreground: RoundedRect,
    pub thumb: Circle,
    /// Tick through the thumb center, perpendicular to the track.
    pub tick: Line,
    /// Neutral-position tick at the track midpoint (center fill origin only).
    pub center_mark: Option<Line>,
}

/// Positions along the primary axis for a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Leading end of the background track.
    pub track_start: f64,
    /// Trailing end of the background track.
    pub track_end: f64,
    /// Primary-axis coordinate of the thumb center.
    pub thumb: f64,
    /// Thumb position at progress 0.5.
    pub midpoint: f64,
    /// Thumb position at progress 0.0.
    pub zero: f64,
    /// Cross-axis center of the content box.
    pub cross_center: f64,
}

impl TrackMetrics {
    pub fn compute(config: &SliderConfig, bounds: &Bounds, progress: f64) -> Self {
        let radius = config.thumb_radius_px;
        let track_padding = config.track_padding();
        let content = bounds.content_rect();
        let usable = bounds.usable_extent(config.orientation, radius);
        let travel = usable - 2.0 * track_padding;

        let (start, end, cross_center) = match config.orientation {
            Orientation::Horizontal => (content.x0, content.x1, content.center().y),
            Orientation::Vertical => (content.y0, content.y1, content.center().x),
        };

        // Progress 1.0 sits at the leading edge
        let thumb_at = |p: f64| start + radius + track_padding + (1.0 - p) * travel;

        Self {
            track_start: start + radius,
            track_end: end - radius,
            thumb: thumb_at(progress),
            midpoint: start + radius + usable / 2.0,
            zero: thumb_at(0.0),
            cross_center,
        }
    }
}

impl SliderGeometry {
    pub fn compute(config: &SliderConfig, bounds: &Bounds, progress: f64) -> Self {
        let orientation = config.orientation;
        let metrics = TrackMetrics::compute(config, bounds, progress);
        let radius = config.thumb_radius_px;
        let cross = metrics.cross_center;

        let bg_thickness = config.track_bg_thickness_px;
        let background = RoundedRect::from_rect(
            axis_rect(
                orientation,
                metrics.track_start,
                metrics.track_end,
                cross - bg_thickness / 2.0,
                cross + bg_thickness / 2.0,
            ),
            bg_thickness / 2.0,
        );

        let origin = match config.fill_origin {
            FillOrigin::Center => metrics.midpoint,
            FillOrigin::Start => metrics.zero,
        };
        let fg_thickness = config.track_fg_thickness_px;
        let foreground = RoundedRect::from_rect(
            axis_rect(
                orientation,
                origin.min(metrics.thumb),
                origin.max(metrics.thumb),
                cross - fg_thickness / 2.0,
                cross + fg_thickness / 2.0,
            ),
            fg_thickness / 2.0,
        );

        let thumb = Circle::new(axis_point(orientation, metrics.thumb, cross), radius);
        let tick = cross_line(orientation, metrics.thumb, cross, radius);
        let center_mark = match config.fill_origin {
            FillOrigin::Center => Some(cross_line(orientation, metrics.midpoint, cross, radius)),
            FillOrigin::Start => None,
        };

        Self {
            background,
            foreground,
            thumb,
            tick,
            center_mark,
        }
    }
}

fn axis_point(orientation: Orientation, primary: f64, cross: f64) -> Point {
    match orientation {
        Orientation::Horizontal => Point::new(primary, cross),
        Orientation::Vertical => Point::new(cross, primary),
    }
}

fn axis_rect(orientation: Orientation, p0: f64, p1: f64, c0: f64, c1: f64) -> Rect {
    Rect::from_points(
        axis_point(orientation, p0, c0),
        axis_point(orientation, p1, c1),
    )
}

/// Line of length `2 * half_len` crossing the track at `primary`.
fn cross_line(orientation: Orientation, primary: f64, cross: f64, half_len: f64) -> Line {
    Line::new(
        axis_point(orientation, primary, cross - half_len),
        axis_point(orientation, primary, cross + half_len),
    )
}
