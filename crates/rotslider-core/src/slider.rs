//! The slider widget: configuration, progress state and event handling.

use std::fmt;

use kurbo::{Insets, Size};
use peniko::Color;

use crate::config::{FillOrigin, Orientation, SliderConfig};
use crate::geometry::SliderGeometry;
use crate::input::{EventStatus, Key, PointerEvent, Step};
use crate::layout::{Bounds, MeasureSpec, measure};
use crate::paint::SliderPainter;

/// Progress change per key press.
pub const KEY_STEP: f64 = 0.02;

/// Callback invoked with the clamped progress.
pub type ProgressListener = Box<dyn FnMut(f64)>;

/// Clamp a progress value into `[0.0, 1.0]`, mapping NaN to 0.0.
///
/// Anything at or below zero, negative zero included, becomes `+0.0`.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("NaN progress, resetting to 0");
        return 0.0;
    }
    if value <= 0.0 {
        0.0
    } else {
        value.min(1.0)
    }
}

/// A vertical or horizontal slider reporting progress in `[0.0, 1.0]`.
///
/// The host supplies bounds through [`layout`](Self::layout), forwards
/// input through [`on_pointer`](Self::on_pointer) and
/// [`on_key`](Self::on_key), and repaints when
/// [`needs_redraw`](Self::needs_redraw) is set.
pub struct SliderWidget {
    config: SliderConfig,
    progress: f64,
    bounds: Bounds,
    listener: Option<ProgressListener>,
    needs_redraw: bool,
}

impl fmt::Debug for SliderWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderWidget")
            .field("config", &self.config)
            .field("progress", &self.progress)
            .field("bounds", &self.bounds)
            .field("has_listener", &self.listener.is_some())
            .field("needs_redraw", &self.needs_redraw)
            .finish()
    }
}

impl Default for SliderWidget {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl SliderWidget {
    /// Create a slider at progress 0.
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            progress: 0.0,
            bounds: Bounds::default(),
            listener: None,
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Whether state changed since the last [`paint`](Self::paint).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    // --- Configuration ---

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_thumb_color(&mut self, color: Color) {
        self.config.thumb_color = color;
        self.invalidate();
    }

    pub fn set_track_fg_color(&mut self, color: Color) {
        self.config.track_fg_color = color;
        self.invalidate();
    }

    pub fn set_track_bg_color(&mut self, color: Color) {
        self.config.track_bg_color = color;
        self.invalidate();
    }

    pub fn set_thumb_radius_px(&mut self, radius_px: f64) {
        self.config.thumb_radius_px = radius_px;
        self.invalidate();
    }

    pub fn set_track_fg_thickness_px(&mut self, thickness_px: f64) {
        self.config.track_fg_thickness_px = thickness_px;
        self.invalidate();
    }

    pub fn set_track_bg_thickness_px(&mut self, thickness_px: f64) {
        self.config.track_bg_thickness_px = thickness_px;
        self.invalidate();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.invalidate();
    }

    pub fn set_fill_origin(&mut self, fill_origin: FillOrigin) {
        self.config.fill_origin = fill_origin;
        self.invalidate();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        self.invalidate();
    }

    // --- Progress ---

    /// Set progress without notifying the listener.
    pub fn set_progress(&mut self, progress: f64) {
        self.set_progress_notify(progress, false);
    }

    /// Clamp and store progress, then notify the listener if requested.
    ///
    /// Every progress change goes through here.
    pub fn set_progress_notify(&mut self, progress: f64, notify: bool) {
        self.progress = clamp_progress(progress);
        log::debug!("Slider progress set to {:.4} (notify: {})", self.progress, notify);
        self.invalidate();
        if notify {
            if let Some(listener) = self.listener.as_mut() {
                listener(self.progress);
            }
        }
    }

    /// Register the progress listener, replacing any previous one.
    pub fn set_on_progress_change_listener<F>(&mut self, listener: F)
    where
        F: FnMut(f64) + 'static,
    {
        if self.listener.is_some() {
            log::debug!("Replacing slider progress listener");
        }
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_progress_change_listener(&mut self) {
        self.listener = None;
    }

    // --- Layout ---

    /// Preferred size under the given constraints.
    pub fn measure(
        &self,
        padding: Insets,
        suggested_min: Size,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Size {
        measure(&self.config, padding, suggested_min, width_spec, height_spec)
    }

    /// Record the size and padding assigned by the host.
    pub fn layout(&mut self, size: Size, padding: Insets) {
        let bounds = Bounds::new(size, padding);
        if bounds != self.bounds {
            self.bounds = bounds;
            self.invalidate();
        }
    }

    // --- Input ---

    /// Map a primary-pointer event onto the track.
    ///
    /// Down and move events set progress from the pointer coordinate along
    /// the track axis; up and cancel are consumed without effect. Disabled
    /// sliders ignore all pointer input.
    pub fn on_pointer(&mut self, event: PointerEvent) -> EventStatus {
        if !self.config.enabled {
            return EventStatus::Ignored;
        }

        if let Some(position) = event.drag_position() {
            let orientation = self.config.orientation;
            let usable = self
                .bounds
                .usable_extent(orientation, self.config.thumb_radius_px);
            let coord = match orientation {
                Orientation::Horizontal => position.x,
                Orientation::Vertical => position.y,
            };
            log::trace!("Pointer at {:.1} over usable extent {:.1}", coord, usable);
            self.set_progress_notify(1.0 - coord / usable, true);
        }
        EventStatus::Handled
    }

    /// Nudge progress by [`KEY_STEP`] for directional keys.
    ///
    /// A key is only consumed when it can move the thumb; at either end of
    /// the track it is left to the host.
    pub fn on_key(&mut self, key: &Key) -> EventStatus {
        if !self.config.enabled {
            return EventStatus::Ignored;
        }

        match key.step(self.config.orientation) {
            Some(Step::Increment) if self.progress < 1.0 => {
                self.set_progress_notify(self.progress + KEY_STEP, true);
                EventStatus::Handled
            }
            Some(Step::Decrement) if self.progress > 0.0 => {
                self.set_progress_notify(self.progress - KEY_STEP, true);
                EventStatus::Handled
            }
            _ => EventStatus::Ignored,
        }
    }

    // --- Rendering ---

    /// Geometry for the current progress and bounds.
    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry::compute(&self.config, &self.bounds, self.progress)
    }

    /// Draw the slider and clear the redraw flag.
    pub fn paint(&mut self, painter: &mut dyn SliderPainter) {
        self.geometry().paint(&self.config, painter);
        self.needs_redraw = false;
    }
}
