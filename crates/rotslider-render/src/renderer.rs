//! Renderer trait abstraction.

use kurbo::Affine;
use peniko::Color;
use rotslider_core::SliderWidget;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The slider to render.
    pub slider: &'a SliderWidget,
    /// Places the widget's local coordinates in the target surface.
    pub transform: Affine,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Fill behind the widget bounds; `None` leaves the surface untouched.
    pub background_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context at the surface origin.
    pub fn new(slider: &'a SliderWidget) -> Self {
        Self {
            slider,
            transform: Affine::IDENTITY,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Set the widget placement transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Full transform from widget-local coordinates to surface pixels.
    pub fn surface_transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * self.transform
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
