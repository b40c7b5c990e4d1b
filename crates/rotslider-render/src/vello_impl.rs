//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{Affine, Cap, Circle, Line, RoundedRect, Stroke};
use peniko::{Color, Fill};
use rotslider_core::{SliderPainter, SliderWidget};
use vello::Scene;

/// Vello-based renderer for slider widgets.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Transform applied to every draw call.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Append a slider to the current scene and clear its redraw flag.
    ///
    /// Unlike [`Renderer::build_scene`], this does not reset the scene, so
    /// several sliders can share one frame.
    pub fn paint_slider(&mut self, slider: &mut SliderWidget, transform: Affine) {
        self.transform = transform;
        slider.paint(self);
    }
}

impl SliderPainter for VelloRenderer {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, &rect);
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, &circle);
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        let stroke = Stroke::new(width).with_caps(Cap::Butt);
        self.scene.stroke(&stroke, self.transform, color, None, &line);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let transform = ctx.surface_transform();
        if !transform.is_finite() {
            return Err(RendererError::RenderFailed(format!(
                "non-finite transform {:?}",
                transform.as_coeffs()
            )));
        }

        // Clear the scene
        self.scene.reset();
        self.transform = transform;

        if let Some(background) = ctx.background_color {
            let bounds = ctx.slider.bounds().size.to_rect();
            self.scene.fill(Fill::NonZero, transform, background, None, &bounds);
        }

        let slider = ctx.slider;
        slider.geometry().paint(slider.config(), self);
        log::trace!("Built slider scene at progress {:.3}", slider.progress());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Insets, Size};
    use rotslider_core::{Orientation, SliderConfig};

    fn laid_out_slider() -> SliderWidget {
        let mut slider =
            SliderWidget::new(SliderConfig::new().with_orientation(Orientation::Horizontal));
        slider.layout(Size::new(200.0, 24.0), Insets::ZERO);
        slider.set_progress(0.3);
        slider
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut renderer = VelloRenderer::new();
        let slider = laid_out_slider();

        let ctx = RenderContext::new(&slider)
            .with_scale_factor(2.0)
            .with_background(Color::WHITE);
        renderer.build_scene(&ctx).unwrap();
        assert!(!renderer.scene().encoding().is_empty());

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_rejects_non_finite_transform() {
        let mut renderer = VelloRenderer::new();
        let slider = laid_out_slider();
        let ctx = RenderContext::new(&slider).with_scale_factor(f64::NAN);
        assert!(matches!(
            renderer.build_scene(&ctx),
            Err(RendererError::RenderFailed(_))
        ));
    }

    #[test]
    fn test_paint_slider_clears_redraw() {
        let mut renderer = VelloRenderer::new();
        let mut slider = laid_out_slider();
        assert!(slider.needs_redraw());

        renderer.paint_slider(&mut slider, Affine::IDENTITY);
        assert!(!slider.needs_redraw());
        assert!(!renderer.scene().encoding().is_empty());
    }
}
