//! Painter abstraction for drawing slider geometry.

use kurbo::{Circle, Line, RoundedRect};
use peniko::Color;

use crate::config::SliderConfig;
use crate::geometry::{SliderGeometry, TICK_STROKE_WIDTH};

/// Trait for drawing backends.
///
/// Implementations can target Vello scenes, egui painters, or record
/// commands for inspection.
pub trait SliderPainter {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    fn fill_circle(&mut self, circle: Circle, color: Color);

    fn stroke_line(&mut self, line: Line, width: f64, color: Color);
}

impl SliderGeometry {
    /// Draw background track, foreground track, thumb and ticks, in that order.
    pub fn paint(&self, config: &SliderConfig, painter: &mut dyn SliderPainter) {
        painter.fill_rounded_rect(self.background, config.track_bg_color);
        painter.fill_rounded_rect(self.foreground, config.track_fg_color);
        painter.fill_circle(self.thumb, config.thumb_color);
        if let Some(mark) = self.center_mark {
            painter.stroke_line(mark, TICK_STROKE_WIDTH, config.thumb_color);
        }
        painter.stroke_line(self.tick, TICK_STROKE_WIDTH, config.thumb_color);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy)]
pub enum DrawCommand {
    RoundedRect { rect: RoundedRect, color: Color },
    Circle { circle: Circle, color: Color },
    Line { line: Line, width: f64, color: Color },
}

/// Painter that stores draw calls, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl SliderPainter for RecordingPainter {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands.push(DrawCommand::RoundedRect { rect, color });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::Circle { circle, color });
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line { line, width, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FillOrigin, Orientation};
    use crate::layout::Bounds;
    use kurbo::{Insets, Size};

    #[test]
    fn test_paint_order_and_colors() {
        let config = SliderConfig::new().with_orientation(Orientation::Horizontal);
        let bounds = Bounds::new(Size::new(100.0, 12.0), Insets::ZERO);
        let geom = SliderGeometry::compute(&config, &bounds, 0.2);

        let mut painter = RecordingPainter::new();
        geom.paint(&config, &mut painter);

        let cmds = painter.commands();
        assert_eq!(cmds.len(), 5);
        match cmds[0] {
            DrawCommand::RoundedRect { rect, color } => {
                assert_eq!(rect, geom.background);
                assert_eq!(color.to_rgba8().r, 0xdd);
            }
            ref other => panic!("expected background track, got {other:?}"),
        }
        assert!(matches!(cmds[1], DrawCommand::RoundedRect { rect, .. } if rect == geom.foreground));
        assert!(matches!(cmds[2], DrawCommand::Circle { circle, .. } if circle == geom.thumb));
        assert!(matches!(cmds[4], DrawCommand::Line { line, width, .. }
            if line == geom.tick && (width - TICK_STROKE_WIDTH).abs() < f64::EPSILON));
    }

    #[test]
    fn test_start_origin_skips_center_mark() {
        let config = SliderConfig::new().with_fill_origin(FillOrigin::Start);
        let bounds = Bounds::new(Size::new(12.0, 100.0), Insets::ZERO);
        let geom = SliderGeometry::compute(&config, &bounds, 0.2);

        let mut painter = RecordingPainter::new();
        geom.paint(&config, &mut painter);
        assert_eq!(painter.commands().len(), 4);

        painter.clear();
        assert!(painter.commands().is_empty());
    }
}
