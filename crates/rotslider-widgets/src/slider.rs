//! egui host for [`SliderWidget`].

use egui::{
    CornerRadius, CursorIcon, EventFilter, FocusDirection, Key as EguiKey, Painter, Pos2, Rect,
    Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget, pos2, vec2,
};
use kurbo::{Circle, Insets, Line, Point, RoundedRect, Size};
use peniko::Color;
use rotslider_core::{Key, MeasureSpec, Orientation, PointerEvent, SliderPainter, SliderWidget};

use crate::sizing;
use crate::theme::to_color32;

/// Arrow keys forwarded to a focused slider, with the focus move egui
/// would make for them.
const ARROW_KEYS: [(EguiKey, Key, FocusDirection); 4] = [
    (EguiKey::ArrowUp, Key::Up, FocusDirection::Up),
    (EguiKey::ArrowDown, Key::Down, FocusDirection::Down),
    (EguiKey::ArrowLeft, Key::Left, FocusDirection::Left),
    (EguiKey::ArrowRight, Key::Right, FocusDirection::Right),
];

/// Places a [`SliderWidget`] in an egui layout.
///
/// The widget keeps its own state across frames; this adapter measures it
/// against the available space, forwards pointer and arrow-key input, and
/// paints it. The response is marked changed whenever progress moved.
pub struct Slider<'a> {
    slider: &'a mut SliderWidget,
    length: Option<f32>,
    padding: f32,
}

impl<'a> Slider<'a> {
    pub fn new(slider: &'a mut SliderWidget) -> Self {
        Self {
            slider,
            length: None,
            padding: 0.0,
        }
    }

    /// Fix the track-axis length instead of filling the available space.
    pub fn length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    /// Uniform padding around the track.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    fn desired_size(&self, available: Vec2) -> Vec2 {
        let orientation = self.slider.config().orientation;
        let primary = match self.length {
            Some(length) => MeasureSpec::Exactly(length as f64),
            None => {
                let offered = match orientation {
                    Orientation::Horizontal => available.x,
                    Orientation::Vertical => available.y,
                };
                MeasureSpec::AtMost(offered as f64)
            }
        };
        let (width_spec, height_spec) = match orientation {
            Orientation::Horizontal => (primary, MeasureSpec::Unspecified),
            Orientation::Vertical => (MeasureSpec::Unspecified, primary),
        };
        let min = sizing::MIN_LENGTH as f64;
        let size = self.slider.measure(
            self.insets(),
            Size::new(min, min),
            width_spec,
            height_spec,
        );
        vec2(size.width as f32, size.height as f32)
    }

    fn insets(&self) -> Insets {
        Insets::uniform(self.padding as f64)
    }
}

impl Widget for Slider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = self.desired_size(ui.available_size());
        let insets = self.insets();
        let config = *self.slider.config();
        let sense = if config.enabled {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let (rect, mut response) = ui.allocate_exact_size(desired, sense);

        let slider = self.slider;
        slider.layout(Size::new(rect.width() as f64, rect.height() as f64), insets);
        let before = slider.progress();

        // A press and release inside one frame arrives as a bare click
        let pressed = ui.input(|i| i.pointer.primary_pressed())
            && (response.is_pointer_button_down_on() || response.clicked());
        let released = response.clicked() || response.drag_stopped();
        if let Some(pos) = response.interact_pointer_pos() {
            let position = to_local(rect, pos);
            if pressed {
                slider.on_pointer(PointerEvent::Down { position });
            } else if response.dragged() {
                slider.on_pointer(PointerEvent::Move { position });
            }
        }
        if released {
            let position = response
                .interact_pointer_pos()
                .map(|pos| to_local(rect, pos))
                .unwrap_or(Point::ZERO);
            slider.on_pointer(PointerEvent::Up { position });
        }

        if config.enabled && config.focusable {
            if pressed {
                response.request_focus();
            }
            if response.has_focus() {
                // Arrow keys belong to the slider; the ones it cannot use are
                // handed back to egui's focus navigation below
                ui.memory_mut(|mem| {
                    mem.set_focus_lock_filter(
                        response.id,
                        EventFilter {
                            horizontal_arrows: true,
                            vertical_arrows: true,
                            ..Default::default()
                        },
                    )
                });
                for (egui_key, key, direction) in &ARROW_KEYS {
                    if !ui.input(|i| i.key_pressed(*egui_key)) {
                        continue;
                    }
                    if !slider.on_key(key).is_handled() {
                        log::trace!("Slider ignored {:?}, moving focus {:?}", key, direction);
                        ui.memory_mut(|mem| mem.move_focus(*direction));
                    }
                }
            }
        }

        if slider.progress() != before {
            log::trace!("egui slider {:?} moved to {:.3}", response.id, slider.progress());
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let mut painter = EguiPainter::new(ui.painter(), rect.min);
            slider.paint(&mut painter);

            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    ui.visuals().selection.stroke,
                    StrokeKind::Inside,
                );
            }
        }

        if config.enabled {
            let cursor = match config.orientation {
                Orientation::Horizontal => CursorIcon::ResizeHorizontal,
                Orientation::Vertical => CursorIcon::ResizeVertical,
            };
            response.on_hover_cursor(cursor)
        } else {
            response
        }
    }
}

fn to_local(rect: Rect, pos: Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

/// Paints slider geometry with an egui painter, offset to the widget rect.
pub struct EguiPainter<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiPainter<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, point: Point) -> Pos2 {
        pos2(
            self.origin.x + point.x as f32,
            self.origin.y + point.y as f32,
        )
    }
}

impl SliderPainter for EguiPainter<'_> {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        let r = rect.rect();
        let egui_rect = Rect::from_min_max(
            self.pos(Point::new(r.x0, r.y0)),
            self.pos(Point::new(r.x1, r.y1)),
        );
        let radius = rect.radii().top_left.round().clamp(0.0, u8::MAX as f64) as u8;
        self.painter
            .rect_filled(egui_rect, CornerRadius::same(radius), to_color32(color));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.painter.circle_filled(
            self.pos(circle.center),
            circle.radius as f32,
            to_color32(color),
        );
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.painter.line_segment(
            [self.pos(line.p0), self.pos(line.p1)],
            Stroke::new(width as f32, to_color32(color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotslider_core::SliderConfig;

    fn run_frame(slider: &mut SliderWidget, build: impl Fn(Slider<'_>) -> Slider<'_>) -> Rect {
        let ctx = egui::Context::default();
        let mut rect = Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui.add(build(Slider::new(&mut *slider))).rect;
            });
        });
        rect
    }

    #[test]
    fn test_horizontal_layout_in_frame() {
        let mut slider = SliderWidget::new(
            SliderConfig::new()
                .with_thumb_radius(10.0)
                .with_orientation(Orientation::Horizontal),
        );
        let rect = run_frame(&mut slider, |s| s.length(150.0));

        assert!((rect.width() - 150.0).abs() < 1e-3);
        assert!((rect.height() - 20.0).abs() < 1e-3);
        assert!((slider.bounds().size.width - 150.0).abs() < 1e-3);
        assert!(!slider.needs_redraw());
    }

    #[test]
    fn test_vertical_padding_in_frame() {
        let mut slider = SliderWidget::new(SliderConfig::new().with_thumb_radius(6.0));
        let rect = run_frame(&mut slider, |s| s.length(80.0).padding(4.0));

        assert!((rect.width() - 20.0).abs() < 1e-3);
        assert!((rect.height() - 80.0).abs() < 1e-3);
        assert!((slider.bounds().padding.x0 - 4.0).abs() < 1e-9);
    }

    /// Output of one frame with a button laid out above the slider.
    struct Frame {
        slider: Response,
        button: Response,
    }

    fn frame(
        ctx: &egui::Context,
        slider: &mut SliderWidget,
        length: f32,
        events: Vec<egui::Event>,
    ) -> Frame {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let button = ui.button("above");
                let response = ui.add(Slider::new(&mut *slider).length(length));
                out = Some(Frame {
                    slider: response,
                    button,
                });
            });
        });
        out.expect("frame ran")
    }

    fn primary(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn key_press(key: EguiKey) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn horizontal() -> SliderWidget {
        SliderWidget::new(
            SliderConfig::new()
                .with_thumb_radius(10.0)
                .with_orientation(Orientation::Horizontal),
        )
    }

    #[test]
    fn test_press_sets_progress_before_release() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ctx = egui::Context::default();
        let mut slider = horizontal();
        let rect = frame(&ctx, &mut slider, 120.0, Vec::new()).slider.rect;
        let pos = rect.min + vec2(25.0, 10.0);

        let pressed = frame(
            &ctx,
            &mut slider,
            120.0,
            vec![egui::Event::PointerMoved(pos), primary(pos, true)],
        );
        // usable extent is 120 - 2 * 10 = 100
        assert!((slider.progress() - 0.75).abs() < 1e-6);
        assert!(pressed.slider.changed());
        assert_eq!(ctx.memory(|m| m.focused()), Some(pressed.slider.id));

        for _ in 0..2 {
            let held = frame(&ctx, &mut slider, 120.0, Vec::new());
            assert!(!held.slider.changed());
            assert!((slider.progress() - 0.75).abs() < 1e-6);
        }

        frame(&ctx, &mut slider, 120.0, vec![primary(pos, false)]);
        assert!((slider.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_drag_moves_progress() {
        let ctx = egui::Context::default();
        let mut slider = horizontal();
        let rect = frame(&ctx, &mut slider, 120.0, Vec::new()).slider.rect;
        let start = rect.min + vec2(25.0, 10.0);
        let end = rect.min + vec2(75.0, 10.0);

        frame(
            &ctx,
            &mut slider,
            120.0,
            vec![egui::Event::PointerMoved(start), primary(start, true)],
        );
        frame(&ctx, &mut slider, 120.0, vec![egui::Event::PointerMoved(end)]);
        frame(&ctx, &mut slider, 120.0, Vec::new());
        assert!((slider.progress() - 0.25).abs() < 1e-6);

        frame(&ctx, &mut slider, 120.0, vec![primary(end, false)]);
        assert!((slider.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_disabled_ignores_press() {
        let ctx = egui::Context::default();
        let mut slider = horizontal();
        slider.set_enabled(false);
        let rect = frame(&ctx, &mut slider, 120.0, Vec::new()).slider.rect;
        let pos = rect.min + vec2(25.0, 10.0);

        let pressed = frame(
            &ctx,
            &mut slider,
            120.0,
            vec![egui::Event::PointerMoved(pos), primary(pos, true)],
        );
        frame(&ctx, &mut slider, 120.0, vec![primary(pos, false)]);

        assert!(slider.progress().abs() < 1e-9);
        assert!(!pressed.slider.changed());
        assert_eq!(ctx.memory(|m| m.focused()), None);
    }

    #[test]
    fn test_arrow_key_steps_focused_slider() {
        let ctx = egui::Context::default();
        let mut slider = SliderWidget::default();
        slider.set_progress(0.5);
        let id = frame(&ctx, &mut slider, 80.0, Vec::new()).slider.id;
        ctx.memory_mut(|m| m.request_focus(id));
        frame(&ctx, &mut slider, 80.0, Vec::new());

        let stepped = frame(&ctx, &mut slider, 80.0, vec![key_press(EguiKey::ArrowUp)]);
        assert!((slider.progress() - 0.52).abs() < 1e-9);
        assert!(stepped.slider.changed());
        assert_eq!(ctx.memory(|m| m.focused()), Some(id));
    }

    #[test]
    fn test_unusable_arrow_key_moves_focus() {
        let ctx = egui::Context::default();
        let mut slider = SliderWidget::default();
        slider.set_progress(1.0);
        let id = frame(&ctx, &mut slider, 80.0, Vec::new()).slider.id;
        ctx.memory_mut(|m| m.request_focus(id));
        frame(&ctx, &mut slider, 80.0, Vec::new());

        let out = frame(&ctx, &mut slider, 80.0, vec![key_press(EguiKey::ArrowUp)]);
        assert!((slider.progress() - 1.0).abs() < 1e-9);
        assert!(!out.slider.changed());
        assert_eq!(ctx.memory(|m| m.focused()), Some(out.button.id));
    }

    #[test]
    fn test_to_local() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 30.0));
        let p = to_local(rect, pos2(35.0, 25.0));
        assert!((p.x - 25.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }
}
