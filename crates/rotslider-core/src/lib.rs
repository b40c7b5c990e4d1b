//! RotSlider Core Library
//!
//! Platform-agnostic slider widget: configuration, progress state,
//! measure/layout, pointer and key mapping, and render geometry.

pub mod config;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod paint;
pub mod slider;
pub mod style;

pub use config::{FillOrigin, Orientation, SliderConfig};
pub use geometry::{SliderGeometry, TICK_STROKE_WIDTH, TrackMetrics};
pub use input::{EventStatus, Key, PointerEvent, Step};
pub use layout::{Bounds, MeasureSpec, measure};
pub use paint::{DrawCommand, RecordingPainter, SliderPainter};
pub use slider::{KEY_STEP, ProgressListener, SliderWidget, clamp_progress};
pub use style::{DefaultTheme, SliderStyle, StyleError, StyleResult, ThemeColorRole, ThemeColors};
