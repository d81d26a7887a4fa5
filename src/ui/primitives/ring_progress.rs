//! Ring progress primitive
//!
//! An outer stroked arc sweeping over an inner filled disc, with the
//! percentage centered in the disc.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use std::time::Instant;

use iced::widget::Canvas;
use iced::widget::canvas::{Geometry, Program};
use iced::{Color, Element, Rectangle, Renderer, Size, Theme, mouse};

use super::draw::{self, DrawOp};
use super::geometry::{self, Oval};
use super::measure::{self, MeasureSpec, Padding};
use super::progress::ProgressState;
use crate::ui::theme;

/// Ring progress configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    /// Ring stroke width
    pub stroke_width: f32,
    /// Space between ring and disc before the half-stroke is added
    pub base_gap: f32,
    /// Arc origin in degrees (-90 is 12 o'clock)
    pub start_angle: f32,
    /// Label font size
    pub text_size: f32,
    /// Inner disc color
    pub track_color: Color,
    /// Ring color
    pub progress_color: Color,
    /// Label color
    pub text_color: Color,
    /// Progress shown before the first update (0 - 100)
    pub initial_percent: f32,
    pub min_size: Size<u32>,
    pub padding: Padding,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            stroke_width: 10.0,
            base_gap: 20.0,
            start_angle: -90.0,
            text_size: 50.0,
            track_color: theme::TRACK,
            progress_color: theme::PROGRESS,
            text_color: theme::TEXT,
            initial_percent: 0.0,
            min_size: Size::new(0, 0),
            padding: Padding::ZERO,
        }
    }
}

impl RingConfig {
    /// Gap between ring and disc: `base_gap + stroke_width / 2`
    pub fn gap(&self) -> f32 {
        self.base_gap + self.stroke_width / 2.0
    }
}

/// Rectangles derived from the view size on every draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Bounds of the stroked ring
    pub outer: Rectangle,
    /// Bounds of the filled disc
    pub inner: Rectangle,
}

impl RingGeometry {
    pub fn new(config: &RingConfig, size: Size) -> Self {
        let bounds = geometry::bounds(size);
        Self {
            outer: geometry::inset(bounds, config.stroke_width),
            inner: geometry::inset(bounds, config.stroke_width + config.gap()),
        }
    }
}

/// Draw calls for one frame: disc, then ring, then label
pub fn ring_ops(config: &RingConfig, angle: f32, label: &str, size: Size) -> Vec<DrawOp> {
    let rects = RingGeometry::new(config, size);
    let mut ops = Vec::with_capacity(3);

    ops.push(DrawOp::FillOval {
        oval: Oval::inscribed(rects.inner),
        color: config.track_color,
    });
    ops.push(DrawOp::StrokeArc {
        oval: Oval::inscribed(rects.outer),
        start_angle: config.start_angle,
        sweep_angle: angle,
        width: config.stroke_width,
        color: config.progress_color,
    });

    if !label.trim().is_empty() {
        ops.push(DrawOp::Label {
            content: label.to_string(),
            center: geometry::label_anchor(rects.inner),
            size: config.text_size,
            color: config.text_color,
        });
    }

    ops
}

/// Ring progress view: configuration, measured size and progress state
#[derive(Debug, Clone)]
pub struct RingProgress {
    config: RingConfig,
    measured: Size<u32>,
    progress: ProgressState,
}

impl RingProgress {
    pub fn new(config: RingConfig) -> Self {
        Self {
            config,
            measured: Size::new(0, 0),
            progress: ProgressState::new(config.initial_percent),
        }
    }

    pub fn angle(&self) -> f32 {
        self.progress.angle()
    }

    pub fn label(&self) -> &str {
        self.progress.label()
    }

    #[allow(dead_code)]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[allow(dead_code)]
    pub fn measured_size(&self) -> Size<u32> {
        self.measured
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Animate to `percent` (0 - 100) over one second
    pub fn set_progress(&mut self, percent: f32) {
        self.set_progress_at(percent, Instant::now());
    }

    pub fn set_progress_at(&mut self, percent: f32, now: Instant) {
        self.progress.set_progress_at(percent, now);
    }

    /// Apply an interpolated fraction from the frame scheduler
    #[allow(dead_code)]
    pub fn step(&mut self, t: f32) -> bool {
        self.progress.step(t)
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.progress.tick(now)
    }

    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size<u32> {
        self.measured = measure::measure(
            self.config.min_size,
            self.config.padding,
            width_spec,
            height_spec,
        );
        self.measured
    }

    fn size(&self) -> Size {
        Size::new(self.measured.width as f32, self.measured.height as f32)
    }

    #[allow(dead_code)]
    pub fn geometry(&self) -> RingGeometry {
        RingGeometry::new(&self.config, self.size())
    }

    /// Draw calls for the current angle at the measured size
    #[allow(dead_code)]
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        ring_ops(&self.config, self.angle(), self.label(), self.size())
    }

    /// Canvas element sized to the last measurement
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let size = self.size();
        Canvas::new(RingCanvas {
            config: self.config,
            angle: self.angle(),
            label: self.label().to_string(),
        })
        .width(size.width)
        .height(size.height)
        .into()
    }
}

/// Per-frame snapshot handed to the canvas
#[derive(Debug, Clone)]
struct RingCanvas {
    config: RingConfig,
    angle: f32,
    label: String,
}

impl<Message> Program<Message> for RingCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let ops = ring_ops(&self.config, self.angle, &self.label, bounds.size());
        vec![draw::render(renderer, bounds.size(), &ops).into_geometry()]
    }
}
