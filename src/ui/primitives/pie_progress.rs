//! Pie progress primitive
//!
//! A filled background disc with a filled wedge sweeping from the start
//! angle, and the percentage centered on top.

use std::time::Instant;

use iced::widget::Canvas;
use iced::widget::canvas::{Geometry, Program};
use iced::{Color, Element, Rectangle, Renderer, Size, Theme, mouse};

use super::draw::{self, DrawOp};
use super::geometry::{self, Oval};
use super::measure::{self, MeasureSpec, Padding};
use super::progress::ProgressState;
use crate::ui::theme;

/// Pie progress configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieConfig {
    /// Wedge origin in degrees (-90 is 12 o'clock)
    pub start_angle: f32,
    pub text_size: f32,
    /// Background disc color
    pub background_color: Color,
    /// Wedge color
    pub foreground_color: Color,
    pub text_color: Color,
    /// Progress shown before the first update (0 - 100)
    pub initial_percent: f32,
    pub min_size: Size<u32>,
    pub padding: Padding,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            text_size: 50.0,
            background_color: theme::TRACK,
            foreground_color: theme::PROGRESS,
            text_color: theme::TEXT,
            initial_percent: 0.0,
            min_size: Size::new(0, 0),
            padding: Padding::ZERO,
        }
    }
}

/// Draw calls for one frame: background disc, wedge, label
pub fn pie_ops(config: &PieConfig, angle: f32, label: &str, size: Size) -> Vec<DrawOp> {
    let rect = geometry::bounds(size);
    let oval = Oval::inscribed(rect);
    let mut ops = vec![
        DrawOp::FillOval {
            oval,
            color: config.background_color,
        },
        DrawOp::FillWedge {
            oval,
            start_angle: config.start_angle,
            sweep_angle: angle,
            color: config.foreground_color,
        },
    ];

    if !label.trim().is_empty() {
        ops.push(DrawOp::Label {
            content: label.to_string(),
            center: geometry::label_anchor(rect),
            size: config.text_size,
            color: config.text_color,
        });
    }

    ops
}

#[derive(Debug, Clone)]
pub struct PieProgress {
    config: PieConfig,
    measured: Size<u32>,
    progress: ProgressState,
}

impl PieProgress {
    pub fn new(config: PieConfig) -> Self {
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

    pub fn set_progress(&mut self, percent: f32) {
        self.set_progress_at(percent, Instant::now());
    }

    pub fn set_progress_at(&mut self, percent: f32, now: Instant) {
        self.progress.set_progress_at(percent, now);
    }

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
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        pie_ops(&self.config, self.angle(), self.label(), self.size())
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let size = self.size();
        Canvas::new(PieCanvas {
            config: self.config,
            angle: self.angle(),
            label: self.label().to_string(),
        })
        .width(size.width)
        .height(size.height)
        .into()
    }
}

#[derive(Debug, Clone)]
struct PieCanvas {
    config: PieConfig,
    angle: f32,
    label: String,
}

impl<Message> Program<Message> for PieCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let ops = pie_ops(&self.config, self.angle, &self.label, bounds.size());
        vec![draw::render(renderer, bounds.size(), &ops).into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use std::time::Duration;

    fn measured_pie() -> PieProgress {
        let mut pie = PieProgress::new(PieConfig::default());
        pie.measure(MeasureSpec::Exact(200), MeasureSpec::Exact(200));
        pie
    }

    #[test]
    fn test_single_rect_spans_bounds() {
        let mut pie = measured_pie();
        pie.set_progress(10.0);
        let ops = pie.draw_ops();

        let DrawOp::FillOval { oval, .. } = ops[0] else {
            panic!("background disc must come first");
        };
        assert_eq!(oval.center, Point::new(100.0, 100.0));
        assert_eq!(oval.radii.x, 100.0);
        assert!(matches!(&ops[2], DrawOp::Label { center, .. } if *center == Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_background_before_wedge() {
        let mut pie = measured_pie();
        pie.set_progress(25.0);
        pie.step(1.0);

        let ops = pie.draw_ops();
        let background = ops.iter().position(|op| matches!(op, DrawOp::FillOval { .. }));
        let wedge = ops.iter().position(|op| matches!(op, DrawOp::FillWedge { .. }));
        assert!(background.unwrap() < wedge.unwrap());
        assert!(matches!(
            ops[1],
            DrawOp::FillWedge { start_angle, sweep_angle, .. } if start_angle == -90.0 && sweep_angle == 90.0
        ));
    }

    #[test]
    fn test_label_before_animation_completes() {
        let mut pie = measured_pie();
        pie.set_progress(30.0);
        assert_eq!(pie.label(), "30.0%");
        assert_eq!(pie.angle(), 0.0);
    }

    #[test]
    fn test_interrupt_restarts_from_current_angle() {
        let now = Instant::now();
        let mut pie = measured_pie();
        pie.set_progress_at(50.0, now);
        pie.tick(now + Duration::from_millis(500));
        let captured = pie.angle();
        assert!(captured > 0.0 && captured < 180.0);

        pie.set_progress_at(80.0, now + Duration::from_millis(500));
        assert_eq!(pie.progress().animation().start_angle(), Some(captured));

        pie.tick(now + Duration::from_millis(1500));
        assert!((pie.angle() - 288.0).abs() < 1e-3);
    }

    #[test]
    fn test_at_most_measurement() {
        let config = PieConfig {
            min_size: Size::new(300, 300),
            ..PieConfig::default()
        };
        let mut pie = PieProgress::new(config);
        let size = pie.measure(MeasureSpec::AtMost(150), MeasureSpec::AtMost(150));
        assert_eq!(size, Size::new(150, 150));
        assert_eq!(pie.measured_size(), size);
    }
}
