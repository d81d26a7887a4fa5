//! Recorded draw calls and their replay onto an iced canvas frame
//!
//! The progress primitives describe a frame as an ordered list of
//! [`DrawOp`]s. Recording keeps layering observable without a renderer;
//! [`paint`] turns the list into canvas paths.

use std::f32::consts::TAU;

use iced::widget::canvas::path::arc::Elliptical;
use iced::widget::canvas::{Frame, LineCap, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Radians, Renderer};

use super::geometry::Oval;

/// A single draw call, angles in degrees clockwise from 3 o'clock
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid filled oval
    FillOval { oval: Oval, color: Color },
    /// Filled pie slice, closed through the center
    FillWedge {
        oval: Oval,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    },
    /// Open arc stroked with round caps
    StrokeArc {
        oval: Oval,
        start_angle: f32,
        sweep_angle: f32,
        width: f32,
        color: Color,
    },
    /// Text centered on `center`
    Label {
        content: String,
        center: Point,
        size: f32,
        color: Color,
    },
}

fn elliptical(oval: Oval, start_angle: f32, sweep_angle: f32) -> Elliptical {
    let start = start_angle.to_radians();
    Elliptical {
        center: oval.center,
        radii: oval.radii,
        rotation: Radians(0.0),
        start_angle: Radians(start),
        end_angle: Radians(start + sweep_angle.to_radians()),
    }
}

fn full_oval(oval: Oval) -> Path {
    Path::new(|builder| {
        builder.ellipse(Elliptical {
            center: oval.center,
            radii: oval.radii,
            rotation: Radians(0.0),
            start_angle: Radians(0.0),
            end_angle: Radians(TAU),
        });
        builder.close();
    })
}

/// Replay recorded ops in order
pub fn paint(frame: &mut Frame, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::FillOval { oval, color } => {
                if oval.is_drawable() {
                    frame.fill(&full_oval(*oval), *color);
                }
            }
            DrawOp::FillWedge {
                oval,
                start_angle,
                sweep_angle,
                color,
            } => {
                if !oval.is_drawable() || *sweep_angle == 0.0 {
                    continue;
                }
                if sweep_angle.abs() >= 360.0 {
                    frame.fill(&full_oval(*oval), *color);
                    continue;
                }

                let wedge = Path::new(|builder| {
                    builder.ellipse(elliptical(*oval, *start_angle, *sweep_angle));
                    builder.line_to(oval.center);
                    builder.close();
                });
                frame.fill(&wedge, *color);
            }
            DrawOp::StrokeArc {
                oval,
                start_angle,
                sweep_angle,
                width,
                color,
            } => {
                if !oval.is_drawable() || *sweep_angle == 0.0 {
                    continue;
                }

                let arc = Path::new(|builder| {
                    builder.ellipse(elliptical(*oval, *start_angle, *sweep_angle));
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(*width)
                        .with_color(*color)
                        .with_line_cap(LineCap::Round),
                );
            }
            DrawOp::Label {
                content,
                center,
                size,
                color,
            } => {
                frame.fill_text(Text {
                    content: content.clone(),
                    position: *center,
                    color: *color,
                    size: Pixels(*size),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center,
                    ..Text::default()
                });
            }
        }
    }
}

/// Paint recorded ops into a fresh frame
pub fn render(renderer: &Renderer, size: iced::Size, ops: &[DrawOp]) -> Frame {
    let mut frame = Frame::new(renderer, size);
    paint(&mut frame, ops);
    frame
}
