//! Progress state shared by the ring and pie primitives
//!
//! Holds the current sweep angle, the label and the in-flight animation.
//! A new target always restarts the animation from whatever angle is on
//! screen right now.

use std::time::Instant;

use crate::ui::animation::{AngleAnimation, percent_to_angle};

/// Clamp a requested percentage into [0, 100]; NaN becomes 0
pub fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        tracing::warn!("Progress percentage is NaN, using 0");
        return 0.0;
    }
    if !(0.0..=100.0).contains(&percent) {
        tracing::warn!("Progress percentage {} out of range, clamping", percent);
    }
    percent.clamp(0.0, 100.0)
}

/// Label text for a percentage; whole numbers keep one decimal (`"50.0%"`)
pub fn format_label(percent: f32) -> String {
    format!("{percent:?}%")
}

#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    angle: f32,
    label: String,
    animation: AngleAnimation,
}

impl ProgressState {
    /// Start at the angle for `initial_percent` with an empty label
    pub fn new(initial_percent: f32) -> Self {
        Self {
            angle: percent_to_angle(clamp_percent(initial_percent)),
            label: String::new(),
            animation: AngleAnimation::Idle,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    #[allow(dead_code)]
    pub fn animation(&self) -> &AngleAnimation {
        &self.animation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Update the label and animate from the current angle to the new target
    pub fn set_progress_at(&mut self, percent: f32, now: Instant) {
        let percent = clamp_percent(percent);
        let target = percent_to_angle(percent);

        self.label = format_label(percent);
        self.animation = AngleAnimation::start(self.angle, target, now);

        tracing::debug!(
            "Progress set to {} ({:.1}° -> {:.1}°)",
            self.label,
            self.angle,
            target
        );
    }

    /// Apply an interpolated fraction; returns true when a redraw is needed
    pub fn step(&mut self, t: f32) -> bool {
        match self.animation.step(t) {
            Some(angle) => {
                self.angle = angle;
                if !self.animation.is_animating() {
                    tracing::debug!("Progress animation finished at {:.1}°", angle);
                }
                true
            }
            None => false,
        }
    }

    /// Advance by wall-clock time; returns true when a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.animation.fraction_at(now) {
            Some(t) => self.step(t),
            None => false,
        }
    }
}
