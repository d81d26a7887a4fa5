//! Linear sweep-angle animation
//!
//! The frame scheduler hands in an interpolated fraction (or a timestamp
//! that is turned into one); the animation maps it onto the sweep angle.
//! No easing is applied.

use std::time::{Duration, Instant};

/// Duration of every progress transition
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// `start + (target - start) * t`
pub fn interpolate_angle(start: f32, target: f32, t: f32) -> f32 {
    start + (target - start) * t
}

/// Sweep angle for a percentage, `360 * percent / 100`
pub fn percent_to_angle(percent: f32) -> f32 {
    360.0 * percent / 100.0
}

/// Animation state: idle, or interpolating between two angles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AngleAnimation {
    #[default]
    Idle,
    Animating {
        from: f32,
        to: f32,
        started: Instant,
        duration: Duration,
    },
}

impl AngleAnimation {
    /// Begin a transition from `from` to `to` at `now`
    pub fn start(from: f32, to: f32, now: Instant) -> Self {
        Self::Animating {
            from,
            to,
            started: now,
            duration: ANIMATION_DURATION,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Angle the current transition started from
    #[allow(dead_code)]
    pub fn start_angle(&self) -> Option<f32> {
        match self {
            Self::Animating { from, .. } => Some(*from),
            Self::Idle => None,
        }
    }

    /// Angle the current transition is heading to
    #[allow(dead_code)]
    pub fn target_angle(&self) -> Option<f32> {
        match self {
            Self::Animating { to, .. } => Some(*to),
            Self::Idle => None,
        }
    }

    /// Elapsed fraction of the transition at `now`, in [0, 1]
    pub fn fraction_at(&self, now: Instant) -> Option<f32> {
        match self {
            Self::Animating {
                started, duration, ..
            } => {
                if duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(*started);
                Some((elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0))
            }
            Self::Idle => None,
        }
    }

    /// Apply one animation step and return the interpolated angle
    ///
    /// A fraction of 1.0 finishes the transition. Returns `None` when idle.
    pub fn step(&mut self, t: f32) -> Option<f32> {
        let Self::Animating { from, to, .. } = *self else {
            return None;
        };

        let t = t.clamp(0.0, 1.0);
        let angle = interpolate_angle(from, to, t);
        if t >= 1.0 {
            *self = Self::Idle;
        }
        Some(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_is_linear() {
        for &t in &[0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(interpolate_angle(30.0, 270.0, t), 30.0 + (270.0 - 30.0) * t);
        }
    }

    #[test]
    fn test_step_matches_formula() {
        let mut anim = AngleAnimation::start(0.0, 180.0, Instant::now());
        assert_eq!(anim.step(0.3), Some(0.0 + (180.0 - 0.0) * 0.3));
        assert!(anim.is_animating());
    }

    #[test]
    fn test_full_fraction_returns_to_idle() {
        let mut anim = AngleAnimation::start(90.0, 288.0, Instant::now());
        assert_eq!(anim.step(1.0), Some(288.0));
        assert_eq!(anim, AngleAnimation::Idle);
        assert_eq!(anim.step(0.5), None);
    }

    #[test]
    fn test_fraction_from_clock() {
        let started = Instant::now();
        let anim = AngleAnimation::start(0.0, 360.0, started);

        assert_eq!(anim.fraction_at(started), Some(0.0));
        let half = anim.fraction_at(started + Duration::from_millis(500)).unwrap();
        assert!((half - 0.5).abs() < 1e-4);
        assert_eq!(anim.fraction_at(started + Duration::from_secs(3)), Some(1.0));
        assert_eq!(AngleAnimation::Idle.fraction_at(started), None);
    }

    #[test]
    fn test_percent_to_angle() {
        assert_eq!(percent_to_angle(0.0), 0.0);
        assert_eq!(percent_to_angle(25.0), 90.0);
        assert_eq!(percent_to_angle(100.0), 360.0);
    }
}
