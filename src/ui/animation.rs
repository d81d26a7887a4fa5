//! Animation helpers for the progress indicators
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::animation::AngleAnimation;
//!
//! let mut anim = AngleAnimation::start(0.0, 180.0, Instant::now());
//! let angle = anim.step(0.5); // Some(90.0)
//! ```

pub mod angle;

pub use angle::{AngleAnimation, percent_to_angle};
