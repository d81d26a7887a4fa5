//! Primitive UI elements - atomic building blocks
//!
//! This module contains the progress indicators and the pieces they are
//! built from. Each indicator implements iced's `canvas::Program` trait
//! through a per-frame snapshot.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own measurement and rendering
//! - **Observable**: Drawing is recorded as [`DrawOp`]s before it is painted
//!
//! # Contents
//!
//! - [`RingProgress`] - Stroked ring over a filled disc
//! - [`PieProgress`] - Filled wedge over a filled disc

pub mod draw;
pub mod geometry;
pub mod measure;
pub mod pie_progress;
pub mod progress;
pub mod ring_progress;

pub use measure::{MeasureSpec, Padding};
pub use pie_progress::{PieConfig, PieProgress};
pub use ring_progress::{RingConfig, RingProgress};
