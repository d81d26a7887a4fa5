//! UI module for the progress indicators
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs, geometry and measurement
//! - **Animation** (`animation`): Sweep-angle interpolation
//! - **Theme** (`theme`): Default colors and hex parsing

pub mod animation;
pub mod primitives;
pub mod theme;
