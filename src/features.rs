//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly; they only build
//! the plain configuration the primitives take.

pub mod settings;

pub use settings::Settings;
