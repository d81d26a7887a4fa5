//! Measurement pass for the progress primitives
//!
//! Each axis is resolved independently from a desired size (minimum size
//! plus padding) and the constraint handed down by the parent.

use iced::Size;

/// Constraint for one axis of the measurement pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// Parent dictates the exact size
    Exact(u32),
    /// Parent allows anything up to this size
    AtMost(u32),
    /// No constraint
    Unspecified,
}

/// Padding in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Resolve one axis against its constraint
pub fn measure_dimension(desired: u32, spec: MeasureSpec) -> u32 {
    match spec {
        MeasureSpec::Exact(size) => size,
        MeasureSpec::AtMost(size) => desired.min(size),
        MeasureSpec::Unspecified => desired,
    }
}

/// Measure both axes: desired size is `min_size + padding`
pub fn measure(
    min_size: Size<u32>,
    padding: Padding,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size<u32> {
    let desired_width = min_size.width.saturating_add(padding.horizontal());
    let desired_height = min_size.height.saturating_add(padding.vertical());

    Size::new(
        measure_dimension(desired_width, width_spec),
        measure_dimension(desired_height, height_spec),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ignores_padding() {
        let size = measure(
            Size::new(40, 40),
            Padding::uniform(30),
            MeasureSpec::Exact(200),
            MeasureSpec::Exact(200),
        );
        assert_eq!(size, Size::new(200, 200));
    }

    #[test]
    fn test_at_most_clamps_desired() {
        assert_eq!(measure_dimension(300, MeasureSpec::AtMost(150)), 150);
        assert_eq!(measure_dimension(100, MeasureSpec::AtMost(150)), 100);
    }

    #[test]
    fn test_unspecified_uses_desired() {
        let padding = Padding {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        let size = measure(
            Size::new(100, 50),
            padding,
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
        );
        assert_eq!(size, Size::new(106, 54));
    }

    #[test]
    fn test_axes_are_independent() {
        let size = measure(
            Size::new(300, 300),
            Padding::ZERO,
            MeasureSpec::AtMost(150),
            MeasureSpec::Exact(80),
        );
        assert_eq!(size, Size::new(150, 80));
    }
}
