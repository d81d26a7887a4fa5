//! Bounding-box math shared by the progress primitives
//!
//! Arcs are described by the oval inscribed in a rectangle, so a
//! non-square view yields an elliptical ring or pie.

use iced::{Point, Rectangle, Size, Vector};

/// Full bounds of a view of the given size, anchored at the origin
pub fn bounds(size: Size) -> Rectangle {
    Rectangle::new(Point::ORIGIN, size)
}

/// Shrink a rectangle by `amount` on every side
///
/// The result is not clamped: insetting past the center produces a
/// rectangle with negative extent, which [`Oval::is_drawable`] rejects.
pub fn inset(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: rect.x + amount,
        y: rect.y + amount,
        width: rect.width - 2.0 * amount,
        height: rect.height - 2.0 * amount,
    }
}

/// True when `inner` lies within `outer` (edges may touch)
#[allow(dead_code)]
pub fn contains(outer: &Rectangle, inner: &Rectangle) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.x + inner.width <= outer.x + outer.width
        && inner.y + inner.height <= outer.y + outer.height
}

/// Oval inscribed in a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oval {
    pub center: Point,
    pub radii: Vector,
}

impl Oval {
    pub fn inscribed(rect: Rectangle) -> Self {
        Self {
            center: rect.center(),
            radii: Vector::new(rect.width / 2.0, rect.height / 2.0),
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.radii.x > 0.0 && self.radii.y > 0.0
    }
}

/// Anchor for a label centered inside `rect`
pub fn label_anchor(rect: Rectangle) -> Point {
    rect.center()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shrinks_each_side() {
        let rect = inset(bounds(Size::new(200.0, 100.0)), 10.0);
        assert_eq!(rect, Rectangle::new(Point::new(10.0, 10.0), Size::new(180.0, 80.0)));
    }

    #[test]
    fn test_oval_from_rect() {
        let oval = Oval::inscribed(Rectangle::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0)));
        assert_eq!(oval.center, Point::new(60.0, 45.0));
        assert_eq!(oval.radii, Vector::new(50.0, 25.0));
        assert!(oval.is_drawable());
    }

    #[test]
    fn test_degenerate_oval() {
        let oval = Oval::inscribed(inset(bounds(Size::new(10.0, 10.0)), 8.0));
        assert!(!oval.is_drawable());
    }
}
