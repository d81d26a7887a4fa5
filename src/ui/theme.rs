//! Color palette for the progress indicators
//!
//! Widget defaults mirror the classic look: white track, black progress
//! arc and black label. The demo window picks its chrome colors from the
//! active iced theme.

use iced::color;
use iced::{Color, Theme};

/// Default track / background disc color
pub const TRACK: Color = Color::WHITE;
/// Default progress arc / foreground wedge color
pub const PROGRESS: Color = Color::BLACK;
/// Default label color
pub const TEXT: Color = Color::BLACK;

// Demo window chrome
mod dark {
    use super::*;
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

mod light {
    use super::*;
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Panel background behind the indicators
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Caption text under each indicator
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Resolve a configured hex color, falling back when it cannot be parsed
///
/// Accepts whatever [`Color::parse`] does: `#rgb`, `#rgba`, `#rrggbb` and
/// `#rrggbbaa`, with the `#` optional.
pub fn resolve(input: &str, fallback: Color) -> Color {
    let input = input.trim();
    // Color::parse slices by byte offset
    let parsed = if input.is_ascii() {
        input.parse::<Color>().ok()
    } else {
        None
    };

    match parsed {
        Some(color) => color,
        None => {
            tracing::warn!("Invalid color {:?}, using {}", input, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hex_forms() {
        assert_eq!(resolve("#ffffff", PROGRESS), Color::WHITE);
        assert_eq!(resolve("000000", TRACK), Color::BLACK);
        assert_eq!(resolve("#fff", PROGRESS), Color::WHITE);
        assert_eq!(resolve("  #336699 ", TRACK).to_string(), "#336699");
    }

    #[test]
    fn test_resolve_with_alpha() {
        let color = resolve("#ff000080", TRACK);
        assert_eq!(color.into_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_resolve_falls_back_on_garbage() {
        assert_eq!(resolve("", TRACK), TRACK);
        assert_eq!(resolve("not a color", TRACK), TRACK);
        assert_eq!(resolve("#gggggg", PROGRESS), PROGRESS);
        assert_eq!(resolve("#ffé000", TRACK), TRACK);
        assert_eq!(resolve("#é0", TRACK), TRACK);
    }

    #[test]
    fn test_defaults_format_as_hex() {
        assert_eq!(TRACK.to_string(), "#ffffff");
        assert_eq!(PROGRESS.to_string(), "#000000");
    }
}
