//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Slider dragged (0 - 100)
    SliderChanged(f32),
    /// Slider released, apply its value
    SliderReleased,
    /// Preset button pressed
    SetProgress(f32),
    /// Frame from the animation scheduler
    AnimationTick(Instant),
    /// Toggle dark / light mode
    ToggleDarkMode,
    /// Persist the current settings
    SaveSettings,
}
