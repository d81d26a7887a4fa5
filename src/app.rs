//! Demo application hosting both progress indicators

mod message;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::ui::primitives::{MeasureSpec, PieProgress, RingProgress};
pub use message::Message;

/// Preset percentages offered as buttons
pub const PRESETS: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Application state
pub struct App {
    pub settings: Settings,
    pub ring: RingProgress,
    pub pie: PieProgress,
    /// Slider position (0 - 100), applied on release
    pub slider_value: f32,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::load()), Task::none())
    }

    /// Build widgets from settings and run the measurement pass
    pub fn with_settings(settings: Settings) -> Self {
        let mut ring = RingProgress::new(settings.ring.to_config());
        let mut pie = PieProgress::new(settings.pie.to_config());

        let spec = MeasureSpec::Exact(settings.demo.widget_size);
        let ring_size = ring.measure(spec, spec);
        let pie_size = pie.measure(spec, spec);
        tracing::debug!("Measured ring {:?}, pie {:?}", ring_size, pie_size);

        let slider_value = settings.ring.percent_completed.clamp(0.0, 100.0);

        Self {
            settings,
            ring,
            pie,
            slider_value,
        }
    }

    pub fn title(&self) -> String {
        format!("Circle Progress - {:.0}%", self.slider_value)
    }

    pub fn theme(&self) -> Theme {
        if self.settings.demo.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// True while either indicator is mid-transition
    pub fn is_animating(&self) -> bool {
        subscription_logic::needs_animation_subscription(
            self.ring.is_animating(),
            self.pie.is_animating(),
        )
    }

    /// Frame ticks only while something is animating
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.is_animating() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(ring_animating: bool, pie_animating: bool) -> bool {
        ring_animating || pie_animating
    }
}
