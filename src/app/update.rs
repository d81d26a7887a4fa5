//! Message update handlers

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderChanged(value) => {
                self.slider_value = value;
            }
            Message::SliderReleased => {
                self.apply_progress(self.slider_value);
            }
            Message::SetProgress(percent) => {
                self.slider_value = percent;
                self.apply_progress(percent);
            }
            Message::AnimationTick(now) => {
                // Both must tick; `||` would skip the pie
                let ring_changed = self.ring.tick(now);
                let pie_changed = self.pie.tick(now);
                if !(ring_changed || pie_changed) {
                    tracing::trace!("Animation tick with nothing to advance");
                }
            }
            Message::ToggleDarkMode => {
                self.settings.demo.dark_mode = !self.settings.demo.dark_mode;
            }
            Message::SaveSettings => {
                self.settings.ring.percent_completed = self.slider_value;
                self.settings.pie.percent_completed = self.slider_value;
                if let Err(e) = self.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
        }

        Task::none()
    }

    fn apply_progress(&mut self, percent: f32) {
        self.ring.set_progress(percent);
        self.pie.set_progress(percent);
    }
}
