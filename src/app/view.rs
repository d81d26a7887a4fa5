//! Application view rendering

use iced::widget::{button, column, container, row, slider, text};
use iced::{Alignment, Element, Fill};

use super::{App, Message, PRESETS};
use crate::ui::theme;

impl App {
    /// Build the demo window
    pub fn view(&self) -> Element<'_, Message> {
        let indicators = row![
            captioned("Ring", self.ring.view()),
            captioned("Pie", self.pie.view()),
        ]
        .spacing(48)
        .align_y(Alignment::Center);

        let progress_slider = slider(0.0..=100.0, self.slider_value, Message::SliderChanged)
            .on_release(Message::SliderReleased)
            .step(0.5)
            .width(400);

        let presets = PRESETS.iter().fold(row![].spacing(8), |row, &percent| {
            row.push(button(text(format!("{percent}%"))).on_press(Message::SetProgress(percent)))
        });

        let actions = row![
            button(text(if self.settings.demo.dark_mode {
                "Light mode"
            } else {
                "Dark mode"
            }))
            .on_press(Message::ToggleDarkMode),
            button(text("Save style")).on_press(Message::SaveSettings),
        ]
        .spacing(8);

        let content = column![
            indicators,
            text(format!("{:.1}%", self.slider_value)).size(14),
            progress_slider,
            presets,
            actions,
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .padding(32)
            .style(|iced_theme| container::Style {
                background: Some(iced::Background::Color(theme::surface(iced_theme))),
                ..Default::default()
            })
            .into()
    }
}

/// Indicator with a caption underneath
fn captioned<'a>(caption: &'a str, indicator: Element<'a, Message>) -> Element<'a, Message> {
    column![
        indicator,
        text(caption)
            .size(14)
            .style(|iced_theme| text::Style {
                color: Some(theme::text_secondary(iced_theme)),
            }),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}
