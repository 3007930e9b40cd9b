//! Application header with branding and theme toggle.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::palette::ThemeMode;
use crate::style::widgets::{self, palette};

/// Renders the application header.
pub fn view_header(theme_mode: ThemeMode) -> Element<'static, Message> {
    let title = text("MailSift")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let subtitle = text("Email triage assistant").size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    // Sun for light mode, moon-ish glyph for dark
    let theme_glyph = match theme_mode {
        ThemeMode::Light => "\u{2600}",
        ThemeMode::Dark => "\u{263D}",
    };

    let theme_btn = button(text(theme_glyph).size(16))
        .padding([8, 12])
        .style(widgets::secondary_button_style)
        .on_press(Message::ToggleTheme);

    let bar = row![title, subtitle, Space::new().width(Length::Fill), theme_btn,]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .padding([12, 24]);

    container(bar)
        .width(Length::Fill)
        .style(widgets::header_style)
        .into()
}
