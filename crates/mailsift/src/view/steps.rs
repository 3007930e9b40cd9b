//! Three-step flow indicator derived from the submission state.

use iced::widget::{Row, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{self, palette};

/// Step captions, in order.
const STEPS: [&str; 3] = ["Compose", "Analyze", "Review"];

/// Renders the flow indicator; steps up to `current` are highlighted.
pub fn view_steps(current: u8) -> Element<'static, Message> {
    let mut steps = Row::new().spacing(16).align_y(iced::Alignment::Center);

    for (index, caption) in STEPS.iter().enumerate() {
        let number = u8::try_from(index).unwrap_or(u8::MAX) + 1;
        if index > 0 {
            steps = steps.push(step_connector());
        }
        steps = steps.push(view_step(number, caption, number <= current));
    }

    container(steps)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

fn view_step(number: u8, caption: &'static str, active: bool) -> Element<'static, Message> {
    let circle_style = if active {
        widgets::step_active_style
    } else {
        widgets::step_inactive_style
    };

    let circle = container(text(number.to_string()).size(14))
        .width(Length::Fixed(28.0))
        .height(Length::Fixed(28.0))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(circle_style);

    let label = text(caption).size(13).style(move |_theme| {
        let p = palette::current();
        text::Style {
            color: Some(if active { p.text_primary } else { p.text_muted }),
        }
    });

    row![circle, label]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .into()
}

fn step_connector() -> Element<'static, Message> {
    text("\u{2014}")
        .size(14)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.border_medium),
            }
        })
        .into()
}
