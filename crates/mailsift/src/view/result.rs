//! Result panels: one of loading, success, or error, matching the flow state.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{FlowState, SubmissionState};
use crate::style::widgets::{self, palette};

/// Renders the panel for the current flow state. Idle renders nothing.
pub fn view_result(state: &SubmissionState) -> Element<'_, Message> {
    match &state.flow {
        FlowState::Idle => Space::new().into(),
        FlowState::Loading => view_loading(),
        FlowState::Success(classification) => view_success(classification, state.copy_confirmed),
        FlowState::Failed(message) => view_failure(message),
    }
}

fn view_loading() -> Element<'static, Message> {
    let body = column![
        text("Analyzing email...").size(16),
        text("This usually takes a few seconds.")
            .size(13)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
    ]
    .spacing(6)
    .align_x(iced::Alignment::Center);

    card(
        container(body)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .into(),
    )
}

fn view_success(
    classification: &mailsift_core::Classification,
    copy_confirmed: bool,
) -> Element<'_, Message> {
    let badge_style = if classification.is_productive() {
        widgets::badge_productive_style
    } else {
        widgets::badge_default_style
    };

    let badge = container(text(&classification.category).size(12))
        .padding([4, 12])
        .style(badge_style);

    let headline = row![
        text("Classification").size(16),
        Space::new().width(Length::Fill),
        badge,
    ]
    .align_y(iced::Alignment::Center);

    let reply_label = text("Suggested reply").size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let reply = container(text(&classification.response).size(14))
        .width(Length::Fill)
        .padding(12)
        .style(|_theme| {
            let p = palette::current();
            container::Style {
                background: Some(iced::Background::Color(p.background_secondary)),
                border: iced::Border {
                    color: p.border_subtle,
                    width: 1.0,
                    radius: widgets::radius::SMALL.into(),
                },
                ..Default::default()
            }
        });

    let copy_caption = if copy_confirmed {
        "\u{2713} Copied!"
    } else {
        "Copy reply"
    };
    let copy_btn = button(text(copy_caption).size(13))
        .padding([8, 16])
        .style(widgets::secondary_button_style)
        .on_press(Message::CopyResponse);

    let reset_btn = button(text("Analyze another").size(13))
        .padding([8, 16])
        .style(widgets::ghost_button_style)
        .on_press(Message::Reset);

    let actions = row![copy_btn, reset_btn].spacing(12);

    card(
        column![headline, reply_label, reply, actions]
            .spacing(12)
            .into(),
    )
}

fn view_failure(message: &str) -> Element<'_, Message> {
    let headline = text("Something went wrong").size(16).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.accent_red),
        }
    });

    let detail = text(message).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let retry_btn = button(text("Try again").size(13))
        .padding([8, 16])
        .style(widgets::secondary_button_style)
        .on_press(Message::Reset);

    card(column![headline, detail, retry_btn].spacing(12).into())
}

fn card(body: Element<'_, Message>) -> Element<'_, Message> {
    container(body)
        .width(Length::Fill)
        .padding(20)
        .style(widgets::card_style)
        .into()
}
