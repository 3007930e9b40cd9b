//! Email submission form: free-text editor, file attach, and submit.

use iced::widget::{Space, button, column, container, row, text, text_editor};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::SubmissionState;
use crate::style::widgets::{self, palette};

/// Renders the submission form card.
pub fn view_form<'a>(
    editor: &'a text_editor::Content,
    state: &'a SubmissionState,
) -> Element<'a, Message> {
    let label = text("Email content").size(14).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let editor = text_editor(editor)
        .placeholder("Paste the email text here, or attach a .txt/.eml file...")
        .on_action(Message::EditorAction)
        .height(Length::Fixed(220.0))
        .padding(12);

    let attach_btn = button(text("\u{1F4CE} Attach file").size(13))
        .padding([8, 12])
        .style(widgets::ghost_button_style)
        .on_press(Message::PickFile);

    let attachment_caption: Element<'_, Message> = match state.attachment_name() {
        Some(name) => text(name)
            .size(12)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            })
            .into(),
        None => Space::new().into(),
    };

    let submit_btn = if state.is_loading() {
        button(text("Analyzing...").size(14))
            .padding([10, 24])
            .style(widgets::primary_button_style)
    } else {
        button(text("Analyze email").size(14))
            .padding([10, 24])
            .style(widgets::primary_button_style)
            .on_press(Message::Submit)
    };

    let actions = row![
        attach_btn,
        attachment_caption,
        Space::new().width(Length::Fill),
        submit_btn,
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    container(column![label, editor, actions].spacing(12))
        .width(Length::Fill)
        .padding(20)
        .style(widgets::card_style)
        .into()
}
