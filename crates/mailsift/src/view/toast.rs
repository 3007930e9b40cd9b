//! Toast overlay, stacked in the bottom-right corner.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Color, Element, Length};

use crate::message::{Message, ToastMessage};
use crate::model::{Toast, Toasts, Variant};
use crate::style::widgets::{self, palette};

/// Width of every toast card.
const TOAST_WIDTH: f32 = 320.0;

/// Renders the toast overlay. Empty when no toast is displayed.
pub fn view_toasts(toasts: &Toasts) -> Element<'_, Message> {
    if toasts.is_empty() {
        return Space::new().into();
    }

    let cards = Column::with_children(toasts.iter().map(view_toast))
        .spacing(10)
        .align_x(iced::Alignment::End);

    container(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(16)
        .into()
}

fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let p = palette::current();
    let accent = accent_color(toast.variant, &p);
    let id = toast.id();

    let icon = text(variant_glyph(toast.variant))
        .size(14)
        .style(move |_theme| text::Style {
            color: Some(accent),
        });

    let title = text(&toast.title)
        .size(14)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .style(move |_theme| text::Style {
            color: Some(accent),
        });

    let dismiss_btn = button(text("\u{2715}").size(12))
        .padding([2, 6])
        .style(widgets::ghost_button_style)
        .on_press(Message::Toast(ToastMessage::Dismiss(id)));

    let header = row![icon, title, Space::new().width(Length::Fill), dismiss_btn]
        .spacing(6)
        .align_y(iced::Alignment::Center);

    let mut body = column![header].spacing(6);

    if let Some(description) = &toast.description {
        body = body.push(text(description).size(12).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        }));
    }

    if toast.action.is_some() || toast.cancel.is_some() {
        let mut actions = row![].spacing(8);
        if let Some(action) = &toast.action {
            actions = actions.push(
                button(text(&action.label).size(12))
                    .padding([4, 10])
                    .style(widgets::primary_button_style)
                    .on_press(Message::Toast(ToastMessage::ActionPressed(id))),
            );
        }
        if let Some(cancel) = &toast.cancel {
            actions = actions.push(
                button(text(&cancel.label).size(12))
                    .padding([4, 10])
                    .style(widgets::secondary_button_style)
                    .on_press(Message::Toast(ToastMessage::CancelPressed(id))),
            );
        }
        body = body.push(actions);
    }

    container(body)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(12)
        .style(move |theme| widgets::toast_style(theme, accent))
        .into()
}

const fn variant_glyph(variant: Variant) -> &'static str {
    match variant {
        Variant::Success => "\u{2713}",
        Variant::Error => "\u{2715}",
        Variant::Info => "\u{2139}",
        Variant::Warning => "\u{26A0}",
    }
}

const fn accent_color(variant: Variant, p: &palette::Palette) -> Color {
    match variant {
        Variant::Success => p.accent_green,
        Variant::Error => p.accent_red,
        Variant::Info => p.accent_blue,
        Variant::Warning => p.accent_yellow,
    }
}
