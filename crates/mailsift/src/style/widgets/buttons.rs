//! Button style functions.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

fn filled(color: Color, text_color: Color, border_radius: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(color)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: border_radius.into(),
        },
        shadow: shadows::none(),
        snap: false,
    }
}

/// Filled brand-colored button with a glow on hover. Used for submit.
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    match status {
        button::Status::Active => button::Style {
            shadow: shadows::glow(p.primary),
            ..filled(p.primary, p.text_on_primary, radius::MEDIUM)
        },
        button::Status::Hovered => button::Style {
            shadow: shadows::glow_strong(p.primary),
            ..filled(p.primary_light, p.text_on_primary, radius::MEDIUM)
        },
        button::Status::Pressed => button::Style {
            shadow: shadows::subtle(),
            ..filled(p.primary_dark, p.text_on_primary, radius::MEDIUM)
        },
        button::Status::Disabled => filled(p.text_muted, p.surface, radius::MEDIUM),
    }
}

/// Outlined button. Used for the copy and retry actions.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let fill = match status {
        button::Status::Active | button::Status::Disabled => Color::TRANSPARENT,
        button::Status::Hovered => p.hover,
        button::Status::Pressed => p.selected,
    };

    button::Style {
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        ..filled(fill, p.text_primary, radius::LARGE)
    }
}

/// Borderless low-emphasis button. Used for attach and dismiss.
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    match status {
        button::Status::Active | button::Status::Disabled => {
            filled(Color::TRANSPARENT, p.text_secondary, radius::MEDIUM)
        }
        button::Status::Hovered => button::Style {
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..filled(p.hover, p.text_primary, radius::MEDIUM)
        },
        button::Status::Pressed => filled(p.selected, p.text_primary, radius::MEDIUM),
    }
}
