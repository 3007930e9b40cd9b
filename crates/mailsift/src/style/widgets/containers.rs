//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header bar with a hairline border separating it from the page.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Card for the form and result panels.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Category badge for a productive classification.
pub fn badge_productive_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    badge(p.accent_green)
}

/// Category badge for any other classification.
pub fn badge_default_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    badge(p.accent_yellow)
}

fn badge(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Filled circle for a reached step in the flow indicator.
pub fn step_active_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.primary)),
        text_color: Some(p.text_on_primary),
        border: Border {
            color: p.primary,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Hollow circle for a step not yet reached.
pub fn step_inactive_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_muted),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Toast card with a variant-colored accent border.
pub fn toast_style(_theme: &iced::Theme, accent: Color) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: Some(p.text_primary),
        border: Border {
            color: accent,
            width: 1.5,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}
