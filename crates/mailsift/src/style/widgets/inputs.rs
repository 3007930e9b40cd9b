//! Scrollable style functions.

use iced::widget::{container, scrollable};
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

fn rail(scroller_color: Color) -> scrollable::Rail {
    scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(scroller_color),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SMALL.into(),
            },
        },
    }
}

/// Scrollable style with a minimal scroller that brightens on interaction.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let scroller_color = match status {
        scrollable::Status::Active { .. } => p.border_medium,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered,
            ..
        } => {
            if is_vertical_scrollbar_hovered {
                p.primary_light
            } else {
                p.border_medium
            }
        }
        scrollable::Status::Dragged { .. } => p.primary,
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(scroller_color),
        horizontal_rail: rail(p.border_medium),
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: shadows::none(),
            icon: p.text_muted,
        },
    }
}
