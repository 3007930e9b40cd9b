//! Shadow presets and corner radii.

use iced::{Color, Shadow, Vector};

use super::palette;

/// Rounded corner radii.
#[allow(missing_docs)]
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 8.0;
    pub const PILL: f32 = 9999.0;
}

/// No shadow.
pub fn none() -> Shadow {
    Shadow::default()
}

/// Barely-there shadow, for pressed states.
pub fn subtle() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    }
}

/// Lifted shadow, for floating elements like toasts.
pub fn medium() -> Shadow {
    Shadow {
        color: palette::current().shadow_medium,
        offset: Vector::new(0.0, 3.0),
        blur_radius: 10.0,
    }
}

/// Colored halo under the primary button.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.35),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 10.0,
    }
}

/// Brighter halo for hover.
pub const fn glow_strong(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.55),
        offset: Vector::new(0.0, 3.0),
        blur_radius: 16.0,
    }
}
