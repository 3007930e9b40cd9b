//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)] // Field names are self-describing color roles
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_blue: Color,
    pub accent_green: Color,
    pub accent_yellow: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow colors
    pub shadow: Color,
    pub shadow_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.34, 0.30, 0.92),
            primary_light: Color::from_rgb(0.50, 0.47, 1.0),
            primary_dark: Color::from_rgb(0.25, 0.21, 0.74),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(1.0, 1.0, 1.0),
            background: Color::from_rgb(0.975, 0.975, 0.99),
            background_secondary: Color::from_rgb(0.955, 0.955, 0.975),

            text_primary: Color::from_rgb(0.10, 0.10, 0.15),
            text_secondary: Color::from_rgb(0.40, 0.42, 0.50),
            text_muted: Color::from_rgb(0.58, 0.60, 0.68),
            text_on_primary: Color::WHITE,

            accent_blue: Color::from_rgb(0.12, 0.52, 0.96),
            accent_green: Color::from_rgb(0.13, 0.68, 0.42),
            accent_yellow: Color::from_rgb(0.92, 0.66, 0.05),
            accent_red: Color::from_rgb(0.90, 0.24, 0.30),

            selected: Color::from_rgb(0.93, 0.93, 1.0),
            hover: Color::from_rgb(0.96, 0.96, 0.99),

            border_subtle: Color::from_rgb(0.91, 0.91, 0.94),
            border_medium: Color::from_rgb(0.84, 0.85, 0.90),

            shadow: Color::from_rgba(0.1, 0.1, 0.2, 0.05),
            shadow_medium: Color::from_rgba(0.1, 0.1, 0.2, 0.10),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.55, 0.50, 1.0),
            primary_light: Color::from_rgb(0.68, 0.64, 1.0),
            primary_dark: Color::from_rgb(0.42, 0.37, 0.85),

            surface: Color::from_rgb(0.11, 0.11, 0.14),
            surface_elevated: Color::from_rgb(0.14, 0.14, 0.18),
            background: Color::from_rgb(0.07, 0.07, 0.10),
            background_secondary: Color::from_rgb(0.09, 0.09, 0.12),

            text_primary: Color::from_rgb(0.93, 0.93, 0.96),
            text_secondary: Color::from_rgb(0.64, 0.66, 0.74),
            text_muted: Color::from_rgb(0.48, 0.50, 0.58),
            text_on_primary: Color::WHITE,

            accent_blue: Color::from_rgb(0.36, 0.64, 1.0),
            accent_green: Color::from_rgb(0.25, 0.82, 0.50),
            accent_yellow: Color::from_rgb(0.98, 0.80, 0.25),
            accent_red: Color::from_rgb(0.98, 0.38, 0.42),

            selected: Color::from_rgb(0.16, 0.15, 0.26),
            hover: Color::from_rgb(0.15, 0.15, 0.19),

            border_subtle: Color::from_rgb(0.19, 0.19, 0.24),
            border_medium: Color::from_rgb(0.27, 0.27, 0.33),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_colors_are_theme_specific() {
        // Light surfaces need fainter shadows than dark ones
        assert!(Palette::light().shadow.a < Palette::dark().shadow.a);
        assert!(Palette::light().shadow_medium.a < Palette::dark().shadow_medium.a);
    }
}
