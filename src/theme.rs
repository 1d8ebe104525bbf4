//! Light/dark visual modes for the terminal surface.

use ratatui::style::Color;

/// Cosmetic visual mode. Client-side only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light surface, the startup default.
    #[default]
    Light,
    /// Dark surface.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the theme control, naming the mode a toggle switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark Mode",
            ThemeMode::Dark => "☀️ Light Mode",
        }
    }

    /// Color palette for this mode.
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                background: Color::White,
                text: Color::Black,
                grid: Color::DarkGray,
                x_mark: Color::Rgb(255, 65, 108),
                o_mark: Color::Rgb(33, 147, 176),
                in_progress: Color::Rgb(37, 117, 252),
                draw: Color::DarkGray,
                winning: Color::Yellow,
            },
            ThemeMode::Dark => Palette {
                background: Color::Black,
                text: Color::Gray,
                grid: Color::DarkGray,
                x_mark: Color::Rgb(255, 65, 108),
                o_mark: Color::Rgb(33, 147, 176),
                in_progress: Color::Rgb(100, 160, 255),
                draw: Color::Gray,
                winning: Color::Yellow,
            },
        }
    }
}

/// Colors for each themed element.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Surface background.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Grid lines and empty-square hints.
    pub grid: Color,
    /// X marks and the X win banner.
    pub x_mark: Color,
    /// O marks and the O win banner.
    pub o_mark: Color,
    /// In-progress status banner.
    pub in_progress: Color,
    /// Draw banner.
    pub draw: Color,
    /// Highlight for the winner's squares.
    pub winning: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_mode_and_label() {
        let mode = ThemeMode::default();
        let label = mode.toggle_label();
        let flipped = mode.flipped();
        assert_ne!(flipped, mode);
        assert_eq!(flipped.flipped(), mode);
        assert_eq!(flipped.flipped().toggle_label(), label);
    }
}
