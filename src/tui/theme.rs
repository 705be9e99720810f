//! # Theme
//!
//! Dark and light palettes. Terminal cells have no alpha channel, so
//! "opacity" is rendered by blending a foreground color toward the theme
//! background (see [`Theme::fade`]).

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: (u8, u8, u8),
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub border: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub blue: Color,
    pub green: Color,
    pub amber: Color,
    pub violet: Color,
    pub red: Color,
    pub badge: Color,
    pub skeleton: (u8, u8, u8),
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: (0x03, 0x07, 0x12),
            text_primary: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0x9c, 0xa3, 0xaf),
            text_tertiary: Color::Rgb(0x6b, 0x72, 0x80),
            border: Color::Rgb(0x37, 0x41, 0x51),
            accent_primary: Color::Rgb(0x81, 0x8c, 0xf8),
            accent_secondary: Color::Rgb(0xa8, 0x55, 0xf7),
            blue: Color::Rgb(0x60, 0xa5, 0xfa),
            green: Color::Rgb(0x10, 0xb9, 0x81),
            amber: Color::Rgb(0xf5, 0x9e, 0x0b),
            violet: Color::Rgb(0x8b, 0x5c, 0xf6),
            red: Color::Rgb(0xef, 0x44, 0x44),
            badge: Color::Rgb(0xa5, 0xb4, 0xfc),
            skeleton: (0x4b, 0x55, 0x63),
        }
    }

    pub fn light() -> Self {
        Self {
            background: (0xf9, 0xfa, 0xfb),
            text_primary: Color::Rgb(0x11, 0x18, 0x27),
            text_secondary: Color::Rgb(0x6b, 0x72, 0x80),
            text_tertiary: Color::Rgb(0x9c, 0xa3, 0xaf),
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            accent_primary: Color::Rgb(0x63, 0x66, 0xf1),
            accent_secondary: Color::Rgb(0xa8, 0x55, 0xf7),
            blue: Color::Rgb(0x3b, 0x82, 0xf6),
            green: Color::Rgb(0x10, 0xb9, 0x81),
            amber: Color::Rgb(0xf5, 0x9e, 0x0b),
            violet: Color::Rgb(0x8b, 0x5c, 0xf6),
            red: Color::Rgb(0xef, 0x44, 0x44),
            badge: Color::Rgb(0x43, 0x38, 0xca),
            skeleton: (0x9c, 0xa3, 0xaf),
        }
    }

    /// Blends `rgb` toward the background. `opacity` 1.0 = unchanged, 0.0 = invisible.
    pub fn fade(&self, rgb: (u8, u8, u8), opacity: f32) -> Color {
        let t = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * t).round() as u8;
        Color::Rgb(
            mix(rgb.0, self.background.0),
            mix(rgb.1, self.background.1),
            mix(rgb.2, self.background.2),
        )
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_tertiary)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// RGB components of a `Color::Rgb`, or white for anything else.
pub fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0xff, 0xff, 0xff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::dark();
        assert_eq!(theme.fade((0xff, 0xff, 0xff), 1.0), Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(theme.fade((0xff, 0xff, 0xff), 0.0), Color::Rgb(0x03, 0x07, 0x12));
    }

    #[test]
    fn test_fade_clamps_opacity() {
        let theme = Theme::light();
        assert_eq!(theme.fade((0, 0, 0), 2.0), Color::Rgb(0, 0, 0));
        assert_eq!(theme.fade((0, 0, 0), -1.0), Color::Rgb(0xf9, 0xfa, 0xfb));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name(ThemeName::Light), Theme::light());
        assert_eq!(Theme::from_name(ThemeName::Dark), Theme::dark());
    }

    #[test]
    fn test_rgb_of() {
        assert_eq!(rgb_of(Color::Rgb(1, 2, 3)), (1, 2, 3));
        assert_eq!(rgb_of(Color::Reset), (0xff, 0xff, 0xff));
    }
}
