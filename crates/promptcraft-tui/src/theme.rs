//! Light and dark palettes.

use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme. Chosen from `GuideState::dark_mode` each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub success: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(248, 250, 252),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(100, 116, 139),
        accent: Color::Rgb(124, 58, 237),
        highlight: Color::Rgb(219, 39, 119),
        border: Color::Rgb(203, 213, 225),
        success: Color::Rgb(22, 163, 74),
    };

    pub const DARK: Theme = Theme {
        background: Color::Rgb(17, 24, 39),
        text: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(156, 163, 175),
        accent: Color::Rgb(167, 139, 250),
        highlight: Color::Rgb(244, 114, 182),
        border: Color::Rgb(55, 65, 81),
        success: Color::Rgb(74, 222, 128),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::for_mode(true), Theme::DARK);
        assert_eq!(Theme::for_mode(false), Theme::LIGHT);
        assert_ne!(Theme::DARK.background, Theme::LIGHT.background);
    }
}
