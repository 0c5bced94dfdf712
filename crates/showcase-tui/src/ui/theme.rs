//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};
use showcase_core::Accent;

use crate::app::ThemeChoice;

/// Showcase color palette
pub struct Theme {
    // Primary branding colors
    pub brand: Color,
    pub brand_dark: Color,
    pub on_brand: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - header purple
            brand: Color::Rgb(108, 99, 255),   // #6C63FF
            brand_dark: Color::Rgb(33, 33, 33), // #212121
            on_brand: Color::Rgb(255, 255, 255),

            // Status colors
            success: Color::Rgb(76, 175, 80),  // #4CAF50
            warning: Color::Rgb(255, 152, 0),  // #FF9800
            danger: Color::Rgb(255, 107, 107), // #FF6B6B
            info: Color::Rgb(33, 150, 243),    // #2196F3

            // UI elements
            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(108, 99, 255),  // #6C63FF
            text_primary: Color::Rgb(245, 245, 245),   // #F5F5F5
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(153, 153, 153),     // #999999
            selection: Color::Rgb(55, 55, 55),         // #373737
        }
    }
}

impl Theme {
    /// Theme for a configured choice
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Default => Self::default(),
            ThemeChoice::HighContrast => Self::high_contrast(),
        }
    }

    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    /// Header bar style
    pub fn header(&self) -> Style {
        Style::default()
            .bg(self.brand)
            .fg(self.on_brand)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.brand_dark)
        } else {
            Style::default().fg(self.text_secondary).bg(self.brand_dark)
        }
    }

    /// Terminal color for a catalog accent
    pub fn accent(&self, accent: Accent) -> Color {
        Color::Rgb(accent.r, accent.g, accent.b)
    }

    /// Foreground-only style in an accent color
    ///
    /// Very dark accents are lifted to the brand color so they stay visible
    /// on a dark terminal.
    pub fn accent_fg(&self, accent: Accent) -> Style {
        if accent.luminance() < 0.1 {
            Style::default().fg(self.brand)
        } else {
            Style::default().fg(self.accent(accent))
        }
    }

    /// Filled block in an accent color, with readable text on top
    pub fn accent_fill(&self, accent: Accent) -> Style {
        let fg = if accent.prefers_dark_text() {
            Color::Black
        } else {
            Color::White
        };
        Style::default()
            .bg(self.accent(accent))
            .fg(fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            selection: Color::Blue,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_conversion() {
        let theme = Theme::default();
        assert_eq!(
            theme.accent(Accent::from_u32(0x3178C6)),
            Color::Rgb(0x31, 0x78, 0xC6)
        );
    }

    #[test]
    fn test_dark_accent_is_lifted() {
        let theme = Theme::default();
        assert_eq!(theme.accent_fg(Accent::from_u32(0x000020)).fg, Some(theme.brand));
        assert_eq!(
            theme.accent_fg(Accent::from_u32(0xFF6B6B)).fg,
            Some(Color::Rgb(0xFF, 0x6B, 0x6B))
        );
    }

    #[test]
    fn test_theme_choice() {
        let theme = Theme::from_choice(ThemeChoice::HighContrast);
        assert_eq!(theme.border, Color::White);
    }
}
