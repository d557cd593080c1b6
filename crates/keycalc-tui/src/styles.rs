//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub operator: Color,
    pub accent: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            operator: Color::Yellow,
            accent: Color::Green,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the current value line; red when showing the error sentinel.
    #[must_use]
    pub fn current_style(&self, is_error: bool) -> Style {
        let fg = if is_error { self.error } else { self.text };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Key names in the shortcut bar.
    #[must_use]
    pub fn shortcut_style(&self) -> Style {
        Style::default().fg(self.operator)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for a keypad button.
    #[must_use]
    pub fn button_style(&self, kind: ButtonKind, active: bool) -> Style {
        let base = match kind {
            ButtonKind::Digit => Style::default().fg(self.text),
            ButtonKind::Operator => Style::default().fg(self.operator),
            ButtonKind::Equals => Style::default().fg(self.accent),
            ButtonKind::Function => Style::default().fg(self.primary),
        };
        if active {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            base
        }
    }
}

/// Visual category of a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Equals,
    Function,
}
