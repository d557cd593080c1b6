//! On-screen keypad: layout, hit testing, and rendering.

use keycalc_core::keyboard::{map_key_name, KeyCommand};
use keycalc_core::operator::Operator;
use keycalc_core::InputEvent;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::{ButtonKind, ColorTheme};

/// Keypad grid as `(label, key name)` pairs, row by row.
pub const KEYPAD: [[(&str, &str); 4]; 5] = [
    [("C", "Escape"), ("⌫", "Backspace"), ("%", "%"), ("÷", "/")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("×", "*")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("-", "-")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+")],
    [("Hist", "h"), ("0", "0"), (".", "."), ("=", "=")],
];

/// A keypad button placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedButton {
    pub area: Rect,
    pub label: &'static str,
    pub key: &'static str,
}

impl PlacedButton {
    /// Command sent when the button is pressed.
    #[must_use]
    pub fn command(&self) -> Option<KeyCommand> {
        map_key_name(self.key)
    }

    fn kind(&self) -> ButtonKind {
        match self.command() {
            Some(KeyCommand::Input(InputEvent::Digit(_) | InputEvent::DecimalPoint)) => {
                ButtonKind::Digit
            }
            Some(KeyCommand::Input(InputEvent::Operator(_))) => ButtonKind::Operator,
            Some(KeyCommand::Input(InputEvent::Equals)) => ButtonKind::Equals,
            _ => ButtonKind::Function,
        }
    }

    fn operator(&self) -> Option<Operator> {
        match self.command() {
            Some(KeyCommand::Input(InputEvent::Operator(op))) => Some(op),
            _ => None,
        }
    }
}

/// Split the keypad area into button cells.
#[must_use]
pub fn layout_buttons(area: Rect) -> Vec<PlacedButton> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let mut buttons = Vec::with_capacity(20);
    for (row_area, row) in rows.iter().zip(KEYPAD.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);
        for (cell, &(label, key)) in cells.iter().zip(row.iter()) {
            buttons.push(PlacedButton {
                area: *cell,
                label,
                key,
            });
        }
    }
    buttons
}

/// Button under a screen position, if any.
#[must_use]
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<PlacedButton> {
    let position = Position::new(column, row);
    layout_buttons(area)
        .into_iter()
        .find(|b| b.area.contains(position))
}

/// Render the keypad, highlighting the operator waiting for its operand.
pub fn render_keypad(frame: &mut Frame, area: Rect, selected: Option<Operator>) {
    let theme = ColorTheme::default();
    for button in layout_buttons(area) {
        let active = selected.is_some() && button.operator() == selected;
        let style = theme.button_style(button.kind(), active);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        let paragraph = Paragraph::new(button.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, button.area);
    }
}
