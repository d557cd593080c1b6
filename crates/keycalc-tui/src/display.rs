//! Display panel: previous operand line above the current value.

use keycalc_core::{DisplayView, ERROR_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the two-line calculator display.
pub fn render_display(frame: &mut Frame, area: Rect, view: &DisplayView) {
    let theme = ColorTheme::default();
    let is_error = view.current_text == ERROR_TEXT;
    let text = vec![
        Line::from(Span::styled(
            view.previous_text.clone(),
            theme.muted_style(),
        )),
        Line::from(Span::styled(
            view.current_text.clone(),
            theme.current_style(is_error),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}
