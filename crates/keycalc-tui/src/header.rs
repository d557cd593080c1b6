//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, history_len: usize, show_history: bool) {
    let theme = ColorTheme::default();
    let panel = if show_history { "shown" } else { "hidden" };
    let text = vec![Line::from(vec![
        Span::styled("KeyCalc", theme.header_style()),
        Span::raw(format!(" | History: {history_len} ({panel})")),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" KeyCalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
