//! Shortcut bar.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Keyboard hints as `(key, action)` pairs.
fn shortcuts(show_history: bool) -> [(&'static str, &'static str); 5] {
    let history = if show_history {
        "hide history"
    } else {
        "show history"
    };
    [
        ("Enter", "equals"),
        ("Bksp", "delete"),
        ("Esc", "clear"),
        ("h", history),
        ("Ctrl+C", "quit"),
    ]
}

fn shortcut_line(show_history: bool) -> Line<'static> {
    let theme = ColorTheme::default();
    let mut spans = Vec::new();
    for (i, (key, action)) in shortcuts(show_history).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(key, theme.shortcut_style()));
        spans.push(Span::raw(format!(": {action}")));
    }
    Line::from(spans)
}

/// Render the shortcut bar.
pub fn render_footer(frame: &mut Frame, area: Rect, show_history: bool) {
    let paragraph =
        Paragraph::new(shortcut_line(show_history)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
