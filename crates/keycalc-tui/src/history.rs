//! History panel listing completed computations, most recent first.

use keycalc_core::History;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the history panel.
pub fn render_history(frame: &mut Frame, area: Rect, history: &History) {
    let theme = ColorTheme::default();
    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Line::styled(
            "No calculations yet",
            theme.muted_style(),
        ))]
    } else {
        history
            .iter()
            .map(|entry| ListItem::new(Line::raw(entry.to_string())))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" History ({}/{}) ", history.len(), history.capacity()));
    frame.render_widget(List::new(items).block(block), area);
}
