//! Fun facts rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::view::ViewTree;

/// Render the facts as a bulleted list.
pub fn render(frame: &mut Frame, app: &App, view: &ViewTree, area: Rect) {
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(app.theme.accent)),
                Span::raw(card.body),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_card));

    frame.render_stateful_widget(list, area, &mut state);
}
