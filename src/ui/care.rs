//! Care tips rendering.
//!
//! Each tip takes two lines: its title, then the description indented
//! beneath it.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view::ViewTree;

/// Render the tips under the section heading.
pub fn render(frame: &mut Frame, app: &App, view: &ViewTree, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);

    if let Some(heading) = view.heading {
        let heading = Paragraph::new(Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, chunks[0]);
    }

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("♥ ", Style::default().fg(app.theme.accent)),
                    Span::styled(
                        card.title.unwrap_or_default(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::raw(format!("  {}", card.body))),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_card));

    frame.render_stateful_widget(list, chunks[1], &mut state);
}
