//! Breed gallery rendering.
//!
//! Lays breed cards out in a responsive grid: one column on narrow
//! terminals, up to three on wide ones.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::Card;
use crate::images::ImageRef;
use crate::view::ViewTree;

/// Height of one card, borders included.
const CARD_HEIGHT: u16 = 6;

/// Number of grid columns that fit in `width`.
pub fn column_count(width: u16) -> usize {
    match width {
        0..=69 => 1,
        70..=109 => 2,
        _ => 3,
    }
}

/// Index of the first grid row to draw so the selected card stays visible.
fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns;
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Render the gallery grid.
pub fn render(frame: &mut Frame, app: &App, view: &ViewTree, area: Rect) {
    let columns = column_count(area.width);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let first_row = first_visible_row(app.selected_card, columns, visible_rows);

    let rows: Vec<&[Card]> = view
        .cards
        .chunks(columns)
        .skip(first_row)
        .take(visible_rows)
        .collect();

    let row_areas =
        Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows.len()]).split(area);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, (cards, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
        for (column, (card, cell)) in cards.iter().zip(cells.iter()).enumerate() {
            let index = (first_row + row_offset) * columns + column;
            render_card(frame, app, card, index == app.selected_card, *cell);
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &Card, selected: bool, area: Rect) {
    let title_style = if selected {
        app.theme.header
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.title.unwrap_or_default()),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.card_border(selected));

    let image_line = match &card.image {
        Some(ImageRef::Url(url)) => Line::from(vec![
            Span::raw("🖼 "),
            Span::styled(url.clone(), Style::default().fg(app.theme.link)),
        ]),
        Some(ImageRef::Unavailable) | None => {
            Line::from(Span::styled("(no image)", app.theme.muted))
        }
    };

    let lines = vec![image_line, Line::from(Span::styled(card.body, app.theme.muted))];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(40), 1);
        assert_eq!(column_count(80), 2);
        assert_eq!(column_count(140), 3);
    }

    #[test]
    fn test_first_visible_row_keeps_selection_in_view() {
        // Everything fits
        assert_eq!(first_visible_row(5, 3, 2), 0);
        // One row visible, selection on row 1
        assert_eq!(first_visible_row(4, 3, 1), 1);
        // Single column, two rows visible
        assert_eq!(first_visible_row(5, 1, 2), 4);
        assert_eq!(first_visible_row(0, 1, 2), 0);
    }
}
