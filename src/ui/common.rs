//! Common UI components shared across sections.
//!
//! This module contains the header bar, tab bar, search bar, status bar,
//! and help overlay.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Section};

/// Divider drawn between tabs.
const TAB_DIVIDER: &str = "|";

/// Render the header bar with the page title.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" 🐾 ", Style::default().fg(app.theme.accent)),
        Span::styled(
            crate::PAGE_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(crate::PAGE_HEADING, app.theme.header),
        Span::raw(" │ "),
        Span::styled(app.images_description().to_string(), app.theme.muted),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Titles shown in the tab bar, in tab order.
pub fn tab_titles() -> Vec<String> {
    Section::ALL
        .iter()
        .map(|section| format!(" {}:{} ", section.index() + 1, section.label()))
        .collect()
}

/// Find the tab drawn at a column of the tab bar.
///
/// Each tab is padded by one column on both sides and followed by the
/// divider, matching how [`Tabs`] lays them out.
pub fn tab_at_column(column: u16) -> Option<Section> {
    let column = column as usize;
    let mut start = 0;
    for (index, title) in tab_titles().iter().enumerate() {
        let end = start + title.width() + 2;
        if column < end {
            return Section::from_index(index);
        }
        start = end + TAB_DIVIDER.width();
    }
    None
}

/// Render the tab bar showing available sections.
///
/// Highlights the currently active section.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = tab_titles().into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .select(app.active_section().index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider(TAB_DIVIDER);

    frame.render_widget(tabs, area);
}

/// Render the search input.
///
/// The term is echoed as typed. While the input is focused the terminal
/// cursor sits after the last character.
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search_active {
        Style::default().fg(app.theme.highlight)
    } else {
        Style::default().fg(app.theme.border)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style);

    let term = app.search_term();
    // Leave one column for the cursor while typing
    let inner_width = area.width.saturating_sub(2) as usize;
    let room = if app.search_active {
        inner_width.saturating_sub(1)
    } else {
        inner_width
    };
    let shown = visible_tail(term, room);

    let line = if term.is_empty() && !app.search_active {
        Line::from(Span::styled("Press / to search", app.theme.muted))
    } else {
        Line::from(shown.to_string())
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if app.search_active {
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let offset = u16::try_from(shown.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}

/// The longest suffix of `text` that fits in `width` columns.
///
/// Long search terms scroll so the characters being typed stay in view.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = index;
    }
    &text[start..]
}

/// Render the status bar at the bottom.
///
/// Shows: section position, search term, available controls.
/// Also displays temporary status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let section = app.active_section();
    let count = app.view().len();

    // Context-sensitive controls
    let controls = if app.search_active {
        "Type to search | Enter/Esc:done ^C:clear"
    } else {
        match section {
            Section::Breeds => "↑↓:select o:open image Tab:switch /:search ?:help q:quit",
            Section::FunFacts | Section::CareTips => {
                "↑↓:select Tab:switch /:search e:export ?:help q:quit"
            }
        }
    };

    let search = if app.search_term().is_empty() {
        String::new()
    } else {
        format!(" | search: \"{}\"", app.search_term())
    };

    let status = format!(
        " {} {}/{}{} | {}",
        section.label(),
        (app.selected_card + 1).min(count),
        count,
        search,
        controls,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current section.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch tabs"),
        Line::from("  1/2/3       Jump to a tab"),
        Line::from("  ↑/↓ j/k     Select card"),
        Line::from("  Home/End    First/last card"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Search",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  /         Focus search"),
        Line::from("  c         Clear search"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  o         Open breed image"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        assert_eq!(
            tab_titles(),
            vec![" 1:Dog Breeds ", " 2:Fun Facts ", " 3:Care Tips "]
        );
    }

    #[test]
    fn test_tab_at_column() {
        // " 1:Dog Breeds " spans 0..16, divider at 16
        assert_eq!(tab_at_column(0), Some(Section::Breeds));
        assert_eq!(tab_at_column(15), Some(Section::Breeds));
        // " 2:Fun Facts " spans 17..32
        assert_eq!(tab_at_column(20), Some(Section::FunFacts));
        // " 3:Care Tips " spans 33..48
        assert_eq!(tab_at_column(40), Some(Section::CareTips));
        assert_eq!(tab_at_column(60), None);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("poodle", 10), "poodle");
        assert_eq!(visible_tail("poodle", 3), "dle");
        assert_eq!(visible_tail("poodle", 0), "");
        assert_eq!(visible_tail("", 5), "");
        // Wide characters are never split
        assert_eq!(visible_tail("ab🐾🐾", 3), "🐾");
        assert_eq!(visible_tail("ab🐾🐾", 5), "b🐾🐾");
    }
}
