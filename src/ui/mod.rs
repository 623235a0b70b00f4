//! Terminal UI rendering using ratatui.
//!
//! This module contains all the section-specific rendering logic for the TUI.
//! Each section is implemented in its own submodule with a `render` function
//! that draws a [`ViewTree`].
//!
//! ## Submodules
//!
//! - [`gallery`]: Responsive grid of breed cards with image links
//! - [`facts`]: Bulleted list of fun facts
//! - [`care`]: Titled care tips under a heading
//! - [`common`]: Shared components (header, tabs, search bar, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │ Search (common::render_search_bar)   │
//! ├──────────────────────────────────────┤
//! │ Section content                      │
//! │ (gallery/facts/care::render)         │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod care;
pub mod common;
pub mod facts;
pub mod gallery;
pub mod theme;

pub use theme::{Theme, ThemeChoice};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Section};
use crate::view::ViewTree;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 14;

/// Row of the tab bar, counted from the top of the terminal.
pub const TAB_ROW: u16 = 1;

/// Whether a terminal of this size can show the page rather than the
/// "too small" notice.
pub fn screen_fits(width: u16, height: u16) -> bool {
    width >= MIN_WIDTH && height >= MIN_HEIGHT
}

/// Draw one frame for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if !screen_fits(area.width, area.height) {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Length(3), // Search
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);
    common::render_search_bar(frame, app, chunks[2]);

    let view = app.view();
    render_content(frame, app, &view, chunks[3]);

    common::render_status_bar(frame, app, chunks[4]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Draw the framed content area for a view: title, subtitle, then the
/// section body.
fn render_content(frame: &mut Frame, app: &App, view: &ViewTree, area: Rect) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", view.title), app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(view.subtitle, app.theme.muted)));
    frame.render_widget(subtitle, chunks[0]);

    match view.section {
        Section::Breeds => gallery::render(frame, app, view, chunks[1]),
        Section::FunFacts => facts::render(frame, app, view, chunks[1]),
        Section::CareTips => care::render(frame, app, view, chunks[1]),
    }
}
