//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;
use serde::Deserialize;

/// Which theme to use, as chosen in settings or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick light or dark from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the page title and paw marks.
    pub accent: Color,
    /// Color for image links on breed cards.
    pub link: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section titles and headings.
    pub header: Style,
    /// Style for secondary text such as subtitles and placeholders.
    pub muted: Style,
    /// Style for the selected card.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            accent: Color::Yellow,
            link: Color::LightBlue,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            accent: Color::Magenta,
            link: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a [`ThemeChoice`] into a theme.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Border style for a card, depending on whether it is selected.
    pub fn card_border(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}
