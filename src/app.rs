//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::content::Card;
use crate::images::{self, ImageProvider};
use crate::ui::Theme;
use crate::view::{self, ViewTree};

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The content section shown in the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Gallery of popular breeds.
    #[default]
    Breeds,
    /// List of fun facts.
    FunFacts,
    /// Titled care tips.
    CareTips,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 3] = [Section::Breeds, Section::FunFacts, Section::CareTips];

    /// Cycle to the next section.
    pub fn next(self) -> Self {
        match self {
            Section::Breeds => Section::FunFacts,
            Section::FunFacts => Section::CareTips,
            Section::CareTips => Section::Breeds,
        }
    }

    /// Cycle to the previous section.
    pub fn prev(self) -> Self {
        match self {
            Section::Breeds => Section::CareTips,
            Section::FunFacts => Section::Breeds,
            Section::CareTips => Section::FunFacts,
        }
    }

    /// Returns the tab label for this section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Breeds => "Dog Breeds",
            Section::FunFacts => "Fun Facts",
            Section::CareTips => "Care Tips",
        }
    }

    /// Returns the stable key used in exports.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Breeds => "breeds",
            Section::FunFacts => "funfacts",
            Section::CareTips => "caretips",
        }
    }

    /// Position of this section in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            Section::Breeds => 0,
            Section::FunFacts => 1,
            Section::CareTips => 2,
        }
    }

    /// The section at a tab position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Owns the two pieces of page state: the active section and the search text.
///
/// Every operation is total. The search term is stored verbatim and never
/// filters any dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    active_section: Section,
    search_term: String,
}

impl ViewController {
    /// Starts on [`Section::Breeds`] with an empty search term.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_section(&mut self, section: Section) {
        tracing::debug!(from = ?self.active_section, to = ?section, "section changed");
        self.active_section = section;
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        tracing::trace!(term = %self.search_term, "search term changed");
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn next_section(&mut self) {
        self.set_active_section(self.active_section.next());
    }

    pub fn prev_section(&mut self) {
        self.set_active_section(self.active_section.prev());
    }

    /// Append a typed character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.search_term);
        text.push(c);
        self.set_search_term(text);
    }

    /// Remove the last character of the search term.
    pub fn pop_search_char(&mut self) {
        let mut text = std::mem::take(&mut self.search_term);
        text.pop();
        self.set_search_term(text);
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    /// Whether keystrokes go to the search input.
    pub search_active: bool,
    /// Whether the terminal is large enough to show the page.
    pub screen_fits: bool,

    controller: ViewController,
    images: Box<dyn ImageProvider>,

    /// Selected card within the current section.
    pub selected_card: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given image provider and theme.
    pub fn new(images: Box<dyn ImageProvider>, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            search_active: false,
            screen_fits: true,
            controller: ViewController::new(),
            images,
            selected_card: 0,
            theme,
            status_message: None,
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Replace the search text, as a paste would.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.controller.set_search_term(text);
    }

    pub fn active_section(&self) -> Section {
        self.controller.active_section()
    }

    pub fn search_term(&self) -> &str {
        self.controller.search_term()
    }

    /// Returns a description of the image provider.
    pub fn images_description(&self) -> &str {
        self.images.description()
    }

    /// Build the view for the current state.
    pub fn view(&self) -> ViewTree {
        view::build_view(
            self.controller.active_section(),
            self.controller.search_term(),
            self.images.as_ref(),
        )
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Switch to a specific section.
    pub fn set_section(&mut self, section: Section) {
        self.controller.set_active_section(section);
        self.selected_card = 0;
    }

    /// Switch to the next section (Breeds → Fun Facts → Care Tips → Breeds).
    pub fn next_section(&mut self) {
        self.controller.next_section();
        self.selected_card = 0;
    }

    /// Switch to the previous section.
    pub fn prev_section(&mut self) {
        self.controller.prev_section();
        self.selected_card = 0;
    }

    fn card_count(&self) -> usize {
        self.view().len()
    }

    /// Move selection down by one card.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one card.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n cards.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.card_count().saturating_sub(1);
        self.selected_card = (self.selected_card + n).min(max);
    }

    /// Move selection up by n cards.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_card = self.selected_card.saturating_sub(n);
    }

    pub fn select_first(&mut self) {
        self.selected_card = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_card = self.card_count().saturating_sub(1);
    }

    /// The currently selected card.
    pub fn selected(&self) -> Option<Card> {
        self.view().cards.into_iter().nth(self.selected_card)
    }

    /// Open the selected card's image, reporting the outcome in the status bar.
    pub fn open_selected_image(&mut self) {
        let Some(image) = self.selected().and_then(|card| card.image) else {
            self.set_status_message("No image for this card".to_string());
            return;
        };
        match images::open_in_browser(&image) {
            Ok(()) => {
                let url = image.url().unwrap_or_default();
                self.set_status_message(format!("Opened {}", url));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to open image");
                self.set_status_message(format!("Open failed: {}", e));
            }
        }
    }

    /// Focus the search input.
    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Leave the search input without clearing its text.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
    }

    /// Clear the search text and leave the input.
    pub fn clear_search(&mut self) {
        self.controller.clear_search();
        self.search_active = false;
    }

    /// Append a character to the search text.
    pub fn search_push(&mut self, c: char) {
        self.controller.push_search_char(c);
    }

    /// Remove the last character from the search text.
    pub fn search_pop(&mut self) {
        self.controller.pop_search_char();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export every section's content to a JSON file.
    pub fn export_content(&self, path: &Path) -> Result<()> {
        export_content(self.images.as_ref(), path)
    }
}

/// Write every section's view as pretty JSON to `path`.
pub fn export_content(images: &dyn ImageProvider, path: &Path) -> Result<()> {
    let mut export = serde_json::Map::new();
    export.insert("title".to_string(), serde_json::json!(crate::PAGE_TITLE));

    let sections: Vec<serde_json::Value> = view::build_all(images)
        .iter()
        .map(serde_json::to_value)
        .collect::<serde_json::Result<_>>()?;
    export.insert("sections".to_string(), serde_json::Value::Array(sections));

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    tracing::info!(path = %path.display(), "exported content");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{NoImages, UnsplashImages};

    fn test_app() -> App {
        App::new(Box::new(UnsplashImages::default()), Theme::dark())
    }

    #[test]
    fn test_controller_initial_state() {
        let controller = ViewController::new();
        assert_eq!(controller.active_section(), Section::Breeds);
        assert_eq!(controller.search_term(), "");
    }

    #[test]
    fn test_set_then_get_section() {
        let mut controller = ViewController::new();
        for from in Section::ALL {
            for to in Section::ALL {
                controller.set_active_section(from);
                controller.set_active_section(to);
                assert_eq!(controller.active_section(), to);
                controller.set_active_section(to);
                assert_eq!(controller.active_section(), to);
            }
        }
    }

    #[test]
    fn test_set_then_get_search_term() {
        let mut controller = ViewController::new();
        for term in ["", "lab", "French  Bulldog  ", " ", "ünïcödé 🐾"] {
            controller.set_search_term(term);
            assert_eq!(controller.search_term(), term);
        }
    }

    #[test]
    fn test_search_char_editing() {
        let mut controller = ViewController::new();
        controller.push_search_char('p');
        controller.push_search_char('ü');
        assert_eq!(controller.search_term(), "pü");
        controller.pop_search_char();
        assert_eq!(controller.search_term(), "p");
        controller.pop_search_char();
        controller.pop_search_char();
        assert_eq!(controller.search_term(), "");
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Breeds.next(), Section::FunFacts);
        assert_eq!(Section::CareTips.next(), Section::Breeds);
        assert_eq!(Section::Breeds.prev(), Section::CareTips);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_index(3), None);
    }

    #[test]
    fn test_section_change_resets_selection() {
        let mut app = test_app();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_card, 2);
        app.next_section();
        assert_eq!(app.active_section(), Section::FunFacts);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_selection_clamps_to_card_count() {
        let mut app = test_app();
        app.set_section(Section::FunFacts);
        app.select_next_n(100);
        assert_eq!(app.selected_card, 4);
        app.select_prev_n(100);
        assert_eq!(app.selected_card, 0);
        app.select_last();
        assert_eq!(app.selected_card, 4);
        app.select_first();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_selected_breed_has_image() {
        let mut app = test_app();
        app.select_next_n(3);
        let card = app.selected().unwrap();
        assert_eq!(card.title, Some("French Bulldog"));
        assert_eq!(
            card.image.unwrap().url(),
            Some("https://source.unsplash.com/400x300/?french-bulldog")
        );
    }

    #[test]
    fn test_open_image_without_image_sets_status() {
        let mut app = test_app();
        app.set_section(Section::FunFacts);
        app.open_selected_image();
        assert_eq!(app.get_status_message(), Some("No image for this card"));
    }

    #[test]
    fn test_clear_search_leaves_input() {
        let mut app = test_app();
        app.start_search();
        app.search_push('x');
        app.clear_search();
        assert!(!app.search_active);
        assert_eq!(app.search_term(), "");
    }

    #[test]
    fn test_gallery_unaffected_by_search() {
        let mut app = test_app();
        for c in "zzz".chars() {
            app.search_push(c);
        }
        assert_eq!(app.view().len(), 6);
    }

    #[test]
    fn test_export_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dogs.json");
        export_content(&NoImages, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0]["section"], "breeds");
        assert_eq!(sections[0]["cards"].as_array().unwrap().len(), 6);
        assert_eq!(sections[1]["cards"].as_array().unwrap().len(), 5);
        assert_eq!(sections[2]["cards"].as_array().unwrap().len(), 6);
        assert_eq!(sections[2]["cards"][0]["title"], "Balanced Diet");
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let err = export_content(&NoImages, Path::new("/nonexistent/dir/out.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to write export"));
    }
}
