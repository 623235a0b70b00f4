use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, Section};
use crate::ui::common::tab_at_column;
use crate::ui::{self, TAB_ROW};

/// File written by the in-app export key.
pub const EXPORT_FILE: &str = "pawsome_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Dispatch any terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        // Ignore release and repeat events reported by some terminals
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(width, height) => app.screen_fits = ui::screen_fits(width, height),
        _ => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the search input has focus, handle text input
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Section switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_section();
            } else {
                app.next_section();
            }
        }
        KeyCode::BackTab => app.prev_section(),

        // Direct section access
        KeyCode::Char('1') => app.set_section(Section::Breeds),
        KeyCode::Char('2') => app.set_section(Section::FunFacts),
        KeyCode::Char('3') => app.set_section(Section::CareTips),

        // Navigation (up/down for cards, left/right for tabs)
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_section(),
        KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Open the selected breed's image
        KeyCode::Char('o') | KeyCode::Enter => app.open_selected_image(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Search
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('c') => {
            if !app.search_term().is_empty() {
                app.clear_search();
            }
        }

        // Export
        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_content(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle key input while the search input has focus
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm and keep the text
        KeyCode::Enter | KeyCode::Esc => app.cancel_search(),

        // Clear and exit
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_search();
        }

        KeyCode::Backspace => app.search_pop(),

        // Type characters
        KeyCode::Char(c) => app.search_push(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // Nothing under the cursor is visible behind the "too small" notice
    if !app.screen_fits {
        return;
    }

    // If help is shown, a click closes it like any key
    if app.show_help {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.show_help = false;
        }
        return;
    }

    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        // Click a tab to select it
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == TAB_ROW {
                if let Some(section) = tab_at_column(mouse.column) {
                    app.set_section(section);
                }
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::NoImages;
    use crate::ui::Theme;

    fn test_app() -> App {
        App::new(Box::new(NoImages), Theme::dark())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        handle_mouse_event(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn test_number_keys_select_section() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_section(), Section::CareTips);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_section(), Section::FunFacts);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_section(), Section::Breeds);
    }

    #[test]
    fn test_tab_and_arrows_cycle_sections() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section(), Section::FunFacts);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_section(), Section::Breeds);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_section(), Section::CareTips);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.active_section(), Section::Breeds);
    }

    #[test]
    fn test_search_typing_and_editing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_active);

        // Keys that are shortcuts elsewhere are plain text while searching
        for c in "q 1c".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.running);
        assert_eq!(app.active_section(), Section::Breeds);
        assert_eq!(app.search_term(), "q 1c");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_term(), "q 1");

        press(&mut app, KeyCode::Esc);
        assert!(!app.search_active);
        assert_eq!(app.search_term(), "q 1");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.search_term(), "");
    }

    #[test]
    fn test_ctrl_c_clears_search() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.search_active);
        assert_eq!(app.search_term(), "");
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_card_navigation_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_card, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_card, 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_card, 5);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_click_tab_row() {
        let mut app = test_app();
        click(&mut app, 40, TAB_ROW);
        assert_eq!(app.active_section(), Section::CareTips);
        click(&mut app, 20, TAB_ROW);
        assert_eq!(app.active_section(), Section::FunFacts);
        // Clicks outside the tab row are ignored
        click(&mut app, 2, TAB_ROW + 5);
        assert_eq!(app.active_section(), Section::FunFacts);
    }

    #[test]
    fn test_click_closes_help_without_switching_tab() {
        let mut app = test_app();
        app.toggle_help();
        click(&mut app, 40, TAB_ROW);
        assert!(!app.show_help);
        assert_eq!(app.active_section(), Section::Breeds);

        click(&mut app, 40, TAB_ROW);
        assert_eq!(app.active_section(), Section::CareTips);
    }

    #[test]
    fn test_scroll_ignored_under_help() {
        let mut app = test_app();
        app.toggle_help();
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(app.show_help);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_mouse_ignored_while_screen_too_small() {
        let mut app = test_app();
        handle_event(&mut app, Event::Resize(40, 10));
        assert!(!app.screen_fits);
        click(&mut app, 40, TAB_ROW);
        assert_eq!(app.active_section(), Section::Breeds);

        handle_event(&mut app, Event::Resize(ui::MIN_WIDTH, ui::MIN_HEIGHT));
        assert!(app.screen_fits);
        click(&mut app, 40, TAB_ROW);
        assert_eq!(app.active_section(), Section::CareTips);
    }

    #[test]
    fn test_key_events_dispatched() {
        let mut app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        handle_event(&mut app, Event::Key(key));
        assert_eq!(app.active_section(), Section::FunFacts);

        key.code = KeyCode::Char('3');
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key));
        assert_eq!(app.active_section(), Section::FunFacts);
    }
}
