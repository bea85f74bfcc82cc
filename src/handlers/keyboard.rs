//! Keyboard Input Handler
//!
//! Handles all keyboard input. Modal popups (confirmation, add-product
//! input, search input) take the keys first; the normal bindings only
//! apply when no popup is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Delete-checked confirmation prompt
    if app.model.ui.confirm_delete_checked {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.delete_checked();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete_checked = false;
            }
            _ => {
                // Ignore other keys while the prompt is showing
            }
        }
        return;
    }

    // Add-product input popup
    if app.model.ui.new_product_input.is_some() {
        match key.code {
            KeyCode::Esc => {
                app.model.ui.new_product_input = None;
            }
            KeyCode::Enter => {
                app.submit_new_product();
            }
            KeyCode::Backspace => {
                if let Some(input) = app.model.ui.new_product_input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = app.model.ui.new_product_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    // Search input
    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => {
                // Drop the filter entirely
                app.model.ui.search_mode = false;
                app.model.ui.search_query.clear();
                clamp_selection(app);
            }
            KeyCode::Enter => {
                // Accept the filter and go back to the list
                app.model.ui.search_mode = false;
            }
            KeyCode::Backspace => {
                app.model.ui.search_query.pop();
                clamp_selection(app);
            }
            KeyCode::Char(c) => {
                app.model.ui.search_query.push(c);
                clamp_selection(app);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Char('g') | KeyCode::Home => select_row(app, 0),
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.model.visible_products().len();
            if len > 0 {
                select_row(app, len - 1);
            }
        }

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_checked(),
        KeyCode::Char('a') => app.open_add_product(),
        KeyCode::Char('s') => app.cycle_sort_criteria(),
        KeyCode::Char('r') => app.toggle_sort_direction(),
        KeyCode::Char('/') => {
            app.model.ui.search_mode = true;
            app.model.ui.search_query.clear();
        }
        KeyCode::Char('D') => app.confirm_delete_checked(),
        KeyCode::Char('m') => app.toggle_move_preference(),
        KeyCode::Char('R') => app.request_reload(),

        KeyCode::Esc => {
            // Clear an accepted search filter
            if !app.model.ui.search_query.is_empty() {
                app.model.ui.search_query.clear();
                clamp_selection(app);
            }
        }

        _ => {}
    }
}

fn move_selection(app: &mut App, delta: isize) {
    let len = app.model.visible_products().len();
    app.model.navigation.selected =
        logic::navigation::move_selection(app.model.navigation.selected, len, delta);
}

fn select_row(app: &mut App, row: usize) {
    let len = app.model.visible_products().len();
    app.model.navigation.selected = logic::navigation::clamp_selection(Some(row), len);
}

fn clamp_selection(app: &mut App) {
    let len = app.model.visible_products().len();
    app.model.navigation.selected =
        logic::navigation::clamp_selection(app.model.navigation.selected, len);
}
