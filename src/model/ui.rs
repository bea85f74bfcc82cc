//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, popups, search, and the quit flag.

use std::time::Instant;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Move checked products to the end of the list
    pub move_checked_to_end: bool,

    // ============================================
    // POPUPS
    // ============================================
    /// Add-product input line (Some while the popup is open)
    pub new_product_input: Option<String>,

    /// Confirmation prompt for deleting all checked products
    pub confirm_delete_checked: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(move_checked_to_end: bool) -> Self {
        Self {
            move_checked_to_end,
            new_product_input: None,
            confirm_delete_checked: false,
            toast_message: None,
            search_mode: false,
            search_query: String::new(),
            should_quit: false,
        }
    }

    /// Check if any modal popup is currently showing
    pub fn has_modal(&self) -> bool {
        self.new_product_input.is_some() || self.confirm_delete_checked || self.search_mode
    }

    /// Close all modal popups
    pub fn close_all_modals(&mut self) {
        self.new_product_input = None;
        self.confirm_delete_checked = false;
        self.search_mode = false;
        self.search_query.clear();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
