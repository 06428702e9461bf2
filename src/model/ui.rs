//! UI sub-model
//!
//! Filter input, music selection mode, toast and the quit flag.

use std::time::Instant;

const TOAST_DURATION_MS: u128 = 1500;

#[derive(Debug, Clone)]
pub struct UiModel {
    /// Current library filter text
    pub filter_query: String,
    /// Whether the filter input is receiving keystrokes
    pub filter_active: bool,
    /// Card id awaiting music registration, when selection mode is active
    pub selecting_for: Option<String>,
    pub toast_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub vim_mode: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            filter_query: String::new(),
            filter_active: false,
            selecting_for: None,
            toast_message: None,
            should_quit: false,
            vim_mode,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, shown_at)) => shown_at.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.filter_active = false;
    }
}
