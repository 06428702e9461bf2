//! Navigation sub-model
//!
//! A small route stack. The card-edit destination carries the full card
//! record, so the edit view renders from navigation state without a second
//! fetch.

use crate::api::Card;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Cards list
    Cards,
    /// Edit destination for one card; carries the record it was opened with
    CardEdit { id: String, card: Card },
    /// Library folder browser
    Library,
}

#[derive(Debug, Clone)]
pub struct NavigationModel {
    stack: Vec<Route>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Cards],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty; set_root and pop maintain that
        self.stack.last().expect("route stack is never empty")
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Drop the top route. Returns false when already at the root route.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack, e.g. when switching tabs
    pub fn set_root(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
