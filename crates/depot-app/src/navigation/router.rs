//! # Page Router
//!
//! Active page and back-navigation history.

use depot_core::Page;
use std::collections::VecDeque;

/// Maximum history length
pub const MAX_HISTORY: usize = 50;

/// Navigation intent emitted by the tab bar and page links
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Go to a specific page
    GoTo(Page),
    /// Go back to the previous page in history
    Back,
}

/// Page router state
#[derive(Clone, Debug)]
pub struct Router {
    /// Current active page
    current: Page,
    /// Navigation history (for back functionality)
    history: VecDeque<Page>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl Router {
    /// Create a new router starting at the given page
    pub fn new(initial: Page) -> Self {
        Self {
            current: initial,
            history: VecDeque::new(),
        }
    }

    /// Get the current page
    pub fn current(&self) -> Page {
        self.current
    }

    /// Apply an intent. Returns whether the active page changed.
    pub fn apply(&mut self, intent: NavIntent) -> bool {
        let before = self.current;
        match intent {
            NavIntent::GoTo(page) => self.go_to(page),
            NavIntent::Back => self.back(),
        }
        before != self.current
    }

    /// Go to a specific page
    pub fn go_to(&mut self, page: Page) {
        if page != self.current {
            self.history.push_back(self.current);
            if self.history.len() > MAX_HISTORY {
                self.history.pop_front();
            }
            self.current = page;
        }
    }

    /// Go back to previous page
    pub fn back(&mut self) {
        if let Some(prev) = self.history.pop_back() {
            self.current = prev;
        }
    }

    /// Reset to a page, clearing all history
    pub fn reset(&mut self, page: Page) {
        self.history.clear();
        self.current = page;
    }

    /// Check if we can go back
    pub fn can_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get history length
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
