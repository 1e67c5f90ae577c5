use serde::Serialize;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::theme::Theme;

/// The page's only mutable state. Changes go through [`ViewState::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    scrolled: bool,
    dark: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    Scrolled(f64),
    ToggleTheme,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scrolled: false,
            dark: true,
        }
    }
}

/// An offset of exactly the threshold still counts as the top of the page.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

impl ViewState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark())
    }

    /// Returns whether the navbar variant changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
    }

    pub fn apply(mut self, action: ViewAction) -> Self {
        match action {
            ViewAction::Scrolled(offset) => {
                self.observe_scroll(offset);
            }
            ViewAction::ToggleTheme => self.toggle_theme(),
        }
        self
    }
}
