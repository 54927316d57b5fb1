//! First-visit welcome notice.

use crate::prefs::Preferences;
use crate::store::KeyValueStore;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Welcome to Course Folio!";
pub const DEFAULT_MESSAGE: &str = "Thank you for visiting our website. Explore our courses, books, and services to enhance your skills and knowledge.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomePopup {
    pub title: String,
    pub message: String,
    visible: bool,
    dont_show_again: bool,
}

impl WelcomePopup {
    /// Visible unless the welcome flag is already stored.
    pub fn for_visitor<S: KeyValueStore>(prefs: &Preferences<S>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            visible: !prefs.has_seen_welcome(),
            dont_show_again: false,
        }
    }

    pub fn with_text(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.title = title.into();
        self.message = message.into();
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dont_show_again(&self) -> bool {
        self.dont_show_again
    }

    pub fn set_dont_show_again(&mut self, checked: bool) {
        self.dont_show_again = checked;
    }

    /// Hides the notice. The flag is persisted only when `save_preference` is set and
    /// "don't show again" is checked. Returns whether the flag was written.
    pub fn close<S: KeyValueStore>(&mut self, prefs: &mut Preferences<S>, save_preference: bool) -> bool {
        self.visible = false;
        if save_preference && self.dont_show_again {
            prefs.mark_welcome_seen();
            true
        } else {
            false
        }
    }
}
