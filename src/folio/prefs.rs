//! # Preferences
//!
//! Theme mode, accent color and animation level, plus the welcome flag. Values are read
//! from a [`KeyValueStore`] once at load and written back on every change.
//!
//! Storage is best-effort: a failed read, a failed write, or an unrecognized stored
//! value is logged and the in-memory value (or the default) wins. Nothing here returns
//! an error.
//!
//! The resolved [`Appearance`] follows the theme mode, except in `system` mode where it
//! tracks the last environment signal passed to [`Preferences::on_system_appearance`].

use crate::keyword::keyword_enum;
use crate::store::KeyValueStore;
use serde::Serialize;
use std::str::FromStr;
use swatch::{Appearance, Rgb};
use tracing::warn;

pub const THEME_MODE_KEY: &str = "themeMode";
pub const COLOR_SCHEME_KEY: &str = "colorScheme";
pub const ANIMATION_LEVEL_KEY: &str = "animationLevel";
pub const WELCOME_SEEN_KEY: &str = "hasSeenWelcomePopup";

keyword_enum! {
    #[derive(Default)]
    pub enum ThemeMode("theme mode") {
        Light => "light",
        Dark => "dark",
        #[default]
        System => "system" | "auto",
    }
}

impl ThemeMode {
    /// light → dark → system → light
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum ColorScheme("color scheme") {
        Blue => "blue",
        #[default]
        Purple => "purple",
        Teal => "teal",
        Pink => "pink",
        Amber => "amber",
    }
}

impl ColorScheme {
    pub fn rgb(self) -> Rgb {
        match self {
            ColorScheme::Blue => (0x3b, 0x82, 0xf6),
            ColorScheme::Purple => (0xa8, 0x55, 0xf7),
            ColorScheme::Teal => (0x14, 0xb8, 0xa6),
            ColorScheme::Pink => (0xec, 0x48, 0x99),
            ColorScheme::Amber => (0xf5, 0x9e, 0x0b),
        }
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum AnimationLevel("animation level") {
        Minimal => "minimal" | "none",
        Moderate => "moderate",
        #[default]
        Full => "full",
    }
}

/// Serializable view of the current preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefsSnapshot {
    pub theme_mode: ThemeMode,
    pub color_scheme: ColorScheme,
    pub animation_level: AnimationLevel,
    pub appearance: Appearance,
    pub has_seen_welcome: bool,
}

pub struct Preferences<S: KeyValueStore> {
    store: S,
    theme_mode: ThemeMode,
    color_scheme: ColorScheme,
    animation_level: AnimationLevel,
    has_seen_welcome: bool,
    system: Appearance,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Reads every preference from `store`. `system` is the environment's current
    /// light/dark signal.
    pub fn load(store: S, system: Appearance) -> Self {
        let theme_mode = read(&store, THEME_MODE_KEY).unwrap_or_default();
        let color_scheme = read(&store, COLOR_SCHEME_KEY).unwrap_or_default();
        let animation_level = read(&store, ANIMATION_LEVEL_KEY).unwrap_or_default();
        let has_seen_welcome = matches!(read_raw(&store, WELCOME_SEEN_KEY).as_deref(), Some("true"));

        Self {
            store,
            theme_mode,
            color_scheme,
            animation_level,
            has_seen_welcome,
            system,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn animation_level(&self) -> AnimationLevel {
        self.animation_level
    }

    pub fn has_seen_welcome(&self) -> bool {
        self.has_seen_welcome
    }

    pub fn appearance(&self) -> Appearance {
        match self.theme_mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => self.system,
        }
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.write(THEME_MODE_KEY, mode.as_str());
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
        self.write(COLOR_SCHEME_KEY, scheme.as_str());
    }

    pub fn set_animation_level(&mut self, level: AnimationLevel) {
        self.animation_level = level;
        self.write(ANIMATION_LEVEL_KEY, level.as_str());
    }

    /// Advances the theme mode one step and returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme_mode.next();
        self.set_theme_mode(next);
        next
    }

    /// Records an environment light/dark signal. Returns true when the resolved
    /// appearance changed, which only happens in `system` mode.
    pub fn on_system_appearance(&mut self, dark: bool) -> bool {
        let before = self.appearance();
        self.system = Appearance::from_dark(dark);
        before != self.appearance()
    }

    pub fn mark_welcome_seen(&mut self) {
        self.has_seen_welcome = true;
        self.write(WELCOME_SEEN_KEY, "true");
    }

    pub fn reset_welcome(&mut self) {
        self.has_seen_welcome = false;
        if let Err(e) = self.store.remove(WELCOME_SEEN_KEY) {
            warn!(key = WELCOME_SEEN_KEY, error = %e, "failed to clear preference");
        }
    }

    pub fn snapshot(&self) -> PrefsSnapshot {
        PrefsSnapshot {
            theme_mode: self.theme_mode,
            color_scheme: self.color_scheme,
            animation_level: self.animation_level,
            appearance: self.appearance(),
            has_seen_welcome: self.has_seen_welcome,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, value, error = %e, "failed to persist preference");
        }
    }
}

fn read_raw<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read preference, using default");
            None
        }
    }
}

fn read<S: KeyValueStore, T: FromStr>(store: &S, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unknown preference value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{seeded, FailingStore};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn defaults_when_store_is_empty() {
        let prefs = Preferences::load(InMemoryStore::new(), Appearance::Light);
        assert_eq!(prefs.theme_mode(), ThemeMode::System);
        assert_eq!(prefs.color_scheme(), ColorScheme::Purple);
        assert_eq!(prefs.animation_level(), AnimationLevel::Full);
        assert!(!prefs.has_seen_welcome());
        assert_eq!(prefs.appearance(), Appearance::Light);
    }

    #[test]
    fn loads_stored_values() {
        let store = seeded(&[
            (THEME_MODE_KEY, "dark"),
            (COLOR_SCHEME_KEY, "teal"),
            (ANIMATION_LEVEL_KEY, "minimal"),
            (WELCOME_SEEN_KEY, "true"),
        ]);
        let prefs = Preferences::load(store, Appearance::Light);
        assert_eq!(prefs.theme_mode(), ThemeMode::Dark);
        assert_eq!(prefs.color_scheme(), ColorScheme::Teal);
        assert_eq!(prefs.animation_level(), AnimationLevel::Minimal);
        assert!(prefs.has_seen_welcome());
        assert_eq!(prefs.appearance(), Appearance::Dark);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let store = seeded(&[
            (THEME_MODE_KEY, "sepia"),
            (COLOR_SCHEME_KEY, "chartreuse"),
            (WELCOME_SEEN_KEY, "yes"),
        ]);
        let prefs = Preferences::load(store, Appearance::Dark);
        assert_eq!(prefs.theme_mode(), ThemeMode::System);
        assert_eq!(prefs.color_scheme(), ColorScheme::Purple);
        assert!(!prefs.has_seen_welcome());
    }

    #[test]
    fn setters_write_through() {
        let mut prefs = Preferences::load(InMemoryStore::new(), Appearance::Light);
        prefs.set_color_scheme(ColorScheme::Amber);
        prefs.set_animation_level(AnimationLevel::Moderate);
        prefs.mark_welcome_seen();

        let store = prefs.store();
        assert_eq!(store.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some("amber"));
        assert_eq!(store.get(ANIMATION_LEVEL_KEY).unwrap().as_deref(), Some("moderate"));
        assert_eq!(store.get(WELCOME_SEEN_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn toggle_cycles_three_modes() {
        let mut prefs = Preferences::load(seeded(&[(THEME_MODE_KEY, "light")]), Appearance::Light);
        assert_eq!(prefs.toggle_theme(), ThemeMode::Dark);
        assert_eq!(prefs.toggle_theme(), ThemeMode::System);
        assert_eq!(prefs.toggle_theme(), ThemeMode::Light);
        assert_eq!(prefs.store().get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn system_signal_only_matters_in_system_mode() {
        let mut prefs = Preferences::load(InMemoryStore::new(), Appearance::Light);
        assert!(prefs.on_system_appearance(true));
        assert_eq!(prefs.appearance(), Appearance::Dark);
        assert!(!prefs.on_system_appearance(true));

        prefs.set_theme_mode(ThemeMode::Light);
        assert!(!prefs.on_system_appearance(false));
        assert!(!prefs.on_system_appearance(true));
        assert_eq!(prefs.appearance(), Appearance::Light);

        // The last signal is remembered for when system mode comes back.
        prefs.set_theme_mode(ThemeMode::System);
        assert_eq!(prefs.appearance(), Appearance::Dark);
    }

    #[test]
    fn reset_welcome_removes_the_flag() {
        let mut prefs = Preferences::load(seeded(&[(WELCOME_SEEN_KEY, "true")]), Appearance::Light);
        prefs.reset_welcome();
        assert!(!prefs.has_seen_welcome());
        assert_eq!(prefs.store().get(WELCOME_SEEN_KEY).unwrap(), None);
    }

    #[test]
    fn failing_storage_degrades_silently() {
        let mut prefs = Preferences::load(FailingStore, Appearance::Dark);
        assert_eq!(prefs.snapshot().theme_mode, ThemeMode::System);
        assert_eq!(prefs.appearance(), Appearance::Dark);

        prefs.set_theme_mode(ThemeMode::Light);
        prefs.set_color_scheme(ColorScheme::Pink);
        prefs.mark_welcome_seen();
        prefs.reset_welcome();
        assert_eq!(prefs.theme_mode(), ThemeMode::Light);
        assert_eq!(prefs.color_scheme(), ColorScheme::Pink);
        assert!(!prefs.has_seen_welcome());
    }
}
