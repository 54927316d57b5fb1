//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for every client.
//! It dispatches to `commands/*.rs`, owns the loaded [`Preferences`] and
//! [`FolioConfig`], and returns `Result<CmdResult>`. It never prints.
//!
//! `FolioApi<S: KeyValueStore>` is generic over preference storage:
//! - Production: `FolioApi<FileStore>`
//! - Testing: `FolioApi<InMemoryStore>`
//!
//! Catalog views are opened here so they pick up the configured reveal delay.

use crate::catalog::{CatalogView, Facet, Query};
use crate::commands;
use crate::config::FolioConfig;
use crate::data;
use crate::error::Result;
use crate::model::{Book, Card, CourseFile};
use crate::prefs::Preferences;
use crate::store::KeyValueStore;
use swatch::Appearance;

pub struct FolioApi<S: KeyValueStore> {
    prefs: Preferences<S>,
    paths: commands::FolioPaths,
    config: FolioConfig,
}

impl<S: KeyValueStore> FolioApi<S> {
    /// `system` is the environment's current light/dark signal.
    pub fn new(store: S, paths: commands::FolioPaths, config: FolioConfig, system: Appearance) -> Self {
        Self {
            prefs: Preferences::load(store, system),
            paths,
            config,
        }
    }

    pub fn home(&self) -> Result<commands::CmdResult> {
        commands::home::run(&self.prefs, &self.config)
    }

    pub fn list_books(&self, query: &Query<BookSort>) -> Result<commands::CmdResult> {
        commands::catalog::books(query)
    }

    pub fn list_cards(&self, query: &Query<CardSort>) -> Result<commands::CmdResult> {
        commands::catalog::cards(query)
    }

    pub fn list_course_files(&self, query: &Query<CourseFileSort>) -> Result<commands::CmdResult> {
        commands::catalog::course_files(query)
    }

    pub fn facets(&self, catalog: Catalog, facet: Facet) -> Result<commands::CmdResult> {
        commands::facets::run(catalog, facet)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(query)
    }

    pub fn settings(&mut self, action: SettingsAction) -> Result<commands::CmdResult> {
        commands::settings::run(&mut self.prefs, action)
    }

    pub fn welcome(&mut self, action: WelcomeAction) -> Result<commands::CmdResult> {
        commands::welcome::run(&mut self.prefs, action)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Must be called inside a tokio runtime.
    pub fn open_books_view(&self) -> CatalogView<Book> {
        CatalogView::open(data::books(), self.config.reveal_delay())
    }

    /// Must be called inside a tokio runtime.
    pub fn open_cards_view(&self) -> CatalogView<Card> {
        CatalogView::open(data::cards(), self.config.reveal_delay())
    }

    /// Must be called inside a tokio runtime.
    pub fn open_course_files_view(&self) -> CatalogView<CourseFile> {
        CatalogView::open(data::course_files(), self.config.reveal_delay())
    }

    /// Forwards an environment light/dark change. True when the appearance changed.
    pub fn on_system_appearance(&mut self, dark: bool) -> bool {
        self.prefs.on_system_appearance(dark)
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    pub fn current_config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::FolioPaths {
        &self.paths
    }
}

pub use crate::catalog::{BookSort, CardSort, Catalog, CourseFileSort};
pub use crate::commands::config::ConfigAction;
pub use crate::commands::settings::SettingsAction;
pub use crate::commands::welcome::WelcomeAction;
pub use commands::{CmdMessage, CmdResult, FacetListing, FolioPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Filter;
    use crate::prefs::ThemeMode;
    use crate::store::memory::InMemoryStore;
    use std::time::Duration;
    use tempfile::tempdir;

    fn api(dir: &std::path::Path) -> FolioApi<InMemoryStore> {
        FolioApi::new(
            InMemoryStore::new(),
            FolioPaths::new(dir),
            FolioConfig::default(),
            Appearance::Light,
        )
    }

    #[test]
    fn dispatches_catalog_listings() {
        let dir = tempdir().unwrap();
        let api = api(dir.path());

        let query = Query::new().with_filter(Facet::SampleType, Filter::only("Code Examples"));
        assert_eq!(api.list_books(&query).unwrap().books.len(), 4);
        assert_eq!(api.list_cards(&Query::default()).unwrap().cards.len(), 9);
        assert_eq!(
            api.list_course_files(&Query::default()).unwrap().course_files.len(),
            10
        );
    }

    #[test]
    fn settings_go_through_owned_preferences() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.settings(SettingsAction::SetTheme(ThemeMode::Dark)).unwrap();
        assert_eq!(api.preferences().theme_mode(), ThemeMode::Dark);
        assert_eq!(api.preferences().appearance(), Appearance::Dark);
    }

    #[test]
    fn config_changes_apply_to_new_views() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.config(ConfigAction::Set("reveal-delay-ms".into(), "20".into()))
            .unwrap();
        assert_eq!(api.current_config().reveal_delay(), Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn views_use_configured_delay() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.config(ConfigAction::Set("reveal-delay-ms".into(), "20".into()))
            .unwrap();

        let view = api.open_course_files_view();
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(!view.is_loading());
        assert_eq!(view.state().visible.len(), 10);
    }
}
