use crate::catalog::{Catalog, Facet};
use crate::config::FolioConfig;
use crate::model::{Book, Card, CourseFile, SearchItem};
use crate::prefs::PrefsSnapshot;
use crate::welcome::WelcomePopup;
use serde::Serialize;
use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod facets;
pub mod home;
pub mod search;
pub mod settings;
pub mod welcome;

#[derive(Debug, Clone)]
pub struct FolioPaths {
    pub data: PathBuf,
}

impl FolioPaths {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self { data: data.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn at(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Error, content)
    }
}

/// Distinct values of one facet of one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetListing {
    pub catalog: Catalog,
    pub facet: Facet,
    pub values: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub cards: Vec<Card>,
    pub course_files: Vec<CourseFile>,
    pub search_results: Vec<SearchItem>,
    pub facets: Option<FacetListing>,
    pub settings: Option<PrefsSnapshot>,
    pub welcome: Option<WelcomePopup>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_course_files(mut self, files: Vec<CourseFile>) -> Self {
        self.course_files = files;
        self
    }

    pub fn with_search_results(mut self, items: Vec<SearchItem>) -> Self {
        self.search_results = items;
        self
    }

    pub fn with_facets(mut self, listing: FacetListing) -> Self {
        self.facets = Some(listing);
        self
    }

    pub fn with_settings(mut self, settings: PrefsSnapshot) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_welcome(mut self, welcome: WelcomePopup) -> Self {
        self.welcome = Some(welcome);
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
