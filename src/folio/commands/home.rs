//! The landing page: an introduction, a preview of each catalog, and the welcome
//! notice for first-time visitors.

use crate::commands::CmdResult;
use crate::config::FolioConfig;
use crate::data;
use crate::error::Result;
use crate::nav::Page;
use crate::prefs::Preferences;
use crate::store::KeyValueStore;
use crate::welcome::WelcomePopup;

pub const BADGE: &str = "Engineering Resource Hub";
pub const HEADLINE: &str = "Hi, This is Shantanu Karmaker";
pub const SUBTITLE: &str = "An Emerging Engineering Professional & A Slow Learner";
pub const ABOUT: &[&str] = &[
    "Hello and welcome to my engineering resource hub! I'm a passionate BSc student in Electrical and Electronics Engineering, dedicated to creating a comprehensive online space where study materials, projects, and a wide range of engineering books are readily available for future students.",
    "This website is my way of giving back to the academic community, providing an accessible, well-organized repository that bridges the gap between theoretical learning and practical application.",
];

pub struct Section {
    pub page: Page,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        page: Page::Courses,
        title: "Academic Course Files",
        blurb: "Access all the course materials and resources to enhance your learning experience.",
    },
    Section {
        page: Page::Books,
        title: "Recommended Books",
        blurb: "Expand your knowledge with these carefully selected books that will help you master your craft. Download sample chapters and code examples.",
    },
    Section {
        page: Page::SourceCode,
        title: "Source Code",
        blurb: "Explore our range of services designed to help you build and grow your digital presence. Download resources for each service.",
    },
];

pub fn section(page: Page) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.page == page)
}

pub fn run<S: KeyValueStore>(prefs: &Preferences<S>, config: &FolioConfig) -> Result<CmdResult> {
    let limit = config.preview_limit.unwrap_or(usize::MAX);
    let preview = |n: usize| n.min(limit);

    let mut result = CmdResult::default()
        .with_course_files(data::course_files()[..preview(data::course_files().len())].to_vec())
        .with_books(data::books()[..preview(data::books().len())].to_vec())
        .with_cards(data::cards()[..preview(data::cards().len())].to_vec());

    let welcome = WelcomePopup::for_visitor(prefs);
    if welcome.is_visible() {
        result = result.with_welcome(welcome);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::WELCOME_SEEN_KEY;
    use crate::store::memory::fixtures::seeded;
    use crate::store::memory::InMemoryStore;
    use swatch::Appearance;

    #[test]
    fn previews_every_record_by_default() {
        let prefs = Preferences::load(InMemoryStore::new(), Appearance::Light);
        let result = run(&prefs, &FolioConfig::default()).unwrap();
        assert_eq!(result.course_files.len(), 10);
        assert_eq!(result.books.len(), 8);
        assert_eq!(result.cards.len(), 9);
        assert!(result.welcome.is_some());
    }

    #[test]
    fn preview_limit_truncates_in_id_order() {
        let prefs = Preferences::load(seeded(&[(WELCOME_SEEN_KEY, "true")]), Appearance::Light);
        let config = FolioConfig {
            preview_limit: Some(3),
            ..FolioConfig::default()
        };
        let result = run(&prefs, &config).unwrap();
        let ids: Vec<u32> = result.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.cards.len(), 3);
        assert!(result.welcome.is_none());
    }

    #[test]
    fn every_catalog_page_has_a_section() {
        assert!(section(Page::Courses).is_some());
        assert!(section(Page::Books).is_some());
        assert!(section(Page::SourceCode).is_some());
        assert!(section(Page::Home).is_none());
    }
}
