//! # Rendering Module
//!
//! Turns command results into styled terminal text through `swatch` templates.
//!
//! Layout calculations (width, truncation, joins) stay in Rust because they need
//! Unicode-aware processing. Templates handle presentation: style selection and line
//! arrangement. Every `Screen` is built for one accent color and one resolved
//! appearance, so a settings change takes effect on the next screen built.

use super::styles::{names, palette};
use super::templates;
use folio::api::{CmdMessage, FacetListing, MessageLevel};
use folio::error::{FolioError, Result};
use folio::format;
use folio::commands::home::{self, Section};
use folio::icons::Icon;
use folio::model::{Book, Card, CourseFile, SearchItem};
use folio::nav::Page;
use folio::prefs::{ColorScheme, PrefsSnapshot};
use folio::welcome::WelcomePopup;
use serde::Serialize;
use swatch::{Appearance, PaletteChoice, Renderer};
use unicode_width::UnicodeWidthChar;

const LINE_WIDTH: usize = 100;
const INDENT: usize = 3;
const SEPARATOR: &str = " · ";

#[derive(Serialize)]
struct BookRow {
    icon: &'static str,
    title: String,
    byline: String,
    stars: String,
    rating: String,
    sample_type: String,
    published: String,
    description: String,
    categories: String,
    download: String,
}

#[derive(Serialize)]
struct CardRow {
    icon: &'static str,
    title: String,
    file_type: String,
    description: String,
    technologies: String,
    meta: String,
    download: String,
}

#[derive(Serialize)]
struct CourseFileRow {
    icon: &'static str,
    title: String,
    description: String,
    meta: String,
    download: String,
}

#[derive(Serialize)]
struct Listing<T> {
    rows: Vec<T>,
    empty: &'static str,
}

#[derive(Serialize)]
struct SearchRow {
    icon: &'static str,
    title: String,
    kind: String,
    description: String,
    url: String,
}

#[derive(Serialize)]
struct SearchData {
    heading: String,
    rows: Vec<SearchRow>,
}

#[derive(Serialize)]
struct FacetData {
    heading: String,
    values: Vec<String>,
}

#[derive(Serialize)]
struct SettingsData {
    theme: String,
    appearance: String,
    dot: &'static str,
    color: String,
    animation: String,
    welcome: &'static str,
}

#[derive(Serialize)]
struct WelcomeData {
    rule: String,
    title: String,
    message: String,
    hint: &'static str,
}

#[derive(Serialize)]
struct PreviewLine {
    icon: &'static str,
    title: String,
    meta: String,
}

#[derive(Serialize)]
struct SectionData {
    title: &'static str,
    blurb: &'static str,
    hint: String,
    lines: Vec<PreviewLine>,
}

#[derive(Serialize)]
struct HomeData {
    badge: &'static str,
    headline: &'static str,
    subtitle: &'static str,
    about: Vec<String>,
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

pub struct Screen {
    renderer: Renderer,
}

impl Screen {
    /// `use_color: None` lets the terminal decide.
    pub fn new(scheme: ColorScheme, appearance: Appearance, use_color: Option<bool>) -> Result<Self> {
        let palette = palette(scheme);
        let choice = PaletteChoice::Pinned(&palette, appearance);
        let mut renderer = match use_color {
            Some(c) => Renderer::with_color(choice, c),
            None => Renderer::new(choice),
        };
        for (name, source) in templates::ALL {
            renderer
                .add_template(name, source)
                .map_err(|e| FolioError::Render(e.to_string()))?;
        }
        Ok(Self { renderer })
    }

    pub fn for_prefs(prefs: &PrefsSnapshot, use_color: Option<bool>) -> Result<Self> {
        Self::new(prefs.color_scheme, prefs.appearance, use_color)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.renderer
            .render(name, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn books(&self, books: &[Book]) -> String {
        let rows = books
            .iter()
            .map(|b| BookRow {
                icon: Icon::BookOpen.glyph(),
                title: b.title.clone(),
                byline: format!("by {}", b.author),
                stars: format::stars_glyphs(b.rating),
                rating: format!("{:.1}", b.rating),
                sample_type: b.sample_type.clone(),
                published: join(&[
                    b.published_date.as_deref().map(|d| format!("Published {d}")),
                    b.publisher.clone(),
                ]),
                description: truncate_to_width(&b.description, LINE_WIDTH - INDENT),
                categories: b.categories.join(SEPARATOR),
                download: download_line(&b.download_url),
            })
            .collect();
        self.render(
            templates::BOOKS,
            &Listing {
                rows,
                empty: "No books found matching your criteria.",
            },
        )
    }

    pub fn cards(&self, cards: &[Card]) -> String {
        let rows = cards
            .iter()
            .map(|c| CardRow {
                icon: c.icon.glyph(),
                title: c.title.clone(),
                file_type: c.file_type.clone(),
                description: truncate_to_width(&c.description, LINE_WIDTH - INDENT),
                technologies: c.technologies.join(SEPARATOR),
                meta: join(&[
                    c.category.clone(),
                    c.platform.clone(),
                    c.author.clone(),
                    Some(format!("Updated {}", c.last_updated)),
                    Some(c.size.clone()),
                ]),
                download: download_line(&c.download_url),
            })
            .collect();
        self.render(
            templates::CARDS,
            &Listing {
                rows,
                empty: "No source code found matching your criteria.",
            },
        )
    }

    pub fn course_files(&self, files: &[CourseFile]) -> String {
        let rows = files
            .iter()
            .map(|f| CourseFileRow {
                icon: f.file_type.icon().glyph(),
                title: f.title.clone(),
                description: truncate_to_width(&f.description, LINE_WIDTH - INDENT),
                meta: join(&[
                    Some(format!("Updated {}", f.last_updated)),
                    Some(f.size.clone()),
                    Some(format!("{} downloads", format::downloads(f.downloads))),
                ]),
                download: download_line(&f.download_url),
            })
            .collect();
        self.render(
            templates::COURSE_FILES,
            &Listing {
                rows,
                empty: "No course files found matching your criteria.",
            },
        )
    }

    pub fn search_results(&self, query: &str, items: &[SearchItem]) -> String {
        let rows = items
            .iter()
            .map(|i| SearchRow {
                icon: i.kind.icon().glyph(),
                title: i.title.clone(),
                kind: i.kind.to_string(),
                description: truncate_to_width(&i.description, LINE_WIDTH - INDENT),
                url: i.url.clone(),
            })
            .collect();
        let heading = match items.len() {
            1 => format!("1 result for \"{}\"", query.trim()),
            n => format!("{} results for \"{}\"", n, query.trim()),
        };
        self.render(templates::SEARCH, &SearchData { heading, rows })
    }

    pub fn facets(&self, listing: &FacetListing) -> String {
        self.render(
            templates::FACETS,
            &FacetData {
                heading: format!("{} {} values", listing.catalog, listing.facet),
                values: listing.values.clone(),
            },
        )
    }

    pub fn settings(&self, prefs: &PrefsSnapshot) -> String {
        let appearance = match prefs.appearance {
            Appearance::Light => "(light appearance)",
            Appearance::Dark => "(dark appearance)",
        };
        self.render(
            templates::SETTINGS,
            &SettingsData {
                theme: prefs.theme_mode.to_string(),
                appearance: appearance.to_string(),
                dot: "●",
                color: prefs.color_scheme.to_string(),
                animation: prefs.animation_level.to_string(),
                welcome: if prefs.has_seen_welcome {
                    "dismissed"
                } else {
                    "shown on next visit"
                },
            },
        )
    }

    pub fn welcome(&self, popup: &WelcomePopup) -> String {
        self.render(
            templates::WELCOME,
            &WelcomeData {
                rule: "─".repeat(LINE_WIDTH / 2),
                title: format!("{} {}", Icon::GraduationCap.glyph(), popup.title),
                message: popup.message.clone(),
                hint: "Get started: folio welcome --dismiss [--dont-show-again]",
            },
        )
    }

    /// Landing page. Previews come from the listed records of a home result.
    pub fn home(&self, course_files: &[CourseFile], books: &[Book], cards: &[Card]) -> String {
        let sections = home::SECTIONS
            .iter()
            .map(|section| {
                let lines = match section.page {
                    Page::Courses => course_files
                        .iter()
                        .map(|f| PreviewLine {
                            icon: f.file_type.icon().glyph(),
                            title: f.title.clone(),
                            meta: format!("{} downloads", format::downloads(f.downloads)),
                        })
                        .collect(),
                    Page::Books => books
                        .iter()
                        .map(|b| PreviewLine {
                            icon: Icon::BookOpen.glyph(),
                            title: b.title.clone(),
                            meta: format!("{} {}", format::stars_glyphs(b.rating), b.author),
                        })
                        .collect(),
                    Page::SourceCode => cards
                        .iter()
                        .map(|c| PreviewLine {
                            icon: c.icon.glyph(),
                            title: c.title.clone(),
                            meta: c.technologies.join(SEPARATOR),
                        })
                        .collect(),
                    Page::Home => Vec::new(),
                };
                section_data(section, lines)
            })
            .collect();

        self.render(
            templates::HOME,
            &HomeData {
                badge: home::BADGE,
                headline: home::HEADLINE,
                subtitle: home::SUBTITLE,
                about: home::ABOUT.iter().map(|p| p.to_string()).collect(),
                sections,
            },
        )
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let messages = messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render(templates::MESSAGES, &MessagesData { messages })
    }
}

fn section_data(section: &Section, lines: Vec<PreviewLine>) -> SectionData {
    SectionData {
        title: section.title,
        blurb: section.blurb,
        hint: format!("folio {}", section.page),
        lines,
    }
}

fn download_line(url: &str) -> String {
    format!("{} {}", Icon::Download.glyph(), url)
}

fn join(parts: &[Option<String>]) -> String {
    parts
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
