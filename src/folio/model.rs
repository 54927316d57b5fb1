use crate::icons::Icon;
use crate::keyword::keyword_enum;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

keyword_enum! {
    /// Document format of a course file.
    pub enum FileKind("file type") {
        Pdf => "pdf",
        Word => "word",
        Excel => "excel",
    }
}

impl FileKind {
    pub fn icon(self) -> Icon {
        match self {
            FileKind::Pdf => Icon::FilePdf,
            FileKind::Word => Icon::FileWord,
            FileKind::Excel => Icon::FileExcel,
        }
    }
}

keyword_enum! {
    /// Which catalog a search registry entry points into.
    pub enum SearchKind("search kind") {
        Book => "book",
        Course => "course",
        Source => "source",
    }
}

impl SearchKind {
    pub fn icon(self) -> Icon {
        match self {
            SearchKind::Book => Icon::Book,
            SearchKind::Course => Icon::GraduationCap,
            SearchKind::Source => Icon::Code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub description: String,
    /// 0 to 5, half steps allowed.
    pub rating: f32,
    #[serde(default)]
    pub categories: Vec<String>,
    pub sample_type: String,
    pub published_date: Option<String>,
    pub publisher: Option<String>,
    pub download_url: String,
}

impl Book {
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.published_date.as_deref().and_then(parse_date)
    }
}

/// A downloadable source code resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub technologies: Vec<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub author: Option<String>,
    pub file_type: String,
    pub last_updated: String,
    pub size: String,
    pub download_url: String,
}

impl Card {
    pub fn updated_on(&self) -> Option<NaiveDate> {
        parse_date(&self.last_updated)
    }

    pub fn size_value(&self) -> Option<f64> {
        parse_size(&self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseFile {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub file_type: FileKind,
    pub last_updated: String,
    pub size: String,
    pub downloads: u64,
    pub download_url: String,
}

impl CourseFile {
    pub fn updated_on(&self) -> Option<NaiveDate> {
        parse_date(&self.last_updated)
    }
}

/// An entry of the search-everything registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    pub kind: SearchKind,
    pub description: String,
    pub url: String,
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parses an authored date string. Anything unrecognized is treated as no date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Numeric part of a size label such as "2.8 MB". Units are ignored.
///
/// Digits and dots are kept, then the longest leading number is read, so
/// "1.2.3 MB" is 1.2.
pub fn parse_size(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let end = match digits.match_indices('.').nth(1) {
        Some((second_dot, _)) => second_dot,
        None => digits.len(),
    };
    let number = &digits[..end];
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}
