//! # Catalog Query Pipeline
//!
//! Every catalog (books, source code cards, course files) is browsed through the same
//! pipeline: a free-text search, zero or more facet filters, and a sort key. Instead of
//! one hand-written filter per catalog, each record type describes itself through
//! [`CatalogRecord`]:
//!
//! - which text fields the search looks at,
//! - which values it exposes for each [`Facet`],
//! - which [`SortRule`] each of its sort keys maps to.
//!
//! [`pipeline::run`] is then a pure function of `(records, query)`, and
//! [`view::CatalogView`] layers the delayed, cancellable reveal on top of it.
//!
//! ## Matching
//!
//! - Search is a case-insensitive substring test; any designated field may match.
//!   A blank search term imposes no constraint.
//! - Filters are ANDed. A record without a value for a filtered facet never matches,
//!   and filtering on a value absent from the dataset simply yields nothing.
//!
//! ## Sorting
//!
//! See [`SortRule`]. `NewestFirst` leaves undated records in place and sorts the dated
//! ones into the remaining positions, so an undated record never moves.

use crate::keyword::keyword_enum;
use crate::model::{Book, Card, CourseFile};
use crate::nav::Page;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod facets;
pub mod pipeline;
pub mod query;
pub mod records;
pub mod view;

pub use query::{Filter, Query};
pub use records::{BookSort, CardSort, CourseFileSort};
pub use view::{CatalogView, RevealState, REVEAL_DELAY};

keyword_enum! {
    /// A categorical field records can be filtered on.
    pub enum Facet("facet") {
        Category => "category",
        SampleType => "sample-type" | "sample_type",
        FileType => "file-type" | "file_type" | "type",
        Platform => "platform",
        Technology => "technology" | "tech",
    }
}

keyword_enum! {
    /// One of the three browsable catalogs.
    pub enum Catalog("catalog") {
        Courses => "courses" | "course-files",
        Books => "books",
        SourceCode => "source-code" | "cards" | "services",
    }
}

impl Catalog {
    pub fn facets(self) -> &'static [Facet] {
        match self {
            Catalog::Courses => <CourseFile as CatalogRecord>::FACETS,
            Catalog::Books => <Book as CatalogRecord>::FACETS,
            Catalog::SourceCode => <Card as CatalogRecord>::FACETS,
        }
    }

    pub fn supports(self, facet: Facet) -> bool {
        self.facets().contains(&facet)
    }

    pub fn page(self) -> Page {
        match self {
            Catalog::Courses => Page::Courses,
            Catalog::Books => Page::Books,
            Catalog::SourceCode => Page::SourceCode,
        }
    }

    pub fn from_page(page: Page) -> Option<Self> {
        match page {
            Page::Home => None,
            Page::Courses => Some(Catalog::Courses),
            Page::Books => Some(Catalog::Books),
            Page::SourceCode => Some(Catalog::SourceCode),
        }
    }
}

/// How a sort key orders records.
pub enum SortRule<R> {
    /// Ascending by id.
    Id,
    /// Ascending by title, case-insensitive first.
    Title,
    /// Descending by a numeric key; records without a value go last.
    Descending(fn(&R) -> Option<f64>),
    /// Most recent first; undated records keep their positions.
    NewestFirst(fn(&R) -> Option<NaiveDate>),
}

/// A record type that can be browsed through the pipeline.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    type Sort: Copy + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Plural display name, e.g. "books".
    const NAME: &'static str;

    /// Facets this record type carries values for.
    const FACETS: &'static [Facet];

    fn id(&self) -> u32;

    fn title(&self) -> &str;

    /// Fields consulted by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Values this record holds for `facet`. Empty when the field is absent.
    fn facet_values(&self, facet: Facet) -> Vec<&str>;

    fn sort_rule(sort: Self::Sort) -> SortRule<Self>;
}
