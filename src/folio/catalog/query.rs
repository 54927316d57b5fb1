use super::Facet;
use crate::error::FolioError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A facet constraint: either no constraint, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub fn only(value: impl Into<String>) -> Self {
        Filter::Only(value.into())
    }
}

impl FromStr for Filter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            Ok(Filter::Only(value.to_string()))
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => f.write_str(value),
        }
    }
}

/// The user-chosen query state of one catalog view.
///
/// Only active filters are stored, so two queries that constrain the same facets to
/// the same values compare equal regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query<S> {
    pub search: String,
    filters: BTreeMap<Facet, String>,
    pub sort: S,
}

impl<S: Copy + Default> Query<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_filter(mut self, facet: Facet, filter: Filter) -> Self {
        self.set_filter(facet, filter);
        self
    }

    pub fn with_sort(mut self, sort: S) -> Self {
        self.sort = sort;
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_filter(&mut self, facet: Facet, filter: Filter) {
        match filter {
            Filter::All => {
                self.filters.remove(&facet);
            }
            Filter::Only(value) => {
                self.filters.insert(facet, value);
            }
        }
    }

    pub fn set_sort(&mut self, sort: S) {
        self.sort = sort;
    }

    /// Clears search and filters and restores the default sort.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn filter(&self, facet: Facet) -> Filter {
        self.filters
            .get(&facet)
            .map(|v| Filter::Only(v.clone()))
            .unwrap_or_default()
    }

    /// Active filters in facet order.
    pub fn filters(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.filters.iter().map(|(facet, v)| (*facet, v.as_str()))
    }

    /// Lower-cased search term, or `None` when the term is blank.
    pub fn search_needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}
