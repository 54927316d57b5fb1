//! # Search Everything
//!
//! A plain scan over the search registry. An entry matches when its title,
//! description, or kind name contains the query, ignoring case. Results keep registry
//! order. A blank query matches nothing, unlike a blank catalog search which matches
//! everything.

use crate::model::SearchItem;
use tracing::debug;

pub fn search_items<'a>(registry: &'a [SearchItem], query: &str) -> Vec<&'a SearchItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let results: Vec<&SearchItem> = registry
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.kind.as_str().contains(&needle)
        })
        .collect();
    debug!(query, matched = results.len(), "search everything");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::model::SearchKind;

    fn ids(items: &[&SearchItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn empty_query_returns_nothing() {
        assert!(search_items(data::search_registry(), "").is_empty());
        assert!(search_items(data::search_registry(), "   ").is_empty());
    }

    #[test]
    fn matches_title_or_description_in_order() {
        let results = search_items(data::search_registry(), "REACT");
        assert_eq!(ids(&results), vec!["book-2", "course-1", "source-1"]);
    }

    #[test]
    fn matches_kind_name() {
        let results = search_items(data::search_registry(), "course");
        assert!(results.iter().all(|r| r.kind == SearchKind::Course));
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search_items(data::search_registry(), "cobol").is_empty());
    }
}
