use super::{CatalogRecord, Query, SortRule};
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

/// Filters, searches and sorts `records`. The input is never modified.
pub fn run<R: CatalogRecord>(records: &[R], query: &Query<R::Sort>) -> Vec<R> {
    let needle = query.search_needle();
    let mut matched: Vec<&R> = records
        .iter()
        .filter(|r| matches(*r, needle.as_deref(), query))
        .collect();

    order(&mut matched, R::sort_rule(query.sort));

    debug!(
        catalog = R::NAME,
        total = records.len(),
        matched = matched.len(),
        sort = ?query.sort,
        "pipeline run"
    );
    matched.into_iter().cloned().collect()
}

/// `needle` must already be lower-cased.
pub fn matches<R: CatalogRecord>(record: &R, needle: Option<&str>, query: &Query<R::Sort>) -> bool {
    let text_ok = needle.map_or(true, |needle| {
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    });

    text_ok
        && query
            .filters()
            .all(|(facet, value)| record.facet_values(facet).contains(&value))
}

fn order<R: CatalogRecord>(items: &mut [&R], rule: SortRule<R>) {
    match rule {
        SortRule::Id => items.sort_by_key(|r| r.id()),
        SortRule::Title => items.sort_by(|a, b| compare_titles(a.title(), b.title())),
        SortRule::Descending(key) => items.sort_by(|a, b| descending(key(a), key(b))),
        SortRule::NewestFirst(date) => newest_first(items, date),
    }
}

/// Case-insensitive, with lowercase before uppercase when titles differ only in case.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts dated records newest first into the slots dated records occupy. Undated
/// records stay exactly where they are.
fn newest_first<'a, R>(items: &mut [&'a R], date: fn(&R) -> Option<NaiveDate>) {
    let mut dated: Vec<(usize, NaiveDate)> = items
        .iter()
        .enumerate()
        .filter_map(|(i, r)| date(r).map(|d| (i, d)))
        .collect();
    let slots: Vec<usize> = dated.iter().map(|(i, _)| *i).collect();
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let snapshot: Vec<&'a R> = items.to_vec();
    for (slot, (from, _)) in slots.into_iter().zip(dated) {
        items[slot] = snapshot[from];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookSort, CardSort, CourseFileSort, Facet, Filter};
    use crate::data;
    use crate::model::{Book, Card, CourseFile};

    fn ids<R: CatalogRecord>(records: &[R]) -> Vec<u32> {
        records.iter().map(|r| r.id()).collect()
    }

    fn card(id: u32, size: &str, updated: &str) -> Card {
        let mut card = data::cards()[0].clone();
        card.id = id;
        card.title = format!("Card {id}");
        card.size = size.to_string();
        card.last_updated = updated.to_string();
        card
    }

    #[test]
    fn default_query_returns_everything_by_id() {
        let books = run(data::books(), &Query::default());
        assert_eq!(ids(&books), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn react_search_matches_title_author_or_description() {
        let query = Query::new().with_search("React");
        let books = run(data::books(), &query);

        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["React Design Patterns"]);
        assert!(!titles.contains(&"Clean Code"));

        for book in data::books() {
            let expected = [&book.title, &book.author, &book.description]
                .iter()
                .any(|f| f.to_lowercase().contains("react"));
            assert_eq!(books.iter().any(|b| b.id == book.id), expected);
        }
    }

    #[test]
    fn whitespace_search_is_no_constraint() {
        let books = run(data::books(), &Query::new().with_search("   "));
        assert_eq!(books.len(), data::books().len());
    }

    #[test]
    fn search_and_filters_combine() {
        let query = Query::new()
            .with_search("design")
            .with_filter(Facet::Category, Filter::only("Programming"));
        let books = run(data::books(), &query);
        assert_eq!(ids(&books), vec![3, 6]);

        let query = query.with_filter(Facet::SampleType, Filter::only("Code Examples"));
        assert_eq!(ids(&run(data::books(), &query)), vec![6]);
    }

    #[test]
    fn unknown_filter_value_yields_nothing() {
        let query = Query::new().with_filter(Facet::Platform, Filter::only("Amiga"));
        assert!(run(data::cards(), &query).is_empty());
    }

    #[test]
    fn facet_the_record_lacks_excludes_it() {
        let query = Query::new().with_filter(Facet::Platform, Filter::only("Web"));
        assert!(run(data::course_files(), &query).is_empty());

        let mut cards = data::cards().to_vec();
        cards[0].platform = None;
        let web = run(&cards, &Query::new().with_filter(Facet::Platform, Filter::only("Web")));
        assert_eq!(ids(&web), vec![2, 4, 6]);
    }

    #[test]
    fn card_search_reaches_technologies() {
        let cards = run(data::cards(), &Query::new().with_search("docker"));
        assert_eq!(ids(&cards), vec![8]);

        let cards = run(
            data::cards(),
            &Query::new().with_filter(Facet::Technology, Filter::only("React")),
        );
        assert_eq!(ids(&cards), vec![1]);
    }

    #[test]
    fn running_twice_is_identical() {
        let query = Query::new()
            .with_search("a")
            .with_sort(CourseFileSort::Downloads);
        let first = run(data::course_files(), &query);
        let second = run(data::course_files(), &query);
        assert_eq!(first, second);
    }

    #[test]
    fn reset_restores_full_default_order() {
        let mut query = Query::new()
            .with_search("power")
            .with_filter(Facet::Category, Filter::only("Engineering"))
            .with_sort(CardSort::Size);
        assert_eq!(ids(&run(data::cards(), &query)), vec![5]);

        query.reset();
        assert_eq!(ids(&run(data::cards(), &query)), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn size_sort_is_numeric_descending() {
        let cards = vec![card(1, "2.8 MB", ""), card(2, "35 MB", ""), card(3, "1.5 MB", "")];
        let sorted = run(&cards, &Query::new().with_sort(CardSort::Size));
        let sizes: Vec<&str> = sorted.iter().map(|c| c.size.as_str()).collect();
        assert_eq!(sizes, vec!["35 MB", "2.8 MB", "1.5 MB"]);
    }

    #[test]
    fn unparsable_sizes_sort_last() {
        let cards = vec![card(1, "n/a", ""), card(2, "1 MB", ""), card(3, "9 KB", "")];
        let sorted = run(&cards, &Query::new().with_sort(CardSort::Size));
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn date_sort_leaves_undated_records_in_place() {
        let cards = vec![
            card(1, "1 MB", "2023-01-05"),
            card(2, "1 MB", "soon"),
            card(3, "1 MB", "March 14, 2025"),
            card(4, "1 MB", ""),
            card(5, "1 MB", "Jul 20, 2023"),
        ];
        let sorted = run(&cards, &Query::new().with_sort(CardSort::Date));
        assert_eq!(ids(&sorted), vec![3, 2, 5, 4, 1]);
    }

    #[test]
    fn date_sort_mixes_formats_by_calendar_date() {
        let books = run(data::books(), &Query::new().with_sort(BookSort::Date));
        let dates: Vec<_> = books.iter().filter_map(Book::published_on).collect();
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(books.first().map(|b| b.id), Some(4));
        assert_eq!(books.last().map(|b| b.id), Some(6));
    }

    #[test]
    fn rating_and_downloads_sort_descending() {
        let books = run(data::books(), &Query::new().with_sort(BookSort::Rating));
        assert_eq!(books.first().map(|b| b.id), Some(2));
        assert!(books.windows(2).all(|w| w[0].rating >= w[1].rating));

        let files = run(
            data::course_files(),
            &Query::new().with_sort(CourseFileSort::Downloads),
        );
        assert_eq!(files.first().map(|f| f.id), Some(8));
        assert!(files.windows(2).all(|w| w[0].downloads >= w[1].downloads));
    }

    #[test]
    fn title_sort_ignores_case_first() {
        let mut files: Vec<CourseFile> = data::course_files()[..3].to_vec();
        files[0].title = "beta".into();
        files[1].title = "Alpha".into();
        files[2].title = "alpha".into();
        let sorted = run(&files, &Query::new().with_sort(CourseFileSort::Title));
        let titles: Vec<&str> = sorted.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "Alpha", "beta"]);
    }

    #[test]
    fn every_result_satisfies_the_query() {
        for platform in crate::catalog::facets::values(data::cards(), Facet::Platform) {
            let query = Query::new()
                .with_search("e")
                .with_filter(Facet::Platform, Filter::only(platform.clone()));
            let cards = run(data::cards(), &query);
            let expected = data::cards()
                .iter()
                .filter(|c| c.platform.as_deref() == Some(platform.as_str()))
                .filter(|c| c.search_fields().iter().any(|f| f.to_lowercase().contains('e')))
                .count();
            assert_eq!(cards.len(), expected);
        }
    }
}
