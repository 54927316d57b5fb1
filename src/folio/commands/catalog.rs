use crate::catalog::{pipeline, BookSort, CardSort, CatalogRecord, CourseFileSort, Query};
use crate::commands::{CmdMessage, CmdResult};
use crate::data;
use crate::error::Result;

pub fn books(query: &Query<BookSort>) -> Result<CmdResult> {
    Ok(listing(data::books(), query, CmdResult::with_books))
}

pub fn cards(query: &Query<CardSort>) -> Result<CmdResult> {
    Ok(listing(data::cards(), query, CmdResult::with_cards))
}

pub fn course_files(query: &Query<CourseFileSort>) -> Result<CmdResult> {
    Ok(listing(data::course_files(), query, CmdResult::with_course_files))
}

fn listing<R: CatalogRecord>(
    records: &[R],
    query: &Query<R::Sort>,
    attach: fn(CmdResult, Vec<R>) -> CmdResult,
) -> CmdResult {
    let mut result = CmdResult::default();

    for (facet, _) in query.filters() {
        if !R::FACETS.contains(&facet) {
            result.add_message(CmdMessage::warning(format!(
                "{} have no {} field; nothing can match that filter",
                R::NAME,
                facet
            )));
        }
    }

    let matched = pipeline::run(records, query);
    if matched.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} match the current search and filters.",
            R::NAME
        )));
    }
    attach(result, matched)
}
