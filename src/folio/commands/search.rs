use crate::commands::{CmdMessage, CmdResult};
use crate::data;
use crate::error::Result;
use crate::search::search_items;

pub fn run(query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if query.trim().is_empty() {
        result.add_message(CmdMessage::info("Enter a search term to look across every catalog."));
        return Ok(result);
    }

    let items: Vec<_> = search_items(data::search_registry(), query)
        .into_iter()
        .cloned()
        .collect();
    if items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No results found for \"{}\". Try a different search term.",
            query.trim()
        )));
    }
    Ok(result.with_search_results(items))
}
