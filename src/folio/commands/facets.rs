use crate::catalog::{facets, Catalog, Facet};
use crate::commands::{CmdMessage, CmdResult, FacetListing};
use crate::data;
use crate::error::Result;

pub fn run(catalog: Catalog, facet: Facet) -> Result<CmdResult> {
    let values = match catalog {
        Catalog::Courses => facets::values(data::course_files(), facet),
        Catalog::Books => facets::values(data::books(), facet),
        Catalog::SourceCode => facets::values(data::cards(), facet),
    };

    let mut result = CmdResult::default();
    if !catalog.supports(facet) {
        let supported: Vec<&str> = catalog.facets().iter().map(|f| f.as_str()).collect();
        result.add_message(CmdMessage::warning(format!(
            "{} has no {} facet (available: {})",
            catalog,
            facet,
            supported.join(", ")
        )));
    }

    Ok(result.with_facets(FacetListing {
        catalog,
        facet,
        values,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn lists_card_platforms() {
        let result = run(Catalog::SourceCode, Facet::Platform).unwrap();
        let listing = result.facets.unwrap();
        assert_eq!(listing.values.len(), 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unsupported_facet_warns_and_is_empty() {
        let result = run(Catalog::Courses, Facet::Category).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert!(result.facets.unwrap().values.is_empty());
    }
}
