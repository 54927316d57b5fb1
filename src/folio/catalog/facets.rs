use super::{CatalogRecord, Facet};
use std::collections::BTreeSet;

/// Distinct values of `facet` across `records`, sorted ascending.
pub fn values<R: CatalogRecord>(records: &[R], facet: Facet) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.facet_values(facet))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
