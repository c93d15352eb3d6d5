use serde::Serialize;

use crate::catalog::{CatalogIndex, ProductRecord};

pub const SEARCH_LIMIT: usize = 20;
pub const LISTING_PREVIEW: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub code: &'a str,
    pub record: &'a ProductRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub term: String,
    pub hits: Vec<SearchHit<'a>>,
    /// True when the scan stopped at [`SEARCH_LIMIT`].
    pub capped: bool,
}

/// Free-text lookup: the code contains `term`, or the description or ERP
/// name contains it ignoring case.
pub fn scan<'a>(term: &str, index: &'a CatalogIndex) -> SearchResults<'a> {
    let needle = term.to_lowercase();
    let hits: Vec<SearchHit<'a>> = index
        .iter()
        .filter(|(code, record)| {
            code.contains(term)
                || record.description.to_lowercase().contains(&needle)
                || record.erp_name.to_lowercase().contains(&needle)
        })
        .take(SEARCH_LIMIT)
        .map(|(code, record)| SearchHit { code, record })
        .collect();

    tracing::debug!(term, hits = hits.len(), "catalog scan");
    SearchResults {
        term: term.to_string(),
        capped: hits.len() >= SEARCH_LIMIT,
        hits,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierBucket {
    Litoral,
    Eurotextil,
}

impl SupplierBucket {
    pub fn of(record: &ProductRecord) -> Self {
        if record.supplier_group.contains("LITORAL") {
            SupplierBucket::Litoral
        } else {
            SupplierBucket::Eurotextil
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SupplierBucket::Litoral => "LITORAL",
            SupplierBucket::Eurotextil => "EUROTEXTIL",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierGroup<'a> {
    pub supplier: SupplierBucket,
    pub products: Vec<SearchHit<'a>>,
}

/// Buckets every product by supplier, groups ordered by first appearance.
pub fn group_by_supplier(index: &CatalogIndex) -> Vec<SupplierGroup<'_>> {
    let mut groups: Vec<SupplierGroup<'_>> = Vec::new();
    for (code, record) in index.iter() {
        let bucket = SupplierBucket::of(record);
        let hit = SearchHit { code, record };
        match groups.iter_mut().find(|g| g.supplier == bucket) {
            Some(group) => group.products.push(hit),
            None => groups.push(SupplierGroup {
                supplier: bucket,
                products: vec![hit],
            }),
        }
    }
    groups
}
