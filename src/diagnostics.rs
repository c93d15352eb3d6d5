//! Hints for an operator when a scanned code found no product.
//!
//! The truncations mirror the usual ways a supplier code drifts from the
//! ERP code: zero padding on the left and a 2 to 4 digit variant suffix on
//! the right.

use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::matcher::{char_prefix, strip_leading_zeros};

pub const TRUNCATION_CUTS: std::ops::RangeInclusive<usize> = 2..=4;
pub const SIMILAR_LIMIT: usize = 5;
pub const SIMILAR_SEARCH_CHARS: usize = 4;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    pub cut: usize,
    pub base: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarProduct {
    pub code: String,
    pub description: String,
    pub erp_code: String,
    pub erp_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarProducts {
    Found { products: Vec<SimilarProduct> },
    NoneFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub code: String,
    pub stripped: String,
    pub truncations: Vec<Truncation>,
    pub base_search: String,
    pub similar: SimilarProducts,
}

pub fn diagnose(code: &str, index: &CatalogIndex) -> Diagnostics {
    let length = code.chars().count();
    let truncations = TRUNCATION_CUTS
        .filter(|cut| length > *cut)
        .filter_map(|cut| {
            let kept = char_prefix(code, length - cut)?;
            Some(Truncation {
                cut,
                base: strip_leading_zeros(kept).to_string(),
            })
        })
        .collect();

    let head = char_prefix(code, SIMILAR_SEARCH_CHARS).unwrap_or(code);
    let base_search = strip_leading_zeros(head).to_string();

    let products: Vec<SimilarProduct> = index
        .iter()
        .filter(|(key, _)| key.contains(base_search.as_str()))
        .take(SIMILAR_LIMIT)
        .map(|(key, record)| SimilarProduct {
            code: key.to_string(),
            description: record
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect(),
            erp_code: record.erp_code.clone(),
            erp_name: record.erp_name.clone(),
        })
        .collect();

    let similar = if products.is_empty() {
        SimilarProducts::NoneFound
    } else {
        SimilarProducts::Found { products }
    };

    Diagnostics {
        code: code.to_string(),
        stripped: strip_leading_zeros(code).to_string(),
        truncations,
        base_search,
        similar,
    }
}
