//! Tolerant code resolution.
//!
//! Suppliers pad, truncate and re-suffix product codes differently from the
//! ERP export, so a scanned code is tried against the catalog through a fixed
//! cascade. The first stage that hits wins:
//!
//! 1. exact key
//! 2. leading zeros stripped
//! 3. leading and trailing zeros stripped on both sides (linear scan)
//! 4. shared prefix of 6, 5, 4 then 3 characters (linear scan)
//!
//! Scans walk the index in insertion order, so the first catalog row that
//! satisfies a stage is the one reported.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::catalog::{CatalogIndex, ProductRecord};

/// Longest prefix tried first, then shorter ones down to the minimum.
pub const PREFIX_LENGTHS: [usize; 4] = [6, 5, 4, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Exact,
    StrippedZeros,
    Normalized,
    Prefix(usize),
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMethod::Exact => f.write_str("exact"),
            MatchMethod::StrippedZeros => f.write_str("stripped_zeros"),
            MatchMethod::Normalized => f.write_str("normalized"),
            MatchMethod::Prefix(n) => write!(f, "prefix_{n}"),
        }
    }
}

impl Serialize for MatchMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub record: &'a ProductRecord,
    pub method: MatchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_used: Option<String>,
}

pub fn strip_leading_zeros(code: &str) -> &str {
    code.trim_start_matches('0')
}

/// Strips zeros from both ends.
pub fn normalize_zeros(code: &str) -> &str {
    code.trim_start_matches('0').trim_end_matches('0')
}

/// First `n` characters of `s`, or `None` when `s` is shorter.
pub(crate) fn char_prefix(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    match s.char_indices().nth(n) {
        Some((end, _)) => Some(&s[..end]),
        None if s.chars().count() == n => Some(s),
        None => None,
    }
}

pub fn resolve<'a>(code: &str, index: &'a CatalogIndex) -> Option<MatchResult<'a>> {
    if let Some(record) = index.get(code) {
        return Some(hit(code, record, MatchMethod::Exact, None));
    }

    let stripped = strip_leading_zeros(code);
    if let Some(record) = index.get(stripped) {
        return Some(hit(code, record, MatchMethod::StrippedZeros, None));
    }

    let norm = stripped.trim_end_matches('0');
    if let Some((_, record)) = index.iter().find(|(k, _)| normalize_zeros(k) == norm) {
        return Some(hit(
            code,
            record,
            MatchMethod::Normalized,
            Some(norm.to_string()),
        ));
    }

    for tam in PREFIX_LENGTHS {
        let Some(prefix) = char_prefix(stripped, tam) else {
            continue;
        };
        let found = index.iter().find(|(k, _)| {
            char_prefix(strip_leading_zeros(k), tam).is_some_and(|p| p == prefix)
        });
        if let Some((_, record)) = found {
            return Some(hit(
                code,
                record,
                MatchMethod::Prefix(tam),
                Some(prefix.to_string()),
            ));
        }
    }

    tracing::debug!(code, "no catalog entry matched");
    None
}

fn hit<'a>(
    code: &str,
    record: &'a ProductRecord,
    method: MatchMethod,
    base_used: Option<String>,
) -> MatchResult<'a> {
    tracing::debug!(
        code,
        matched = %record.product_code,
        method = %method,
        "catalog match"
    );
    MatchResult {
        record,
        method,
        base_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product;

    fn index_of(codes: &[&str]) -> CatalogIndex {
        CatalogIndex::build(codes.iter().map(|c| product(c, &format!("P{c}"))))
    }

    #[test]
    fn exact_wins_over_stripped() {
        let index = index_of(&["123", "0123"]);
        let m = resolve("0123", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Exact);
        assert_eq!(m.record.product_code, "0123");
        assert_eq!(m.base_used, None);
    }

    #[test]
    fn stripped_zeros_stage() {
        let index = index_of(&["4170"]);
        let m = resolve("00004170", &index).expect("match");
        assert_eq!(m.method, MatchMethod::StrippedZeros);
        assert_eq!(m.record.product_code, "4170");
    }

    #[test]
    fn all_zero_code_looks_up_empty_key() {
        let index = index_of(&[""]);
        let m = resolve("0000", &index).expect("match");
        assert_eq!(m.method, MatchMethod::StrippedZeros);
    }

    #[test]
    fn normalized_stage_strips_both_ends_on_both_sides() {
        let index = index_of(&["999", "0051420"]);
        let m = resolve("005142000", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Normalized);
        assert_eq!(m.record.product_code, "0051420");
        assert_eq!(m.base_used.as_deref(), Some("5142"));
    }

    #[test]
    fn normalized_stage_takes_first_in_insertion_order() {
        let index = index_of(&["5142000", "05142"]);
        let m = resolve("514200", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Normalized);
        assert_eq!(m.record.product_code, "5142000");
    }

    #[test]
    fn prefix_prefers_longest_length() {
        let index = index_of(&["4170", "417099"]);
        let m = resolve("417000", &index).expect("match");
        // "4170" normalizes to "417" and "417000" normalizes to "417".
        assert_eq!(m.method, MatchMethod::Normalized);

        let index = index_of(&["4170", "417012"]);
        let m = resolve("417019", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Prefix(5));
        assert_eq!(m.record.product_code, "417012");
        assert_eq!(m.base_used.as_deref(), Some("41701"));
    }

    #[test]
    fn prefix_six_beats_earlier_shorter_candidate() {
        let index = index_of(&["4171", "41709955"]);
        let m = resolve("41709911", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Prefix(6));
        assert_eq!(m.record.product_code, "41709955");
        assert_eq!(m.base_used.as_deref(), Some("417099"));
    }

    #[test]
    fn prefix_four_after_longer_lengths_miss() {
        let index = index_of(&["41709"]);
        let m = resolve("4170888", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Prefix(4));
        assert_eq!(m.record.product_code, "41709");
        assert_eq!(m.base_used.as_deref(), Some("4170"));
    }

    #[test]
    fn prefix_falls_back_to_three() {
        let index = index_of(&["00326999"]);
        let m = resolve("0003260226", &index).expect("match");
        assert_eq!(m.method, MatchMethod::Prefix(3));
        assert_eq!(m.base_used.as_deref(), Some("326"));
    }

    #[test]
    fn prefix_skips_lengths_longer_than_code() {
        let index = index_of(&["12"]);
        assert!(resolve("0013", &index).is_none());
    }

    #[test]
    fn no_match_on_empty_index() {
        let index = CatalogIndex::default();
        assert!(resolve("00004170", &index).is_none());
    }

    #[test]
    fn stripping_is_idempotent() {
        for code in ["000120", "120", "", "0", "1002003000"] {
            let once = strip_leading_zeros(code);
            assert_eq!(strip_leading_zeros(once), once);
            let norm = normalize_zeros(code);
            assert_eq!(normalize_zeros(norm), norm);
        }
    }

    #[test]
    fn method_names() {
        assert_eq!(MatchMethod::Exact.to_string(), "exact");
        assert_eq!(MatchMethod::StrippedZeros.to_string(), "stripped_zeros");
        assert_eq!(MatchMethod::Normalized.to_string(), "normalized");
        assert_eq!(MatchMethod::Prefix(4).to_string(), "prefix_4");
    }

    #[test]
    fn char_prefix_respects_length() {
        assert_eq!(char_prefix("12345", 3), Some("123"));
        assert_eq!(char_prefix("123", 3), Some("123"));
        assert_eq!(char_prefix("12", 3), None);
    }
}
