use anyhow::Result;

use crate::battery;
use crate::catalog::CatalogIndex;
use crate::cli::OutputFormat;
use crate::decoder;
use crate::report::{self, LabelReport, ListingReport, SampleReport};
use crate::search;

pub fn decode_output(input: &str, index: &CatalogIndex, format: OutputFormat) -> Result<String> {
    let report = LabelReport::new(input, decoder::decode(input, index), index);
    match format {
        OutputFormat::Json => report::to_json(&report),
        OutputFormat::Text => Ok(report::render_label(&report)),
    }
}

pub fn battery_output(index: &CatalogIndex, format: OutputFormat) -> Result<String> {
    let samples: Vec<SampleReport<'_>> = battery::run_battery(index)
        .into_iter()
        .map(|outcome| SampleReport::new(outcome, index))
        .collect();
    match format {
        OutputFormat::Json => report::to_json(&samples),
        OutputFormat::Text => Ok(report::render_battery(&samples)),
    }
}

pub fn search_output(term: &str, index: &CatalogIndex, format: OutputFormat) -> Result<String> {
    let results = search::scan(term, index);
    match format {
        OutputFormat::Json => report::to_json(&results),
        OutputFormat::Text => Ok(report::render_search(&results)),
    }
}

pub fn list_output(index: &CatalogIndex, format: OutputFormat) -> Result<String> {
    let listing = ListingReport {
        unique_codes: index.len(),
        groups: search::group_by_supplier(index),
    };
    match format {
        OutputFormat::Json => report::to_json(&listing),
        OutputFormat::Text => Ok(report::render_listing(&listing)),
    }
}
