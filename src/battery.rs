use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::decoder::{self, DecodedLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleLabel {
    pub name: &'static str,
    pub code: &'static str,
}

/// Labels captured from real rolls, one per known product family.
pub const SAMPLE_LABELS: [SampleLabel; 5] = [
    SampleLabel {
        name: "LITORAL - SATIN INDONESIA",
        code: "000000326022600007400025117100856",
    },
    SampleLabel {
        name: "LITORAL - HELANCA LIGHT",
        code: "000004170000000012300099887766554",
    },
    SampleLabel {
        name: "LITORAL - AIR FLOW SLUB",
        code: "000516000000000050000123456789012",
    },
    SampleLabel {
        name: "EURO - CREPE AMANDA",
        code: "010000000005142100000000000012000010005000000",
    },
    SampleLabel {
        name: "EURO - TWO WAY SPAN",
        code: "010000000006691030000000000025000010010000000",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct SampleOutcome<'a> {
    pub sample: SampleLabel,
    pub label: DecodedLabel<'a>,
}

pub fn run_battery(index: &CatalogIndex) -> Vec<SampleOutcome<'_>> {
    SAMPLE_LABELS
        .iter()
        .map(|sample| SampleOutcome {
            sample: *sample,
            label: decoder::decode(sample.code, index),
        })
        .collect()
}
