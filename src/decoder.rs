//! Positional decoding of supplier roll labels.
//!
//! Both layouts are fixed-width digit strings. Offsets below are 0-indexed
//! and end-exclusive; they are the layouts themselves and are never inferred.
//!
//! ```text
//! LITORAL (33)
//!   0-4 prefix | 5-12 code | 13 | 14-18 qty (MT) | 19-32 control
//!
//! EUROTEXTIL GS1 (45, starts with "01")
//!   0-1 "01" | 2-7 PO | 8-10 | 11-17 code | 18-26 | 27-29 color | 30 |
//!   31-35 sequence | 36 | 37-41 qty (MT) | 42-44
//! ```

use serde::Serialize;
use std::ops::Range;

use crate::catalog::CatalogIndex;
use crate::error::LabelError;
use crate::matcher::{self, MatchResult};

pub const LITORAL_LENGTH: usize = 33;
pub const EUROTEXTIL_LENGTH: usize = 45;
pub const EUROTEXTIL_PREFIX: &str = "01";

const LITORAL_CODE: Range<usize> = 5..13;
const LITORAL_QUANTITY: Range<usize> = 14..19;
const LITORAL_CONTROL: Range<usize> = 19..33;

const EURO_PO: Range<usize> = 2..8;
const EURO_CODE: Range<usize> = 11..18;
const EURO_COLOR: Range<usize> = 27..30;
const EURO_SEQUENCE: Range<usize> = 31..36;
const EURO_QUANTITY: Range<usize> = 37..42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelFormat {
    Litoral,
    Eurotextil,
    Unknown,
}

impl LabelFormat {
    pub fn name(self) -> &'static str {
        match self {
            LabelFormat::Litoral => "LITORAL",
            LabelFormat::Eurotextil => "EUROTEXTIL",
            LabelFormat::Unknown => "DESCONHECIDO",
        }
    }
}

/// Fields sliced out of the label. Which ones exist depends on the layout.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "format", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelFields<'a> {
    Litoral {
        code: String,
        /// NaN when the slice is not a number.
        quantity: f64,
        control: String,
        product: Option<MatchResult<'a>>,
    },
    Eurotextil {
        po: String,
        code: String,
        color: String,
        sequence: String,
        quantity: f64,
        product: Option<MatchResult<'a>>,
    },
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodedLabel<'a> {
    pub length: usize,
    #[serde(flatten)]
    pub fields: LabelFields<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_manual_color: Option<bool>,
    pub error: Option<LabelError>,
}

impl<'a> DecodedLabel<'a> {
    pub fn format(&self) -> LabelFormat {
        match self.fields {
            LabelFields::Litoral { .. } => LabelFormat::Litoral,
            LabelFields::Eurotextil { .. } => LabelFormat::Eurotextil,
            LabelFields::Unknown => LabelFormat::Unknown,
        }
    }

    /// The product code sliced from the label, if the layout was recognized.
    pub fn code(&self) -> Option<&str> {
        match &self.fields {
            LabelFields::Litoral { code, .. } | LabelFields::Eurotextil { code, .. } => {
                Some(code)
            }
            LabelFields::Unknown => None,
        }
    }

    pub fn quantity(&self) -> Option<f64> {
        match self.fields {
            LabelFields::Litoral { quantity, .. } | LabelFields::Eurotextil { quantity, .. } => {
                Some(quantity)
            }
            LabelFields::Unknown => None,
        }
    }

    pub fn product(&self) -> Option<&MatchResult<'a>> {
        match &self.fields {
            LabelFields::Litoral { product, .. } | LabelFields::Eurotextil { product, .. } => {
                product.as_ref()
            }
            LabelFields::Unknown => None,
        }
    }
}

pub fn classify(digits: &str) -> LabelFormat {
    match digits.chars().count() {
        LITORAL_LENGTH => LabelFormat::Litoral,
        EUROTEXTIL_LENGTH if digits.starts_with(EUROTEXTIL_PREFIX) => LabelFormat::Eurotextil,
        _ => LabelFormat::Unknown,
    }
}

pub fn decode<'a>(digits: &str, index: &'a CatalogIndex) -> DecodedLabel<'a> {
    let length = digits.chars().count();
    let format = classify(digits);
    tracing::debug!(length, format = format.name(), "label classified");

    match format {
        LabelFormat::Litoral => {
            let code = field(digits, LITORAL_CODE).to_string();
            let product = matcher::resolve(&code, index);
            let error = not_found(&code, product.is_none());
            DecodedLabel {
                length,
                fields: LabelFields::Litoral {
                    quantity: parse_decimal(field(digits, LITORAL_QUANTITY)),
                    control: field(digits, LITORAL_CONTROL).to_string(),
                    code,
                    product,
                },
                requires_manual_color: Some(true),
                error,
            }
        }
        LabelFormat::Eurotextil => {
            let code = field(digits, EURO_CODE).to_string();
            let product = matcher::resolve(&code, index);
            let error = not_found(&code, product.is_none());
            DecodedLabel {
                length,
                fields: LabelFields::Eurotextil {
                    po: field(digits, EURO_PO).to_string(),
                    color: stripped_or_zero(field(digits, EURO_COLOR)),
                    sequence: stripped_or_zero(field(digits, EURO_SEQUENCE)),
                    quantity: parse_decimal(field(digits, EURO_QUANTITY)),
                    code,
                    product,
                },
                requires_manual_color: Some(false),
                error,
            }
        }
        LabelFormat::Unknown => DecodedLabel {
            length,
            fields: LabelFields::Unknown,
            requires_manual_color: None,
            error: Some(LabelError::UnknownFormat { length }),
        },
    }
}

fn not_found(code: &str, missing: bool) -> Option<LabelError> {
    missing.then(|| LabelError::ProductNotFound {
        code: code.to_string(),
    })
}

/// Character slice; callers have already checked the total length.
fn field(digits: &str, range: Range<usize>) -> &str {
    let mut bounds = digits
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(digits.len()));
    let start = bounds.nth(range.start).unwrap_or(digits.len());
    let end = bounds
        .nth(range.end - range.start - 1)
        .unwrap_or(digits.len());
    &digits[start..end]
}

fn stripped_or_zero(slice: &str) -> String {
    match matcher::strip_leading_zeros(slice) {
        "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Base-10 number or NaN. Only digits, sign, point and exponent are
/// accepted, so words like `inf` or `nan` do not parse.
pub fn parse_decimal(slice: &str) -> f64 {
    let s = slice.trim();
    if s.is_empty()
        || !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}
