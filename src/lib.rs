//! # label-probe
//!
//! Decodes supplier roll labels and explains how (or why not) the embedded
//! product code matches the ERP catalog.
//!
//! ## Architecture
//!
//! - **catalog**: Catalog file loading and the read-only code index
//! - **matcher**: Cascade resolution of a code against the index
//! - **decoder**: LITORAL / EUROTEXTIL positional layouts
//! - **diagnostics**: Suggestions for codes that matched nothing
//! - **search**: Free-text catalog scan and supplier grouping
//! - **battery**: Built-in sample labels
//! - **report**: Text and JSON rendering
//! - **commands**: Shared entry points for the CLI and the shell
//! - **shell**: Interactive prompt
//! - **cli** / **config**: Arguments, catalog path resolution, logging

pub mod battery;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod matcher;
pub mod report;
pub mod search;
pub mod shell;

pub use catalog::{CatalogIndex, ProductRecord};
pub use decoder::{DecodedLabel, LabelFormat, decode};
pub use error::LabelError;
pub use matcher::{MatchMethod, MatchResult, resolve};
pub use search::scan;
