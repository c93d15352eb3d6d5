use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "label-probe")]
#[command(about = "Decode LITORAL/EUROTEXTIL roll labels and trace catalog matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Product catalog (JSON array exported from the ERP).
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode one label. Split parts are joined before decoding.
    Decode {
        #[arg(required = true, num_args = 1..)]
        digits: Vec<String>,
    },
    /// Decode the built-in sample labels.
    Test,
    /// Free-text search over code, description and ERP name.
    Search { term: String },
    /// List the catalog grouped by supplier.
    List,
    /// Interactive prompt (default when no arguments are given).
    Shell,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
