use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub const CATALOG_ENV: &str = "LABEL_PROBE_CATALOG";
pub const LOCAL_CATALOG_FILE: &str = "depra.json";

pub fn resolve_catalog_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    catalog_path_from(cli.catalog.clone(), env::var(CATALOG_ENV).ok(), &cwd)
}

/// `--catalog`, then the environment, then `depra.json` in the working
/// directory, then the per-user data directory.
pub fn catalog_path_from(
    flag: Option<PathBuf>,
    env_value: Option<String>,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(p) = flag {
        return Ok(p);
    }

    if let Some(p) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(p));
    }

    let local = cwd.join(LOCAL_CATALOG_FILE);
    if local.exists() {
        return Ok(local);
    }

    Ok(label_probe_home()?.join("catalog.json"))
}

fn label_probe_home() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Failed to resolve data directory"))?;
    Ok(base.join("label-probe"))
}

/// Logs go to stderr so `--format json` output stays parseable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn apply_color_choice(cli: &Cli) {
    if cli.no_color {
        colored::control::set_override(false);
    }
}
