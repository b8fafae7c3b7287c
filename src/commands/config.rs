use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::configtool::{default_config_path, load_config};

/// Prints the effective generator defaults as JSON.
pub fn show_config<W: Write>(path: Option<&Path>, out: &mut W) -> Result<()> {
    let config = load_config(path).context("Failed to load configuration")?;
    let source = match path {
        Some(p) => p.display().to_string(),
        None => default_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "<unavailable>".to_string()),
    };
    writeln!(out, "# {}", source)?;
    serde_json::to_writer_pretty(&mut *out, &config).context("Failed to serialize configuration")?;
    writeln!(out)?;
    Ok(())
}
