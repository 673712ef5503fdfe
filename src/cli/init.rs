//! `init` command.
//!
//! Writes a commented `svgr.toml` with every section at its default.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::log;

/// Write the config template to `path`, or print it when `dry_run` is set.
///
/// Never overwrites an existing file.
pub fn write_config(path: &Path, dry_run: bool) -> Result<()> {
    let template = ProjectConfig::template();
    if dry_run {
        print!("{template}");
        return Ok(());
    }

    if path.exists() {
        bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, template).with_context(|| format!("failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
