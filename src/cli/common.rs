//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};

use crate::chain::ChainConfig;
use crate::config::ProjectConfig;
use crate::plugin::{StaticHost, SvgrPlugin, seed_chain};

/// Host chain for `config` with the SVG rules installed.
pub async fn installed_chain(config: &ProjectConfig) -> Result<ChainConfig> {
    let mut chain = seed_chain(config);
    SvgrPlugin::new(config.svgr.clone())
        .setup(&StaticHost::new(config), &mut chain)
        .await
        .context("failed to set up svg rules")?;
    Ok(chain)
}
