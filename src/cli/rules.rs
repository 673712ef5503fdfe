//! `rules` command.

use anyhow::Result;

use super::common::installed_chain;
use crate::config::ProjectConfig;

/// Print the installed rule chain as pretty JSON on stdout.
pub async fn print_rules(config: &ProjectConfig) -> Result<()> {
    let chain = installed_chain(config).await?;
    println!("{}", chain.to_json()?);
    Ok(())
}
