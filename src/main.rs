//! svgr-rules - inspect how SVG imports are routed through the build.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use std::env;
use svgr_rules::cli::{self, Cli, Commands};
use svgr_rules::config::ProjectConfig;
use svgr_rules::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry } => cli::init::write_config(&cli.config, *dry),
        Commands::Rules => cli::rules::print_rules(&load_config(&cli)?).await,
        Commands::Classify { import, issuer } => {
            cli::classify::run_classify(&load_config(&cli)?, import, issuer.as_deref()).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<ProjectConfig> {
    ProjectConfig::load(&env::current_dir()?, &cli.config)
}
