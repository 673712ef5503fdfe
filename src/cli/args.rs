//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect how SVG imports are routed through the build
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: svgr.toml)
    #[arg(short = 'C', long, global = true, default_value = "svgr.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print setup details
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the installed rule chain as JSON
    #[command(visible_alias = "r")]
    Rules,

    /// Show which pipeline handles an import
    #[command(visible_alias = "c")]
    Classify {
        /// Imported resource, with optional query (e.g. ./logo.svg?react)
        import: String,

        /// File performing the import
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        issuer: Option<String>,
    },

    /// Write a commented svgr.toml
    #[command(visible_alias = "i")]
    Init {
        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_args() {
        let cli = Cli::parse_from(["svgr-rules", "classify", "./a.svg?url", "-i", "src/App.tsx"]);
        match cli.command {
            Commands::Classify { import, issuer } => {
                assert_eq!(import, "./a.svg?url");
                assert_eq!(issuer.as_deref(), Some("src/App.tsx"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("svgr.toml"));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["svgr-rules", "rules", "-v", "-C", "conf/svgr.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("conf/svgr.toml"));
        assert!(matches!(cli.command, Commands::Rules));
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag_not_shadowed() {
        let err = Cli::try_parse_from(["svgr-rules", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_init_dry() {
        let cli = Cli::parse_from(["svgr-rules", "init", "--dry"]);
        assert!(matches!(cli.command, Commands::Init { dry: true }));
    }
}
