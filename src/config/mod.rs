//! Project configuration for `svgr.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── host       # [host]
//! │   ├── output     # [output], [output.dist_path], [output.filename]
//! │   └── svgr       # [svgr]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── status     # Field status checks
//! └── mod.rs         # ProjectConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    BuildMode, DEFAULT_DATA_URI_LIMIT, DataUriLimit, DistPathConfig, EXPORT_TYPE_KEY,
    FilenameConfig, HostConfig, JsLoader, OutputConfig, SVG_LIMIT_KEY, SvgDefaultExport,
    SvgrConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "svgr.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svgr.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Host output policy
    #[serde(default)]
    pub output: OutputConfig,

    /// Host build description
    #[serde(default)]
    pub host: HostConfig,

    /// Plugin options
    #[serde(default)]
    pub svgr: SvgrConfig,
}

impl ProjectConfig {
    /// Load configuration by searching upward from `start` for `config_name`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(start: &Path, config_name: &Path) -> Result<Self> {
        let Some(path) = find_config_file(start, config_name) else {
            log!("config"; "{} not found, using defaults", config_name.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);

        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        self.output.validate_field_status(diag);
        self.host.validate_field_status(diag);
        self.svgr.validate_field_status(diag);

        self.output.validate(diag);
        self.svgr.validate(diag);
    }

    /// Commented TOML template with every section and its defaults.
    ///
    /// Nested `output` tables are rendered by `[output]` itself.
    pub fn template() -> String {
        [
            OutputConfig::template_with_header(),
            HostConfig::template_with_header(),
            SvgrConfig::template_with_header(),
        ]
        .join("\n")
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
