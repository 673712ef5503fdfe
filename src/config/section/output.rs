//! `[output]` section configuration.
//!
//! The slice of the host's normalized output policy that SVG rules depend on.
//!
//! # Example
//!
//! ```toml
//! [output]
//! data_uri_limit = 4096           # bytes, or a per-type table (see below)
//!
//! [output.dist_path]
//! svg = "static/svg"              # directory for emitted SVG files
//!
//! [output.filename]
//! svg = "[name].[contenthash:8].svg"
//! ```
//!
//! Per-type limits select the `svg` entry:
//!
//! ```toml
//! [output.data_uri_limit]
//! svg = 4096
//! image = 10000
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::host::BuildMode;
use crate::config::ConfigDiagnostics;

/// Default inline limit in bytes.
pub const DEFAULT_DATA_URI_LIMIT: u64 = 4096;

/// Key selected from a per-type limit table.
pub const SVG_LIMIT_KEY: &str = "svg";

/// Data URI size limit, uniform or per resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataUriLimit {
    /// One limit for every resource type.
    Uniform(u64),
    /// Limits keyed by resource type (`svg`, `image`, `font`, ...).
    PerType(FxHashMap<String, u64>),
}

impl Default for DataUriLimit {
    fn default() -> Self {
        Self::Uniform(DEFAULT_DATA_URI_LIMIT)
    }
}

impl DataUriLimit {
    /// Limit that applies to SVG resources, if one can be determined.
    pub fn svg(&self) -> Option<u64> {
        match self {
            Self::Uniform(limit) => Some(*limit),
            Self::PerType(limits) => limits.get(SVG_LIMIT_KEY).copied(),
        }
    }
}

/// Output policy of the host.
///
/// `data_uri_limit` inlines SVGs encoding below that many bytes (default 4096).
/// Either a number, or a per-type table such as `{ svg = 4096, image = 8192 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "output")]
pub struct OutputConfig {
    /// Data URI limit in bytes, uniform or per resource type.
    #[config(status = hidden)]
    pub data_uri_limit: DataUriLimit,

    /// Output directories per resource type.
    #[config(sub_config)]
    pub dist_path: DistPathConfig,

    /// Output filename templates per resource type.
    #[config(sub_config)]
    pub filename: FilenameConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_uri_limit: DataUriLimit::default(),
            dist_path: DistPathConfig::default(),
            filename: FilenameConfig::default(),
        }
    }
}

impl OutputConfig {
    /// Validate output configuration.
    ///
    /// # Checks
    /// - A per-type `data_uri_limit` table must carry an `svg` entry.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.data_uri_limit.svg().is_none() {
            diag.error_with_hint(
                Self::FIELDS.data_uri_limit,
                "no limit for svg resources",
                format!(
                    "add `{SVG_LIMIT_KEY} = {DEFAULT_DATA_URI_LIMIT}` to {} or use a single number",
                    Self::FIELDS.data_uri_limit
                ),
            );
        }
    }

    /// Filename template for emitted SVGs under the given mode.
    pub fn svg_filename(&self, mode: BuildMode) -> String {
        match &self.filename.svg {
            Some(name) => name.clone(),
            None if mode.is_dev() => "[name].svg".to_string(),
            None => "[name].[contenthash:8].svg".to_string(),
        }
    }

    /// `<dist_path>/<filename>` for emitted SVGs.
    pub fn svg_output_path(&self, mode: BuildMode) -> String {
        let dir = self.dist_path.svg.trim_end_matches('/');
        let filename = self.svg_filename(mode);
        if dir.is_empty() {
            filename
        } else {
            format!("{dir}/{filename}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "output.dist_path")]
pub struct DistPathConfig {
    /// Directory for emitted SVG files, relative to the output root.
    #[config(default = "static/svg")]
    pub svg: String,
}

impl Default for DistPathConfig {
    fn default() -> Self {
        Self {
            svg: "static/svg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "output.filename")]
pub struct FilenameConfig {
    /// Filename template for emitted SVGs.
    /// Defaults to `[name].[contenthash:8].svg`, or `[name].svg` in development.
    pub svg: Option<String>,
}
