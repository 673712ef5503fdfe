//! `[svgr]` section configuration.
//!
//! User options of the SVG rules.
//!
//! # Example
//!
//! ```toml
//! [svgr]
//! mixed_import = true         # `import url, { ReactComponent } from './a.svg'`
//! query = "react"             # `./a.svg?react` always yields a component
//!
//! [svgr.svgr_options]         # passed through to the component generator
//! exportType = "named"
//! svgoConfig.floatPrecision = 2
//! ```

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ConfigDiagnostics;

/// Key inside `svgr_options` that overrides the export mode.
pub const EXPORT_TYPE_KEY: &str = "exportType";

/// Deprecated default export selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SvgDefaultExport {
    Component,
    #[default]
    Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "svgr")]
pub struct SvgrConfig {
    /// Allow a default and a named import from the same SVG module.
    #[config(default = "true")]
    pub mixed_import: bool,

    /// Resource query (regex) that forces component output.
    #[config(default = "react")]
    pub query: String,

    /// Default export of a bare SVG import: `component` | `url`.
    /// Set `svgr_options.exportType` instead.
    #[config(status = deprecated)]
    pub svg_default_export: Option<SvgDefaultExport>,

    /// Options passed through to the component generator.
    pub svgr_options: Option<Map<String, Value>>,
}

impl Default for SvgrConfig {
    fn default() -> Self {
        Self {
            mixed_import: true,
            query: "react".to_string(),
            svg_default_export: None,
            svgr_options: None,
        }
    }
}

impl SvgrConfig {
    /// `svgr_options.exportType`, when present.
    pub fn export_type(&self) -> Option<&Value> {
        self.svgr_options.as_ref()?.get(EXPORT_TYPE_KEY)
    }

    /// Validate svgr configuration.
    ///
    /// # Checks
    /// - `query` must be a non-empty, valid regex.
    /// - `svgr_options.exportType` must be `default` or `named`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.query.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.query,
                "empty pattern matches every resource query",
                format!("remove the field to use the default `{}`", Self::default().query),
            );
        } else if let Err(err) = Regex::new(&self.query) {
            diag.error(
                Self::FIELDS.query,
                format!("invalid pattern `{}`: {err}", self.query),
            );
        }

        if let Some(value) = self.export_type()
            && !matches!(value.as_str(), Some("default" | "named"))
        {
            diag.error_with_hint(
                Self::FIELDS.svgr_options,
                format!("unsupported {EXPORT_TYPE_KEY} {value}"),
                format!("set {EXPORT_TYPE_KEY} to \"default\" or \"named\""),
            );
        }
    }
}
