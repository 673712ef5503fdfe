//! Export shape of generated components.

use serde::{Deserialize, Serialize};

use super::SetupError;
use crate::config::{SvgDefaultExport, SvgrConfig};

/// How a generated component module exports the component.
///
/// - `Default`: `export default Component`
/// - `Named`: `export { Component as ReactComponent }`, with the URL (or data
///   URI) as the default export when the asset step also runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Default,
    Named,
}

impl ExportMode {
    /// Export mode for one build.
    ///
    /// `svgr_options.exportType` wins; otherwise the deprecated
    /// `svg_default_export` decides (`url` → named, `component` → default).
    pub fn resolve(options: &SvgrConfig) -> Result<Self, SetupError> {
        if let Some(value) = options.export_type() {
            return match value.as_str() {
                Some("default") => Ok(Self::Default),
                Some("named") => Ok(Self::Named),
                _ => Err(SetupError::InvalidExportType(value.clone())),
            };
        }

        Ok(match options.svg_default_export.unwrap_or_default() {
            SvgDefaultExport::Url => Self::Named,
            SvgDefaultExport::Component => Self::Default,
        })
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Named => "named",
        }
    }
}
