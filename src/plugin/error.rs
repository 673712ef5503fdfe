//! Setup errors.

use thiserror::Error;

/// Configuration problems detected while resolving the rules.
///
/// Raised once at setup, never per module.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("cannot determine the svg data uri limit: per-type limits have no `svg` entry")]
    MissingDataUriLimit,

    #[error("empty resource query pattern would mark every query as a component import")]
    EmptyPattern,

    #[error("invalid resource query pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unsupported exportType {0}, expected \"default\" or \"named\"")]
    InvalidExportType(serde_json::Value),
}
