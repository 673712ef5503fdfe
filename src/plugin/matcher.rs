//! Resource and issuer patterns.

use regex::Regex;
use std::sync::LazyLock;

use crate::chain::Condition;

pub use crate::chain::split_query;

/// SVG resources.
pub const SVG_PATTERN: &str = r"\.svg$";
/// JavaScript-family source files.
pub const SCRIPT_PATTERN: &str = r"\.(?:js|jsx|mjs|cjs|ts|tsx|mts|cts)$";
/// Stylesheets, excluded from script issuers.
pub const STYLE_PATTERN: &str = r"\.(?:css|less|sass|scss|styl|stylus)$";

pub static SVG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(SVG_PATTERN).unwrap());
pub static SCRIPT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(SCRIPT_PATTERN).unwrap());
pub static STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(STYLE_PATTERN).unwrap());

/// Whether `resource` (query ignored) is an SVG.
pub fn is_svg(resource: &str) -> bool {
    SVG_REGEX.is_match(split_query(resource).0)
}

/// Kind of file performing an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuerKind {
    Script,
    Style,
    Other,
}

impl IssuerKind {
    /// Classify an issuer path. `None` (entry points) is `Other`.
    pub fn of(issuer: Option<&str>) -> Self {
        let Some(path) = issuer.map(|p| split_query(p).0) else {
            return Self::Other;
        };
        if STYLE_REGEX.is_match(path) {
            Self::Style
        } else if SCRIPT_REGEX.is_match(path) {
            Self::Script
        } else {
            Self::Other
        }
    }

    #[inline]
    pub const fn is_script(&self) -> bool {
        matches!(self, Self::Script)
    }
}

/// `test` condition of the SVG rule.
pub fn svg_condition() -> Condition {
    Condition::from(SVG_REGEX.clone())
}

/// `test` condition of the host's JavaScript rule.
pub fn script_condition() -> Condition {
    Condition::from(SCRIPT_REGEX.clone())
}

/// Issuer condition of the mixed-import sub-rule: script, never stylesheet.
pub fn script_issuer_condition() -> Condition {
    Condition::and([
        script_condition(),
        Condition::not(Condition::from(STYLE_REGEX.clone())),
    ])
}
