//! Identifiers of rules, sub-rules and uses in the host chain.

/// Top-level rules.
pub mod rule {
    pub const SVG: &str = "svg";
    pub const JS: &str = "js";
}

/// Sub-rules of the `svg` rule.
pub mod one_of {
    pub const SVG_URL: &str = "svg-url";
    pub const SVG_INLINE: &str = "svg-inline";
    pub const SVG_REACT: &str = "svg-react";
    pub const SVG: &str = "svg";
    pub const SVG_ASSET: &str = "svg-asset";
}

/// Loader attachments.
pub mod uses {
    pub const SVGR: &str = "svgr";
    pub const URL: &str = "url";
    pub const SWC: &str = "swc";
    pub const BABEL: &str = "babel";
}
