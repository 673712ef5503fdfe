//! Inline-or-emit decision for SVG assets.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use super::RuleCategory;

/// Characters escaped in SVG data URIs. Spaces and slashes stay readable.
const SVG_URI: &AsciiSet = &CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const SVG_URI_PREFIX: &str = "data:image/svg+xml,";

/// How the raw SVG reaches the importing module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emission {
    /// Embedded as a data URI.
    Inline,
    /// Emitted as a file, referenced by URL.
    Url,
}

/// Size-based choice: inline strictly below `limit`.
#[inline]
pub const fn inline_decision(encoded_len: u64, limit: u64) -> Emission {
    if encoded_len < limit {
        Emission::Inline
    } else {
        Emission::Url
    }
}

impl Emission {
    /// Emission of the raw SVG under `category`.
    ///
    /// `None` for a component generated without the asset step.
    pub fn for_category(
        category: RuleCategory,
        with_asset: bool,
        encoded_len: u64,
        limit: u64,
    ) -> Option<Self> {
        match category {
            RuleCategory::ForcedUrl => Some(Self::Url),
            RuleCategory::ForcedInline => Some(Self::Inline),
            RuleCategory::SizeBasedAsset => Some(inline_decision(encoded_len, limit)),
            RuleCategory::MixedImport if with_asset => Some(inline_decision(encoded_len, limit)),
            RuleCategory::MixedImport | RuleCategory::ForcedComponent => None,
        }
    }
}

/// `data:image/svg+xml,` URI for SVG markup.
pub fn svg_data_uri(svg: &str) -> String {
    let collapsed = svg.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{SVG_URI_PREFIX}{}", utf8_percent_encode(&collapsed, SVG_URI))
}

/// Length of [`svg_data_uri`] output, the size compared against the limit.
pub fn encoded_len(svg: &str) -> u64 {
    svg_data_uri(svg).len() as u64
}
