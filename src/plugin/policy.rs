//! Classification of SVG imports.
//!
//! Decides, from the resource query and the issuer, which pipeline handles an
//! import. Markers are checked in a fixed order and the first hit wins:
//!
//! | Order | Query marker              | Category          |
//! |-------|---------------------------|-------------------|
//! | 1     | `url`, `__inline=false`   | `ForcedUrl`       |
//! | 2     | `inline`                  | `ForcedInline`    |
//! | 3     | component query (`react`) | `ForcedComponent` |
//! | 4     | none, script issuer       | `MixedImport`     |
//! | 5     | anything else             | `SizeBasedAsset`  |
//!
//! Row 4 only exists when mixed import is enabled or the export mode is
//! `default`. Row 5 has no condition, so every SVG import is covered.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::matcher::IssuerKind;
use super::{ExportMode, SetupError};
use crate::chain::{Condition, id::one_of};

/// Query forcing an emitted file.
pub const URL_QUERY: &str = "(__inline=false|url)";
/// Query forcing a data URI.
pub const INLINE_QUERY: &str = "inline";
/// Default query forcing a component.
pub const COMPONENT_QUERY: &str = "react";

static URL_QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_QUERY).unwrap());
static INLINE_QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(INLINE_QUERY).unwrap());

/// Condition of the URL marker, as the host's built-in `svg-url` sub-rule uses it.
pub fn url_query_condition() -> Condition {
    Condition::from(URL_QUERY_REGEX.clone())
}

/// Pipeline handling an SVG import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Always emit a file, export its URL.
    ForcedUrl,
    /// Always export a data URI.
    ForcedInline,
    /// Always generate a component, exported as default.
    ForcedComponent,
    /// Bare import from script source: component under the global export mode.
    MixedImport,
    /// Data URI below the size limit, emitted file otherwise.
    SizeBasedAsset,
}

impl RuleCategory {
    /// Evaluation order of the installed sub-rules.
    pub const PRIORITY: [Self; 5] = [
        Self::ForcedUrl,
        Self::ForcedInline,
        Self::ForcedComponent,
        Self::MixedImport,
        Self::SizeBasedAsset,
    ];

    /// Id of the sub-rule implementing this category.
    pub const fn one_of_id(&self) -> &'static str {
        match self {
            Self::ForcedUrl => one_of::SVG_URL,
            Self::ForcedInline => one_of::SVG_INLINE,
            Self::ForcedComponent => one_of::SVG_REACT,
            Self::MixedImport => one_of::SVG,
            Self::SizeBasedAsset => one_of::SVG_ASSET,
        }
    }

    /// Inverse of [`one_of_id`](Self::one_of_id).
    pub fn from_one_of_id(id: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|c| c.one_of_id() == id)
    }

    /// Whether the pipeline generates a component.
    pub const fn is_component(&self) -> bool {
        matches!(self, Self::ForcedComponent | Self::MixedImport)
    }
}

/// Outcome of classifying one import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: RuleCategory,
    /// Export mode of the generated component, for component categories.
    pub export_mode: Option<ExportMode>,
    /// The size-based asset step also runs, providing the default export.
    pub with_asset: bool,
}

/// Inputs that decide classification for one build.
#[derive(Debug, Clone)]
pub struct Policy {
    pub export_mode: ExportMode,
    pub mixed_import: bool,
    /// Resolved data URI limit in bytes.
    pub max_size: u64,
    component_query: Regex,
}

impl Policy {
    pub fn new(
        export_mode: ExportMode,
        mixed_import: bool,
        max_size: u64,
        component_query: &str,
    ) -> Result<Self, SetupError> {
        if component_query.is_empty() {
            return Err(SetupError::EmptyPattern);
        }
        let component_query =
            Regex::new(component_query).map_err(|source| SetupError::InvalidPattern {
                pattern: component_query.to_string(),
                source,
            })?;
        Ok(Self {
            export_mode,
            mixed_import,
            max_size,
            component_query,
        })
    }

    pub fn component_query(&self) -> &Regex {
        &self.component_query
    }

    /// Resource query marker of a category, if it has one.
    pub fn query_condition(&self, category: RuleCategory) -> Option<Condition> {
        let regex = match category {
            RuleCategory::ForcedUrl => &*URL_QUERY_REGEX,
            RuleCategory::ForcedInline => &*INLINE_QUERY_REGEX,
            RuleCategory::ForcedComponent => &self.component_query,
            RuleCategory::MixedImport | RuleCategory::SizeBasedAsset => return None,
        };
        Some(Condition::from(regex.clone()))
    }

    /// Whether the mixed-import sub-rule is installed.
    pub fn has_mixed_import_rule(&self) -> bool {
        self.mixed_import || self.export_mode == ExportMode::Default
    }

    /// Whether the mixed-import sub-rule also runs the asset step.
    pub fn with_companion_asset(&self) -> bool {
        self.has_mixed_import_rule() && self.export_mode == ExportMode::Named
    }

    /// Installed categories in evaluation order.
    pub fn categories(&self) -> Vec<RuleCategory> {
        RuleCategory::PRIORITY
            .into_iter()
            .filter(|c| *c != RuleCategory::MixedImport || self.has_mixed_import_rule())
            .collect()
    }

    /// Classify an import by its query (without `?`) and issuer kind.
    pub fn classify(&self, query: Option<&str>, issuer: IssuerKind) -> Classification {
        // Same test as the installed `resourceQuery` conditions: a bare `?` is an empty query.
        let marked = |regex: &Regex| query.is_some_and(|q| regex.is_match(q));

        let forced = |category| Classification {
            category,
            export_mode: None,
            with_asset: false,
        };

        if marked(&URL_QUERY_REGEX) {
            forced(RuleCategory::ForcedUrl)
        } else if marked(&INLINE_QUERY_REGEX) {
            forced(RuleCategory::ForcedInline)
        } else if marked(&self.component_query) {
            Classification {
                category: RuleCategory::ForcedComponent,
                export_mode: Some(ExportMode::Default),
                with_asset: false,
            }
        } else if issuer.is_script() && self.has_mixed_import_rule() {
            Classification {
                category: RuleCategory::MixedImport,
                export_mode: Some(self.export_mode),
                with_asset: self.with_companion_asset(),
            }
        } else {
            forced(RuleCategory::SizeBasedAsset)
        }
    }
}
