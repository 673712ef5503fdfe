//! Transform chains per rule category.
//!
//! Pure: everything the chains need is resolved up front into a
//! [`ResolvedConfig`], and [`compose`] never touches the host.

use serde::Serialize;
use serde_json::{Map, Value};

use super::matcher::script_issuer_condition;
use super::svgo::with_export_mode;
use super::{ExportMode, Policy, RuleCategory};
use crate::chain::id::uses;
use crate::chain::{Condition, DataUrlCondition, ModuleType, ParserOptions};

/// Component generator loader.
pub const SVGR_LOADER: &str = "@svgr/webpack";
/// Companion loader exposing the raw URL next to a named component.
pub const URL_LOADER: &str = "url-loader";

/// One loader of a chain, in host order (the host runs the last one first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStep {
    pub id: String,
    pub loader: String,
    pub options: Value,
    /// Place this step directly ahead of the step with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl TransformStep {
    pub fn new(id: &str, loader: impl Into<String>, options: Value) -> Self {
        Self {
            id: id.to_string(),
            loader: loader.into(),
            options,
            before: None,
        }
    }

    pub fn before(mut self, anchor: &str) -> Self {
        self.before = Some(anchor.to_string());
        self
    }
}

/// Everything one sub-rule needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformChain {
    pub category: RuleCategory,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_query: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Map<String, Value>>,
    pub steps: Vec<TransformStep>,
}

impl TransformChain {
    fn new(category: RuleCategory, module_type: ModuleType) -> Self {
        Self {
            category,
            module_type,
            resource_query: None,
            issuer: None,
            parser: None,
            generator: None,
            steps: Vec::new(),
        }
    }

    pub fn step(&self, id: &str) -> Option<&TransformStep> {
        self.steps.iter().find(|s| s.id == id)
    }
}

/// Setup-time inputs of the composer.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub policy: Policy,
    /// Generator options of emitted files.
    pub url_generator: Map<String, Value>,
    /// `<dir>/<filename>` template of emitted files.
    pub output_path: String,
    /// Generator options with user options merged over the defaults.
    pub svgr_options: Value,
    /// The host's compilation step, replayed ahead of the generator.
    pub js_step: Option<TransformStep>,
}

impl ResolvedConfig {
    fn svgr_step(&self, mode: ExportMode) -> TransformStep {
        TransformStep::new(
            uses::SVGR,
            SVGR_LOADER,
            with_export_mode(&self.svgr_options, mode),
        )
    }

    fn url_step(&self) -> TransformStep {
        let mut options = Map::new();
        options.insert("limit".to_string(), Value::from(self.policy.max_size));
        options.insert("name".to_string(), Value::from(self.output_path.clone()));
        TransformStep::new(uses::URL, URL_LOADER, Value::Object(options))
    }

    fn js_step(&self) -> Option<TransformStep> {
        self.js_step.clone().map(|step| step.before(uses::SVGR))
    }
}

/// Chain implementing `category`.
pub fn build_chain(category: RuleCategory, resolved: &ResolvedConfig) -> TransformChain {
    let policy = &resolved.policy;
    let resource_query = policy.query_condition(category);

    let mut chain = match category {
        RuleCategory::ForcedUrl => {
            let mut chain = TransformChain::new(category, ModuleType::AssetResource);
            chain.generator = Some(resolved.url_generator.clone());
            chain
        }
        RuleCategory::ForcedInline => TransformChain::new(category, ModuleType::AssetInline),
        RuleCategory::ForcedComponent => {
            let mut chain = TransformChain::new(category, ModuleType::JavascriptAuto);
            chain.steps.push(resolved.svgr_step(ExportMode::Default));
            chain.steps.extend(resolved.js_step());
            chain
        }
        RuleCategory::MixedImport => {
            let mut chain = TransformChain::new(category, ModuleType::JavascriptAuto);
            chain.issuer = Some(script_issuer_condition());
            chain.steps.push(resolved.svgr_step(policy.export_mode));
            if policy.with_companion_asset() {
                chain.steps.push(resolved.url_step());
            }
            chain.steps.extend(resolved.js_step());
            chain
        }
        RuleCategory::SizeBasedAsset => {
            let mut chain = TransformChain::new(category, ModuleType::Asset);
            chain.parser = Some(ParserOptions {
                data_url_condition: DataUrlCondition {
                    max_size: policy.max_size,
                },
            });
            chain.generator = Some(resolved.url_generator.clone());
            chain
        }
    };

    chain.resource_query = resource_query;
    chain
}

/// Chains for every installed category, in evaluation order.
pub fn compose(resolved: &ResolvedConfig) -> Vec<TransformChain> {
    resolved
        .policy
        .categories()
        .into_iter()
        .map(|category| build_chain(category, resolved))
        .collect()
}
