//! The build tool the plugin runs inside.

use std::future::Future;

use serde_json::{Map, Value};

use super::matcher::{script_condition, svg_condition};
use super::policy::url_query_condition;
use crate::chain::id::{one_of, rule, uses};
use crate::chain::{ChainConfig, DataUrlCondition, ModuleType, ParserOptions};
use crate::config::{BuildMode, DEFAULT_DATA_URI_LIMIT, JsLoader, OutputConfig, ProjectConfig};

/// Host configuration after its own defaults were applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedConfig {
    pub output: OutputConfig,
    pub mode: BuildMode,
}

/// Host access needed during setup.
pub trait Host {
    /// Resolves once the host finished normalizing its configuration.
    fn normalized_config(&self) -> impl Future<Output = anyhow::Result<NormalizedConfig>> + Send;
}

/// Host backed by a loaded `svgr.toml`.
#[derive(Debug, Clone)]
pub struct StaticHost {
    config: NormalizedConfig,
}

impl StaticHost {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            config: NormalizedConfig {
                output: config.output.clone(),
                mode: config.host.mode,
            },
        }
    }
}

impl Host for StaticHost {
    async fn normalized_config(&self) -> anyhow::Result<NormalizedConfig> {
        Ok(self.config.clone())
    }
}

/// Rule chain of a freshly configured host, before any plugin ran.
///
/// Holds the built-in `svg` rule (emitted file or size-based asset) and the
/// `js` rule with the configured compilation step.
pub fn seed_chain(config: &ProjectConfig) -> ChainConfig {
    let mut chain = ChainConfig::new();

    let mut generator = Map::new();
    generator.insert(
        "filename".to_string(),
        Value::from(config.output.svg_output_path(config.host.mode)),
    );
    let max_size = config.output.data_uri_limit.svg().unwrap_or(DEFAULT_DATA_URI_LIMIT);

    let svg = chain.rule(rule::SVG).test(svg_condition());
    svg.one_of(one_of::SVG_URL)
        .module_type(ModuleType::AssetResource)
        .resource_query(url_query_condition())
        .generator(generator.clone());
    svg.one_of(one_of::SVG_ASSET)
        .module_type(ModuleType::Asset)
        .parser(ParserOptions {
            data_url_condition: DataUrlCondition { max_size },
        })
        .generator(generator);

    let js = chain.rule(rule::JS).test(script_condition());
    if let Some(loader) = config.host.js_loader_name() {
        let id = match config.host.js_loader {
            JsLoader::Babel => uses::BABEL,
            _ => uses::SWC,
        };
        js.use_entry(id)
            .loader(loader)
            .options(config.host.js_options_value());
    }

    chain
}
