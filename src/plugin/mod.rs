//! SVG import handling.
//!
//! Replaces the host's built-in SVG rule with one that routes every import
//! to exactly one pipeline:
//!
//! ```text
//! svgr.toml ─► resolve ─► Policy ─► compose ─► [TransformChain] ─► install ─► host chain
//!                 ▲                                                   │
//!                 └──────────── HostSnapshot (svg-url, js) ◄──────────┘
//! ```
//!
//! [`SvgrPlugin::setup`] awaits the host once, everything after that is
//! synchronous.

pub mod asset;
mod compose;
mod error;
mod export;
pub mod host;
mod install;
pub mod matcher;
mod merge;
mod policy;
mod svgo;

pub use compose::{
    ResolvedConfig, SVGR_LOADER, TransformChain, TransformStep, URL_LOADER, build_chain, compose,
};
pub use error::SetupError;
pub use export::ExportMode;
pub use host::{Host, NormalizedConfig, StaticHost, seed_chain};
pub use install::{HostSnapshot, install};
pub use merge::deep_merge;
pub use policy::{COMPONENT_QUERY, Classification, INLINE_QUERY, Policy, RuleCategory, URL_QUERY};
pub use svgo::{default_svgo_config, default_svgr_options, merged_svgr_options};

use serde_json::{Map, Value};

use crate::chain::ChainConfig;
use crate::config::SvgrConfig;
use crate::{debug, log};
use matcher::IssuerKind;

/// The SVG plugin for one build.
#[derive(Debug, Clone, Default)]
pub struct SvgrPlugin {
    options: SvgrConfig,
}

impl SvgrPlugin {
    pub const NAME: &'static str = "rsbuild:svgr";
    /// Plugins that must set up first.
    pub const PRE: &'static [&'static str] = &["rsbuild:react"];

    pub fn new(options: SvgrConfig) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SvgrConfig {
        &self.options
    }

    /// Classification inputs under `config`.
    pub fn policy(&self, config: &NormalizedConfig) -> Result<Policy, SetupError> {
        let max_size = config
            .output
            .data_uri_limit
            .svg()
            .ok_or(SetupError::MissingDataUriLimit)?;
        let export_mode = ExportMode::resolve(&self.options)?;
        Policy::new(
            export_mode,
            self.options.mixed_import,
            max_size,
            &self.options.query,
        )
    }

    /// Everything the composer needs, from the host's configuration and the
    /// state captured before replacement.
    pub fn resolve(
        &self,
        config: &NormalizedConfig,
        snapshot: HostSnapshot,
    ) -> Result<ResolvedConfig, SetupError> {
        let policy = self.policy(config)?;
        let output_path = config.output.svg_output_path(config.mode);

        let url_generator = snapshot.url_generator.unwrap_or_else(|| {
            let mut generator = Map::new();
            generator.insert("filename".to_string(), Value::from(output_path.clone()));
            generator
        });

        Ok(ResolvedConfig {
            policy,
            url_generator,
            output_path,
            svgr_options: merged_svgr_options(self.options.svgr_options.as_ref()),
            js_step: snapshot.js_step,
        })
    }

    /// Classify `resource` (path with optional `?query`) imported by `issuer`.
    pub fn classify(
        &self,
        config: &NormalizedConfig,
        resource: &str,
        issuer: Option<&str>,
    ) -> Result<Classification, SetupError> {
        let policy = self.policy(config)?;
        let (_, query) = matcher::split_query(resource);
        Ok(policy.classify(query, IssuerKind::of(issuer)))
    }

    /// Replace the SVG rule of `chain`.
    ///
    /// Fails before touching `chain` when the configuration cannot be
    /// resolved.
    pub async fn setup<H: Host>(&self, host: &H, chain: &mut ChainConfig) -> anyhow::Result<()> {
        let config = host.normalized_config().await?;

        let snapshot = HostSnapshot::capture(chain);
        let resolved = self.resolve(&config, snapshot)?;
        let policy = &resolved.policy;

        debug!(
            "svgr";
            "limit {} bytes, export {}, mixed import {}",
            policy.max_size,
            policy.export_mode.as_str(),
            policy.mixed_import
        );
        match &resolved.js_step {
            Some(step) => debug!("svgr"; "replaying `{}` ({}) before svgr", step.id, step.loader),
            None => debug!("svgr"; "no compilation step on the js rule"),
        }

        let chains = compose(&resolved);
        install(chain, &chains);

        let ids: Vec<_> = chains.iter().map(|c| c.category.one_of_id()).collect();
        log!("svgr"; "installed {}", ids.join(", "));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
