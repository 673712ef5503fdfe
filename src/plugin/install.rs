//! Applying composed chains to the host.
//!
//! The only code that mutates the host's rule chain.

use serde_json::{Map, Value};

use super::compose::{TransformChain, TransformStep};
use super::matcher::svg_condition;
use crate::chain::ChainConfig;
use crate::chain::id::{one_of, rule, uses};

/// Compilation steps looked up on the host's `js` rule, in preference order.
const JS_STEP_IDS: [&str; 2] = [uses::SWC, uses::BABEL];

/// Host state read before the built-in SVG rule is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSnapshot {
    /// Generator of the built-in `svg-url` sub-rule.
    pub url_generator: Option<Map<String, Value>>,
    /// Compilation step of the host's `js` rule.
    pub js_step: Option<TransformStep>,
}

impl HostSnapshot {
    pub fn capture(chain: &ChainConfig) -> Self {
        let url_generator = chain
            .get_rule(rule::SVG)
            .and_then(|r| r.get_one_of(one_of::SVG_URL))
            .and_then(|o| o.generator.clone());

        let js_step = chain.get_rule(rule::JS).and_then(|js| {
            JS_STEP_IDS.iter().find_map(|id| {
                js.uses
                    .get(id)
                    .map(|u| TransformStep::new(&u.id, u.loader.clone(), u.options.clone()))
            })
        });

        Self {
            url_generator,
            js_step,
        }
    }
}

/// Replace the host's `svg` rule with one sub-rule per chain, in order.
pub fn install(chain: &mut ChainConfig, chains: &[TransformChain]) {
    chain.delete_rule(rule::SVG);

    let svg = chain.rule(rule::SVG).test(svg_condition());
    for transform in chains {
        let sub = svg.one_of(transform.category.one_of_id());
        sub.module_type(transform.module_type);
        if let Some(query) = &transform.resource_query {
            sub.resource_query(query.clone());
        }
        if let Some(issuer) = &transform.issuer {
            sub.issuer(issuer.clone());
        }
        if let Some(parser) = transform.parser {
            sub.parser(parser);
        }
        if let Some(generator) = &transform.generator {
            sub.generator(generator.clone());
        }

        for step in &transform.steps {
            sub.use_entry(&step.id)
                .loader(step.loader.clone())
                .options(step.options.clone());
        }
        for step in &transform.steps {
            if let Some(anchor) = &step.before {
                sub.order_before(&step.id, anchor);
            }
        }
    }
}
