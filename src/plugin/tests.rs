use super::asset::{Emission, inline_decision};
use super::*;
use crate::chain::id::{one_of, rule, uses};
use crate::chain::{ModuleType, OneOf};
use crate::config::{EXPORT_TYPE_KEY, ProjectConfig, test_parse_config};

const APP: Option<&str> = Some("src/App.tsx");
const STYLE: Option<&str> = Some("src/index.css");
const PAGE: Option<&str> = Some("src/index.html");

struct Build {
    config: ProjectConfig,
    chain: ChainConfig,
}

impl Build {
    async fn new(toml: &str) -> Self {
        let config = test_parse_config(toml);
        let mut chain = seed_chain(&config);
        SvgrPlugin::new(config.svgr.clone())
            .setup(&StaticHost::new(&config), &mut chain)
            .await
            .unwrap();
        Self { config, chain }
    }

    fn plugin(&self) -> SvgrPlugin {
        SvgrPlugin::new(self.config.svgr.clone())
    }

    fn normalized(&self) -> NormalizedConfig {
        NormalizedConfig {
            output: self.config.output.clone(),
            mode: self.config.host.mode,
        }
    }

    fn classify(&self, resource: &str, issuer: Option<&str>) -> Classification {
        self.plugin()
            .classify(&self.normalized(), resource, issuer)
            .unwrap()
    }

    /// Installed sub-rule handling the import.
    fn hit(&self, resource: &str, issuer: Option<&str>) -> &OneOf {
        self.chain.resolve(resource, issuer).unwrap()
    }

    /// Classification and installed chain agree.
    fn category(&self, resource: &str, issuer: Option<&str>) -> RuleCategory {
        let category = self.classify(resource, issuer).category;
        assert_eq!(
            self.hit(resource, issuer).id,
            category.one_of_id(),
            "chain and classification disagree for {resource} from {issuer:?}"
        );
        category
    }

    fn sub_rule(&self, id: &str) -> Option<&OneOf> {
        self.chain.get_rule(rule::SVG)?.get_one_of(id)
    }
}

fn sizes() -> [u64; 5] {
    [0, 1, 4095, 4096, 1 << 20]
}

#[tokio::test]
async fn test_url_marker_never_inlines() {
    let build = Build::new("").await;
    for resource in ["a.svg?url", "a.svg?__inline=false", "a.svg?v=1&url"] {
        for issuer in [APP, STYLE, PAGE, None] {
            let c = build.classify(resource, issuer);
            assert_eq!(build.category(resource, issuer), RuleCategory::ForcedUrl);
            for len in sizes() {
                assert_eq!(
                    Emission::for_category(c.category, c.with_asset, len, 4096),
                    Some(Emission::Url)
                );
            }
        }
    }
    let sub = build.hit("a.svg?url", APP);
    assert_eq!(sub.module_type, Some(ModuleType::AssetResource));
    assert!(sub.parser.is_none());
}

#[tokio::test]
async fn test_inline_marker_always_inlines() {
    let build = Build::new("[output]\ndata_uri_limit = 0").await;
    for issuer in [APP, STYLE, PAGE] {
        let c = build.classify("a.svg?inline", issuer);
        assert_eq!(build.category("a.svg?inline", issuer), RuleCategory::ForcedInline);
        for len in sizes() {
            assert_eq!(
                Emission::for_category(c.category, c.with_asset, len, 0),
                Some(Emission::Inline)
            );
        }
    }
    assert_eq!(
        build.hit("a.svg?inline", APP).module_type,
        Some(ModuleType::AssetInline)
    );
}

#[tokio::test]
async fn test_component_marker_is_default_export() {
    for toml in [
        "",
        "[svgr]\nsvg_default_export = \"component\"",
        "[svgr.svgr_options]\nexportType = \"named\"",
    ] {
        let build = Build::new(toml).await;
        for issuer in [APP, STYLE] {
            let c = build.classify("a.svg?react", issuer);
            assert_eq!(build.category("a.svg?react", issuer), RuleCategory::ForcedComponent);
            assert_eq!(c.export_mode, Some(ExportMode::Default));
        }
        let svgr = build.hit("a.svg?react", APP).uses.get(uses::SVGR).unwrap();
        assert_eq!(svgr.options[EXPORT_TYPE_KEY], "default");
    }
}

#[tokio::test]
async fn test_named_mixed_import_exposes_both() {
    let build = Build::new("").await;
    let c = build.classify("./logo.svg", APP);
    assert_eq!(build.category("./logo.svg", APP), RuleCategory::MixedImport);
    assert_eq!(c.export_mode, Some(ExportMode::Named));
    assert!(c.with_asset);

    let sub = build.hit("./logo.svg", APP);
    assert_eq!(sub.uses.get(uses::SVGR).unwrap().options[EXPORT_TYPE_KEY], "named");
    let url = sub.uses.get(uses::URL).unwrap();
    assert_eq!(url.loader, URL_LOADER);
    assert_eq!(url.options["limit"], 4096);
    assert_eq!(url.options["name"], "static/svg/[name].[contenthash:8].svg");
}

#[tokio::test]
async fn test_default_mixed_import_is_component_only() {
    let build = Build::new("[svgr]\nsvg_default_export = \"component\"").await;
    let c = build.classify("./logo.svg", APP);
    assert_eq!(build.category("./logo.svg", APP), RuleCategory::MixedImport);
    assert_eq!(c.export_mode, Some(ExportMode::Default));
    assert!(!c.with_asset);

    let sub = build.hit("./logo.svg", APP);
    assert_eq!(sub.uses.get(uses::SVGR).unwrap().options[EXPORT_TYPE_KEY], "default");
    assert!(!sub.uses.has(uses::URL));
}

#[tokio::test]
async fn test_default_mode_installs_mixed_rule_even_when_disabled() {
    let build = Build::new(
        "[svgr]\nmixed_import = false\n[svgr.svgr_options]\nexportType = \"default\"",
    )
    .await;
    assert!(build.sub_rule(one_of::SVG).is_some());
    assert_eq!(build.category("./logo.svg", APP), RuleCategory::MixedImport);
}

#[tokio::test]
async fn test_named_without_mixed_import_falls_back_to_asset() {
    let build = Build::new("[svgr]\nmixed_import = false").await;
    assert!(build.sub_rule(one_of::SVG).is_none());
    let c = build.classify("./logo.svg", APP);
    assert_eq!(build.category("./logo.svg", APP), RuleCategory::SizeBasedAsset);
    assert_eq!(c.export_mode, None);
}

#[tokio::test]
async fn test_style_issuer_gets_size_based_asset() {
    let build = Build::new("").await;
    assert_eq!(build.category("./icon.svg", STYLE), RuleCategory::SizeBasedAsset);
    assert_eq!(build.category("./icon.svg", PAGE), RuleCategory::SizeBasedAsset);
    assert_eq!(build.category("./icon.svg", None), RuleCategory::SizeBasedAsset);

    let sub = build.hit("./icon.svg", STYLE);
    assert_eq!(sub.module_type, Some(ModuleType::Asset));
    assert_eq!(sub.parser.unwrap().data_url_condition.max_size, 4096);
    assert_eq!(inline_decision(100, 4096), Emission::Inline);
}

#[tokio::test]
async fn test_threshold_boundary() {
    let build = Build::new("[output]\ndata_uri_limit = 100").await;
    let c = build.classify("./icon.svg", STYLE);
    let limit = build.hit("./icon.svg", STYLE).parser.unwrap().data_url_condition.max_size;
    assert_eq!(limit, 100);
    assert_eq!(
        Emission::for_category(c.category, c.with_asset, 99, limit),
        Some(Emission::Inline)
    );
    assert_eq!(
        Emission::for_category(c.category, c.with_asset, 100, limit),
        Some(Emission::Url)
    );
}

#[tokio::test]
async fn test_per_type_limit() {
    let build = Build::new("[output.data_uri_limit]\nsvg = 1024\nimage = 8192").await;
    let sub = build.hit("./icon.svg", STYLE);
    assert_eq!(sub.parser.unwrap().data_url_condition.max_size, 1024);
}

#[tokio::test]
async fn test_url_output_path_uses_configured_template() {
    let build = Build::new(
        "[output.dist_path]\nsvg = \"assets/icons\"\n[output.filename]\nsvg = \"[name].[hash:6].svg\"",
    )
    .await;
    let generator = build.hit("a.svg?url", APP).generator.clone().unwrap();
    assert_eq!(generator["filename"], "assets/icons/[name].[hash:6].svg");
}

#[tokio::test]
async fn test_development_filename() {
    let build = Build::new("[host]\nmode = \"development\"").await;
    let generator = build.hit("a.svg?url", APP).generator.clone().unwrap();
    assert_eq!(generator["filename"], "static/svg/[name].svg");
}

#[tokio::test]
async fn test_builtin_url_generator_survives() {
    let config = test_parse_config("");
    let mut chain = seed_chain(&config);
    let mut generator = Map::new();
    generator.insert("filename".into(), Value::from("custom/[name].svg"));
    chain
        .rule(rule::SVG)
        .one_of(one_of::SVG_URL)
        .generator(generator);

    SvgrPlugin::new(config.svgr.clone())
        .setup(&StaticHost::new(&config), &mut chain)
        .await
        .unwrap();
    let sub = chain.resolve("a.svg?url", None).unwrap();
    assert_eq!(sub.generator.as_ref().unwrap()["filename"], "custom/[name].svg");
}

#[tokio::test]
async fn test_sub_rule_order() {
    let build = Build::new("").await;
    let ids: Vec<_> = build
        .chain
        .get_rule(rule::SVG)
        .unwrap()
        .one_of_ids()
        .collect();
    assert_eq!(ids, ["svg-url", "svg-inline", "svg-react", "svg", "svg-asset"]);
}

#[tokio::test]
async fn test_js_step_replayed_before_svgr() {
    let build = Build::new("[host.js_options]\njsc = { parser = { syntax = \"typescript\" } }").await;
    for id in [one_of::SVG_REACT, one_of::SVG] {
        let sub = build.sub_rule(id).unwrap();
        let order: Vec<_> = sub.uses.ids().collect();
        assert_eq!(order.first(), Some(&uses::SWC), "{id}");
        let swc = sub.uses.get(uses::SWC).unwrap();
        assert_eq!(swc.loader, "builtin:swc-loader");
        assert_eq!(swc.options["jsc"]["parser"]["syntax"], "typescript");
    }
}

#[tokio::test]
async fn test_babel_step_replayed() {
    let build = Build::new("[host]\njs_loader = \"babel\"").await;
    let sub = build.sub_rule(one_of::SVG).unwrap();
    assert_eq!(sub.uses.ids().collect::<Vec<_>>(), ["babel", "svgr", "url"]);
}

#[tokio::test]
async fn test_no_js_step() {
    let build = Build::new("[host]\njs_loader = \"none\"").await;
    let sub = build.sub_rule(one_of::SVG_REACT).unwrap();
    assert_eq!(sub.uses.ids().collect::<Vec<_>>(), ["svgr"]);
}

#[tokio::test]
async fn test_user_svgr_options_merged() {
    let build = Build::new(
        "[svgr.svgr_options]\nref = true\n[svgr.svgr_options.svgoConfig]\nfloatPrecision = 2",
    )
    .await;
    let options = &build.hit("a.svg?react", APP).uses.get(uses::SVGR).unwrap().options;
    assert_eq!(options["ref"], true);
    assert_eq!(options["svgo"], true);
    assert_eq!(options["svgoConfig"]["floatPrecision"], 2);
    assert_eq!(options["svgoConfig"]["plugins"][1], "prefixIds");
}

#[tokio::test]
async fn test_custom_component_query() {
    let build = Build::new("[svgr]\nquery = \"^component$\"").await;
    assert_eq!(build.category("a.svg?component", STYLE), RuleCategory::ForcedComponent);
    assert_eq!(build.category("a.svg?react", STYLE), RuleCategory::SizeBasedAsset);
}

#[tokio::test]
async fn test_bare_question_mark_agrees_with_chain() {
    let build = Build::new("[svgr]\nquery = \"^$\"").await;
    assert_eq!(build.category("a.svg?", STYLE), RuleCategory::ForcedComponent);
    assert_eq!(build.category("a.svg", STYLE), RuleCategory::SizeBasedAsset);
    assert_eq!(build.category("a.svg?", APP), RuleCategory::ForcedComponent);
    assert_eq!(build.category("a.svg", APP), RuleCategory::MixedImport);
}

#[tokio::test]
async fn test_empty_component_query_fails_before_install() {
    let config = test_parse_config("[svgr]\nquery = \"\"");
    let mut chain = ChainConfig::new();
    let err = SvgrPlugin::new(config.svgr.clone())
        .setup(&StaticHost::new(&config), &mut chain)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::EmptyPattern)
    ));
    assert!(chain.rules().is_empty());
}

#[tokio::test]
async fn test_issuer_query_is_ignored() {
    let build = Build::new("").await;
    assert_eq!(
        build.category("./logo.svg", Some("src/App.tsx?raw")),
        RuleCategory::MixedImport
    );
}

#[tokio::test]
async fn test_classification_is_idempotent() {
    let build = Build::new("").await;
    let again = Build::new("").await;
    for resource in ["a.svg", "a.svg?url", "a.svg?inline", "a.svg?react"] {
        for issuer in [APP, STYLE, None] {
            assert_eq!(build.classify(resource, issuer), again.classify(resource, issuer));
            assert_eq!(build.hit(resource, issuer), again.hit(resource, issuer));
        }
    }
}

#[tokio::test]
async fn test_missing_svg_limit_fails_before_install() {
    let config = test_parse_config("[output.data_uri_limit]\nimage = 8192");
    let mut chain = seed_chain(&config);
    let before = chain.clone();
    let err = SvgrPlugin::new(config.svgr.clone())
        .setup(&StaticHost::new(&config), &mut chain)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::MissingDataUriLimit)
    ));
    assert_eq!(chain, before);
}

#[tokio::test]
async fn test_invalid_export_type_fails() {
    let config = test_parse_config("[svgr.svgr_options]\nexportType = \"both\"");
    let mut chain = ChainConfig::new();
    let err = SvgrPlugin::new(config.svgr.clone())
        .setup(&StaticHost::new(&config), &mut chain)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::InvalidExportType(_))
    ));
    assert!(chain.rules().is_empty());
}

#[test]
fn test_plugin_identity() {
    assert_eq!(SvgrPlugin::NAME, "rsbuild:svgr");
    assert_eq!(SvgrPlugin::PRE, ["rsbuild:react"]);
}
