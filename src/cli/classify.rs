//! `classify` command.

use anyhow::{Result, bail};
use serde::Serialize;
use std::fs;

use super::common::installed_chain;
use crate::chain::OneOf;
use crate::config::ProjectConfig;
use crate::plugin::asset::{Emission, encoded_len};
use crate::plugin::matcher::{is_svg, split_query};
use crate::plugin::{Classification, Host, StaticHost, SvgrPlugin};
use crate::debug;

/// What `classify` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub import: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<&'a str>,
    #[serde(flatten)]
    pub classification: Classification,
    /// Size-based choice for a given file, when the asset step runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emission: Option<Emission>,
    pub sub_rule: Option<&'a OneOf>,
}

/// Classify `import` and print the report as JSON on stdout.
///
/// When the path exists on disk, the size-based choice is computed from its
/// encoded size.
pub async fn run_classify(
    config: &ProjectConfig,
    import: &str,
    issuer: Option<&str>,
) -> Result<()> {
    if !is_svg(import) {
        bail!("`{import}` is not an svg resource");
    }

    let host = StaticHost::new(config);
    let normalized = host.normalized_config().await?;
    let chain = installed_chain(config).await?;

    let plugin = SvgrPlugin::new(config.svgr.clone());
    let classification = plugin.classify(&normalized, import, issuer)?;
    let limit = plugin.policy(&normalized)?.max_size;
    let emission = file_emission(import, &classification, limit);

    let report = Report {
        import,
        issuer,
        classification,
        emission,
        sub_rule: chain.resolve(import, issuer),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn file_emission(
    import: &str,
    classification: &Classification,
    limit: u64,
) -> Option<Emission> {
    let (path, _) = split_query(import);
    let Ok(markup) = fs::read_to_string(path) else {
        debug!("classify"; "{} not readable, skipping size check", path);
        return None;
    };

    let len = encoded_len(&markup);
    debug!("classify"; "{} encodes to {} bytes (limit {})", path, len, limit);
    Emission::for_category(classification.category, classification.with_asset, len, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::RuleCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn asset_classification() -> Classification {
        Classification {
            category: RuleCategory::SizeBasedAsset,
            export_mode: None,
            with_asset: false,
        }
    }

    #[test]
    fn test_file_emission_from_disk() {
        let mut file = NamedTempFile::with_suffix(".svg").unwrap();
        write!(file, r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let len = encoded_len(&fs::read_to_string(&path).unwrap());

        let import = format!("{path}?v=1");
        let c = asset_classification();
        assert_eq!(file_emission(&import, &c, len + 1), Some(Emission::Inline));
        assert_eq!(file_emission(&import, &c, len), Some(Emission::Url));
    }

    #[test]
    fn test_file_emission_missing_file() {
        assert_eq!(
            file_emission("/nonexistent/icon.svg", &asset_classification(), 4096),
            None
        );
    }

    #[tokio::test]
    async fn test_rejects_non_svg() {
        let config = ProjectConfig::default();
        assert!(run_classify(&config, "./logo.png", None).await.is_err());
    }
}
