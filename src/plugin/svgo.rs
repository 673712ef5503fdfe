//! Default options of the component generator and its optimizer.

use serde_json::{Map, Value, json};

use super::merge::deep_merge;
use super::ExportMode;
use crate::config::EXPORT_TYPE_KEY;

/// Optimizer profile applied before component generation.
///
/// `removeViewBox` stays off: components are resized through CSS, which
/// needs the viewBox. `prefixIds` keeps ids unique across inlined components.
pub fn default_svgo_config() -> Value {
    json!({
        "plugins": [
            {
                "name": "preset-default",
                "params": {
                    "overrides": {
                        "removeViewBox": false
                    }
                }
            },
            "prefixIds"
        ]
    })
}

/// Generator defaults: optimization on, with the default profile.
pub fn default_svgr_options() -> Value {
    json!({
        "svgo": true,
        "svgoConfig": default_svgo_config(),
    })
}

/// Defaults with user options merged on top.
pub fn merged_svgr_options(user: Option<&Map<String, Value>>) -> Value {
    match user {
        Some(user) => deep_merge(default_svgr_options(), Value::Object(user.clone())),
        None => default_svgr_options(),
    }
}

/// Options for one generator step, with its export mode applied.
pub fn with_export_mode(options: &Value, mode: ExportMode) -> Value {
    let mut overlay = Map::new();
    overlay.insert(EXPORT_TYPE_KEY.to_string(), Value::from(mode.as_str()));
    deep_merge(options.clone(), Value::Object(overlay))
}
