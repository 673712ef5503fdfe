//! `[host]` section configuration.
//!
//! Describes the host build the rules are installed into: its mode and the
//! JavaScript compilation step it already applies to authored source.
//!
//! # Example
//!
//! ```toml
//! [host]
//! mode = "production"         # production | development
//! js_loader = "swc"           # swc | babel | none
//!
//! [host.js_options]           # options of the host's compilation step
//! jsc.parser.syntax = "typescript"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Build mode of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

impl BuildMode {
    #[inline]
    pub const fn is_dev(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// JavaScript compilation step configured on the host's `js` rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsLoader {
    #[default]
    Swc,
    Babel,
    /// The host compiles nothing (plain JavaScript output).
    None,
}

impl JsLoader {
    /// Loader identifier used when `js_loader_path` is not set.
    pub const fn default_loader(&self) -> Option<&'static str> {
        match self {
            Self::Swc => Some("builtin:swc-loader"),
            Self::Babel => Some("babel-loader"),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "host")]
pub struct HostConfig {
    /// Build mode, selects the default SVG filename template.
    #[config(default = "production")]
    pub mode: BuildMode,

    /// Compilation step of the host's `js` rule.
    #[config(default = "swc")]
    pub js_loader: JsLoader,

    /// Loader path overriding the default for `js_loader`.
    pub js_loader_path: Option<String>,

    /// Options passed to the compilation step.
    pub js_options: Option<Map<String, Value>>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::Production,
            js_loader: JsLoader::Swc,
            js_loader_path: None,
            js_options: None,
        }
    }
}

impl HostConfig {
    /// Resolved loader for the host's compilation step, if it has one.
    pub fn js_loader_name(&self) -> Option<String> {
        if self.js_loader == JsLoader::None {
            return None;
        }
        self.js_loader_path
            .clone()
            .or_else(|| self.js_loader.default_loader().map(str::to_string))
    }

    /// Compilation options as a JSON object.
    pub fn js_options_value(&self) -> Value {
        Value::Object(self.js_options.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.host.mode, BuildMode::Production);
        assert_eq!(config.host.js_loader, JsLoader::Swc);
        assert_eq!(
            config.host.js_loader_name().as_deref(),
            Some("builtin:swc-loader")
        );
    }

    #[test]
    fn test_loader_parsing() {
        let cases = [
            ("swc", JsLoader::Swc),
            ("babel", JsLoader::Babel),
            ("none", JsLoader::None),
        ];
        for (input, expected) in cases {
            let config = test_parse_config(&format!("[host]\njs_loader = \"{input}\""));
            assert_eq!(config.host.js_loader, expected, "failed for {input}");
        }
    }

    #[test]
    fn test_none_has_no_loader() {
        let config =
            test_parse_config("[host]\njs_loader = \"none\"\njs_loader_path = \"ignored\"");
        assert_eq!(config.host.js_loader_name(), None);
    }

    #[test]
    fn test_loader_path_override() {
        let config =
            test_parse_config("[host]\njs_loader = \"babel\"\njs_loader_path = \"/x/babel.js\"");
        assert_eq!(config.host.js_loader_name().as_deref(), Some("/x/babel.js"));
    }

    #[test]
    fn test_js_options() {
        let config = test_parse_config("[host.js_options]\njsc.parser.syntax = \"typescript\"");
        let options = config.host.js_options_value();
        assert_eq!(options["jsc"]["parser"]["syntax"], "typescript");
    }
}
