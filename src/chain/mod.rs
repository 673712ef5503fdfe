//! In-memory host rule chain.
//!
//! Mirrors the bundler's chainable module-rule API: rules keyed by id, each
//! with a resource `test`, ordered `oneOf` sub-rules and ordered loader uses.
//! Every accessor is get-or-create, and setters return `&mut Self` so rules
//! read the same way they are written against the host.
//!
//! ```ignore
//! let rule = chain.rule(id::rule::SVG).test(svg_condition());
//! rule.one_of(id::one_of::SVG_INLINE)
//!     .module_type(ModuleType::AssetInline)
//!     .resource_query(Condition::pattern("inline")?);
//! ```
//!
//! The chain serializes to the JSON shape the host consumes.

mod condition;
pub mod id;

pub use condition::Condition;

use serde::Serialize;
use serde_json::{Map, Value};

/// Module type assigned by a sub-rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleType {
    /// Inline below the data URL limit, emit otherwise.
    #[serde(rename = "asset")]
    Asset,
    /// Always emit a file and export its URL.
    #[serde(rename = "asset/resource")]
    AssetResource,
    /// Always export a data URI.
    #[serde(rename = "asset/inline")]
    AssetInline,
    /// Loader output is JavaScript.
    #[serde(rename = "javascript/auto")]
    JavascriptAuto,
}

/// `parser.dataUrlCondition` of an `asset` sub-rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrlCondition {
    pub max_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    pub data_url_condition: DataUrlCondition,
}

// ============================================================================
// Use
// ============================================================================

/// A loader attached to a rule or sub-rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Use {
    pub id: String,
    pub loader: String,
    pub options: Value,
}

impl Use {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            loader: String::new(),
            options: Value::Null,
        }
    }

    pub fn loader(&mut self, loader: impl Into<String>) -> &mut Self {
        self.loader = loader.into();
        self
    }

    pub fn options(&mut self, options: Value) -> &mut Self {
        self.options = options;
        self
    }
}

/// Ordered loader list. The host runs it from last to first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Uses(Vec<Use>);

impl Uses {
    /// Get or append the use with `id`.
    pub fn entry(&mut self, id: &str) -> &mut Use {
        let index = match self.position(id) {
            Some(index) => index,
            None => {
                self.0.push(Use::new(id));
                self.0.len() - 1
            }
        };
        &mut self.0[index]
    }

    pub fn get(&self, id: &str) -> Option<&Use> {
        self.0.iter().find(|u| u.id == id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Move `id` directly ahead of `anchor`. No-op when either is missing.
    pub fn move_before(&mut self, id: &str, anchor: &str) {
        let (Some(from), Some(_)) = (self.position(id), self.position(anchor)) else {
            return;
        };
        let moved = self.0.remove(from);
        // Anchor index may have shifted after removal
        let to = self.position(anchor).unwrap_or(self.0.len());
        self.0.insert(to, moved);
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|u| u.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Use> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|u| u.id == id)
    }
}

// ============================================================================
// OneOf
// ============================================================================

/// A sub-rule. The first sub-rule whose conditions match handles the module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOf {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<ModuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_query: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Map<String, Value>>,
    #[serde(rename = "use", skip_serializing_if = "Uses::is_empty")]
    pub uses: Uses,
}

impl OneOf {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            module_type: None,
            resource_query: None,
            issuer: None,
            parser: None,
            generator: None,
            uses: Uses::default(),
        }
    }

    pub fn module_type(&mut self, module_type: ModuleType) -> &mut Self {
        self.module_type = Some(module_type);
        self
    }

    pub fn resource_query(&mut self, condition: Condition) -> &mut Self {
        self.resource_query = Some(condition);
        self
    }

    pub fn issuer(&mut self, condition: Condition) -> &mut Self {
        self.issuer = Some(condition);
        self
    }

    pub fn parser(&mut self, parser: ParserOptions) -> &mut Self {
        self.parser = Some(parser);
        self
    }

    pub fn generator(&mut self, generator: Map<String, Value>) -> &mut Self {
        self.generator = Some(generator);
        self
    }

    /// Get or append the use with `id`.
    pub fn use_entry(&mut self, id: &str) -> &mut Use {
        self.uses.entry(id)
    }

    /// Place use `id` directly ahead of `anchor`.
    pub fn order_before(&mut self, id: &str, anchor: &str) -> &mut Self {
        self.uses.move_before(id, anchor);
        self
    }

    /// Whether this sub-rule accepts a module with `query` imported by `issuer`.
    ///
    /// A present condition never matches an absent input.
    pub fn accepts(&self, query: Option<&str>, issuer: Option<&str>) -> bool {
        let check = |cond: &Option<Condition>, input: Option<&str>| match (cond, input) {
            (None, _) => true,
            (Some(cond), Some(input)) => cond.matches(input),
            (Some(_), None) => false,
        };
        check(&self.resource_query, query) && check(&self.issuer, issuer)
    }
}

// ============================================================================
// Rule
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Condition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<OneOf>,
    #[serde(rename = "use", skip_serializing_if = "Uses::is_empty")]
    pub uses: Uses,
}

impl Rule {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            test: None,
            one_of: Vec::new(),
            uses: Uses::default(),
        }
    }

    pub fn test(&mut self, condition: Condition) -> &mut Self {
        self.test = Some(condition);
        self
    }

    /// Get or append the sub-rule with `id`. Sub-rules keep creation order.
    pub fn one_of(&mut self, id: &str) -> &mut OneOf {
        let index = match self.one_of.iter().position(|o| o.id == id) {
            Some(index) => index,
            None => {
                self.one_of.push(OneOf::new(id));
                self.one_of.len() - 1
            }
        };
        &mut self.one_of[index]
    }

    pub fn get_one_of(&self, id: &str) -> Option<&OneOf> {
        self.one_of.iter().find(|o| o.id == id)
    }

    pub fn has_one_of(&self, id: &str) -> bool {
        self.get_one_of(id).is_some()
    }

    pub fn use_entry(&mut self, id: &str) -> &mut Use {
        self.uses.entry(id)
    }

    pub fn one_of_ids(&self) -> impl Iterator<Item = &str> {
        self.one_of.iter().map(|o| o.id.as_str())
    }
}

// ============================================================================
// ChainConfig
// ============================================================================

/// The host's module rules, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChainConfig {
    rules: Vec<Rule>,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or append the rule with `id`.
    pub fn rule(&mut self, id: &str) -> &mut Rule {
        let index = match self.rules.iter().position(|r| r.id == id) {
            Some(index) => index,
            None => {
                self.rules.push(Rule::new(id));
                self.rules.len() - 1
            }
        };
        &mut self.rules[index]
    }

    pub fn get_rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn has_rule(&self, id: &str) -> bool {
        self.get_rule(id).is_some()
    }

    /// Remove the rule with `id`, returning it.
    pub fn delete_rule(&mut self, id: &str) -> Option<Rule> {
        let index = self.rules.iter().position(|r| r.id == id)?;
        Some(self.rules.remove(index))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Sub-rule that handles `resource` (path with optional `?query`) when
    /// imported by `issuer`.
    ///
    /// Rules are tried in order; within the first rule whose `test` matches
    /// and that declares sub-rules, the first accepting sub-rule wins.
    pub fn resolve(&self, resource: &str, issuer: Option<&str>) -> Option<&OneOf> {
        let (path, query) = split_query(resource);
        let issuer = issuer.map(|i| split_query(i).0);
        self.rules
            .iter()
            .filter(|rule| !rule.one_of.is_empty())
            .find(|rule| rule.test.as_ref().is_none_or(|t| t.matches(path)))?
            .one_of
            .iter()
            .find(|one_of| one_of.accepts(query, issuer))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Split `path?query` into the path and the query without `?`.
pub fn split_query(resource: &str) -> (&str, Option<&str>) {
    match resource.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (resource, None),
    }
}
