//! Match conditions for `test`, `resourceQuery` and `issuer`.

use regex::Regex;
use serde::{Serialize, Serializer};

/// A condition evaluated against a path or a query string.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Condition {
    /// Regex searched anywhere in the input.
    Pattern(#[serde(serialize_with = "serialize_regex")] Regex),
    /// Every condition must match.
    And { and: Vec<Condition> },
    /// The inner condition must not match.
    Not { not: Box<Condition> },
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

impl Condition {
    /// Compile a pattern condition.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And {
            and: conditions.into_iter().collect(),
        }
    }

    pub fn not(condition: Condition) -> Self {
        Self::Not {
            not: Box::new(condition),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(input),
            Self::And { and } => and.iter().all(|c| c.matches(input)),
            Self::Not { not } => !not.matches(input),
        }
    }
}

impl From<Regex> for Condition {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::And { and: a }, Self::And { and: b }) => a == b,
            (Self::Not { not: a }, Self::Not { not: b }) => a == b,
            _ => false,
        }
    }
}
