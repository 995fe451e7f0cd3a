//! Field-name resolution against ordered naming patterns.
//!
//! A destination field named `verbose` might live in the source mapping
//! under `--verbose`, `-verbose`, or `verbose` depending on what produced
//! the map. Callers describe those shapes as [`NamePattern`]s; resolution
//! tries them in the supplied order and the first rendered key present in
//! the map wins.

use mapbind_types::{SourceMap, Value};
use thiserror::Error;
use tracing::trace;

/// The substitution slot recognized in pattern templates.
const SLOT: &str = "{}";

/// A key template with one `{}` substitution slot.
///
/// `NamePattern::new("--{}")` renders field `jobs` to candidate key
/// `--jobs`. A template without a slot is used as a literal key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern(String);

impl NamePattern {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The identity pattern: the field name itself is the candidate key.
    pub fn identity() -> Self {
        Self::new(SLOT)
    }

    /// Renders a field name into a candidate source key.
    pub fn render(&self, field: &str) -> String {
        if self.0.contains(SLOT) {
            self.0.replacen(SLOT, field, 1)
        } else {
            self.0.clone()
        }
    }
}

/// No naming pattern produced a key present in the source mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not found in source map (tried {})", .tried.join(", "))]
pub struct NotFound {
    /// Every candidate key, in trial order.
    pub tried: Vec<String>,
}

/// Resolves a field name to a value in `source`, trying `patterns` in order.
///
/// An empty pattern list falls back to the identity pattern. The first
/// pattern whose rendered key is present wins. A `Value::Null` under a
/// key is a hit (the nil marker) and is distinct from the key being
/// absent, which counts toward the attempted-key list.
pub fn resolve<'v>(field: &str, source: &'v SourceMap, patterns: &[NamePattern]) -> Result<&'v Value, NotFound> {
    let identity = [NamePattern::identity()];
    let patterns = if patterns.is_empty() { &identity[..] } else { patterns };

    let mut tried = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let key = pattern.render(field);
        if let Some(value) = source.get(&key) {
            trace!(field, key = key.as_str(), "resolved source key");
            return Ok(value);
        }
        tried.push(key);
    }
    Err(NotFound { tried })
}
