//! Ordered attribute sets and the merge/filter rules applied to icon nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::prefixes;

// ============================================================================
// AttributeSet
// ============================================================================

/// An insertion-ordered mapping from attribute name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct AttributeSet(IndexMap<String, String>);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces an attribute. A replaced attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes an attribute, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes as `name="value"` pairs separated by single spaces.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}=\"{}\"", escape_attribute(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Merge & Filter
// ============================================================================

/// Order-preserving union of two token lists.
fn union_tokens<'a>(
    base: impl Iterator<Item = &'a str>,
    extra: impl Iterator<Item = &'a str>,
) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for token in base.chain(extra) {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

/// Merges `overrides` into a copy of `base`.
///
/// - `class`: whitespace token union, base tokens first.
/// - `style`: `;`-separated token union, rejoined with spaces. Declarations
///   are compared as whole strings, not by property name.
/// - anything else: the override wins.
///
/// Neither input is modified.
pub fn merge_attrs(base: &AttributeSet, overrides: &AttributeSet) -> AttributeSet {
    let mut merged = base.clone();
    for (name, value) in overrides.iter() {
        let combined = match (name, merged.get(name)) {
            ("class", Some(existing)) => {
                union_tokens(existing.split_whitespace(), value.split_whitespace()).join(" ")
            }
            ("style", Some(existing)) => {
                union_tokens(existing.split(';'), value.split(';')).join(" ")
            }
            _ => value.to_string(),
        };
        merged.insert(name, combined);
    }
    merged
}

/// Strips icon identity tokens from `class`.
///
/// Prefix tokens and `fa-*` tokens are removed, except reserved modifiers
/// (`fa-fw`, `fa-2xl`, ...). If nothing is left the `class` key is dropped.
pub fn filter_attrs(attrs: &AttributeSet) -> AttributeSet {
    let mut filtered = attrs.clone();
    if let Some(class) = attrs.get("class") {
        let kept = class
            .split_whitespace()
            .filter(|token| {
                prefixes::is_reserved_class(token) || !prefixes::is_identity_token(token)
            })
            .collect::<Vec<_>>()
            .join(" ");
        if kept.is_empty() {
            filtered.remove("class");
        } else {
            filtered.insert("class", kept);
        }
    }
    filtered
}

// ============================================================================
// Escaping
// ============================================================================

/// Escapes a value for use inside a double-quoted attribute.
///
/// Only `&`, `"` and no-break spaces are replaced; `<` and `>` are legal
/// inside a quoted value and are written as-is.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
