//! A minimal markup tree and the selector matcher used to pick icon nodes.
//!
//! The tree mirrors the `{ tag, attrs, content }` shape produced by common
//! HTML parsers. Hosts that already have a tree convert into [`Node`] at the
//! boundary. As in those parsers, text children hold raw markup: entities
//! stay encoded and are written back unchanged.

use serde::{Deserialize, Serialize};

use crate::attrs::AttributeSet;
use crate::error::ConfigError;

// ============================================================================
// Tree
// ============================================================================

/// A child of an element: either raw text or another element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Element(Node),
}

impl Content {
    pub fn as_element(&self) -> Option<&Node> {
        match self {
            Self::Element(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    /// Serializes this child as markup.
    pub fn to_html(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(node) => node.to_html(),
        }
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub tag: String,

    #[serde(default)]
    pub attrs: AttributeSet,

    #[serde(default)]
    pub content: Vec<Content>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttributeSet::new(),
            content: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Content>) -> Self {
        self.content.push(child.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Returns `true` if any child carries text or an element.
    ///
    /// Whitespace-only text counts as content, matching the raw child list.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Serializes the node as markup. Children are always written between
    /// an explicit start and end tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag);
        if !self.attrs.is_empty() {
            out.push(' ');
            out.push_str(&self.attrs.to_html());
        }
        out.push('>');
        for child in &self.content {
            out.push_str(&child.to_html());
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }
}

// ============================================================================
// Matcher
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Condition {
    Tag(String),
    Id(String),
    Class(String),
    HasAttr(String),
    AttrEquals(String, String),
}

impl Condition {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Tag(tag) => node.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => node.attr("id") == Some(id.as_str()),
            Self::Class(class) => node
                .attr("class")
                .is_some_and(|value| value.split_whitespace().any(|c| c == class)),
            Self::HasAttr(name) => node.attrs.contains(name),
            Self::AttrEquals(name, value) => node.attr(name) == Some(value.as_str()),
        }
    }
}

/// A compiled node selector.
///
/// Supports comma-separated compound selectors built from a tag name (or
/// `*`), `.class`, `#id`, `[attr]` and `[attr="value"]`, e.g.
/// `i[class], span.icon`. Combinators are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    source: String,
    groups: Vec<Vec<Condition>>,
}

impl Matcher {
    /// Compiles a selector string.
    pub fn parse(selector: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        };

        let mut groups = Vec::new();
        for group in selector.split(',') {
            let group = group.trim();
            if group.is_empty() {
                return Err(invalid("empty selector"));
            }
            groups.push(parse_compound(group).map_err(|reason| invalid(&reason))?);
        }

        Ok(Self {
            source: selector.to_string(),
            groups,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the node satisfies any of the selector groups.
    pub fn matches(&self, node: &Node) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|cond| cond.matches(node)))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':'
}

fn take_ident(input: &str) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|(_, c)| !is_ident_char(*c))
        .map_or(input.len(), |(i, _)| i);
    input.split_at(end)
}

fn parse_compound(input: &str) -> Result<Vec<Condition>, String> {
    let mut conditions = Vec::new();
    let mut rest = input;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else {
        let (tag, after) = take_ident(rest);
        if !tag.is_empty() {
            conditions.push(Condition::Tag(tag.to_string()));
            rest = after;
        }
    }

    while let Some(c) = rest.chars().next() {
        match c {
            '.' | '#' => {
                let (name, after) = take_ident(&rest[1..]);
                if name.is_empty() {
                    return Err(format!("expected a name after '{c}'"));
                }
                conditions.push(if c == '.' {
                    Condition::Class(name.to_string())
                } else {
                    Condition::Id(name.to_string())
                });
                rest = after;
            }
            '[' => {
                let close = rest.find(']').ok_or("unclosed '['")?;
                let inner = rest[1..close].trim();
                rest = &rest[close + 1..];
                conditions.push(parse_attribute(inner)?);
            }
            c if c.is_whitespace() => return Err("combinators are not supported".into()),
            c => return Err(format!("unexpected character '{c}'")),
        }
    }

    Ok(conditions)
}

fn parse_attribute(inner: &str) -> Result<Condition, String> {
    match inner.split_once('=') {
        None => {
            let (name, after) = take_ident(inner);
            if name.is_empty() || !after.is_empty() {
                return Err(format!("invalid attribute selector '[{inner}]'"));
            }
            Ok(Condition::HasAttr(name.to_string()))
        }
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            if name.is_empty() || !name.chars().all(is_ident_char) {
                return Err(format!("invalid attribute selector '[{inner}]'"));
            }
            Ok(Condition::AttrEquals(name.to_string(), value.to_string()))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
