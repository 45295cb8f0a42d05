//! Plugin configuration.
//!
//! [`PluginOptions`] serializes to JSON in camelCase, so a host can keep
//! the settings in its own configuration file:
//!
//! ```json
//! {
//!   "bundle": "fontawesome",
//!   "transform": "i[class]",
//!   "ignoredClasses": ["fak"],
//!   "defaultAttributes": { "aria-hidden": "true" },
//!   "failOnError": false,
//!   "generateId": true,
//!   "useXlinkHref": true
//! }
//! ```
//!
//! A custom id generator cannot be expressed in JSON; set it with
//! [`PluginOptions::with_id_generator`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attrs::AttributeSet;

// ============================================================================
// IdGenerator
// ============================================================================

/// Prefix of generated accessibility ids.
pub const ID_PREFIX: &str = "fa11-text-";

/// Source of ids for labelled icons (`<title id>` / `aria-labelledby`).
#[derive(Clone, Default)]
pub enum IdGenerator {
    /// `fa11-text-` followed by a nanoid.
    #[default]
    Nanoid,
    /// A caller-supplied function.
    Custom(Arc<dyn Fn() -> String + Send + Sync>),
    /// No ids: labelled icons are emitted as decorative.
    Disabled,
}

impl IdGenerator {
    pub fn custom(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Produces the next id, or `None` when generation is disabled.
    pub fn generate(&self) -> Option<String> {
        match self {
            Self::Nanoid => Some(format!("{ID_PREFIX}{}", nanoid::nanoid!())),
            Self::Custom(f) => Some(f()),
            Self::Disabled => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nanoid => f.write_str("Nanoid"),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

// Serialized as a flag: `true` for any enabled generator, `false` when disabled.
impl Serialize for IdGenerator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_enabled())
    }
}

impl<'de> Deserialize<'de> for IdGenerator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(if bool::deserialize(deserializer)? {
            Self::Nanoid
        } else {
            Self::Disabled
        })
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for IdGenerator {
    fn schema_name() -> String {
        "IdGenerator".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <bool as schemars::JsonSchema>::json_schema(generator)
    }
}

// ============================================================================
// PluginOptions
// ============================================================================

fn default_bundle() -> String {
    "fontawesome".to_string()
}

fn default_transform() -> Option<String> {
    Some("i[class]".to_string())
}

fn default_attributes() -> AttributeSet {
    AttributeSet::new().with("aria-hidden", "true")
}

fn default_true() -> bool {
    true
}

/// Settings for [`IconPlugin`](crate::IconPlugin).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Name of the bundle receiving icon definitions. Required.
    #[serde(default = "default_bundle")]
    pub bundle: String,

    /// Selector for nodes to transform; `None` disables the transform.
    #[serde(default = "default_transform")]
    pub transform: Option<String>,

    /// Shortcode name; `None` disables the shortcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,

    /// Nodes carrying any of these classes are left alone.
    #[serde(default)]
    pub ignored_classes: Vec<String>,

    /// Attributes merged onto every emitted `<svg>`.
    #[serde(default = "default_attributes")]
    pub default_attributes: AttributeSet,

    /// Turn unresolvable icons into errors instead of skipping them.
    /// Only affects the transform; shortcode errors are always returned.
    #[serde(default)]
    pub fail_on_error: bool,

    #[serde(default)]
    pub generate_id: IdGenerator,

    /// Also emit `xlink:href` on `<use>` for older consumers.
    #[serde(default = "default_true")]
    pub use_xlink_href: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            bundle: default_bundle(),
            transform: default_transform(),
            shortcode: None,
            ignored_classes: Vec::new(),
            default_attributes: default_attributes(),
            fail_on_error: false,
            generate_id: IdGenerator::default(),
            use_xlink_href: true,
        }
    }
}

impl PluginOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = bundle.into();
        self
    }

    pub fn with_transform(mut self, selector: Option<&str>) -> Self {
        self.transform = selector.map(str::to_string);
        self
    }

    pub fn with_shortcode(mut self, name: impl Into<String>) -> Self {
        self.shortcode = Some(name.into());
        self
    }

    pub fn with_ignored_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_attributes(mut self, attrs: AttributeSet) -> Self {
        self.default_attributes = attrs;
        self
    }

    pub fn with_fail_on_error(mut self, fail: bool) -> Self {
        self.fail_on_error = fail;
        self
    }

    pub fn with_id_generator(mut self, generator: IdGenerator) -> Self {
        self.generate_id = generator;
        self
    }

    pub fn with_xlink_href(mut self, enabled: bool) -> Self {
        self.use_xlink_href = enabled;
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = PluginOptions::default();
        assert_eq!(options.bundle, "fontawesome");
        assert_eq!(options.transform.as_deref(), Some("i[class]"));
        assert_eq!(options.default_attributes.get("aria-hidden"), Some("true"));
        assert!(options.use_xlink_href);
        assert!(!options.fail_on_error);
        assert!(options.generate_id.is_enabled());
    }

    #[test]
    fn empty_json_gives_defaults() {
        let options = PluginOptions::from_json("{}").unwrap();
        assert_eq!(options.bundle, "fontawesome");
        assert_eq!(options.transform.as_deref(), Some("i[class]"));
        assert!(options.ignored_classes.is_empty());
    }

    #[test]
    fn json_uses_camel_case_and_flags() {
        let options = PluginOptions::from_json(
            r#"{"ignoredClasses":["fak"],"failOnError":true,"generateId":false,"useXlinkHref":false,"transform":null}"#,
        )
        .unwrap();
        assert_eq!(options.ignored_classes, ["fak"]);
        assert!(options.fail_on_error);
        assert!(!options.generate_id.is_enabled());
        assert!(!options.use_xlink_href);
        assert!(options.transform.is_none());

        let json = options.to_json().unwrap();
        assert!(json.contains(r#""generateId":false"#));
        assert!(json.contains(r#""defaultAttributes":{"aria-hidden":"true"}"#));
    }

    #[test]
    fn nanoid_ids_are_prefixed_and_unique() {
        let generator = IdGenerator::default();
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert!(a.starts_with(ID_PREFIX));
        assert_ne!(a, b);
    }

    #[test]
    fn custom_and_disabled_generators() {
        let custom = IdGenerator::custom(|| "demo-static-id".to_string());
        assert_eq!(custom.generate().as_deref(), Some("demo-static-id"));
        assert_eq!(IdGenerator::Disabled.generate(), None);
    }
}
