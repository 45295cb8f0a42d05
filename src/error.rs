//! Error types.

use thiserror::Error;

use crate::metadata::IconMetadata;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Invalid or missing plugin configuration. Setup problems are reported
/// when the plugin is built, never deferred to node processing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The `bundle` option is required. `bundle: \"fontawesome\"` is the default.")]
    MissingBundle,

    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid symbol color `{value}`")]
    InvalidColor { value: String },

    #[error("The shortcode is disabled; set the `shortcode` option to enable it")]
    ShortcodeDisabled,
}

/// Catalog lookup and loading failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not find icon: {selector}")]
    UnknownIcon { selector: String },

    #[error("Invalid icon definition {reference_id}: {source}")]
    InvalidDefinition {
        reference_id: String,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("Icon definition {reference_id} has no drawable geometry")]
    EmptyGeometry { reference_id: String },

    #[error("Invalid icon pack: {0}")]
    Pack(#[from] serde_json::Error),
}

/// Why a matched node could not be turned into an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformErrorKind {
    /// The class list did not yield both a prefix and a name.
    IncompleteIdentity,
    /// The catalog has no icon for the derived selector.
    UnknownIcon,
}

/// A per-node failure, with the inputs needed to diagnose it.
#[derive(Debug, Error)]
#[error(
    "Error with icon, via class=\"{class}\". Resolved to: {}. Original error message: {}",
    .metadata.to_json(),
    self.cause_message()
)]
pub struct TransformError {
    pub kind: TransformErrorKind,

    /// The class attribute exactly as found on the node.
    pub class: String,

    /// Best-effort parse of `class`.
    pub metadata: IconMetadata,

    #[source]
    pub cause: Option<CatalogError>,
}

impl TransformError {
    pub(crate) fn incomplete(class: &str, metadata: IconMetadata) -> Self {
        Self {
            kind: TransformErrorKind::IncompleteIdentity,
            class: class.to_string(),
            metadata,
            cause: None,
        }
    }

    pub(crate) fn unresolved(class: &str, metadata: IconMetadata, cause: CatalogError) -> Self {
        Self {
            kind: TransformErrorKind::UnknownIcon,
            class: class.to_string(),
            metadata,
            cause: Some(cause),
        }
    }

    /// The message of the underlying failure, without the wrapping context.
    pub fn cause_message(&self) -> String {
        match &self.cause {
            Some(cause) => cause.to_string(),
            None => format!("Could not find icon: {}", self.class),
        }
    }
}
