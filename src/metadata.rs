//! Class-token parsing.
//!
//! Decodes a class attribute such as `"fa-regular fa-user fa-fw"` into an
//! [`IconMetadata`] record, and turns that record into a catalog selector.

use serde::{Deserialize, Serialize};

use crate::prefixes::{self, DEFAULT_FAMILY, TOKEN_MARKER};

// ============================================================================
// IconMetadata
// ============================================================================

/// Icon identity decoded from a class list.
///
/// Serializes with the keys `prefix`, `style`, `family`, `iconName`, omitting
/// the ones that could not be determined. This form is embedded verbatim in
/// fail-fast error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    pub family: String,

    /// The icon name as written in the markup, before any catalog aliasing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

impl Default for IconMetadata {
    fn default() -> Self {
        Self {
            prefix: None,
            style: None,
            family: DEFAULT_FAMILY.to_string(),
            icon_name: None,
        }
    }
}

impl IconMetadata {
    /// Returns the canonical `prefix:name` selector.
    ///
    /// `None` means the class list does not describe a complete icon; this
    /// is distinct from a selector the catalog fails to resolve.
    pub fn selector(&self) -> Option<String> {
        match (&self.prefix, &self.icon_name) {
            (Some(prefix), Some(name)) => Some(format!("{prefix}:{name}")),
            _ => None,
        }
    }

    /// Compact JSON form used in diagnostics.
    pub fn to_json(&self) -> String {
        // A struct of plain strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Accumulator for the token scan.
#[derive(Default)]
struct Scan<'a> {
    prefix: Option<&'a str>,
    style: Option<&'a str>,
    family: Option<&'a str>,
    icon_name: Option<&'a str>,
}

impl<'a> Scan<'a> {
    fn step(mut self, token: &'a str) -> Self {
        if let Some(fs) = prefixes::family_style(token) {
            if self.prefix.is_none() {
                self.prefix = Some(token);
                self.family = Some(fs.family);
                self.style = Some(fs.style);
            }
            return self;
        }

        let Some(suffix) = token.strip_prefix(TOKEN_MARKER) else {
            return self;
        };
        if suffix.is_empty() {
            return self;
        }

        if prefixes::is_style(suffix) {
            if self.prefix.is_none() {
                self.style = Some(suffix);
            }
        } else if prefixes::is_family(suffix) {
            if self.prefix.is_none() {
                self.family = Some(suffix);
            }
        } else if prefixes::is_reserved_modifier(suffix) {
            // kept on the node, not identity
        } else if self.icon_name.is_none_or(|name| suffix.len() > name.len()) {
            self.icon_name = Some(suffix);
        }
        self
    }

    fn finish(self) -> IconMetadata {
        let family = self.family.unwrap_or(DEFAULT_FAMILY);
        let prefix = self
            .prefix
            .or_else(|| self.style.and_then(|style| prefixes::prefix_for(family, style)));

        IconMetadata {
            prefix: prefix.map(str::to_string),
            style: self.style.map(str::to_string),
            family: family.to_string(),
            icon_name: self.icon_name.map(str::to_string),
        }
    }
}

/// Parses a class attribute into icon metadata.
///
/// Tokens are scanned in order:
/// - the first prefix token (`fas`, `far`, ...) fixes prefix, family and style;
/// - `fa-<style>` and `fa-<family>` apply only while no prefix is set;
/// - reserved modifiers (`fa-fw`, `fa-2xl`, ...) are skipped;
/// - any other `fa-*` token is a name candidate, and the longest one wins.
///
/// Unrelated tokens are ignored. An empty input yields the default family
/// and nothing else.
///
/// # Example
///
/// ```
/// use fa_inline::find_icon_metadata;
///
/// let meta = find_icon_metadata("fas fa-starfighter fa-fw");
/// assert_eq!(meta.prefix.as_deref(), Some("fas"));
/// assert_eq!(meta.style.as_deref(), Some("solid"));
/// assert_eq!(meta.family, "classic");
/// assert_eq!(meta.icon_name.as_deref(), Some("starfighter"));
/// ```
pub fn find_icon_metadata(class: &str) -> IconMetadata {
    class
        .split_whitespace()
        .fold(Scan::default(), Scan::step)
        .finish()
}

/// Parses a class attribute straight to a selector.
pub fn class_to_selector(class: &str) -> Option<String> {
    find_icon_metadata(class).selector()
}

/// Returns `true` if the class list names at least one identity token and
/// none of the `ignored` classes.
pub fn is_eligible_class(class: &str, ignored: &[String]) -> bool {
    let mut tokens = class.split_whitespace();
    if tokens
        .clone()
        .any(|token| ignored.iter().any(|ignore| ignore == token))
    {
        return false;
    }
    tokens.any(prefixes::is_identity_token)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta(prefix: &str, style: &str, family: &str, name: &str) -> IconMetadata {
        IconMetadata {
            prefix: Some(prefix.into()),
            style: Some(style.into()),
            family: family.into(),
            icon_name: Some(name.into()),
        }
    }

    #[test]
    fn style_and_name_tokens() {
        assert_eq!(
            find_icon_metadata("fa-regular fa-user"),
            meta("far", "regular", "classic", "user")
        );
    }

    #[test]
    fn explicit_prefix_with_modifier() {
        assert_eq!(
            find_icon_metadata("fas fa-starfighter fa-fw"),
            meta("fas", "solid", "classic", "starfighter")
        );
        assert_eq!(
            find_icon_metadata("fal fa-arrow-up-right"),
            meta("fal", "light", "classic", "arrow-up-right")
        );
    }

    #[test]
    fn prefix_is_order_independent() {
        assert_eq!(
            find_icon_metadata("fa-fw fa-starfighter fas"),
            meta("fas", "solid", "classic", "starfighter")
        );
    }

    #[test]
    fn later_style_does_not_override_prefix() {
        assert_eq!(
            find_icon_metadata("fas fa-regular fa-sharp fa-house"),
            meta("fas", "solid", "classic", "house")
        );
    }

    #[test]
    fn first_prefix_wins() {
        assert_eq!(
            find_icon_metadata("fasr far fa-house"),
            meta("fasr", "regular", "sharp", "house")
        );
    }

    #[test]
    fn family_and_style_derive_prefix() {
        assert_eq!(
            find_icon_metadata("fa-sharp fa-light fa-bell"),
            meta("fasl", "light", "sharp", "bell")
        );
        assert_eq!(
            find_icon_metadata("fa-duotone fa-camera").prefix.as_deref(),
            Some("fad")
        );
    }

    #[test]
    fn longest_candidate_wins_in_any_order() {
        let a = find_icon_metadata("fa-solid fa-up fa-arrow-up");
        let b = find_icon_metadata("fa-solid fa-arrow-up fa-up");
        assert_eq!(a.icon_name.as_deref(), Some("arrow-up"));
        assert_eq!(b.icon_name.as_deref(), Some("arrow-up"));
    }

    #[test]
    fn equal_length_keeps_first_candidate() {
        let m = find_icon_metadata("fa-solid fa-cat fa-dog");
        assert_eq!(m.icon_name.as_deref(), Some("cat"));
    }

    #[test]
    fn legacy_name_is_reported_unaliased() {
        assert_eq!(
            find_icon_metadata("fas fa-tshirt"),
            meta("fas", "solid", "classic", "tshirt")
        );
    }

    #[test]
    fn empty_input_is_default_family_only() {
        assert_eq!(find_icon_metadata(""), IconMetadata::default());
        assert_eq!(find_icon_metadata("   \t "), IconMetadata::default());
        assert_eq!(class_to_selector(""), None);
    }

    #[test]
    fn name_without_style_has_no_selector() {
        let m = find_icon_metadata("fa-user button");
        assert_eq!(m.icon_name.as_deref(), Some("user"));
        assert_eq!(m.prefix, None);
        assert_eq!(m.selector(), None);
    }

    #[test]
    fn unknown_family_style_pair_stays_incomplete() {
        let m = find_icon_metadata("fa-sharp fa-brands fa-github");
        assert_eq!(m.prefix, None);
        assert_eq!(m.selector(), None);
    }

    #[test]
    fn selector_format() {
        assert_eq!(
            class_to_selector("fa-regular fa-user").as_deref(),
            Some("far:user")
        );
    }

    #[test]
    fn metadata_json_omits_missing_keys() {
        assert_eq!(
            find_icon_metadata("fa-solid fa-left").to_json(),
            r#"{"prefix":"fas","style":"solid","family":"classic","iconName":"left"}"#
        );
        assert_eq!(
            find_icon_metadata("fa-dot").to_json(),
            r#"{"family":"classic","iconName":"dot"}"#
        );
    }

    #[test]
    fn eligibility() {
        let ignored = vec!["fak".to_string()];
        assert!(is_eligible_class("fa-regular fa-user", &ignored));
        assert!(is_eligible_class("fas", &[]));
        assert!(!is_eligible_class("fak fa-dot", &ignored));
        assert!(!is_eligible_class("button primary", &[]));
        assert!(!is_eligible_class("", &[]));
    }
}
