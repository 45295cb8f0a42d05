//! Static tables describing the icon families, styles and their short prefixes.
//!
//! A prefix such as `fas` is shorthand for a (family, style) pair. The tables
//! here are closed lists: a token that is not in them is never treated as
//! identity data.

/// The family assumed when a class list names none.
pub const DEFAULT_FAMILY: &str = "classic";

/// Marker that starts every non-prefix icon token (`fa-user`, `fa-solid`, ...).
pub const TOKEN_MARKER: &str = "fa-";

/// Known styles, matched against the suffix of a `fa-*` token.
pub const STYLES: &[&str] = &["solid", "regular", "light", "thin", "duotone", "brands"];

/// Known families, matched against the suffix of a `fa-*` token.
pub const FAMILIES: &[&str] = &["classic", "sharp", "duotone", "sharp-duotone"];

/// Sizing and fixed-width modifiers (suffixes, without the `fa-` marker).
///
/// These carry no identity and survive on the rewritten node.
pub const RESERVED_MODIFIERS: &[&str] = &[
    // fixed width
    "fw",
    // relative sizing
    "2xs", "xs", "sm", "lg", "xl", "2xl",
    // literal sizing
    "1x", "2x", "3x", "4x", "5x", "6x", "7x", "8x", "9x", "10x",
];

/// A (family, style) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyStyle {
    pub family: &'static str,
    pub style: &'static str,
}

const PREFIXES: &[(&str, FamilyStyle)] = &[
    ("fas", FamilyStyle { family: "classic", style: "solid" }),
    ("far", FamilyStyle { family: "classic", style: "regular" }),
    ("fal", FamilyStyle { family: "classic", style: "light" }),
    ("fat", FamilyStyle { family: "classic", style: "thin" }),
    ("fab", FamilyStyle { family: "classic", style: "brands" }),
    ("fad", FamilyStyle { family: "duotone", style: "solid" }),
    ("fadr", FamilyStyle { family: "duotone", style: "regular" }),
    ("fadl", FamilyStyle { family: "duotone", style: "light" }),
    ("fadt", FamilyStyle { family: "duotone", style: "thin" }),
    ("fass", FamilyStyle { family: "sharp", style: "solid" }),
    ("fasr", FamilyStyle { family: "sharp", style: "regular" }),
    ("fasl", FamilyStyle { family: "sharp", style: "light" }),
    ("fast", FamilyStyle { family: "sharp", style: "thin" }),
    ("fasds", FamilyStyle { family: "sharp-duotone", style: "solid" }),
    ("fasdr", FamilyStyle { family: "sharp-duotone", style: "regular" }),
    ("fasdl", FamilyStyle { family: "sharp-duotone", style: "light" }),
    ("fasdt", FamilyStyle { family: "sharp-duotone", style: "thin" }),
];

// `fa-duotone` alone reads as the classic family with the duotone style.
const EXTRA_DERIVATIONS: &[(&str, &str, &str)] = &[("classic", "duotone", "fad")];

/// Returns the (family, style) pair for a prefix token, if it is one.
pub fn family_style(prefix: &str) -> Option<FamilyStyle> {
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, fs)| *fs)
}

/// Returns `true` if `token` is a known prefix such as `fas`.
pub fn is_prefix(token: &str) -> bool {
    family_style(token).is_some()
}

/// Derives the prefix for a (family, style) pair.
pub fn prefix_for(family: &str, style: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(_, fs)| fs.family == family && fs.style == style)
        .map(|(p, _)| *p)
        .or_else(|| {
            EXTRA_DERIVATIONS
                .iter()
                .find(|(f, s, _)| *f == family && *s == style)
                .map(|(_, _, p)| *p)
        })
}

pub fn is_style(suffix: &str) -> bool {
    STYLES.contains(&suffix)
}

pub fn is_family(suffix: &str) -> bool {
    FAMILIES.contains(&suffix)
}

/// Returns `true` for a reserved modifier suffix (`fw`, `2xl`, ...).
pub fn is_reserved_modifier(suffix: &str) -> bool {
    RESERVED_MODIFIERS.contains(&suffix)
}

/// Returns `true` for a full class token that is a reserved modifier (`fa-fw`).
pub fn is_reserved_class(token: &str) -> bool {
    token
        .strip_prefix(TOKEN_MARKER)
        .is_some_and(is_reserved_modifier)
}

/// Returns `true` if the token contributes to icon identity: a prefix or any
/// `fa-*` token.
pub fn is_identity_token(token: &str) -> bool {
    is_prefix(token) || token.starts_with(TOKEN_MARKER)
}
