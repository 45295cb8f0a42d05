//! Serializable icon packs.
//!
//! A pack groups the icons of one prefix:
//!
//! ```json
//! {
//!   "prefix": "far",
//!   "icons": {
//!     "user": { "width": 448, "height": 512, "aliases": [], "unicode": "f007", "path": "M304 128..." }
//!   }
//! }
//! ```
//!
//! Duotone icons carry a `[secondary, primary]` pair in `path`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Path data for one icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconPath {
    Single(String),
    /// Secondary layer first, then primary.
    Duotone([String; 2]),
}

/// Geometry and naming data for one icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconData {
    pub width: u32,
    pub height: u32,

    /// Older names that resolve to this icon.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,

    pub path: IconPath,
}

/// All icons sharing one prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconPack {
    pub prefix: String,
    pub icons: IndexMap<String, IconData>,
}

impl IconPack {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            icons: IndexMap::new(),
        }
    }

    /// Adds an icon, builder style.
    pub fn with_icon(mut self, name: impl Into<String>, data: IconData) -> Self {
        self.icons.insert(name.into(), data);
        self
    }

    /// Parses a single pack.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a list of packs.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The packs bundled with the crate: a small subset of the free set.
pub(crate) const BUILTIN_PACKS: &str = include_str!("../../assets/free-icons.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_packs_parse() {
        let packs = IconPack::list_from_json(BUILTIN_PACKS).unwrap();
        let prefixes: Vec<_> = packs.iter().map(|p| p.prefix.as_str()).collect();
        assert_eq!(prefixes, ["fas", "far"]);

        let shirt = &packs[0].icons["shirt"];
        assert_eq!((shirt.width, shirt.height), (640, 512));
        assert!(shirt.aliases.iter().any(|a| a == "tshirt"));
    }

    #[test]
    fn duotone_path_pair() {
        let pack = IconPack::from_json(
            r#"{"prefix":"fad","icons":{"box":{"width":448,"height":512,"path":["M0 0h10v10z","M5 5h2v2z"]}}}"#,
        )
        .unwrap();
        assert_eq!(
            pack.icons["box"].path,
            IconPath::Duotone(["M0 0h10v10z".into(), "M5 5h2v2z".into()])
        );
        assert!(pack.icons["box"].aliases.is_empty());
    }

    #[test]
    fn missing_path_is_rejected() {
        let err = IconPack::from_json(r#"{"prefix":"fas","icons":{"x":{"width":1,"height":1}}}"#);
        assert!(err.is_err());
    }
}
