//! Icon catalog: maps a selector to reusable symbol markup.
//!
//! The transformer only depends on the [`IconCatalog`] trait. [`IconLibrary`]
//! is the bundled implementation, filled from JSON [`IconPack`]s.

pub mod pack;
pub mod symbol;

pub use pack::{IconData, IconPack, IconPath};

use std::collections::HashMap;
use std::str::FromStr;

use indexmap::IndexMap;
use palette::Srgb;

use crate::error::{CatalogError, ConfigError};

// ============================================================================
// IconCatalog
// ============================================================================

/// A resolved icon definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Id of the emitted `<symbol>`; `{prefix}-fa-{canonical name}`.
    pub reference_id: String,

    /// The definition body, emitted once per page.
    pub markup: String,
}

/// Looks up icons by selector.
///
/// Selectors are `prefix:name` or a bare `name`. Implementations own the
/// resolved icons and apply their own alias rules.
pub trait IconCatalog {
    fn resolve(&self, selector: &str) -> Result<&ResolvedIcon, CatalogError>;
}

impl<C: IconCatalog + ?Sized> IconCatalog for &C {
    fn resolve(&self, selector: &str) -> Result<&ResolvedIcon, CatalogError> {
        (**self).resolve(selector)
    }
}

// ============================================================================
// IconLibrary
// ============================================================================

#[derive(Debug, Clone)]
struct Entry {
    prefix: String,
    icon_name: String,
    data: IconData,
    resolved: ResolvedIcon,
}

/// In-memory catalog built from icon packs.
///
/// Icons are stored under their reference id. Aliases map an old name to
/// the canonical entry of the same prefix, so `fas:tshirt` resolves to the
/// `fas-fa-shirt` definition.
///
/// # Example
///
/// ```
/// use fa_inline::{IconCatalog, IconLibrary};
///
/// let library = IconLibrary::builtin().unwrap();
/// let icon = library.resolve("fas:tshirt").unwrap();
/// assert_eq!(icon.reference_id, "fas-fa-shirt");
/// ```
#[derive(Debug, Clone)]
pub struct IconLibrary {
    /// Prefix tried first for bare selectors.
    default_prefix: String,

    /// Explicit fill for emitted symbols; `currentColor` when unset.
    fill: Option<Srgb<u8>>,

    entries: IndexMap<String, Entry>,

    /// Alias reference id -> canonical reference id.
    aliases: HashMap<String, String>,

    /// Prefixes in the order their packs were added.
    prefixes: Vec<String>,
}

impl Default for IconLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl IconLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            default_prefix: "fas".to_string(),
            fill: None,
            entries: IndexMap::new(),
            aliases: HashMap::new(),
            prefixes: Vec::new(),
        }
    }

    /// Creates a library holding the bundled free packs.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut library = Self::new();
        library.add_json(pack::BUILTIN_PACKS)?;
        Ok(library)
    }

    /// Sets the prefix tried first for bare selectors.
    pub fn with_default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = prefix.into();
        self
    }

    /// Sets an explicit symbol fill color (`#rgb` or `#rrggbb`).
    ///
    /// Already-added icons are re-rendered.
    pub fn set_fill(&mut self, color: &str) -> Result<(), ConfigError> {
        let parsed = Srgb::<u8>::from_str(color).map_err(|_| ConfigError::InvalidColor {
            value: color.to_string(),
        })?;
        self.fill = Some(parsed);

        let fill = symbol::hex_color(parsed);
        for entry in self.entries.values_mut() {
            entry.resolved.markup =
                symbol::render_symbol(&entry.prefix, &entry.icon_name, &entry.data, &fill);
        }
        Ok(())
    }

    fn fill(&self) -> String {
        self.fill
            .map(symbol::hex_color)
            .unwrap_or_else(|| symbol::CURRENT_COLOR.to_string())
    }

    /// Adds every icon of a pack. Icons already present are replaced.
    ///
    /// Each definition is validated first; on error nothing from the failing
    /// icon onward is added.
    pub fn add_pack(&mut self, pack: IconPack) -> Result<(), CatalogError> {
        let fill = self.fill();
        if !self.prefixes.contains(&pack.prefix) {
            self.prefixes.push(pack.prefix.clone());
        }

        for (icon_name, data) in pack.icons {
            symbol::validate(&pack.prefix, &icon_name, &data)?;

            let reference_id = symbol::reference_id(&pack.prefix, &icon_name);
            if self.entries.contains_key(&reference_id) {
                self.aliases.retain(|_, target| *target != reference_id);
            }
            for alias in &data.aliases {
                self.aliases.insert(
                    symbol::reference_id(&pack.prefix, alias),
                    reference_id.clone(),
                );
            }

            let markup = symbol::render_symbol(&pack.prefix, &icon_name, &data, &fill);
            log::trace!("catalog: added {reference_id}");
            self.entries.insert(
                reference_id.clone(),
                Entry {
                    prefix: pack.prefix.clone(),
                    icon_name,
                    data,
                    resolved: ResolvedIcon {
                        reference_id,
                        markup,
                    },
                },
            );
        }
        Ok(())
    }

    /// Adds packs from JSON: a single pack object or an array of them.
    pub fn add_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let packs = if json.trim_start().starts_with('[') {
            IconPack::list_from_json(json)?
        } else {
            vec![IconPack::from_json(json)?]
        };
        for pack in packs {
            self.add_pack(pack)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up one (prefix, name) pair. Real icons shadow aliases.
    fn lookup(&self, prefix: &str, icon_name: &str) -> Option<&ResolvedIcon> {
        let id = symbol::reference_id(prefix, icon_name);
        self.entries
            .get(&id)
            .or_else(|| self.aliases.get(&id).and_then(|target| self.entries.get(target)))
            .map(|entry| &entry.resolved)
    }
}

impl IconCatalog for IconLibrary {
    fn resolve(&self, selector: &str) -> Result<&ResolvedIcon, CatalogError> {
        let found = match selector.split_once(':') {
            Some((prefix, icon_name)) => self.lookup(prefix, icon_name),
            None => std::iter::once(self.default_prefix.as_str())
                .chain(self.prefixes.iter().map(String::as_str))
                .find_map(|prefix| self.lookup(prefix, selector)),
        };

        found.ok_or_else(|| CatalogError::UnknownIcon {
            selector: selector.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
