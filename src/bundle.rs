//! Per-page bundles of icon definitions.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Receives icon definitions for a page.
///
/// Registration is idempotent per `(page, reference_id)`: registering the
/// same pair twice emits one definition. Pages are independent.
pub trait BundleSink {
    /// Records a definition. Returns `true` if it was not already present
    /// for this page.
    fn register(&mut self, page: &str, reference_id: &str, markup: &str) -> bool;
}

/// An in-memory named bundle.
///
/// Definitions are kept in registration order per page.
#[derive(Debug, Clone, Default)]
pub struct PageBundle {
    name: String,
    pages: HashMap<String, IndexMap<String, String>>,
}

impl PageBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference ids registered for a page, in order.
    pub fn reference_ids(&self, page: &str) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|defs| defs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Pages that have at least one definition.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// The page's definitions joined with newlines; empty if none.
    pub fn render(&self, page: &str) -> String {
        self.pages
            .get(page)
            .map(|defs| defs.values().map(String::as_str).collect::<Vec<_>>().join("\n"))
            .unwrap_or_default()
    }

    /// Drops a page's definitions, e.g. when its build is aborted.
    pub fn discard(&mut self, page: &str) {
        self.pages.remove(page);
    }
}

impl BundleSink for PageBundle {
    fn register(&mut self, page: &str, reference_id: &str, markup: &str) -> bool {
        let defs = self.pages.entry(page.to_string()).or_default();
        if defs.contains_key(reference_id) {
            return false;
        }
        log::trace!("bundle {}: {reference_id} -> {page}", self.name);
        defs.insert(reference_id.to_string(), markup.to_string());
        true
    }
}
