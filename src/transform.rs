//! Document transform: rewrites icon nodes into `<svg><use>` references.
//!
//! The work is split in two:
//! - [`Transformer::resolve_node`] is pure. It decides whether a node is an
//!   icon and, if so, builds its replacement.
//! - [`Transformer::transform`] walks a tree, applies replacements and
//!   registers each definition with the page bundle.

use crate::attrs::{AttributeSet, filter_attrs, merge_attrs};
use crate::bundle::BundleSink;
use crate::catalog::{IconCatalog, ResolvedIcon};
use crate::error::TransformError;
use crate::markup::{Content, Matcher, Node};
use crate::metadata::{find_icon_metadata, is_eligible_class};
use crate::options::PluginOptions;

// ============================================================================
// Replacement
// ============================================================================

/// The rewritten form of a matched node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement<'c> {
    /// The `<svg>` reference node.
    pub node: Node,

    /// The definition the node points at, to be registered with the bundle.
    pub icon: &'c ResolvedIcon,
}

/// Counts from one [`Transformer::transform`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Nodes rewritten into icon references.
    pub replaced: usize,
    /// Eligible nodes left untouched because they could not be resolved.
    pub skipped: usize,
}

// ============================================================================
// Accessibility
// ============================================================================

/// How an icon is exposed to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Labelling {
    /// Hidden; any inner content is dropped.
    Decorative,
    /// Labelled by a `<title>` carrying the original content.
    Labelled { id: String },
}

impl Labelling {
    /// Decided once per node: content plus an enabled generator gives a
    /// label, anything else is decorative.
    fn for_node(node: &Node, options: &PluginOptions) -> Self {
        if !node.has_content() {
            return Self::Decorative;
        }
        match options.generate_id.generate() {
            Some(id) => Self::Labelled { id },
            None => Self::Decorative,
        }
    }
}

/// Builds the `<use>` child pointing at `reference_id`.
pub(crate) fn use_node(reference_id: &str, use_xlink_href: bool) -> Node {
    let href = format!("#{reference_id}");
    let mut node = Node::new("use").with_attr("href", href.clone());
    if use_xlink_href {
        node.attrs.insert("xlink:href", href);
    }
    node
}

/// Builds the replacement `<svg>` for an icon node.
fn icon_node(node: &Node, icon: &ResolvedIcon, options: &PluginOptions) -> Node {
    let mut attrs: AttributeSet = merge_attrs(&node.attrs, &options.default_attributes);
    let mut content = Vec::with_capacity(2);

    // See https://docs.fontawesome.com/web/dig-deeper/accessibility#making-icons-accessible-manually
    if let Labelling::Labelled { id } = Labelling::for_node(node, options) {
        attrs.insert("aria-labelledby", id.clone());
        attrs.insert("role", "img");
        attrs.remove("aria-hidden");

        let mut title = Node::new("title").with_attr("id", id);
        title.content = node.content.clone();
        content.push(Content::Element(title));
    }

    content.push(Content::Element(use_node(
        &icon.reference_id,
        options.use_xlink_href,
    )));

    Node {
        tag: "svg".to_string(),
        attrs: filter_attrs(&attrs),
        content,
    }
}

// ============================================================================
// Transformer
// ============================================================================

/// Resolves and rewrites icon nodes for one configuration.
///
/// Obtained from [`IconPlugin::transformer`](crate::IconPlugin::transformer).
pub struct Transformer<'a, C> {
    pub(crate) options: &'a PluginOptions,
    pub(crate) matcher: &'a Matcher,
    pub(crate) catalog: &'a C,
}

impl<'a, C: IconCatalog> Transformer<'a, C> {
    /// Resolves one node without touching any shared state.
    ///
    /// - `Ok(None)`: not an icon (no identity class, or an ignored class).
    /// - `Ok(Some(_))`: the replacement and the definition it uses.
    /// - `Err(_)`: an eligible node whose class list is incomplete or names
    ///   an icon the catalog does not have.
    ///
    /// The node is not required to match the selector.
    pub fn resolve_node(&self, node: &Node) -> Result<Option<Replacement<'a>>, TransformError> {
        let Some(class) = node.attr("class") else {
            return Ok(None);
        };
        if !is_eligible_class(class, &self.options.ignored_classes) {
            return Ok(None);
        }

        let metadata = find_icon_metadata(class);
        let Some(selector) = metadata.selector() else {
            return Err(TransformError::incomplete(class, metadata));
        };

        let catalog: &'a C = self.catalog;
        let icon = match catalog.resolve(&selector) {
            Ok(icon) => icon,
            Err(cause) => return Err(TransformError::unresolved(class, metadata, cause)),
        };

        Ok(Some(Replacement {
            node: icon_node(node, icon, self.options),
            icon,
        }))
    }

    /// Rewrites every matching icon node under `content` for `page`.
    ///
    /// Traversal is pre-order; a replaced node is not descended into. With
    /// `fail_on_error` the first failure aborts the walk, leaving earlier
    /// replacements and registrations in place; the caller is expected to
    /// discard the page. Otherwise failing nodes are left byte-identical.
    pub fn transform(
        &self,
        page: &str,
        content: &mut [Content],
        bundle: &mut impl BundleSink,
    ) -> Result<TransformReport, TransformError> {
        let mut report = TransformReport::default();
        self.walk(page, content, bundle, &mut report)?;
        Ok(report)
    }

    fn walk(
        &self,
        page: &str,
        content: &mut [Content],
        bundle: &mut impl BundleSink,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        for child in content.iter_mut() {
            let Content::Element(node) = child else {
                continue;
            };

            if self.matcher.matches(node) {
                match self.resolve_node(node) {
                    Ok(Some(replacement)) => {
                        let icon = replacement.icon;
                        bundle.register(page, &icon.reference_id, &icon.markup);
                        *node = replacement.node;
                        report.replaced += 1;
                        continue;
                    }
                    Ok(None) => {}
                    Err(err) if self.options.fail_on_error => return Err(err),
                    Err(err) => {
                        log::debug!(
                            "Could not find icon for class={:?} (ignoring via `failOnError` option): {}",
                            err.class,
                            err.cause_message()
                        );
                        report.skipped += 1;
                    }
                }
            }

            self.walk(page, &mut node.content, bundle, report)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
