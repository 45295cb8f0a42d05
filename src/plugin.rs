//! Plugin entry point tying options, catalog and transform together.

use crate::attrs::{AttributeSet, merge_attrs};
use crate::bundle::{BundleSink, PageBundle};
use crate::catalog::{IconCatalog, IconLibrary};
use crate::error::{ConfigError, Error, TransformError};
use crate::markup::{Content, Matcher, Node};
use crate::options::PluginOptions;
use crate::transform::{TransformReport, Transformer, use_node};

/// A configured icon plugin.
///
/// Configuration problems surface from [`IconPlugin::new`]; per-node
/// failures surface from [`IconPlugin::transform`] only with
/// `fail_on_error`.
///
/// # Example
///
/// ```
/// use fa_inline::{Content, IconLibrary, IconPlugin, Node, PluginOptions};
///
/// let plugin = IconPlugin::new(PluginOptions::default(), IconLibrary::builtin().unwrap()).unwrap();
/// let mut bundle = plugin.bundle();
///
/// let mut tree = vec![Content::Element(
///     Node::new("i").with_attr("class", "fa-regular fa-user"),
/// )];
/// plugin.transform("/index.html", &mut tree, &mut bundle).unwrap();
///
/// assert_eq!(
///     tree[0].to_html(),
///     r##"<svg aria-hidden="true"><use href="#far-fa-user" xlink:href="#far-fa-user"></use></svg>"##
/// );
/// assert!(bundle.render("/index.html").contains(r#"id="far-fa-user""#));
/// ```
#[derive(Debug)]
pub struct IconPlugin<C = IconLibrary> {
    options: PluginOptions,

    /// Compiled `transform` selector; `None` when the transform is disabled.
    matcher: Option<Matcher>,

    catalog: C,
}

impl<C: IconCatalog> IconPlugin<C> {
    /// Validates the options and builds the plugin.
    pub fn new(options: PluginOptions, catalog: C) -> Result<Self, ConfigError> {
        if options.bundle.trim().is_empty() {
            return Err(ConfigError::MissingBundle);
        }

        let matcher = match options.transform.as_deref() {
            Some(selector) => Some(Matcher::parse(selector)?),
            None => None,
        };

        if matcher.is_none() && options.shortcode.is_none() {
            log::warn!("icon plugin has neither a transform selector nor a shortcode; it will do nothing");
        }

        Ok(Self {
            options,
            matcher,
            catalog,
        })
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Creates an empty bundle named after the `bundle` option.
    pub fn bundle(&self) -> PageBundle {
        PageBundle::new(self.options.bundle.clone())
    }

    /// Returns the transformer, or `None` if the transform is disabled.
    pub fn transformer(&self) -> Option<Transformer<'_, C>> {
        self.matcher.as_ref().map(|matcher| Transformer {
            options: &self.options,
            matcher,
            catalog: &self.catalog,
        })
    }

    /// Transforms a page's tree in place. A no-op when the transform is
    /// disabled.
    pub fn transform(
        &self,
        page: &str,
        content: &mut [Content],
        bundle: &mut impl BundleSink,
    ) -> Result<TransformReport, TransformError> {
        match self.transformer() {
            Some(transformer) => {
                let report = transformer.transform(page, content, bundle)?;
                log::debug!(
                    "{page}: {} icon(s) inlined, {} skipped",
                    report.replaced,
                    report.skipped
                );
                Ok(report)
            }
            None => Ok(TransformReport::default()),
        }
    }

    /// The configured shortcode name.
    pub fn shortcode_name(&self) -> Option<&str> {
        self.options.shortcode.as_deref()
    }

    /// Renders an icon reference straight from a selector (`far:user` or
    /// `user`) and registers its definition for `page`.
    ///
    /// `attrs` are merged over the default attributes. Errors are always
    /// returned, regardless of `fail_on_error`.
    pub fn shortcode(
        &self,
        page: &str,
        selector: &str,
        attrs: &AttributeSet,
        bundle: &mut impl BundleSink,
    ) -> Result<String, Error> {
        if self.options.shortcode.is_none() {
            return Err(ConfigError::ShortcodeDisabled.into());
        }

        let icon = self.catalog.resolve(selector)?;
        bundle.register(page, &icon.reference_id, &icon.markup);

        let svg = Node {
            tag: "svg".to_string(),
            attrs: merge_attrs(&self.options.default_attributes, attrs),
            content: vec![Content::Element(use_node(
                &icon.reference_id,
                self.options.use_xlink_href,
            ))],
        };
        Ok(svg.to_html())
    }
}

// ============================================================================
// Tests
// ============================================================================
