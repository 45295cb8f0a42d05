//! fa-inline: inline SVG icons from Font Awesome style class names
//!
//! This crate rewrites markup such as `<i class="fa-regular fa-user"></i>`
//! into `<svg><use href="#far-fa-user"></use></svg>` and collects each icon's
//! `<symbol>` definition once per page, so repeated icons share one
//! definition.
//!
//! # Example
//!
//! ```
//! use fa_inline::{Content, IconLibrary, IconPlugin, Node, PluginOptions};
//!
//! let plugin = IconPlugin::new(
//!     PluginOptions::default().with_ignored_classes(["fak"]),
//!     IconLibrary::builtin().unwrap(),
//! )
//! .unwrap();
//! let mut bundle = plugin.bundle();
//!
//! let mut tree = vec![
//!     Content::Element(Node::new("i").with_attr("class", "fak fa-dot")),
//!     Content::Element(Node::new("i").with_attr("class", "fas fa-tshirt")),
//! ];
//! plugin.transform("/", &mut tree, &mut bundle).unwrap();
//!
//! assert_eq!(tree[0].to_html(), r#"<i class="fak fa-dot"></i>"#);
//! assert!(tree[1].to_html().contains("#fas-fa-shirt"));
//! assert_eq!(bundle.reference_ids("/"), ["fas-fa-shirt"]);
//! ```
//!
//! # Pieces
//!
//! - [`find_icon_metadata`] decodes a class list into an [`IconMetadata`].
//! - [`IconCatalog`] maps a `prefix:name` selector to a [`ResolvedIcon`];
//!   [`IconLibrary`] is the bundled implementation.
//! - [`merge_attrs`] and [`filter_attrs`] build the attributes of the
//!   emitted `<svg>`.
//! - [`Transformer`] resolves and rewrites nodes; [`BundleSink`] receives the
//!   definitions.

mod attrs;
mod bundle;
mod catalog;
mod error;
mod markup;
mod metadata;
mod options;
mod plugin;
mod prefixes;
mod transform;

pub use attrs::{AttributeSet, escape_attribute, filter_attrs, merge_attrs};
pub use bundle::{BundleSink, PageBundle};
pub use catalog::{IconCatalog, IconData, IconLibrary, IconPack, IconPath, ResolvedIcon};
pub use error::{CatalogError, ConfigError, Error, TransformError, TransformErrorKind};
pub use markup::{Content, Matcher, Node};
pub use metadata::{IconMetadata, class_to_selector, find_icon_metadata, is_eligible_class};
pub use options::{ID_PREFIX, IdGenerator, PluginOptions};
pub use plugin::IconPlugin;
pub use prefixes::{FAMILIES, RESERVED_MODIFIERS, STYLES};
pub use transform::{Replacement, TransformReport, Transformer};
