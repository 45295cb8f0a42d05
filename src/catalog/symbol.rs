//! Symbol markup for icon definitions.
//!
//! Each definition is emitted once per page as a hidden `<svg>` holding a
//! `<symbol>` that usage sites point at with `<use href="#id">`.

use palette::Srgb;
use resvg::usvg::{Options, Tree};

use super::pack::{IconData, IconPath};
use crate::attrs::escape_attribute;
use crate::error::CatalogError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fill used when no explicit color is configured.
pub const CURRENT_COLOR: &str = "currentColor";

/// Stable reference id for a canonical (prefix, name) pair.
pub fn reference_id(prefix: &str, icon_name: &str) -> String {
    format!("{prefix}-fa-{icon_name}")
}

/// Formats a color as `#rrggbb`.
pub fn hex_color(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

fn path_markup(path: &IconPath, fill: &str) -> String {
    match path {
        IconPath::Single(d) => {
            format!(r#"<path fill="{fill}" d="{}"></path>"#, escape_attribute(d))
        }
        IconPath::Duotone([secondary, primary]) => format!(
            concat!(
                r#"<g class="fa-duotone-group">"#,
                r#"<path class="fa-secondary" fill="{fill}" d="{}"></path>"#,
                r#"<path class="fa-primary" fill="{fill}" d="{}"></path>"#,
                "</g>"
            ),
            escape_attribute(secondary),
            escape_attribute(primary),
            fill = fill,
        ),
    }
}

/// Renders the hidden `<svg><symbol>` wrapper for one icon.
pub fn render_symbol(prefix: &str, icon_name: &str, data: &IconData, fill: &str) -> String {
    let id = reference_id(prefix, icon_name);
    format!(
        concat!(
            r#"<svg style="display: none;">"#,
            r#"<symbol aria-hidden="true" focusable="false" data-prefix="{prefix}" data-icon="{name}" "#,
            r#"class="svg-inline--fa fa-{name}" role="img" xmlns="{ns}" viewBox="0 0 {w} {h}" id="{id}">"#,
            "{body}",
            "</symbol></svg>"
        ),
        prefix = escape_attribute(prefix),
        name = escape_attribute(icon_name),
        ns = SVG_NS,
        w = data.width,
        h = data.height,
        id = escape_attribute(&id),
        body = path_markup(&data.path, fill),
    )
}

/// Checks that an icon's geometry parses and draws something.
///
/// The paths are wrapped in a standalone SVG document and parsed with usvg.
/// usvg drops path elements whose data is empty or malformed, so an empty
/// tree means the definition would render as nothing.
pub fn validate(prefix: &str, icon_name: &str, data: &IconData) -> Result<(), CatalogError> {
    let reference_id = reference_id(prefix, icon_name);
    let document = format!(
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
        w = data.width,
        h = data.height,
        body = path_markup(&data.path, "#000000"),
    );

    let tree = Tree::from_str(&document, &Options::default()).map_err(|source| {
        CatalogError::InvalidDefinition {
            reference_id: reference_id.clone(),
            source,
        }
    })?;

    if tree.root().children().is_empty() {
        return Err(CatalogError::EmptyGeometry { reference_id });
    }
    Ok(())
}
