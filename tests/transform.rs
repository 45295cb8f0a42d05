//! End-to-end page transforms against the bundled icon library.

use fa_inline::{
    AttributeSet, Content, IconLibrary, IconPlugin, IdGenerator, Node, PageBundle, PluginOptions,
};
use pretty_assertions::assert_eq;

const USER_SYMBOL: &str = r#"<svg style="display: none;"><symbol aria-hidden="true" focusable="false" data-prefix="far" data-icon="user" class="svg-inline--fa fa-user" role="img" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512" id="far-fa-user"><path fill="currentColor" d="M304 128a80 80 0 1 0 -160 0 80 80 0 1 0 160 0zM96 128a128 128 0 1 1 256 0A128 128 0 1 1 96 128zM49.3 464l349.5 0c-8.9-63.3-63.3-112-129-112l-91.4 0c-65.7 0-120.1 48.7-129 112zM0 482.3C0 383.8 79.8 304 178.3 304l91.4 0C368.2 304 448 383.8 448 482.3c0 16.4-13.3 29.7-29.7 29.7L29.7 512C13.3 512 0 498.7 0 482.3z"></path></symbol></svg>"#;

const PAGE: &str = "/index.html";

fn plugin(options: PluginOptions) -> IconPlugin {
    IconPlugin::new(options, IconLibrary::builtin().unwrap()).unwrap()
}

fn icon(class: &str) -> Content {
    Content::Element(Node::new("i").with_attr("class", class))
}

fn html(tree: &[Content]) -> String {
    tree.iter().map(Content::to_html).collect()
}

/// Transforms `tree` and returns the page markup followed by its bundle.
fn render(plugin: &IconPlugin, mut tree: Vec<Content>) -> (String, PageBundle) {
    let mut bundle = plugin.bundle();
    plugin.transform(PAGE, &mut tree, &mut bundle).unwrap();
    (html(&tree), bundle)
}

#[test]
fn regular_user_icon() {
    let (page, bundle) = render(&plugin(PluginOptions::default()), vec![icon("fa-regular fa-user")]);
    assert_eq!(
        page,
        r##"<svg aria-hidden="true"><use href="#far-fa-user" xlink:href="#far-fa-user"></use></svg>"##
    );
    assert_eq!(bundle.render(PAGE), USER_SYMBOL);
    assert_eq!(bundle.name(), "fontawesome");
}

#[test]
fn missing_icon_is_left_alone() {
    let (page, bundle) = render(&plugin(PluginOptions::default()), vec![icon("fa-solid fa-left")]);
    assert_eq!(page, r#"<i class="fa-solid fa-left"></i>"#);
    assert_eq!(bundle.render(PAGE), "");
}

#[test]
fn missing_icon_with_fail_on_error() {
    let plugin = plugin(PluginOptions::default().with_fail_on_error(true));
    let mut tree = vec![icon("fa-solid fa-left")];
    let mut bundle = plugin.bundle();

    let err = plugin.transform(PAGE, &mut tree, &mut bundle).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Error with icon, via class="fa-solid fa-left". Resolved to: {"prefix":"fas","style":"solid","family":"classic","iconName":"left"}. Original error message: Could not find icon: fas:left"#
    );
}

#[test]
fn default_attributes_replace_aria_hidden() {
    let plugin = plugin(
        PluginOptions::default().with_default_attributes(AttributeSet::new().with("class", "zicon")),
    );
    let (page, _) = render(&plugin, vec![icon("fa-regular fa-user")]);
    assert_eq!(
        page,
        r##"<svg class="zicon"><use href="#far-fa-user" xlink:href="#far-fa-user"></use></svg>"##
    );
}

#[test]
fn ignored_classes_pass_through() {
    let plugin = plugin(
        PluginOptions::default()
            .with_ignored_classes(["fak"])
            .with_fail_on_error(true),
    );
    let (page, bundle) = render(
        &plugin,
        vec![icon("fak fa-dot"), icon("fa-regular fa-font-awesome")],
    );
    assert_eq!(
        page,
        r##"<i class="fak fa-dot"></i><svg aria-hidden="true"><use href="#far-fa-font-awesome" xlink:href="#far-fa-font-awesome"></use></svg>"##
    );
    assert_eq!(bundle.reference_ids(PAGE), ["far-fa-font-awesome"]);
}

#[test]
fn legacy_name_resolves_to_renamed_icon() {
    let plugin = plugin(PluginOptions::default().with_fail_on_error(true));
    let (page, bundle) = render(&plugin, vec![icon("fas fa-tshirt")]);
    assert_eq!(
        page,
        r##"<svg aria-hidden="true"><use href="#fas-fa-shirt" xlink:href="#fas-fa-shirt"></use></svg>"##
    );
    assert!(bundle.render(PAGE).contains(r#"data-icon="shirt""#));
}

#[test]
fn accessible_text() {
    let plugin = plugin(
        PluginOptions::default()
            .with_fail_on_error(true)
            .with_id_generator(IdGenerator::custom(|| "demo-static-id".to_string())),
    );
    let tree = vec![Content::Element(
        Node::new("i")
            .with_attr("class", "fas fa-tshirt")
            .with_child("shirt"),
    )];
    let (page, _) = render(&plugin, tree);
    assert_eq!(
        page,
        r##"<svg aria-labelledby="demo-static-id" role="img"><title id="demo-static-id">shirt</title><use href="#fas-fa-shirt" xlink:href="#fas-fa-shirt"></use></svg>"##
    );
}

#[test]
fn accessible_text_keeps_parsed_entities() {
    let plugin = plugin(
        PluginOptions::default().with_id_generator(IdGenerator::custom(|| "x".to_string())),
    );
    let node: Node = serde_json::from_str(
        r#"{"tag":"i","attrs":{"class":"fa-regular fa-user"},"content":["R&amp;D"]}"#,
    )
    .unwrap();
    let (page, _) = render(&plugin, vec![Content::Element(node)]);
    assert!(page.contains(r#"<title id="x">R&amp;D</title>"#), "{page}");
}

#[test]
fn accessible_text_disabled() {
    let plugin = plugin(
        PluginOptions::default()
            .with_fail_on_error(true)
            .with_id_generator(IdGenerator::Disabled),
    );
    let tree = vec![Content::Element(
        Node::new("i")
            .with_attr("class", "fas fa-tshirt")
            .with_child("shirt"),
    )];
    let (page, _) = render(&plugin, tree);
    assert_eq!(
        page,
        r##"<svg aria-hidden="true"><use href="#fas-fa-shirt" xlink:href="#fas-fa-shirt"></use></svg>"##
    );
}

#[test]
fn generated_ids_use_nanoid_prefix() {
    let plugin = plugin(PluginOptions::default());
    let mut tree = vec![Content::Element(
        Node::new("i")
            .with_attr("class", "fa-regular fa-user")
            .with_child("Profile"),
    )];
    let mut bundle = plugin.bundle();
    plugin.transform(PAGE, &mut tree, &mut bundle).unwrap();

    let svg = tree[0].as_element().unwrap();
    let id = svg.attr("aria-labelledby").unwrap();
    assert!(id.starts_with("fa11-text-"));
    let title = svg.content[0].as_element().unwrap();
    assert_eq!(title.attr("id"), Some(id));
}

#[test]
fn opt_out_of_xlink_href() {
    let plugin = plugin(PluginOptions::default().with_xlink_href(false));
    let (page, _) = render(&plugin, vec![icon("fa-regular fa-user")]);
    assert_eq!(
        page,
        r##"<svg aria-hidden="true"><use href="#far-fa-user"></use></svg>"##
    );
}

#[test]
fn definitions_are_emitted_once_per_page() {
    let plugin = plugin(PluginOptions::default());
    let mut bundle = plugin.bundle();

    for page in ["/a/", "/b/"] {
        let mut tree = vec![
            icon("fa-regular fa-user"),
            icon("far fa-user fa-fw"),
            icon("fas fa-shirt"),
        ];
        plugin.transform(page, &mut tree, &mut bundle).unwrap();
    }

    for page in ["/a/", "/b/"] {
        assert_eq!(bundle.reference_ids(page), ["far-fa-user", "fas-fa-shirt"]);
        assert_eq!(bundle.render(page).matches("<symbol").count(), 2);
    }
}

#[test]
fn shortcode_and_transform_share_the_bundle() {
    let plugin = plugin(PluginOptions::default().with_shortcode("icon"));
    let mut bundle = plugin.bundle();

    let mut tree = vec![icon("fa-regular fa-user")];
    plugin.transform(PAGE, &mut tree, &mut bundle).unwrap();
    plugin
        .shortcode(PAGE, "far:user", &AttributeSet::new(), &mut bundle)
        .unwrap();

    assert_eq!(bundle.render(PAGE), USER_SYMBOL);
}

#[test]
fn options_from_json_drive_the_transform() {
    let options = PluginOptions::from_json(
        r#"{"transform":"span.icon","generateId":false,"useXlinkHref":false}"#,
    )
    .unwrap();
    let plugin = plugin(options);
    let tree = vec![
        icon("fa-regular fa-user"),
        Content::Element(
            Node::new("span")
                .with_attr("class", "icon fa-regular fa-user")
                .with_child("me"),
        ),
    ];
    let (page, _) = render(&plugin, tree);
    assert_eq!(
        page,
        r##"<i class="fa-regular fa-user"></i><svg class="icon" aria-hidden="true"><use href="#far-fa-user"></use></svg>"##
    );
}
