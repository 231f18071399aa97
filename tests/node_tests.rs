use leafmark::{
    Attributes, Error, LeafNode, Node, ParentNode, TextFragment, TextKind, fragment_to_node,
    text_to_fragments,
};

fn render(fragment: TextFragment) -> String {
    fragment_to_node(&fragment).unwrap().render().unwrap()
}

#[test]
fn fragment_round_trips() {
    assert_eq!(render(TextFragment::plain("text")), "text");
    assert_eq!(render(TextFragment::bold("b")), "<b>b</b>");
    assert_eq!(render(TextFragment::italic("i")), "<i>i</i>");
    assert_eq!(
        render(TextFragment::code("print('hi')")),
        "<code>print('hi')</code>"
    );
    assert_eq!(
        render(TextFragment::link("x", "https://e.com")),
        "<a href=\"https://e.com\">x</a>"
    );
    assert_eq!(
        render(TextFragment::image("a", "i.png")),
        "<img src=\"i.png\" alt=\"a\">"
    );
}

#[test]
fn image_node_shape() {
    let node = fragment_to_node(&TextFragment::image("a", "i.png")).unwrap();
    let expected = Node::Leaf(
        LeafNode::new("img", "").with_attributes(
            Attributes::new().with("src", "i.png").with("alt", "a"),
        ),
    );
    assert_eq!(node, expected);
}

#[test]
fn link_without_url_fails() {
    assert_eq!(
        fragment_to_node(&TextFragment::link("x", "")),
        Err(Error::MissingUrl { kind: "link" })
    );
}

#[test]
fn unknown_kind_name_fails() {
    let err = "underline".parse::<TextKind>().unwrap_err();
    assert_eq!(err, Error::UnknownKind("underline".to_owned()));
    assert_eq!(err.to_string(), "unknown text kind: underline");
}

#[test]
fn caller_wraps_fragments_in_parent() {
    let children = text_to_fragments("Hello **world** and [more](/more)")
        .iter()
        .map(fragment_to_node)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let paragraph = Node::Parent(ParentNode::new("p", children));
    assert_eq!(
        paragraph.render().unwrap(),
        "<p>Hello <b>world</b> and <a href=\"/more\">more</a></p>"
    );
}

#[test]
fn deep_tree_renders() {
    let mut node = Node::Leaf(LeafNode::new("span", "core"));
    for _ in 0..200 {
        node = Node::Parent(ParentNode::new("div", vec![node]));
    }
    let html = node.render().unwrap();
    assert!(html.starts_with("<div><div>"));
    assert!(html.contains("<span>core</span>"));
    assert_eq!(html.matches("</div>").count(), 200);
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::MissingChildren { tag: "ul".to_owned() }.to_string(),
        "parent node <ul> must have children"
    );
    assert_eq!(
        Error::UnmatchedDelimiter { delimiter: "**".to_owned() }.to_string(),
        "unmatched delimiter \"**\""
    );
}
