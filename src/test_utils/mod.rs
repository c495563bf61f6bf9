pub mod fixtures;

use seed::virtual_dom::{At, AtValue, El, Node};

/// Unwraps an element node.
pub(crate) fn el<Ms>(node: &Node<Ms>) -> &El<Ms> {
    match node {
        Node::Element(x) => x,
        _ => panic!("Expected an element node"),
    }
}

/// The element children, skipping text and empty nodes.
pub(crate) fn children<Ms>(x: &El<Ms>) -> Vec<&El<Ms>> {
    x.children
        .iter()
        .filter_map(|x| match x {
            Node::Element(x) => Some(x),
            _ => None,
        })
        .collect()
}

/// The value of an attribute. A present attribute without a value is `Some("")`.
pub(crate) fn attr<Ms>(x: &El<Ms>, at: At) -> Option<String> {
    match x.attrs.vals.get(&at) {
        Some(AtValue::Some(v)) => Some(v.clone()),
        Some(AtValue::None) => Some(String::new()),
        Some(AtValue::Ignored) | None => None,
    }
}

pub(crate) fn classes<Ms>(x: &El<Ms>) -> Vec<String> {
    attr(x, At::Class)
        .unwrap_or_default()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// The concatenated text children.
pub(crate) fn text<Ms>(x: &El<Ms>) -> String {
    x.children
        .iter()
        .filter_map(|x| match x {
            Node::Text(t) => Some(t.text.to_string()),
            _ => None,
        })
        .collect()
}
