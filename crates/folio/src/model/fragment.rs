//! Typed markup description.
//!
//! Excerpt bodies and the modal frame are described as [`Node`] trees and
//! rendered node-by-node, so content text is never parsed as markup.

use std::borrow::Cow;
#[cfg(test)]
use std::fmt::Write;

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Div,
    H3,
    P,
    Em,
    Button,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Em => "em",
            Tag::Button => "button",
        }
    }
}

pub type Attributes = SmallVec<[(&'static str, Cow<'static, str>); 2]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element {
        tag: Tag,
        attributes: Attributes,
        children: Vec<Node>,
    },
    Text(Cow<'static, str>),
}

impl Node {
    pub fn element(tag: Tag) -> Self {
        Node::Element {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Node::Text(text.into())
    }

    /// Sets (or replaces) an attribute. No-op on text nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        if let Node::Element { attributes, .. } = &mut self {
            let value = value.into();
            match attributes.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => *slot = value,
                None => attributes.push((name, value)),
            }
        }
        self
    }

    pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
        self.attr("class", class)
    }

    /// Appends a child. No-op on text nodes.
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(existing, _)| *existing == name)
                .map(|(_, value)| value.as_ref()),
            Node::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Depth-first search, self included.
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        match self {
            Node::Element { children, .. } => {
                children.iter().find_map(|child| child.find_by_class(class))
            }
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of the subtree, like `Node.textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialized, escaped markup. Reference rendering for tests; the browser
    /// builds nodes directly.
    #[cfg(test)]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    #[cfg(test)]
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, out),
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                let _ = write!(out, "<{}", tag.name());
                for (name, value) in attributes {
                    let _ = write!(out, " {name}=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag.name());
            }
        }
    }
}

/// Ordered sibling nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }

    #[cfg(test)]
    pub fn to_html(&self) -> String {
        self.nodes.iter().map(Node::to_html).collect()
    }
}

#[cfg(test)]
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_serializes() {
        let node = Node::element(Tag::P)
            .class("meta")
            .child(Node::element(Tag::Em).child(Node::text("Genre: Essay")));
        assert_eq!(node.to_html(), r#"<p class="meta"><em>Genre: Essay</em></p>"#);
        assert_eq!(node.text_content(), "Genre: Essay");
    }

    #[test]
    fn text_is_escaped() {
        let node = Node::element(Tag::P).child(Node::text("<script>alert('x')</script> & more"));
        assert_eq!(
            node.to_html(),
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn attributes_are_replaced_not_duplicated() {
        let node = Node::element(Tag::Div).class("a").class("b");
        assert_eq!(node.attribute("class"), Some("b"));
        assert_eq!(node.to_html(), r#"<div class="b"></div>"#);
    }

    #[test]
    fn finds_nested_class() {
        let tree = Node::element(Tag::Div)
            .class("outer")
            .child(Node::element(Tag::Button).class("close primary"));
        let found = tree.find_by_class("close").unwrap();
        assert!(matches!(found, Node::Element { tag: Tag::Button, .. }));
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn text_nodes_ignore_builder_calls() {
        let node = Node::text("plain").class("x").child(Node::text("y"));
        assert_eq!(node, Node::text("plain"));
    }
}
