use std::fmt;

use ulid::Ulid;

use super::fragment::{Fragment, Node, Tag};
use crate::config::ModalClasses;

pub const NOT_FOUND_TEXT: &str = "Excerpt not found.";

/// A named writing sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Excerpt {
    pub id: &'static str,
    pub title: &'static str,
    pub genre: &'static str,
    pub date: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// Content authors extend this table.
pub static EXCERPTS: &[Excerpt] = &[
    Excerpt {
        id: "excerpt1",
        title: "Sample Excerpt Title",
        genre: "Fiction",
        date: "2024",
        paragraphs: &[
            "This is where your actual excerpt content would go. Replace this with your real writing samples...",
            "You can include multiple paragraphs, dialogue, or whatever format your writing takes.",
        ],
    },
    Excerpt {
        id: "excerpt2",
        title: "Another Sample",
        genre: "Essay",
        date: "2023",
        paragraphs: &["Another example excerpt would go here..."],
    },
];

pub fn lookup(id: &str) -> Option<&'static Excerpt> {
    EXCERPTS.iter().find(|excerpt| excerpt.id == id)
}

impl Excerpt {
    /// Title, metadata line, then one paragraph per body entry.
    pub fn fragment(&self) -> Fragment {
        let heading = Node::element(Tag::H3).child(Node::text(self.title));
        let metadata = Node::element(Tag::P).child(
            Node::element(Tag::Em)
                .child(Node::text(format!("Genre: {} | Date: {}", self.genre, self.date))),
        );
        let body = self
            .paragraphs
            .iter()
            .map(|paragraph| Node::element(Tag::P).child(Node::text(*paragraph)));
        Fragment::new([heading, metadata].into_iter().chain(body))
    }
}

pub fn not_found_fragment() -> Fragment {
    Fragment::new([Node::element(Tag::P).child(Node::text(NOT_FOUND_TEXT))])
}

/// Resolves an excerpt id, falling back to the "not found" fragment.
pub fn excerpt_fragment(id: &str) -> Fragment {
    lookup(id).map_or_else(not_found_fragment, Excerpt::fragment)
}

/// Identity of one mounted modal overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(Ulid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Value for the overlay element's `id` attribute.
    pub fn dom_id(&self) -> String {
        format!("excerpt-modal-{}", self.0)
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Full overlay tree: dimmed backdrop > panel > (close control, content).
pub fn modal_frame(id: OverlayId, content: Fragment, classes: &ModalClasses) -> Node {
    let close = Node::element(Tag::Button)
        .class(classes.close.clone())
        .attr("type", "button")
        .attr("aria-label", "Close excerpt")
        .child(Node::text("\u{00d7}"));
    let text = Node::element(Tag::Div)
        .class(classes.text.clone())
        .children(content.nodes);
    let panel = Node::element(Tag::Div)
        .class(classes.content.clone())
        .child(close)
        .child(text);
    Node::element(Tag::Div)
        .class(classes.overlay.clone())
        .attr("id", id.dom_id())
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .child(panel)
}
