//! In-memory document/element model.
//!
//! Elements live in a flat arena owned by [`Document`] and are referenced
//! by [`ElementId`]. Tree structure is kept as parent/children links on
//! each element; [`Document::append`] keeps both sides consistent.

use std::fmt;

use indexmap::IndexMap;

use crate::class_list::parse_class_string;

// ── Element ───────────────────────────────────────────────────────────────

/// Handle to an element in a [`Document`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// A single rendered element.
///
/// Class list and style live in the `class` / `style` attributes, as on a
/// real element; [`Element::class_list`] and friends are views over the
/// `class` attribute.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    attrs: IndexMap<String, String>,
    pub text: Option<String>,
    pub html: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_owned(),
            ..Default::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(name)
    }

    /// All attributes, in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    // ── Class list ───────────────────────────────────────────────────────

    /// Tokens of the `class` attribute.
    pub fn class_list(&self) -> Vec<String> {
        self.attr("class").map(parse_class_string).unwrap_or_default()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class_list().iter().any(|t| t == token)
    }

    /// Append `token` to the class list unless already present.
    pub fn add_class(&mut self, token: &str) {
        let mut tokens = self.class_list();
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_owned());
        }
        self.set_attr("class", &tokens.join(" "));
    }

    /// Drop every occurrence of `token` from the class list.
    pub fn remove_class(&mut self, token: &str) {
        let tokens: Vec<String> = self
            .class_list()
            .into_iter()
            .filter(|t| t != token)
            .collect();
        self.set_attr("class", &tokens.join(" "));
    }

    /// Flip the presence of `token` in the class list.
    pub fn toggle_class(&mut self, token: &str) {
        if self.has_class(token) {
            self.remove_class(token);
        } else {
            self.add_class(token);
        }
    }
}

// ── Locator ───────────────────────────────────────────────────────────────

/// Locator accepted wherever an element is targeted: an arena handle, or
/// the value of an `id` attribute.
#[derive(Debug, Clone, Copy)]
pub enum ElemRef<'a> {
    Id(ElementId),
    DomId(&'a str),
}

impl From<ElementId> for ElemRef<'static> {
    fn from(id: ElementId) -> Self {
        ElemRef::Id(id)
    }
}

impl<'a> From<&'a str> for ElemRef<'a> {
    fn from(dom_id: &'a str) -> Self {
        ElemRef::DomId(dom_id)
    }
}

impl fmt::Display for ElemRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemRef::Id(id) => write!(f, "element {}", id.0),
            ElemRef::DomId(dom_id) => write!(f, "#{dom_id}"),
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The rendering surface: an arena of elements plus the `body` root.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Element>,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only an empty `body`.
    pub fn new() -> Self {
        Document {
            nodes: vec![Element::new("body")],
            body: ElementId(0),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Allocate a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Element::new(tag));
        id
    }

    /// Borrow an element. Ids minted by this document stay valid for its
    /// lifetime.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    /// Append `child` under `parent`, detaching it from any previous
    /// parent first. Appending an element under itself is ignored.
    pub fn append(&mut self, parent: ElementId, child: ElementId) {
        if parent == child {
            return;
        }
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Find an element by the value of its `id` attribute.
    pub fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|node| node.attr("id") == Some(dom_id))
            .map(ElementId)
    }

    /// Resolve a locator to an arena handle.
    pub fn resolve(&self, elem: ElemRef<'_>) -> Option<ElementId> {
        match elem {
            ElemRef::Id(id) => (id.0 < self.nodes.len()).then_some(id),
            ElemRef::DomId(dom_id) => self.element_by_id(dom_id),
        }
    }
}
