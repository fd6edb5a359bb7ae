//! Element construction and update.
//!
//! [`ElementUpdate`] is the typed configuration behind [`new_element`] and
//! [`update_element`]: tag, parent, content, style, class, an update mode
//! governing how style and class merge, and arbitrary leftover attributes.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::class_list::{apply_class, ClassValue};
use crate::prop_update::{overwrite_property, remove_property, UpdateMode};
use crate::style::{merge_style_strings, parse_style_string, style_map_to_string};

use super::node::{Document, ElemRef, ElementId};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("ELEMENT_NOT_FOUND: {0}")]
    ElementNotFound(String),
}

// ── Owned locator ─────────────────────────────────────────────────────────

/// Owned element locator, for configurations that outlive a borrow.
#[derive(Debug, Clone)]
pub enum ElemKey {
    Id(ElementId),
    DomId(String),
}

impl ElemKey {
    fn as_ref(&self) -> ElemRef<'_> {
        match self {
            ElemKey::Id(id) => ElemRef::Id(*id),
            ElemKey::DomId(dom_id) => ElemRef::DomId(dom_id),
        }
    }
}

impl From<ElementId> for ElemKey {
    fn from(id: ElementId) -> Self {
        ElemKey::Id(id)
    }
}

impl From<&str> for ElemKey {
    fn from(dom_id: &str) -> Self {
        ElemKey::DomId(dom_id.to_owned())
    }
}

impl From<String> for ElemKey {
    fn from(dom_id: String) -> Self {
        ElemKey::DomId(dom_id)
    }
}

impl fmt::Display for ElemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

// ── Style specification ───────────────────────────────────────────────────

/// A style specification: a raw declaration string or a property mapping.
/// Mappings (camelCase keys allowed) are serialized to a declaration string
/// before they touch the element.
#[derive(Debug, Clone)]
pub enum StyleValue {
    Str(String),
    Map(Map<String, Value>),
}

impl StyleValue {
    fn into_decl_string(self) -> String {
        match self {
            StyleValue::Str(s) => s,
            StyleValue::Map(map) => style_map_to_string(&map),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<Map<String, Value>> for StyleValue {
    fn from(map: Map<String, Value>) -> Self {
        StyleValue::Map(map)
    }
}

// ── Update configuration ──────────────────────────────────────────────────

/// Typed update configuration for [`new_element`] / [`update_element`].
///
/// Without an update mode, `style` and `class` overwrite the corresponding
/// attributes wholesale. With one, style declarations merge through the
/// property engine and class tokens apply one at a time through the
/// class-list mutators (where `overwrite` falls back to a plain attribute
/// write, since it is not a class-list mode).
///
/// ```
/// use dom_kit::dom::{new_element, Document, ElementUpdate};
///
/// let mut doc = Document::new();
/// let id = new_element(
///     &mut doc,
///     ElementUpdate::new()
///         .tag("button")
///         .text("Save")
///         .class("btn btn-primary")
///         .attr("type", "submit"),
/// )
/// .unwrap();
/// assert_eq!(doc.element(id).tag, "button");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    tag: Option<String>,
    parent: Option<ElemKey>,
    text: Option<String>,
    html: Option<String>,
    style: Option<StyleValue>,
    class: Option<ClassValue>,
    update_mode: Option<UpdateMode>,
    attrs: IndexMap<String, String>,
}

impl ElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element kind for [`new_element`]; `div` when unset. Ignored by
    /// [`update_element`].
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_owned());
        self
    }

    /// Container to append the element into. Without it, the element keeps
    /// its current parent, or lands under `body`.
    pub fn parent(mut self, parent: impl Into<ElemKey>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_owned());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = Some(html.to_owned());
        self
    }

    pub fn style(mut self, style: impl Into<StyleValue>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Merge policy for `style` and `class`; without it both overwrite.
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = Some(mode);
        self
    }

    /// A generic attribute, applied after style and class handling.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }
}

// ── Constructors / updaters ───────────────────────────────────────────────

/// Create an element (default tag `div`) and run the updater on it.
pub fn new_element(doc: &mut Document, update: ElementUpdate) -> Result<ElementId, DomError> {
    let tag = update.tag.as_deref().unwrap_or("div").to_owned();
    let id = doc.create_element(&tag);
    apply_update(doc, id, update)?;
    Ok(id)
}

/// Update an existing element in place.
///
/// The target must resolve; a dangling locator is
/// [`DomError::ElementNotFound`].
pub fn update_element(
    doc: &mut Document,
    target: ElemRef<'_>,
    update: ElementUpdate,
) -> Result<ElementId, DomError> {
    let id = doc
        .resolve(target)
        .ok_or_else(|| DomError::ElementNotFound(target.to_string()))?;
    apply_update(doc, id, update)?;
    Ok(id)
}

fn apply_update(doc: &mut Document, id: ElementId, update: ElementUpdate) -> Result<(), DomError> {
    // Parent: configured, else current non-body parent, else body.
    let parent = match &update.parent {
        Some(key) => doc
            .resolve(key.as_ref())
            .ok_or_else(|| DomError::ElementNotFound(key.to_string()))?,
        None => match doc.element(id).parent() {
            Some(p) if p != doc.body() => p,
            _ => doc.body(),
        },
    };
    doc.append(parent, id);

    let style = update.style.map(StyleValue::into_decl_string);

    if let Some(text) = update.text {
        doc.element_mut(id).text = Some(text);
    }
    if let Some(html) = update.html {
        doc.element_mut(id).html = Some(html);
    }

    match (update.update_mode, update.class) {
        (Some(mode), class) => {
            if let Some(donor) = &style {
                let current = doc.element(id).attr("style").unwrap_or_default().to_owned();
                let merged = merge_style_strings(&current, donor, mode);
                doc.element_mut(id).set_attr("style", &merged);
            }
            if let Some(class) = class {
                if mode.applies_to_classes() {
                    for token in class.tokens() {
                        apply_class(mode, &token, doc, id);
                    }
                } else {
                    // overwrite: the class attribute is replaced wholesale
                    doc.element_mut(id).set_attr("class", &class.tokens().join(" "));
                }
            }
        }
        (None, class) => {
            if let Some(style) = &style {
                doc.element_mut(id).set_attr("style", style);
            }
            if let Some(class) = class {
                doc.element_mut(id).set_attr("class", &class.tokens().join(" "));
            }
        }
    }

    for (name, value) in &update.attrs {
        doc.element_mut(id).set_attr(name, value);
    }
    Ok(())
}

// ── Visibility ────────────────────────────────────────────────────────────

/// Toggle or force the `visibility: hidden` style property.
///
/// `None` flips the current state; `Some(true)` clears the property (the
/// visible state has no `visibility` declaration at all), `Some(false)`
/// sets `hidden`.
pub fn toggle_visible(
    doc: &mut Document,
    target: ElemRef<'_>,
    set_visible: Option<bool>,
) -> Result<(), DomError> {
    let id = doc
        .resolve(target)
        .ok_or_else(|| DomError::ElementNotFound(target.to_string()))?;

    let mut styles = parse_style_string(doc.element(id).attr("style").unwrap_or_default());
    let hidden = styles.get("visibility").and_then(Value::as_str) == Some("hidden");
    let visible = set_visible.unwrap_or(hidden);

    if visible {
        remove_property("visibility", &mut styles);
    } else {
        let mut donor = Map::new();
        donor.insert("visibility".to_owned(), Value::String("hidden".to_owned()));
        overwrite_property("visibility", &mut styles, &donor);
    }
    doc.element_mut(id)
        .set_attr("style", &style_map_to_string(&styles));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_element_defaults_to_div_under_body() {
        let mut doc = Document::new();
        let id = new_element(&mut doc, ElementUpdate::new()).unwrap();

        assert_eq!(doc.element(id).tag, "div");
        assert_eq!(doc.element(id).parent(), Some(doc.body()));
    }

    #[test]
    fn test_new_element_with_style_map() {
        let mut doc = Document::new();
        let styles = json!({"color": "black", "fontSize": "13px"});
        let id = new_element(
            &mut doc,
            ElementUpdate::new().style(styles.as_object().unwrap().clone()),
        )
        .unwrap();

        assert_eq!(
            doc.element(id).attr("style"),
            Some("color: black; font-size: 13px;")
        );
    }

    #[test]
    fn test_update_element_unknown_target() {
        let mut doc = Document::new();
        let err = update_element(&mut doc, ElemRef::DomId("ghost"), ElementUpdate::new());
        assert_eq!(err, Err(DomError::ElementNotFound("#ghost".to_string())));
    }

    #[test]
    fn test_update_element_unknown_parent() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        let err = update_element(
            &mut doc,
            ElemRef::Id(id),
            ElementUpdate::new().parent("ghost"),
        );
        assert_eq!(err, Err(DomError::ElementNotFound("#ghost".to_string())));
    }

    #[test]
    fn test_update_keeps_existing_parent() {
        let mut doc = Document::new();
        let container = new_element(&mut doc, ElementUpdate::new().attr("id", "box")).unwrap();
        let id = new_element(&mut doc, ElementUpdate::new().parent("box")).unwrap();
        assert_eq!(doc.element(id).parent(), Some(container));

        // no parent in the update: stays where it is
        update_element(&mut doc, ElemRef::Id(id), ElementUpdate::new().text("hi")).unwrap();
        assert_eq!(doc.element(id).parent(), Some(container));
        assert_eq!(doc.element(id).text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_style_merge_with_update_mode() {
        let mut doc = Document::new();
        let id = new_element(
            &mut doc,
            ElementUpdate::new().style("color: black; font-size: 10px;"),
        )
        .unwrap();

        update_element(
            &mut doc,
            ElemRef::Id(id),
            ElementUpdate::new()
                .style("color: red;")
                .update_mode(UpdateMode::Overwrite),
        )
        .unwrap();
        assert_eq!(
            doc.element(id).attr("style"),
            Some("color: red; font-size: 10px;")
        );
    }

    #[test]
    fn test_style_without_mode_overwrites_wholesale() {
        let mut doc = Document::new();
        let id = new_element(
            &mut doc,
            ElementUpdate::new().style("color: black; font-size: 10px;"),
        )
        .unwrap();

        update_element(
            &mut doc,
            ElemRef::Id(id),
            ElementUpdate::new().style("color: red;"),
        )
        .unwrap();
        assert_eq!(doc.element(id).attr("style"), Some("color: red;"));
    }

    #[test]
    fn test_class_merge_with_update_mode() {
        let mut doc = Document::new();
        let id = new_element(&mut doc, ElementUpdate::new().class("btn active")).unwrap();

        update_element(
            &mut doc,
            ElemRef::Id(id),
            ElementUpdate::new()
                .class("active, selected")
                .update_mode(UpdateMode::Toggle),
        )
        .unwrap();
        assert_eq!(doc.element(id).class_list(), vec!["btn", "selected"]);
    }

    #[test]
    fn test_class_overwrite_mode_replaces_attribute() {
        let mut doc = Document::new();
        let id = new_element(&mut doc, ElementUpdate::new().class("btn active")).unwrap();

        update_element(
            &mut doc,
            ElemRef::Id(id),
            ElementUpdate::new()
                .class("fresh")
                .update_mode(UpdateMode::Overwrite),
        )
        .unwrap();
        assert_eq!(doc.element(id).attr("class"), Some("fresh"));
    }

    #[test]
    fn test_generic_attrs_applied_last() {
        let mut doc = Document::new();
        let id = new_element(
            &mut doc,
            ElementUpdate::new()
                .tag("a")
                .attr("href", "/docs")
                .attr("target", "_blank"),
        )
        .unwrap();

        assert_eq!(doc.element(id).attr("href"), Some("/docs"));
        assert_eq!(doc.element(id).attr("target"), Some("_blank"));
    }

    #[test]
    fn test_toggle_visible_round_trip() {
        let mut doc = Document::new();
        let id = new_element(&mut doc, ElementUpdate::new().style("color: red;")).unwrap();

        toggle_visible(&mut doc, ElemRef::Id(id), None).unwrap();
        assert_eq!(
            doc.element(id).attr("style"),
            Some("color: red; visibility: hidden;")
        );

        toggle_visible(&mut doc, ElemRef::Id(id), None).unwrap();
        assert_eq!(doc.element(id).attr("style"), Some("color: red;"));
    }

    #[test]
    fn test_toggle_visible_forced() {
        let mut doc = Document::new();
        let id = new_element(&mut doc, ElementUpdate::new()).unwrap();

        toggle_visible(&mut doc, ElemRef::Id(id), Some(false)).unwrap();
        assert_eq!(doc.element(id).attr("style"), Some("visibility: hidden;"));

        // forcing an already-hidden element stays hidden
        toggle_visible(&mut doc, ElemRef::Id(id), Some(false)).unwrap();
        assert_eq!(doc.element(id).attr("style"), Some("visibility: hidden;"));

        toggle_visible(&mut doc, ElemRef::Id(id), Some(true)).unwrap();
        assert_eq!(doc.element(id).attr("style"), Some(""));
    }
}
