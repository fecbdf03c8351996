//! Raphael attribute names and ordered attribute sets.

use crate::js::JsValue;

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;

/// Attribute names understood by `Element.attr()` in Raphael 1.x.
pub const KNOWN_ATTRIBUTES: &[&str] = &[
    "clip-rect",
    "cx",
    "cy",
    "fill",
    "fill-opacity",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "height",
    "opacity",
    "path",
    "r",
    "rotation",
    "rx",
    "ry",
    "scale",
    "src",
    "stroke",
    "stroke-dasharray",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "translation",
    "width",
    "x",
    "y",
    "gradient",
];

/// Normalize an attribute name: keep `[A-Za-z0-9_-]`, then map `_` to `-`.
///
/// `stroke_width` and `stroke-width` both become `stroke-width`.
#[must_use]
pub fn normalize_attribute(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| if c == '_' { '-' } else { c })
        .collect()
}

/// Returns `true` if the normalized `name` is a known Raphael attribute.
#[must_use]
pub fn is_known_attribute(name: &str) -> bool {
    KNOWN_ATTRIBUTES.contains(&name)
}

/// Normalize `name` and warn when Raphael will not recognize it.
///
/// Unknown attributes are still emitted; Raphael ignores keys it does not
/// handle, and newer releases accept more than this list.
pub(crate) fn checked_attribute(name: &str, target: &str) -> String {
    let normalized = normalize_attribute(name);
    if !is_known_attribute(&normalized) {
        tracing::warn!(attribute = %normalized, element = %target, "attribute not recognized");
    }
    normalized
}

/// Ordered attribute set, optionally carrying an explicit element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    id: Option<String>,
    entries: Vec<(String, JsValue)>,
}

impl Attrs {
    /// An empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `id` as the JavaScript variable name of the element.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add or replace an attribute. Names are normalized; a replaced key
    /// keeps its original position.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<JsValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// In-place form of [`Attrs::set`].
    pub fn insert(&mut self, name: &str, value: JsValue) {
        let key = normalize_attribute(name);
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// The explicit element id, if any.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Look up a value by (normalized) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JsValue> {
        let key = normalize_attribute(name);
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The attributes as a JavaScript object literal value.
    #[must_use]
    pub fn to_object(&self) -> JsValue {
        JsValue::Object(self.entries.clone())
    }
}
