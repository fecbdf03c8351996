//! Proxy for Raphael's `getBBox()`.
//!
//! The box is only known when the page runs, so the proxy hands out
//! [`JsLiteral`]s naming variables that will hold each field.

use std::rc::Rc;

use crate::canvas::Script;
use crate::element::Element;
use crate::js::JsLiteral;

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

#[derive(Clone)]
pub struct BBox {
    element: String,
    name: String,
    script: Rc<Script>,
}

impl BBox {
    /// Emits `var <name> = <element>.getBBox();`.
    pub(crate) fn new(element: &Element, name: String) -> Self {
        let bbox = Self { element: element.name().to_owned(), name, script: Rc::clone(element.script()) };
        bbox.script.push(format!("var {} = {}.getBBox();", bbox.name, bbox.element));
        bbox
    }

    /// Variable holding the box.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Query the box again, e.g. after the element moved.
    pub fn update(&self) -> &Self {
        self.script.push(format!("{} = {}.getBBox();", self.name, self.element));
        self
    }

    pub fn x(&self) -> JsLiteral {
        self.field("x")
    }

    pub fn y(&self) -> JsLiteral {
        self.field("y")
    }

    pub fn width(&self) -> JsLiteral {
        self.field("width")
    }

    pub fn height(&self) -> JsLiteral {
        self.field("height")
    }

    fn field(&self, field: &str) -> JsLiteral {
        let var = format!("{}_{field}", self.name);
        self.script.push(format!("var {var} = {}.{field};", self.name));
        JsLiteral::new(var)
    }
}

impl std::fmt::Debug for BBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBox").field("element", &self.element).field("name", &self.name).finish()
    }
}
