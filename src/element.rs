//! Element handles.
//!
//! An [`Element`] names one JavaScript variable created by its canvas. Each
//! method appends exactly one statement to the canvas buffer and returns the
//! handle, so calls chain: `rect.attr("fill", "#333").rotate(30.0, true)`.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::Animation;
use crate::attributes::{Attrs, checked_attribute};
use crate::bbox::BBox;
use crate::canvas::Script;
use crate::consts::LOOP_NAME_PREFIX;
use crate::error::{RafaError, is_js_identifier};
use crate::js::{JsLiteral, JsValue, js_args};

/// The Raphael constructor an element was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Circle,
    Rect,
    Ellipse,
    Text,
    Image,
    Path,
    Set,
}

impl ElementKind {
    /// Raphael method name, also used in generated variable names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Text => "text",
            Self::Image => "image",
            Self::Path => "path",
            Self::Set => "set",
        }
    }
}

/// A rotation angle. Raphael expects degrees; radians are converted.
#[derive(Debug, Clone, PartialEq)]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
    /// A JavaScript expression evaluating to degrees.
    Expr(JsLiteral),
}

impl Angle {
    #[must_use]
    pub fn to_js_value(&self) -> JsValue {
        match self {
            Self::Degrees(deg) => JsValue::Number(*deg),
            Self::Radians(rad) => JsValue::Number(rad.to_degrees()),
            Self::Expr(expr) => JsValue::Literal(expr.clone()),
        }
    }
}

impl From<f64> for Angle {
    fn from(deg: f64) -> Self {
        Self::Degrees(deg)
    }
}

impl From<JsLiteral> for Angle {
    fn from(expr: JsLiteral) -> Self {
        Self::Expr(expr)
    }
}

/// Handle to a generated Raphael element.
pub struct Element {
    name: String,
    kind: ElementKind,
    script: Rc<Script>,
    bbox: RefCell<Option<BBox>>,
}

impl Element {
    pub(crate) fn new(name: String, kind: ElementKind, script: Rc<Script>) -> Self {
        Self { name, kind, script, bbox: RefCell::new(None) }
    }

    pub(crate) fn belongs_to(&self, script: &Rc<Script>) -> bool {
        Rc::ptr_eq(&self.script, script)
    }

    pub(crate) fn script(&self) -> &Rc<Script> {
        &self.script
    }

    /// JavaScript variable holding the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    fn call(&self, method: &str, args: &[JsValue]) -> &Self {
        self.script.push(format!("{}.{method}({});", self.name, js_args(args)));
        self
    }

    /// `el.attr({"name": value});` Unknown names are logged and still emitted.
    pub fn attr(&self, name: &str, value: impl Into<JsValue>) -> &Self {
        let key = checked_attribute(name, &self.name);
        self.call("attr", &[JsValue::Object(vec![(key, value.into())])])
    }

    /// One `attr` statement per entry, in order.
    pub fn apply_attributes(&self, attrs: &Attrs) -> &Self {
        for (name, value) in attrs.iter() {
            self.attr(name, value.clone());
        }
        self
    }

    /// `el.rotate(deg, absolute);`
    pub fn rotate(&self, angle: impl Into<Angle>, absolute: bool) -> &Self {
        self.call("rotate", &[angle.into().to_js_value(), absolute.into()])
    }

    /// `el.rotate(deg, cx, cy);` rotation around an explicit center.
    pub fn rotate_about(&self, angle: impl Into<Angle>, cx: f64, cy: f64) -> &Self {
        self.call("rotate", &[angle.into().to_js_value(), cx.into(), cy.into()])
    }

    /// `el.translate(dx, dy);`
    pub fn translate(&self, dx: f64, dy: f64) -> &Self {
        self.call("translate", &[dx.into(), dy.into()])
    }

    /// `el.scale(sx, sy);` factors relative to 1.0.
    pub fn scale(&self, sx: f64, sy: f64) -> &Self {
        self.call("scale", &[sx.into(), sy.into()])
    }

    /// `el.scale(sx, sy, cx, cy);` scaling around an explicit center.
    pub fn scale_about(&self, sx: f64, sy: f64, cx: f64, cy: f64) -> &Self {
        self.call("scale", &[sx.into(), sy.into(), cx.into(), cy.into()])
    }

    pub fn scale_x(&self, sx: f64) -> &Self {
        self.scale(sx, 1.0)
    }

    pub fn scale_y(&self, sy: f64) -> &Self {
        self.scale(1.0, sy)
    }

    pub fn to_front(&self) -> &Self {
        self.call("toFront", &[])
    }

    pub fn to_back(&self) -> &Self {
        self.call("toBack", &[])
    }

    /// Emit `var <el>_node = <el>.node;` and return that variable.
    pub fn node(&self) -> JsLiteral {
        let node = format!("{}_node", self.name);
        self.script.push(format!("var {node} = {}.node;", self.name));
        JsLiteral::new(node)
    }

    /// The element's bounding box, queried once and cached.
    pub fn bbox(&self) -> BBox {
        if let Some(bbox) = self.bbox.borrow().as_ref() {
            return bbox.clone();
        }
        let bbox = BBox::new(self, format!("{}_bbox", self.name));
        *self.bbox.borrow_mut() = Some(bbox.clone());
        bbox
    }

    /// Like [`Element::bbox`] but stored in a variable of the caller's choosing.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad variable name.
    pub fn bbox_named(&self, name: &str) -> Result<BBox, RafaError> {
        if !is_js_identifier(name) {
            return Err(RafaError::InvalidIdentifier(name.to_owned()));
        }
        let bbox = BBox::new(self, name.to_owned());
        *self.bbox.borrow_mut() = Some(bbox.clone());
        Ok(bbox)
    }

    /// Re-query the bounding box after a move or resize.
    pub fn reload_bbox(&self) -> BBox {
        let cached = self.bbox.borrow().clone();
        match cached {
            Some(bbox) => {
                bbox.update();
                bbox
            }
            None => self.bbox(),
        }
    }

    /// `el.animate({...}, ms);` with an optional completion callback body.
    pub fn animate(&self, seconds: f64, attrs: &Attrs, callback: Option<&str>) -> &Self {
        let mut animation = Animation::new(self, seconds);
        for (name, value) in attrs.iter() {
            animation.attr(name, value.clone());
        }
        if let Some(body) = callback {
            animation.on_finish(body);
        }
        self.script.push(animation.call_statement());
        self
    }

    /// Build an animation chain and emit it as an immediately invoked function.
    pub fn animate_with(&self, seconds: f64, build: impl FnOnce(&mut Animation)) -> &Self {
        let mut animation = Animation::new(self, seconds);
        build(&mut animation);
        self.script.push(animation.output());
        self
    }

    /// Run an animation now and again every `seconds`.
    pub fn every(&self, seconds: f64, build: impl FnOnce(&mut Animation)) -> &Self {
        let mut animation = Animation::new(self, seconds);
        build(&mut animation);
        self.script.push(format!(
            "(function {LOOP_NAME_PREFIX}() {{ {} setTimeout({LOOP_NAME_PREFIX}, {}); }})();",
            animation.output(),
            animation.duration_ms().to_js()
        ));
        self
    }
}
