//! Animation call chains.
//!
//! Raphael's `animate(attrs, ms, callback)` starts the callback when the
//! animation finishes. Chaining is expressed by nesting: the callback of one
//! animation is the function that starts the next one.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::attributes::{Attrs, checked_attribute};
use crate::consts::MS_PER_SECOND;
use crate::element::{Angle, Element};
use crate::js::{JsValue, format_number};

/// One `animate()` call, optionally followed by a chained animation.
#[derive(Debug, Clone)]
pub struct Animation {
    target: String,
    seconds: f64,
    attrs: Attrs,
    callback: Option<String>,
    chained: Option<Box<Animation>>,
}

impl Animation {
    /// An animation of `element` lasting `seconds`.
    #[must_use]
    pub fn new(element: &Element, seconds: f64) -> Self {
        Self::for_target(element.name(), seconds)
    }

    fn for_target(target: &str, seconds: f64) -> Self {
        Self { target: target.to_owned(), seconds, attrs: Attrs::new(), callback: None, chained: None }
    }

    /// Attribute value the element animates to.
    pub fn attr(&mut self, name: &str, value: impl Into<JsValue>) -> &mut Self {
        let key = checked_attribute(name, &self.target);
        self.attrs.insert(&key, value.into());
        self
    }

    /// Animate a translation, expressed as Raphael's `translation` attribute.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.attr("translation", format!("{},{}", format_number(dx), format_number(dy)))
    }

    /// Animate a scale, expressed as Raphael's `scale` attribute.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.attr("scale", format!("{},{}", format_number(sx), format_number(sy)))
    }

    /// Animate a rotation, expressed as Raphael's `rotation` attribute.
    pub fn rotate(&mut self, angle: impl Into<Angle>) -> &mut Self {
        self.attr("rotation", angle.into().to_js_value())
    }

    /// JavaScript run when this animation completes.
    pub fn on_finish(&mut self, body: &str) -> &mut Self {
        self.callback = Some(format!("(function() {{ {body} }})"));
        self
    }

    /// Start another animation of the same element when this one completes.
    pub fn after(&mut self, seconds: f64, build: impl FnOnce(&mut Animation)) -> &mut Self {
        let mut next = Self::for_target(&self.target, seconds);
        build(&mut next);
        self.chained = Some(Box::new(next));
        self
    }

    #[must_use]
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Duration in whole milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> JsValue {
        JsValue::Number((self.seconds * MS_PER_SECOND).round())
    }

    fn callback_function(&self) -> Option<String> {
        match (&self.chained, &self.callback) {
            (Some(next), Some(callback)) => {
                Some(format!("(function() {{ {}(); {callback}(); }})", next.function_str()))
            }
            (Some(next), None) => Some(next.function_str()),
            (None, Some(callback)) => Some(callback.clone()),
            (None, None) => None,
        }
    }

    fn animate_call(&self) -> String {
        let mut call = format!("{}.animate({}, {}", self.target, self.attrs.to_object().to_js(), self.duration_ms().to_js());
        if let Some(callback) = self.callback_function() {
            call.push_str(", ");
            call.push_str(&callback);
        }
        call.push(')');
        call
    }

    /// `el.animate({...}, ms[, callback]);` as a bare statement.
    #[must_use]
    pub fn call_statement(&self) -> String {
        format!("{};", self.animate_call())
    }

    /// The animation wrapped in an anonymous function expression.
    #[must_use]
    pub fn function_str(&self) -> String {
        format!("(function() {{ {}; }})", self.animate_call())
    }

    /// The function expression invoked immediately.
    #[must_use]
    pub fn output(&self) -> String {
        format!("{}();", self.function_str())
    }
}
