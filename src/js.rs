//! JavaScript values and verbatim expressions.
//!
//! Values passed to generated calls are serialized as JSON, except
//! [`JsLiteral`]s which are written out as-is. This is how the output of one
//! statement (a bounding-box field, a node variable) is fed back into later
//! statements without being quoted.

use std::fmt;

#[cfg(test)]
#[path = "js_test.rs"]
mod js_test;

/// A JavaScript expression printed verbatim, e.g. `(new Date()).getSeconds()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsLiteral(String);

impl JsLiteral {
    /// Wrap a JavaScript expression.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// The wrapped expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`JsLiteral::new`].
#[must_use]
pub fn js_literal(expr: impl Into<String>) -> JsLiteral {
    JsLiteral::new(expr)
}

/// A value that can appear as an argument in generated JavaScript.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<JsValue>),
    /// Object with keys in insertion order.
    Object(Vec<(String, JsValue)>),
    Literal(JsLiteral),
}

impl JsValue {
    /// Serialize as JavaScript source.
    #[must_use]
    pub fn to_js(&self) -> String {
        let mut out = String::new();
        self.write_js(&mut out);
        out
    }

    fn write_js(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Number(n) => out.push_str(&format_number(*n)),
            Self::Str(s) => out.push_str(&quote(s)),
            Self::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_js(out);
                }
                out.push(']');
            }
            Self::Object(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&quote(key));
                    out.push(':');
                    value.write_js(out);
                }
                out.push('}');
            }
            Self::Literal(lit) => out.push_str(lit.as_str()),
        }
    }
}

/// Join values into a call argument list: `a, b, c`.
#[must_use]
pub fn js_args(values: &[JsValue]) -> String {
    values
        .iter()
        .map(JsValue::to_js)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a number the way a person would write it in JavaScript.
///
/// Integral values drop the fractional part; `NaN` and infinities use the
/// JavaScript globals of the same name.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        // Exact: |n| < 2^53 and integral.
        #[allow(clippy::cast_possible_truncation)]
        let int = n as i64;
        return int.to_string();
    }
    n.to_string()
}

/// JSON-quote a string, escaping `</` so the result cannot terminate an
/// enclosing `<script>` element.
#[must_use]
pub fn quote(s: &str) -> String {
    let json = serde_json::Value::String(s.to_owned()).to_string();
    json.replace("</", "<\\/")
}

impl From<bool> for JsValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for JsValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for JsValue {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i32> for JsValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for JsValue {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for JsValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for JsValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for JsValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<JsLiteral> for JsValue {
    fn from(v: JsLiteral) -> Self {
        Self::Literal(v)
    }
}

impl<T: Into<JsValue>> From<Vec<T>> for JsValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for JsValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}
