//! Canvas factory and the statement buffer shared with its elements.
//!
//! A [`Canvas`] corresponds to one `new Raphael(...)` paper. Every element
//! created on it holds a handle to the same append-only buffer, so calls on
//! any element land in the canvas's script in call order.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::attributes::Attrs;
use crate::config::{RafaConfig, UidStrategy};
use crate::consts::{CANVAS_NAME_PREFIX, ELEMENT_NAME_PREFIX};
use crate::element::{Element, ElementKind};
use crate::error::{RafaError, is_js_identifier};
use crate::js::{JsValue, js_args};
use crate::path::{PathBuilder, validate_path_data};

/// Append-only statement buffer plus the uid source for names in it.
pub(crate) struct Script {
    statements: RefCell<Vec<String>>,
    sequence: Cell<u64>,
    uid: UidStrategy,
}

impl Script {
    fn new(uid: UidStrategy) -> Self {
        Self { statements: RefCell::new(Vec::new()), sequence: Cell::new(0), uid }
    }

    pub(crate) fn push(&self, statement: impl Into<String>) {
        self.statements.borrow_mut().push(statement.into());
    }

    pub(crate) fn next_uid(&self) -> String {
        let next = self.sequence.get() + 1;
        self.sequence.set(next);
        self.uid.generate(next)
    }

    fn snapshot(&self) -> Vec<String> {
        self.statements.borrow().clone()
    }
}

/// Where the Raphael paper is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasTarget {
    /// Inside the DOM element with this id: `new Raphael("id", w, h)`.
    Container { id: String, width: u32, height: u32 },
    /// At absolute page coordinates: `new Raphael(x, y, w, h)`.
    Position { x: i32, y: i32, width: u32, height: u32 },
}

impl CanvasTarget {
    #[must_use]
    pub fn container(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self::Container { id: id.into(), width, height }
    }

    #[must_use]
    pub fn position(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::Position { x, y, width, height }
    }

    fn validate(&self) -> Result<(), RafaError> {
        let (width, height) = match self {
            Self::Container { id, width, height } => {
                if id.trim().is_empty() {
                    return Err(RafaError::InvalidContainer);
                }
                (*width, *height)
            }
            Self::Position { width, height, .. } => (*width, *height),
        };
        if width == 0 || height == 0 {
            return Err(RafaError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    fn constructor_args(&self) -> Vec<JsValue> {
        match self {
            Self::Container { id, width, height } => {
                vec![id.as_str().into(), (*width).into(), (*height).into()]
            }
            Self::Position { x, y, width, height } => {
                vec![(*x).into(), (*y).into(), (*width).into(), (*height).into()]
            }
        }
    }
}

/// A Raphael paper and the statements generated against it.
pub struct Canvas {
    name: String,
    target: CanvasTarget,
    script: Rc<Script>,
}

impl Canvas {
    /// Create a canvas with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidContainer`] for an empty container id and
    /// [`RafaError::InvalidDimensions`] for a zero width or height.
    pub fn new(target: CanvasTarget) -> Result<Self, RafaError> {
        Self::with_config(target, &RafaConfig::default())
    }

    /// Create a canvas whose generated names follow `config.uid`.
    ///
    /// # Errors
    ///
    /// Same as [`Canvas::new`].
    pub fn with_config(target: CanvasTarget, config: &RafaConfig) -> Result<Self, RafaError> {
        target.validate()?;
        let script = Rc::new(Script::new(config.uid.clone()));
        let name = format!("{CANVAS_NAME_PREFIX}{}", script.next_uid());
        tracing::debug!(canvas = %name, "canvas created");
        Ok(Self { name, target, script })
    }

    /// Create a canvas bound to an explicit variable name.
    ///
    /// Useful with [`UidStrategy::Sequential`], whose counter is per canvas:
    /// two canvases on one page need distinct names.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] when `name` is not a valid
    /// JavaScript identifier, plus the errors of [`Canvas::new`].
    pub fn named(target: CanvasTarget, name: &str, config: &RafaConfig) -> Result<Self, RafaError> {
        if !is_js_identifier(name) {
            return Err(RafaError::InvalidIdentifier(name.to_owned()));
        }
        target.validate()?;
        let script = Rc::new(Script::new(config.uid.clone()));
        tracing::debug!(canvas = %name, "canvas created");
        Ok(Self { name: name.to_owned(), target, script })
    }

    /// JavaScript variable holding the paper.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target(&self) -> &CanvasTarget {
        &self.target
    }

    /// The `new Raphael(...)` expression.
    #[must_use]
    pub fn constructor(&self) -> String {
        format!("new Raphael({})", js_args(&self.target.constructor_args()))
    }

    /// Append a raw JavaScript statement.
    pub fn push(&self, statement: impl Into<String>) {
        self.script.push(statement);
    }

    /// Statements generated so far, in order.
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        self.script.snapshot()
    }

    /// `var <name> = <paper>.circle(cx, cy, r);`
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn circle(&self, cx: f64, cy: f64, r: f64, attrs: &Attrs) -> Result<Element, RafaError> {
        self.create(ElementKind::Circle, &[cx.into(), cy.into(), r.into()], attrs)
    }

    /// `var <name> = <paper>.rect(x, y, w, h, radius);` with radius defaulting to 0.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn rect(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: Option<f64>,
        attrs: &Attrs,
    ) -> Result<Element, RafaError> {
        let radius = radius.unwrap_or(0.0);
        self.create(ElementKind::Rect, &[x.into(), y.into(), width.into(), height.into(), radius.into()], attrs)
    }

    /// `var <name> = <paper>.ellipse(cx, cy, rx, ry);`
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn ellipse(&self, cx: f64, cy: f64, rx: f64, ry: f64, attrs: &Attrs) -> Result<Element, RafaError> {
        self.create(ElementKind::Ellipse, &[cx.into(), cy.into(), rx.into(), ry.into()], attrs)
    }

    /// `var <name> = <paper>.text(x, y, "text");`
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn text(&self, x: f64, y: f64, text: &str, attrs: &Attrs) -> Result<Element, RafaError> {
        self.create(ElementKind::Text, &[x.into(), y.into(), text.into()], attrs)
    }

    /// `var <name> = <paper>.image("src", x, y, w, h);`
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn image(
        &self,
        src: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attrs: &Attrs,
    ) -> Result<Element, RafaError> {
        self.create(ElementKind::Image, &[src.into(), x.into(), y.into(), width.into(), height.into()], attrs)
    }

    /// Build path data starting from `initial` and create a path element.
    ///
    /// ```
    /// # use rafa::{Attrs, Canvas, CanvasTarget};
    /// let canvas = Canvas::new(CanvasTarget::container("holder", 100, 100))?;
    /// canvas.path("", &Attrs::new(), |p| {
    ///     p.move_to(10.0, 10.0).line_to(50.0, 100.0).line_to(100.0, 50.0).close();
    /// })?;
    /// assert!(canvas.statements()[0].ends_with(".path(\"M10 10 L50 100 L100 50 z\");"));
    /// # Ok::<(), rafa::RafaError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidPath`] when the built data does not parse
    /// (a malformed `initial`, or a non-finite coordinate), and
    /// [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn path(&self, initial: &str, attrs: &Attrs, build: impl FnOnce(&mut PathBuilder)) -> Result<Element, RafaError> {
        let mut builder = PathBuilder::new(initial);
        build(&mut builder);
        let data = builder.result();
        validate_path_data(&data)?;
        self.create(ElementKind::Path, &[data.into()], attrs)
    }

    /// Create a path element from raw SVG path data.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::InvalidPath`] when `data` does not parse, and
    /// [`RafaError::InvalidIdentifier`] for a bad explicit id.
    pub fn path_data(&self, data: &str, attrs: &Attrs) -> Result<Element, RafaError> {
        validate_path_data(data)?;
        self.create(ElementKind::Path, &[data.into()], attrs)
    }

    /// Group elements of this canvas into a Raphael set.
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::ForeignElement`] if a member was created on a
    /// different canvas, and [`RafaError::InvalidIdentifier`] for a bad
    /// explicit id.
    pub fn set(&self, members: &[&Element], attrs: &Attrs) -> Result<Element, RafaError> {
        if let Some(foreign) = members.iter().find(|m| !m.belongs_to(&self.script)) {
            return Err(RafaError::ForeignElement { element: foreign.name().to_owned() });
        }
        let name = self.element_name(ElementKind::Set, attrs)?;
        self.script.push(format!("var {name} = {}.set();", self.name));
        if !members.is_empty() {
            let names = members.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ");
            self.script.push(format!("{name}.push({names});"));
        }
        let element = Element::new(name, ElementKind::Set, Rc::clone(&self.script));
        element.apply_attributes(attrs);
        tracing::debug!(element = %element.name(), members = members.len(), "set created");
        Ok(element)
    }

    /// The whole script: paper construction followed by every statement.
    #[must_use]
    pub fn to_script(&self) -> String {
        let mut out = format!("var {} = {};", self.name, self.constructor());
        for statement in self.script.snapshot() {
            out.push('\n');
            out.push_str(&statement);
        }
        out
    }

    /// The script wrapped in a `<script>` element with a CDATA guard.
    #[must_use]
    pub fn javascript_tag(&self) -> String {
        javascript_tag(&self.to_script())
    }

    fn create(&self, kind: ElementKind, args: &[JsValue], attrs: &Attrs) -> Result<Element, RafaError> {
        let name = self.element_name(kind, attrs)?;
        self.script
            .push(format!("var {name} = {}.{}({});", self.name, kind.as_str(), js_args(args)));
        let element = Element::new(name, kind, Rc::clone(&self.script));
        element.apply_attributes(attrs);
        tracing::debug!(element = %element.name(), kind = kind.as_str(), "element created");
        Ok(element)
    }

    fn element_name(&self, kind: ElementKind, attrs: &Attrs) -> Result<String, RafaError> {
        match attrs.element_id() {
            Some(id) if is_js_identifier(id) => Ok(id.to_owned()),
            Some(id) => Err(RafaError::InvalidIdentifier(id.to_owned())),
            None => Ok(format!("{ELEMENT_NAME_PREFIX}_{}_{}", kind.as_str(), self.script.next_uid())),
        }
    }
}

/// Escape text for an HTML attribute value or element body.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap JavaScript source in a `<script>` element.
#[must_use]
pub fn javascript_tag(source: &str) -> String {
    format!("<script type=\"text/javascript\">\n//<![CDATA[\n{source}\n//]]>\n</script>")
}

/// Build a canvas, let `build` draw on it, and return the script tag.
///
/// # Errors
///
/// Propagates errors from canvas creation and from `build`.
pub fn canvas(
    target: CanvasTarget,
    build: impl FnOnce(&Canvas) -> Result<(), RafaError>,
) -> Result<String, RafaError> {
    let canvas = Canvas::new(target)?;
    build(&canvas)?;
    Ok(canvas.javascript_tag())
}
