//! Declarative scene documents.
//!
//! A scene describes one canvas and an ordered list of elements in YAML or
//! JSON. Rendering replays the description through the canvas API, so a scene
//! produces exactly the statements the equivalent Rust calls would.
//!
//! ```yaml
//! canvas: { container: holder, width: 320, height: 200 }
//! elements:
//!   - kind: circle
//!     id: sun
//!     cx: 50
//!     cy: 50
//!     r: 20
//!     attrs: { fill: "#fc0" }
//!     animation: { seconds: 2, attrs: { r: 30 }, repeat: true }
//! ```

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::animation::Animation;
use crate::attributes::Attrs;
use crate::canvas::{Canvas, CanvasTarget};
use crate::config::RafaConfig;
use crate::element::{Angle, Element};
use crate::error::RafaError;
use crate::js::{JsLiteral, JsValue};
use crate::path::{Corner, PathBuilder, validate_path_data};

/// Input syntax of a scene document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Yaml,
    Json,
}

impl SceneFormat {
    /// Guess the format from a file extension; `None` when unrecognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A canvas and its elements.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub canvas: CanvasDef,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

/// Canvas placement: inside `container` when given, else at `x`, `y`.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasDef {
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Explicit variable name for the paper.
    #[serde(default)]
    pub name: Option<String>,
}

impl CanvasDef {
    #[must_use]
    pub fn target(&self) -> CanvasTarget {
        match &self.container {
            Some(id) => CanvasTarget::container(id.clone(), self.width, self.height),
            None => CanvasTarget::position(self.x, self.y, self.width, self.height),
        }
    }
}

/// One element with its attributes, transforms and animation.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDef {
    #[serde(flatten)]
    pub shape: ShapeDef,
    #[serde(default)]
    pub id: Option<String>,
    /// Attribute values; an object `{ "js": "<expr>" }` is a verbatim expression.
    #[serde(default)]
    pub attrs: Map<String, Value>,
    /// `- rotate: { angle: 45 }` or a bare `- to_front`, in YAML as in JSON.
    #[serde(default, deserialize_with = "serde_yaml::with::singleton_map_recursive::deserialize")]
    pub transforms: Vec<TransformDef>,
    #[serde(default)]
    pub animation: Option<AnimationDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeDef {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        radius: Option<f64>,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
    },
    Image {
        src: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Path {
        /// Raw path data; prefixed to `commands` when both are given.
        #[serde(default)]
        d: Option<String>,
        #[serde(default)]
        commands: Vec<PathCommand>,
    },
    Set {
        /// Ids of elements declared earlier in the scene.
        members: Vec<String>,
    },
}

/// Path builder calls, tagged by `op`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    Relative,
    Absolute,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QcurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQcurveTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        #[serde(default)]
        rotation: f64,
        #[serde(default)]
        large_arc: bool,
        #[serde(default)]
        sweep: bool,
        x: f64,
        y: f64,
    },
    CplineTo {
        x: f64,
        y: f64,
        #[serde(default)]
        width: Option<f64>,
    },
    Corner {
        radius: f64,
        direction: String,
    },
    Close,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformDef {
    Rotate {
        angle: f64,
        #[serde(default)]
        radians: bool,
        #[serde(default = "default_true")]
        absolute: bool,
        /// Rotate around this point instead of the element center.
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    Translate {
        dx: f64,
        dy: f64,
    },
    Scale {
        sx: f64,
        sy: f64,
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    ToFront,
    ToBack,
}

/// An animation and, through `then`, the animations chained after it.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDef {
    pub seconds: f64,
    #[serde(default)]
    pub attrs: Map<String, Value>,
    /// JavaScript run when the animation completes.
    #[serde(default)]
    pub callback: Option<String>,
    #[serde(default)]
    pub then: Option<Box<AnimationDef>>,
    /// Restart every `seconds` (top-level animation only).
    #[serde(default)]
    pub repeat: bool,
}

fn default_true() -> bool {
    true
}

/// Parse a scene document.
///
/// # Errors
///
/// Returns [`RafaError::Yaml`] or [`RafaError::Json`] when the text does not
/// match the scene schema.
pub fn parse_scene(text: &str, format: SceneFormat) -> Result<Scene, RafaError> {
    let scene = match format {
        SceneFormat::Yaml => serde_yaml::from_str(text)?,
        SceneFormat::Json => serde_json::from_str(text)?,
    };
    Ok(scene)
}

/// Replay a scene through the canvas API.
///
/// # Errors
///
/// Returns [`RafaError::Scene`] for duplicate ids or unknown set members,
/// plus any error raised while creating the canvas or its elements.
pub fn render_scene(scene: &Scene, config: &RafaConfig) -> Result<Canvas, RafaError> {
    let target = scene.canvas.target();
    let canvas = match &scene.canvas.name {
        Some(name) => Canvas::named(target, name, config)?,
        None => Canvas::with_config(target, config)?,
    };

    let mut by_id: HashMap<String, Element> = HashMap::new();
    for (index, def) in scene.elements.iter().enumerate() {
        let element = build_element(&canvas, def, &by_id)
            .map_err(|e| annotate(e, index, def.id.as_deref()))?;
        apply_transforms(&element, &def.transforms);
        if let Some(animation) = &def.animation {
            apply_animation(&element, animation);
        }
        if let Some(id) = &def.id {
            by_id.insert(id.clone(), element);
        }
    }
    tracing::debug!(canvas = %canvas.name(), elements = scene.elements.len(), "scene rendered");
    Ok(canvas)
}

fn annotate(err: RafaError, index: usize, id: Option<&str>) -> RafaError {
    match err {
        RafaError::Scene(msg) => {
            let label = id.map_or_else(|| format!("element #{index}"), |id| format!("element '{id}'"));
            RafaError::Scene(format!("{label}: {msg}"))
        }
        other => other,
    }
}

fn build_element(canvas: &Canvas, def: &ElementDef, by_id: &HashMap<String, Element>) -> Result<Element, RafaError> {
    let mut attrs = to_attrs(&def.attrs);
    if let Some(id) = &def.id {
        if by_id.contains_key(id) {
            return Err(RafaError::Scene(format!("duplicate element id '{id}'")));
        }
        attrs = attrs.id(id.clone());
    }

    match &def.shape {
        ShapeDef::Circle { cx, cy, r } => canvas.circle(*cx, *cy, *r, &attrs),
        ShapeDef::Rect { x, y, width, height, radius } => canvas.rect(*x, *y, *width, *height, *radius, &attrs),
        ShapeDef::Ellipse { cx, cy, rx, ry } => canvas.ellipse(*cx, *cy, *rx, *ry, &attrs),
        ShapeDef::Text { x, y, text } => canvas.text(*x, *y, text, &attrs),
        ShapeDef::Image { src, x, y, width, height } => canvas.image(src, *x, *y, *width, *height, &attrs),
        ShapeDef::Path { d, commands } => {
            let initial = d.as_deref().unwrap_or("");
            if commands.is_empty() {
                return canvas.path_data(initial, &attrs);
            }
            validate_path_data(initial)?;
            let corners = commands
                .iter()
                .filter_map(|c| match c {
                    PathCommand::Corner { direction, .. } => Some(direction.parse::<Corner>()),
                    _ => None,
                })
                .collect::<Result<Vec<_>, _>>()?;
            canvas.path(initial, &attrs, |p| replay_path(p, commands, &corners))
        }
        ShapeDef::Set { members } => {
            let resolved = members
                .iter()
                .map(|m| {
                    by_id
                        .get(m)
                        .ok_or_else(|| RafaError::Scene(format!("unknown set member '{m}'")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            canvas.set(&resolved, &attrs)
        }
    }
}

/// Apply path commands; `corners` holds the pre-parsed corner directions in order.
fn replay_path(p: &mut PathBuilder, commands: &[PathCommand], corners: &[Corner]) {
    let mut corners = corners.iter();
    for command in commands {
        match command {
            PathCommand::Relative => p.relatively(),
            PathCommand::Absolute => p.absolutely(),
            PathCommand::MoveTo { x, y } => p.move_to(*x, *y),
            PathCommand::LineTo { x, y } => p.line_to(*x, *y),
            PathCommand::CurveTo { x1, y1, x2, y2, x, y } => p.curve_to(*x1, *y1, *x2, *y2, *x, *y),
            PathCommand::SmoothCurveTo { x2, y2, x, y } => p.smooth_curve_to(*x2, *y2, *x, *y),
            PathCommand::QcurveTo { x1, y1, x, y } => p.qcurve_to(*x1, *y1, *x, *y),
            PathCommand::SmoothQcurveTo { x, y } => p.smooth_qcurve_to(*x, *y),
            PathCommand::ArcTo { rx, ry, rotation, large_arc, sweep, x, y } => {
                p.arc_to(*rx, *ry, *rotation, *large_arc, *sweep, *x, *y)
            }
            PathCommand::CplineTo { x, y, width } => p.cpline_to(*x, *y, *width),
            PathCommand::Corner { radius, .. } => match corners.next() {
                Some(corner) => p.rounded_corner(*radius, *corner),
                None => &mut *p,
            },
            PathCommand::Close => p.close(),
        };
    }
}

fn apply_transforms(element: &Element, transforms: &[TransformDef]) {
    for transform in transforms {
        match transform {
            TransformDef::Rotate { angle, radians, absolute, center } => {
                let angle = if *radians { Angle::Radians(*angle) } else { Angle::Degrees(*angle) };
                match center {
                    Some([cx, cy]) => element.rotate_about(angle, *cx, *cy),
                    None => element.rotate(angle, *absolute),
                };
            }
            TransformDef::Translate { dx, dy } => {
                element.translate(*dx, *dy);
            }
            TransformDef::Scale { sx, sy, center } => {
                match center {
                    Some([cx, cy]) => element.scale_about(*sx, *sy, *cx, *cy),
                    None => element.scale(*sx, *sy),
                };
            }
            TransformDef::ToFront => {
                element.to_front();
            }
            TransformDef::ToBack => {
                element.to_back();
            }
        }
    }
}

fn apply_animation(element: &Element, def: &AnimationDef) {
    if def.repeat {
        element.every(def.seconds, |a| fill_animation(a, def));
    } else if def.then.is_some() {
        element.animate_with(def.seconds, |a| fill_animation(a, def));
    } else {
        element.animate(def.seconds, &to_attrs(&def.attrs), def.callback.as_deref());
    }
}

fn fill_animation(animation: &mut Animation, def: &AnimationDef) {
    for (name, value) in to_attrs(&def.attrs).iter() {
        animation.attr(name, value.clone());
    }
    if let Some(body) = &def.callback {
        animation.on_finish(body);
    }
    if let Some(next) = &def.then {
        animation.after(next.seconds, |n| fill_animation(n, next));
    }
}

fn to_attrs(map: &Map<String, Value>) -> Attrs {
    let mut attrs = Attrs::new();
    for (name, value) in map {
        attrs.insert(name, to_js_value(value));
    }
    attrs
}

/// Like `JsValue::from`, but `{ "js": "<expr>" }` becomes a literal at any depth.
fn to_js_value(value: &Value) -> JsValue {
    match value {
        Value::Object(obj) => match obj.get("js") {
            Some(Value::String(expr)) if obj.len() == 1 => JsValue::Literal(JsLiteral::new(expr.clone())),
            _ => JsValue::Object(obj.iter().map(|(k, v)| (k.clone(), to_js_value(v))).collect()),
        },
        Value::Array(items) => JsValue::Array(items.iter().map(to_js_value).collect()),
        other => JsValue::from(other.clone()),
    }
}
