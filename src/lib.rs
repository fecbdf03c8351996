//! JavaScript generator for the Raphael.js vector graphics library.
//!
//! Rust code describes a drawing surface and the elements on it; every call
//! is translated into one JavaScript statement appended to the canvas's
//! statement buffer. The buffer is finally serialized as a script block that
//! a web page can embed next to the Raphael runtime.
//!
//! ```
//! use rafa::{Attrs, Canvas, CanvasTarget};
//!
//! let canvas = Canvas::new(CanvasTarget::container("holder", 320, 200))?;
//! let dot = canvas.circle(50.0, 40.0, 10.0, &Attrs::new().set("fill", "#f00"))?;
//! dot.translate(10.0, 0.0).to_front();
//! let script = canvas.to_script();
//! assert!(script.contains(".circle(50, 40, 10);"));
//! # Ok::<(), rafa::RafaError>(())
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`canvas`] | Canvas factory and the shared statement buffer |
//! | [`element`] | Element handles: attributes, transforms, z-order |
//! | [`bbox`] | Proxy for `getBBox()` results |
//! | [`path`] | SVG path-data builder with cursor tracking |
//! | [`animation`] | `animate()` call chains and repeating loops |
//! | [`attributes`] | Known Raphael attribute names and [`Attrs`] |
//! | [`js`] | JavaScript values and literal expressions |
//! | [`scene`] | Declarative YAML/JSON scene documents |
//! | [`config`] | Runtime configuration and uid strategies |
//! | [`error`] | Error type shared by the crate |
//! | [`consts`] | Shared constants |

pub mod animation;
pub mod attributes;
pub mod bbox;
pub mod canvas;
pub mod config;
pub mod consts;
pub mod element;
pub mod error;
pub mod js;
pub mod path;
pub mod scene;

pub use animation::Animation;
pub use attributes::Attrs;
pub use bbox::BBox;
pub use canvas::{Canvas, CanvasTarget, canvas};
pub use config::{RafaConfig, UidStrategy};
pub use element::{Angle, Element, ElementKind};
pub use error::{ErrorCode, RafaError};
pub use js::{JsLiteral, JsValue, js_literal};
pub use path::{Corner, PathBuilder};
pub use scene::{Scene, SceneFormat, parse_scene, render_scene};
