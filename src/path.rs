//! SVG path-data builder.
//!
//! Commands are emitted in absolute (`M`, `L`, ...) or relative (`m`, `l`,
//! ...) form depending on the current mode. The builder tracks the current
//! point and the last control point so the compound commands ([`PathBuilder::cpline_to`],
//! [`PathBuilder::rounded_corner`], smooth curves) can be expressed in either mode.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::ROUNDED_CORNER_KAPPA;
use crate::error::RafaError;

/// Whether coordinates are absolute or relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    #[default]
    Absolute,
    Relative,
}

/// Absolute position of the pen and of the last control point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    /// Last control point, used to reflect smooth curves.
    pub bx: f64,
    pub by: f64,
}

/// Direction of a rounded corner: the first letter is the direction the
/// stroke comes from, the second the direction it turns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Self::LeftUp,
        Self::LeftDown,
        Self::RightUp,
        Self::RightDown,
        Self::UpRight,
        Self::UpLeft,
        Self::DownRight,
        Self::DownLeft,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftUp => "lu",
            Self::LeftDown => "ld",
            Self::RightUp => "ru",
            Self::RightDown => "rd",
            Self::UpRight => "ur",
            Self::UpLeft => "ul",
            Self::DownRight => "dr",
            Self::DownLeft => "dl",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = RafaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| RafaError::InvalidCorner(s.to_owned()))
    }
}

/// Accumulates SVG path commands.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    initial: String,
    segments: Vec<String>,
    mode: PathMode,
    last: Cursor,
    subpath_start: (f64, f64),
    /// Whether `last.bx`/`last.by` came from a `Q` or `T` command.
    quadratic: bool,
}

impl PathBuilder {
    /// A builder whose output starts with `initial` (may be empty).
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self { initial: initial.trim().to_owned(), ..Self::default() }
    }

    /// Switch to relative coordinates for subsequent commands.
    pub fn relatively(&mut self) -> &mut Self {
        self.mode = PathMode::Relative;
        self
    }

    /// Switch to absolute coordinates for subsequent commands.
    pub fn absolutely(&mut self) -> &mut Self {
        self.mode = PathMode::Absolute;
        self
    }

    #[must_use]
    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// The tracked pen position and last control point, in absolute terms.
    #[must_use]
    pub fn current_point(&self) -> Cursor {
        self.last
    }

    /// `M`/`m`: move the pen without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.emit('M', &[x, y]);
        let (ax, ay) = self.resolve(x, y);
        self.subpath_start = (ax, ay);
        self.advance(ax, ay, ax, ay);
        self
    }

    /// `L`/`l`: straight line.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.emit('L', &[x, y]);
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, ax, ay);
        self
    }

    /// `C`/`c`: cubic Bezier curve with two control points.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.emit('C', &[x1, y1, x2, y2, x, y]);
        let (bx, by) = self.resolve(x2, y2);
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, bx, by);
        self
    }

    /// `S`/`s`: cubic Bezier whose first control point mirrors the previous one.
    pub fn smooth_curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.emit('S', &[x2, y2, x, y]);
        let (bx, by) = self.resolve(x2, y2);
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, bx, by);
        self
    }

    /// `Q`/`q`: quadratic Bezier curve.
    pub fn qcurve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> &mut Self {
        self.emit('Q', &[x1, y1, x, y]);
        let (bx, by) = self.resolve(x1, y1);
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, bx, by);
        self.quadratic = true;
        self
    }

    /// `T`/`t`: quadratic Bezier whose control point mirrors the previous
    /// quadratic one, or sits on the pen after any other command.
    pub fn smooth_qcurve_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.emit('T', &[x, y]);
        let (bx, by) = if self.quadratic {
            (2.0 * self.last.x - self.last.bx, 2.0 * self.last.y - self.last.by)
        } else {
            (self.last.x, self.last.y)
        };
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, bx, by);
        self.quadratic = true;
        self
    }

    /// `A`/`a`: elliptical arc.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.emit('A', &[rx, ry, x_rotation, flag(large_arc), flag(sweep), x, y]);
        let (ax, ay) = self.resolve(x, y);
        self.advance(ax, ay, ax, ay);
        self
    }

    /// A wave-shaped cubic curve to `(x, y)`.
    ///
    /// The first control point sits `width` to the right of the pen and the
    /// second `width` to the left of the target. Without a width this is a
    /// plain [`PathBuilder::line_to`].
    pub fn cpline_to(&mut self, x: f64, y: f64, width: Option<f64>) -> &mut Self {
        let Some(w) = width else {
            return self.line_to(x, y);
        };
        let (x1, y1) = match self.mode {
            PathMode::Absolute => (self.last.x + w, self.last.y),
            PathMode::Relative => (w, 0.0),
        };
        self.curve_to(x1, y1, x - w, y, x, y)
    }

    /// A quarter-circle corner of `radius`, always drawn relative to the pen.
    /// The current mode is restored afterwards.
    pub fn rounded_corner(&mut self, radius: f64, corner: Corner) -> &mut Self {
        let r = ROUNDED_CORNER_KAPPA * radius;
        let saved = self.mode;
        self.mode = PathMode::Relative;
        match corner {
            Corner::LeftUp => self.curve_to(-r, 0.0, -radius, -(radius - r), -radius, -radius),
            Corner::LeftDown => self.curve_to(-r, 0.0, -radius, radius - r, -radius, radius),
            Corner::RightUp => self.curve_to(r, 0.0, radius, -(radius - r), radius, -radius),
            Corner::RightDown => self.curve_to(r, 0.0, radius, radius - r, radius, radius),
            Corner::UpRight => self.curve_to(0.0, -r, -(r - radius), -radius, radius, -radius),
            Corner::UpLeft => self.curve_to(0.0, -r, r - radius, -radius, -radius, -radius),
            Corner::DownRight => self.curve_to(0.0, r, -(r - radius), radius, radius, radius),
            Corner::DownLeft => self.curve_to(0.0, r, r - radius, radius, -radius, radius),
        };
        self.mode = saved;
        self
    }

    /// `z`: close the current subpath; the pen returns to its start.
    pub fn close(&mut self) -> &mut Self {
        self.segments.push("z".to_owned());
        let (sx, sy) = self.subpath_start;
        self.advance(sx, sy, sx, sy);
        self
    }

    /// The path data: the initial path followed by every command.
    #[must_use]
    pub fn result(&self) -> String {
        let commands = self.segments.join(" ");
        match (self.initial.is_empty(), commands.is_empty()) {
            (true, _) => commands,
            (false, true) => self.initial.clone(),
            (false, false) => format!("{} {commands}", self.initial),
        }
    }

    fn emit(&mut self, absolute: char, args: &[f64]) {
        let command = match self.mode {
            PathMode::Absolute => absolute,
            PathMode::Relative => absolute.to_ascii_lowercase(),
        };
        let args = args.iter().map(|v| format_coord(*v)).collect::<Vec<_>>().join(" ");
        self.segments.push(format!("{command}{args}"));
    }

    /// Absolute position of a point given in the current mode.
    fn resolve(&self, x: f64, y: f64) -> (f64, f64) {
        match self.mode {
            PathMode::Absolute => (x, y),
            PathMode::Relative => (self.last.x + x, self.last.y + y),
        }
    }

    fn advance(&mut self, x: f64, y: f64, bx: f64, by: f64) {
        self.last = Cursor { x, y, bx, by };
        self.quadratic = false;
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Integral coordinates print as integers, others with three decimals.
#[must_use]
pub fn format_coord(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let int = value as i64;
        int.to_string()
    } else {
        format!("{value:.3}")
    }
}

/// Check raw SVG path data.
///
/// # Errors
///
/// Returns [`RafaError::InvalidPath`] with the parser's message.
pub fn validate_path_data(data: &str) -> Result<(), RafaError> {
    for segment in svgtypes::PathParser::from(data) {
        segment.map_err(|e| RafaError::InvalidPath(e.to_string()))?;
    }
    Ok(())
}
