//! Error type shared by the canvas, path and scene layers.

/// Errors produced while building a script.
#[derive(Debug, thiserror::Error)]
pub enum RafaError {
    /// An element id cannot be used as a JavaScript variable name.
    #[error("invalid javascript identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The DOM container id of a canvas is empty.
    #[error("canvas container id must not be empty")]
    InvalidContainer,

    /// A canvas was requested with a zero width or height.
    #[error("invalid canvas dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// An element from another canvas was passed to a set.
    #[error("element {element} belongs to a different canvas")]
    ForeignElement { element: String },

    /// A rounded-corner direction is not one of lu, ld, ru, rd, ur, ul, dr, dl.
    #[error("invalid rounded corner direction: {0:?}")]
    InvalidCorner(String),

    /// Raw SVG path data failed to parse.
    #[error("invalid path data: {0}")]
    InvalidPath(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A scene document is structurally valid but semantically wrong.
    #[error("scene error: {0}")]
    Scene(String),

    /// A scene file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML scene document could not be deserialized.
    #[error("yaml parse failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON scene document could not be deserialized.
    #[error("json parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable machine-readable error codes.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

impl ErrorCode for RafaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "E_INVALID_IDENTIFIER",
            Self::InvalidContainer => "E_INVALID_CONTAINER",
            Self::InvalidDimensions { .. } => "E_INVALID_DIMENSIONS",
            Self::ForeignElement { .. } => "E_FOREIGN_ELEMENT",
            Self::InvalidCorner(_) => "E_INVALID_CORNER",
            Self::InvalidPath(_) => "E_INVALID_PATH",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::Scene(_) => "E_SCENE",
            Self::Io(_) => "E_IO",
            Self::Yaml(_) => "E_YAML",
            Self::Json(_) => "E_JSON",
        }
    }
}

/// Returns `true` when `name` is usable as a JavaScript variable name.
///
/// ASCII-only: letters, digits, `_` and `$`, not starting with a digit, and
/// not a reserved word.
#[must_use]
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&name)
}

const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "let", "new",
    "null", "return", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
    "yield",
];

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
