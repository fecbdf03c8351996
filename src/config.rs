//! Runtime configuration parsed from environment variables.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::consts::{DEFAULT_RAPHAEL_VERSION, TIMESTAMP_UID_RANGE};
use crate::error::RafaError;
use crate::canvas::escape_html;

/// How unique suffixes for generated variable names are produced.
#[derive(Clone, Default)]
pub enum UidStrategy {
    /// `<unix seconds>_<random below 10000>`.
    #[default]
    Timestamp,
    /// A counter owned by each canvas, starting at 1. Output is deterministic.
    Sequential,
    /// A random v4 UUID in simple (hyphenless) form.
    Uuid,
    /// Caller-supplied generator.
    Custom(Arc<dyn Fn() -> String + Send + Sync>),
}

impl UidStrategy {
    /// Produce a suffix. `sequence` is the caller's next counter value and is
    /// only used by [`UidStrategy::Sequential`].
    #[must_use]
    pub fn generate(&self, sequence: u64) -> String {
        match self {
            Self::Timestamp => {
                let secs = time::OffsetDateTime::now_utc().unix_timestamp();
                let salt = rand::rng().random_range(0..TIMESTAMP_UID_RANGE);
                format!("{secs}_{salt}")
            }
            Self::Sequential => sequence.to_string(),
            Self::Uuid => uuid::Uuid::new_v4().simple().to_string(),
            Self::Custom(generate) => generate(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for UidStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct RafaConfig {
    /// Raphael release the page loads.
    pub raphael_version: String,
    /// URL of the Raphael script used by [`RafaConfig::script_include_tag`].
    pub raphael_src: String,
    pub uid: UidStrategy,
}

impl Default for RafaConfig {
    fn default() -> Self {
        Self {
            raphael_version: DEFAULT_RAPHAEL_VERSION.to_owned(),
            raphael_src: default_src(DEFAULT_RAPHAEL_VERSION),
            uid: UidStrategy::Timestamp,
        }
    }
}

impl RafaConfig {
    /// Build the configuration from environment variables.
    ///
    /// Optional:
    /// - `RAFA_RAPHAEL_VERSION`: default `1.3.1`
    /// - `RAFA_RAPHAEL_SRC`: default `raphael-<version>.min.js`
    /// - `RAFA_UID_STRATEGY`: `timestamp` (default), `sequential` or `uuid`
    ///
    /// # Errors
    ///
    /// Returns [`RafaError::ConfigParse`] for an unknown uid strategy or an
    /// empty version.
    pub fn from_env() -> Result<Self, RafaError> {
        let raphael_version =
            std::env::var("RAFA_RAPHAEL_VERSION").unwrap_or_else(|_| DEFAULT_RAPHAEL_VERSION.to_owned());
        if raphael_version.trim().is_empty() {
            return Err(RafaError::ConfigParse("RAFA_RAPHAEL_VERSION is empty".into()));
        }
        let raphael_src = std::env::var("RAFA_RAPHAEL_SRC").unwrap_or_else(|_| default_src(&raphael_version));
        let uid = match std::env::var("RAFA_UID_STRATEGY") {
            Ok(raw) => parse_uid_strategy(Some(&raw))?,
            Err(_) => UidStrategy::default(),
        };

        Ok(Self { raphael_version, raphael_src, uid })
    }

    /// Same configuration with a different uid strategy.
    #[must_use]
    pub fn with_uid(mut self, uid: UidStrategy) -> Self {
        self.uid = uid;
        self
    }

    /// `<script>` tag that loads the Raphael runtime.
    #[must_use]
    pub fn script_include_tag(&self) -> String {
        format!("<script type=\"text/javascript\" src=\"{}\"></script>", escape_html(&self.raphael_src))
    }
}

fn default_src(version: &str) -> String {
    format!("raphael-{version}.min.js")
}

/// Parse a `RAFA_UID_STRATEGY` value. `None` selects the default.
///
/// # Errors
///
/// Returns [`RafaError::ConfigParse`] for unknown names.
pub fn parse_uid_strategy(raw: Option<&str>) -> Result<UidStrategy, RafaError> {
    match raw.map(str::trim).unwrap_or("timestamp") {
        "timestamp" => Ok(UidStrategy::Timestamp),
        "sequential" => Ok(UidStrategy::Sequential),
        "uuid" => Ok(UidStrategy::Uuid),
        other => Err(RafaError::ConfigParse(format!(
            "unknown RAFA_UID_STRATEGY '{other}' (expected 'timestamp', 'sequential' or 'uuid')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
