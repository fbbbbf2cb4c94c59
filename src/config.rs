//! # Configuration Module
//!
//! Startup settings for a waymark-convention service. Settings are plain
//! data passed explicitly to whatever host embeds the library; nothing here
//! reads global state unless the caller asks for it via [`Settings::from_env`].
//!
//! ## Sources
//!
//! Settings come from three places, later ones winning:
//!
//! 1. [`Settings::default`] - built-in defaults
//! 2. A YAML or JSON file via [`Settings::from_file`] (format chosen by
//!    file extension; anything not `.yaml`/`.yml` parses as JSON)
//! 3. Environment overrides via [`Settings::apply_env`]
//!
//! ## Environment Variables
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `WAYMARK_NAMING` | string | `snake_case` | Naming convention: `unprocessed`, `snake_case`, or `lower_camel_case` |
//! | `WAYMARK_HOST` | string | `127.0.0.1` | Bind address for the host server |
//! | `WAYMARK_PORT` | u16 | `8080` | Bind port for the host server |
//! | `WAYMARK_DOCS_ENABLED` | bool | `true` | Whether the host serves generated API documentation |
//!
//! Unparseable override values keep the previous setting and log a warning.

use std::env;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::naming::NamingStrategy;

/// The built-in naming conventions selectable from configuration.
///
/// Configuration files spell these in snake case: `unprocessed`,
/// `snake_case`, `lower_camel_case`. The set is closed on purpose; a
/// [`NamingStrategy::Custom`] transform cannot be named in a file and has
/// to be passed to the host in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    Unprocessed,
    SnakeCase,
    LowerCamelCase,
}

impl NamingConvention {
    /// The strategy value this convention selects.
    pub fn strategy(self) -> NamingStrategy {
        match self {
            Self::Unprocessed => NamingStrategy::Unprocessed,
            Self::SnakeCase => NamingStrategy::snake_case(),
            Self::LowerCamelCase => NamingStrategy::LowerCamel,
        }
    }

    /// Parse the configuration spelling of a convention.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "unprocessed" => Some(Self::Unprocessed),
            "snake_case" => Some(Self::SnakeCase),
            "lower_camel_case" => Some(Self::LowerCamelCase),
            _ => None,
        }
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::SnakeCase
    }
}

/// Startup settings for a host embedding this library.
///
/// All fields have defaults, so a partial configuration file is fine:
///
/// ```
/// use waymark::{NamingConvention, Settings};
///
/// let settings: Settings = serde_yaml::from_str("naming: lower_camel_case").unwrap();
/// assert_eq!(settings.naming, NamingConvention::LowerCamelCase);
/// assert_eq!(settings.port, 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Naming convention applied to route paths and wire field names.
    pub naming: NamingConvention,
    /// Address the host server binds. `0.0.0.0` binds all interfaces.
    pub host: String,
    /// Port the host server binds.
    pub port: u16,
    /// Whether the host serves generated API documentation.
    pub docs_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            naming: NamingConvention::default(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            docs_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file, chosen by extension.
    ///
    /// Unknown fields and unknown naming tokens are parse errors; partial
    /// files are not, since every field has a default.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let is_yaml = path
            .extension()
            .map(|ext| ext == "yaml" || ext == "yml")
            .unwrap_or(false);
        let settings = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML settings {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON settings {}", path.display()))?
        };
        Ok(settings)
    }

    /// Load settings from a file, then apply environment overrides on top.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(Self::from_file(path)?.apply_env())
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply `WAYMARK_*` environment overrides to these settings. Variables
    /// that are unset, or set to values that do not parse, leave the
    /// current value in place.
    pub fn apply_env(mut self) -> Self {
        if let Ok(val) = env::var("WAYMARK_NAMING") {
            match NamingConvention::from_token(&val) {
                Some(convention) => self.naming = convention,
                None => warn!(token = %val, "unknown WAYMARK_NAMING value, keeping current"),
            }
        }
        if let Ok(val) = env::var("WAYMARK_HOST") {
            self.host = val;
        }
        if let Ok(val) = env::var("WAYMARK_PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!(value = %val, "invalid WAYMARK_PORT value, keeping current"),
            }
        }
        if let Ok(val) = env::var("WAYMARK_DOCS_ENABLED") {
            match val.parse() {
                Ok(flag) => self.docs_enabled = flag,
                Err(_) => warn!(value = %val, "invalid WAYMARK_DOCS_ENABLED value, keeping current"),
            }
        }
        self
    }

    /// The `host:port` string for the host server's bind call.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The naming strategy selected by [`Settings::naming`].
    pub fn naming_strategy(&self) -> NamingStrategy {
        self.naming.strategy()
    }
}
