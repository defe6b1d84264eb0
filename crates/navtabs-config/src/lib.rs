//! Configuration for navtabs widgets.
//!
//! Parses `tabs.toml` widget definitions with serde and provides
//! auto-discovery of the file in parent directories.
//!
//! ```toml
//! id = "profile"
//!
//! [options]
//! class = "nav-tabs"
//!
//! [[items]]
//! header = "One"
//! content = "First pane"
//!
//! [[items]]
//! header = "More"
//! [[items.items]]
//! header = "Two"
//! content = "Nested pane"
//!
//! [assets]
//! base_url = "${STATIC_URL:-/static}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `assets.base_url` supports `${VAR}` and `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use navtabs_renderer::{Attributes, ClientEvent, TabItem, TabsWidget};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tabs.toml";

/// Widget configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root element id. When unset the page assigns one.
    pub id: Option<String>,
    /// Escape header labels instead of inserting them as HTML.
    pub encode_labels: bool,
    /// Attributes of the header `<ul>`.
    pub options: Attributes,
    /// Client plugin options, or `false` to skip the init script.
    pub client_options: ClientOptions,
    pub client_events: Vec<ClientEvent>,
    pub items: Vec<TabItem>,
    pub assets: AssetsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Client plugin options as written in TOML.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientOptions {
    /// Options table passed to the plugin.
    Options(Map<String, Value>),
    /// `true` initializes the plugin without options, `false` skips it.
    Enabled(bool),
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl ClientOptions {
    fn into_map(self) -> Option<Map<String, Value>> {
        match self {
            Self::Options(map) => Some(map),
            Self::Enabled(true) => Some(Map::new()),
            Self::Enabled(false) => None,
        }
    }
}

/// Asset serving configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// URL prefix of bundle files.
    pub base_url: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`assets.base_url`").
        field: String,
        /// Which variable was missing.
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `tabs.toml` in the current directory and its parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or an error if
    /// reading, parsing, expansion or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                Self::discover_from(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse, expand and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Search for `tabs.toml` in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Validate configuration values.
    ///
    /// Item structure (headers, contents) is checked when the widget renders.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = &self.id {
            require_non_empty(id, "id")?;
            if id.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "id cannot contain whitespace: {id:?}"
                )));
            }
        }

        for (pos, event) in self.client_events.iter().enumerate() {
            require_non_empty(&event.event, &format!("client_events[{pos}].event"))?;
            require_non_empty(&event.handler, &format!("client_events[{pos}].handler"))?;
        }

        Ok(())
    }

    /// Asset URL prefix without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.assets.base_url.as_deref()
    }

    /// Build the widget, taking the id from `fallback_id` when none is set.
    pub fn into_widget(self, fallback_id: impl FnOnce() -> String) -> TabsWidget {
        let mut widget = TabsWidget::new(self.id.unwrap_or_else(fallback_id))
            .with_options(self.options)
            .with_items(self.items);
        widget.encode_labels = self.encode_labels;
        widget.client_options = self.client_options.into_map();
        widget.client_events = self.client_events;
        widget
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.assets.base_url {
            let expanded = expand::expand_env(base_url, "assets.base_url")?;
            self.assets.base_url = Some(expanded.trim_end_matches('/').to_owned());
        }
        Ok(())
    }
}
