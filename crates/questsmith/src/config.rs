//! User configuration for the `questsmith` front end.

use chrono::format::{Item, StrftimeItems};
use questsmith_core::NodeDefaults;
use questsmith_error::{ConfigError, ConfigErrorKind};
use questsmith_render::{Locale, RenderOptions, RenderOptionsBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "QUESTSMITH_CONFIG";

/// Stamp format used when none is configured.
pub const DEFAULT_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Top-level configuration loaded from a TOML file.
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestsmithConfig {
    /// Export settings
    #[serde(default)]
    pub render: RenderSettings,
    /// Template for nodes created by `add-node`
    #[serde(default)]
    pub nodes: NodeDefaults,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Embed the navigation script in exported documents
    #[serde(default = "default_include_scripting")]
    pub include_scripting: bool,
    /// Label language
    #[serde(default)]
    pub locale: Locale,
    /// `strftime` format of the fallback footer stamp
    #[serde(default = "default_stamp_format")]
    pub stamp_format: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            include_scripting: default_include_scripting(),
            locale: Locale::default(),
            stamp_format: default_stamp_format(),
        }
    }
}

fn default_include_scripting() -> bool {
    true
}

fn default_stamp_format() -> String {
    DEFAULT_STAMP_FORMAT.to_string()
}

impl QuestsmithConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or holds
    /// an unusable stamp format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read(format!("{}: {}", path.display(), e)))
        })?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves and loads the configuration for this process.
    ///
    /// Looks at `explicit`, then `$QUESTSMITH_CONFIG`, then
    /// `<config dir>/questsmith/config.toml`, and falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::load_with(explicit, from_env, Self::default_path())
    }

    /// [`load`](Self::load) with the environment and platform lookups supplied.
    ///
    /// Explicit and environment paths must exist; the platform path is used
    /// only when present.
    #[instrument]
    pub fn load_with(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        platform: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using config from command line");
            return Self::from_file(path);
        }
        if let Some(path) = from_env {
            debug!(path = %path.display(), "Using config from {}", CONFIG_ENV);
            return Self::from_file(path);
        }
        match platform {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "Using platform config");
                Self::from_file(path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/questsmith/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("questsmith").join("config.toml"))
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_stamp_format(&self.render.stamp_format) {
            return Err(ConfigError::new(ConfigErrorKind::Invalid(format!(
                "stamp_format '{}' is not a valid strftime format",
                self.render.stamp_format
            ))));
        }
        if self.nodes.id_base().trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::Invalid(
                "nodes.id_base must not be empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Current local time in the configured stamp format.
    pub fn current_stamp(&self) -> String {
        let format = if is_valid_stamp_format(&self.render.stamp_format) {
            self.render.stamp_format.as_str()
        } else {
            DEFAULT_STAMP_FORMAT
        };
        chrono::Local::now().format(format).to_string()
    }

    /// Render options for an export, with `fallback_stamp` for the footer.
    pub fn render_options(&self, fallback_stamp: impl Into<String>) -> RenderOptions {
        RenderOptionsBuilder::default()
            .include_scripting(self.render.include_scripting)
            .locale(self.render.locale)
            .fallback_stamp(fallback_stamp)
            .build()
            .unwrap_or_default()
    }
}

fn is_valid_stamp_format(format: &str) -> bool {
    !format.trim().is_empty()
        && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
