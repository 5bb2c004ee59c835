//! Site declaration loading for SD.
//!
//! Parses `sd.toml` declaration files with serde and provides
//! auto-discovery of the declaration in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site`
//! - `social.<platform>`

mod expand;
mod export;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sd_sidebar::{Sidebar, SidebarError};
use serde::{Deserialize, Serialize};

pub use export::ExportedConfig;

/// CLI settings that override declaration values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the canonical base URL (e.g. for preview deployments).
    pub site: Option<String>,
}

/// Declaration filename to search for.
const CONFIG_FILENAME: &str = "sd.toml";

/// Locale key used when the declaration does not name one.
const ROOT_LOCALE: &str = "root";

/// Site declaration: metadata, locales, social links, stylesheets and sidebar.
///
/// Loaded once and passed around by reference.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical base URL.
    pub site: String,
    /// Site title.
    pub title: String,
    /// Site description.
    #[serde(default)]
    pub description: String,
    /// Key into [`locales`](Self::locales) used for unprefixed routes.
    #[serde(default = "default_locale_key")]
    pub default_locale: String,
    /// Locales by key.
    #[serde(default)]
    pub locales: BTreeMap<String, Locale>,
    /// Social profile URLs by platform name.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    /// Stylesheets applied globally, in order.
    #[serde(default)]
    pub custom_css: Vec<String>,
    /// Navigation tree.
    #[serde(default)]
    pub sidebar: Sidebar,

    /// Path to the declaration file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Locale entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
    /// Name shown in the language picker.
    pub label: String,
    /// BCP 47 language tag (e.g. `vi`).
    pub lang: String,
}

fn default_locale_key() -> String {
    ROOT_LOCALE.to_owned()
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
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Sidebar failed structural checks.
    #[error("{0}")]
    Sidebar(#[from] SidebarError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social.github`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Load the declaration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sd.toml` in current directory and parents.
    ///
    /// CLI settings are applied after environment expansion and before
    /// validation, so overridden values are validated too.
    ///
    /// # Errors
    ///
    /// Returns error if no declaration is found, parsing fails, or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir()?;
            Self::discover_from(&cwd)
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?
        };

        let mut config = Self::parse_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            links = config.sidebar.links().count(),
            "Loaded site declaration"
        );
        Ok(config)
    }

    /// Parse, expand and validate a declaration held in memory.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Locale entry by key.
    #[must_use]
    pub fn locale(&self, key: &str) -> Option<&Locale> {
        self.locales.get(key)
    }

    /// The default locale entry, if declared.
    #[must_use]
    pub fn default_locale(&self) -> Option<&Locale> {
        self.locale(&self.default_locale)
    }

    /// Generator-facing view of this declaration.
    #[must_use]
    pub fn export(&self) -> ExportedConfig<'_> {
        ExportedConfig::from(self)
    }

    /// Validate declaration values.
    ///
    /// Checks that all required fields are properly set and contain valid values,
    /// then runs the sidebar's structural checks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` or `ConfigError::Sidebar` on the first
    /// failing group of checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metadata()?;
        self.validate_locales()?;
        self.validate_social()?;
        self.validate_custom_css()?;
        self.sidebar.validate()?;
        Ok(())
    }

    fn validate_metadata(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site, "site")?;
        require_http_url(&self.site, "site")?;
        require_non_empty(&self.title, "title")?;
        Ok(())
    }

    fn validate_locales(&self) -> Result<(), ConfigError> {
        // No locales means a single unnamed default; nothing to look up
        if self.locales.is_empty() {
            return Ok(());
        }

        if !self.locales.contains_key(&self.default_locale) {
            return Err(ConfigError::Validation(format!(
                "default_locale \"{}\" is not declared in [locales]",
                self.default_locale
            )));
        }

        for (key, locale) in &self.locales {
            require_non_empty(&locale.label, &format!("locales.{key}.label"))?;
            require_non_empty(&locale.lang, &format!("locales.{key}.lang"))?;
        }

        Ok(())
    }

    fn validate_social(&self) -> Result<(), ConfigError> {
        for (platform, url) in &self.social {
            let field = format!("social.{platform}");
            require_non_empty(url, &field)?;
            require_http_url(url, &field)?;
        }
        Ok(())
    }

    fn validate_custom_css(&self) -> Result<(), ConfigError> {
        for (index, path) in self.custom_css.iter().enumerate() {
            require_non_empty(path, &format!("custom_css[{index}]"))?;
        }
        Ok(())
    }

    /// Apply CLI settings to the declaration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site) = &settings.site {
            self.site.clone_from(site);
        }
    }

    /// Search for the declaration in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered site declaration");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Read, parse and expand a declaration file without validating it.
    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse and expand a declaration without validating it.
    fn parse_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Expand environment variable references in declaration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site = expand::expand_env(&self.site, "site")?;

        for (platform, url) in &mut self.social {
            *url = expand::expand_env(url, &format!("social.{platform}"))?;
        }

        Ok(())
    }
}
