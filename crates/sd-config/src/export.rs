//! Generator-facing view of the site declaration.
//!
//! The external site generator names its options in camelCase
//! (`defaultLocale`, `customCss`); [`ExportedConfig`] borrows a
//! [`SiteConfig`] and serializes it under those names.

use std::collections::BTreeMap;

use sd_sidebar::Sidebar;
use serde::Serialize;

use crate::{ConfigError, Locale, SiteConfig};

/// Borrowed, serializable view of a [`SiteConfig`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedConfig<'a> {
    /// Canonical base URL.
    pub site: &'a str,
    /// Site title.
    pub title: &'a str,
    /// Site description.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'a str,
    /// Key of the default locale.
    pub default_locale: &'a str,
    /// Locales by key.
    #[serde(skip_serializing_if = "is_empty_map")]
    pub locales: &'a BTreeMap<String, Locale>,
    /// Social profile URLs by platform.
    #[serde(skip_serializing_if = "is_empty_map")]
    pub social: &'a BTreeMap<String, String>,
    /// Navigation tree.
    pub sidebar: &'a Sidebar,
    /// Global stylesheets in application order.
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub custom_css: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_empty_map<V>(map: &&BTreeMap<String, V>) -> bool {
    map.is_empty()
}

impl<'a> From<&'a SiteConfig> for ExportedConfig<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            title: &config.title,
            description: &config.description,
            default_locale: &config.default_locale,
            locales: &config.locales,
            social: &config.social,
            sidebar: &config.sidebar,
            custom_css: &config.custom_css,
        }
    }
}

impl ExportedConfig<'_> {
    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal() -> SiteConfig {
        SiteConfig::from_toml_str(
            r#"
site = "https://example.com/docs"
title = "SimpPay"
custom_css = ["./src/styles/custom.css"]

[locales.root]
label = "Tiếng Việt"
lang = "vi"

[[sidebar]]
label = "Placeholders"
link = "/placeholders/"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_export_uses_generator_option_names() {
        let config = minimal();

        let json = serde_json::to_value(config.export()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "site": "https://example.com/docs",
                "title": "SimpPay",
                "defaultLocale": "root",
                "locales": {"root": {"label": "Tiếng Việt", "lang": "vi"}},
                "sidebar": [{"label": "Placeholders", "link": "/placeholders/"}],
                "customCss": ["./src/styles/custom.css"],
            })
        );
    }

    #[test]
    fn test_export_to_json_compact_and_pretty_agree() {
        let config = minimal();
        let export = config.export();

        let compact: serde_json::Value =
            serde_json::from_str(&export.to_json(false).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&export.to_json(true).unwrap()).unwrap();

        assert_eq!(compact, pretty);
    }
}
