//! Element ids, storage key and class names.
//!
//! [`ThemeConfig::default`] matches the markup produced by
//! [`crate::markup`], so a page using both needs no configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_DARK_ICON_ID: &str = "theme-toggle-dark-icon";
pub const DEFAULT_LIGHT_ICON_ID: &str = "theme-toggle-light-icon";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Names the controller uses to find and mark up its page.
///
/// Missing fields take their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use themeswitch::ThemeConfig;
///
/// let config = ThemeConfig::from_json(r#"{ "storage_key": "site-theme" }"#).unwrap();
/// assert_eq!(config.storage_key, "site-theme");
/// assert_eq!(config.toggle_id, "theme-toggle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the preference is stored under.
    pub storage_key: String,
    /// Id of the element whose activation toggles the theme.
    pub toggle_id: String,
    /// Id of the icon shown while the light theme is active.
    pub dark_icon_id: String,
    /// Id of the icon shown while the dark theme is active.
    pub light_icon_id: String,
    /// Class that hides an icon.
    pub hidden_class: String,
    /// Media query for the OS dark-scheme preference.
    pub dark_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            dark_icon_id: DEFAULT_DARK_ICON_ID.to_string(),
            light_icon_id: DEFAULT_LIGHT_ICON_ID.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
            dark_scheme_query: DEFAULT_DARK_SCHEME_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Checks that every name is usable.
    ///
    /// Names must be non-empty. Class names and ids must not contain
    /// whitespace, since they end up in `class` and `id` attributes.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("toggle_id", &self.toggle_id),
            ("dark_icon_id", &self.dark_icon_id),
            ("light_icon_id", &self.light_icon_id),
            ("hidden_class", &self.hidden_class),
        ];
        for (field, value) in names {
            if value.is_empty() {
                return Err(Error::Config(format!("{field} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(Error::Config(format!(
                    "{field} '{value}' must not contain whitespace"
                )));
            }
        }
        if self.storage_key.is_empty() {
            return Err(Error::Config("storage_key must not be empty".to_string()));
        }
        if self.dark_scheme_query.trim().is_empty() {
            return Err(Error::Config(
                "dark_scheme_query must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_names() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.dark_icon_id, "theme-toggle-dark-icon");
        assert_eq!(config.light_icon_id, "theme-toggle-light-icon");
        assert_eq!(config.hidden_class, "hidden");
        assert_eq!(config.dark_scheme_query, "(prefers-color-scheme: dark)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let err = ThemeConfig::from_json(r#"{ "storage_key": "" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_whitespace_in_class() {
        let err = ThemeConfig::from_json(r#"{ "hidden_class": "sr only" }"#).unwrap_err();
        assert!(err.to_string().contains("hidden_class"));
    }

    #[test]
    fn test_validate_rejects_empty_hidden_class() {
        let config = ThemeConfig {
            hidden_class: String::new(),
            ..ThemeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: hidden_class must not be empty"
        );
    }

    #[test]
    fn test_from_json_invalid_json() {
        let err = ThemeConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "toggle_id": "mode-button" }}"#).unwrap();

        let config = ThemeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.toggle_id, "mode-button");
        assert_eq!(config.storage_key, "theme");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
