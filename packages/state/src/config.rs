//! # Application configuration — `marketplace.toml`
//!
//! Each launcher embeds a `marketplace.toml` next to its `Cargo.toml` and
//! parses it at startup. The file only tunes the mock: the product name shown
//! in the dashboard header and the identity handed out by the mock login.
//!
//! ## Structure
//!
//! ```toml
//! [app]
//! name = "Uber Service"
//!
//! [mock_login]
//! role = "client"
//! city = "New York"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML parsing, validation and the canonical filename. |
//! | [`AppSection`] | Display settings, currently just the product `name`. |
//! | [`MockLoginConfig`] | Role and city assigned to every user that signs in through the login screen. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent to
//! [`AppConfig::default`]. A name or city set to `""` is an error.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::UserRole;

/// Top-level configuration stored in `marketplace.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub mock_login: MockLoginConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    /// Product name shown in the dashboard header.
    #[serde(default = "default_app_name")]
    pub name: String,
}

/// Identity assigned by the mock login, whatever credentials were typed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockLoginConfig {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_app_name() -> String {
    "Uber Service".to_string()
}

fn default_city() -> String {
    "New York".to_string()
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

impl Default for MockLoginConfig {
    fn default() -> Self {
        Self {
            role: UserRole::default(),
            city: default_city(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "marketplace.toml"
    }

    /// Parse from TOML string. An explicitly empty `app.name` or
    /// `mock_login.city` is rejected.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::EmptyField("app.name"));
        }
        if self.mock_login.city.is_empty() {
            return Err(ConfigError::EmptyField("mock_login.city"));
        }
        Ok(())
    }

    /// Parse `s`, falling back to the defaults when it is malformed or invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{} ignored: {e}", Self::filename());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app.name, "Uber Service");
        assert_eq!(config.mock_login.role, UserRole::Client);
        assert_eq!(config.mock_login.city, "New York");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("[mock_login]\nrole = \"worker\"\n").unwrap();
        assert_eq!(config.mock_login.role, UserRole::Worker);
        assert_eq!(config.mock_login.city, "New York");
        assert_eq!(config.app.name, "Uber Service");
    }

    #[test]
    fn test_invalid_role_is_an_error() {
        let err = AppConfig::from_toml("[mock_login]\nrole = \"admin\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let config = AppConfig::from_toml_or_default("[app\nname = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = AppConfig::default();
        config.app.name = "Odd Jobs".to_string();
        config.mock_login.city = "Lagos".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_empty_city_is_rejected() {
        let err = AppConfig::from_toml("[mock_login]\ncity = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("mock_login.city")));

        let err = AppConfig::from_toml("[app]\nname = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("app.name")));
    }

    #[test]
    fn test_empty_city_falls_back_for_login() {
        let config = AppConfig::from_toml_or_default("[mock_login]\nrole = \"worker\"\ncity = \"\"\n");
        assert_eq!(config, AppConfig::default());

        let form = crate::LoginForm {
            username: "maria".to_string(),
            password: "secret".to_string(),
        };
        let user = form.submit(&config.mock_login).unwrap();
        assert_eq!(user.city, "New York");
    }
}
