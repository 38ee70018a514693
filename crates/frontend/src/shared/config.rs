use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_toast_timeout")]
    pub toast_timeout_ms: u32,
    pub app_title: String,
}

fn default_per_page() -> u32 {
    contracts::shared::api::query::DEFAULT_PER_PAGE
}

fn default_toast_timeout() -> u32 {
    4000
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("config.toml");

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Embedded defaults with the build-time API base override applied.
    pub fn load() -> Self {
        let mut config = match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                Self {
                    api: ApiConfig {
                        base_url: "/api".to_string(),
                        per_page: default_per_page(),
                    },
                    ui: UiConfig {
                        toast_timeout_ms: default_toast_timeout(),
                        app_title: "Door Console".to_string(),
                    },
                }
            }
        };
        if let Some(base) = option_env!("DOOR_CONSOLE_API_BASE") {
            config.api.base_url = base.to_string();
        }
        config
    }

    /// Joins the API base and a relative resource path with exactly one slash.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

thread_local! {
    static CONFIG: AppConfig = AppConfig::load();
}

pub fn app_config() -> AppConfig {
    CONFIG.with(Clone::clone)
}

pub fn api_url(path: &str) -> String {
    CONFIG.with(|c| c.api_url(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.api.per_page, 10);
        assert_eq!(config.ui.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_api_url_joins_with_single_slash() {
        let mut config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api_url("design-type"), "/api/design-type");
        config.api.base_url = "https://erp.example.in/api/".into();
        assert_eq!(
            config.api_url("/common/get-states"),
            "https://erp.example.in/api/common/get-states"
        );
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let config =
            AppConfig::from_toml("[api]\nbase_url = \"/x\"\n[ui]\napp_title = \"T\"\n").unwrap();
        assert_eq!(config.api.per_page, 10);
        assert_eq!(config.ui.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_broken_toml_is_an_error() {
        assert!(AppConfig::from_toml("[api\nbase_url=").is_err());
    }
}
