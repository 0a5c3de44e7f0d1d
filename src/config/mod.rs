use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Build and runtime configuration, loaded once at startup.
///
/// Every field maps to an environment variable of the same name in upper
/// case (`APP_VERSION`, `BUILD_DATE`, `GIT_COMMIT`, `ENVIRONMENT`, `HOST`,
/// `PORT`, `DEBUG`, `HOSTNAME`, `AWS_REGION`). Missing variables fall back
/// to the defaults below.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub app_version: String,
    #[serde(default = "default_build_date")]
    pub build_date: String,
    #[serde(default = "default_unknown")]
    pub git_commit: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_unknown")]
    pub hostname: String,
    #[serde(default = "default_unknown")]
    pub aws_region: String,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_build_date() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn default_unknown() -> String {
    "unknown".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({}))
            .expect("empty config should deserialize");

        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.git_commit, "unknown");
        assert_eq!(config.environment, "development");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.hostname, "unknown");
        assert_eq!(config.aws_region, "unknown");
        // Best-effort default; just has to be present.
        assert!(!config.build_date.is_empty());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "app_version": "2.3.4",
            "git_commit": "abc1234",
            "environment": "staging",
            "port": 9090,
            "debug": true,
        }))
        .expect("config should deserialize");

        assert_eq!(config.app_version, "2.3.4");
        assert_eq!(config.git_commit, "abc1234");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.port, 9090);
        assert!(config.debug);
    }
}
