//! Environment configuration for the record source.

use once_cell::sync::OnceCell;

use crate::error::ConfigError;

pub(crate) const DATABASE_URL_VAR: &str = "TONOLOG_DATABASE_URL";
pub(crate) const API_KEY_VAR: &str = "TONOLOG_API_KEY";

#[derive(Debug, Clone)]
pub(crate) struct SourceConfig {
    /// Base URL identifying the measurement collection.
    pub database_url: String,
    /// Credential sent with every request.
    pub api_key: String,
}

impl SourceConfig {
    /// Read both required variables, reporting every missing one at once.
    fn from_env() -> Result<Self, ConfigError> {
        let database_url = non_empty_var(DATABASE_URL_VAR);
        let api_key = non_empty_var(API_KEY_VAR);

        match (database_url, api_key) {
            (Some(database_url), Some(api_key)) => Ok(Self {
                database_url,
                api_key,
            }),
            (database_url, api_key) => {
                let mut missing = Vec::new();
                if database_url.is_none() {
                    missing.push(DATABASE_URL_VAR);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                Err(ConfigError {
                    missing: missing.join(", "),
                })
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

static CONFIG: OnceCell<SourceConfig> = OnceCell::new();

/// Process-wide configuration, validated on first use and always before any
/// network call.
pub(crate) fn source_config() -> Result<&'static SourceConfig, ConfigError> {
    CONFIG.get_or_try_init(SourceConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_variables_from_env() {
        std::env::set_var(DATABASE_URL_VAR, "https://db.example/v1/collections/iop");
        std::env::set_var(API_KEY_VAR, "secret");

        let config = SourceConfig::from_env().expect("both variables set");
        assert_eq!(config.database_url, "https://db.example/v1/collections/iop");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn missing_variable_is_named_in_the_error() {
        let err = ConfigError {
            missing: format!("{DATABASE_URL_VAR}, {API_KEY_VAR}"),
        };
        let message = err.to_string();
        assert!(message.contains(DATABASE_URL_VAR));
        assert!(message.contains(API_KEY_VAR));
    }
}
