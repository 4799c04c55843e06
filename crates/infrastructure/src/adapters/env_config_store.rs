//! Settings store backed by environment variables
//!
//! Uses the same naming as layered configuration, so one variable serves
//! both: `openweathermap/api_key` is read from `OWM_OPENWEATHERMAP__API_KEY`.

use std::env;

use application::{error::ApplicationError, ports::ConfigStorePort};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Settings store that reads from environment variables
///
/// Path segments are joined with `__`, hyphens become underscores and the
/// result is uppercased.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigStore {
    prefix: Option<String>,
}

impl EnvConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every variable name, separated by a single underscore
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn key_to_env_var(&self, key: &str) -> String {
        let normalized = key
            .split('/')
            .map(|segment| segment.replace('-', "_").to_uppercase())
            .collect::<Vec<_>>()
            .join("__");

        match &self.prefix {
            Some(prefix) => format!("{prefix}_{normalized}"),
            None => normalized,
        }
    }
}

#[async_trait]
impl ConfigStorePort for EnvConfigStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_setting(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let env_var = self.key_to_env_var(key);
        tracing::Span::current().record("env_var", &env_var);

        match env::var(&env_var) {
            Ok(value) => {
                debug!("Setting read from environment");
                Ok(Some(value))
            },
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "{env_var} is not valid UTF-8"
            ))),
        }
    }
}
