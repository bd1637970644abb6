use crate::core::ConfigProvider;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{validate_url, Validate};
use std::env;

pub const ENV_DEPLOYMENT_NAME: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const ENV_MODEL_NAME: &str = "AZURE_OPENAI_MODEL_NAME";
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";

/// Remote-service settings, loaded once at startup and passed down
/// explicitly. All five values are required.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub deployment_name: String,
    pub model_name: String,
    pub api_key: String,
    pub api_version: String,
    pub endpoint: String,
}

impl AzureConfig {
    pub fn from_env() -> Self {
        Self {
            deployment_name: env::var(ENV_DEPLOYMENT_NAME).unwrap_or_default(),
            model_name: env::var(ENV_MODEL_NAME).unwrap_or_default(),
            api_key: env::var(ENV_API_KEY).unwrap_or_default(),
            api_version: env::var(ENV_API_VERSION).unwrap_or_default(),
            endpoint: env::var(ENV_ENDPOINT).unwrap_or_default(),
        }
    }

    fn required_values(&self) -> [(&'static str, &str); 5] {
        [
            (ENV_DEPLOYMENT_NAME, &self.deployment_name),
            (ENV_MODEL_NAME, &self.model_name),
            (ENV_API_KEY, &self.api_key),
            (ENV_API_VERSION, &self.api_version),
            (ENV_ENDPOINT, &self.endpoint),
        ]
    }
}

impl Validate for AzureConfig {
    // 一次列出所有缺漏的環境變數
    fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = self
            .required_values()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(GenError::MissingConfigError {
                field: missing.join(", "),
            });
        }

        validate_url(ENV_ENDPOINT, &self.endpoint)
    }
}

impl ConfigProvider for AzureConfig {
    fn deployment_name(&self) -> &str {
        &self.deployment_name
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
