use crate::core::{ChatCompletion, ConfigProvider};
use crate::domain::model::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::utils::error::{GenError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;

// 與原始部署行為一致的取樣溫度
const DEFAULT_TEMPERATURE: f32 = 0.3;

pub struct AzureChatClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider + Validate> AzureChatClient<C> {
    /// Validates the remote-service configuration up front; a missing or
    /// invalid setting fails here, before any request is sent.
    pub fn new(config: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            client: Client::new(),
        })
    }
}

impl<C: ConfigProvider> AzureChatClient<C> {
    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint().trim_end_matches('/'),
            self.config.deployment_name(),
            self.config.api_version()
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> ChatCompletion for AzureChatClient<C> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.config.model_name().to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: DEFAULT_TEMPERATURE,
        };

        tracing::debug!(
            "Making API request to deployment: {}",
            self.config.deployment_name()
        );
        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", self.config.api_key())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenError::RemoteServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.into_text().ok_or_else(|| GenError::RemoteServiceError {
            status: status.as_u16(),
            message: "Response contained no choices".to_string(),
        })
    }
}
