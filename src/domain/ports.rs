use crate::utils::error::Result;
use async_trait::async_trait;

/// Narrow boundary for the remote text-generation service: prompt in,
/// raw response text out. Implementations own transport and wire format.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn deployment_name(&self) -> &str;
    fn model_name(&self) -> &str;
    fn api_key(&self) -> &str;
    fn api_version(&self) -> &str;
    fn endpoint(&self) -> &str;
}
