use crate::domain::errors::UpstreamError;
use async_trait::async_trait;

/// Text generation backend used for the dashboard greeting
#[async_trait]
pub trait GreetingGenerator: Send + Sync {
    /// Raw model output for the prompt
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;

    fn provider_name(&self) -> &'static str;
}
