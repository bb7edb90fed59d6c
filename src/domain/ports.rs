use crate::domain::model::{ChatRequest, EnhancementRequest, EnhancementResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sends one chat-completions request and returns the decoded JSON body.
///
/// Implementations report non-2xx answers as [`EnhanceError::Http`] and
/// leave shape checks on the body to the caller.
///
/// [`EnhanceError::Http`]: crate::utils::error::EnhanceError::Http
pub trait ChatTransport: Send + Sync {
    fn post_chat(
        &self,
        endpoint: &str,
        credential: &str,
        payload: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<serde_json::Value>> + Send;
}

/// Partial service settings; `None` keeps whatever was configured before.
pub trait ConfigProvider {
    fn endpoint(&self) -> Option<&str>;
    fn model(&self) -> Option<&str>;
    fn api_key(&self) -> Option<&str>;
}

#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, request: &EnhancementRequest) -> Result<EnhancementResult>;
}
