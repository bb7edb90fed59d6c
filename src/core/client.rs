use crate::config::ServiceConfig;
use crate::core::classify::Disposition;
use crate::core::fallback::fallback;
use crate::core::meta_prompt::{META_PROMPT, TEMPERATURE};
use crate::domain::model::{ChatMessage, ChatRequest, EnhancementRequest, EnhancementResult};
use crate::domain::ports::{ChatTransport, Enhancer};
use crate::utils::error::{EnhanceError, Result};
use reqwest::Client;
use serde_json::Value;

/// reqwest-backed transport. One POST per call, no retries, transport
/// default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl ChatTransport for HttpTransport {
    async fn post_chat(
        &self,
        endpoint: &str,
        credential: &str,
        payload: &ChatRequest,
    ) -> Result<Value> {
        tracing::debug!("Sending chat request to: {} (model: {})", endpoint, payload.model);

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(credential)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Model service response status: {}", status);

        if !status.is_success() {
            return Err(EnhanceError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Rewrites user input through the remote model.
///
/// Failures are passed through [`classify`](crate::core::classify::classify):
/// transport and protocol failures come back as `Err`, anything else is
/// replaced by the [`fallback`] template and returned as a normal result.
/// Callers cannot tell a degraded result from a remote one.
pub struct EnhancementClient<T = HttpTransport> {
    config: ServiceConfig,
    transport: T,
}

impl EnhancementClient<HttpTransport> {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: ChatTransport> EnhancementClient<T> {
    pub fn with_transport(config: ServiceConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn build_payload(&self, input: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(META_PROMPT), ChatMessage::user(input)],
            temperature: TEMPERATURE,
        }
    }

    // An empty override counts as absent.
    fn credential_for<'a>(&'a self, request: &'a EnhancementRequest) -> &'a str {
        request
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(&self.config.api_key)
    }

    async fn call_model(&self, request: &EnhancementRequest) -> Result<String> {
        let payload = self.build_payload(&request.input);
        let body = self
            .transport
            .post_chat(&self.config.endpoint, self.credential_for(request), &payload)
            .await?;

        extract_content(&body)
    }

    pub async fn enhance(&self, request: &EnhancementRequest) -> Result<EnhancementResult> {
        match self.call_model(request).await {
            Ok(enhanced) => Ok(EnhancementResult {
                enhanced,
                original: request.input.clone(),
            }),
            Err(e) => match e.disposition() {
                Disposition::Surface => {
                    tracing::error!("❌ Enhancement failed ({}): {}", e.kind(), e);
                    Err(e)
                }
                Disposition::Degrade => {
                    tracing::warn!(
                        "⚠️ Enhancement failed ({}): {}, using local template",
                        e.kind(),
                        e
                    );
                    Ok(EnhancementResult {
                        enhanced: fallback(&request.input),
                        original: request.input.clone(),
                    })
                }
            },
        }
    }
}

#[async_trait::async_trait]
impl<T: ChatTransport> Enhancer for EnhancementClient<T> {
    async fn enhance(&self, request: &EnhancementRequest) -> Result<EnhancementResult> {
        EnhancementClient::enhance(self, request).await
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions body.
pub fn extract_content(body: &Value) -> Result<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(EnhanceError::InvalidResponse)
}
