#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";
pub const DEFAULT_MODEL: &str = "GLM-4.1V-Thinking-Flash";

pub const ENV_ENDPOINT: &str = "PROMPT_ENHANCER_ENDPOINT";
pub const ENV_MODEL: &str = "PROMPT_ENHANCER_MODEL";
pub const ENV_API_KEY: &str = "PROMPT_ENHANCER_API_KEY";

/// Where and how to reach the chat-completions service.
///
/// Fixed once a client is built. The default carries no credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
        }
    }
}

impl ServiceConfig {
    /// 預設值再套用 PROMPT_ENHANCER_* 環境變數
    pub fn from_env() -> Self {
        Self::default().merge(&EnvOverrides::capture())
    }

    /// 以 provider 中有值的欄位覆蓋目前設定
    pub fn merge(mut self, overrides: &impl ConfigProvider) -> Self {
        if let Some(endpoint) = overrides.endpoint() {
            self.endpoint = endpoint.to_string();
        }
        if let Some(model) = overrides.model() {
            self.model = model.to_string();
        }
        if let Some(api_key) = overrides.api_key() {
            self.api_key = api_key.to_string();
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.endpoint)?;
        validate_non_empty_string("service.model", &self.model)?;
        Ok(())
    }
}

/// Snapshot of the PROMPT_ENHANCER_* variables; empty values count as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
}

impl EnvOverrides {
    pub fn capture() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            endpoint: read(ENV_ENDPOINT),
            model: read(ENV_MODEL),
            api_key: read(ENV_API_KEY),
        }
    }
}

impl ConfigProvider for EnvOverrides {
    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
