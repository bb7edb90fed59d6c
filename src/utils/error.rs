use crate::core::classify::{classify, Disposition, FailureKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Invalid response format")]
    InvalidResponse,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Local fault: {message}")]
    Local { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl EnhanceError {
    pub fn local(message: impl Into<String>) -> Self {
        Self::Local {
            message: message.into(),
        }
    }

    /// 錯誤的宣告種類，供分類策略使用
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http { .. } => FailureKind::Http,
            Self::InvalidResponse => FailureKind::Format,
            Self::Request(e) if e.is_builder() => FailureKind::Type,
            Self::Request(_) => FailureKind::Network,
            Self::Decode(_) => FailureKind::Decode,
            Self::Local { .. }
            | Self::Io(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => FailureKind::Local,
        }
    }

    pub fn disposition(&self) -> Disposition {
        classify(self.kind(), &self.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
        )
    }

    /// CLI 結束代碼：1 設定錯誤、2 傳輸失敗、3 其他
    pub fn exit_code(&self) -> i32 {
        match self {
            _ if self.is_config_error() => 1,
            Self::Http { .. } | Self::Request(_) => 2,
            _ => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Http { status: 401 } | Self::Http { status: 403 } => {
                "The model service rejected the API key".to_string()
            }
            Self::Http { status: 429 } => "The model service is rate limiting requests".to_string(),
            Self::Http { status } => format!("The model service answered with HTTP {}", status),
            Self::InvalidResponse => {
                "The model service returned an unexpected response".to_string()
            }
            Self::Request(_) => "Could not reach the model service".to_string(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Missing configuration: {}", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Http { status: 401 } | Self::Http { status: 403 } => {
                "Check the API key passed with --api-key or PROMPT_ENHANCER_API_KEY"
            }
            Self::Http { status: 404 } => "Check the endpoint URL and model name",
            Self::Http { status: 429 } => "Wait a moment and try again",
            Self::Http { .. } | Self::Request(_) => {
                "Check your network connection and try again"
            }
            Self::InvalidResponse => "Make sure the endpoint speaks the chat-completions protocol",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or CLI flags",
            _ => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
