use crate::domain::ports::ConfigProvider;
use crate::ui::ToastDefaults;
use crate::utils::error::{EnhanceError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Longest auto-dismiss delay accepted from a config file (10 minutes).
const MAX_TOAST_MS: u64 = 600_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub notifications: NotificationSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationSection {
    pub success_ms: Option<u64>,
    pub error_ms: Option<u64>,
    pub warning_ms: Option<u64>,
    pub info_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EnhanceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROMPT_ENHANCER_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 通知的預設顯示時間，未指定的沿用內建值
    pub fn toast_defaults(&self) -> ToastDefaults {
        let builtin = ToastDefaults::default();
        let pick = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_millis).unwrap_or(fallback)
        };
        ToastDefaults {
            success: pick(self.notifications.success_ms, builtin.success),
            error: pick(self.notifications.error_ms, builtin.error),
            warning: pick(self.notifications.warning_ms, builtin.warning),
            info: pick(self.notifications.info_ms, builtin.info),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

// Empty values and placeholders whose variable was not set count as absent.
fn resolved(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !ENV_PLACEHOLDER.is_match(v))
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> Option<&str> {
        resolved(&self.service.endpoint)
    }

    fn model(&self) -> Option<&str> {
        resolved(&self.service.model)
    }

    fn api_key(&self) -> Option<&str> {
        resolved(&self.service.api_key)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = self.endpoint() {
            validate_url("service.endpoint", endpoint)?;
        }
        if let Some(model) = &self.service.model {
            validate_non_empty_string("service.model", model)?;
        }

        let durations = [
            ("notifications.success_ms", self.notifications.success_ms),
            ("notifications.error_ms", self.notifications.error_ms),
            ("notifications.warning_ms", self.notifications.warning_ms),
            ("notifications.info_ms", self.notifications.info_ms),
        ];
        for (field, value) in durations {
            if let Some(ms) = value {
                validate_range(field, ms, 0, MAX_TOAST_MS)?;
            }
        }

        if let Some(format) = &self.logging.format {
            if !["compact", "json"].contains(&format.as_str()) {
                return Err(EnhanceError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: "Supported formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }
}
