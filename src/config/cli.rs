use crate::domain::ports::ConfigProvider;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prompt-enhancer")]
#[command(about = "Rewrite a short instruction into a structured prompt")]
pub struct CliConfig {
    /// Text to enhance; read from stdin when omitted
    pub input: Option<String>,

    /// API key for this request, overrides the configured one
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Skip the model service and render the local template
    #[arg(long)]
    pub offline: bool,

    /// Print the result as JSON ({"enhanced", "original"})
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    // The per-request key travels on the request, not the service config.
    fn api_key(&self) -> Option<&str> {
        None
    }
}
