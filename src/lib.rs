pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ServiceConfig};
pub use crate::core::{
    classify::{classify, Disposition, FailureKind},
    client::{EnhancementClient, HttpTransport},
    fallback::{classify_bucket, fallback, Bucket},
};
pub use domain::model::{EnhancementRequest, EnhancementResult};
pub use domain::ports::{ChatTransport, ConfigProvider, Enhancer};
pub use ui::{ToastKind, ToastOptions, ToastStore};
pub use utils::error::{EnhanceError, Result};
