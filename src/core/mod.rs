pub mod classify;
pub mod client;
pub mod fallback;
pub mod meta_prompt;

pub use crate::domain::model::{ChatMessage, ChatRequest, EnhancementRequest, EnhancementResult};
pub use crate::domain::ports::{ChatTransport, ConfigProvider, Enhancer};
pub use crate::utils::error::Result;
