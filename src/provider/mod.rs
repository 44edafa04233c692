//! Upstream Provider Layer
//!
//! 封装对 DeepSeek chat-completion API 的单次调用。

pub mod deepseek;

pub use deepseek::{ChatMessage, DeepSeekClient};
