//! HTTP API Layer

pub mod chat;
pub mod health;

pub use chat::{ChatRequest, ChatResponse};
