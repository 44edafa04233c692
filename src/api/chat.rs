//! Chat Relay Endpoint
//!
//! 处理 POST /api/chat：校验请求，构造两条消息（system 在前），
//! 调用一次 DeepSeek，把回复包装为 ChatResponse。

use crate::error::RelayError;
use crate::provider::ChatMessage;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 对话请求
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// 用户的提问消息（必填；缺失时由 Json 提取器直接拒绝为 422）
    pub message: String,

    /// 系统提示词
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// 温度 (0.0 ~ 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// 对话响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 助手的回复内容
    pub response: String,

    /// 状态标记
    pub status: String,
}

fn default_system_prompt() -> String {
    "你是一个有用的助手。".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl ChatRequest {
    /// 加固校验：温度范围 + 消息长度上限
    ///
    /// 原始行为只要求 message 存在，这两条是运维上必要的补充。
    fn validate(&self, max_message_chars: usize) -> Result<(), RelayError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(RelayError::InvalidRequest(format!(
                "temperature 超出范围 [0.0, 2.0]: {}",
                self.temperature
            )));
        }
        if self.message.chars().count() > max_message_chars {
            return Err(RelayError::InvalidRequest(format!(
                "message 超过最大长度 {} 字符",
                max_message_chars
            )));
        }
        Ok(())
    }
}

/// Chat Handler
///
/// 每个请求独立：无共享可变状态，一次上游调用，无重试。
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    req.validate(state.config.provider.max_message_chars)?;

    // 凭证解析和客户端构造都可能失败，在进入网络调用前返回
    let client = state.config.provider.client(&state.http, req.temperature)?;

    // 顺序固定：system 在前，user 在后
    let messages = [
        ChatMessage::system(req.system_prompt.as_str()),
        ChatMessage::user(req.message.as_str()),
    ];

    tracing::info!(
        message_chars = req.message.chars().count(),
        temperature = req.temperature,
        "relaying chat request"
    );

    let text = client.chat(&messages).await?;

    Ok(Json(ChatResponse {
        response: text,
        status: "success".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_get_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "你好"}"#).unwrap();
        assert_eq!(req.message, "你好");
        assert_eq!(req.system_prompt, "你是一个有用的助手。");
        assert_eq!(req.temperature, 0.7);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message": "hi", "system_prompt": "扮演翻译", "temperature": 0.2}"#,
        )
        .unwrap();
        assert_eq!(req.system_prompt, "扮演翻译");
        assert_eq!(req.temperature, 0.2);
    }

    #[test]
    fn missing_message_fails_deserialization() {
        let result: Result<ChatRequest, _> = serde_json::from_str(r#"{"temperature": 0.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let req = ChatRequest {
            message: "hi".to_string(),
            system_prompt: default_system_prompt(),
            temperature: 3.5,
        };
        let err = req.validate(8192).unwrap_err();
        assert!(matches!(err, RelayError::InvalidRequest(_)));
    }

    #[test]
    fn oversized_message_is_rejected() {
        let req = ChatRequest {
            message: "长".repeat(100),
            system_prompt: default_system_prompt(),
            temperature: 0.7,
        };
        let err = req.validate(99).unwrap_err();
        assert!(matches!(err, RelayError::InvalidRequest(_)));
        assert!(req.validate(100).is_ok());
    }
}
