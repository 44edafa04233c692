//! DeepSeek Client
//!
//! 每个请求构造一个一次性的客户端值：绑定凭证、模型、温度、max_tokens
//! 和超时时间。构造本身不做任何网络 I/O；真正的网络调用只有 `chat` 一次。

use crate::config::ProviderConfig;
use crate::error::RelayError;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// 对话消息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 角色: system, user, assistant
    pub role: String,

    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// 一次性的 DeepSeek 客户端
///
/// 持有的只是参数，不持有连接状态；连接复用由共享的
/// `reqwest::Client` 内部处理。
pub struct DeepSeekClient {
    http: reqwest::Client,
    base_url: String,
    auth: HeaderValue,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl ProviderConfig {
    /// 客户端工厂
    ///
    /// 在请求处理路径上调用：解析凭证（缺失 → MissingApiKey），
    /// 把凭证固化为 Authorization Header（非法字符 → ClientInit）。
    pub fn client(
        &self,
        http: &reqwest::Client,
        temperature: f32,
    ) -> Result<DeepSeekClient, RelayError> {
        let api_key = self.api_key()?;

        let auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| RelayError::ClientInit(e.to_string()))?;

        Ok(DeepSeekClient {
            http: http.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            auth,
            model: self.model_name.clone(),
            temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.request_timeout_sec),
        })
    }
}

impl DeepSeekClient {
    /// 发送一次 chat-completion 调用并取出回复文本
    ///
    /// 单次调用，无重试；失败原因区分传输错误、超时、
    /// 上游非 2xx、响应结构不符四类。
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, RelayError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "stream": false,
        });

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.auth.clone())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout(self.timeout.as_secs())
                } else {
                    RelayError::Http(e.to_string())
                }
            })?;

        let status = resp.status();
        let raw = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout(self.timeout.as_secs())
            } else {
                RelayError::Http(e.to_string())
            }
        })?;

        if !status.is_success() {
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body: raw,
            });
        }

        let v: Value = serde_json::from_str(&raw)
            .map_err(|e| RelayError::InvalidResponse(format!("JSON 解析失败: {}", e)))?;

        // 标准结构: choices[0].message.content
        let content = v
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                RelayError::InvalidResponse("缺少 choices[0].message.content".to_string())
            })?;

        Ok(content.to_string())
    }
}
