//! Error Taxonomy
//!
//! 所有中继内部错误在请求边界被转换为结构化 JSON 响应，
//! 永远不会作为未处理的 panic 传播。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// 中继错误
///
/// 每个变体对应一类失败；Handler 通过 `?` 向上传播，
/// 由 `IntoResponse` 统一映射为 HTTP 状态码 + `{"detail": ...}`。
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// 环境变量里没有可用的 API Key（部署错误，非客户端错误）
    #[error("DeepSeek API Key 未配置")]
    MissingApiKey,

    /// 客户端构造失败（例如凭证无法作为 HTTP Header）
    #[error("初始化模型失败: {0}")]
    ClientInit(String),

    /// 到上游的传输层失败（连接拒绝、DNS 等）
    #[error("请求上游失败: {0}")]
    Http(String),

    /// 上游调用超过配置的超时时间
    #[error("上游响应超时 ({0} 秒)")]
    Timeout(u64),

    /// 上游返回了非 2xx 状态码
    #[error("上游返回错误 {status}: {body}")]
    Upstream { status: u16, body: String },

    /// 上游返回 2xx 但响应体不符合 chat-completion 结构
    #[error("无法解析上游响应: {0}")]
    InvalidResponse(String),

    /// 请求体通过了反序列化但未通过加固校验
    #[error("{0}")]
    InvalidRequest(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 面向调用方的 detail 文本
    ///
    /// 上游/传输类失败统一包上 "对话失败: " 前缀，
    /// 配置与校验类错误原样返回。
    pub fn detail(&self) -> String {
        match self {
            RelayError::MissingApiKey
            | RelayError::ClientInit(_)
            | RelayError::InvalidRequest(_) => self.to_string(),
            _ => format!("对话失败: {}", self),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
