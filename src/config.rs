//! Relay Configuration
//!
//! 管理中继服务的配置项，包括监听地址和 DeepSeek 连接参数。
//! 配置在进程启动时加载一次，之后只读共享，不在每个请求里重读环境变量。

use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 中继服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP 服务器配置
    pub http: HttpConfig,

    /// DeepSeek 上游配置
    pub provider: ProviderConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

/// HTTP 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// 监听地址
    pub host: String,

    /// 监听端口
    pub port: u16,

    /// 是否启用 CORS
    pub enable_cors: bool,

    /// 静态资源目录（前端页面）
    pub static_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// DeepSeek 上游配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API Key；缺失或为空时存为 None（进程仍可启动，health 不依赖凭证）
    pub api_key: Option<String>,

    /// API 基础地址
    pub base_url: String,

    /// 模型名称
    pub model_name: String,

    /// 默认温度（可被请求覆盖）
    pub temperature: f32,

    /// 最大回复长度
    pub max_tokens: u32,

    /// 上游调用超时时间 (秒)
    pub request_timeout_sec: u64,

    /// 单条 message 的最大字符数
    pub max_message_chars: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepseek.com/v1".to_string(),
            model_name: "deepseek-chat".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            request_timeout_sec: 60,
            max_message_chars: 8192,
        }
    }
}

impl ProviderConfig {
    /// 取出凭证；缺失时返回 MissingApiKey（映射为 500，部署错误）
    pub fn api_key(&self) -> Result<&str, RelayError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(RelayError::MissingApiKey)
    }
}

impl RelayConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                enable_cors: true,
                static_dir: PathBuf::from(
                    std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
                ),
            },
            provider: ProviderConfig {
                api_key: std::env::var("DEEPSEEK_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                base_url: std::env::var("DEEPSEEK_BASE_URL")
                    .unwrap_or_else(|_| "https://api.deepseek.com/v1".to_string()),
                model_name: std::env::var("DEEPSEEK_MODEL")
                    .unwrap_or_else(|_| "deepseek-chat".to_string()),
                ..ProviderConfig::default()
            },
        }
    }
}
