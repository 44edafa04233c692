//! Global State
//!
//! 在所有 HTTP Handler 间共享的只读状态：配置 + 出站 HTTP 客户端。
//! 中继本身无跨请求可变状态。

use crate::config::RelayConfig;
use crate::error::RelayError;
use std::sync::Arc;

/// 全局应用状态
#[derive(Clone)]
pub struct AppState {
    /// 配置（启动时加载一次）
    pub config: Arc<RelayConfig>,

    /// 出站 HTTP 客户端；连接池由 reqwest 内部管理
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| RelayError::ClientInit(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
