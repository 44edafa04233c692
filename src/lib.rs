// Public API for reusable components

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod state;

// Re-export commonly used types
pub use config::RelayConfig;
pub use error::RelayError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// 组装路由
///
/// 独立成函数以便集成测试直接驱动 Router，不经过真实监听端口。
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.http.static_dir.clone();
    let enable_cors = state.config.http.enable_cors;

    let mut router = Router::new()
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health_check))
        .route("/api/chat", post(api::chat::chat))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
