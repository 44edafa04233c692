use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

/// 健康检查；不依赖凭证配置，永远返回 200
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}

/// 根路径跳转前端页面 (302)
pub async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/static/index.html")])
}
