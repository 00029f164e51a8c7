//! API 模块
//!
//! 提供聊天与游戏判分的 JSON 接口。路由挂在根路径下，不做版本前缀。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::app_state::AppState;
use crate::observability::metrics_middleware;
use crate::security::middleware::security_headers_middleware;

pub fn create_router(app_state: AppState) -> Router {
    let metrics = app_state.metrics.clone();

    Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::game_routes::create_game_router())
        .fallback(handlers::route_not_found)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            metrics_middleware,
        ))
        .with_state(app_state)
}

/// 跨域配置；`*` 或空列表表示放行任意来源
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// 完整应用：API 路由加上请求追踪与跨域
pub fn create_app(app_state: AppState, cors_origins: &[String]) -> Router {
    create_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}
