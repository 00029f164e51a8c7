//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod chat_handler;
pub mod game_handler;

use axum::http::Uri;

use crate::error::AppError;

pub use chat_handler::*;
pub use game_handler::*;

/// 未知路由统一返回 404 错误体
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
