//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::security::validation::ValidationError;
use crate::services::chat_session::ChatError;
use crate::services::games::GameError;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    /// 上游服务错误（后端不可达、返回非成功状态等）
    #[error("上游服务错误: {0}")]
    Upstream(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Serialization(e.to_string())
        } else {
            AppError::Upstream(e.to_string())
        }
    }
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// 添加详细信息
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::Upstream(_) => (502, "BAD_GATEWAY".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, code): (u16, String) = (&AppError::Validation("empty".into())).into();
        assert_eq!(status, 400);
        assert_eq!(code, "BAD_REQUEST");

        let (status, _): (u16, String) = (&AppError::Upstream("down".into())).into();
        assert_eq!(status, 502);

        let (status, _): (u16, String) = (&AppError::Internal("boom".into())).into();
        assert_eq!(status, 500);
    }

    #[test]
    fn test_game_error_is_validation() {
        let err: AppError = GameError::EmptySubmission.into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_error_response_details() {
        let response = ErrorResponse::new("BAD_REQUEST", "Invalid riddle ID").with_details("riddle_id=9");
        assert_eq!(response.details.as_deref(), Some("riddle_id=9"));
        assert!(response.request_id.is_none());
    }
}
