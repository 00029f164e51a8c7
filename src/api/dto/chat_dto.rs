//! 聊天 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 聊天请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    /// 用户消息
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// 聊天响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 机器人回复
    pub response: String,
    /// 回复时间
    pub timestamp: DateTime<Utc>,
}
