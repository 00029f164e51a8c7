use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单条消息的最大字符数
pub const MAX_MESSAGE_CHARS: usize = 200;

/// 聊天消息
///
/// 用户发送或机器人回复完成时创建，创建后不可修改，只属于所在的聊天会话。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 会话内单调递增的编号
    pub id: u64,
    /// 消息内容
    pub text: String,
    /// 是否为用户消息
    pub is_user: bool,
    /// 创建时间
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// 创建用户消息
    pub fn user(id: u64, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    /// 创建机器人消息
    pub fn bot(id: u64, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }

    /// 字符数（按 Unicode 标量计）
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
