//! 聊天会话
//!
//! 维护一次会话内的消息列表。同一时刻最多只有一条等待回复的用户消息，
//! 机器人“输入中”时不允许继续发送。

use std::time::Duration;
use thiserror::Error;

use crate::models::chat::{ChatMessage, MAX_MESSAGE_CHARS};
use crate::services::random::RandomSource;
use crate::services::responder::ResponseSelector;

/// 开场欢迎语
pub const WELCOME_MESSAGE: &str =
    "Hi there! I'm Robo! 🤖 I'm super excited to chat with you! What's your name? 😊";

/// 模拟输入延迟的下限（毫秒）
pub const TYPING_DELAY_MIN_MS: u64 = 1000;
/// 模拟输入延迟的上限（毫秒）
pub const TYPING_DELAY_MAX_MS: u64 = 2000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("message is too long (max: {max}, got: {got})")]
    MessageTooLong { max: usize, got: usize },

    #[error("a reply is still pending")]
    ReplyPending,

    #[error("no message is waiting for a reply")]
    NoPendingMessage,
}

/// 会话内的消息日志
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<String>,
    max_chars: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// 以欢迎语开始的新会话
    pub fn new() -> Self {
        Self::with_limit(MAX_MESSAGE_CHARS)
    }

    pub fn with_limit(max_chars: usize) -> Self {
        Self {
            messages: vec![ChatMessage::bot(1, WELCOME_MESSAGE)],
            next_id: 2,
            pending: None,
            max_chars,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// 机器人是否正在“输入”
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// 发送按钮是否可用
    pub fn can_send(&self, input: &str) -> bool {
        !self.is_typing() && !input.trim().is_empty()
    }

    /// 校验输入，不修改会话
    pub fn validate(&self, input: &str) -> Result<(), ChatError> {
        if input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let got = input.chars().count();
        if got > self.max_chars {
            return Err(ChatError::MessageTooLong {
                max: self.max_chars,
                got,
            });
        }
        Ok(())
    }

    /// 追加用户消息并进入等待回复状态
    pub fn submit(&mut self, input: &str) -> Result<&ChatMessage, ChatError> {
        if self.is_typing() {
            return Err(ChatError::ReplyPending);
        }
        self.validate(input)?;

        let message = ChatMessage::user(self.take_id(), input);
        self.pending = Some(message.text.clone());
        self.messages.push(message);
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// 追加机器人回复并结束等待
    pub fn complete(&mut self, reply: &str) -> Result<&ChatMessage, ChatError> {
        if self.pending.take().is_none() {
            return Err(ChatError::NoPendingMessage);
        }
        let message = ChatMessage::bot(self.take_id(), reply);
        self.messages.push(message);
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// 用回复选择器完成等待中的消息
    pub fn respond(
        &mut self,
        selector: &ResponseSelector,
        rng: &mut dyn RandomSource,
    ) -> Result<&ChatMessage, ChatError> {
        let input = self.pending.clone().ok_or(ChatError::NoPendingMessage)?;
        let reply = selector.select_response(&input, rng);
        self.complete(&reply)
    }

    /// 新会话：清空消息，只保留欢迎语
    pub fn reset(&mut self) {
        *self = Self::with_limit(self.max_chars);
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// 抽取一次模拟输入延迟
pub fn typing_delay(rng: &mut dyn RandomSource) -> Duration {
    let millis = rng.between(TYPING_DELAY_MIN_MS as i64, TYPING_DELAY_MAX_MS as i64);
    Duration::from_millis(millis as u64)
}
