//! 核心数据模型模块
//!
//! 定义聊天消息与游戏题库等数据结构。

pub mod catalog;
pub mod chat;

pub use catalog::*;
pub use chat::*;
