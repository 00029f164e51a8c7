//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。客户端复用同一组类型。

pub mod chat_dto;
pub mod game_dto;

pub use chat_dto::*;
pub use game_dto::*;
