//! KidsChat Playground - 面向儿童的聊天机器人与小游戏
//!
//! 核心逻辑（回复选择、四个小游戏、计分、聊天会话）与界面无关，
//! 外加一个很薄的 JSON 后端和带离线降级的客户端。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
