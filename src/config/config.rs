use serde::{Deserialize, Serialize};

use crate::services::responder::Vocabulary;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 允许跨域的来源，为空时允许任意来源
    pub cors_origins: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 聊天配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// 关键词表
    pub vocabulary: Vocabulary,
    /// 单条消息最大字符数
    pub max_message_chars: usize,
}

/// 后端客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端地址
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 聊天配置
    pub chat: ChatConfig,
    /// 客户端配置
    pub client: ClientConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8000,
                cors_origins: Vec::new(),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            chat: ChatConfig {
                vocabulary: Vocabulary::Extended,
                max_message_chars: crate::models::chat::MAX_MESSAGE_CHARS,
            },
            client: ClientConfig {
                base_url: "http://localhost:8000".into(),
                timeout_secs: 10,
            },
            app_name: "kidschat".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }
}
