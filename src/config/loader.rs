use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀，嵌套字段用 `__` 分隔，例如 `KIDSCHAT_SERVER__PORT`
pub const ENV_PREFIX: &str = "KIDSCHAT_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 开发环境默认值
    /// 2. ./kidschat.toml
    /// 3. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.chat.max_message_chars == 0 {
            return Err(ConfigValidationError::InvalidMessageLimit);
        }

        // 空地址表示纯离线客户端
        let base_url = &config.client.base_url;
        if !base_url.is_empty()
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ConfigValidationError::InvalidBaseUrl(
                config.client.base_url.clone(),
            ));
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("消息长度上限无效，必须大于 0")]
    InvalidMessageLimit,

    #[error("后端地址无效: {0}")]
    InvalidBaseUrl(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("kidschat.toml")
}
