//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, NativeShareMode};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `FOLIO_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `FOLIO_SERVER__PORT=8080`
/// - `FOLIO_SERVER__BASE_URL=https://books.example.com`
/// - `FOLIO_CONTENT__INDEX_PATH=/data/index.toml`
/// - `FOLIO_SHARE__NATIVE=webhook`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5080)?
        .set_default("content.index_path", "content/index.toml")?
        .set_default("share.native", "none")?
        .set_default("share.webhook_timeout_secs", 10)?
        .set_default("share.clipboard", true)?
        .set_default("share.failure_policy", "degrade")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: FOLIO_SHARE__WEBHOOK_URL=http://share-hub:9000/share
    builder = builder.add_source(
        Environment::with_prefix("FOLIO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.content.index_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Content index path cannot be empty".to_string(),
        ));
    }

    if config.share.native == NativeShareMode::Webhook {
        let missing = config
            .share
            .webhook_url
            .as_deref()
            .map(str::is_empty)
            .unwrap_or(true);
        if missing {
            return Err(ConfigError::ValidationError(
                "share.webhook_url is required when share.native = webhook".to_string(),
            ));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Content Index: {:?}", config.content.index_path);
    tracing::info!("Native Share: {:?}", config.share.native);
    if let Some(url) = &config.share.webhook_url {
        tracing::info!("Share Webhook: {} ({}s)", url, config.share.webhook_timeout_secs);
    }
    tracing::info!("Clipboard: {}", config.share.clipboard);
    tracing::info!("Share Failure Policy: {:?}", config.share.failure_policy);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
