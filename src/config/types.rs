//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::FailurePolicy;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 内容索引配置
    #[serde(default)]
    pub content: ContentConfig,

    /// 分享配置
    #[serde(default)]
    pub share: ShareConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 对外公开的站点地址（canonical/分享链接使用）
    /// 未设置时使用请求的 Host 头
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 内容索引配置
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// 内容索引文件（TOML）
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,
}

fn default_index_path() -> PathBuf {
    PathBuf::from("content/index.toml")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
        }
    }
}

/// 原生分享实现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeShareMode {
    /// 不提供原生分享
    #[default]
    None,
    /// 仅记录，不调用外部服务（开发用）
    Recording,
    /// POST 到 webhook
    Webhook,
}

/// 分享配置
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// 原生分享实现
    #[serde(default)]
    pub native: NativeShareMode,

    /// webhook 地址，native = webhook 时必填
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// webhook 超时时间（秒）
    #[serde(default = "default_webhook_timeout")]
    pub webhook_timeout_secs: u64,

    /// 是否提供剪贴板能力
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,

    /// 宿主调用失败时的处理策略
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_webhook_timeout() -> u64 {
    10
}

fn default_clipboard() -> bool {
    true
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            native: NativeShareMode::None,
            webhook_url: None,
            webhook_timeout_secs: default_webhook_timeout(),
            clipboard: default_clipboard(),
            failure_policy: FailurePolicy::Degrade,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
