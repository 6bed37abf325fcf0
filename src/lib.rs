//! Folio - 静态内容阅读站点服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节导航与目录
//! - Share Context: 分享数据
//! - URL 构造、断言工具
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ContentIndex, SharePlatform, Notifier）
//! - Share: Share-Or-Copy 调度器与分享动作
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Content: 内容索引加载
//! - Adapters: 剪贴板、原生分享（webhook）、提示收集

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
