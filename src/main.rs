//! Folio - 静态内容阅读站点服务

use std::sync::Arc;

use folio::application::ShareDispatcher;
use folio::config::{load_config, print_config, AppConfig};
use folio::infrastructure::build_share_platform;
use folio::infrastructure::content::InMemoryContentIndex;
use folio::infrastructure::http::{AppState, HostResolver, HttpServer, ServerConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},folio={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Folio - 阅读站点服务");
    print_config(&config);

    // 加载内容索引
    let content = Arc::new(InMemoryContentIndex::load(&config.content.index_path).await?);

    // 组装分享能力
    let platform = build_share_platform(&config.share)?;
    let dispatcher = ShareDispatcher::new(Arc::new(platform), config.share.failure_policy);

    let host_resolver = HostResolver::new(
        config.server.base_url.clone(),
        config.server.public_base_url(),
    );
    let state = AppState::new(content, dispatcher, host_resolver);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
