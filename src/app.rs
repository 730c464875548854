//! 应用生命周期：初始化、监听、运行

use crate::api::{self, AppState};
use crate::config::Config;
use crate::utils::logging::log_startup;
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    listener: TcpListener,
}

impl App {
    /// 初始化应用：打印启动信息并绑定监听地址
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let listener = TcpListener::bind(&config.bind_address)
            .await
            .with_context(|| format!("无法监听地址: {}", config.bind_address))?;

        Ok(Self { config, listener })
    }

    /// 实际监听的地址（绑定端口 0 时由系统分配）
    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// 运行应用主逻辑，直到收到 Ctrl+C
    pub async fn run(self) -> Result<()> {
        let addr = self.local_addr()?;
        let router = api::router(AppState::new(self.config));

        info!("✓ 服务已启动: http://{}", addr);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务异常退出")?;

        info!("👋 服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
