use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use users_api::config;
use users_api::infrastructure::logger::Logger;
use users_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, source) = config::load_config().context("加载配置失败")?;

    Logger::init(&config.logging.level)?;

    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let state = AppState::new(config.users.addressing);
    let app = build_router(state.clone(), config.http.request_timeout());

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 用户服务运行在 http://{}", addr);
    info!("📖 API 端点 (标识寻址: {:?}):", state.store.addressing());
    info!("   GET    /users      - 获取所有用户");
    info!("   POST   /users      - 创建新用户");
    info!("   PUT    /users/{{id}} - 更新用户");
    info!("   DELETE /users/{{id}} - 删除用户");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
