use std::path::PathBuf;

use anyhow::Context;
use product_store::{
    build_router,
    infrastructure::{
        config::{load_config, ConfigSource},
        logger::Logger,
    },
    AppState, ProductStore,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件路径
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = load_config(explicit.as_deref())?;

    let _guard = Logger::init(&config.logging)?;

    match &source {
        ConfigSource::File(path) => info!("从配置文件加载: {}", path.display()),
        ConfigSource::Default => info!("未找到配置文件，使用默认配置"),
    }
    info!("应用名称: {}", config.server.app_name);

    let store = ProductStore::new(config.store.id_policy);
    info!(
        "已初始化 {} 个产品，id 分配策略: {:?}",
        store.len(),
        store.id_policy()
    );

    let app = build_router(AppState { store }, &config.static_files);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("Server is running on port {}", config.server.port);
    info!("API 端点:");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");
    info!("   GET    /note.txt      - 文本说明");
    info!(
        "   GET    {}/*       - 静态文件 ({})",
        config.static_files.mount_path,
        config.static_files.directory.display()
    );

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
