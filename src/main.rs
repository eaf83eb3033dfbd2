//src/main.rs

use jojda_elevator_api::{
    config::{AppConfig, AppState},
    routes::app_router,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let config = AppConfig::from_env();

    // 配置或连接失败时应用不应继续启动
    let app_state = AppState::new(&config)
        .await
        .expect("应用状态初始化失败");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("数据库迁移执行失败");

    tracing::info!("✅ 数据库迁移执行完成");

    let app = app_router(app_state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("TCP 监听启动失败");
    tracing::info!("🚀 服务器监听 {}", listener.local_addr().unwrap());
    tracing::info!("📚 接口文档 http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Axum 服务器异常退出");
}
