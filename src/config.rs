// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    db::{MaintenanceRepository, RequirementRepository},
    services::{MaintenanceService, RequirementService},
};

/// 环境变量配置。未给 DATABASE_URL 时用 DB_* 变量组合出连接串，
/// 所有变量都有本地开发默认值。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub drawings_dir: PathBuf,
    pub db_host: String,
    pub db_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let db_password = env::var("DB_PASSWORD").unwrap_or_default();
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "jojda_elevator".to_string());

        // DATABASE_URL 优先于 DB_* 组合
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            format!("postgres://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}")
        });

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            cors_origins,
            drawings_dir: PathBuf::from(
                env::var("DRAWINGS_DIR").unwrap_or_else(|_| "drawings".to_string()),
            ),
            db_host,
            db_name,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub requirement_service: RequirementService,
    pub maintenance_service: MaintenanceService,
    pub drawings_dir: PathBuf,
    pub db_host: String,
    pub db_name: String,
}

impl AppState {
    /// 连接数据库并组装依赖图。
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await?;

        tracing::info!("✅ 数据库连接成功");

        Ok(Self::build(db_pool, config))
    }

    /// 用现成的连接池组装状态。集成测试以 connect_lazy 的池走这里。
    pub fn build(db_pool: PgPool, config: &AppConfig) -> Self {
        // --- 组装依赖图 ---
        let requirement_repo = RequirementRepository::new(db_pool.clone());
        let requirement_service = RequirementService::new(requirement_repo);

        let maintenance_repo = MaintenanceRepository::new(db_pool.clone());
        let maintenance_service = MaintenanceService::new(maintenance_repo);

        Self {
            db_pool,
            requirement_service,
            maintenance_service,
            drawings_dir: config.drawings_dir.clone(),
            db_host: config.db_host.clone(),
            db_name: config.db_name.clone(),
        }
    }
}
