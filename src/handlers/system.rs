// src/handlers/system.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{common::response::ApiResponse, config::AppState};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub version: &'static str,
    pub environment: &'static str,
    /// 连接的数据库，host/库名。
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// ---
// Handler: 服务横幅
// ---
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "服务运行信息", body = ApiResponse<ServiceInfo>)
    )
)]
pub async fn root(State(app_state): State<AppState>) -> impl IntoResponse {
    let info = ServiceInfo {
        version: env!("CARGO_PKG_VERSION"),
        environment: if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        database: format!("{}/{}", app_state.db_host, app_state.db_name),
        timestamp: Utc::now(),
    };

    Json(ApiResponse::success_message(
        info,
        "joj达电梯科技 API 服务器运行中",
    ))
}

// ---
// Handler: 健康检查
// ---
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "存活探测", body = ApiResponse<HealthStatus>)
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::success(HealthStatus {
        status: "健康",
        timestamp: Utc::now(),
    }))
}
