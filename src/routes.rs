// src/routes.rs

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{AppConfig, AppState},
    docs::ApiDoc,
    handlers,
};

/// 组装完整路由。集成测试直接拿这个 Router 来发请求。
pub fn app_router(app_state: AppState, config: &AppConfig) -> Router {
    let requirement_routes = Router::new()
        .route(
            "/",
            post(handlers::requirements::create_requirement)
                .get(handlers::requirements::get_all_requirements),
        )
        .route(
            "/{id}",
            get(handlers::requirements::get_requirement_by_id)
                .delete(handlers::requirements::delete_requirement),
        )
        .route(
            "/{id}/status",
            put(handlers::requirements::update_requirement_status),
        )
        .route(
            "/status/{status}",
            get(handlers::requirements::get_requirements_by_status),
        );

    let maintenance_routes = Router::new()
        .route(
            "/",
            post(handlers::maintenance::create_maintenance_request)
                .get(handlers::maintenance::get_all_maintenance_requests),
        )
        .route(
            "/{id}",
            get(handlers::maintenance::get_maintenance_request_by_id)
                .delete(handlers::maintenance::delete_maintenance_request),
        )
        .route(
            "/{id}/status",
            put(handlers::maintenance::update_maintenance_status),
        )
        .route(
            "/status/{status}",
            get(handlers::maintenance::get_maintenance_requests_by_status),
        )
        .route(
            "/phone/{phone}",
            get(handlers::maintenance::get_maintenance_requests_by_phone),
        );

    // 组合主路由
    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .route("/api/files", get(handlers::drawings::list_drawing_files))
        .route(
            "/api/download/{file_name}",
            get(handlers::drawings::download_drawing),
        )
        .nest("/requirements", requirement_routes)
        .nest("/maintenance", maintenance_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        .with_state(app_state)
}

/// 跨域：来源取自配置，方法与请求头全放开，与前端部署约定一致。
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
