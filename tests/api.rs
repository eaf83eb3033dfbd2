// tests/api.rs
// 路由层用例：connect_lazy 的连接池不会真正建连，
// 这里只覆盖在触库之前就能得出结论的路径。

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use jojda_elevator_api::{
    config::{AppConfig, AppState},
    routes::app_router,
};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn test_config(drawings_dir: PathBuf) -> AppConfig {
    AppConfig {
        database_url: "postgres://postgres@localhost:5432/jojda_test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        drawings_dir,
        db_host: "localhost".to_string(),
        db_name: "jojda_test".to_string(),
    }
}

fn test_app(drawings_dir: PathBuf) -> Router {
    let config = test_config(drawings_dir);
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database_url)
        .unwrap();
    app_router(AppState::build(pool, &config), &config)
}

/// 指向一个不存在的目录，让图纸接口走内置清单兜底。
fn app() -> Router {
    test_app(PathBuf::from("/nonexistent/jojda-drawings"))
}

async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn errors_of(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("errors 字段应为数组")
        .iter()
        .map(|e| e.as_str().unwrap().to_string())
        .collect()
}

/// 测试里拼 URI 用：非保留字符之外全部百分号转义。
fn percent_encode(s: &str) -> String {
    let mut out = String::new();
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

// --- 校验层 ---

#[tokio::test]
async fn create_requirement_reports_every_missing_field() {
    let resp = app()
        .oneshot(post_json("/requirements", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "输入数据验证失败");

    let errors = errors_of(&body);
    for expected in [
        "联系人姓名为必填项",
        "联系电话为必填项",
        "电梯类型为必填项",
        "数量为必填项",
        "楼层数为必填项",
    ] {
        assert!(errors.iter().any(|e| e == expected), "缺少消息: {expected}");
    }
}

#[tokio::test]
async fn create_requirement_rejects_out_of_range_values() {
    let payload = json!({
        "contactName": "张三",
        "contactPhone": "13800001111",
        "elevatorType": "Passenger",
        "quantity": 0,
        "floors": 1,
        "floorHeight": 12.5
    });
    let resp = app()
        .oneshot(post_json("/requirements", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let errors = errors_of(&body_json(resp).await);
    for expected in [
        "数量必须大于0",
        "楼层数必须大于等于2",
        "层高必须在0.1-10.0米之间",
    ] {
        assert!(errors.iter().any(|e| e == expected), "缺少消息: {expected}");
    }
}

#[tokio::test]
async fn create_requirement_rejects_bad_phone_and_empty_email() {
    let payload = json!({
        "contactName": "张三",
        "contactPhone": "abc",
        "contactEmail": "",
        "elevatorType": "Passenger",
        "quantity": 1,
        "floors": 10
    });
    let resp = app()
        .oneshot(post_json("/requirements", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let errors = errors_of(&body_json(resp).await);
    assert!(errors.iter().any(|e| e == "请输入有效的电话号码"));
    assert!(errors.iter().any(|e| e == "请输入有效的邮箱地址"));
}

#[tokio::test]
async fn malformed_json_gets_enveloped_400() {
    let req = Request::builder()
        .method("POST")
        .uri("/requirements")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "请求体格式错误");
}

#[tokio::test]
async fn unknown_elevator_type_is_a_body_format_error() {
    let payload = json!({
        "contactName": "张三",
        "contactPhone": "13800001111",
        "elevatorType": "Rocket",
        "quantity": 1,
        "floors": 10
    });
    let resp = app()
        .oneshot(post_json("/requirements", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "请求体格式错误");
}

#[tokio::test]
async fn requirement_status_update_requires_status() {
    let resp = app()
        .oneshot(put_json("/requirements/1/status", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(errors_of(&body_json(resp).await)
        .iter()
        .any(|e| e == "状态为必填项"));
}

// --- 自由文本枚举 ---

#[tokio::test]
async fn maintenance_unparseable_type_rejected_before_persistence() {
    let payload = json!({
        "customerName": "李四",
        "contactPhone": "13900002222",
        "elevatorLocation": "上海市浦东新区",
        "maintenanceType": "notarealtype",
        "urgencyLevel": "low"
    });
    let resp = app()
        .oneshot(post_json("/maintenance", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "无效的维保类型");
}

#[tokio::test]
async fn maintenance_unparseable_urgency_rejected() {
    let payload = json!({
        "customerName": "李四",
        "contactPhone": "13900002222",
        "elevatorLocation": "上海市浦东新区",
        "maintenanceType": "Routine",
        "urgencyLevel": "urgent"
    });
    let resp = app()
        .oneshot(post_json("/maintenance", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "无效的紧急程度");
}

#[tokio::test]
async fn maintenance_underscored_status_is_invalid() {
    // 状态按枚举名解析，"inprogress" 合法而 "in_progress" 不合法
    let resp = app()
        .oneshot(put_json(
            "/maintenance/1/status",
            json!({ "status": "in_progress" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "无效的状态值");
}

#[tokio::test]
async fn maintenance_status_update_requires_status() {
    let resp = app()
        .oneshot(put_json("/maintenance/1/status", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(errors_of(&body_json(resp).await)
        .iter()
        .any(|e| e == "状态不能为空"));
}

#[tokio::test]
async fn bad_status_path_param_rejected() {
    let resp = app()
        .oneshot(get("/requirements/status/shipped"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "无效的状态值");

    let resp = app()
        .oneshot(get("/maintenance/status/done"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- 图纸目录 ---

#[tokio::test]
async fn drawings_fall_back_to_builtin_catalog() {
    let resp = app().oneshot(get("/api/files")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    let files = body["data"].as_array().unwrap();
    assert_eq!(files.len(), 33);
    assert!(files.iter().all(|f| f["size"] == 0));
    assert!(files.iter().all(|f| f["specs"].is_object()));
}

#[tokio::test]
async fn drawings_facet_filter_narrows_to_exact_match() {
    let uri = format!(
        "/api/files?load={}&speed={}",
        percent_encode("800kg"),
        percent_encode("1.5m每秒")
    );
    let resp = app().oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let files = body["data"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(
        files[0]["fileName"],
        "载重800kg-速度1.5m每秒-轿厢宽度1400mm.pdf"
    );
}

#[tokio::test]
async fn drawings_facet_without_unit_matches_nothing() {
    let uri = format!("/api/files?load={}", percent_encode("800"));
    let resp = app().oneshot(get(&uri)).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn drawings_listing_reads_real_directory() {
    let dir = std::env::temp_dir().join(format!("jojda-drawings-list-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(
        dir.join("载重800kg-速度1.5m每秒-轿厢宽度1400mm.pdf"),
        b"%PDF-1.4 stub",
    )
    .await
    .unwrap();
    tokio::fs::write(dir.join("说明.pdf"), b"%PDF-1.4 notes")
        .await
        .unwrap();
    tokio::fs::write(dir.join("readme.txt"), b"ignored")
        .await
        .unwrap();

    let resp = test_app(dir.clone()).oneshot(get("/api/files")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let files = body["data"].as_array().unwrap();
    assert_eq!(files.len(), 2, "只收 .pdf 文件");

    let spec_entry = files
        .iter()
        .find(|f| f["fileName"] == "载重800kg-速度1.5m每秒-轿厢宽度1400mm.pdf")
        .unwrap();
    assert_eq!(spec_entry["specs"]["load"], "800kg");
    assert!(spec_entry["size"].as_u64().unwrap() > 0);
    assert!(spec_entry["modifiedDate"].is_string());

    let plain_entry = files.iter().find(|f| f["fileName"] == "说明.pdf").unwrap();
    assert!(plain_entry.get("specs").is_none());

    // 给了筛选面时，不符合命名约定的文件不命中
    let uri = format!("/api/files?width={}", percent_encode("1400mm"));
    let resp = test_app(dir.clone()).oneshot(get(&uri)).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn download_serves_pdf_with_attachment_headers() {
    let dir = std::env::temp_dir().join(format!("jojda-drawings-dl-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let name = "载重800kg-速度1.5m每秒-轿厢宽度1400mm.pdf";
    tokio::fs::write(dir.join(name), b"%PDF-1.4 payload")
        .await
        .unwrap();

    let uri = format!("/api/download/{}", percent_encode(name));
    let resp = test_app(dir.clone()).oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename*=UTF-8''"));

    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4 payload");

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn download_rejects_path_traversal() {
    let resp = app()
        .oneshot(get("/api/download/..%2Fsecret.pdf"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "无效的文件名");
}

#[tokio::test]
async fn download_missing_file_is_enveloped_404() {
    let resp = app()
        .oneshot(get("/api/download/missing.pdf"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "文件不存在");
}

// --- 系统端点 ---

#[tokio::test]
async fn health_reports_alive() {
    let resp = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "健康");
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn root_banner_names_the_service_and_database() {
    let resp = app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "joj达电梯科技 API 服务器运行中");
    assert_eq!(body["data"]["database"], "localhost/jojda_test");
    assert!(body["data"]["version"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let resp = app().oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "joj达电梯科技 API");
    assert!(body["paths"]["/requirements"].is_object());
    assert!(body["paths"]["/maintenance/phone/{phone}"].is_object());
}
