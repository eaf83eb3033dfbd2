// src/handlers/maintenance.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::AppError, extract::AppJson, response::ApiResponse},
    config::AppState,
    models::maintenance::{
        MaintenanceRequest, MaintenanceStatus, MaintenanceStatusChange, MaintenanceType,
        NewMaintenanceRequest, UrgencyLevel,
    },
};

// ---
// Payload: 提交维保申请
// ---
// 维保类型与紧急程度按前端约定以自由文本收取（如 "routine"、"low"），
// 校验通过后在此解析成枚举，解析失败的请求不会触达数据库。
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenancePayload {
    #[validate(
        required(message = "客户姓名不能为空"),
        length(max = 100, message = "客户姓名长度不能超过100个字符")
    )]
    pub customer_name: Option<String>,

    #[validate(required(message = "联系电话不能为空"))]
    pub contact_phone: Option<String>,

    pub contact_email: Option<String>,

    #[validate(
        required(message = "设备位置不能为空"),
        length(max = 500, message = "设备位置长度不能超过500个字符")
    )]
    pub elevator_location: Option<String>,

    #[validate(length(max = 100, message = "电梯类型长度不能超过100个字符"))]
    pub elevator_type: Option<String>,

    #[validate(required(message = "维保类型不能为空"))]
    pub maintenance_type: Option<String>,

    #[validate(required(message = "紧急程度不能为空"))]
    pub urgency_level: Option<String>,

    #[validate(length(max = 1000, message = "问题描述长度不能超过1000个字符"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "期望服务时间长度不能超过50个字符"))]
    pub preferred_time: Option<String>,
}

impl CreateMaintenancePayload {
    /// 校验通过后解析枚举并组装入库数据。
    fn into_new_request(self) -> Result<NewMaintenanceRequest, AppError> {
        let maintenance_type = self
            .maintenance_type
            .unwrap()
            .parse::<MaintenanceType>()
            .map_err(|_| AppError::InvalidMaintenanceType)?;

        let urgency_level = self
            .urgency_level
            .unwrap()
            .parse::<UrgencyLevel>()
            .map_err(|_| AppError::InvalidUrgencyLevel)?;

        Ok(NewMaintenanceRequest {
            customer_name: self.customer_name.unwrap(),
            contact_phone: self.contact_phone.unwrap(),
            contact_email: self.contact_email,
            elevator_location: self.elevator_location.unwrap(),
            elevator_type: self.elevator_type,
            maintenance_type,
            urgency_level,
            description: self.description,
            preferred_time: self.preferred_time,
        })
    }
}

// ---
// Payload: 工作流更新（整体覆盖）
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceStatusPayload {
    #[validate(required(message = "状态不能为空"))]
    pub status: Option<String>,

    pub technician_notes: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
}

// ---
// Handler: 提交申请
// ---
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "Maintenance",
    request_body = CreateMaintenancePayload,
    responses(
        (status = 201, description = "申请已受理", body = ApiResponse<MaintenanceRequest>),
        (status = 400, description = "输入数据验证失败或枚举值无效")
    )
)]
pub async fn create_maintenance_request(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateMaintenancePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let request = app_state
        .maintenance_service
        .create(payload.into_new_request()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_message(request, "维保申请提交成功")),
    ))
}

// ---
// Handler: 全量列表
// ---
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "Maintenance",
    responses(
        (status = 200, description = "全部申请，最新的在前", body = ApiResponse<Vec<MaintenanceRequest>>)
    )
)]
pub async fn get_all_maintenance_requests(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.maintenance_service.get_all().await?;

    Ok(Json(ApiResponse::success(requests)))
}

// ---
// Handler: 按 id 查询
// ---
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "Maintenance",
    responses(
        (status = 200, description = "申请详情", body = ApiResponse<MaintenanceRequest>),
        (status = 404, description = "维保申请不存在")
    ),
    params(
        ("id" = i32, Path, description = "申请 ID")
    )
)]
pub async fn get_maintenance_request_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = app_state.maintenance_service.get_by_id(id).await?;

    Ok(Json(ApiResponse::success(request)))
}

// ---
// Handler: 按状态查询
// ---
#[utoipa::path(
    get,
    path = "/maintenance/status/{status}",
    tag = "Maintenance",
    responses(
        (status = 200, description = "该状态下的申请列表", body = ApiResponse<Vec<MaintenanceRequest>>),
        (status = 400, description = "无效的状态值")
    ),
    params(
        ("status" = String, Path, description = "状态名，不区分大小写")
    )
)]
pub async fn get_maintenance_requests_by_status(
    State(app_state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let status = status
        .parse::<MaintenanceStatus>()
        .map_err(|_| AppError::InvalidStatusValue)?;

    let requests = app_state.maintenance_service.get_by_status(status).await?;

    Ok(Json(ApiResponse::success(requests)))
}

// ---
// Handler: 按联系电话查询
// ---
#[utoipa::path(
    get,
    path = "/maintenance/phone/{phone}",
    tag = "Maintenance",
    responses(
        (status = 200, description = "该电话名下的申请列表", body = ApiResponse<Vec<MaintenanceRequest>>)
    ),
    params(
        ("phone" = String, Path, description = "联系电话，精确匹配")
    )
)]
pub async fn get_maintenance_requests_by_phone(
    State(app_state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.maintenance_service.get_by_phone(&phone).await?;

    Ok(Json(ApiResponse::success(requests)))
}

// ---
// Handler: 工作流更新
// ---
#[utoipa::path(
    put,
    path = "/maintenance/{id}/status",
    tag = "Maintenance",
    request_body = UpdateMaintenanceStatusPayload,
    responses(
        (status = 200, description = "状态更新成功", body = ApiResponse<MaintenanceRequest>),
        (status = 400, description = "输入数据验证失败或状态值无效"),
        (status = 404, description = "维保申请不存在")
    ),
    params(
        ("id" = i32, Path, description = "申请 ID")
    )
)]
pub async fn update_maintenance_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateMaintenanceStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let status = payload
        .status
        .unwrap()
        .parse::<MaintenanceStatus>()
        .map_err(|_| AppError::InvalidStatusValue)?;

    let change = MaintenanceStatusChange {
        status,
        technician_notes: payload.technician_notes,
        scheduled_time: payload.scheduled_time,
        completed_time: payload.completed_time,
    };

    let request = app_state
        .maintenance_service
        .update_status(id, change)
        .await?;

    Ok(Json(ApiResponse::success_message(request, "状态更新成功")))
}

// ---
// Handler: 删除
// ---
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "Maintenance",
    responses(
        (status = 200, description = "删除成功", body = ApiResponse<bool>),
        (status = 404, description = "维保申请不存在")
    ),
    params(
        ("id" = i32, Path, description = "申请 ID")
    )
)]
pub async fn delete_maintenance_request(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.maintenance_service.delete(id).await?;

    Ok(Json(ApiResponse::success_message(true, "维保申请删除成功")))
}
