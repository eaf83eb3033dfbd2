// src/handlers/requirements.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::AppJson,
        response::ApiResponse,
        validate::{
            validate_car_speed, validate_floor_height, validate_phone, validate_quote_amount,
        },
    },
    config::AppState,
    display::{elevator_type_label, requirement_status_label},
    models::requirement::{
        ElevatorRequirement, ElevatorType, NewRequirement, RequirementStatus,
        RequirementStatusChange,
    },
};

// ---
// Payload: 提交采购需求
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementPayload {
    #[validate(
        required(message = "联系人姓名为必填项"),
        length(max = 100, message = "联系人姓名不能超过100个字符")
    )]
    pub contact_name: Option<String>,

    #[validate(
        required(message = "联系电话为必填项"),
        length(max = 50, message = "联系电话不能超过50个字符"),
        custom(function = "validate_phone")
    )]
    pub contact_phone: Option<String>,

    // 空字符串视同已提供，会走格式校验失败
    #[validate(
        length(max = 100, message = "联系邮箱不能超过100个字符"),
        email(message = "请输入有效的邮箱地址")
    )]
    pub contact_email: Option<String>,

    #[validate(length(max = 200, message = "公司名称不能超过200个字符"))]
    pub company_name: Option<String>,

    #[validate(length(max = 200, message = "项目名称不能超过200个字符"))]
    pub project_name: Option<String>,

    #[validate(length(max = 500, message = "项目地址不能超过500个字符"))]
    pub project_address: Option<String>,

    #[validate(required(message = "电梯类型为必填项"))]
    pub elevator_type: Option<ElevatorType>,

    #[validate(
        required(message = "数量为必填项"),
        range(min = 1, message = "数量必须大于0")
    )]
    pub quantity: Option<i32>,

    #[validate(
        required(message = "楼层数为必填项"),
        range(min = 2, message = "楼层数必须大于等于2")
    )]
    pub floors: Option<i32>,

    #[validate(custom(function = "validate_floor_height"))]
    pub floor_height: Option<Decimal>,

    #[validate(range(min = 100, max = 10000, message = "载重量必须在100-10000kg之间"))]
    pub car_capacity: Option<i32>,

    #[validate(custom(function = "validate_car_speed"))]
    pub car_speed: Option<Decimal>,

    // 井道与轿厢尺寸为自由填写，单位见字段文档
    pub hoistway_width: Option<Decimal>,
    pub hoistway_depth: Option<Decimal>,
    pub pit_depth: Option<Decimal>,
    pub overhead_height: Option<Decimal>,
    pub car_width: Option<Decimal>,
    pub car_depth: Option<Decimal>,
    pub car_height: Option<Decimal>,
    pub door_width: Option<Decimal>,
    pub door_height: Option<Decimal>,

    #[validate(length(max = 2000, message = "特殊要求不能超过2000个字符"))]
    pub special_requirements: Option<String>,

    #[validate(length(max = 100, message = "预算范围不能超过100个字符"))]
    pub budget_range: Option<String>,

    #[validate(length(max = 100, message = "交货期要求不能超过100个字符"))]
    pub delivery_time: Option<String>,
}

impl CreateRequirementPayload {
    /// 校验通过后组装入库数据，必填字段此时一定是 Some。
    fn into_new_requirement(self) -> NewRequirement {
        NewRequirement {
            contact_name: self.contact_name.unwrap(),
            contact_phone: self.contact_phone.unwrap(),
            contact_email: self.contact_email,
            company_name: self.company_name,
            project_name: self.project_name,
            project_address: self.project_address,
            elevator_type: self.elevator_type.unwrap(),
            quantity: self.quantity.unwrap(),
            floors: self.floors.unwrap(),
            floor_height: self.floor_height,
            car_capacity: self.car_capacity,
            car_speed: self.car_speed,
            hoistway_width: self.hoistway_width,
            hoistway_depth: self.hoistway_depth,
            pit_depth: self.pit_depth,
            overhead_height: self.overhead_height,
            car_width: self.car_width,
            car_depth: self.car_depth,
            car_height: self.car_height,
            door_width: self.door_width,
            door_height: self.door_height,
            special_requirements: self.special_requirements,
            budget_range: self.budget_range,
            delivery_time: self.delivery_time,
        }
    }
}

// ---
// Payload: 状态更新（整体覆盖）
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementStatusPayload {
    #[validate(required(message = "状态为必填项"))]
    pub status: Option<RequirementStatus>,

    #[validate(length(max = 2000, message = "管理员备注不能超过2000个字符"))]
    pub admin_notes: Option<String>,

    #[validate(custom(function = "validate_quote_amount"))]
    pub quote_amount: Option<Decimal>,
}

// ---
// 响应视图：枚举保持符号名，另附中文展示字段
// ---
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponse {
    #[serde(flatten)]
    pub requirement: ElevatorRequirement,
    pub elevator_type_display: &'static str,
    pub status_display: &'static str,
}

impl From<ElevatorRequirement> for RequirementResponse {
    fn from(requirement: ElevatorRequirement) -> Self {
        Self {
            elevator_type_display: elevator_type_label(requirement.elevator_type),
            status_display: requirement_status_label(requirement.status),
            requirement,
        }
    }
}

// ---
// Handler: 提交需求
// ---
#[utoipa::path(
    post,
    path = "/requirements",
    tag = "Requirements",
    request_body = CreateRequirementPayload,
    responses(
        (status = 201, description = "需求已受理", body = ApiResponse<RequirementResponse>),
        (status = 400, description = "输入数据验证失败")
    )
)]
pub async fn create_requirement(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateRequirementPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let requirement = app_state
        .requirement_service
        .create(payload.into_new_requirement())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_message(
            RequirementResponse::from(requirement),
            "采购需求提交成功！我们会尽快与您联系。",
        )),
    ))
}

// ---
// Handler: 全量列表
// ---
#[utoipa::path(
    get,
    path = "/requirements",
    tag = "Requirements",
    responses(
        (status = 200, description = "全部需求，最新的在前", body = ApiResponse<Vec<RequirementResponse>>)
    )
)]
pub async fn get_all_requirements(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let requirements = app_state.requirement_service.get_all().await?;
    let data: Vec<RequirementResponse> = requirements.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(data)))
}

// ---
// Handler: 按 id 查询
// ---
#[utoipa::path(
    get,
    path = "/requirements/{id}",
    tag = "Requirements",
    responses(
        (status = 200, description = "需求详情", body = ApiResponse<RequirementResponse>),
        (status = 404, description = "采购需求不存在")
    ),
    params(
        ("id" = i32, Path, description = "需求 ID")
    )
)]
pub async fn get_requirement_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let requirement = app_state.requirement_service.get_by_id(id).await?;

    Ok(Json(ApiResponse::success(RequirementResponse::from(
        requirement,
    ))))
}

// ---
// Handler: 按状态查询
// ---
#[utoipa::path(
    get,
    path = "/requirements/status/{status}",
    tag = "Requirements",
    responses(
        (status = 200, description = "该状态下的需求列表", body = ApiResponse<Vec<RequirementResponse>>),
        (status = 400, description = "无效的状态值")
    ),
    params(
        ("status" = String, Path, description = "状态名，不区分大小写")
    )
)]
pub async fn get_requirements_by_status(
    State(app_state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let status = status
        .parse::<RequirementStatus>()
        .map_err(|_| AppError::InvalidStatusValue)?;

    let requirements = app_state.requirement_service.get_by_status(status).await?;
    let data: Vec<RequirementResponse> = requirements.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(data)))
}

// ---
// Handler: 状态更新
// ---
#[utoipa::path(
    put,
    path = "/requirements/{id}/status",
    tag = "Requirements",
    request_body = UpdateRequirementStatusPayload,
    responses(
        (status = 200, description = "状态更新成功", body = ApiResponse<RequirementResponse>),
        (status = 400, description = "输入数据验证失败"),
        (status = 404, description = "采购需求不存在")
    ),
    params(
        ("id" = i32, Path, description = "需求 ID")
    )
)]
pub async fn update_requirement_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateRequirementStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let change = RequirementStatusChange {
        status: payload.status.unwrap(),
        admin_notes: payload.admin_notes,
        quote_amount: payload.quote_amount,
    };

    let requirement = app_state
        .requirement_service
        .update_status(id, change)
        .await?;

    Ok(Json(ApiResponse::success_message(
        RequirementResponse::from(requirement),
        "状态更新成功",
    )))
}

// ---
// Handler: 删除
// ---
#[utoipa::path(
    delete,
    path = "/requirements/{id}",
    tag = "Requirements",
    responses(
        (status = 200, description = "删除成功", body = ApiResponse<bool>),
        (status = 404, description = "采购需求不存在")
    ),
    params(
        ("id" = i32, Path, description = "需求 ID")
    )
)]
pub async fn delete_requirement(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.requirement_service.delete(id).await?;

    Ok(Json(ApiResponse::success_message(true, "删除成功")))
}
