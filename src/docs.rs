// src/docs.rs

use utoipa::OpenApi;

use crate::catalog;
use crate::common::response::ApiResponse;
use crate::handlers;
use crate::handlers::drawings::DrawingFileInfo;
use crate::handlers::maintenance::{CreateMaintenancePayload, UpdateMaintenanceStatusPayload};
use crate::handlers::requirements::{
    CreateRequirementPayload, RequirementResponse, UpdateRequirementStatusPayload,
};
use crate::handlers::system::{HealthStatus, ServiceInfo};
use crate::models;
use crate::models::maintenance::MaintenanceRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "joj达电梯科技 API",
        description = "采购需求与维保申请的受理、状态流转及图纸目录接口"
    ),
    paths(
        // --- Requirements ---
        handlers::requirements::create_requirement,
        handlers::requirements::get_all_requirements,
        handlers::requirements::get_requirement_by_id,
        handlers::requirements::get_requirements_by_status,
        handlers::requirements::update_requirement_status,
        handlers::requirements::delete_requirement,

        // --- Maintenance ---
        handlers::maintenance::create_maintenance_request,
        handlers::maintenance::get_all_maintenance_requests,
        handlers::maintenance::get_maintenance_request_by_id,
        handlers::maintenance::get_maintenance_requests_by_status,
        handlers::maintenance::get_maintenance_requests_by_phone,
        handlers::maintenance::update_maintenance_status,
        handlers::maintenance::delete_maintenance_request,

        // --- Drawings ---
        handlers::drawings::list_drawing_files,
        handlers::drawings::download_drawing,

        // --- System ---
        handlers::system::root,
        handlers::system::health,
    ),
    components(
        schemas(
            // --- 枚举 ---
            models::requirement::ElevatorType,
            models::requirement::RequirementStatus,
            models::maintenance::MaintenanceType,
            models::maintenance::UrgencyLevel,
            models::maintenance::MaintenanceStatus,

            // --- 实体 ---
            models::requirement::ElevatorRequirement,
            models::maintenance::MaintenanceRequest,

            // --- Payloads ---
            CreateRequirementPayload,
            UpdateRequirementStatusPayload,
            CreateMaintenancePayload,
            UpdateMaintenanceStatusPayload,

            // --- 视图与信封 ---
            RequirementResponse,
            DrawingFileInfo,
            catalog::DrawingSpec,
            ServiceInfo,
            HealthStatus,
            ApiResponse<RequirementResponse>,
            ApiResponse<Vec<RequirementResponse>>,
            ApiResponse<MaintenanceRequest>,
            ApiResponse<Vec<MaintenanceRequest>>,
            ApiResponse<Vec<DrawingFileInfo>>,
            ApiResponse<ServiceInfo>,
            ApiResponse<HealthStatus>,
            ApiResponse<bool>,
        )
    ),
    tags(
        (name = "Requirements", description = "采购需求受理与状态流转"),
        (name = "Maintenance", description = "维保申请受理与工单流转"),
        (name = "Drawings", description = "电梯图纸目录与下载"),
        (name = "System", description = "服务信息与健康检查")
    )
)]
pub struct ApiDoc;
