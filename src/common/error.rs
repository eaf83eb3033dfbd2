// src/common/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::common::response::ApiResponse;

/// 业务错误按种类打标签，API 层直接根据变体选择状态码，
/// 而不是去匹配消息文本。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("输入数据验证失败")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("请求体格式错误")]
    JsonRejection(String),

    #[error("无效的维保类型")]
    InvalidMaintenanceType,

    #[error("无效的紧急程度")]
    InvalidUrgencyLevel,

    #[error("无效的状态值")]
    InvalidStatusValue,

    #[error("采购需求不存在")]
    RequirementNotFound,

    #[error("维保申请不存在")]
    MaintenanceNotFound,

    #[error("无效的文件名")]
    InvalidFileName,

    #[error("文件不存在")]
    FileNotFound,

    #[error("数据库错误")]
    DatabaseError(#[from] sqlx::Error),

    #[error("服务器内部错误")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonRejection(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<()>) = match self {
            // 校验错误：汇总每个字段的消息，一次性返回。
            AppError::ValidationError(errors) => {
                let mut messages = Vec::new();
                for (_field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        if let Some(message) = &error.message {
                            messages.push(message.to_string());
                        }
                    }
                }
                (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::error_details("输入数据验证失败", messages),
                )
            }

            AppError::JsonRejection(detail) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error_details("请求体格式错误", vec![detail]),
            ),

            AppError::InvalidMaintenanceType => {
                (StatusCode::BAD_REQUEST, ApiResponse::error("无效的维保类型"))
            }
            AppError::InvalidUrgencyLevel => {
                (StatusCode::BAD_REQUEST, ApiResponse::error("无效的紧急程度"))
            }
            AppError::InvalidStatusValue => {
                (StatusCode::BAD_REQUEST, ApiResponse::error("无效的状态值"))
            }
            AppError::InvalidFileName => {
                (StatusCode::BAD_REQUEST, ApiResponse::error("无效的文件名"))
            }

            AppError::RequirementNotFound => {
                (StatusCode::NOT_FOUND, ApiResponse::error("采购需求不存在"))
            }
            AppError::MaintenanceNotFound => {
                (StatusCode::NOT_FOUND, ApiResponse::error("维保申请不存在"))
            }
            AppError::FileNotFound => {
                (StatusCode::NOT_FOUND, ApiResponse::error("文件不存在"))
            }

            // 其余错误一律 500：详细原因只进日志，不外泄给调用方。
            AppError::DatabaseError(e) => {
                tracing::error!("数据库错误: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("服务器内部错误，请稍后重试"),
                )
            }
            AppError::InternalServerError(e) => {
                tracing::error!("服务器内部错误: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("服务器内部错误，请稍后重试"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
