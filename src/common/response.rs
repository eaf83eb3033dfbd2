// src/common/response.rs

use serde::Serialize;
use utoipa::ToSchema;

/// 统一响应信封：每个 JSON 接口（成功或失败）都使用同一个序列化形状。
/// `data` 与 `errors` 为空时不参与序列化。
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// 成功响应，默认消息「操作成功」。
    pub fn success(data: T) -> Self {
        Self::success_message(data, "操作成功")
    }

    pub fn success_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn error_details(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_errors_field() {
        let body = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "操作成功");
        assert_eq!(body["data"], 1);
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn error_omits_data_field() {
        let body = serde_json::to_value(ApiResponse::<()>::error_details(
            "输入数据验证失败",
            vec!["联系人姓名为必填项".to_string()],
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
        assert_eq!(body["errors"][0], "联系人姓名为必填项");
    }
}
