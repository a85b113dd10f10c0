use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

/// 统一的 API 响应信封
///
/// `code` 为 0 表示成功，其余取值见 [`ErrorCode`]；失败时 `data` 通常为空，
/// 批量写入等需要指明出错位置的场景会携带详情。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn build(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, Some(data), message)
    }

    // 带详情的错误
    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::build(code, Some(data), message)
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, None, message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_omits_data() {
        let resp = ApiResponse::error_empty(ErrorCode::ClassroomNotFound, "Classroom not found");
        assert!(!resp.is_success());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], ErrorCode::ClassroomNotFound as i32);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_carries_data() {
        let resp = ApiResponse::success(vec![1, 2, 3], "ok");
        assert!(resp.is_success());
        assert_eq!(resp.data.as_deref(), Some(&[1, 2, 3][..]));
    }
}
