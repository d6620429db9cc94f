//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::MessageResponse;
use crate::app::product::service::StoreError;

/// 核心错误类型
///
/// 两种 404 响应体不统一：单个读取返回纯文本，更新和删除返回 JSON。
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    /// 404，纯文本响应体
    NotFoundText(String),
    /// 404，`{"message": ...}` 响应体
    NotFound(String),
}

impl CoreError {
    pub fn plain(err: StoreError) -> Self {
        CoreError::NotFoundText(err.to_string())
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CoreError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFoundText(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            CoreError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(msg))).into_response()
            }
        }
    }
}
