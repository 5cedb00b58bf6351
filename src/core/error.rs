//! 核心错误处理模块
//!
//! 所有错误都以纯文本响应返回，响应体为错误信息加换行符。

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

/// 请求处理过程中的错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid user ID")]
    InvalidUserId,

    #[error("Invalid JSON body")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid user data")]
    InvalidUserData(#[from] validator::ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("404 page not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUserId | ApiError::InvalidJson(_) | ApiError::InvalidUserData(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UserNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::InvalidJson(e) => debug!("请求体解析失败: {}", e),
            ApiError::InvalidUserData(e) => debug!("用户数据校验失败: {}", e),
            _ => debug!("请求失败: {} {}", status, self),
        }

        (
            status,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                ),
                (
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ),
            ],
            format!("{}\n", self),
        )
            .into_response()
    }
}
