//! 用户处理器

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::info;

use super::{
    model::{User, UserPayload},
    store::{Addressing, UserId, UserStore},
};
use crate::core::{error::ApiError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(addressing: Addressing) -> Self {
        Self {
            store: Arc::new(UserStore::new(addressing)),
        }
    }
}

/// `/users/{id}` 路径参数，提取失败（如百分号解码后不是 UTF-8）也按无效标识处理
pub type RawUserId = Result<Path<String>, PathRejection>;

/// 解析路径中的用户标识
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidUserId)
}

pub fn extract_user_id(raw: RawUserId) -> Result<UserId, ApiError> {
    let Path(raw) = raw.map_err(|_| ApiError::InvalidUserId)?;
    parse_user_id(&raw)
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list())
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserPayload::decode(&body)?.into_user()?;
    let (id, user) = state.store.create(user);
    info!("创建用户 {}: {}", id, user.name);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", id))],
        Json(ApiResponse::success(user)),
    ))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    raw_id: RawUserId,
    body: Bytes,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = extract_user_id(raw_id)?;
    if !state.store.contains(id) {
        return Err(ApiError::UserNotFound);
    }

    let user = UserPayload::decode(&body)?.into_user()?;
    // 解析请求体期间记录可能已被删除
    let user = state.store.update(id, user).ok_or(ApiError::UserNotFound)?;
    info!("更新用户 {}", id);

    Ok(Json(ApiResponse::success(user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    raw_id: RawUserId,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = extract_user_id(raw_id)?;
    let user = state.store.delete(id).ok_or(ApiError::UserNotFound)?;
    info!("删除用户 {}: {}", id, user.name);

    Ok(Json(ApiResponse::success(user)))
}
