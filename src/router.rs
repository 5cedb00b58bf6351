//! 路由
//!
//! `/users` 与 `/users/{id}` 两组路由，其余路径一律 404。
//! `{id}` 取 `/users/` 之后的全部内容，先解析标识再按方法分发。

use axum::{
    middleware,
    routing::{any, get, put, MethodFilter},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::user::handler::{
    create_user, delete_user, extract_user_id, list_users, update_user, AppState, RawUserId,
};
use crate::core::{
    error::ApiError,
    middleware::{cors_middleware, request_logging_middleware},
};

/// 构建应用路由
pub fn build_router(state: AppState, request_timeout: Option<Duration>) -> Router {
    let router = Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .on(MethodFilter::HEAD, collection_method_not_allowed)
                .fallback(collection_method_not_allowed),
        )
        // 通配段不匹配空串，`/users/` 单独处理
        .route("/users/", any(empty_user_id))
        .route(
            "/users/*id",
            put(update_user)
                .delete(delete_user)
                .fallback(member_method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let router = match request_timeout {
        Some(timeout) => router.layer(TimeoutLayer::new(timeout)),
        None => router,
    };

    router
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_logging_middleware))
}

async fn collection_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn member_method_not_allowed(raw_id: RawUserId) -> ApiError {
    match extract_user_id(raw_id) {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(e) => e,
    }
}

async fn empty_user_id() -> ApiError {
    ApiError::InvalidUserId
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
