//! Fixture lookup endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::debug;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{UserIdRequest, UserNicknameRequest};

/// Empty JSON object returned on a lookup miss.
fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// `POST /get_user_id` — user-id object for a nickname, or `{}`.
pub async fn get_user_id_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserNicknameRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = payload?;
    let found = state.fixtures.user_id(&body.nickname).cloned();
    debug!(nickname = %body.nickname, hit = found.is_some(), "user id lookup");
    Ok(Json(found.unwrap_or_else(empty_object)))
}

/// `POST /get_user_info` — profile for a user id, or `{}`.
pub async fn get_user_info_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserIdRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = payload?;
    let found = state.fixtures.user_info(&body.user_id).cloned();
    debug!(user_id = %body.user_id, hit = found.is_some(), "user info lookup");
    Ok(Json(found.unwrap_or_else(empty_object)))
}
