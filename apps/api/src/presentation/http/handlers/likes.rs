use crate::application::likes::dto::{LikeRequest, LikesQuery, LikesResponse};
use crate::domain::likes::item_id::ItemId;
use crate::presentation::http::{
    errors::{AppError, INVALID_JSON_BODY, ITEM_ID_REQUIRED},
    state::AppState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::{Method, StatusCode},
};

fn item_id_from_query(
    query: Result<Query<LikesQuery>, QueryRejection>,
) -> Result<Option<ItemId>, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(query_rejection = %e);
        AppError::InvalidRequest("Invalid query string".into())
    })?;
    Ok(query.item_id.and_then(|raw| ItemId::new(raw).ok()))
}

/// Body fallback for increments. Browsers may post without a JSON content type.
fn item_id_from_body(body: Result<Bytes, BytesRejection>) -> Result<ItemId, AppError> {
    let bytes = body.map_err(|e| {
        tracing::debug!(body_rejection = %e);
        AppError::InvalidRequest(INVALID_JSON_BODY.into())
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::InvalidRequest(ITEM_ID_REQUIRED.into()));
    }

    let request: LikeRequest = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::InvalidRequest(INVALID_JSON_BODY.into()))?;

    request
        .item_id
        .ok_or_else(|| AppError::InvalidRequest(ITEM_ID_REQUIRED.into()))
        .and_then(|raw| ItemId::new(raw).map_err(|_| AppError::InvalidRequest(ITEM_ID_REQUIRED.into())))
}

pub async fn get_likes(
    State(state): State<AppState>,
    query: Result<Query<LikesQuery>, QueryRejection>,
) -> Result<Json<LikesResponse>, AppError> {
    let item_id = item_id_from_query(query)?
        .ok_or_else(|| AppError::InvalidRequest(ITEM_ID_REQUIRED.into()))?;

    let snapshot = state.likes.get_likes(&item_id).await?;
    Ok(Json(LikesResponse::read(snapshot)))
}

/// Query `itemId` wins; the body is only read when the query has none.
pub async fn add_like(
    State(state): State<AppState>,
    query: Result<Query<LikesQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LikesResponse>, AppError> {
    let item_id = match item_id_from_query(query)? {
        Some(item_id) => item_id,
        None => item_id_from_body(body)?,
    };

    let snapshot = state.likes.add_like(&item_id).await?;
    Ok(Json(LikesResponse::liked(snapshot)))
}

/// Cross-origin preflight. No upstream call, no validation.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotSupported(method.to_string())
}
