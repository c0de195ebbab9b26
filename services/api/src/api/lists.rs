//! List API endpoints.
//!
//! Create, read, rename and delete lists.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use checklist_id::ListId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::items::ItemResponse;
use crate::api::error::ApiError;
use crate::api::request_context::{JsonBody, PathParams, RequestContext};
use crate::state::AppState;
use crate::store::{ListSummary, TodoList};

/// Create list routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route(
            "/lists/{list_id}",
            get(get_list).put(rename_list).delete(delete_list),
        )
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body of `POST /api/lists` and `PUT /api/lists/{list_id}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListNameRequest {
    pub name: String,
}

/// A list without its items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummaryResponse {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListSummary> for ListSummaryResponse {
    fn from(summary: ListSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

/// A list together with its items.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}

impl From<TodoList> for ListResponse {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            created_at: list.created_at,
            updated_at: list.updated_at,
            items: list.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

/// Path ids that cannot be parsed name no list that could exist.
pub(super) fn parse_list_id(raw: &str, ctx: &RequestContext) -> Result<ListId, ApiError> {
    raw.parse().map_err(|_| {
        let message = format!("list {raw} not found");
        ctx.reject(ApiError::not_found("list_not_found", message))
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// List summaries of every list.
///
/// GET /api/lists
async fn list_lists(State(state): State<AppState>) -> Json<Vec<ListSummaryResponse>> {
    let summaries = state.store().list_summaries().await;
    let summaries = summaries.into_iter().map(ListSummaryResponse::from);
    Json(summaries.collect())
}

/// Create a new list.
///
/// POST /api/lists
async fn create_list(
    State(state): State<AppState>,
    ctx: RequestContext,
    JsonBody(req): JsonBody<ListNameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .store()
        .create_list(&req.name)
        .await
        .map_err(|e| ctx.reject(e))?;

    tracing::info!(list_id = %list.id, request_id = %ctx.request_id, "List created");
    Ok((
        StatusCode::CREATED,
        Json(ListSummaryResponse::from(list.summary())),
    ))
}

/// Get a list with all of its items.
///
/// GET /api/lists/{list_id}
async fn get_list(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams(list_id): PathParams<String>,
) -> Result<Json<ListResponse>, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    let list = state
        .store()
        .get_list(list_id)
        .await
        .map_err(|e| ctx.reject(e))?;

    Ok(Json(ListResponse::from(list)))
}

/// Rename a list.
///
/// PUT /api/lists/{list_id}
async fn rename_list(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams(list_id): PathParams<String>,
    JsonBody(req): JsonBody<ListNameRequest>,
) -> Result<Json<ListSummaryResponse>, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    let list = state
        .store()
        .rename_list(list_id, &req.name)
        .await
        .map_err(|e| ctx.reject(e))?;

    Ok(Json(ListSummaryResponse::from(list.summary())))
}

/// Delete a list and every item in it.
///
/// DELETE /api/lists/{list_id}
async fn delete_list(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams(list_id): PathParams<String>,
) -> Result<StatusCode, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    state
        .store()
        .delete_list(list_id)
        .await
        .map_err(|e| ctx.reject(e))?;

    tracing::info!(list_id = %list_id, request_id = %ctx.request_id, "List deleted");
    Ok(StatusCode::NO_CONTENT)
}
