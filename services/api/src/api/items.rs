//! Item API endpoints, nested under a list.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use checklist_id::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lists::parse_list_id;
use crate::api::error::ApiError;
use crate::api::request_context::{JsonBody, PathParams, RequestContext};
use crate::state::AppState;
use crate::store::{Item, ItemPatch};

/// Create item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists/{list_id}/items", post(add_item))
        .route(
            "/lists/{list_id}/items/{item_id}",
            patch(update_item).delete(delete_item),
        )
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body of `POST /api/lists/{list_id}/items`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddItemRequest {
    pub label: String,
}

/// Body of `PATCH /api/lists/{list_id}/items/{item_id}`.
///
/// Omitted fields are left unchanged. Toggling is expressed by sending the
/// desired `checked` value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub checked: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            label: req.label,
            checked: req.checked,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: ItemId,
    pub label: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            label: item.label,
            checked: item.checked,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

fn parse_item_id(raw: &str, ctx: &RequestContext) -> Result<ItemId, ApiError> {
    raw.parse().map_err(|_| {
        let message = format!("item {raw} not found");
        ctx.reject(ApiError::not_found("item_not_found", message))
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Append an item to a list.
///
/// POST /api/lists/{list_id}/items
async fn add_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams(list_id): PathParams<String>,
    JsonBody(req): JsonBody<AddItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    let item = state
        .store()
        .add_item(list_id, &req.label)
        .await
        .map_err(|e| ctx.reject(e))?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// Change an item's label and/or checked flag.
///
/// PATCH /api/lists/{list_id}/items/{item_id}
async fn update_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams((list_id, item_id)): PathParams<(String, String)>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    let item_id = parse_item_id(&item_id, &ctx)?;
    let item = state
        .store()
        .update_item(list_id, item_id, req.into())
        .await
        .map_err(|e| ctx.reject(e))?;

    Ok(Json(ItemResponse::from(item)))
}

/// Remove an item from a list.
///
/// DELETE /api/lists/{list_id}/items/{item_id}
async fn delete_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParams((list_id, item_id)): PathParams<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let list_id = parse_list_id(&list_id, &ctx)?;
    let item_id = parse_item_id(&item_id, &ctx)?;
    state
        .store()
        .delete_item(list_id, item_id)
        .await
        .map_err(|e| ctx.reject(e))?;

    Ok(StatusCode::NO_CONTENT)
}
