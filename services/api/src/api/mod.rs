//! HTTP API handlers and routing.

pub mod error;
mod health;
mod items;
mod lists;
pub mod request_context;

use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::api::request_context::{MakeTypedRequestId, REQUEST_ID_HEADER};
use crate::state::AppState;

/// Create the main API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // The browser client may be served from another origin.
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, request_id.clone()])
        .expose_headers([request_id.clone()])
        .allow_origin(Any);

    let set_request_id = SetRequestIdLayer::new(request_id.clone(), MakeTypedRequestId);
    let api = lists::routes().merge(items::routes());

    Router::new()
        .merge(health::routes())
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(cors),
        )
        .with_state(state)
}
