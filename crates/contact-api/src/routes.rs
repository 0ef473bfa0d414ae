//! Route handlers for `/api/contact`
//!
//! Thin pass-through wrappers: validate, delegate to the store, wrap the
//! result in the response envelope.

use crate::dto::{ContactRequest, CreatedData, CreatedResponse, ListResponse};
use crate::error::ApiResult;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use contact_store::MessageStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use validator::Validate;

/// Build the contact router around an injected store
pub fn router(store: Arc<MessageStore>) -> Router {
    Router::new()
        .route("/api/contact", get(list_messages).post(create_message))
        .with_state(store)
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Permissive CORS: the static client is served from a different origin
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// POST /api/contact
async fn create_message(
    State(store): State<Arc<MessageStore>>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    request.validate()?;

    let stored = store.create(request.into());
    tracing::info!(id = %stored.id, "contact message stored");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Message sent successfully".to_string(),
            data: CreatedData { id: stored.id },
        }),
    ))
}

/// GET /api/contact
async fn list_messages(
    State(store): State<Arc<MessageStore>>,
) -> ApiResult<Json<ListResponse>> {
    let messages = store.list();

    Ok(Json(ListResponse {
        success: true,
        data: messages,
    }))
}
