//! API route definitions.

use axum::{Json, Router, http::StatusCode, middleware, response::IntoResponse};
use serde_json::json;

use crate::{AppState, middleware::auth_middleware};

pub mod auth;
pub mod clients;
pub mod health;
pub mod insights;
pub mod sales;

/// Creates the API router; everything except health and sign-in requires a bearer token.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(sales::routes())
        .merge(clients::routes())
        .merge(insights::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "Rota não encontrada"
        })),
    )
}
