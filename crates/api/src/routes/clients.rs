//! Per-client debt routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{AppState, error::ApiResult, middleware::AuthUser};
use salesbook_core::sales::{SalesFilter, aggregate};
use salesbook_db::SaleRepository;

/// Creates the client routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients))
        .route("/clients/{name}/sales", get(client_sales))
}

/// GET /clients - Debt per client; `lastItem` is the newest pending item.
async fn list_clients(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let sales = SaleRepository::new((*state.db).clone())
        .list_by_owner(auth.user_id(), &SalesFilter::default())
        .await?;

    Ok(Json(json!({ "clients": aggregate(&sales) })))
}

/// GET /clients/{name}/sales - Every sale for one client, newest first.
async fn client_sales(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let sales = SaleRepository::new((*state.db).clone())
        .list_by_client(auth.user_id(), &name)
        .await?;

    Ok(Json(json!({ "sales": sales })))
}
