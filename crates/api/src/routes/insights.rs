//! AI advice route.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::info;

use crate::{AppState, error::ApiResult, middleware::AuthUser};
use salesbook_core::sales::SalesFilter;
use salesbook_db::SaleRepository;

/// Creates the insights routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/insights/generate", post(generate))
}

/// POST /insights/generate - Advice text; provider failures still answer 200.
async fn generate(State(state): State<AppState>, auth: AuthUser) -> ApiResult<impl IntoResponse> {
    let sales = SaleRepository::new((*state.db).clone())
        .list_by_owner(auth.user_id(), &SalesFilter::default())
        .await?;

    info!(user_id = %auth.user_id(), sales = sales.len(), "Generating insights");
    let insights = state.insights.summarize(&sales).await;

    Ok(Json(json!({ "insights": insights })))
}
