//! Sale history, registration, status, and export routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, patch},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    middleware::AuthUser,
};
use salesbook_core::sales::{
    CSV_EXPORT_FILENAME, JSON_EXPORT_FILENAME, SaleDraft, SaleStatus, SalesFilter, StatusUpdate,
    parse_iso_date, to_csv, to_json,
};
use salesbook_db::SaleRepository;
use salesbook_shared::FieldError;
use salesbook_shared::types::SaleId;

/// Creates the sale routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/export/csv", get(export_csv))
        .route("/sales/export/json", get(export_json))
        .route("/sales/{id}/status", patch(update_status))
        .route("/sales/{id}", delete(delete_sale))
}

/// Query parameters for listing sales.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSalesQuery {
    /// Case-insensitive substring of the client name.
    pub client_name: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// `pending` or `paid`.
    pub status: Option<String>,
}

impl ListSalesQuery {
    /// Converts to a filter, reporting each malformed parameter.
    pub fn into_filter(self) -> Result<SalesFilter, Vec<FieldError>> {
        let mut errors = Vec::new();

        let start_date = parse_date_param(self.start_date, "startDate", &mut errors);
        let end_date = parse_date_param(self.end_date, "endDate", &mut errors);

        let status = match self.status.as_deref().filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match raw.parse::<SaleStatus>() {
                Ok(status) => Some(status),
                Err(e) => {
                    errors.push(FieldError::new("status", e.to_string()));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SalesFilter {
            client_query: self.client_name.unwrap_or_default(),
            start_date,
            end_date,
            status,
        })
    }
}

fn parse_date_param(
    raw: Option<String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let parsed = parse_iso_date(&raw);
    if parsed.is_none() {
        errors.push(FieldError::new(field, "Data deve estar no formato YYYY-MM-DD"));
    }
    parsed
}

/// Path IDs that are not UUIDs cannot name a stored sale.
fn parse_sale_id(raw: &str) -> ApiResult<SaleId> {
    Uuid::parse_str(raw)
        .map(SaleId::from_uuid)
        .map_err(|_| ApiError::not_found("Venda não encontrada"))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET /sales - The owner's filtered history, newest first.
async fn list_sales(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListSalesQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = query.into_filter().map_err(ApiError::validation)?;

    let sales = SaleRepository::new((*state.db).clone())
        .list_by_owner(auth.user_id(), &filter)
        .await?;

    Ok(Json(json!({ "sales": sales })))
}

/// POST /sales - Record a sale.
async fn create_sale(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<SaleDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let sale = draft
        .validate()
        .map_err(ApiError::validation)?
        .into_sale(auth.user_id(), today());

    let sale = SaleRepository::new((*state.db).clone())
        .insert(&sale)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "sale": sale }))))
}

/// PATCH /sales/{id}/status - Mark a sale paid or pending.
async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_sale_id(&id)?;
    let Json(update) = payload?;
    let status = update.validate().map_err(ApiError::validation)?;

    let sale = SaleRepository::new((*state.db).clone())
        .update_status(id, auth.user_id(), status, today())
        .await?
        .ok_or_else(|| ApiError::not_found("Venda não encontrada"))?;

    Ok(Json(json!({ "sale": sale })))
}

/// DELETE /sales/{id} - Remove a sale.
async fn delete_sale(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_sale_id(&id)?;

    let deleted = SaleRepository::new((*state.db).clone())
        .delete(id, auth.user_id())
        .await?;
    if !deleted {
        return Err(ApiError::not_found("Venda não encontrada"));
    }

    Ok(Json(json!({ "message": "Venda excluída com sucesso" })))
}

/// GET /sales/export/csv - Statement of every sale, newest first.
async fn export_csv(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let sales = SaleRepository::new((*state.db).clone())
        .list_by_owner(auth.user_id(), &SalesFilter::default())
        .await?;
    let body = to_csv(&sales).map_err(ApiError::internal)?;

    info!(user_id = %auth.user_id(), rows = sales.len(), "CSV statement exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={CSV_EXPORT_FILENAME}"),
            ),
        ],
        body,
    ))
}

/// GET /sales/export/json - Backup of every sale, newest first.
async fn export_json(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let sales = SaleRepository::new((*state.db).clone())
        .list_by_owner(auth.user_id(), &SalesFilter::default())
        .await?;
    let body = to_json(&sales).map_err(ApiError::internal)?;

    info!(user_id = %auth.user_id(), rows = sales.len(), "JSON backup exported");
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={JSON_EXPORT_FILENAME}"),
            ),
        ],
        body,
    ))
}
