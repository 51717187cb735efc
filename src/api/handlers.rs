//! API request handlers.
//!
//! Every database-backed handler follows the same shape: validate parameters
//! first (invalid input is a 400 regardless of database state), acquire a
//! request-scoped connection (503 when the database is unreachable or never
//! configured), execute exactly one statement, map the result to JSON.

use crate::db::{FeeRow, FeeScheduleEntry, QuoteRow};
use crate::error::ApiError;
use crate::models::{
    AvailableDatesResponse, FeeLookupResponse, FeesResponse, HealthResponse, Indice,
    InsertQuotesResponse, NewQuote, QuoteRecord, QuotesResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};
use std::sync::Arc;


/// Parses an indice path segment against the recognized set.
fn parse_indice(value: &str) -> Result<Indice, ApiError> {
    Indice::parse(value).ok_or_else(|| ApiError::InvalidIndice(value.to_string()))
}

/// Parses a `YYYY-MM-DD` date parameter.
fn parse_trade_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid trade_date: {value}")))
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint. Never touches the database.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ============================================================================
// Quote Queries
// ============================================================================

/// Query parameters for the date + source quote listing.
#[derive(Debug, Deserialize)]
pub struct QuoteListQuery {
    /// Trade date, `YYYY-MM-DD`.
    pub trade_date: Option<String>,
    /// Source label.
    pub fuente: Option<String>,
}

/// Quotes for an exact trade date and source, ordered by flow date.
#[utoipa::path(
    get,
    path = "/api/v1/gas",
    params(
        ("trade_date" = String, Query, description = "Trade date (YYYY-MM-DD)"),
        ("fuente" = String, Query, description = "Source label")
    ),
    responses(
        (status = 200, description = "Matching quotes", body = QuotesResponse),
        (status = 400, description = "Missing or malformed parameter"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Quotes"
)]
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteListQuery>,
) -> Result<Json<QuotesResponse>, ApiError> {
    let (Some(trade_date), Some(fuente)) = (query.trade_date, query.fuente) else {
        return Err(ApiError::InvalidRequest(
            "Both trade_date and fuente are required".to_string(),
        ));
    };
    let trade_date = parse_trade_date(&trade_date)?;

    let mut conn = state.db.acquire().await?;
    let rows: Vec<QuoteRow> = sqlx::query_as(
        r#"
        SELECT id, trade_date, flow_date, indice, precio, fuente, usuario,
               fecha_creacion, fecha_actualizacion
        FROM gas
        WHERE trade_date = $1 AND fuente = $2
        ORDER BY flow_date
        "#,
    )
    .bind(trade_date)
    .bind(&fuente)
    .fetch_all(&mut conn)
    .await?;

    let data = rows.into_iter().map(QuoteRecord::from).collect();
    Ok(Json(QuotesResponse { data }))
}

/// Distinct trade dates with quotes for an indice, descending.
#[utoipa::path(
    get,
    path = "/api/v1/gas/{indice}",
    params(
        ("indice" = String, Path, description = "Price index code (HH, EP, HSC, SCL, WAH)")
    ),
    responses(
        (status = 200, description = "Available trade dates", body = AvailableDatesResponse),
        (status = 400, description = "Invalid indice"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Quotes"
)]
pub async fn available_dates(
    State(state): State<Arc<AppState>>,
    Path(indice): Path<String>,
) -> Result<Json<AvailableDatesResponse>, ApiError> {
    let indice = parse_indice(&indice)?;

    let mut conn = state.db.acquire().await?;
    let rows: Vec<(NaiveDate,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT trade_date
        FROM gas
        WHERE indice = $1
        ORDER BY trade_date DESC
        "#,
    )
    .bind(indice.as_str())
    .fetch_all(&mut conn)
    .await?;

    let available_dates = rows.into_iter().map(|(date,)| date).collect();
    Ok(Json(AvailableDatesResponse { available_dates }))
}

/// Fixed window of quotes for an indice and trade date.
///
/// Returns full rows, column-name-keyed, capped at 36 by the query itself.
#[utoipa::path(
    get,
    path = "/api/v1/gas/{indice}/{trade_date}",
    params(
        ("indice" = String, Path, description = "Price index code (HH, EP, HSC, SCL, WAH)"),
        ("trade_date" = String, Path, description = "Trade date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Up to 36 full rows", body = Vec<QuoteRow>),
        (status = 400, description = "Invalid indice or trade date"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Quotes"
)]
pub async fn quote_window(
    State(state): State<Arc<AppState>>,
    Path((indice, trade_date)): Path<(String, String)>,
) -> Result<Json<Vec<QuoteRow>>, ApiError> {
    let indice = parse_indice(&indice)?;
    let trade_date = parse_trade_date(&trade_date)?;

    let mut conn = state.db.acquire().await?;
    let rows: Vec<QuoteRow> = sqlx::query_as(
        r#"
        SELECT id, trade_date, flow_date, indice, precio, fuente, usuario,
               fecha_creacion, fecha_actualizacion
        FROM gas
        WHERE trade_date = $1 AND indice = $2
        ORDER BY flow_date
        LIMIT 36
        "#,
    )
    .bind(trade_date)
    .bind(indice.as_str())
    .fetch_all(&mut conn)
    .await?;

    Ok(Json(rows))
}

// ============================================================================
// Quote Ingestion
// ============================================================================

/// Bulk quote ingestion.
///
/// The body must be a JSON array; an empty array is a 204 and the database is
/// never touched. All rows go into one multi-row INSERT with bound
/// placeholders per row — the string-interpolated statement of the legacy
/// service is deliberately not reproduced. Any element failing to decode
/// aborts the whole batch.
#[utoipa::path(
    post,
    path = "/api/v1/gas",
    request_body = Vec<NewQuote>,
    responses(
        (status = 201, description = "Rows inserted", body = InsertQuotesResponse),
        (status = 204, description = "Empty array, nothing inserted"),
        (status = 400, description = "Body is not a JSON array"),
        (status = 500, description = "A row failed to decode or the insert failed"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Quotes"
)]
pub async fn insert_quotes(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if !body.is_array() {
        return Err(ApiError::InvalidRequest(
            "Expected a list of data objects".to_string(),
        ));
    }

    let quotes: Vec<NewQuote> = serde_json::from_value(body)
        .map_err(|e| ApiError::Internal(format!("Error processing one of the items: {e}")))?;

    if quotes.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let mut conn = state.db.acquire().await?;

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO gas (trade_date, flow_date, indice, precio, fuente, usuario, \
         fecha_creacion, fecha_actualizacion) ",
    );
    builder.push_values(&quotes, |mut row, quote| {
        row.push_bind(quote.trade_date)
            .push_bind(quote.flow_date)
            .push_bind(&quote.indice)
            .push_bind(quote.precio)
            .push_bind(&quote.fuente)
            .push_bind(&quote.usuario)
            .push_bind(quote.fecha_creacion)
            .push_bind(quote.fecha_actualizacion);
    });
    builder.build().execute(&mut conn).await?;

    let response = InsertQuotesResponse {
        message: "Data inserted successfully".to_string(),
        inserted: quotes.len(),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

// ============================================================================
// Fee Schedule
// ============================================================================

/// Unfiltered fee schedule listing, capped at ten rows.
///
/// No explicit ordering; rows come back in whatever order the database
/// returns them.
#[utoipa::path(
    get,
    path = "/api/v1/gas/fee",
    responses(
        (status = 200, description = "Fee schedule entries", body = FeesResponse),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Fees"
)]
pub async fn list_fees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FeesResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let fees: Vec<FeeScheduleEntry> =
        sqlx::query_as("SELECT volumen, meses, fee, fee_version FROM gas_fee LIMIT 10")
            .fetch_all(&mut conn)
            .await?;

    Ok(Json(FeesResponse { fees }))
}

/// Query parameters for the single fee lookup.
#[derive(Debug, Deserialize)]
pub struct FeeLookupQuery {
    /// Requested volume.
    pub volumen: Option<i32>,
}

/// Bracketing fee lookup: largest volume tier not exceeding the requested
/// volume, smallest tenor not less than the requested months. The two bounds
/// are resolved independently; a row must satisfy both or the lookup is a 404.
#[utoipa::path(
    get,
    path = "/api/v1/gas/fee/{meses}",
    params(
        ("meses" = i32, Path, description = "Requested tenor in months"),
        ("volumen" = i32, Query, description = "Requested volume")
    ),
    responses(
        (status = 200, description = "Matched fee row", body = FeeLookupResponse),
        (status = 400, description = "Missing volumen"),
        (status = 404, description = "No row brackets the requested key"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "Fees"
)]
pub async fn lookup_fee(
    State(state): State<Arc<AppState>>,
    Path(meses): Path<i32>,
    Query(query): Query<FeeLookupQuery>,
) -> Result<Json<FeeLookupResponse>, ApiError> {
    let Some(volumen) = query.volumen else {
        return Err(ApiError::InvalidRequest("Missing volumen".to_string()));
    };

    let mut conn = state.db.acquire().await?;
    let row: Option<FeeRow> = sqlx::query_as(
        r#"
        SELECT id, volumen, meses, fee, fee_version
        FROM gas_fee
        WHERE volumen = (
            SELECT MAX(volumen)
            FROM gas_fee
            WHERE volumen <= $1
        )
        AND meses = (
            SELECT MIN(meses)
            FROM gas_fee
            WHERE meses >= $2
        )
        "#,
    )
    .bind(volumen)
    .bind(meses)
    .fetch_optional(&mut conn)
    .await?;

    let fee = row.ok_or_else(|| ApiError::NotFound("No matching fee found".to_string()))?;
    Ok(Json(FeeLookupResponse { fee }))
}
