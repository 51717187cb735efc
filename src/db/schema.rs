//! Database row types for the quote and fee schedule tables.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full row of the `gas` table.
///
/// Serialized column-name-keyed; the fixed-window endpoint returns these rows
/// verbatim rather than the curated [`crate::models::QuoteRecord`] shape.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct QuoteRow {
    /// Database-assigned identifier.
    pub id: i64,
    /// Date the price was quoted.
    pub trade_date: NaiveDate,
    /// Delivery date the price applies to.
    pub flow_date: NaiveDate,
    /// Price index code.
    pub indice: String,
    /// Quoted price.
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
    /// Source label for the quote.
    pub fuente: String,
    /// Creator label.
    pub usuario: String,
    /// Creation timestamp.
    #[serde(with = "crate::models::sql_timestamp")]
    pub fecha_creacion: NaiveDateTime,
    /// Last-update timestamp.
    #[serde(with = "crate::models::sql_timestamp")]
    pub fecha_actualizacion: NaiveDateTime,
}

/// Fee schedule entry as listed by the unfiltered fee query.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct FeeScheduleEntry {
    /// Volume tier.
    pub volumen: i32,
    /// Tenor in months.
    pub meses: i32,
    /// Fee for this tier.
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    /// Version of the fee schedule this row belongs to.
    pub fee_version: i32,
}

/// Full row of the `gas_fee` table, returned by the bracketing lookup.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct FeeRow {
    /// Database-assigned identifier.
    pub id: i64,
    /// Volume tier.
    pub volumen: i32,
    /// Tenor in months.
    pub meses: i32,
    /// Fee for this tier.
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    /// Version of the fee schedule this row belongs to.
    pub fee_version: i32,
}
