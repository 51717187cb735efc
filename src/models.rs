//! Request and response models for the REST API.

use crate::db::{FeeRow, FeeScheduleEntry, QuoteRow};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timestamp format used by the quote payloads (`YYYY-MM-DD HH:MM:SS`).
pub mod sql_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Serializes a timestamp as a space-separated string.
    ///
    /// # Errors
    /// Returns error if the serializer rejects the string.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    /// Deserializes a timestamp from a space-separated string.
    ///
    /// # Errors
    /// Returns error if the string does not match the expected format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Price index codes recognized by the quote endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Indice {
    /// Henry Hub.
    HH,
    /// El Paso Permian.
    EP,
    /// Houston Ship Channel.
    HSC,
    /// SoCal Border.
    SCL,
    /// Waha Hub.
    WAH,
}

impl Indice {
    /// All recognized index codes.
    pub const ALL: [Indice; 5] = [
        Indice::HH,
        Indice::EP,
        Indice::HSC,
        Indice::SCL,
        Indice::WAH,
    ];

    /// Parses an index code, returning `None` for anything outside the set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HH" => Some(Self::HH),
            "EP" => Some(Self::EP),
            "HSC" => Some(Self::HSC),
            "SCL" => Some(Self::SCL),
            "WAH" => Some(Self::WAH),
            _ => None,
        }
    }

    /// The canonical string form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HH => "HH",
            Self::EP => "EP",
            Self::HSC => "HSC",
            Self::SCL => "SCL",
            Self::WAH => "WAH",
        }
    }
}

impl std::fmt::Display for Indice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, always "ok".
    pub status: String,
}

/// Curated quote shape returned by the date + source query.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Database-assigned identifier.
    pub id: i64,
    /// Date the price was quoted.
    pub trade_date: NaiveDate,
    /// Delivery date the price applies to.
    pub flow_date: NaiveDate,
    /// Price index code.
    pub indice: String,
    /// Quoted price.
    pub precio: f64,
    /// Source label for the quote.
    pub fuente: String,
    /// Creator label.
    pub usuario: String,
    /// Creation timestamp.
    #[serde(with = "sql_timestamp")]
    pub fecha_creacion: NaiveDateTime,
    /// Last-update timestamp.
    #[serde(with = "sql_timestamp")]
    pub fecha_actualizacion: NaiveDateTime,
}

impl From<QuoteRow> for QuoteRecord {
    fn from(row: QuoteRow) -> Self {
        Self {
            id: row.id,
            trade_date: row.trade_date,
            flow_date: row.flow_date,
            indice: row.indice,
            precio: row.precio.to_f64().unwrap_or_default(),
            fuente: row.fuente,
            usuario: row.usuario,
            fecha_creacion: row.fecha_creacion,
            fecha_actualizacion: row.fecha_actualizacion,
        }
    }
}

/// Response wrapping the curated quote list.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuotesResponse {
    /// Matching quotes, ordered by flow date ascending.
    pub data: Vec<QuoteRecord>,
}

/// Response listing the distinct trade dates available for an indice.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableDatesResponse {
    /// Trade dates, descending.
    #[serde(rename = "availableDates")]
    pub available_dates: Vec<NaiveDate>,
}

/// One element of the bulk ingestion payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    /// Date the price was quoted.
    pub trade_date: NaiveDate,
    /// Delivery date the price applies to.
    pub flow_date: NaiveDate,
    /// Price index code. Not validated on the write path.
    pub indice: String,
    /// Quoted price.
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
    /// Source label for the quote.
    pub fuente: String,
    /// Creator label.
    pub usuario: String,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[serde(with = "sql_timestamp")]
    pub fecha_creacion: NaiveDateTime,
    /// Last-update timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[serde(with = "sql_timestamp")]
    pub fecha_actualizacion: NaiveDateTime,
}

/// Response after a successful bulk insert.
#[derive(Debug, Serialize, ToSchema)]
pub struct InsertQuotesResponse {
    /// Message describing the result.
    pub message: String,
    /// Number of rows inserted.
    pub inserted: usize,
}

/// Response wrapping the fee schedule list.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeesResponse {
    /// Fee schedule entries, at most ten.
    pub fees: Vec<FeeScheduleEntry>,
}

/// Response wrapping a single bracketing fee lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeeLookupResponse {
    /// The matched fee row.
    pub fee: FeeRow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indice_parse_accepts_all_codes() {
        for indice in Indice::ALL {
            assert_eq!(Indice::parse(indice.as_str()), Some(indice));
        }
    }

    #[test]
    fn test_indice_parse_rejects_unknown_codes() {
        assert_eq!(Indice::parse("BOGUS"), None);
        assert_eq!(Indice::parse("hh"), None);
        assert_eq!(Indice::parse(""), None);
    }

    #[test]
    fn test_quote_record_serializes_camel_case_with_formats() {
        let record = QuoteRecord {
            id: 7,
            trade_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            flow_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            indice: "HH".to_string(),
            precio: 2.85,
            fuente: "ICE".to_string(),
            usuario: "loader".to_string(),
            fecha_creacion: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            fecha_actualizacion: NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(9, 0, 5)
                .unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"tradeDate\":\"2024-03-01\""));
        assert!(json.contains("\"flowDate\":\"2024-04-01\""));
        assert!(json.contains("\"precio\":2.85"));
        assert!(json.contains("\"fechaCreacion\":\"2024-03-01 08:30:00\""));
        assert!(json.contains("\"fechaActualizacion\":\"2024-03-02 09:00:05\""));
    }

    #[test]
    fn test_new_quote_deserializes_spaced_timestamps() {
        let payload = r#"{
            "tradeDate": "2024-03-01",
            "flowDate": "2024-04-01",
            "indice": "WAH",
            "precio": 1.95,
            "fuente": "NGI",
            "usuario": "loader",
            "fechaCreacion": "2024-03-01 08:30:00",
            "fechaActualizacion": "2024-03-01 08:30:00"
        }"#;

        let quote: NewQuote = serde_json::from_str(payload).unwrap();
        assert_eq!(quote.indice, "WAH");
        assert_eq!(quote.precio, dec!(1.95));
        assert_eq!(
            quote.trade_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            quote.fecha_creacion.format("%H:%M:%S").to_string(),
            "08:30:00"
        );
    }

    #[test]
    fn test_new_quote_rejects_iso_timestamps() {
        let payload = r#"{
            "tradeDate": "2024-03-01",
            "flowDate": "2024-04-01",
            "indice": "WAH",
            "precio": 1.95,
            "fuente": "NGI",
            "usuario": "loader",
            "fechaCreacion": "2024-03-01T08:30:00Z",
            "fechaActualizacion": "2024-03-01 08:30:00"
        }"#;

        assert!(serde_json::from_str::<NewQuote>(payload).is_err());
    }

    #[test]
    fn test_available_dates_response_key() {
        let response = AvailableDatesResponse {
            available_dates: vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"availableDates\":[\"2024-03-01\"]"));
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
