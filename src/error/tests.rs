//! Unit tests for error module.

use super::*;
use axum::body::to_bytes;

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Something went wrong".to_string(),
        code: "INTERNAL_ERROR".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"Something went wrong\""));
    assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_invalid_indice_display() {
    let error = ApiError::InvalidIndice("BOGUS".to_string());
    assert_eq!(format!("{}", error), "Invalid indice: BOGUS");
}

#[test]
fn test_api_error_invalid_request_display() {
    let error = ApiError::InvalidRequest("Missing volumen".to_string());
    assert_eq!(format!("{}", error), "Invalid request: Missing volumen");
}

#[test]
fn test_api_error_not_found_display() {
    let error = ApiError::NotFound("No matching fee found".to_string());
    assert_eq!(format!("{}", error), "Not found: No matching fee found");
}

#[test]
fn test_api_error_service_unavailable_display() {
    let error = ApiError::ServiceUnavailable;
    assert_eq!(format!("{}", error), "Database unavailable");
}

// ============================================================================
// Status Mapping Tests
// ============================================================================

#[test]
fn test_status_mapping() {
    let cases = [
        (
            ApiError::InvalidIndice("X".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::InvalidRequest("x".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (ApiError::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE),
        (ApiError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (
            ApiError::Database("boom".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Internal("boom".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.into_response().status(), expected);
    }
}

#[test]
fn test_db_error_converts_to_service_unavailable() {
    let error: ApiError = DbError::NotConfigured.into();
    assert!(matches!(error, ApiError::ServiceUnavailable));
}

// ============================================================================
// Message Policy Tests
// ============================================================================

#[tokio::test]
async fn test_internal_errors_hide_detail_from_client() {
    let response = ApiError::Database("connection reset by peer".to_string()).into_response();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "An error occurred");
    assert_eq!(json["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_client_errors_keep_descriptive_message() {
    let response = ApiError::InvalidIndice("BOGUS".to_string()).into_response();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Invalid indice: BOGUS");
    assert_eq!(json["code"], "INVALID_INDICE");
}
