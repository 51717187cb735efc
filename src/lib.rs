//! # Gas Quotes Backend - REST API Server
//!
//! A small REST API over two relational tables — a time-series of gas price
//! quotes and a fee schedule — built with [Axum](https://crates.io/crates/axum)
//! and [sqlx](https://crates.io/crates/sqlx), with OpenAPI/Swagger
//! documentation via [utoipa](https://crates.io/crates/utoipa) and a
//! single-page-application static fallback for every non-API route.
//!
//! ## Key Features
//!
//! - **Parameter-validated pass-throughs**: every endpoint validates its
//!   inputs and executes exactly one parameterized SQL statement.
//!
//! - **Request-scoped connections**: each request opens its own database
//!   connection and closes it when the request ends; there is no pool and no
//!   shared cursor. A missing or unreachable database degrades the affected
//!   endpoints to 503 while health and static routes keep working.
//!
//! - **SPA fallback**: unmatched non-API paths without a file extension serve
//!   the bundle's `index.html`, so client-side routing resolves; missing
//!   assets and unmatched API paths stay genuine 404s.
//!
//! - **Structured logging**: request tracing with `tower-http`, detail for
//!   500-class failures logged server-side with generic client messages.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers, router configuration, SPA fallback |
//! | [`config`] | Environment-backed configuration |
//! | [`db`] | Per-request connection manager and row types |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/health` | Liveness check, never touches the database |
//! | GET | `/api/v1/gas?trade_date=&fuente=` | Quotes by trade date and source |
//! | GET | `/api/v1/gas/{indice}` | Distinct trade dates for an indice |
//! | GET | `/api/v1/gas/{indice}/{trade_date}` | Up to 36 full rows for a key |
//! | POST | `/api/v1/gas` | Bulk quote ingestion (JSON array) |
//! | GET | `/api/v1/gas/fee` | Fee schedule, up to 10 rows |
//! | GET | `/api/v1/gas/fee/{meses}?volumen=` | Bracketing fee lookup |
//! | GET | `/*` | Static asset or SPA `index.html` |
//!
//! ## Example Usage
//!
//! ```bash
//! # Development mode (database secrets from .env)
//! cargo run
//!
//! # With custom bind address and bundle location
//! HOST=127.0.0.1 PORT=3000 STATIC_DIR=./dist cargo run
//!
//! # Query quotes
//! curl "http://localhost:8080/api/v1/gas?trade_date=2024-03-01&fuente=ICE"
//!
//! # Available dates for Henry Hub
//! curl http://localhost:8080/api/v1/gas/HH
//!
//! # Bracketing fee lookup
//! curl "http://localhost:8080/api/v1/gas/fee/6?volumen=100"
//! ```
//!
//! ## Swagger UI
//!
//! Once the server is running, interactive API documentation is available at
//! `/swagger-ui/`.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
