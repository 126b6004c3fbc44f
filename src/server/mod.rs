//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, business logic, data
//! access and the infrastructure that wires them together. The backend uses Axum as the
//! web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and error translation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection, migrations, shutdown signal
//! - **Router** (`router`) - Route table, OpenAPI document, sitemap and Swagger UI
//! - **Util** (`util/`) - Password hashing and request field validation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** extracts path/body, converts DTOs to params, calls service
//! 3. **Service** applies business rules, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//!
//! Any failure along the way becomes an `AppError`, rendered as an `ErrorDto`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
