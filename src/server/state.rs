//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Built once during startup and cloned for each incoming request via Axum's state
/// extraction. `DatabaseConnection` is a pool, so clones share the same connections;
/// each request checks a connection out only for the duration of a query or transaction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
