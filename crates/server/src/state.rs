use sea_orm::DatabaseConnection;

/// Shared handler state. The pool is opened once at boot and closed by
/// [`crate::startup::run_until`] after the server stops.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
