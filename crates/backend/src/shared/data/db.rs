use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};

use crate::shared::config::DatabaseConfig;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect to MySQL and store the connection for the process lifetime.
/// The sea-orm connection wraps a pool; individual queries acquire and
/// release from it per call.
pub async fn initialize_database(config: &DatabaseConfig) -> anyhow::Result<()> {
    let url = config.url();
    tracing::info!(
        "Connecting to MySQL at {}:{}/{}",
        config.host,
        config.port,
        config.database
    );
    let conn = Database::connect(&url).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Connection accessor for callers that degrade gracefully when the
/// database never came up (the server keeps serving in no-data mode)
pub fn try_connection() -> Option<&'static DatabaseConnection> {
    DB_CONN.get()
}
