use axum::Json;

use contracts::catalog::{ListTablesResponse, TableSchemaOwned};

use crate::catalog;

/// GET /api/catalog/tables
/// Table schemas the UI builds its tabs and filter checkboxes from
pub async fn list_tables() -> Json<ListTablesResponse> {
    let tables: Vec<TableSchemaOwned> = catalog::all_tables()
        .iter()
        .map(|schema| TableSchemaOwned::from(*schema))
        .collect();
    Json(ListTablesResponse { tables })
}
