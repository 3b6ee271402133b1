//! Runs translated statements against MySQL and shapes rows for the grid.
//!
//! Failure policy: a connection or statement failure never crashes the
//! process; the caller gets an empty result with an error indicator string
//! and the UI shows that instead of data.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use contracts::catalog::TableSchema;
use contracts::query::{CellValue, ColumnHeader, QueryResponse};

use crate::catalog::{self, CatalogError};
use crate::query::builder::{QueryBuilder, SqlQuery};
use crate::shared::data::db;
use crate::shared::format;
use crate::shared::stopwatch::OperationTimer;

/// Fetch the grid content for one table with the current search/filter
/// state. Unknown table ids are a caller error; database failures degrade
/// to an empty response.
pub async fn fetch(
    table_id: &str,
    search: Option<&str>,
    filters: &BTreeMap<String, Vec<String>>,
) -> Result<QueryResponse, CatalogError> {
    let schema = catalog::get_table(table_id)?;
    let timer = OperationTimer::start(format!("query_{}", table_id));

    let builder = QueryBuilder::new(schema);
    let search_text = search.filter(|s| !s.trim().is_empty());
    let query = builder.build(search_text, filters);

    let columns = headers(schema);

    let conn = match db::try_connection() {
        Some(conn) => conn,
        None => {
            let elapsed = timer.finish();
            return Ok(degraded(
                schema,
                columns,
                "数据库连接失败".to_string(),
                elapsed,
            ));
        }
    };

    let rows = match execute(conn, &query).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("query failed for table {}: {}", table_id, e);
            let elapsed = timer.finish();
            return Ok(degraded(
                schema,
                columns,
                format!("数据加载失败: {}", e),
                elapsed,
            ));
        }
    };

    let matched = rows.len() as u64;
    let mapped: Vec<HashMap<String, CellValue>> = rows
        .iter()
        .map(|row| translate_row(schema, row))
        .collect();

    // Total count runs regardless of the active filters; on failure the
    // matched count is the best remaining answer
    let total = total_count(conn, schema).await.unwrap_or(matched);

    let elapsed = timer.finish();
    let status = match search_text {
        Some(text) => format::search_status_message(text, matched, total, schema.display_name),
        None => format::status_message(total, matched, schema.display_name),
    };

    Ok(QueryResponse {
        table: schema.id.to_string(),
        columns,
        rows: mapped,
        total_count: total,
        matched_count: matched,
        elapsed_seconds: elapsed,
        status,
        error: None,
    })
}

/// Table statistics: (total, matched). Total is an unconditional COUNT(*);
/// matched re-runs the filtered query and counts the returned rows.
pub async fn count(
    table_id: &str,
    filters: &BTreeMap<String, Vec<String>>,
) -> Result<(u64, u64), CatalogError> {
    let schema = catalog::get_table(table_id)?;
    let Some(conn) = db::try_connection() else {
        return Ok((0, 0));
    };

    let total = total_count(conn, schema).await.unwrap_or(0);
    if filters.values().all(|v| v.is_empty()) {
        return Ok((total, total));
    }

    let query = QueryBuilder::new(schema).build(None, filters);
    let matched = match execute(conn, &query).await {
        Ok(rows) => rows.len() as u64,
        Err(e) => {
            tracing::error!("count failed for table {}: {}", table_id, e);
            0
        }
    };
    Ok((total, matched))
}

/// Execute a translated statement and return the raw rows
async fn execute(
    conn: &DatabaseConnection,
    query: &SqlQuery,
) -> Result<Vec<sea_orm::QueryResult>, sea_orm::DbErr> {
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::MySql,
        &query.sql,
        query.params.iter().map(|p| p.clone().into()),
    );
    conn.query_all(stmt).await
}

async fn total_count(
    conn: &DatabaseConnection,
    schema: &TableSchema,
) -> Option<u64> {
    let query = QueryBuilder::new(schema).build_count();
    let stmt = Statement::from_string(DatabaseBackend::MySql, query.sql);
    match conn.query_one(stmt).await {
        Ok(Some(row)) => row.try_get::<i64>("", "total").ok().map(|n| n as u64),
        Ok(None) => None,
        Err(e) => {
            tracing::error!("total count failed for table {}: {}", schema.id, e);
            None
        }
    }
}

fn headers(schema: &TableSchema) -> Vec<ColumnHeader> {
    schema
        .columns
        .iter()
        .map(|c| ColumnHeader {
            raw: c.raw.to_string(),
            display: c.display.to_string(),
        })
        .collect()
}

/// Remap one raw row's keys through the table's column translation
fn translate_row(
    schema: &TableSchema,
    row: &sea_orm::QueryResult,
) -> HashMap<String, CellValue> {
    schema
        .columns
        .iter()
        .map(|column| {
            (
                schema.display_name_of(column.raw).to_string(),
                decode_cell(row, column.raw),
            )
        })
        .collect()
}

/// Decode a cell without knowing the column type up front: integers,
/// then floats, then datetimes, then text
fn decode_cell(row: &sea_orm::QueryResult, column: &str) -> CellValue {
    if let Ok(Some(v)) = row.try_get::<Option<i64>>("", column) {
        return CellValue::Integer(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<f64>>("", column) {
        return CellValue::Number(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<chrono::NaiveDateTime>>("", column) {
        return CellValue::Text(v.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(Some(v)) = row.try_get::<Option<String>>("", column) {
        return CellValue::Text(v);
    }
    CellValue::Null
}

fn degraded(
    schema: &TableSchema,
    columns: Vec<ColumnHeader>,
    error: String,
    elapsed: f64,
) -> QueryResponse {
    QueryResponse {
        table: schema.id.to_string(),
        columns,
        rows: Vec::new(),
        total_count: 0,
        matched_count: 0,
        elapsed_seconds: elapsed,
        status: format!("❌ **错误**: {}", error),
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit tests run without a database; both operations must degrade
    // instead of failing

    #[tokio::test]
    async fn test_fetch_without_connection_degrades() {
        let response = fetch("dataset_index", None, &BTreeMap::new())
            .await
            .unwrap();
        assert!(response.rows.is_empty());
        assert_eq!(response.total_count, 0);
        assert!(response.error.is_some());
        assert!(response.status.starts_with("❌"));
        // headers survive so the grid keeps its shape
        assert_eq!(response.columns.len(), 12);
    }

    #[tokio::test]
    async fn test_fetch_unknown_table_is_an_error() {
        let err = fetch("no_such_table", None, &BTreeMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTable(_)));
    }

    #[tokio::test]
    async fn test_count_without_connection_is_zero() {
        let counts = count("test_cases", &BTreeMap::new()).await.unwrap();
        assert_eq!(counts, (0, 0));
    }

    #[tokio::test]
    async fn test_count_unknown_table_is_an_error() {
        assert!(count("no_such_table", &BTreeMap::new()).await.is_err());
    }
}
