//! Catalog of browsable tables.
//!
//! The schemas are immutable and declared in code; `validate` runs once at
//! startup and rejects a catalog whose column translation is not a bijection.

pub mod tables;

use contracts::catalog::TableSchema;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("table {table}: display name '{display}' is used by more than one column")]
    DuplicateDisplayName { table: String, display: String },

    #[error("table {table}: filter column '{column}' is not a declared column")]
    UnknownFilterColumn { table: String, column: String },
}

/// All browsable tables, in tab order
static ALL_TABLES: [&TableSchema; 2] = [&tables::DATASET_INDEX, &tables::TEST_CASES];

pub fn all_tables() -> &'static [&'static TableSchema] {
    &ALL_TABLES
}

/// Look up a table schema by its database name
pub fn get_table(id: &str) -> Result<&'static TableSchema, CatalogError> {
    all_tables()
        .iter()
        .find(|t| t.id == id)
        .copied()
        .ok_or_else(|| CatalogError::UnknownTable(id.to_string()))
}

/// Startup check: translation must be a bijection per table and every filter
/// must refer to a declared column
pub fn validate() -> Result<(), CatalogError> {
    for table in all_tables() {
        validate_table(table)?;
    }
    Ok(())
}

fn validate_table(table: &TableSchema) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for column in table.columns {
        if !seen.insert(column.display) {
            return Err(CatalogError::DuplicateDisplayName {
                table: table.id.to_string(),
                display: column.display.to_string(),
            });
        }
    }

    for filter in table.filters {
        if !table.columns.iter().any(|c| c.raw == filter.column) {
            return Err(CatalogError::UnknownFilterColumn {
                table: table.id.to_string(),
                column: filter.column.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{ColumnDef, TableSchema};

    #[test]
    fn test_shipped_tables_are_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_get_table() {
        assert_eq!(get_table("dataset_index").unwrap().columns.len(), 12);
        assert_eq!(get_table("test_cases").unwrap().columns.len(), 15);
    }

    #[test]
    fn test_unknown_table_is_an_error() {
        let err = get_table("no_such_table").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTable(_)));
    }

    #[test]
    fn test_duplicate_display_name_rejected() {
        static BROKEN: TableSchema = TableSchema {
            id: "broken",
            display_name: "坏表",
            primary_key: "a",
            columns: &[
                ColumnDef { raw: "a", display: "同名" },
                ColumnDef { raw: "b", display: "同名" },
            ],
            filters: &[],
        };
        let err = validate_table(&BROKEN).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateDisplayName { .. }));
    }

    #[test]
    fn test_display_translation_passthrough() {
        let table = get_table("dataset_index").unwrap();
        assert_eq!(table.display_name_of("positive_target"), "正向目标");
        // unknown raw keys pass through unchanged
        assert_eq!(table.display_name_of("mystery_column"), "mystery_column");
    }
}
