//! Translates a (table, search text, filters) triple into a SQL statement
//! with bound parameters.
//!
//! Identifiers come exclusively from the static catalog and are always
//! backtick-quoted; user-supplied values are always bound, never spliced
//! into the statement text.

use std::collections::BTreeMap;

use contracts::catalog::TableSchema;

/// Result of query building
#[derive(Debug, Clone)]
pub struct SqlQuery {
    /// SQL statement text with `?` placeholders
    pub sql: String,
    /// Bound parameters, in placeholder order
    pub params: Vec<String>,
}

/// Dynamic SQL builder for one table schema
pub struct QueryBuilder<'a> {
    schema: &'a TableSchema,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Build the SELECT for the current grid state.
    ///
    /// A non-empty search string wins over filters; the two are exclusive
    /// modes.
    pub fn build(&self, search: Option<&str>, filters: &BTreeMap<String, Vec<String>>) -> SqlQuery {
        if let Some(text) = search.filter(|s| !s.trim().is_empty()) {
            return self.build_search(text);
        }
        self.build_filtered(filters)
    }

    /// Unconditional row count of the table
    pub fn build_count(&self) -> SqlQuery {
        SqlQuery {
            sql: format!("SELECT COUNT(*) AS total FROM {}", quote(self.schema.id)),
            params: Vec::new(),
        }
    }

    /// OR a "contains" predicate across every raw column
    fn build_search(&self, text: &str) -> SqlQuery {
        let mut predicates = Vec::new();
        let mut params = Vec::new();

        for column in self.schema.columns {
            predicates.push(format!("{} LIKE ?", quote(column.raw)));
            params.push(format!("%{}%", text));
        }

        SqlQuery {
            sql: format!(
                "SELECT * FROM {} WHERE {}",
                quote(self.schema.id),
                predicates.join(" OR ")
            ),
            params,
        }
    }

    /// AND one predicate group per filtered column; within a group the
    /// selected values are ORed
    fn build_filtered(&self, filters: &BTreeMap<String, Vec<String>>) -> SqlQuery {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        for (column, values) in filters {
            if values.is_empty() {
                continue;
            }
            // A column the schema no longer declares comes from stale UI
            // state; skip it rather than fail the whole query
            let Some(def) = self.schema.filter_def(column) else {
                continue;
            };

            if def.set_typed {
                let membership: Vec<String> = values
                    .iter()
                    .map(|_| format!("FIND_IN_SET(?, {})", quote(def.column)))
                    .collect();
                conditions.push(format!("({})", membership.join(" OR ")));
            } else {
                let placeholders = vec!["?"; values.len()].join(", ");
                conditions.push(format!("{} IN ({})", quote(def.column), placeholders));
            }
            params.extend(values.iter().cloned());
        }

        let sql = if conditions.is_empty() {
            format!("SELECT * FROM {}", quote(self.schema.id))
        } else {
            format!(
                "SELECT * FROM {} WHERE {}",
                quote(self.schema.id),
                conditions.join(" AND ")
            )
        };

        SqlQuery { sql, params }
    }
}

/// Backtick-quote a schema identifier for MySQL
fn quote(identifier: &str) -> String {
    format!("`{}`", identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn filters(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(col, vals)| {
                (
                    col.to_string(),
                    vals.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_no_input_selects_all() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema).build(None, &BTreeMap::new());
        assert_eq!(query.sql, "SELECT * FROM `dataset_index`");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_set_typed_column_uses_find_in_set() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema)
            .build(None, &filters(&[("positive_target", &["行人"])]));
        assert_eq!(
            query.sql,
            "SELECT * FROM `dataset_index` WHERE (FIND_IN_SET(?, `positive_target`))"
        );
        assert_eq!(query.params, vec!["行人"]);
    }

    #[test]
    fn test_display_named_filter_resolves_to_raw_column() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema)
            .build(None, &filters(&[("正向目标", &["行人"])]));
        assert_eq!(
            query.sql,
            "SELECT * FROM `dataset_index` WHERE (FIND_IN_SET(?, `positive_target`))"
        );
        assert_eq!(query.params, vec!["行人"]);
    }

    #[test]
    fn test_plain_column_uses_in() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema)
            .build(None, &filters(&[("target_distance", &["10m", "15m"])]));
        assert_eq!(
            query.sql,
            "SELECT * FROM `dataset_index` WHERE `target_distance` IN (?, ?)"
        );
        assert_eq!(query.params, vec!["10m", "15m"]);
    }

    #[test]
    fn test_columns_are_anded_values_are_ored() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema).build(
            None,
            &filters(&[
                ("positive_target", &["行人", "车辆"]),
                ("target_distance", &["10m"]),
            ]),
        );
        assert_eq!(
            query.sql,
            "SELECT * FROM `dataset_index` WHERE \
             (FIND_IN_SET(?, `positive_target`) OR FIND_IN_SET(?, `positive_target`)) \
             AND `target_distance` IN (?)"
        );
        assert_eq!(query.params, vec!["行人", "车辆", "10m"]);
    }

    #[test]
    fn test_search_ors_every_column() {
        let schema = catalog::get_table("test_cases").unwrap();
        let query = QueryBuilder::new(schema).build(Some("onnx"), &BTreeMap::new());
        assert!(query.sql.starts_with("SELECT * FROM `test_cases` WHERE "));
        assert_eq!(query.sql.matches(" LIKE ?").count(), 15);
        assert_eq!(query.params.len(), 15);
        assert!(query.params.iter().all(|p| p == "%onnx%"));
    }

    #[test]
    fn test_search_wins_over_filters() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let active = filters(&[("positive_target", &["行人"])]);
        let with_filters = QueryBuilder::new(schema).build(Some("bmp"), &active);
        let search_only = QueryBuilder::new(schema).build(Some("bmp"), &BTreeMap::new());
        assert_eq!(with_filters.sql, search_only.sql);
        assert_eq!(with_filters.params, search_only.params);
    }

    #[test]
    fn test_blank_search_falls_back_to_filters() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let active = filters(&[("target_distance", &["20m"])]);
        let query = QueryBuilder::new(schema).build(Some("   "), &active);
        assert!(query.sql.contains("`target_distance` IN (?)"));
    }

    #[test]
    fn test_unknown_filter_column_is_skipped() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema).build(
            None,
            &filters(&[("dropped_column", &["x"]), ("target_distance", &["10m"])]),
        );
        assert_eq!(
            query.sql,
            "SELECT * FROM `dataset_index` WHERE `target_distance` IN (?)"
        );
        assert_eq!(query.params, vec!["10m"]);
    }

    #[test]
    fn test_empty_value_list_is_omitted() {
        let schema = catalog::get_table("dataset_index").unwrap();
        let query = QueryBuilder::new(schema).build(None, &filters(&[("target_distance", &[])]));
        assert_eq!(query.sql, "SELECT * FROM `dataset_index`");
    }

    #[test]
    fn test_count_statement() {
        let schema = catalog::get_table("test_cases").unwrap();
        let query = QueryBuilder::new(schema).build_count();
        assert_eq!(query.sql, "SELECT COUNT(*) AS total FROM `test_cases`");
    }
}
