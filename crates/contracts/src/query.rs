use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Request for a grid refresh: search or filter one table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Table to query (e.g., "dataset_index")
    pub table: String,
    /// Full-text search string; when non-empty, filters are ignored
    #[serde(default)]
    pub search: Option<String>,
    /// Raw column name -> selected values
    #[serde(default)]
    pub filters: BTreeMap<String, Vec<String>>,
}

impl QueryRequest {
    /// Search and filter are mutually exclusive modes: a non-empty search
    /// string wins and active filters are dropped
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Column header of the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    /// Database column name
    pub raw: String,
    /// Translated name the grid shows (also the row key)
    pub display: String,
}

/// Value in a grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Null,
}

impl CellValue {
    /// Plain-text rendering, used by the CSV and Excel writers
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

/// Response for a grid refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub table: String,
    /// Headers in grid order
    pub columns: Vec<ColumnHeader>,
    /// Rows keyed by display column name
    pub rows: Vec<HashMap<String, CellValue>>,
    /// Unfiltered row count of the table
    pub total_count: u64,
    /// Row count after search/filter
    pub matched_count: u64,
    /// Query duration, seconds
    pub elapsed_seconds: f64,
    /// Summary line for the stats text above the grid
    pub status: String,
    /// Set when the database was unreachable or the statement failed;
    /// rows are empty in that case and the UI shows this instead of data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
