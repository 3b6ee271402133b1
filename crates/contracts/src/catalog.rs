use serde::{Deserialize, Serialize};

/// Schema of one browsable database table (static version for backend)
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Database table name (e.g., "dataset_index")
    pub id: &'static str,
    /// Human-readable table name shown in the UI (e.g., "数据集索引")
    pub display_name: &'static str,
    /// Primary key column
    pub primary_key: &'static str,
    /// Raw column -> display name translation, in grid order
    pub columns: &'static [ColumnDef],
    /// Columns with enumerated filter values
    pub filters: &'static [FilterDef],
}

/// One column of a browsable table (static version)
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Database column name (e.g., "positive_target")
    pub raw: &'static str,
    /// User-facing translated name (e.g., "正向目标")
    pub display: &'static str,
}

/// A filterable column and its legal values (static version)
#[derive(Debug, Clone)]
pub struct FilterDef {
    /// Database column name
    pub column: &'static str,
    /// Values the UI may offer as checkboxes
    pub allowed: &'static [&'static str],
    /// Whether the stored value encodes multiple comma-separated tags,
    /// matched with FIND_IN_SET rather than equality
    pub set_typed: bool,
}

impl TableSchema {
    /// Translate a raw column name; unknown names pass through unchanged
    pub fn display_name_of<'a>(&self, raw: &'a str) -> &'a str {
        self.columns
            .iter()
            .find(|c| c.raw == raw)
            .map(|c| c.display)
            .unwrap_or(raw)
    }

    /// Reverse translation: display name back to the raw column
    pub fn raw_name_of(&self, display: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|c| c.display == display)
            .map(|c| c.raw)
    }

    /// Filter lookup tolerating either the raw or the display column name,
    /// since UI state may carry the translated label
    pub fn filter_def(&self, column: &str) -> Option<&FilterDef> {
        let by_raw = self.filters.iter().find(|f| f.column == column);
        by_raw.or_else(|| {
            let raw = self.raw_name_of(column)?;
            self.filters.iter().find(|f| f.column == raw)
        })
    }
}

/// Owned version of TableSchema for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchemaOwned {
    pub id: String,
    pub display_name: String,
    pub primary_key: String,
    pub columns: Vec<ColumnDefOwned>,
    pub filters: Vec<FilterDefOwned>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefOwned {
    pub raw: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefOwned {
    pub column: String,
    pub display: String,
    pub allowed: Vec<String>,
    pub set_typed: bool,
}

impl From<&TableSchema> for TableSchemaOwned {
    fn from(schema: &TableSchema) -> Self {
        Self {
            id: schema.id.to_string(),
            display_name: schema.display_name.to_string(),
            primary_key: schema.primary_key.to_string(),
            columns: schema
                .columns
                .iter()
                .map(|c| ColumnDefOwned {
                    raw: c.raw.to_string(),
                    display: c.display.to_string(),
                })
                .collect(),
            filters: schema
                .filters
                .iter()
                .map(|f| FilterDefOwned {
                    column: f.column.to_string(),
                    display: schema.display_name_of(f.column).to_string(),
                    allowed: f.allowed.iter().map(|v| v.to_string()).collect(),
                    set_typed: f.set_typed,
                })
                .collect(),
        }
    }
}

/// Response listing the browsable tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTablesResponse {
    pub tables: Vec<TableSchemaOwned>,
}
