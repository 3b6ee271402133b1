use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};

use contracts::export::ExportArtifact;
use contracts::query::QueryResponse;

use super::xlsx;
use super::{ExportError, ExportFormat};

/// UTF-8 byte-order mark, so spreadsheet tools render non-ASCII headers
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Write the given view to a fresh file under `export_dir`.
///
/// An empty result writes nothing and returns `Ok(None)`. The filename
/// carries a second-granularity timestamp; two exports of the same table
/// within one second would collide, which the product accepts.
pub fn export(
    table_display_name: &str,
    result: &QueryResponse,
    format: ExportFormat,
    export_dir: &Path,
) -> Result<Option<ExportArtifact>, ExportError> {
    if result.rows.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(export_dir)?;

    let filename = export_filename(table_display_name, format);
    let path = export_dir.join(&filename);

    match format {
        ExportFormat::Csv => write_csv(&path, result)?,
        ExportFormat::Excel => xlsx::write_xlsx(&path, "数据", result)?,
        ExportFormat::Json => write_json(&path, result)?,
    }

    Ok(Some(ExportArtifact {
        file_path: path.to_string_lossy().into_owned(),
        format: format.as_str().to_string(),
        row_count: result.rows.len(),
        created_at: Utc::now(),
    }))
}

/// `{display_name}_{YYYYMMDD_HHMMSS}.{ext}`, sanitized
pub fn export_filename(table_display_name: &str, format: ExportFormat) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    sanitize_filename(&format!(
        "{}_{}.{}",
        table_display_name,
        timestamp,
        format.extension()
    ))
}

/// Replace filesystem-illegal characters and cap the length at 200 chars
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .take(200)
        .collect()
}

fn write_csv(path: &PathBuf, result: &QueryResponse) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(result.columns.iter().map(|c| c.display.as_str()))?;

    for row in &result.rows {
        let record: Vec<String> = result
            .columns
            .iter()
            .map(|c| {
                row.get(&c.display)
                    .map(|cell| cell.render())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Array of row objects, keys in display-column order, non-ASCII kept
/// literal, 2-space indentation
fn write_json(path: &PathBuf, result: &QueryResponse) -> Result<(), ExportError> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = result
        .rows
        .iter()
        .map(|row| {
            result
                .columns
                .iter()
                .map(|c| {
                    let value = row
                        .get(&c.display)
                        .map(|cell| serde_json::to_value(cell).unwrap_or(serde_json::Value::Null))
                        .unwrap_or(serde_json::Value::Null);
                    (c.display.clone(), value)
                })
                .collect()
        })
        .collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &rows)?;
    Ok(())
}
