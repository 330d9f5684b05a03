use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, TrialTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Whether result files for an experiment group carry a header row.
///
/// The upstream data-collection tool wrote all Exp 1 runs without column
/// names; every later group has them. The group string is the folder the
/// files live under (`"Exp 1A"`, `"Exp 2C"`, ...).
pub fn group_has_header(group: &str) -> bool {
    !group.contains('1')
}

/// Load one result file from an experiment-group folder into a [`TrialTable`].
///
/// Header presence is decided by [`group_has_header`] on the group folder's
/// name, so
/// `load_table("Exp 1A", "p01.csv")` reads headerless and addresses columns
/// purely by position, while `load_table("Exp 2B", "p01.csv")` consumes the
/// header row and keeps its names.
pub fn load_table(folder: impl AsRef<Path>, file_name: &str) -> Result<TrialTable> {
    let folder = folder.as_ref();
    let path = folder.join(file_name);
    // The contract keys on the group folder's own name, not the path above it.
    let group = folder
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| folder.to_string_lossy());
    let has_header = group_has_header(&group);

    let file = std::fs::File::open(&path)
        .with_context(|| format!("opening result file {}", path.display()))?;
    let table = read_table(file, has_header)
        .with_context(|| format!("parsing result file {}", path.display()))?;

    log::debug!(
        "loaded {}: {} rows x {} columns (header: {has_header})",
        path.display(),
        table.len(),
        table.width()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Reader-level parsing
// ---------------------------------------------------------------------------

/// Parse delimited trial data from any reader.
///
/// With `has_header == false`, column names are synthesized (`column_1`,
/// `column_2`, ...) so downstream logic resolves positions to identifiers the
/// same way for every file. Ragged rows are padded with nulls (or truncated)
/// to the header width.
pub fn read_table<R: Read>(reader: R, has_header: bool) -> Result<TrialTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut column_names: Vec<String> = if has_header {
        csv_reader
            .headers()
            .context("reading header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect()
    } else {
        Vec::new()
    };

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if column_names.is_empty() {
            // Headerless file: the first record fixes the width.
            column_names = (1..=record.len()).map(|i| format!("column_{i}")).collect();
        }

        let mut row: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        while row.len() < column_names.len() {
            row.push(CellValue::Null);
        }
        row.truncate(column_names.len());
        rows.push(row);
    }

    if column_names.is_empty() {
        bail!("empty file: no header and no data rows");
    }

    Ok(TrialTable::new(column_names, rows))
}
