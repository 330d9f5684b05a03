use std::fmt;

use crate::error::{ConditionError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell in a trial table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the mixed numeric/string columns
/// of the upstream data-collection tool's CSV output.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Empty field in the source file.
    Null,
}

impl CellValue {
    /// Parse a raw CSV field into the narrowest matching type.
    pub fn parse(field: &str) -> CellValue {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return CellValue::Float(f);
        }
        CellValue::Text(trimmed.to_string())
    }

    /// Try to interpret the value as an `f64` for summary statistics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Exact equality against an integer condition code.
    ///
    /// Float cells match only when they carry the code exactly (a file that
    /// stores reward `3` as `3.0` still selects); text and null never match.
    pub fn matches_code(&self, code: i64) -> bool {
        match self {
            CellValue::Integer(i) => *i == code,
            CellValue::Float(f) => *f == code as f64,
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// TrialTable – one loaded result file
// ---------------------------------------------------------------------------

/// An in-memory trial table: ordered rows of fixed width, with a name for
/// every column (real header names, or synthesized `column_N` names for
/// headerless files). Never mutated after load; filtering copies rows into
/// a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialTable {
    /// Ordered column names; `width()` is derived from this.
    pub column_names: Vec<String>,
    /// Row-major cell data. Every row has exactly `width()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl TrialTable {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        TrialTable { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.column_names.len()
    }

    /// Resolve a configured column position to this table's identifier,
    /// failing when the position lies beyond the table's width (the file
    /// layout does not match the experiment the caller asked for).
    pub fn require_column(&self, position: usize) -> Result<usize> {
        if position < self.width() {
            Ok(position)
        } else {
            Err(ConditionError::ColumnOutOfBounds {
                column: position,
                width: self.width(),
            })
        }
    }

    /// Name of the column at `position`, if any.
    pub fn column_name(&self, position: usize) -> Option<&str> {
        self.column_names.get(position).map(|s| s.as_str())
    }

    /// Cell at (`row`, `column`), if both indices are in range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |row| row.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_narrowest_type() {
        assert_eq!(CellValue::parse("3"), CellValue::Integer(3));
        assert_eq!(CellValue::parse("0.5"), CellValue::Float(0.5));
        assert_eq!(CellValue::parse(" left "), CellValue::Text("left".into()));
        assert_eq!(CellValue::parse(""), CellValue::Null);
        assert_eq!(CellValue::parse("   "), CellValue::Null);
    }

    #[test]
    fn test_matches_code() {
        assert!(CellValue::Integer(3).matches_code(3));
        assert!(CellValue::Float(3.0).matches_code(3));
        assert!(!CellValue::Float(3.5).matches_code(3));
        assert!(!CellValue::Text("3".into()).matches_code(3));
        assert!(!CellValue::Null.matches_code(0));
    }

    #[test]
    fn test_require_column_bounds() {
        let table = TrialTable::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Integer(1), CellValue::Integer(2)]],
        );
        assert_eq!(table.require_column(1).unwrap(), 1);
        let err = table.require_column(2).unwrap_err();
        assert!(matches!(
            err,
            ConditionError::ColumnOutOfBounds { column: 2, width: 2 }
        ));
    }
}
