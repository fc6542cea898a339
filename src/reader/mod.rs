/// Delimited-text record reading.
pub mod csv;
/// Hierarchical-document record reading.
pub mod json;

use std::fmt;
use std::path::Path;

use crate::error::Error;

pub use self::csv::CsvOptions;

/// The columns and rows parsed from one input file.
///
/// `columns` is the ordered column set fixed by the input header (CSV) or by
/// the first record's key order (JSON); it is never re-sorted. Every row
/// holds exactly `columns.len()` raw string values, positionally aligned to
/// the column set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// Column names in load order.
    pub columns: Vec<String>,
    /// Raw row values, one `Vec` per input record.
    pub rows: Vec<Vec<String>>,
}

/// Supported input file formats.
///
/// The format is always chosen by configuration; file content is never
/// sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Delimited text with a header line.
    Csv,
    /// A single JSON document mapping a table name to an array of records.
    Json,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(format!("Invalid input format: {s}")),
        }
    }
}

/// Read the source file in the configured format.
///
/// Returns the resolved table name alongside the records: for CSV input the
/// table name is whatever the caller supplied, for JSON input the document's
/// outer key can supply it instead.
pub fn read_records(
    path: &Path,
    format: InputFormat,
    table_name: Option<&str>,
    options: &CsvOptions,
) -> Result<(Option<String>, RecordSet), Error> {
    match format {
        InputFormat::Csv => {
            let records = csv::read_records(path, options)?;
            Ok((table_name.map(str::to_string), records))
        }
        InputFormat::Json => json::read_records(path, table_name),
    }
}
