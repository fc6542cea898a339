use std::path::Path;

use crate::error::Error;
use crate::reader::RecordSet;

/// Splitting options for delimited-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Character separating fields on every line.
    pub separator: char,
    /// Quoting character stripped from the header line.
    pub quote_char: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            quote_char: '\'',
        }
    }
}

/// Read and parse a delimited-text file.
pub fn read_records(path: &Path, options: &CsvOptions) -> Result<RecordSet, Error> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_records(&text, options)
}

/// Parse delimited text into a record set.
///
/// The first line is the header; the quote character is stripped from it
/// before splitting. Data lines are split verbatim on every occurrence of
/// the separator, with quote characters left in the raw values for the
/// formatter to normalize later. Lines end at a single `\n`; there is no
/// support for embedded newlines or escaped separators inside quoted
/// fields. Empty input yields an empty column set and zero rows.
pub fn parse_records(text: &str, options: &CsvOptions) -> Result<RecordSet, Error> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // A final newline terminates the last record, it does not open a new one.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let Some((header, data)) = lines.split_first() else {
        return Ok(RecordSet::default());
    };

    let header = header.replace(options.quote_char, "");
    let columns: Vec<String> = header
        .split(options.separator)
        .map(str::to_string)
        .collect();

    let mut rows = Vec::with_capacity(data.len());
    for (index, line) in data.iter().enumerate() {
        let row: Vec<String> = line.split(options.separator).map(str::to_string).collect();
        if row.len() != columns.len() {
            return Err(Error::Parse(format!(
                "line {}: expected {} fields, found {}",
                index + 2,
                columns.len(),
                row.len()
            )));
        }
        rows.push(row);
    }

    Ok(RecordSet { columns, rows })
}
