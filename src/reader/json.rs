use std::path::Path;

use serde_json::Value;

use crate::error::Error;
use crate::reader::RecordSet;

/// Read and parse a JSON data file.
pub fn read_records(
    path: &Path,
    table_name: Option<&str>,
) -> Result<(Option<String>, RecordSet), Error> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_records(&text, table_name)
}

/// Parse a JSON document of shape `{ "<table>": [ {col: value, ...}, ... ] }`.
///
/// The key order of the first record defines the column set. When a table
/// name is supplied and present as an outer key its record array is used;
/// when supplied but absent the first outer key's array is used and the
/// supplied name wins. Without a supplied name the first outer key is both
/// the table name and the record source.
pub fn parse_records(
    text: &str,
    table_name: Option<&str>,
) -> Result<(Option<String>, RecordSet), Error> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| Error::Parse(format!("malformed JSON document: {e}")))?;
    let Value::Object(root) = document else {
        return Err(Error::Parse(
            "top-level JSON value must be an object mapping a table name to its records"
                .to_string(),
        ));
    };

    let (resolved, records_value) = match table_name {
        Some(name) => match root.get(name) {
            Some(value) => (Some(name.to_string()), Some(value)),
            None => (Some(name.to_string()), root.values().next()),
        },
        None => (root.keys().next().cloned(), root.values().next()),
    };

    let Some(records_value) = records_value else {
        // An empty document has no records to convert.
        return Ok((resolved, RecordSet::default()));
    };
    let Value::Array(records) = records_value else {
        return Err(Error::Parse(
            "table value must be an array of records".to_string(),
        ));
    };
    let Some(first) = records.first() else {
        return Ok((resolved, RecordSet::default()));
    };
    let Value::Object(first) = first else {
        return Err(Error::Parse("record 0 is not an object".to_string()));
    };

    let columns: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Value::Object(map) = record else {
            return Err(Error::Parse(format!("record {index} is not an object")));
        };
        if map.len() != columns.len() {
            return Err(Error::Parse(format!(
                "record {index}: expected {} columns, found {}",
                columns.len(),
                map.len()
            )));
        }
        let mut row = Vec::with_capacity(columns.len());
        for (key, value) in map {
            row.push(scalar_text(key, value, index)?);
        }
        rows.push(row);
    }

    Ok((resolved, RecordSet { columns, rows }))
}

/// Raw-string form of one scalar record value.
///
/// Numbers keep their JSON textual form, so a float like `3.14` stays
/// `"3.14"` and is later quoted by the formatter rather than treated as
/// numeric. Booleans are emitted as `1`/`0`, null as the empty string.
fn scalar_text(column: &str, value: &Value, record: usize) -> Result<String, Error> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok("0".to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) | Value::Object(_) => Err(Error::Parse(format!(
            "record {record}: column '{column}' holds a nested value, expected a scalar"
        ))),
    }
}
