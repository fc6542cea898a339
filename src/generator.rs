use std::fmt;

use crate::error::Error;

/// The statement shape to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// One `INSERT INTO ... VALUES ...;` per row.
    Insert,
    /// One `UPDATE ... SET ... WHERE ...;` per row.
    Update,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Insert => write!(f, "insert"),
            StatementKind::Update => write!(f, "update"),
        }
    }
}

impl std::str::FromStr for StatementKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insert" => Ok(StatementKind::Insert),
            "update" => Ok(StatementKind::Update),
            _ => Err(format!("Invalid statement kind: {s}")),
        }
    }
}

/// Render one SQL statement per formatted row.
///
/// `identifier_column` is required for update mode and must name a column in
/// `columns`; it is ignored for insert mode. The renderer returns text only,
/// writing the destination file is the output module's job.
pub fn render_statements(
    kind: StatementKind,
    table: &str,
    columns: &[String],
    rows: &[Vec<String>],
    identifier_column: Option<&str>,
) -> Result<Vec<String>, Error> {
    match kind {
        StatementKind::Insert => Ok(render_inserts(table, columns, rows)),
        StatementKind::Update => {
            let identifier = identifier_column.ok_or_else(|| {
                Error::Config("update mode requires an identifier column".to_string())
            })?;
            render_updates(table, columns, rows, identifier)
        }
    }
}

/// Render `INSERT INTO <table> (<cols>) VALUES (<vals>);` for every row.
pub fn render_inserts(table: &str, columns: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let prefix = format!("INSERT INTO {table} ({}) VALUES (", columns.join(","));
    rows.iter()
        .map(|row| format!("{prefix}{});", row.join(",")))
        .collect()
}

/// Render `UPDATE <table> SET <col>=<val>,... WHERE <id>=<idval>;` for every
/// row, excluding the identifier column from the SET clause.
///
/// The identifier's position is resolved once from the column set, never by
/// searching row values, so two columns sharing an equal value cannot be
/// confused for each other.
pub fn render_updates(
    table: &str,
    columns: &[String],
    rows: &[Vec<String>],
    identifier_column: &str,
) -> Result<Vec<String>, Error> {
    let id_index = columns
        .iter()
        .position(|column| column == identifier_column)
        .ok_or_else(|| {
            Error::Config(format!(
                "identifier column '{identifier_column}' not found in columns: {}",
                columns.join(",")
            ))
        })?;

    let mut statements = Vec::with_capacity(rows.len());
    for row in rows {
        let id_value = row.get(id_index).ok_or_else(|| {
            Error::Parse(format!(
                "row has {} values but the column set has {}",
                row.len(),
                columns.len()
            ))
        })?;
        let assignments: Vec<String> = columns
            .iter()
            .zip(row)
            .enumerate()
            .filter(|(index, _)| *index != id_index)
            .map(|(_, (column, value))| format!("{column}={value}"))
            .collect();
        statements.push(format!(
            "UPDATE {table} SET {} WHERE {identifier_column}={id_value};",
            assignments.join(",")
        ));
    }
    Ok(statements)
}
