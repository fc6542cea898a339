use std::path::PathBuf;

use crate::error::Error;
use crate::formatter;
use crate::generator::{self, StatementKind};
use crate::output;
use crate::reader::{self, CsvOptions, InputFormat};

/// Full configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Statement shape to generate.
    pub mode: StatementKind,
    /// Input file format; never inferred from content.
    pub format: InputFormat,
    /// Target table name. Required for CSV input; JSON input may carry it
    /// as the document's outer key instead.
    pub table_name: Option<String>,
    /// CSV splitting options; ignored for JSON input.
    pub csv: CsvOptions,
    /// Column named in the WHERE clause of UPDATE statements.
    pub identifier_column: Option<String>,
    /// Path of the data file to read.
    pub source: PathBuf,
    /// Path of the SQL script to write.
    pub destination: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Number of statements written to the destination.
    pub statements_written: usize,
}

/// Run the conversion: read the source, format the values, render the
/// statements, write the script.
///
/// Configuration is validated before any I/O is attempted. Stages run in
/// strict sequence with no retries; the first failure aborts the run and is
/// returned unmodified.
pub fn run(config: &Config) -> Result<RunSummary, Error> {
    validate(config)?;

    let (table_name, records) = reader::read_records(
        &config.source,
        config.format,
        config.table_name.as_deref(),
        &config.csv,
    )?;
    let formatted = formatter::format_rows(&records.rows);
    let table_name = table_name.unwrap_or_default();
    let statements = generator::render_statements(
        config.mode,
        &table_name,
        &records.columns,
        &formatted,
        config.identifier_column.as_deref(),
    )?;
    output::write_statements(&config.destination, &statements)?;

    Ok(RunSummary {
        statements_written: statements.len(),
    })
}

fn validate(config: &Config) -> Result<(), Error> {
    if config.mode == StatementKind::Update && config.identifier_column.is_none() {
        return Err(Error::Config(
            "update mode requires an identifier column".to_string(),
        ));
    }
    if config.format == InputFormat::Csv && config.table_name.is_none() {
        return Err(Error::Config(
            "CSV input requires a table name".to_string(),
        ));
    }
    Ok(())
}
