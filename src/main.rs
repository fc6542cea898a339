//! CLI entry point for `tab2sql`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tab2sql::generator::StatementKind;
use tab2sql::pipeline::{self, Config};
use tab2sql::reader::{CsvOptions, InputFormat};

#[derive(Parser)]
#[command(
    name = "tab2sql",
    version,
    about = "Generate a SQL INSERT/UPDATE script file from a CSV or JSON data file"
)]
struct Cli {
    /// Type of statement to generate
    #[arg(short = 'o', long)]
    mode: StatementKind,

    /// Input file format (csv or json); never inferred from content
    #[arg(long)]
    format: InputFormat,

    /// Table name in the database; JSON input may instead wrap its records
    /// with the table name as the document's outer key
    #[arg(short = 't', long)]
    table_name: Option<String>,

    /// Character separating fields in the CSV file
    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Character used for quoting in the CSV header
    #[arg(long, default_value_t = '\'')]
    quote_char: char,

    /// Identifier column name for UPDATE statements
    #[arg(long)]
    identifier_column: Option<String>,

    /// Path of the data file to read
    source_path: PathBuf,

    /// Path of the SQL file to be generated
    destination_path: PathBuf,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = Config {
        mode: cli.mode,
        format: cli.format,
        table_name: cli.table_name,
        csv: CsvOptions {
            separator: cli.separator,
            quote_char: cli.quote_char,
        },
        identifier_column: cli.identifier_column,
        source: cli.source_path,
        destination: cli.destination_path,
    };

    if cli.verbose {
        eprintln!("Statement: {}", config.mode);
        eprintln!("Input format: {}", config.format);
        if let Some(table) = &config.table_name {
            eprintln!("Table name: {table}");
        }
        if config.format == InputFormat::Csv {
            eprintln!("Separator: {}", config.csv.separator);
            eprintln!("Quote character: {}", config.csv.quote_char);
        }
        if let Some(identifier) = &config.identifier_column {
            eprintln!("Identifier column: {identifier}");
        }
        eprintln!("Source: {}", config.source.display());
        eprintln!("Destination: {}", config.destination.display());
    }

    match pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "{} statements written to {}",
                summary.statements_written,
                config.destination.display()
            );
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
