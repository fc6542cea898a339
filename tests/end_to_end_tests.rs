use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tab2sql::formatter;
use tab2sql::generator::{self, StatementKind};
use tab2sql::pipeline::{self, Config};
use tab2sql::reader::{self, CsvOptions, InputFormat};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

/// Full pipeline test over the CSV fixture, stage by stage.
#[test]
fn end_to_end_csv_insert() {
    // Stage 1: Read
    let records = reader::csv::read_records(
        "tests/fixtures/people.csv".as_ref(),
        &CsvOptions::default(),
    )
    .expect("fixture should parse");
    assert_eq!(records.columns, vec!["id", "name", "score", "bio"]);
    assert_eq!(records.rows.len(), 2, "fixture holds two data lines");

    // Stage 2: Format
    let formatted = formatter::format_rows(&records.rows);
    assert_eq!(formatted[0], vec!["1", "'Alice'", "'3.14'", "''"]);
    assert_eq!(formatted[1], vec!["2", "'Bob'", "97", "'founder'"]);

    // Stage 3: Render
    let statements = generator::render_statements(
        StatementKind::Insert,
        "people",
        &records.columns,
        &formatted,
        None,
    )
    .expect("insert rendering should succeed");
    assert_eq!(
        statements,
        vec![
            "INSERT INTO people (id,name,score,bio) VALUES (1,'Alice','3.14','');",
            "INSERT INTO people (id,name,score,bio) VALUES (2,'Bob',97,'founder');",
        ],
    );
}

#[test]
fn end_to_end_csv_update_through_the_pipeline() {
    let temp = unique_temp_dir("tab2sql_csv_update");
    let destination = temp.join("people.sql");

    let config = Config {
        mode: StatementKind::Update,
        format: InputFormat::Csv,
        table_name: Some("people".to_string()),
        csv: CsvOptions::default(),
        identifier_column: Some("id".to_string()),
        source: PathBuf::from("tests/fixtures/people.csv"),
        destination: destination.clone(),
    };

    let summary = pipeline::run(&config).expect("pipeline should succeed");
    assert_eq!(summary.statements_written, 2);

    let script = std::fs::read_to_string(&destination).expect("script should exist");
    assert_eq!(
        script,
        "UPDATE people SET name='Alice',score='3.14',bio='' WHERE id=1;\n\
         UPDATE people SET name='Bob',score=97,bio='founder' WHERE id=2;\n"
    );
}

#[test]
fn end_to_end_json_insert_takes_the_table_name_from_the_document() {
    let temp = unique_temp_dir("tab2sql_json_insert");
    let destination = temp.join("people.sql");

    let config = Config {
        mode: StatementKind::Insert,
        format: InputFormat::Json,
        table_name: None,
        csv: CsvOptions::default(),
        identifier_column: None,
        source: PathBuf::from("tests/fixtures/people.json"),
        destination: destination.clone(),
    };

    let summary = pipeline::run(&config).expect("pipeline should succeed");
    assert_eq!(summary.statements_written, 2);

    let script = std::fs::read_to_string(&destination).expect("script should exist");
    assert_eq!(
        script,
        "INSERT INTO people (id,name,active,note) VALUES (1,'Alice',1,'');\n\
         INSERT INTO people (id,name,active,note) VALUES (2,'Bob',0,'on leave');\n"
    );
}

#[test]
fn end_to_end_json_update_with_an_external_table_name() {
    let temp = unique_temp_dir("tab2sql_json_update");
    let destination = temp.join("staff.sql");

    let config = Config {
        mode: StatementKind::Update,
        format: InputFormat::Json,
        table_name: Some("staff".to_string()),
        csv: CsvOptions::default(),
        identifier_column: Some("id".to_string()),
        source: PathBuf::from("tests/fixtures/people.json"),
        destination: destination.clone(),
    };

    let summary = pipeline::run(&config).expect("pipeline should succeed");
    assert_eq!(summary.statements_written, 2);

    // The supplied table name wins even though the document is wrapped
    // with a different key.
    let script = std::fs::read_to_string(&destination).expect("script should exist");
    assert_eq!(
        script,
        "UPDATE staff SET name='Alice',active=1,note='' WHERE id=1;\n\
         UPDATE staff SET name='Bob',active=0,note='on leave' WHERE id=2;\n"
    );
}

#[test]
fn empty_csv_source_writes_an_empty_script() {
    let temp = unique_temp_dir("tab2sql_empty_csv");
    let source = temp.join("empty.csv");
    let destination = temp.join("empty.sql");
    std::fs::write(&source, "").expect("should write empty source");

    let config = Config {
        mode: StatementKind::Insert,
        format: InputFormat::Csv,
        table_name: Some("people".to_string()),
        csv: CsvOptions::default(),
        identifier_column: None,
        source,
        destination: destination.clone(),
    };

    let summary = pipeline::run(&config).expect("empty input should not fail");
    assert_eq!(summary.statements_written, 0);
    let script = std::fs::read_to_string(&destination).expect("script should exist");
    assert!(script.is_empty());
}

#[test]
fn update_with_an_identifier_missing_from_the_columns_writes_nothing() {
    let temp = unique_temp_dir("tab2sql_bad_identifier");
    let destination = temp.join("people.sql");

    let config = Config {
        mode: StatementKind::Update,
        format: InputFormat::Csv,
        table_name: Some("people".to_string()),
        csv: CsvOptions::default(),
        identifier_column: Some("uuid".to_string()),
        source: PathBuf::from("tests/fixtures/people.csv"),
        destination: destination.clone(),
    };

    let err = pipeline::run(&config).expect_err("unknown identifier should fail");
    assert!(
        err.to_string().starts_with("configuration error:"),
        "got: {err}"
    );
    assert!(
        !destination.exists(),
        "rendering failed, so no destination file should have been created"
    );
}
