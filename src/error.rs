use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// There are no retries anywhere: the first error aborts the run and is
/// reported to the caller with the message describing which resource or
/// record failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file unreadable or destination file unwritable.
    #[error("I/O error: {0}")]
    Io(String),
    /// Malformed JSON document, non-tabular document shape, or a row whose
    /// field count disagrees with the column set.
    #[error("parse error: {0}")]
    Parse(String),
    /// Required option missing or invalid, e.g. update mode without an
    /// identifier column.
    #[error("configuration error: {0}")]
    Config(String),
}
