use std::path::Path;

use crate::error::Error;

/// Write the rendered statements to the destination file, one per line.
///
/// Each statement is followed by a single newline. No transaction wrapping
/// is emitted. The destination may be left truncated when writing fails
/// mid-run; this is a one-shot batch tool, not a resumable one.
pub fn write_statements(path: &Path, statements: &[String]) -> Result<(), Error> {
    let mut script = String::with_capacity(statements.iter().map(|s| s.len() + 1).sum());
    for statement in statements {
        script.push_str(statement);
        script.push('\n');
    }
    std::fs::write(path, script)
        .map_err(|e| Error::Io(format!("failed to write {}: {e}", path.display())))
}
