/// Format all rows, value by value. Pure; the input order is preserved.
///
/// This is a best-effort literal formatter, not a safe escaper: embedded
/// single quotes inside text values are left as-is and will corrupt the
/// emitted statement. Silently doubling quotes here would change the output
/// of every existing script, so safe SQL needs an explicit escaping layer.
pub fn format_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|value| format_value(value)).collect())
        .collect()
}

/// Coerce one raw value into a SQL literal token.
///
/// Rules, in order: integer-shaped text (optional leading `-`, digits only)
/// becomes its canonical decimal form unquoted; the empty string becomes
/// `''`; a double-quoted value is re-wrapped in single quotes; anything not
/// already single-quoted is wrapped in single quotes; an already
/// single-quoted value passes through unchanged. Float-shaped text such as
/// `3.14` is not recognised as numeric and is quoted like any other string.
pub fn format_value(raw: &str) -> String {
    if let Some(canonical) = canonical_integer(raw) {
        return canonical;
    }
    if raw.is_empty() {
        return "''".to_string();
    }
    if raw.starts_with('"') {
        // Assumed paired quotes: drop one character at each end.
        let mut inner: String = raw.chars().skip(1).collect();
        inner.pop();
        return format!("'{inner}'");
    }
    if !raw.starts_with('\'') {
        return format!("'{raw}'");
    }
    raw.to_string()
}

/// Canonical decimal form of integer-shaped text, of any length.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits and
/// nothing else: no `+`, no decimal point, no surrounding whitespace.
fn canonical_integer(raw: &str) -> Option<String> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some("0".to_string());
    }
    Some(if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    })
}
