//! CSV import/export for employee records.
//!
//! The import format is deliberately forgiving: the first non-blank line is a
//! header and is ignored, rows that don't resolve to at least four fields are
//! dropped rather than aborting the batch, and fields may optionally be
//! double-quoted. Tokenization tracks quote state, so commas inside quoted
//! fields are not treated as separators.
//!
//! Export wraps every field in double quotes verbatim. A field that itself
//! contains a double quote will produce invalid CSV; that is a known
//! limitation of the format we emit, not something we silently repair.

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeFields};

pub const CSV_HEADER: &str = "Name,Email,Role,Department";

/// Parse a CSV blob into employee field sets, in file order.
///
/// Fails with [`RosterError::MalformedCsv`] when the input has fewer than two
/// non-blank lines, and with [`RosterError::EmptyCsv`] when no data line
/// resolves to four fields.
pub fn parse(text: &str) -> Result<Vec<EmployeeFields>> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(RosterError::MalformedCsv);
    }

    let mut rows = Vec::new();
    // lines[0] is the header
    for line in &lines[1..] {
        let fields = split_line(line);
        if fields.len() < 4 {
            continue;
        }
        rows.push(EmployeeFields::new(
            &fields[0], &fields[1], &fields[2], &fields[3],
        ));
    }

    if rows.is_empty() {
        return Err(RosterError::EmptyCsv);
    }
    Ok(rows)
}

/// Serialize records to CSV text: a fixed header then one quoted line per
/// record, newline-joined without a trailing newline.
pub fn serialize(records: &[Employee]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for record in records {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\"",
            record.name, record.email, record.role, record.department
        ));
    }
    lines.join("\n")
}

/// Split one data line into trimmed fields. A double quote toggles quoted
/// state and is stripped; commas only separate fields outside quotes.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
