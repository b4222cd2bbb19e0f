//! Record line parsing
//!
//! Line format: `name\torganism\tformula` (extra fields are ignored).

use crate::error::{GeneError, Result};
use crate::protocol::FIELD_SEPARATOR;
use crate::sequence::Record;

/// Parse one record line
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
/// Returns [`GeneError::MalformedRecord`] if the line has fewer than three
/// tab-separated fields.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record> {
    let mut fields = line.split(FIELD_SEPARATOR);

    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(organism), Some(formula)) => Ok(Record::new(name, organism, formula)),
        _ => Err(GeneError::MalformedRecord {
            line: line_number,
            fields: line.split(FIELD_SEPARATOR).count(),
        }),
    }
}
