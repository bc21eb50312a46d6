//! Formatting of a property set into comma-delimited text
//!
//! The formatter is the inverse of [`super::parsing`] for delimiter-free
//! data. It emits `key=value` records joined with commas and guards against
//! delimiter collision instead of escaping: output that would not parse back
//! record-for-record is replaced by the empty string.

use super::store::Properties;
use super::{FIELD_SEPARATOR, RECORD_SEPARATOR};

/// Format a property set as comma-delimited `key=value` records.
///
/// An empty set yields the empty string. Entries are emitted in insertion
/// order. After joining, the comma count of the result must equal the number
/// of records minus one; a comma inside any key or value breaks that
/// invariant and the whole call silently returns the empty string rather
/// than a corrupted one. This is a guard, not an escape scheme: callers
/// whose data may contain commas must sanitize it first.
///
/// No check is made for `=` or newline inside keys and values, so the round
/// trip through [`super::parsing::parse_properties`] is only guaranteed when
/// neither appears either.
pub fn format_properties(props: &Properties) -> String {
    if props.is_empty() {
        return String::new();
    }

    let records: Vec<String> = props
        .iter()
        .map(|(key, value)| format!("{key}{FIELD_SEPARATOR}{value}"))
        .collect();

    let joined = records.join(RECORD_SEPARATOR);

    let separator_count = joined.matches(RECORD_SEPARATOR).count();
    let mut result = if separator_count == records.len() - 1 {
        joined
    } else {
        String::new()
    };

    if result.ends_with(RECORD_SEPARATOR) {
        result.truncate(result.len() - RECORD_SEPARATOR.len());
    }

    result
}
