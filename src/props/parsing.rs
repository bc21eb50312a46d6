//! Parsing of delimited key=value text
//!
//! Grammar: `<input> = <record> (<separator> <record>)*`
//! Where: `<record> = <key> "=" <value>` and `<separator>` is newline when
//! the input contains one, comma otherwise.
//!
//! Parsing never fails. Records that do not split into exactly a key and a
//! value are silently discarded, matching the contract of the formatter on
//! the other side of the round trip.

use super::store::Properties;
use super::{FIELD_SEPARATOR, LINE_SEPARATOR, RECORD_SEPARATOR};

/// Parse delimited text into a property set.
///
/// An input with no non-whitespace characters yields an empty set. The
/// record separator is newline if the input contains at least one, comma
/// otherwise; an input containing neither is treated as a single record.
///
/// Each record has its leading whitespace stripped and is then split on
/// every `=`. Only a split into exactly two fields makes an entry, so a
/// record with no `=` or more than one is dropped without error. `"a="`
/// maps `a` to the empty value and `"=b"` maps the empty key to `b`.
/// Trailing whitespace stays part of the fields. A duplicate key overwrites
/// the earlier value.
pub fn parse_properties(text: &str) -> Properties {
    let mut result = Properties::new();

    if text.trim().is_empty() {
        return result;
    }

    let separator = if text.contains(LINE_SEPARATOR) {
        LINE_SEPARATOR
    } else {
        RECORD_SEPARATOR
    };

    for record in text.split(separator) {
        // Trim per record, after splitting; a whole-input trim would eat
        // newline separators.
        let record = record.trim_start();

        let mut fields = record.split(FIELD_SEPARATOR);
        if let (Some(key), Some(value), None) = (fields.next(), fields.next(), fields.next()) {
            result.set(key, value);
        }
    }

    result
}
