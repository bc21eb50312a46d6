//! Property-set conversion
//!
//! The layout mirrors the two directions of the conversion plus the container
//! they share:
//!
//! src/props
//!   ├── store        The Properties insertion-ordered container
//!   ├── parsing      Delimited text -> Properties
//!   └── formatting   Properties -> comma-delimited text
//!
//! Parsing and formatting are pure functions over immutable inputs; there is
//! no shared state and each call is independent.

pub mod formatting;
pub mod parsing;
pub mod store;

/// Record separator used when the input contains at least one newline.
pub const LINE_SEPARATOR: &str = "\n";

/// Field separator splitting a record into key and value.
pub const FIELD_SEPARATOR: &str = "=";

/// Record separator for single-line input, and the only separator emitted by
/// the formatter.
pub const RECORD_SEPARATOR: &str = ",";
