//! # propkv
//!
//! Conversion between delimited key=value text and an ordered property set.
//!
//! Configuration-like data (a small set of named settings) is often stored or
//! transmitted as a single delimited string. This crate reconstructs an
//! ordered [`Properties`] set from such a string and renders one back out,
//! with the two directions designed to round trip for delimiter-free data.
//!
//! The text format is one `key=value` record per separator: newline when the
//! input contains one, comma otherwise. Both conversions are total functions;
//! malformed records are dropped during parsing and a delimiter collision
//! during formatting yields the empty string rather than corrupted output.
//! See the [`props::parsing`] and [`props::formatting`] modules for the exact
//! contracts.

pub mod props;

pub use props::formatting::format_properties;
pub use props::parsing::parse_properties;
pub use props::store::Properties;
pub use props::{FIELD_SEPARATOR, LINE_SEPARATOR, RECORD_SEPARATOR};
