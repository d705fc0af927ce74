//! Response parsers.
//!
//! Pure functions from one response [`Message`](crate::models::Message) to
//! a finite sequence of rows, in vendor order. Field access is by exact,
//! case-sensitive name; absent fields read as empty strings; multi-valued
//! fields are flattened to comma-joined cells rather than extra rows.

mod list;
mod ref_data;

pub use list::{parse_curve_list, parse_govt_list, parse_instruments};
pub use ref_data::{parse_ref_data, Record, FIELD_COLUMN, TICKER_COLUMN, VALUE_COLUMN};
