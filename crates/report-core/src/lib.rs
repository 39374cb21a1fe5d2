//! Shared domain types for the sales-report pipeline.
//!
//! This crate defines the sales record that flows between the generator and
//! the aggregator, its CSV encoding and decoding, and the calendar helpers
//! both sides rely on. The record store interchange format is a plain CSV
//! table:
//!
//! ```text
//! id,order_id,customer_id,total,date
//! 1,482113,20417,1204.77,2023-06-02T08:41:19Z
//! ```
//!
//! Amounts always carry exactly two decimal digits and dates are RFC 3339
//! timestamps pinned to UTC, so both stages of the pipeline decompose
//! calendar fields identically regardless of the host timezone.

mod calendar;
mod record;

pub use calendar::{days_in_month, month_name};
pub use record::{RecordParseError, SalesRecord, RECORD_HEADER};
