//! The sales record and its CSV codec.

use chrono::{DateTime, SecondsFormat, Utc};
use csv::StringRecord;
use thiserror::Error;

/// Column order of the record store, header row included.
pub const RECORD_HEADER: [&str; 5] = ["id", "order_id", "customer_id", "total", "date"];

/// Errors raised while decoding a single record store row.
///
/// These are per-row failures: the aggregator logs and skips the offending
/// row rather than aborting the pass.
#[derive(Error, Debug)]
pub enum RecordParseError {
    /// Row has the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field failed to parse.
    #[error("invalid {field} value '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// One synthesized sales transaction.
///
/// Records are created by the generator at emission time and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    /// Sequential id, unique within a store, assigned in emission order.
    pub id: u64,
    /// Order number, not unique.
    pub order_id: u32,
    /// Customer number.
    pub customer_id: u32,
    /// Order total, always carrying exactly two decimal digits.
    pub total: f64,
    /// Order timestamp, pinned to UTC.
    pub date: DateTime<Utc>,
}

impl SalesRecord {
    /// Encode the record as CSV field strings in [`RECORD_HEADER`] order.
    pub fn to_field_strings(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.order_id.to_string(),
            self.customer_id.to_string(),
            format!("{:.2}", self.total),
            self.date.to_rfc3339_opts(SecondsFormat::Secs, true),
        ]
    }

    /// Decode a record store row.
    pub fn from_record(record: &StringRecord) -> Result<Self, RecordParseError> {
        if record.len() != RECORD_HEADER.len() {
            return Err(RecordParseError::FieldCount {
                expected: RECORD_HEADER.len(),
                found: record.len(),
            });
        }

        Ok(Self {
            id: parse_int(record, 0)?,
            order_id: parse_int(record, 1)?,
            customer_id: parse_int(record, 2)?,
            total: parse_total(record)?,
            date: parse_date(record)?,
        })
    }
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("").trim()
}

fn invalid(index: usize, value: &str) -> RecordParseError {
    RecordParseError::InvalidField {
        field: RECORD_HEADER[index],
        value: value.to_string(),
    }
}

fn parse_int<T: std::str::FromStr>(
    record: &StringRecord,
    index: usize,
) -> Result<T, RecordParseError> {
    let value = field(record, index);
    value.parse().map_err(|_| invalid(index, value))
}

fn parse_total(record: &StringRecord) -> Result<f64, RecordParseError> {
    let value = field(record, 3);
    let total: f64 = value.parse().map_err(|_| invalid(3, value))?;
    if total.is_finite() {
        Ok(total)
    } else {
        Err(invalid(3, value))
    }
}

fn parse_date(record: &StringRecord) -> Result<DateTime<Utc>, RecordParseError> {
    let value = field(record, 4);
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| invalid(4, value))
}
