//! Streaming monthly aggregation of a sales record store.
//!
//! The aggregator reads a record store one row at a time, folds every valid
//! row into a running `(year, month)` bucket, and once the stream is
//! exhausted writes a report sorted by year then month:
//!
//! ```text
//! year,month,month_name,number_of_orders,max_amount,min_amount,sales_average,standard_deviation
//! 2021,3,March,3,1200.00,600.00,900.00,300.00
//! ```
//!
//! Bucket statistics are pure reductions (count, sum, min, max, Welford
//! variance), so the report is independent of input row order and the full
//! store is never held in memory.
//!
//! # Example
//!
//! ```ignore
//! use sales_report_aggregator::SalesAggregator;
//!
//! let mut aggregator = SalesAggregator::new();
//! aggregator.process("data/sales_records.csv", "data/monthly_report.csv")?;
//! println!("{} buckets", aggregator.summary().total_buckets);
//! ```

mod error;
mod processor;
mod stats;

pub use error::ProcessError;
pub use processor::{ProcessSummary, SalesAggregator, DEFAULT_BUFFER_SIZE};
pub use stats::{MonthlyStats, ReportRow, REPORT_HEADER};
