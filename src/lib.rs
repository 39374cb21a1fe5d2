//! sales-report library
//!
//! A two-stage flat-file pipeline: a seeded generator that synthesizes
//! sales records into a CSV store in bounded batches, and a streaming
//! aggregator that folds that store into per-month statistics and writes a
//! sorted report.
//!
//! # Pipeline crates
//!
//! Each stage lives in its own crate:
//!
//! - `report-core` - the shared record type, its CSV codec, and calendar
//!   helpers
//! - `sales-report-generator` - seeded field draws and the batched store
//!   writer
//! - `sales-report-aggregator` - the streaming fold, running statistics and
//!   report writer
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate a synthetic record store
//! sales-report generate --record-count 100000 --batch-size 1000
//!
//! # Aggregate an existing store into a monthly report
//! sales-report process --input data/sales_records.csv
//!
//! # Full pipeline: generate, then aggregate
//! sales-report run --emit-summary summary.json
//! ```

// Re-export pipeline crates for convenience
pub use report_core as records;
pub use sales_report_aggregator as aggregator;
pub use sales_report_generator as generator;

/// Default record store path shared by the subcommands.
pub const DEFAULT_RECORDS_PATH: &str = "data/sales_records.csv";

/// Default report path shared by the subcommands.
pub const DEFAULT_REPORT_PATH: &str = "data/monthly_report.csv";
