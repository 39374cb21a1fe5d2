//! Streaming aggregation of a record store into a monthly report.

use crate::error::ProcessError;
use crate::stats::{MonthlyStats, ReportRow, REPORT_HEADER};
use chrono::Datelike;
use csv::{ReaderBuilder, Writer};
use report_core::SalesRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default buffer size for streaming reads and report writes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Diagnostic summary of a completed process run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    /// Number of populated (year, month) buckets.
    pub total_buckets: usize,
    /// Year span of the report, collapsed when a single year is present
    /// ("2021") and hyphenated otherwise ("2020-2025").
    pub year_range: String,
    /// Records folded into buckets across the whole pass.
    pub total_records_processed: u64,
    /// Rows skipped because they failed to parse.
    pub skipped_records: u64,
}

/// Streaming aggregator maintaining running per-month statistics.
///
/// Buckets are keyed by `(year, month)` in a `BTreeMap`, so iteration
/// order is already the report's required ascending sort.
#[derive(Debug, Default)]
pub struct SalesAggregator {
    buckets: BTreeMap<(i32, u32), MonthlyStats>,
    skipped: u64,
}

impl SalesAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream `input_path`, fold every valid row into its bucket, and write
    /// the sorted monthly report to `output_path`.
    ///
    /// The input is read one record at a time; the full store is never
    /// resident. A row that fails to parse is logged and skipped without
    /// touching any bucket. A missing input store fails before any output
    /// is created.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<(), ProcessError> {
        let input_path = input_path.as_ref();
        if !input_path.exists() {
            return Err(ProcessError::InputNotFound(input_path.to_path_buf()));
        }

        info!("Aggregating record store '{}'", input_path.display());

        let file = File::open(input_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file));

        // Header occupies line 1
        let mut row_number = 1u64;
        for result in reader.records() {
            row_number += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(ProcessError::Csv(e)),
                Err(e) => {
                    warn!("Skipping malformed row {}: {}", row_number, e);
                    self.skipped += 1;
                    continue;
                }
            };

            match SalesRecord::from_record(&record) {
                Ok(sale) => self.fold(&sale),
                Err(e) => {
                    warn!("Skipping malformed row {}: {}", row_number, e);
                    self.skipped += 1;
                }
            }
        }

        let rows = self.finalize();
        write_report(output_path.as_ref(), &rows)?;

        let summary = self.summary();
        info!(
            "Report complete: {} buckets over {} from {} records ({} skipped)",
            summary.total_buckets,
            summary.year_range,
            summary.total_records_processed,
            summary.skipped_records
        );

        Ok(())
    }

    /// Fold one record into its (year, month) bucket.
    fn fold(&mut self, sale: &SalesRecord) {
        let key = (sale.date.year(), sale.date.month());
        self.buckets
            .entry(key)
            .and_modify(|stats| stats.fold(sale.total))
            .or_insert_with(|| MonthlyStats::from_total(sale.total));
    }

    /// Finalized report rows, ascending by (year, month).
    pub fn finalize(&self) -> Vec<ReportRow> {
        self.buckets
            .iter()
            .map(|(&(year, month), stats)| stats.finalize(year, month))
            .collect()
    }

    /// Diagnostic summary; meaningful after a successful [`process`] call.
    ///
    /// [`process`]: SalesAggregator::process
    pub fn summary(&self) -> ProcessSummary {
        let total_records_processed = self.buckets.values().map(MonthlyStats::orders).sum();
        let year_range = match (self.buckets.keys().next(), self.buckets.keys().next_back()) {
            (Some(&(first, _)), Some(&(last, _))) if first == last => first.to_string(),
            (Some(&(first, _)), Some(&(last, _))) => format!("{first}-{last}"),
            _ => String::new(),
        };

        ProcessSummary {
            total_buckets: self.buckets.len(),
            year_range,
            total_records_processed,
            skipped_records: self.skipped,
        }
    }
}

/// Write the finalized report rows to `output_path`.
fn write_report(output_path: &Path, rows: &[ReportRow]) -> Result<(), ProcessError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(&REPORT_HEADER)?;
    for row in rows {
        writer.write_record(&row.to_field_strings())?;
    }
    writer.flush()?;

    debug!("Wrote {} report rows to '{}'", rows.len(), output_path.display());
    Ok(())
}
