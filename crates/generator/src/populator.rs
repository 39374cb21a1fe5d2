//! Batched CSV writer for generated sales records.

use crate::error::GenerateError;
use crate::generator::RecordGenerator;
use csv::Writer;
use report_core::RECORD_HEADER;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Observer invoked after each flushed batch with (records written, elapsed).
pub type ProgressObserver = Box<dyn FnMut(u64, Duration)>;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Number of flushed batches.
    pub batch_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes synthetic sales records to a CSV record store in bounded batches.
///
/// Each batch is generated, written and flushed before the next one is
/// produced, so at most one batch of records is resident at a time.
pub struct SalesPopulator {
    generator: RecordGenerator,
    progress: Option<ProgressObserver>,
}

impl SalesPopulator {
    /// Create a new populator.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for deterministic generation
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
            progress: None,
        }
    }

    /// Attach an observer called once per flushed batch.
    pub fn with_progress(mut self, observer: ProgressObserver) -> Self {
        self.progress = Some(observer);
        self
    }

    /// Generate `total_records` records and write them to `output_path`.
    ///
    /// Writes one header row followed by exactly `total_records` data rows
    /// with ids `1..=total_records`. Any pre-existing file at the path is
    /// truncated; missing parent directories are created.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        total_records: u64,
        batch_size: u64,
    ) -> Result<PopulateMetrics, GenerateError> {
        if batch_size == 0 {
            return Err(GenerateError::ZeroBatchSize);
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating record store '{}' with {} rows (batch size {})",
            output_path.display(),
            total_records,
            batch_size
        );

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Create writer
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        writer.write_record(&RECORD_HEADER)?;

        // Generate and write in batches; flush before starting the next
        // batch so memory stays bounded by a single batch.
        let mut processed = 0u64;
        while processed < total_records {
            let current_batch_size = batch_size.min(total_records - processed);

            let gen_start = Instant::now();
            let batch = self.generator.next_batch(current_batch_size);
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            for record in &batch {
                writer.write_record(&record.to_field_strings())?;
            }
            writer.flush()?;
            write_time += write_start.elapsed();

            processed += current_batch_size;
            metrics.rows_written = processed;
            metrics.batch_count += 1;

            if processed % 10000 == 0 {
                debug!("Written {} rows", processed);
            }

            if let Some(observer) = self.progress.as_mut() {
                observer(processed, start_time.elapsed());
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| GenerateError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Record generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
