//! Synthetic sales record generation.
//!
//! This crate produces deterministic synthetic sales records from a seeded
//! RNG and writes them to a CSV record store in bounded batches.
//!
//! # Architecture
//!
//! ```text
//! seed
//!   │
//!   ▼
//! ┌──────────────────┐      ┌──────────────────┐
//! │ RecordGenerator  │─────▶│  SalesPopulator  │
//! │                  │ batch│                  │
//! │ - rng (StdRng)   │      │ - header row     │
//! │ - id cursor      │      │ - batched writes │
//! └──────────────────┘      │ - flush per batch│
//!                           └────────┬─────────┘
//!                                    ▼
//!                          sales_records.csv
//! ```
//!
//! At most one batch of records is resident in memory at a time, so the
//! store size is bounded only by disk.
//!
//! # Example
//!
//! ```ignore
//! use sales_report_generator::SalesPopulator;
//!
//! let mut populator = SalesPopulator::new(42);
//! let metrics = populator.populate("data/sales_records.csv", 100_000, 1_000)?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

mod error;
pub mod fields;
mod generator;
mod populator;

pub use error::GenerateError;
pub use generator::RecordGenerator;
pub use populator::{PopulateMetrics, ProgressObserver, SalesPopulator, DEFAULT_BUFFER_SIZE};
