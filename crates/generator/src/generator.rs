//! Seeded generator producing synthetic sales records.

use crate::fields::{self, CUSTOMER_ID_RANGE, ORDER_ID_RANGE, TOTAL_RANGE, YEAR_RANGE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use report_core::SalesRecord;

/// Produces deterministic synthetic sales records.
///
/// The generator uses a seeded random number generator so the same seed
/// yields the same record stream across runs. Record ids are sequential
/// starting from 1 and never reused.
pub struct RecordGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Id the next generated record will carry
    next_id: u64,
}

impl RecordGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Id that the next generated record will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Generate the next record and advance the id cursor.
    pub fn next_record(&mut self) -> SalesRecord {
        let id = self.next_id;
        self.next_id += 1;

        SalesRecord {
            id,
            order_id: fields::int_in_range(&mut self.rng, ORDER_ID_RANGE.0, ORDER_ID_RANGE.1),
            customer_id: fields::int_in_range(
                &mut self.rng,
                CUSTOMER_ID_RANGE.0,
                CUSTOMER_ID_RANGE.1,
            ),
            total: fields::amount_in_range(&mut self.rng, TOTAL_RANGE.0, TOTAL_RANGE.1),
            date: fields::timestamp_in_years(&mut self.rng, YEAR_RANGE.0, YEAR_RANGE.1),
        }
    }

    /// Generate a batch of `count` records.
    pub fn next_batch(&mut self, count: u64) -> Vec<SalesRecord> {
        (0..count).map(|_| self.next_record()).collect()
    }
}
