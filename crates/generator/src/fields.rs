//! Random field draws for synthetic sales records.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use report_core::days_in_month;

/// Inclusive order id range.
pub const ORDER_ID_RANGE: (u32, u32) = (100_000, 999_999);

/// Inclusive customer id range.
pub const CUSTOMER_ID_RANGE: (u32, u32) = (1, 50_000);

/// Inclusive order total range in currency units.
pub const TOTAL_RANGE: (f64, f64) = (500.0, 1800.0);

/// Inclusive year range for order dates.
pub const YEAR_RANGE: (i32, i32) = (2020, 2025);

/// Draw a uniform integer in the inclusive range.
pub fn int_in_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// Draw a uniform amount in the inclusive range, rounded to 2 decimal
/// places (half away from zero).
pub fn amount_in_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value: f64 = rng.gen_range(min..=max);
    (value * 100.0).round() / 100.0
}

/// Draw a random UTC timestamp with independent uniform calendar fields.
///
/// Year, month and time-of-day are drawn uniformly from their ranges; the
/// day draw is bounded by the month length for the drawn year, so Feb 29
/// can only appear in leap years.
pub fn timestamp_in_years<R: Rng>(rng: &mut R, min_year: i32, max_year: i32) -> DateTime<Utc> {
    let year = rng.gen_range(min_year..=max_year);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=days_in_month(year, month));
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("calendar draw produced an invalid timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = int_in_range(&mut rng, 100_000, 999_999);
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_amount_in_range_has_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = amount_in_range(&mut rng, 500.0, 1800.0);
            assert!((500.0..=1800.0).contains(&value));
            // Scaling by 100 must leave no fractional residue
            let cents = value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_timestamp_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let dt = timestamp_in_years(&mut rng, 2020, 2025);
            assert!((2020..=2025).contains(&dt.year()));
            assert!((1..=12).contains(&dt.month()));
            assert!(dt.day() <= days_in_month(dt.year(), dt.month()));
            assert!(dt.hour() < 24);
        }
    }

    #[test]
    fn test_deterministic_draws() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                timestamp_in_years(&mut rng1, 2020, 2025),
                timestamp_in_years(&mut rng2, 2020, 2025)
            );
        }
    }
}
