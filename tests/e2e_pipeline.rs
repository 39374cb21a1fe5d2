//! End-to-end pipeline tests: generate a record store, aggregate it, and
//! check the report against the records that were written.

use sales_report_aggregator::SalesAggregator;
use sales_report_generator::SalesPopulator;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn generate_store(dir: &Path, count: u64, batch_size: u64, seed: u64) -> PathBuf {
    let path = dir.join("sales_records.csv");
    let mut populator = SalesPopulator::new(seed);
    let metrics = populator.populate(&path, count, batch_size).unwrap();
    assert_eq!(metrics.rows_written, count);
    path
}

fn process_store(input: &Path, output: &Path) -> SalesAggregator {
    let mut aggregator = SalesAggregator::new();
    aggregator.process(input, output).unwrap();
    aggregator
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_generate_then_process_accounts_for_every_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = generate_store(temp_dir.path(), 1000, 100, 42);
    let report = temp_dir.path().join("monthly_report.csv");

    let aggregator = process_store(&store, &report);
    let summary = aggregator.summary();

    assert_eq!(summary.total_records_processed, 1000);
    assert_eq!(summary.skipped_records, 0);
    // 6 years x 12 months at most
    assert!(summary.total_buckets >= 1 && summary.total_buckets <= 72);

    let rows = data_lines(&report);
    assert_eq!(rows.len(), summary.total_buckets);

    let mut order_sum = 0u64;
    for row in &rows {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 8);

        let orders: u64 = fields[3].parse().unwrap();
        let max: f64 = fields[4].parse().unwrap();
        let min: f64 = fields[5].parse().unwrap();
        let average: f64 = fields[6].parse().unwrap();
        let std_dev: f64 = fields[7].parse().unwrap();

        order_sum += orders;
        assert!(min <= average && average <= max);
        assert!(std_dev >= 0.0);
        assert!((500.0..=1800.0).contains(&min));
        assert!((500.0..=1800.0).contains(&max));
    }
    assert_eq!(order_sum, 1000);
}

#[test]
fn test_generated_fields_stay_in_range() {
    let temp_dir = TempDir::new().unwrap();
    let store = generate_store(temp_dir.path(), 500, 64, 7);

    let mut ids = HashSet::new();
    for row in data_lines(&store) {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 5);

        assert!(ids.insert(fields[0].parse::<u64>().unwrap()));

        let order_id: u32 = fields[1].parse().unwrap();
        assert!((100_000..=999_999).contains(&order_id));

        let customer_id: u32 = fields[2].parse().unwrap();
        assert!((1..=50_000).contains(&customer_id));

        let total: f64 = fields[3].parse().unwrap();
        assert!((500.0..=1800.0).contains(&total));
        // Exactly two decimal digits on the wire
        assert_eq!(fields[3].len() - fields[3].find('.').unwrap() - 1, 2);

        let year: i32 = fields[4][..4].parse().unwrap();
        assert!((2020..=2025).contains(&year));
        assert!(fields[4].ends_with('Z'));
    }
    assert_eq!(ids, (1..=500).collect::<HashSet<u64>>());
}

#[test]
fn test_processing_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = generate_store(temp_dir.path(), 300, 50, 42);

    let report1 = temp_dir.path().join("report1.csv");
    let report2 = temp_dir.path().join("report2.csv");
    process_store(&store, &report1);
    process_store(&store, &report2);

    assert_eq!(
        fs::read_to_string(&report1).unwrap(),
        fs::read_to_string(&report2).unwrap()
    );
}

#[test]
fn test_report_is_independent_of_row_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = generate_store(temp_dir.path(), 300, 50, 42);

    // Rewrite the store with its data rows in reverse order
    let content = fs::read_to_string(&store).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    let mut rows: Vec<&str> = lines.collect();
    rows.reverse();

    let reversed = temp_dir.path().join("reversed.csv");
    let mut reversed_content = String::from(header);
    for row in rows {
        reversed_content.push('\n');
        reversed_content.push_str(row);
    }
    reversed_content.push('\n');
    fs::write(&reversed, reversed_content).unwrap();

    let report1 = temp_dir.path().join("report1.csv");
    let report2 = temp_dir.path().join("report2.csv");
    process_store(&store, &report1);
    process_store(&reversed, &report2);

    assert_eq!(
        fs::read_to_string(&report1).unwrap(),
        fs::read_to_string(&report2).unwrap()
    );
}

#[test]
fn test_missing_store_yields_no_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("monthly_report.csv");

    let mut aggregator = SalesAggregator::new();
    let result = aggregator.process(temp_dir.path().join("absent.csv"), &report);

    assert!(result.is_err());
    assert!(!report.exists());
}
