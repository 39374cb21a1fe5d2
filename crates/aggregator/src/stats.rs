//! Running per-month statistics and the finalized report row.

use report_core::month_name;

/// Column order of the report store, header row included.
pub const REPORT_HEADER: [&str; 8] = [
    "year",
    "month",
    "month_name",
    "number_of_orders",
    "max_amount",
    "min_amount",
    "sales_average",
    "standard_deviation",
];

/// Running aggregate for one (year, month) bucket.
///
/// Variance is accumulated with Welford's online update, so no per-record
/// history is retained. Invariant: `min_amount <= every folded total <=
/// max_amount`.
#[derive(Debug, Clone)]
pub struct MonthlyStats {
    orders: u64,
    total_amount: f64,
    min_amount: f64,
    max_amount: f64,
    mean: f64,
    m2: f64,
}

impl MonthlyStats {
    /// Start a bucket from its first observed order total.
    pub fn from_total(total: f64) -> Self {
        Self {
            orders: 1,
            total_amount: total,
            min_amount: total,
            max_amount: total,
            mean: total,
            m2: 0.0,
        }
    }

    /// Fold one more order total into the bucket.
    pub fn fold(&mut self, total: f64) {
        self.orders += 1;
        self.total_amount += total;
        self.min_amount = self.min_amount.min(total);
        self.max_amount = self.max_amount.max(total);

        // Welford update
        let delta = total - self.mean;
        self.mean += delta / self.orders as f64;
        self.m2 += delta * (total - self.mean);
    }

    /// Number of orders folded so far.
    pub fn orders(&self) -> u64 {
        self.orders
    }

    /// Smallest order total observed.
    pub fn min_amount(&self) -> f64 {
        self.min_amount
    }

    /// Largest order total observed.
    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Mean order total.
    pub fn average(&self) -> f64 {
        self.total_amount / self.orders as f64
    }

    /// Sample standard deviation with Bessel's correction.
    ///
    /// A bucket holding a single order has no spread and reports 0.
    pub fn sample_std_dev(&self) -> f64 {
        if self.orders <= 1 {
            0.0
        } else {
            (self.m2 / (self.orders - 1) as f64).sqrt()
        }
    }

    /// Derive the immutable report row for this bucket.
    pub fn finalize(&self, year: i32, month: u32) -> ReportRow {
        ReportRow {
            year,
            month,
            month_name: month_name(month),
            number_of_orders: self.orders,
            max_amount: self.max_amount,
            min_amount: self.min_amount,
            sales_average: self.average(),
            standard_deviation: self.sample_std_dev(),
        }
    }
}

/// One finalized, immutable report row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub number_of_orders: u64,
    pub max_amount: f64,
    pub min_amount: f64,
    pub sales_average: f64,
    pub standard_deviation: f64,
}

impl ReportRow {
    /// Encode the row as CSV field strings in [`REPORT_HEADER`] order.
    ///
    /// Amount columns carry exactly two decimal digits; `month` is a plain
    /// integer.
    pub fn to_field_strings(&self) -> [String; 8] {
        [
            self.year.to_string(),
            self.month.to_string(),
            self.month_name.to_string(),
            self.number_of_orders.to_string(),
            format!("{:.2}", self.max_amount),
            format!("{:.2}", self.min_amount),
            format!("{:.2}", self.sales_average),
            format!("{:.2}", self.standard_deviation),
        ]
    }
}
