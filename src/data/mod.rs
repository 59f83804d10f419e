// src/data/mod.rs — The literal metrics table
//
// Nine fiscal years, newest first. The segment breakdown (products/services
// and per-device revenue) was not reported before 2018, so those cells are
// absent for 2015-2017.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::infra::errors::{DashboardError, Result};

/// One table cell. `None` is an absent value and must never be read as zero.
pub type Cell = Option<f64>;

/// The metric columns, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalNetSales,
    ProductsNetSales,
    ServicesNetSales,
    RevenueIphone,
    RevenueIpad,
    RevenueMac,
    GrossMargin,
    OperatingIncome,
    NetIncome,
    EpsDiluted,
    RdExpenses,
    Roa,
    ProfitMarginRatio,
    AssetTurnoverRatio,
    InventoryTurnoverRatio,
}

pub const METRIC_COUNT: usize = 15;

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::TotalNetSales,
        Metric::ProductsNetSales,
        Metric::ServicesNetSales,
        Metric::RevenueIphone,
        Metric::RevenueIpad,
        Metric::RevenueMac,
        Metric::GrossMargin,
        Metric::OperatingIncome,
        Metric::NetIncome,
        Metric::EpsDiluted,
        Metric::RdExpenses,
        Metric::Roa,
        Metric::ProfitMarginRatio,
        Metric::AssetTurnoverRatio,
        Metric::InventoryTurnoverRatio,
    ];

    /// Column header as shown in legends and exports.
    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalNetSales => "Total Net Sales",
            Metric::ProductsNetSales => "Products Net Sales",
            Metric::ServicesNetSales => "Services Net Sales",
            Metric::RevenueIphone => "Revenue by iPhone",
            Metric::RevenueIpad => "Revenue by iPad",
            Metric::RevenueMac => "Revenue by Mac",
            Metric::GrossMargin => "Gross Margin",
            Metric::OperatingIncome => "Operating Income",
            Metric::NetIncome => "Net Income",
            Metric::EpsDiluted => "EPS (Diluted)",
            Metric::RdExpenses => "R&D Expenses",
            Metric::Roa => "ROA",
            Metric::ProfitMarginRatio => "Profit Margin Ratio",
            Metric::AssetTurnoverRatio => "Asset Turnover Ratio",
            Metric::InventoryTurnoverRatio => "Inventory Turnover Ratio",
        }
    }

    /// Columns that only exist from 2018 on.
    pub fn is_segment_breakdown(self) -> bool {
        matches!(
            self,
            Metric::ProductsNetSales
                | Metric::ServicesNetSales
                | Metric::RevenueIphone
                | Metric::RevenueIpad
                | Metric::RevenueMac
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One fiscal year of metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub year: u16,
    pub values: [Cell; METRIC_COUNT],
}

impl Row {
    pub fn get(&self, metric: Metric) -> Cell {
        self.values[metric.index()]
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(METRIC_COUNT + 1))?;
        map.serialize_entry("Year", &self.year)?;
        for metric in Metric::ALL {
            map.serialize_entry(metric.label(), &Num(self.get(metric)))?;
        }
        map.end()
    }
}

macro_rules! cell {
    (-) => {
        None
    };
    ($v:literal) => {
        Some($v as f64)
    };
}

macro_rules! row {
    ($year:literal => [$($v:tt),* $(,)?]) => {
        Row {
            year: $year,
            values: [$(cell!($v)),*],
        }
    };
}

// Columns follow `Metric::ALL`.
const ROWS: [Row; 9] = [
    row!(2023 => [383285, 298085, 85200, 200583, 28300, 29357, 169148, 114301, 96995, 6.13, 29915, 27.51, 25.3, 1.09, 29.89]),
    row!(2022 => [394328, 316199, 78129, 205489, 29292, 40177, 170782, 119437, 99803, 6.11, 26251, 28.29, 25.31, 1.12, 46.79]),
    row!(2021 => [365817, 297392, 68425, 191973, 31862, 35190, 152836, 108949, 94680, 5.61, 21914, 26.97, 25.88, 1.04, 34.38]),
    row!(2020 => [274515, 220747, 53768, 137781, 23724, 28622, 104956, 66288, 57411, 3.28, 18752, 17.73, 20.92, 0.85, 48.57]),
    row!(2019 => [196134, 162354, 33780, 109019, 16624, 18749, 74079, 48305, 41570, 8.86, 12107, 12.9, 21.2, 0.61, 26.08]),
    row!(2018 => [202695, 173546, 29149, 128133, 14397, 17858, 77755, 54780, 45406, 8.99, 10486, 12.42, 22.4, 0.55, 25.89]),
    row!(2017 => [229234, -, -, -, -, -, 88186, 61344, 48351, 9.21, 11581, 12.89, 21.1, 0.61, 30.34]),
    row!(2016 => [215639, -, -, -, -, -, 84263, 60024, 45687, 8.31, 10045, 14.21, 21.18, 0.67, 74.06]),
    row!(2015 => [233715, -, -, -, -, -, 93626, 71230, 53394, 9.22, 8067, 18.39, 22.85, 0.8, 59.65]),
];

/// The immutable dataset every chart is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    rows: Vec<Row>,
}

impl Default for MetricsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsTable {
    /// The built-in nine-year table.
    pub fn new() -> Self {
        Self {
            rows: ROWS.to_vec(),
        }
    }

    /// Build a table from arbitrary rows. Call `validate` before use.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn years(&self) -> Vec<u16> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// `(year, cell)` pairs for one column, in table order.
    pub fn column(&self, metric: Metric) -> Vec<(u16, Cell)> {
        self.rows.iter().map(|r| (r.year, r.get(metric))).collect()
    }

    pub fn value(&self, year: u16, metric: Metric) -> Cell {
        self.rows
            .iter()
            .find(|r| r.year == year)
            .and_then(|r| r.get(metric))
    }

    /// Check the table invariants: non-empty, one row per year, years
    /// strictly descending, every present value finite.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(DashboardError::EmptyTable);
        }

        for row in &self.rows {
            let count = self.rows.iter().filter(|r| r.year == row.year).count();
            if count > 1 {
                return Err(DashboardError::DuplicateYear {
                    year: row.year,
                    count,
                });
            }
        }

        for pair in self.rows.windows(2) {
            if pair[0].year <= pair[1].year {
                return Err(DashboardError::YearOrder {
                    previous: pair[0].year,
                    next: pair[1].year,
                });
            }
        }

        for row in &self.rows {
            for metric in Metric::ALL {
                if row.get(metric).is_some_and(|v| !v.is_finite()) {
                    return Err(DashboardError::NonFinite {
                        column: metric.label(),
                        year: row.year,
                    });
                }
            }
        }

        Ok(())
    }

    /// CSV with a `Year` column followed by every metric. Absent cells are
    /// empty fields.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Year");
        for metric in Metric::ALL {
            out.push(',');
            out.push_str(&csv_field(metric.label()));
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&row.year.to_string());
            for metric in Metric::ALL {
                out.push(',');
                if let Some(v) = row.get(metric) {
                    out.push_str(&format_number(v));
                }
            }
            out.push('\n');
        }
        out
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Whole numbers print without a fractional part.
pub fn format_number(v: f64) -> String {
    if is_integral(v) {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn is_integral(v: f64) -> bool {
    // 2^53: the largest range where every integer is exact in f64.
    v.is_finite() && v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0
}

/// Serializes a cell as a JSON integer when whole, a float otherwise, and
/// `null` when absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub Cell);

impl Serialize for Num {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            None => serializer.serialize_none(),
            Some(v) if is_integral(v) => serializer.serialize_i64(v as i64),
            Some(v) => serializer.serialize_f64(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_years_descending() {
        let table = MetricsTable::new();
        assert_eq!(
            table.years(),
            vec![2023, 2022, 2021, 2020, 2019, 2018, 2017, 2016, 2015]
        );
        table.validate().unwrap();
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = Metric::ALL.iter().map(|m| m.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), METRIC_COUNT);
    }

    #[test]
    fn test_all_in_index_order() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_breakdown_absent_before_2018() {
        let table = MetricsTable::new();
        for metric in Metric::ALL {
            for (year, cell) in table.column(metric) {
                let expect_absent = metric.is_segment_breakdown() && year < 2018;
                assert_eq!(cell.is_none(), expect_absent, "{} {year}", metric.label());
            }
        }
    }

    #[test]
    fn test_value_lookup() {
        let table = MetricsTable::new();
        assert_eq!(table.value(2023, Metric::NetIncome), Some(96995.0));
        assert_eq!(table.value(2019, Metric::EpsDiluted), Some(8.86));
        assert_eq!(table.value(2015, Metric::RevenueMac), None);
        assert_eq!(table.value(1999, Metric::NetIncome), None);
    }

    #[test]
    fn test_validate_rejects_duplicate_year() {
        let mut rows = MetricsTable::new().rows().to_vec();
        rows[1].year = 2023;
        let err = MetricsTable::from_rows(rows).validate().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::DuplicateYear {
                year: 2023,
                count: 2
            }
        ));
    }

    #[test]
    fn test_validate_rejects_ascending() {
        let mut rows = MetricsTable::new().rows().to_vec();
        rows.reverse();
        let err = MetricsTable::from_rows(rows).validate().unwrap_err();
        assert!(matches!(err, DashboardError::YearOrder { .. }));
    }

    #[test]
    fn test_validate_rejects_nan_and_empty() {
        let mut rows = MetricsTable::new().rows().to_vec();
        rows[0].values[Metric::Roa.index()] = Some(f64::NAN);
        let err = MetricsTable::from_rows(rows).validate().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::NonFinite {
                column: "ROA",
                year: 2023
            }
        ));

        let err = MetricsTable::from_rows(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, DashboardError::EmptyTable));
    }

    #[test]
    fn test_num_serialization() {
        assert_eq!(serde_json::to_string(&Num(Some(96995.0))).unwrap(), "96995");
        assert_eq!(serde_json::to_string(&Num(Some(6.13))).unwrap(), "6.13");
        assert_eq!(serde_json::to_string(&Num(Some(0.8))).unwrap(), "0.8");
        assert_eq!(serde_json::to_string(&Num(None)).unwrap(), "null");
    }

    #[test]
    fn test_row_serialization() {
        let table = MetricsTable::new();
        let json = serde_json::to_value(table.rows()[8]).unwrap();
        assert_eq!(json["Year"], 2015);
        assert_eq!(json["Net Income"], 53394);
        assert!(json["Revenue by iPhone"].is_null());
        assert_eq!(json.as_object().unwrap().len(), METRIC_COUNT + 1);
    }

    #[test]
    fn test_csv() {
        let csv = MetricsTable::new().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Year,Total Net Sales,Products Net Sales"));
        assert!(lines[1].starts_with("2023,383285,298085,85200"));
        assert!(lines[9].starts_with("2015,233715,,,,,,93626"));
        assert!(lines[9].ends_with(",0.8,59.65"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.9), "12.9");
        assert_eq!(format_number(8067.0), "8067");
    }
}
