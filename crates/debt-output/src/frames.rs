//! DataFrame builders with the fixed column labels of every output table.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use debt_model::{
    Composition, DebtGdpRow, DecompositionRow, GrowthRateRow, Metric, ProcessedRow, TidyRecord,
    YEAR_COLUMN,
};

use crate::error::{OutputError, Result};

pub const TIDY_INDICATOR: &str = "Indicator";
pub const TIDY_VALUE: &str = "Value";

pub const DECOMPOSITION_COLUMNS: [&str; 4] = ["Original", "Trend", "Seasonal", "Residual"];
pub const GROWTH_COLUMN: &str = "Total External debt stocks_growth";
pub const DEBT_GDP_COLUMNS: [&str; 3] = [
    "Debt (USD millions)",
    "GDP (USD millions)",
    "Debt to GDP Ratio (%)",
];
pub const BY_TYPE_COLUMNS: [&str; 7] = [
    "Total External debt stocks",
    "Short-term external debt",
    "Short-term external debt (%)",
    "Long-term external debt",
    "Long-term external debt (%)",
    "Public sector",
    "Public sector (%)",
];
pub const BY_DEBTOR_COLUMNS: [&str; 4] = [
    "Public sector",
    "Public sector (%)",
    "Private sector not guaranteed",
    "Private sector not guaranteed (%)",
];
pub const FLOW_COLUMNS: [&str; 2] = ["Debt Service", "Debt Service Ratio (%)"];

fn year_column<'a>(years: impl Iterator<Item = &'a i32>) -> Column {
    Series::new(YEAR_COLUMN.into(), years.copied().collect::<Vec<i32>>()).into_column()
}

fn values_column(name: &str, values: Vec<f64>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn optional_column(name: &str, values: Vec<Option<f64>>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn frame(table: &'static str, columns: Vec<Column>) -> Result<DataFrame> {
    DataFrame::new(columns).map_err(|source| OutputError::Frame { table, source })
}

/// Processed (wide) table: `Year` followed by every metric in order.
pub fn processed_frame(rows: &[ProcessedRow]) -> Result<DataFrame> {
    let mut columns = vec![year_column(rows.iter().map(|row| &row.year))];
    for metric in Metric::ALL {
        let values: Vec<Option<f64>> = rows.iter().map(|row| metric.value_of(row)).collect();
        columns.push(optional_column(metric.label(), values));
    }
    frame("processed", columns)
}

/// Tidy (long) table: `Year`, `Indicator`, `Value`.
pub fn tidy_frame(records: &[TidyRecord]) -> Result<DataFrame> {
    let indicators: Vec<&str> = records.iter().map(|r| r.indicator.label()).collect();
    frame(
        "tidy",
        vec![
            year_column(records.iter().map(|r| &r.year)),
            Series::new(TIDY_INDICATOR.into(), indicators).into_column(),
            optional_column(TIDY_VALUE, records.iter().map(|r| r.value).collect()),
        ],
    )
}

pub fn decomposition_frame(rows: &[DecompositionRow]) -> Result<DataFrame> {
    let [original, trend, seasonal, residual] = DECOMPOSITION_COLUMNS;
    frame(
        "decomposition",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            values_column(original, rows.iter().map(|r| r.original).collect()),
            optional_column(trend, rows.iter().map(|r| r.trend).collect()),
            values_column(seasonal, rows.iter().map(|r| r.seasonal).collect()),
            optional_column(residual, rows.iter().map(|r| r.residual).collect()),
        ],
    )
}

pub fn growth_frame(rows: &[GrowthRateRow]) -> Result<DataFrame> {
    frame(
        "growth_rates",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            optional_column(GROWTH_COLUMN, rows.iter().map(|r| r.total_debt_growth).collect()),
        ],
    )
}

pub fn debt_gdp_frame(rows: &[DebtGdpRow]) -> Result<DataFrame> {
    let [debt, gdp, ratio] = DEBT_GDP_COLUMNS;
    frame(
        "debt_gdp_ratio",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            values_column(debt, rows.iter().map(|r| r.debt).collect()),
            values_column(gdp, rows.iter().map(|r| r.gdp).collect()),
            values_column(ratio, rows.iter().map(|r| r.ratio_pct).collect()),
        ],
    )
}

pub fn by_type_frame(composition: &Composition) -> Result<DataFrame> {
    let rows = &composition.by_type;
    let [total, short, short_pct, long, long_pct, public, public_pct] = BY_TYPE_COLUMNS;
    frame(
        "debt_by_type",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            values_column(total, rows.iter().map(|r| r.total_debt).collect()),
            values_column(short, rows.iter().map(|r| r.short_term).collect()),
            values_column(short_pct, rows.iter().map(|r| r.short_term_pct).collect()),
            values_column(long, rows.iter().map(|r| r.long_term).collect()),
            values_column(long_pct, rows.iter().map(|r| r.long_term_pct).collect()),
            values_column(public, rows.iter().map(|r| r.public_sector).collect()),
            values_column(public_pct, rows.iter().map(|r| r.public_sector_pct).collect()),
        ],
    )
}

pub fn by_debtor_frame(composition: &Composition) -> Result<DataFrame> {
    let rows = &composition.by_debtor;
    let [public, public_pct, private, private_pct] = BY_DEBTOR_COLUMNS;
    frame(
        "debt_by_debtor",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            values_column(public, rows.iter().map(|r| r.public_sector).collect()),
            values_column(public_pct, rows.iter().map(|r| r.public_sector_pct).collect()),
            values_column(private, rows.iter().map(|r| r.private_sector).collect()),
            values_column(private_pct, rows.iter().map(|r| r.private_sector_pct).collect()),
        ],
    )
}

pub fn flows_frame(composition: &Composition) -> Result<DataFrame> {
    let rows = &composition.flows;
    let [service, ratio] = FLOW_COLUMNS;
    frame(
        "debt_flows",
        vec![
            year_column(rows.iter().map(|r| &r.year)),
            values_column(service, rows.iter().map(|r| r.debt_service).collect()),
            values_column(ratio, rows.iter().map(|r| r.debt_service_ratio).collect()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn test_processed_frame_columns_follow_metric_order() {
        let row = ProcessedRow::new(2013, 100.0, 10.0, 10.0, 5.0, 40.0).unwrap();
        let df = processed_frame(&[row]).unwrap();
        assert_eq!(
            names(&df),
            vec![
                "Year",
                "Total External debt stocks",
                "debt_service",
                "debt_service_ratio",
                "short_term_ratio",
                "public_debt_ratio",
                "annual_growth_rate",
            ]
        );
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("annual_growth_rate").unwrap().null_count(), 1);
    }

    #[test]
    fn test_empty_tables_keep_their_schema() {
        let df = by_type_frame(&Composition::default()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 8);
        assert_eq!(names(&df)[0], "Year");
    }
}
