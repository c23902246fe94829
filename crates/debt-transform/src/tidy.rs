//! Building the processed (wide) table and its tidy (long) form.

use std::collections::BTreeMap;

use tracing::{debug, info, info_span, warn};

use debt_ingest::RawTable;
use debt_model::{Indicator, Metric, NonNumericPolicy, ProcessedRow, TidyRecord, TransformOptions};

use crate::error::{Result, TransformError, YearError};
use crate::extract::try_extract_value;
use crate::resolve::{RowSet, resolve_with};
use crate::years::{YearColumn, year_columns};

/// A year left out of the processed table, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedYear {
    pub year: i32,
    pub reason: String,
}

/// The two tables produced from one raw table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TidyTables {
    pub processed: Vec<ProcessedRow>,
    pub tidy: Vec<TidyRecord>,
    pub dropped: Vec<DroppedYear>,
}

/// Resolved row sets for every tracked indicator.
struct IndicatorRows<'a> {
    sets: Vec<(Indicator, RowSet<'a>)>,
}

impl<'a> IndicatorRows<'a> {
    fn resolve(table: &'a RawTable, options: &TransformOptions) -> Self {
        let sets = Indicator::ALL
            .into_iter()
            .map(|indicator| {
                (
                    indicator,
                    resolve_with(table, indicator.label(), options.duplicates),
                )
            })
            .collect();
        Self { sets }
    }

    fn get(&self, indicator: Indicator) -> Option<&RowSet<'a>> {
        self.sets
            .iter()
            .find(|(candidate, _)| *candidate == indicator)
            .map(|(_, rows)| rows)
    }
}

/// Amounts extracted for one year.
#[derive(Debug, Default, Clone, Copy)]
struct YearAmounts {
    principal: f64,
    interest: f64,
    total: f64,
    short_term: f64,
    public_sector: f64,
}

/// Builds the processed and tidy tables from a raw wide table.
///
/// Missing indicators and missing cells read as zero. A year whose cell
/// holds unparseable text is handled by [`TransformOptions::non_numeric`];
/// a year whose values break a record invariant is always dropped. Dropped
/// years leave gaps and growth rates are computed across the remaining rows.
pub fn build_tables(table: &RawTable, options: &TransformOptions) -> TidyTables {
    let span = info_span!("build_tables", rows = table.row_count());
    let _guard = span.enter();

    let years = year_columns(table);
    if years.is_empty() {
        warn!("no year columns found in raw table");
    }
    debug!(years = ?years.iter().map(|y| y.year).collect::<Vec<_>>(), "years found");

    let indicators = IndicatorRows::resolve(table, options);
    let mut rows = Vec::with_capacity(years.len());
    let mut dropped = Vec::new();
    for column in &years {
        match process_year(&indicators, column, options) {
            Ok(row) => rows.push(row),
            Err(error) => {
                warn!(year = column.year, %error, "dropping year");
                dropped.push(DroppedYear {
                    year: column.year,
                    reason: error.to_string(),
                });
            }
        }
    }

    let processed = attach_growth_rates(rows);
    let tidy = unpivot(&processed);
    info!(
        years = years.len(),
        processed = processed.len(),
        dropped = dropped.len(),
        tidy = tidy.len(),
        "tables built"
    );
    TidyTables {
        processed,
        tidy,
        dropped,
    }
}

fn process_year(
    indicators: &IndicatorRows<'_>,
    column: &YearColumn,
    options: &TransformOptions,
) -> std::result::Result<ProcessedRow, YearError> {
    let mut amounts = YearAmounts::default();
    for indicator in Indicator::ALL {
        let value = match indicators.get(indicator) {
            Some(rows) => amount(rows, column, options.non_numeric)?,
            None => 0.0,
        };
        match indicator {
            Indicator::PrincipalRepayments => amounts.principal = value,
            Indicator::InterestPayments => amounts.interest = value,
            Indicator::TotalDebt => amounts.total = value,
            Indicator::ShortTermDebt => amounts.short_term = value,
            Indicator::PublicSector => amounts.public_sector = value,
        }
    }

    let debt_service = amounts.principal + amounts.interest;
    let (debt_service_ratio, short_term_ratio, public_debt_ratio) = if amounts.total > 0.0 {
        (
            percent_of(debt_service, amounts.total),
            percent_of(amounts.short_term, amounts.total),
            percent_of(amounts.public_sector, amounts.total),
        )
    } else {
        (0.0, 0.0, 0.0)
    };
    for (metric, ratio) in [
        (Metric::DebtServiceRatio, debt_service_ratio),
        (Metric::ShortTermRatio, short_term_ratio),
        (Metric::PublicDebtRatio, public_debt_ratio),
    ] {
        if !(0.0..=100.0).contains(&ratio) {
            warn!(year = column.year, metric = %metric, ratio, "ratio outside [0, 100]");
        }
    }

    let row = ProcessedRow::new(
        column.year,
        amounts.total,
        debt_service,
        debt_service_ratio,
        short_term_ratio,
        public_debt_ratio,
    )?;
    Ok(row)
}

fn amount(
    rows: &RowSet<'_>,
    column: &YearColumn,
    policy: NonNumericPolicy,
) -> std::result::Result<f64, YearError> {
    match try_extract_value(rows, &column.label) {
        Ok(value) => Ok(value),
        Err(error) => match policy {
            NonNumericPolicy::DropYear => Err(error.into()),
            NonNumericPolicy::ZeroFill => {
                warn!(year = column.year, indicator = rows.indicator(), %error, "using 0 for unparseable value");
                Ok(0.0)
            }
        },
    }
}

fn percent_of(part: f64, total: f64) -> f64 {
    part / total * 100.0
}

/// Period-over-period percent change.
///
/// The first entry is undefined, as is any entry whose predecessor is zero.
pub fn percent_change(values: &[f64]) -> Vec<Option<f64>> {
    let mut changes = Vec::with_capacity(values.len());
    for (idx, current) in values.iter().enumerate() {
        let change = match idx.checked_sub(1).map(|prev| values[prev]) {
            Some(previous) if previous != 0.0 => {
                Some((current - previous) / previous * 100.0).filter(|v| v.is_finite())
            }
            _ => None,
        };
        changes.push(change);
    }
    changes
}

fn attach_growth_rates(rows: Vec<ProcessedRow>) -> Vec<ProcessedRow> {
    let totals: Vec<f64> = rows.iter().map(|row| row.total_debt).collect();
    let rates = percent_change(&totals);
    rows.into_iter()
        .zip(rates)
        .filter_map(|(row, rate)| {
            let year = row.year;
            match row.with_growth_rate(rate) {
                Ok(row) => Some(row),
                Err(error) => {
                    warn!(year, %error, "growth rate rejected, year dropped");
                    None
                }
            }
        })
        .collect()
}

/// Unpivots processed rows into tidy records.
///
/// Records are grouped by metric in declaration order, each group in the
/// processed table's year order. Every non-year cell yields exactly one
/// record, undefined growth rates included.
pub fn unpivot(rows: &[ProcessedRow]) -> Vec<TidyRecord> {
    let mut records = Vec::with_capacity(rows.len() * Metric::ALL.len());
    for metric in Metric::ALL {
        for row in rows {
            records.push(TidyRecord {
                year: row.year,
                indicator: metric,
                value: metric.value_of(row),
            });
        }
    }
    records
}

/// Rebuilds processed rows from tidy records (the inverse of [`unpivot`]).
///
/// Years keep the order of their first appearance. Each year needs exactly
/// one record per metric; only the growth rate may be undefined.
pub fn pivot_tidy(records: &[TidyRecord]) -> Result<Vec<ProcessedRow>> {
    let mut order: Vec<i32> = Vec::new();
    let mut cells: BTreeMap<(i32, Metric), Option<f64>> = BTreeMap::new();
    for record in records {
        if !order.contains(&record.year) {
            order.push(record.year);
        }
        if cells
            .insert((record.year, record.indicator), record.value)
            .is_some()
        {
            return Err(TransformError::DuplicateCell {
                year: record.year,
                metric: record.indicator,
            });
        }
    }

    let mut rows = Vec::with_capacity(order.len());
    for year in order {
        let required = |metric: Metric| -> Result<f64> {
            cells
                .get(&(year, metric))
                .copied()
                .flatten()
                .ok_or(TransformError::MissingCell { year, metric })
        };
        let growth = match cells.get(&(year, Metric::AnnualGrowthRate)) {
            Some(value) => *value,
            None => {
                return Err(TransformError::MissingCell {
                    year,
                    metric: Metric::AnnualGrowthRate,
                });
            }
        };
        let row = ProcessedRow::new(
            year,
            required(Metric::TotalDebt)?,
            required(Metric::DebtService)?,
            required(Metric::DebtServiceRatio)?,
            required(Metric::ShortTermRatio)?,
            required(Metric::PublicDebtRatio)?,
        )?
        .with_growth_rate(growth)?;
        rows.push(row);
    }
    Ok(rows)
}
