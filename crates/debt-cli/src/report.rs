//! Terminal rendering of the processed and composition tables.

use comfy_table::{Cell, CellAlignment, Table};

use debt_cli::pipeline::RunOutcome;
use debt_common::format_numeric;
use debt_model::{Composition, Metric, ProcessedRow, YEAR_COLUMN};

use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn print_report(outcome: &RunOutcome) {
    if outcome.processed.is_empty() {
        println!("No processed years to report.");
        return;
    }
    println!("Processed indicators:");
    println!("{}", processed_table(&outcome.processed));
    if let Some(composition) = &outcome.composition {
        println!("Debt by type:");
        println!("{}", by_type_table(composition));
        println!("Debt by debtor:");
        println!("{}", by_debtor_table(composition));
        println!("Debt flows:");
        println!("{}", flows_table(composition));
    }
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric(round2(v))),
        None => dim_cell("-"),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn numeric_table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(row);
    }
    for index in 1..headers.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn processed_table(rows: &[ProcessedRow]) -> Table {
    let headers: Vec<&str> = std::iter::once(YEAR_COLUMN)
        .chain(Metric::ALL.iter().map(|metric| metric.label()))
        .collect();
    let cells = rows
        .iter()
        .map(|row| {
            std::iter::once(Cell::new(row.year))
                .chain(Metric::ALL.iter().map(|metric| value_cell(metric.value_of(row))))
                .collect::<Vec<_>>()
        })
        .collect();
    numeric_table(&headers, cells)
}

fn by_type_table(composition: &Composition) -> Table {
    let cells = composition
        .by_type
        .iter()
        .map(|row| {
            vec![
                Cell::new(row.year),
                value_cell(Some(row.total_debt)),
                value_cell(Some(row.short_term)),
                value_cell(Some(row.short_term_pct)),
                value_cell(Some(row.long_term)),
                value_cell(Some(row.long_term_pct)),
                value_cell(Some(row.public_sector)),
                value_cell(Some(row.public_sector_pct)),
            ]
        })
        .collect();
    numeric_table(
        &[
            YEAR_COLUMN,
            "Total",
            "Short-term",
            "Short-term (%)",
            "Long-term",
            "Long-term (%)",
            "Public",
            "Public (%)",
        ],
        cells,
    )
}

fn by_debtor_table(composition: &Composition) -> Table {
    let cells = composition
        .by_debtor
        .iter()
        .map(|row| {
            vec![
                Cell::new(row.year),
                value_cell(Some(row.public_sector)),
                value_cell(Some(row.public_sector_pct)),
                value_cell(Some(row.private_sector)),
                value_cell(Some(row.private_sector_pct)),
            ]
        })
        .collect();
    numeric_table(
        &[YEAR_COLUMN, "Public", "Public (%)", "Private", "Private (%)"],
        cells,
    )
}

fn flows_table(composition: &Composition) -> Table {
    let cells = composition
        .flows
        .iter()
        .map(|row| {
            vec![
                Cell::new(row.year),
                value_cell(Some(row.debt_service)),
                value_cell(Some(row.debt_service_ratio)),
            ]
        })
        .collect();
    numeric_table(&[YEAR_COLUMN, "Debt service", "Debt service ratio (%)"], cells)
}
