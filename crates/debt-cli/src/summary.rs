use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use debt_cli::pipeline::RunOutcome;
use debt_model::StationarityResult;

pub fn print_summary(outcome: &RunOutcome) {
    if let Some(encoding) = &outcome.encoding {
        println!("Input encoding: {encoding}");
    }
    println!("Years processed: {}", outcome.processed.len());

    if !outcome.outputs.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Output"),
            header_cell("Rows"),
            header_cell("Path"),
        ]);
        apply_summary_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for output in &outcome.outputs {
            let name = output
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            table.add_row(vec![
                Cell::new(name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                output.rows.map_or_else(|| dim_cell("-"), Cell::new),
                dim_cell(output.path.display()),
            ]);
        }
        println!("{table}");
    }

    if let Some(results) = &outcome.analysis {
        println!("Stationarity: {}", stationarity_line(&results.stationarity));
        if results.decomposition.is_none() {
            println!("Decomposition: skipped (needs more than 6 years)");
        }
    }

    if !outcome.dropped.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Dropped year"), header_cell("Reason")]);
        apply_table_style(&mut table);
        for dropped in &outcome.dropped {
            table.add_row(vec![
                Cell::new(dropped.year).fg(Color::Yellow),
                Cell::new(&dropped.reason),
            ]);
        }
        eprintln!("Dropped years:");
        eprintln!("{table}");
    }
}

fn stationarity_line(result: &StationarityResult) -> String {
    match (result.test_statistic, result.p_value) {
        (Some(statistic), Some(p_value)) => {
            format!("ADF statistic {statistic:.4}, p-value {p_value:.4}")
        }
        _ => "not computed (series too short or degenerate)".to_string(),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn status_cell(present: bool) -> Cell {
    if present {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_stationarity_is_explained() {
        let line = stationarity_line(&StationarityResult::undefined());
        assert!(line.starts_with("not computed"));
    }

    #[test]
    fn test_defined_stationarity_shows_four_decimals() {
        let result = StationarityResult {
            test_statistic: Some(-2.787_435),
            p_value: Some(0.060_091),
            ..StationarityResult::undefined()
        };
        assert_eq!(
            stationarity_line(&result),
            "ADF statistic -2.7874, p-value 0.0601"
        );
    }
}
