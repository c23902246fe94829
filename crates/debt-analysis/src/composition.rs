//! Composition Splitter.

use debt_model::{Composition, DebtByDebtorRow, DebtByTypeRow, DebtFlowRow, ProcessedRow};
use tracing::debug;

/// Partitions total debt by maturity and by debtor, and collects the flows.
pub fn split(rows: &[ProcessedRow]) -> Composition {
    let composition = Composition {
        by_type: rows.iter().map(by_type).collect(),
        by_debtor: rows.iter().map(by_debtor).collect(),
        flows: rows.iter().map(flow).collect(),
    };
    debug!(years = rows.len(), "composition split");
    composition
}

fn share(ratio_pct: f64, total: f64) -> f64 {
    ratio_pct * total / 100.0
}

fn by_type(row: &ProcessedRow) -> DebtByTypeRow {
    let short_term = share(row.short_term_ratio, row.total_debt);
    DebtByTypeRow {
        year: row.year,
        total_debt: row.total_debt,
        short_term,
        short_term_pct: row.short_term_ratio,
        long_term: row.total_debt - short_term,
        long_term_pct: 100.0 - row.short_term_ratio,
        public_sector: share(row.public_debt_ratio, row.total_debt),
        public_sector_pct: row.public_debt_ratio,
    }
}

fn by_debtor(row: &ProcessedRow) -> DebtByDebtorRow {
    let public_sector = share(row.public_debt_ratio, row.total_debt);
    DebtByDebtorRow {
        year: row.year,
        public_sector,
        public_sector_pct: row.public_debt_ratio,
        private_sector: row.total_debt - public_sector,
        private_sector_pct: 100.0 - row.public_debt_ratio,
    }
}

fn flow(row: &ProcessedRow) -> DebtFlowRow {
    DebtFlowRow {
        year: row.year,
        debt_service: row.debt_service,
        debt_service_ratio: row.debt_service_ratio,
    }
}
