//! Property tests for the reshaping laws.

use proptest::prelude::{ProptestConfig, Strategy, prop, prop_assert, prop_assert_eq, proptest};

use debt_ingest::RawTable;
use debt_model::{Metric, TransformOptions};
use debt_transform::{build_tables, pivot_tidy};

#[derive(Debug, Clone)]
struct YearInput {
    total: u32,
    principal: u32,
    interest: u32,
    short_term_share: u8,
    public_share: u8,
}

fn year_input() -> impl Strategy<Value = YearInput> {
    (
        prop::sample::select(vec![0u32, 1, 250, 10_000, 987_654]),
        0u32..5_000,
        0u32..5_000,
        0u8..=100,
        0u8..=100,
    )
        .prop_map(
            |(total, principal, interest, short_term_share, public_share)| YearInput {
                total,
                principal,
                interest,
                short_term_share,
                public_share,
            },
        )
}

fn raw_table(inputs: &[YearInput]) -> RawTable {
    let mut headers = vec!["Indicator".to_string()];
    headers.extend((0..inputs.len()).map(|i| (2000 + i).to_string()));
    let row = |label: &str, value: &dyn Fn(&YearInput) -> f64| {
        let mut cells = vec![label.to_string()];
        cells.extend(inputs.iter().map(|input| value(input).to_string()));
        cells
    };
    let rows = vec![
        row("Total External debt stocks", &|i| f64::from(i.total)),
        row("Principal repayments (long-term)", &|i| f64::from(i.principal)),
        row("Interest payments (long-term)", &|i| f64::from(i.interest)),
        row("Short-term external debt", &|i| {
            f64::from(i.total) * f64::from(i.short_term_share) / 100.0
        }),
        row("Public sector", &|i| {
            f64::from(i.total) * f64::from(i.public_share) / 100.0
        }),
    ];
    RawTable::new(headers, rows)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_unpivot_then_pivot_is_identity(inputs in prop::collection::vec(year_input(), 0..12)) {
        let tables = build_tables(&raw_table(&inputs), &TransformOptions::default());
        prop_assert_eq!(tables.processed.len(), inputs.len());
        prop_assert_eq!(tables.tidy.len(), inputs.len() * Metric::ALL.len());
        let rebuilt = pivot_tidy(&tables.tidy).expect("pivot");
        prop_assert_eq!(rebuilt, tables.processed);
    }

    #[test]
    fn test_zero_total_means_zero_ratios(inputs in prop::collection::vec(year_input(), 1..12)) {
        let tables = build_tables(&raw_table(&inputs), &TransformOptions::default());
        for row in &tables.processed {
            prop_assert!(row.total_debt >= 0.0);
            if row.total_debt == 0.0 {
                prop_assert_eq!(row.debt_service_ratio, 0.0);
                prop_assert_eq!(row.short_term_ratio, 0.0);
                prop_assert_eq!(row.public_debt_ratio, 0.0);
            } else {
                prop_assert!((0.0..=100.0 + 1e-9).contains(&row.short_term_ratio));
                prop_assert!((0.0..=100.0 + 1e-9).contains(&row.public_debt_ratio));
            }
        }
    }

    #[test]
    fn test_growth_matches_formula(inputs in prop::collection::vec(year_input(), 1..12)) {
        let tables = build_tables(&raw_table(&inputs), &TransformOptions::default());
        prop_assert_eq!(tables.processed[0].annual_growth_rate, None);
        for pair in tables.processed.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if prev.total_debt == 0.0 {
                prop_assert_eq!(cur.annual_growth_rate, None);
            } else {
                let expected = (cur.total_debt - prev.total_debt) / prev.total_debt * 100.0;
                prop_assert_eq!(cur.annual_growth_rate, Some(expected));
            }
        }
    }
}
