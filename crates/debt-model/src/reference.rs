//! Static reference data.

/// Nominal GDP in USD millions, 2013-2023.
///
/// This table is the single source of GDP figures for the debt/GDP ratio.
pub const GDP_REFERENCE: [(i32, f64); 11] = [
    (2013, 1.8568e6),
    (2014, 2.0396e6),
    (2015, 2.0964e6),
    (2016, 2.2944e6),
    (2017, 2.6527e6),
    (2018, 2.7012e6),
    (2019, 2.8704e6),
    (2020, 2.6681e6),
    (2021, 3.1760e6),
    (2022, 3.3848e6),
    (2023, 3.5342e6),
];

/// GDP for `year`, or 0.0 when the year is outside the reference table.
pub fn gdp_for_year(year: i32) -> f64 {
    GDP_REFERENCE
        .iter()
        .find(|(candidate, _)| *candidate == year)
        .map_or(0.0, |(_, gdp)| *gdp)
}
