// src/reshape.rs
//! Filtering and pivoting of the loaded dataset.
//!
//! The chart and the table are both derived from one filtered row set per
//! recompute, so they always agree on which companies and years are shown.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::{Dataset, Metric};

/// Companies substituted when the company filter is emptied out, so the
/// dashboard can never show nothing.
pub const DEFAULT_COMPANIES: [&str; 5] = ["Amazon", "Tesla", "Microsoft", "Apple", "Google"];

pub const DEFAULT_METRIC: Metric = Metric::TotalRevenues;

/// The two user-controlled values. Session-local, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub companies: BTreeSet<String>,
    pub metric: Metric,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            companies: DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect(),
            metric: DEFAULT_METRIC,
        }
    }
}

impl Selection {
    /// The company set actually used for filtering. An empty selection falls
    /// back to the default five.
    pub fn effective_companies(&self) -> BTreeSet<String> {
        if self.companies.is_empty() {
            DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.companies.clone()
        }
    }

    pub fn toggle_company(&mut self, company: &str) {
        if !self.companies.remove(company) {
            self.companies.insert(company.to_string());
        }
    }
}

/// Long-form chart input: one series per company, points ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySeries {
    pub company: String,
    pub points: Vec<(i32, f64)>,
}

/// Wide-form table input: one row per company, one column per year. `None`
/// means the company has no row for that year; missing combinations are
/// never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pub metric: Metric,
    pub years: Vec<i32>,
    pub rows: Vec<PivotRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub company: String,
    pub cells: Vec<Option<f64>>,
}

/// Everything the two renderers consume for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub series: Vec<CompanySeries>,
    pub pivot: PivotTable,
}

/// Pure function of the selection and the static dataset; recomputed on
/// every control change. Companies come out in alphabetical order, years
/// ascending; dataset rows are already year-sorted.
pub fn build_view(dataset: &Dataset, selection: &Selection) -> DashboardView {
    let companies = selection.effective_companies();
    let metric = selection.metric;

    let mut grouped: BTreeMap<&str, Vec<(i32, f64)>> = BTreeMap::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for row in dataset.rows() {
        if !companies.contains(&row.company) {
            continue;
        }
        years.insert(row.year);
        grouped
            .entry(row.company.as_str())
            .or_default()
            .push((row.year, row.metric(metric)));
    }

    let years: Vec<i32> = years.into_iter().collect();

    let series = grouped
        .iter()
        .map(|(company, points)| CompanySeries {
            company: (*company).to_string(),
            points: points.clone(),
        })
        .collect();

    let rows = grouped
        .iter()
        .map(|(company, points)| PivotRow {
            company: (*company).to_string(),
            cells: years
                .iter()
                .map(|year| {
                    points
                        .iter()
                        .find(|(point_year, _)| point_year == year)
                        .map(|(_, value)| *value)
                })
                .collect(),
        })
        .collect();

    DashboardView {
        series,
        pivot: PivotTable { metric, years, rows },
    }
}
