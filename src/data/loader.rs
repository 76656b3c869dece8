// src/data/loader.rs
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::data::Metric;

/// One dataset row: a single company's figures for one calendar year.
/// Monetary columns are in millions of dollars, shares in millions.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Calendar Year")]
    pub year: i32,
    #[serde(rename = "Total Revenues")]
    pub total_revenues: f64,
    #[serde(rename = "Cost of Revenues")]
    pub cost_of_revenues: f64,
    #[serde(rename = "Gross Profit")]
    pub gross_profit: f64,
    #[serde(rename = "Total Operating Expenses")]
    pub total_operating_expenses: f64,
    #[serde(rename = "Operating Income")]
    pub operating_income: f64,
    #[serde(rename = "Net Income")]
    pub net_income: f64,
    #[serde(rename = "Shares Outstanding")]
    pub shares_outstanding: f64,
    #[serde(rename = "Close Stock Price")]
    pub close_stock_price: f64,
    #[serde(rename = "Market Cap")]
    pub market_cap: f64,
    #[serde(rename = "Multiple of Revenue")]
    pub multiple_of_revenue: f64,
}

impl FinancialRow {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalRevenues => self.total_revenues,
            Metric::CostOfRevenues => self.cost_of_revenues,
            Metric::GrossProfit => self.gross_profit,
            Metric::TotalOperatingExpenses => self.total_operating_expenses,
            Metric::OperatingIncome => self.operating_income,
            Metric::NetIncome => self.net_income,
            Metric::SharesOutstanding => self.shares_outstanding,
            Metric::CloseStockPrice => self.close_stock_price,
            Metric::MarketCap => self.market_cap,
            Metric::MultipleOfRevenue => self.multiple_of_revenue,
        }
    }

    // All displayed values are whole units.
    fn round_metrics(&mut self) {
        for value in [
            &mut self.total_revenues,
            &mut self.cost_of_revenues,
            &mut self.gross_profit,
            &mut self.total_operating_expenses,
            &mut self.operating_income,
            &mut self.net_income,
            &mut self.shares_outstanding,
            &mut self.close_stock_price,
            &mut self.market_cap,
            &mut self.multiple_of_revenue,
        ] {
            *value = value.round();
        }
    }
}

/// The combined dataset, loaded once at startup and read-only afterwards.
///
/// Invariants established here and relied on everywhere else: rows sorted by
/// calendar year ascending, metric values rounded, at least one row, and one
/// row per (company, year) pair.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<FinancialRow>,
    companies: Vec<String>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Dataset file not found: {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let mut row: FinancialRow = record.context("Malformed dataset row")?;
            row.round_metrics();
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(anyhow!("Dataset contains no rows"));
        }

        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert((row.company.clone(), row.year)) {
                return Err(anyhow!(
                    "Duplicate dataset row for {} in {}",
                    row.company,
                    row.year
                ));
            }
        }

        // Stable sort: rows for the same year keep their file order.
        rows.sort_by_key(|row| row.year);

        let mut companies: Vec<String> = rows.iter().map(|row| row.company.clone()).collect();
        companies.sort();
        companies.dedup();

        Ok(Self { rows, companies })
    }

    pub fn rows(&self) -> &[FinancialRow] {
        &self.rows
    }

    /// Sorted unique company names, used as the dropdown options.
    pub fn companies(&self) -> &[String] {
        &self.companies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Company,Calendar Year,Total Revenues,Cost of Revenues,Gross Profit,Total Operating Expenses,Operating Income,Net Income,Shares Outstanding,Close Stock Price,Market Cap,Multiple of Revenue";

    fn row(company: &str, year: i32, revenue: f64, net_income: f64) -> String {
        format!("{company},{year},{revenue},10,20,30,40,{net_income},50,60,70,8")
    }

    fn parse(rows: &[String]) -> Result<Dataset> {
        let csv = format!("{}\n{}\n", HEADER, rows.join("\n"));
        Dataset::from_reader(csv.as_bytes())
    }

    #[test]
    fn sorts_rows_by_year() {
        let dataset = parse(&[
            row("Apple", 2021, 365817.0, 94680.0),
            row("Apple", 2019, 260174.0, 55256.0),
            row("Tesla", 2020, 31536.0, 721.0),
        ])
        .unwrap();

        let years: Vec<i32> = dataset.rows().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }

    #[test]
    fn rounds_metric_values_at_load() {
        let dataset = parse(&[row("Apple", 2021, 100.6, -0.4)]).unwrap();
        assert_eq!(dataset.rows()[0].total_revenues, 101.0);
        assert_eq!(dataset.rows()[0].net_income, 0.0);
    }

    #[test]
    fn companies_are_sorted_and_unique() {
        let dataset = parse(&[
            row("Tesla", 2020, 31536.0, 721.0),
            row("Apple", 2020, 274515.0, 57411.0),
            row("Tesla", 2021, 53823.0, 5519.0),
        ])
        .unwrap();

        assert_eq!(dataset.companies(), ["Apple", "Tesla"]);
    }

    #[test]
    fn metric_accessor_matches_columns() {
        let dataset = parse(&[row("Apple", 2021, 365817.0, 94680.0)]).unwrap();
        let first = &dataset.rows()[0];
        assert_eq!(first.metric(Metric::TotalRevenues), 365817.0);
        assert_eq!(first.metric(Metric::NetIncome), 94680.0);
        assert_eq!(first.metric(Metric::MultipleOfRevenue), 8.0);
    }

    #[test]
    fn rejects_schema_mismatch() {
        let csv = "Company,Calendar Year,Total Revenues\nApple,2021,365817\n";
        assert!(Dataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_empty_dataset() {
        let csv = format!("{}\n", HEADER);
        assert!(Dataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_duplicate_company_year() {
        let result = parse(&[
            row("Apple", 2021, 365817.0, 94680.0),
            row("Apple", 2021, 365000.0, 94000.0),
        ]);
        assert!(result.is_err());
    }
}
