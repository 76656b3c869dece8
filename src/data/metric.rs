// src/data/metric.rs

/// The financial metrics carried by the combined dataset. Variant order is
/// the dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalRevenues,
    CostOfRevenues,
    GrossProfit,
    TotalOperatingExpenses,
    OperatingIncome,
    NetIncome,
    SharesOutstanding,
    CloseStockPrice,
    MarketCap,
    MultipleOfRevenue,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::TotalRevenues,
        Metric::CostOfRevenues,
        Metric::GrossProfit,
        Metric::TotalOperatingExpenses,
        Metric::OperatingIncome,
        Metric::NetIncome,
        Metric::SharesOutstanding,
        Metric::CloseStockPrice,
        Metric::MarketCap,
        Metric::MultipleOfRevenue,
    ];

    /// Display name, identical to the dataset column header.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalRevenues => "Total Revenues",
            Metric::CostOfRevenues => "Cost of Revenues",
            Metric::GrossProfit => "Gross Profit",
            Metric::TotalOperatingExpenses => "Total Operating Expenses",
            Metric::OperatingIncome => "Operating Income",
            Metric::NetIncome => "Net Income",
            Metric::SharesOutstanding => "Shares Outstanding",
            Metric::CloseStockPrice => "Close Stock Price",
            Metric::MarketCap => "Market Cap",
            Metric::MultipleOfRevenue => "Multiple of Revenue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_metric_once() {
        let mut seen = std::collections::HashSet::new();
        for metric in Metric::ALL {
            assert!(seen.insert(metric.label()));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn labels_match_dataset_columns() {
        assert_eq!(Metric::TotalRevenues.label(), "Total Revenues");
        assert_eq!(Metric::MultipleOfRevenue.label(), "Multiple of Revenue");
    }
}
