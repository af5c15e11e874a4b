use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{TableHeader, TableResource};

pub const MIN_STATISTICS_YEAR: i32 = 2000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year must be 2000 or later, got {0}")]
    InvalidYear(i32),
}

/// `year`/`month` query for the financial dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsPeriod {
    year: i32,
    month: u32,
}

impl StatisticsPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if year < MIN_STATISTICS_YEAR {
            return Err(PeriodError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("year", self.year.to_string()), ("month", self.month.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub month: u32,
    pub revenue: f64,
    #[serde(default)]
    pub transactions: u64,
}

impl TableResource for MonthlyRevenue {
    fn table_header(t: &dyn Fn(&str) -> String) -> Vec<TableHeader> {
        vec![
            TableHeader::new("month", t("month")).with_icon("calendar"),
            TableHeader::new("revenue", t("revenue")).with_icon("currency"),
            TableHeader::new("transactions", t("transactions")),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatistics {
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub monthly: Vec<MonthlyRevenue>,
}

impl FinancialStatistics {
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or("USD")
    }

    /// Share of the yearly total earned in `month`, as a fraction.
    pub fn month_share(&self, month: u32) -> Option<f64> {
        if self.total_revenue == 0.0 {
            return None;
        }
        self.monthly
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.revenue / self.total_revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_validation() {
        assert_eq!(StatisticsPeriod::new(2024, 0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(StatisticsPeriod::new(2024, 13), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(StatisticsPeriod::new(1999, 5), Err(PeriodError::InvalidYear(1999)));
        let period = StatisticsPeriod::new(2024, 6).unwrap();
        assert_eq!(period.query_pairs()[1], ("month", "6".to_string()));
    }

    #[test]
    fn test_statistics_decode() {
        let json = r#"{
            "year": 2024,
            "month": 3,
            "totalRevenue": 1000.0,
            "totalTransactions": 12,
            "monthly": [{"month": 3, "revenue": 250.0, "transactions": 3}]
        }"#;
        let stats: FinancialStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.currency_code(), "USD");
        assert_eq!(stats.month_share(3), Some(0.25));
        assert_eq!(stats.month_share(4), None);
    }
}
