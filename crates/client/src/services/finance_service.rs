use examdesk_common::{FinancialStatistics, StatisticsPeriod};
use tracing::debug;

use crate::api::ApiClient;
use crate::error::Result;

pub struct FinanceService {
    api: ApiClient,
}

impl FinanceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET statistics/financial?year=&month=`
    pub async fn statistics(&self, year: i32, month: u32) -> Result<FinancialStatistics> {
        let period = StatisticsPeriod::new(year, month)?;
        debug!(year, month, "Fetching financial statistics.");
        let query: Vec<(String, String)> = period
            .query_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        self.api.get_json("statistics/financial", &query).await
    }
}
