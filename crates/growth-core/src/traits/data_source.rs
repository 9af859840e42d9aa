//! Data source trait definitions.

use crate::error::DataError;
use crate::types::PriceSeries;
use async_trait::async_trait;

/// Trait for daily price history sources.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full available daily history for a symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker to fetch
    ///
    /// # Returns
    /// A series ordered from oldest to newest. A symbol with no rows is an
    /// error, never an empty series.
    async fn daily_history(&self, symbol: &str) -> Result<PriceSeries, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
