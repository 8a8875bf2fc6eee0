use async_trait::async_trait;
use ondc_common::{NormalizedProduct, ProductFilter};

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches the products matching `filter`.
    ///
    /// This method does not fail. Configuration problems and backend errors are logged by the implementation and
    /// reported as "no results".
    async fn fetch_products(&self, filter: &ProductFilter) -> Vec<NormalizedProduct>;
}
