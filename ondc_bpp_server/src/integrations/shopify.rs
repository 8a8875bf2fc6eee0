use async_trait::async_trait;
use log::*;
use ondc_common::{NormalizedProduct, ProductFilter};
use ondc_engine::ProductCatalog;
use shopify_tools::{ShopifyApi, ShopifyApiError, ShopifyConfig};

/// The Shopify storefront as seen by the BPP engine.
///
/// Every failure is logged here and reported to the engine as "no products", so a broken storefront still produces
/// an (empty) `on_*` response. A client that could not be built (e.g. an access token that is not a valid header
/// value) is treated the same way as missing credentials.
#[derive(Clone)]
pub struct ShopifyCatalog {
    config: ShopifyConfig,
    api: Option<ShopifyApi>,
}

impl ShopifyCatalog {
    pub fn new(config: ShopifyConfig) -> Self {
        let api = match ShopifyApi::new(config.clone()) {
            Ok(api) => Some(api),
            Err(e) => {
                error!(
                    "🛍️️ Could not create the Shopify client for {} (Access Token: {}). Product queries will return \
                     no results. {e}",
                    config.shop_url,
                    config.admin_access_token.redacted()
                );
                None
            },
        };
        Self { config, api }
    }

    pub fn is_configured(&self) -> bool {
        self.api.is_some()
    }
}

#[async_trait]
impl ProductCatalog for ShopifyCatalog {
    async fn fetch_products(&self, filter: &ProductFilter) -> Vec<NormalizedProduct> {
        let config = &self.config;
        let Some(api) = &self.api else {
            error!(
                "🛍️️ Error: Shopify client is not configured - URL: {}, Access Token: {}",
                config.shop_url,
                config.admin_access_token.redacted()
            );
            return vec![];
        };
        debug!("🛍️️ Starting Shopify query with URL: {}", config.shop_url);
        match api.search_products(filter).await {
            Ok(products) => products,
            Err(ShopifyApiError::MissingCredentials) => {
                error!(
                    "🛍️️ Error: Missing Shopify configuration - URL: {}, Access Token: {}",
                    config.shop_url,
                    config.admin_access_token.redacted()
                );
                vec![]
            },
            Err(ShopifyApiError::EmptyFilter(f)) => {
                error!("🛍️️ Cannot query Shopify with an empty filter ({f}).");
                vec![]
            },
            Err(e) => {
                error!("🛍️️ Shopify query for {filter} failed. {e}");
                vec![]
            },
        }
    }
}
