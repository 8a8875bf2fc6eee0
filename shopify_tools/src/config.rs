use std::time::Duration;

use log::*;
use ondc_common::Secret;

pub const DEFAULT_SHOP_URL: &str = "https://testgamaa.myshopify.com";
pub const DEFAULT_API_VERSION: &str = "2025-01";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// Base URL of the storefront, including the scheme. e.g. "https://my-shop.myshopify.com"
    pub shop_url: String,
    pub admin_access_token: Secret<String>,
    pub api_version: String,
    /// Upper bound on the time a single Admin API call may take.
    pub request_timeout: Duration,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            shop_url: DEFAULT_SHOP_URL.to_string(),
            admin_access_token: Secret::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ShopifyConfig {
    pub fn new_from_env_or_default() -> Self {
        let shop_url = std::env::var("SHOPIFY_URL").ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
            warn!("SHOPIFY_URL not set, using {DEFAULT_SHOP_URL} as default");
            DEFAULT_SHOP_URL.to_string()
        });
        let api_version = std::env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| {
            warn!("SHOPIFY_API_VERSION not set, using {DEFAULT_API_VERSION} as default");
            DEFAULT_API_VERSION.to_string()
        });
        let admin_access_token = Secret::new(std::env::var("SHOPIFY_ACCESS_TOKEN").unwrap_or_else(|_| {
            error!("SHOPIFY_ACCESS_TOKEN not set. Product queries will return no results until it is configured.");
            String::default()
        }));
        let request_timeout = std::env::var("SHOPIFY_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("Invalid value for SHOPIFY_REQUEST_TIMEOUT_SECS ({s}). {e}"))
                    .ok()
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let shop_url = shop_url.trim_end_matches('/').to_string();
        info!("Shopify URL: {shop_url}");
        info!("Access Token configured: {}", !admin_access_token.is_empty());
        Self { shop_url, admin_access_token, api_version, request_timeout }
    }

    /// True if both the storefront URL and the access token have been provided.
    pub fn has_credentials(&self) -> bool {
        !self.shop_url.trim().is_empty() && !self.admin_access_token.is_empty()
    }
}
