use std::sync::Arc;

use graphql_parser::parse_query;
use log::*;
use ondc_common::{NormalizedProduct, ProductFilter};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::ShopifyConfig,
    data_objects::ProductSearchResult,
    product_query::products_graphql_query,
    ShopifyApiError,
};

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let mut val = HeaderValue::from_str(config.admin_access_token.reveal().trim())
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert("X-Shopify-Access-Token", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    pub fn url(&self) -> String {
        format!("{}/admin/api/{}/graphql.json", self.config.shop_url.trim_end_matches('/'), self.config.api_version)
    }

    pub async fn graphql_query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ShopifyApiError> {
        if !self.config.has_credentials() {
            return Err(ShopifyApiError::MissingCredentials);
        }
        let query = parse_query::<String>(query).map_err(|e| ShopifyApiError::InvalidGraphQL(e.to_string()))?;
        let mut body = serde_json::json!({
            "query": query.to_string(),
        });
        if let Some(vars) = variables {
            body["variables"] = vars;
        }
        let url = self.url();
        trace!("Sending GraphQL query to {url}: {body}");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ShopifyApiError::RestRequestError(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        debug!("Raw Shopify response: {text}");
        if !status.is_success() {
            return Err(ShopifyApiError::QueryError { status: status.as_u16(), message: text });
        }
        let result = serde_json::from_str::<Value>(&text).map_err(|e| ShopifyApiError::JsonError(e.to_string()))?;
        if let Some(errors) = result["errors"].as_array() {
            if !errors.is_empty() {
                let e = errors
                    .iter()
                    .map(|e| e["message"].as_str().map(String::from).unwrap_or_else(|| e.to_string()))
                    .collect::<Vec<String>>()
                    .join(", ");
                return Err(ShopifyApiError::GraphQLError(e));
            }
        }
        let data = result["data"].clone();
        let costs = result["extensions"]["cost"].clone();
        trace!("GraphQL costs: {costs}");
        if data.is_null() {
            return Err(ShopifyApiError::EmptyResponse);
        }
        serde_json::from_value(data).map_err(|e| ShopifyApiError::JsonError(e.to_string()))
    }

    /// Fetches up to [`crate::PRODUCT_PAGE_SIZE`] products matching the filter.
    pub async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<NormalizedProduct>, ShopifyApiError> {
        let query = products_graphql_query(filter).ok_or_else(|| ShopifyApiError::EmptyFilter(filter.to_string()))?;
        debug!("Executing GraphQL query: {query}");
        let result = self.graphql_query::<ProductSearchResult>(&query, None).await?;
        let products = result.into_products();
        info!("Successfully found {} products for {filter}", products.len());
        Ok(products)
    }
}
