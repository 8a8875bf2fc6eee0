mod api;
mod config;
mod error;

pub mod data_objects;
pub mod helpers;
pub mod product_query;

pub use api::ShopifyApi;
pub use config::ShopifyConfig;
pub use error::ShopifyApiError;
pub use product_query::{products_graphql_query, search_query, LEGACY_CITY_CODE, PRODUCT_PAGE_SIZE};
