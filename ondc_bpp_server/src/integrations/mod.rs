//! Storefront integrations
pub mod shopify;

pub use shopify::ShopifyCatalog;
