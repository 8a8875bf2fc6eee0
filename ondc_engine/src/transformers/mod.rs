//! Response transformers
//!
//! Each transformer is a pure function of the configuration, the inbound request and the product list. Running one
//! twice on the same inputs gives the same document, apart from `context.timestamp`.
mod catalog;
mod init;
mod select;

pub use catalog::{build_catalog, on_search};
pub use init::on_init;
use log::*;
use ondc_common::{Amount, NormalizedProduct};
pub use select::{apply_offers, on_select};

use crate::ondc_types::{Descriptor, Fulfillment, FulfillmentState};

pub const STORE_NAME: &str = "Seller NP";
pub const STORE_IMAGE: &str = "https://sellerNP.com/images/np.png";
pub const STORE_DESCRIPTION: &str = "Seller Marketplace";
pub const PROVIDER_ID: &str = "P1";
pub const DELIVERY_FULFILLMENT_ID: &str = "F1";
pub const STOCK_PLACEHOLDER: &str = "99";
pub const QUOTE_TTL: &str = "P1D";

/// The product's unit price. A missing or malformed price is treated as zero.
pub(crate) fn product_price(product: &NormalizedProduct) -> Amount {
    match product.price.parse::<Amount>() {
        Ok(price) => price,
        Err(e) => {
            warn!("Product {} has an unusable price. Using 0.00 instead. {e}", product.id);
            Amount::default()
        },
    }
}

/// The seller's own delivery fulfillment, as quoted in `on_select` and `on_init`.
pub(crate) fn delivery_fulfillment(id: &str) -> Fulfillment {
    Fulfillment {
        provider_name: Some(STORE_NAME.to_string()),
        tracking: Some(false),
        category: Some("Immediate Delivery".to_string()),
        tat: Some("PT60M".to_string()),
        state: Some(FulfillmentState { descriptor: Descriptor::coded("Serviceable") }),
        ..Fulfillment::new(id, "Delivery")
    }
}
