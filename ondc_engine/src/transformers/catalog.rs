use ondc_common::NormalizedProduct;

use super::{product_price, PROVIDER_ID, STORE_DESCRIPTION, STORE_IMAGE, STORE_NAME};
use crate::{
    config::TransformConfig,
    ondc_types::{
        Catalog,
        CatalogItem,
        Descriptor,
        FulfillmentOption,
        OnSearch,
        OnSearchMessage,
        OndcAction,
        Price,
        Provider,
        SearchRequest,
        Tag,
        TagGroup,
    },
};

pub fn on_search(config: &TransformConfig, request: &SearchRequest, products: &[NormalizedProduct]) -> OnSearch {
    let context = request.context.reply(OndcAction::Search, &config.participant);
    OnSearch { context, message: OnSearchMessage { catalog: build_catalog(config, products) } }
}

/// Builds the storefront catalog. Items are numbered `I1`, `I2`, ... in product order.
pub fn build_catalog(config: &TransformConfig, products: &[NormalizedProduct]) -> Catalog {
    let items = products
        .iter()
        .enumerate()
        .map(|(i, p)| CatalogItem {
            id: format!("I{}", i + 1),
            descriptor: Descriptor::named(p.title.as_str()),
            price: Price::new(&config.currency, product_price(p)),
        })
        .collect();
    Catalog {
        fulfillments: vec![
            FulfillmentOption::new("1", "Delivery"),
            FulfillmentOption::new("2", "Self-Pickup"),
            FulfillmentOption::new("3", "Delivery and Self-Pickup"),
        ],
        descriptor: store_descriptor(),
        providers: vec![Provider { id: PROVIDER_ID.to_string(), items }],
    }
}

fn store_descriptor() -> Descriptor {
    Descriptor {
        name: STORE_NAME.to_string(),
        symbol: STORE_IMAGE.to_string(),
        short_desc: STORE_DESCRIPTION.to_string(),
        long_desc: STORE_DESCRIPTION.to_string(),
        images: vec![STORE_IMAGE.to_string()],
        tags: vec![TagGroup::new("bpp_terms", vec![
            Tag::new("np_type", "MSN"),
            Tag::new("accept_bap_terms", "Y"),
            Tag::new("collect_payment", "Y"),
        ])],
        ..Default::default()
    }
}
