use ondc_common::ProductFilter;
use serde::{Deserialize, Serialize};

use super::{
    common::{Descriptor, Price, TagGroup},
    context::{Context, OndcResponse},
};

//--------------------------------------   Inbound search    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub context: Context,
    pub message: SearchMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMessage {
    pub intent: Intent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    pub category: CategoryRef,
    pub fulfillment: FulfillmentRef,
    pub payment: IntentPayment,
    pub tags: Vec<TagGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentRef {
    #[serde(rename = "type")]
    pub fulfillment_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentPayment {
    #[serde(rename = "@ondc/org/buyer_app_finder_fee_type")]
    pub finder_fee_type: String,
    #[serde(rename = "@ondc/org/buyer_app_finder_fee_amount")]
    pub finder_fee_amount: String,
}

impl SearchRequest {
    /// The storefront filter for this search. The location comes from `context.city`, narrowed by the intent's
    /// category when one is given.
    pub fn product_filter(&self) -> ProductFilter {
        let city = self.context.city.trim().to_string();
        let category = self.message.intent.category.id.trim();
        if category.is_empty() {
            ProductFilter::City(city)
        } else {
            ProductFilter::CityAndCategory { city, category: category.to_string() }
        }
    }
}

//--------------------------------------   on_search    ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnSearch {
    pub context: Context,
    pub message: OnSearchMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnSearchMessage {
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "bpp/fulfillments")]
    pub fulfillments: Vec<FulfillmentOption>,
    #[serde(rename = "bpp/descriptor")]
    pub descriptor: Descriptor,
    #[serde(rename = "bpp/providers")]
    pub providers: Vec<Provider>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOption {
    pub id: String,
    #[serde(rename = "type")]
    pub fulfillment_type: String,
}

impl FulfillmentOption {
    pub fn new(id: &str, fulfillment_type: &str) -> Self {
        Self { id: id.to_string(), fulfillment_type: fulfillment_type.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub descriptor: Descriptor,
    pub price: Price,
}

impl OndcResponse for OnSearch {
    fn context(&self) -> &Context {
        &self.context
    }
}
