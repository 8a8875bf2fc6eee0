use ondc_common::Percentage;
use serde::{Deserialize, Serialize};

use super::{
    common::{find_tag_value, BreakupLine, Count, Fulfillment, ItemQuantity, Price, ProviderRef, Quote, TagGroup},
    context::{Context, OndcResponse},
};

//--------------------------------------   Inbound select    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectRequest {
    pub context: Context,
    pub message: SelectMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectMessage {
    pub order: SelectOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOrder {
    pub provider: ProviderRef,
    pub items: Vec<SelectItem>,
    pub offers: Vec<Offer>,
    pub fulfillments: Vec<Fulfillment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectItem {
    pub id: String,
    pub location_id: String,
    pub quantity: ItemQuantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    pub id: String,
    pub tags: Vec<TagGroup>,
}

impl Offer {
    /// An offer is applied when any of its tags reads `apply = yes`, ignoring case.
    pub fn is_applied(&self) -> bool {
        self.tags
            .iter()
            .flat_map(|g| g.list.iter())
            .any(|t| t.code.eq_ignore_ascii_case("apply") && t.value.trim().eq_ignore_ascii_case("yes"))
    }

    /// The discount carried in the offer's `percentage` tag, if it has one that parses and is at most 100%.
    pub fn percentage(&self) -> Option<Percentage> {
        find_tag_value(&self.tags, "percentage")
            .and_then(|v| v.parse::<Percentage>().ok())
            .filter(|p| *p <= Percentage::from_percent(100))
    }
}

impl SelectRequest {
    /// The ids of the requested items, in request order, with blanks removed.
    pub fn requested_item_ids(&self) -> Vec<String> {
        self.message
            .order
            .items
            .iter()
            .map(|i| i.id.trim())
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    }
}

//--------------------------------------   on_select    ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnSelect {
    pub context: Context,
    pub message: OnSelectMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnSelectMessage {
    pub order: QuotedOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotedOrder {
    pub provider: ProviderRef,
    pub items: Vec<QuotedItem>,
    pub fulfillments: Vec<Fulfillment>,
    pub quote: Quote,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedItem {
    pub id: String,
    pub fulfillment_id: String,
    pub quantity: AvailableQuantity,
    pub price: Price,
    pub breakup: Vec<BreakupLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableQuantity {
    pub available: Count,
    pub maximum: Count,
}

impl OndcResponse for OnSelect {
    fn context(&self) -> &Context {
        &self.context
    }
}
