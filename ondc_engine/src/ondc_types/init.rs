use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    common::{Fulfillment, FulfillmentState, ItemQuantity, Price, ProviderRef, Quote, TagGroup},
    context::{Context, OndcResponse},
};

//--------------------------------------   Inbound init    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitRequest {
    pub context: Context,
    pub message: InitMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitMessage {
    pub order: InitOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOrder {
    pub provider: ProviderRef,
    pub items: Vec<InitItem>,
    /// The buyer's billing details. These are accepted but not interpreted; the response carries the seller's
    /// configured billing placeholder.
    pub billing: Option<Value>,
    pub fulfillments: Vec<Fulfillment>,
    pub payment: Option<Value>,
    pub tags: Vec<TagGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitItem {
    pub id: String,
    pub fulfillment_id: String,
    pub quantity: ItemQuantity,
}

impl InitRequest {
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

    /// The first requested fulfillment of type `Delivery`.
    pub fn delivery_fulfillment(&self) -> Option<&Fulfillment> {
        self.message.order.fulfillments.iter().find(|f| f.is_delivery())
    }
}

//--------------------------------------   on_init    ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnInit {
    pub context: Context,
    pub message: OnInitMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnInitMessage {
    pub order: InitializedOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializedOrder {
    pub provider: ProviderRef,
    pub items: Vec<OrderItem>,
    pub billing: Billing,
    pub fulfillments: Vec<Fulfillment>,
    pub quote: Quote,
    pub payment: Payment,
    pub cancellation_terms: Vec<CancellationTerm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub fulfillment_id: String,
    pub quantity: ItemQuantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    pub name: String,
    pub address: Address,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub building: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub area_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub uri: String,
    pub tl_method: String,
    pub params: PaymentParams,
    pub status: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub collected_by: String,
    #[serde(rename = "@ondc/org/buyer_app_finder_fee_type")]
    pub finder_fee_type: String,
    #[serde(rename = "@ondc/org/buyer_app_finder_fee_amount")]
    pub finder_fee_amount: String,
    #[serde(rename = "@ondc/org/withholding_amount")]
    pub withholding_amount: String,
    pub tags: Vec<TagGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentParams {
    pub currency: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationTerm {
    pub fulfillment_state: FulfillmentState,
    pub cancellation_fee: CancellationFee,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationFee {
    pub percentage: String,
    pub amount: Price,
}

impl OndcResponse for OnInit {
    fn context(&self) -> &Context {
        &self.context
    }
}
