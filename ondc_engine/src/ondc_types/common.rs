use ondc_common::Amount;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub code: String,
    pub value: String,
}

impl Tag {
    pub fn new<S: Into<String>>(code: S, value: S) -> Self {
        Self { code: code.into(), value: value.into() }
    }
}

/// A coded group of tags, `{"code": "...", "list": [{"code": "...", "value": "..."}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagGroup {
    pub code: String,
    pub list: Vec<Tag>,
}

impl TagGroup {
    pub fn new<S: Into<String>>(code: S, list: Vec<Tag>) -> Self {
        Self { code: code.into(), list }
    }

    /// The value of the first tag in this group with the given code. Codes are compared case-insensitively.
    pub fn value_of(&self, code: &str) -> Option<&str> {
        self.list.iter().find(|t| t.code.eq_ignore_ascii_case(code)).map(|t| t.value.as_str())
    }
}

/// Searches every group for a tag with the given code and returns the first value found.
pub fn find_tag_value<'a>(groups: &'a [TagGroup], code: &str) -> Option<&'a str> {
    groups.iter().find_map(|g| g.value_of(code))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub currency: String,
    pub value: String,
}

impl Price {
    pub fn new(currency: &str, value: Amount) -> Self {
        Self { currency: currency.to_string(), value: value.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub short_desc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long_desc: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagGroup>,
}

impl Descriptor {
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn coded<S: Into<String>>(code: S) -> Self {
        Self { code: code.into(), ..Default::default() }
    }
}

/// A quantity as it appears on request items: `{"count": 2}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemQuantity {
    pub count: u32,
}

/// A quantity as it appears in quotes and stock levels: `{"count": "99"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Count {
    pub count: String,
}

impl Count {
    pub fn new<S: ToString>(count: S) -> Self {
        Self { count: count.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentState {
    pub descriptor: Descriptor,
}

/// A fulfillment, used both in requests (where only `id`, `type` and `end` are usually given) and in quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fulfillment {
    pub id: String,
    #[serde(rename = "type")]
    pub fulfillment_type: String,
    #[serde(rename = "@ondc/org/provider_name", skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<bool>,
    #[serde(rename = "@ondc/org/category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "@ondc/org/TAT", skip_serializing_if = "Option::is_none")]
    pub tat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FulfillmentState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
}

impl Fulfillment {
    pub fn new<S: Into<String>>(id: S, fulfillment_type: S) -> Self {
        Self { id: id.into(), fulfillment_type: fulfillment_type.into(), ..Default::default() }
    }

    pub fn is_delivery(&self) -> bool {
        self.fulfillment_type.eq_ignore_ascii_case("Delivery")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakupItem {
    pub price: Price,
}

/// One line of a price breakup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakupLine {
    #[serde(rename = "@ondc/org/item_id", skip_serializing_if = "String::is_empty")]
    pub item_id: String,
    #[serde(rename = "@ondc/org/item_quantity", skip_serializing_if = "Option::is_none")]
    pub item_quantity: Option<Count>,
    pub title: String,
    #[serde(rename = "@ondc/org/title_type")]
    pub title_type: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<BreakupItem>,
}

impl BreakupLine {
    pub fn new<S: Into<String>>(title: S, title_type: S, price: Price) -> Self {
        Self { title: title.into(), title_type: title_type.into(), price, ..Default::default() }
    }

    pub fn with_item_id<S: Into<String>>(mut self, item_id: S) -> Self {
        self.item_id = item_id.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub price: Price,
    pub breakup: Vec<BreakupLine>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}
