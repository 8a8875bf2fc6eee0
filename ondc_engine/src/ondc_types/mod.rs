//! Request and response documents of the ONDC retail protocol (core version 1.2.0).
//!
//! Inbound documents are decoded leniently: every field defaults to its empty value when it is absent, so that only
//! syntactically malformed JSON (or a type mismatch) is rejected.
mod ack;
mod common;
mod context;
mod init;
mod search;
mod select;

pub use ack::{Ack, AckMessage, AckResponse};
pub use common::{
    find_tag_value,
    BreakupItem,
    BreakupLine,
    Count,
    Descriptor,
    Fulfillment,
    FulfillmentState,
    ItemQuantity,
    Price,
    ProviderRef,
    Quote,
    Tag,
    TagGroup,
};
pub use context::{ondc_timestamp, Context, OndcAction, OndcResponse, CORE_VERSION};
pub use init::{
    Address,
    Billing,
    CancellationFee,
    CancellationTerm,
    InitItem,
    InitMessage,
    InitOrder,
    InitRequest,
    InitializedOrder,
    OnInit,
    OnInitMessage,
    OrderItem,
    Payment,
    PaymentParams,
};
pub use search::{
    Catalog,
    CatalogItem,
    CategoryRef,
    FulfillmentOption,
    FulfillmentRef,
    Intent,
    IntentPayment,
    OnSearch,
    OnSearchMessage,
    Provider,
    SearchMessage,
    SearchRequest,
};
pub use select::{
    AvailableQuantity,
    Offer,
    OnSelect,
    OnSelectMessage,
    QuotedItem,
    QuotedOrder,
    SelectItem,
    SelectMessage,
    SelectOrder,
    SelectRequest,
};
