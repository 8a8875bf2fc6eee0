use log::*;
use ondc_common::{Amount, NormalizedProduct};

use super::{delivery_fulfillment, product_price, DELIVERY_FULFILLMENT_ID, PROVIDER_ID, QUOTE_TTL};
use crate::{
    config::TransformConfig,
    ondc_types::{
        Address,
        Billing,
        BreakupItem,
        BreakupLine,
        CancellationFee,
        CancellationTerm,
        Count,
        Descriptor,
        FulfillmentState,
        InitRequest,
        InitializedOrder,
        ItemQuantity,
        OnInit,
        OnInitMessage,
        OndcAction,
        OrderItem,
        Payment,
        PaymentParams,
        Price,
        ProviderRef,
        Quote,
        Tag,
        TagGroup,
    },
};

/// Fulfillment states for which the zero-fee cancellation terms are quoted.
const CANCELLABLE_STATES: [&str; 2] = ["Pending", "Packed"];

/// Builds the `on_init` order from the requested items and the matching products.
///
/// Requested items are matched to products by exact id. Items with no matching product are dropped. A product listed
/// more than once by the storefront is quoted once per listing. An item whose subtotal would take the order total
/// (delivery fee included) past the largest representable amount is dropped and logged.
pub fn on_init(config: &TransformConfig, request: &InitRequest, products: &[NormalizedProduct]) -> OnInit {
    let context = request.context.reply(OndcAction::Init, &config.participant);
    let currency = config.currency.as_str();
    let order = &request.message.order;
    let inbound_delivery = request.delivery_fulfillment();
    let delivery_id = inbound_delivery
        .map(|f| f.id.trim())
        .filter(|id| !id.is_empty())
        .unwrap_or(DELIVERY_FULFILLMENT_ID)
        .to_string();

    let mut items = Vec::new();
    let mut breakup = Vec::new();
    let mut total = Amount::default();
    for requested in &order.items {
        let quantity = requested.quantity.count.max(1);
        for product in products.iter().filter(|p| p.id == requested.id) {
            let unit_price = product_price(product);
            let next_total = unit_price
                .checked_mul(i64::from(quantity))
                .and_then(|subtotal| total.checked_add(subtotal).map(|t| (subtotal, t)))
                .filter(|(_, t)| t.checked_add(config.delivery_fee).is_some());
            let Some((subtotal, next_total)) = next_total else {
                warn!(
                    "Dropping {} x {} from init [{}]. The order total would overflow.",
                    quantity, product.id, request.context.message_id
                );
                continue;
            };
            total = next_total;
            let fulfillment_id = match requested.fulfillment_id.trim() {
                "" => delivery_id.clone(),
                id => id.to_string(),
            };
            items.push(OrderItem {
                id: product.id.clone(),
                fulfillment_id,
                quantity: ItemQuantity { count: quantity },
            });
            breakup.push(BreakupLine {
                item_id: product.id.clone(),
                item_quantity: Some(Count::new(quantity)),
                title: product.title.clone(),
                title_type: "item".to_string(),
                price: Price::new(currency, subtotal),
                item: Some(BreakupItem { price: Price::new(currency, unit_price) }),
            });
        }
    }
    breakup.push(
        BreakupLine::new("Delivery Charges", "delivery", Price::new(currency, config.delivery_fee))
            .with_item_id(delivery_id.as_str()),
    );
    total += config.delivery_fee;

    let mut fulfillment = delivery_fulfillment(&delivery_id);
    fulfillment.end = inbound_delivery.and_then(|f| f.end.clone());
    let provider_id = if order.provider.id.is_empty() { PROVIDER_ID.to_string() } else { order.provider.id.clone() };

    let order = InitializedOrder {
        provider: ProviderRef { id: provider_id },
        items,
        billing: billing(config, &request.context.timestamp),
        fulfillments: vec![fulfillment],
        quote: Quote { price: Price::new(currency, total), breakup, ttl: QUOTE_TTL.to_string() },
        payment: payment(config, total),
        cancellation_terms: cancellation_terms(currency),
    };
    OnInit { context, message: OnInitMessage { order } }
}

fn billing(config: &TransformConfig, timestamp: &str) -> Billing {
    let b = &config.billing;
    Billing {
        name: b.name.clone(),
        address: Address {
            name: b.name.clone(),
            building: b.building.clone(),
            locality: b.locality.clone(),
            city: b.city.clone(),
            state: b.state.clone(),
            country: b.country.clone(),
            area_code: b.area_code.clone(),
        },
        email: b.email.clone(),
        phone: b.phone.clone(),
        created_at: timestamp.to_string(),
        updated_at: timestamp.to_string(),
    }
}

fn payment(config: &TransformConfig, total: Amount) -> Payment {
    let p = &config.payment;
    Payment {
        uri: p.uri.clone(),
        tl_method: "http/get".to_string(),
        params: PaymentParams { currency: config.currency.clone(), amount: total.to_string() },
        status: "NOT-PAID".to_string(),
        payment_type: "ON-ORDER".to_string(),
        collected_by: "BPP".to_string(),
        finder_fee_type: p.finder_fee_type.clone(),
        finder_fee_amount: p.finder_fee_amount.clone(),
        withholding_amount: p.withholding_amount.clone(),
        tags: vec![TagGroup::new("collection", vec![
            Tag::new("success_code", p.success_code.as_str()),
            Tag::new("error_code", p.error_code.as_str()),
        ])],
    }
}

fn cancellation_terms(currency: &str) -> Vec<CancellationTerm> {
    CANCELLABLE_STATES
        .iter()
        .map(|state| CancellationTerm {
            fulfillment_state: FulfillmentState { descriptor: Descriptor::coded(*state) },
            cancellation_fee: CancellationFee {
                percentage: "0.00".to_string(),
                amount: Price::new(currency, Amount::default()),
            },
        })
        .collect()
}
