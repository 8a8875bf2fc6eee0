use ondc_common::{Amount, NormalizedProduct};

use super::{delivery_fulfillment, product_price, DELIVERY_FULFILLMENT_ID, PROVIDER_ID, QUOTE_TTL, STOCK_PLACEHOLDER};
use crate::{
    config::TransformConfig,
    ondc_types::{
        AvailableQuantity,
        BreakupLine,
        Count,
        Offer,
        OnSelect,
        OnSelectMessage,
        OndcAction,
        Price,
        ProviderRef,
        QuotedItem,
        QuotedOrder,
        Quote,
        SelectRequest,
    },
};

/// Builds the `on_select` quote.
///
/// Every product becomes an order item. The product total is then reduced once for each applied offer, and the
/// delivery fee is added on top. The quote breakup has one line per offer, followed by `Product Total` and
/// `Delivery Charge`.
pub fn on_select(config: &TransformConfig, request: &SelectRequest, products: &[NormalizedProduct]) -> OnSelect {
    let context = request.context.reply(OndcAction::Select, &config.participant);
    let currency = config.currency.as_str();
    let mut product_total = Amount::default();
    let items = products
        .iter()
        .map(|p| {
            let price = Price::new(currency, product_price(p));
            product_total += product_price(p);
            QuotedItem {
                id: p.id.clone(),
                fulfillment_id: DELIVERY_FULFILLMENT_ID.to_string(),
                quantity: AvailableQuantity {
                    available: Count::new(STOCK_PLACEHOLDER),
                    maximum: Count::new(STOCK_PLACEHOLDER),
                },
                breakup: vec![BreakupLine::new(format!("Base Item - {}", p.title), "item".to_string(), price.clone())
                    .with_item_id(p.id.as_str())],
                price,
            }
        })
        .collect();
    let (product_total, mut breakup) = apply_offers(config, &request.message.order.offers, product_total);
    breakup.push(BreakupLine::new("Product Total", "item", Price::new(currency, product_total)));
    breakup.push(
        BreakupLine::new("Delivery Charge", "delivery", Price::new(currency, config.delivery_fee))
            .with_item_id(DELIVERY_FULFILLMENT_ID),
    );
    let quote =
        Quote { price: Price::new(currency, product_total + config.delivery_fee), breakup, ttl: QUOTE_TTL.to_string() };
    let order = QuotedOrder {
        provider: ProviderRef { id: PROVIDER_ID.to_string() },
        items,
        fulfillments: vec![delivery_fulfillment(DELIVERY_FULFILLMENT_ID)],
        quote,
    };
    OnSelect { context, message: OnSelectMessage { order } }
}

/// Applies every accepted offer, in request order, to `total`.
///
/// Returns the discounted total and one breakup line per offer. An offer's own `percentage` tag takes precedence
/// over the configured default discount.
///
/// A discount never exceeds the running total, so the total cannot go below zero. Offer lines always carry a leading
/// minus sign, including a zero discount (`-0.00`).
pub fn apply_offers(config: &TransformConfig, offers: &[Offer], total: Amount) -> (Amount, Vec<BreakupLine>) {
    let mut total = total;
    let lines = offers
        .iter()
        .filter(|o| o.is_applied())
        .map(|offer| {
            let pct = offer.percentage().unwrap_or(config.default_discount);
            let discount = total.percentage(pct).clamp(Amount::default(), total.max(Amount::default()));
            total -= discount;
            let title = format!("Offer {} ({pct}% off)", offer.id);
            let price = Price { currency: config.currency.clone(), value: format!("-{discount}") };
            BreakupLine::new(title, "offer".to_string(), price).with_item_id(offer.id.as_str())
        })
        .collect();
    (total, lines)
}
