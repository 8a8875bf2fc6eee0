use actix_web::http::StatusCode;
use ondc_engine::BppJob;

use super::helpers::*;

fn init_body() -> String {
    format!(
        r#"{{
            "context": {},
            "message": {{"order": {{
                "provider": {{"id": "P1"}},
                "items": [
                    {{"id": "gid://shopify/Product/2", "fulfillment_id": "F9", "quantity": {{"count": 2}}}},
                    {{"id": "gid://shopify/Product/404", "fulfillment_id": "F9", "quantity": {{"count": 1}}}}
                ],
                "billing": {{"name": "Buyer", "phone": "9886098860"}},
                "fulfillments": [{{
                    "id": "F9",
                    "type": "Delivery",
                    "end": {{"location": {{"gps": "12.9,77.6", "address": {{"area_code": "560001"}}}}}}
                }}]
            }}}}
        }}"#,
        context_json("init")
    )
}

#[actix_web::test]
async fn init_is_acknowledged_and_queued() {
    let (queue, mut jobs) = idle_queue();
    let (status, body) = post_request("/init", &init_body(), queue).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ACK);
    match jobs.try_recv().expect("No job was queued") {
        BppJob::Init(request) => {
            assert_eq!(request.message.order.items.len(), 2);
            assert_eq!(request.delivery_fulfillment().map(|f| f.id.as_str()), Some("F9"));
        },
        job => panic!("Expected an init job, got {job:?}"),
    }
}

#[actix_web::test]
async fn malformed_init_is_rejected() {
    let (queue, mut jobs) = idle_queue();
    let (status, body) = post_request("/init", "not json", queue).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Could not read request body: "#), "Unexpected body: {body}");
    assert!(jobs.try_recv().is_err());
}

#[actix_web::test]
async fn on_init_prices_the_matched_items() {
    let _ = env_logger::try_init();
    let (queue, mut callbacks) = start_worker(products());
    let (status, _) = post_request("/init", &init_body(), queue).await;
    assert_eq!(status, StatusCode::OK);
    let doc = next_callback(&mut callbacks).await;
    assert_eq!(doc["context"]["action"], "on_init");
    assert_eq!(doc["context"]["transaction_id"], "6baa811a-6cbe-4ad3-94e9-cbf96aaff343");
    assert_eq!(doc["context"]["message_id"], "0ea4fd5d-0c1b-4c50-a0b5-ef1d09e8b3e1");
    let order = &doc["message"]["order"];
    assert_eq!(order["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(order["items"][0]["id"], "gid://shopify/Product/2");
    assert_eq!(order["items"][0]["fulfillment_id"], "F9");
    assert_eq!(order["quote"]["price"]["value"], "130.00");
    assert_eq!(order["quote"]["breakup"][1]["@ondc/org/item_id"], "F9");
    assert_eq!(order["fulfillments"][0]["end"]["location"]["gps"], "12.9,77.6");
    assert_eq!(order["payment"]["params"]["amount"], "130.00");
    assert_eq!(order["billing"]["name"], "Seller NP");
}
