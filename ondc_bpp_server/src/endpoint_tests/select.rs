use actix_web::http::StatusCode;
use ondc_engine::BppJob;

use super::helpers::*;

fn select_body(offers: &str) -> String {
    format!(
        r#"{{
            "context": {},
            "message": {{"order": {{
                "provider": {{"id": "P1"}},
                "items": [
                    {{"id": "gid://shopify/Product/1", "quantity": {{"count": 1}}}},
                    {{"id": "gid://shopify/Product/2", "quantity": {{"count": 1}}}}
                ],
                "offers": {offers},
                "fulfillments": [{{"end": {{"location": {{"gps": "12.9,77.6"}}}}}}]
            }}}}
        }}"#,
        context_json("select")
    )
}

const ONE_OFFER: &str = r#"[{
    "id": "O1",
    "tags": [{"code": "selection", "list": [{"code": "apply", "value": "yes"}]}]
}]"#;

#[actix_web::test]
async fn select_is_acknowledged_and_queued() {
    let (queue, mut jobs) = idle_queue();
    let (status, body) = post_request("/select", &select_body("[]"), queue).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ACK);
    match jobs.try_recv().expect("No job was queued") {
        BppJob::Select(request) => {
            assert_eq!(request.requested_item_ids(), vec!["gid://shopify/Product/1", "gid://shopify/Product/2"]);
        },
        job => panic!("Expected a select job, got {job:?}"),
    }
}

#[actix_web::test]
async fn select_with_wrong_types_is_rejected() {
    let (queue, mut jobs) = idle_queue();
    let body = format!(r#"{{"context": {}, "message": {{"order": {{"items": "none"}}}}}}"#, context_json("select"));
    let (status, body) = post_request("/select", &body, queue).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Could not read request body: "#), "Unexpected body: {body}");
    assert!(jobs.try_recv().is_err());
}

#[actix_web::test]
async fn on_select_quotes_the_offer() {
    let _ = env_logger::try_init();
    let (queue, mut callbacks) = start_worker(products());
    let (status, _) = post_request("/select", &select_body(ONE_OFFER), queue).await;
    assert_eq!(status, StatusCode::OK);
    let doc = next_callback(&mut callbacks).await;
    assert_eq!(doc["context"]["action"], "on_select");
    assert_eq!(doc["context"]["transaction_id"], "6baa811a-6cbe-4ad3-94e9-cbf96aaff343");
    assert_eq!(doc["context"]["message_id"], "0ea4fd5d-0c1b-4c50-a0b5-ef1d09e8b3e1");
    let quote = &doc["message"]["order"]["quote"];
    assert_eq!(quote["price"]["value"], "165.00");
    assert_eq!(quote["breakup"][0]["title"], "Offer O1 (10% off)");
    assert_eq!(quote["breakup"][0]["price"]["value"], "-15.00");
    assert_eq!(quote["breakup"][1]["price"]["value"], "135.00");
    assert_eq!(quote["breakup"][2]["@ondc/org/title_type"], "delivery");
    assert_eq!(doc["message"]["order"]["items"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn on_select_without_offers() {
    let (queue, mut callbacks) = start_worker(products());
    let (status, _) = post_request("/select", &select_body("[]"), queue).await;
    assert_eq!(status, StatusCode::OK);
    let doc = next_callback(&mut callbacks).await;
    assert_eq!(doc["message"]["order"]["quote"]["price"]["value"], "180.00");
}
