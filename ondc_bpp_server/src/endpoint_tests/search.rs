use actix_web::http::StatusCode;
use ondc_engine::BppJob;

use super::helpers::*;

fn search_body() -> String {
    format!(
        r#"{{
            "context": {},
            "message": {{"intent": {{
                "category": {{"id": "Foodgrains"}},
                "fulfillment": {{"type": "Delivery"}},
                "payment": {{
                    "@ondc/org/buyer_app_finder_fee_type": "percent",
                    "@ondc/org/buyer_app_finder_fee_amount": "3"
                }}
            }}}}
        }}"#,
        context_json("search")
    )
}

#[actix_web::test]
async fn search_is_acknowledged_and_queued() {
    let _ = env_logger::try_init();
    let (queue, mut jobs) = idle_queue();
    let (status, body) = post_request("/search", &search_body(), queue).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ACK);
    match jobs.try_recv().expect("No job was queued") {
        BppJob::Search(request) => {
            assert_eq!(request.context.city, "std:080");
            assert_eq!(request.message.intent.category.id, "Foodgrains");
        },
        job => panic!("Expected a search job, got {job:?}"),
    }
}

#[actix_web::test]
async fn malformed_search_is_rejected() {
    let (queue, mut jobs) = idle_queue();
    let (status, body) = post_request("/search", r#"{"context": {"action": "search""#, queue).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Could not read request body: "#), "Unexpected body: {body}");
    assert!(jobs.try_recv().is_err());
}

#[actix_web::test]
async fn empty_search_body_is_rejected() {
    let (queue, mut jobs) = idle_queue();
    let (status, _) = post_request("/search", "", queue).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(jobs.try_recv().is_err());
}

#[actix_web::test]
async fn search_fails_when_the_queue_is_closed() {
    let (queue, jobs) = idle_queue();
    drop(jobs);
    let (status, body) = post_request("/search", &search_body(), queue).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("error"));
}

#[actix_web::test]
async fn on_search_is_posted_to_the_bap() {
    let _ = env_logger::try_init();
    let (queue, mut callbacks) = start_worker(products());
    let (status, body) = post_request("/search", &search_body(), queue).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ACK);
    let doc = next_callback(&mut callbacks).await;
    assert_eq!(doc["context"]["action"], "on_search");
    assert_eq!(doc["context"]["transaction_id"], "6baa811a-6cbe-4ad3-94e9-cbf96aaff343");
    assert_eq!(doc["context"]["message_id"], "0ea4fd5d-0c1b-4c50-a0b5-ef1d09e8b3e1");
    assert_eq!(doc["context"]["bpp_id"], "seller.example.com");
    let items = &doc["message"]["catalog"]["bpp/providers"][0]["items"];
    assert_eq!(items[0]["id"], "I1");
    assert_eq!(items[0]["descriptor"]["name"], "Filter Coffee");
    assert_eq!(items[1]["price"]["value"], "50.00");
}
