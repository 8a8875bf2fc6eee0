use std::{sync::Arc, time::Duration};

use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use log::debug;
use ondc_common::NormalizedProduct;
use ondc_engine::{
    BppApi,
    BppJob,
    BppWorker,
    CallbackPayload,
    JobQueue,
    ParticipantConfig,
    TransformConfig,
    WorkerConfig,
};
use tokio::sync::mpsc;

use super::mocks::{MockCatalog, MockSender};
use crate::routes::{health, init, search, select};

pub const ACK: &str = r#"{"message":{"ack":{"status":"ACK"}}}"#;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health).service(search).service(select).service(init);
}

/// Posts `body` to `path` on an app whose job queue is `queue`.
pub async fn post_request(path: &str, body: &str, queue: JobQueue) -> (StatusCode, String) {
    let app = App::new().app_data(web::Data::new(queue)).configure(configure);
    let service = test::init_service(app).await;
    let req = TestRequest::post()
        .uri(path)
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body.to_string());
    debug!("Making request to {path}");
    let (_, res) = test::call_service(&service, req.to_request()).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub fn test_config() -> TransformConfig {
    TransformConfig {
        participant: ParticipantConfig {
            bpp_id: "seller.example.com".into(),
            bpp_uri: "https://seller.example.com".into(),
        },
        ..Default::default()
    }
}

pub fn products() -> Vec<NormalizedProduct> {
    vec![
        NormalizedProduct::new("gid://shopify/Product/1", "Filter Coffee", "100.00"),
        NormalizedProduct::new("gid://shopify/Product/2", "Masala Dosa", "50.00"),
    ]
}

/// Starts a worker that serves every query from `products` and forwards every callback to the returned receiver.
pub fn start_worker(products: Vec<NormalizedProduct>) -> (JobQueue, mpsc::UnboundedReceiver<CallbackPayload>) {
    let mut catalog = MockCatalog::new();
    catalog.expect_fetch_products().returning(move |_| products.clone());
    let (tx, rx) = mpsc::unbounded_channel();
    let mut sender = MockSender::new();
    sender.expect_send().returning(move |payload| {
        let _ = tx.send(payload);
        Ok(())
    });
    let api = Arc::new(BppApi::new(catalog, sender, test_config()));
    let config = WorkerConfig::default();
    let (queue, receiver) = JobQueue::new(config.queue_size);
    let _handle = BppWorker::new(config, receiver).start(api);
    (queue, rx)
}

pub async fn next_callback(rx: &mut mpsc::UnboundedReceiver<CallbackPayload>) -> serde_json::Value {
    let payload = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("Timed out waiting for callback")
        .expect("Callback channel closed");
    assert_eq!(payload.url().unwrap(), format!("{}/{}", payload.bap_uri.trim_end_matches('/'), payload.action));
    serde_json::from_str(&payload.body).expect("Callback body is not JSON")
}

/// A queue with nobody processing it. Jobs stay on the receiver so tests can inspect them.
pub fn idle_queue() -> (JobQueue, mpsc::Receiver<BppJob>) {
    JobQueue::new(8)
}

pub fn context_json(action: &str) -> String {
    format!(
        r#"{{
            "domain": "ONDC:RET10",
            "action": "{action}",
            "country": "IND",
            "city": "std:080",
            "core_version": "1.2.0",
            "bap_id": "buyer.example.com",
            "bap_uri": "https://buyer.example.com/ondc",
            "transaction_id": "6baa811a-6cbe-4ad3-94e9-cbf96aaff343",
            "message_id": "0ea4fd5d-0c1b-4c50-a0b5-ef1d09e8b3e1",
            "timestamp": "2025-01-30T09:05:07.042Z",
            "ttl": "PT30S"
        }}"#
    )
}
