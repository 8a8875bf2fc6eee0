use std::time::Duration;

use cucumber::{gherkin::Step, given, then, when};
use e2e::{
    helpers::{fill_template, json_is_subset_of},
    mock_network::MockProduct,
};
use log::debug;
use serde_json::Value;

use crate::cucumber::BppWorld;

const ACK: &str = r#"{"message":{"ack":{"status":"ACK"}}}"#;

#[given("a mock ONDC network")]
fn mock_network(world: &mut BppWorld) {
    world.start_network();
}

// | id | title | price | tags |
#[given("the Shopify store has the products:")]
fn seed_products(world: &mut BppWorld, step: &Step) {
    let table = step.table().expect("Expected a product table");
    let products = table.rows.iter().skip(1).map(|row| MockProduct {
        id: row[0].clone(),
        title: row[1].clone(),
        price: row[2].clone(),
        tags: row[3].split(',').map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect(),
    });
    world.start_network().add_products(products);
}

#[given("the Shopify store is down")]
fn shopify_down(world: &mut BppWorld) {
    world.start_network().state().shopify_down = true;
}

#[given("the BAP rejects callbacks")]
fn bap_rejects(world: &mut BppWorld) {
    world.start_network().state().reject_callbacks = true;
}

#[given(expr = "the delivery fee is {word}")]
fn delivery_fee(world: &mut BppWorld, fee: String) {
    world.config.transform.delivery_fee = fee.parse().expect("Invalid delivery fee");
}

#[given("the BPP server is running")]
async fn start_server(world: &mut BppWorld) {
    world.start_server().await;
}

#[then("the server is running")]
async fn server_is_running(world: &mut BppWorld) {
    let (code, body) = world.get("health").await;
    assert_eq!(code.as_u16(), 200);
    assert_eq!(body, "👍️\n");
}

// The request body may refer to the mock BAP as {bap_uri}
#[when(expr = "the BAP sends a(n) {word} request:")]
async fn send_request(world: &mut BppWorld, action: String, step: &Step) {
    let template = step.docstring().expect("Expected a request body");
    let body = fill_template(template, &[("bap_uri", world.network().bap_uri().as_str())]);
    world.response = None;
    let res = world.post_json(&action, body).await;
    debug!("Got Response: {} {}", res.0, res.1);
    world.response = Some(res);
}

#[when(expr = "the BAP posts to {string}:")]
async fn post_raw(world: &mut BppWorld, path: String, step: &Step) {
    let body = step.docstring().map(|s| s.trim().to_string()).unwrap_or_default();
    world.response = Some(world.post_json(&path, body).await);
}

#[then("the request is acknowledged")]
fn acknowledged(world: &mut BppWorld) {
    let (status, body) = world.response.take().expect("No response received");
    assert_eq!(status.as_u16(), 200, "Expected 200 OK, got {status}: {body}");
    assert_eq!(body, ACK);
}

#[then(expr = "I receive a {int} {word} response with the message {string}")]
fn receive_response(world: &mut BppWorld, status: u16, text: String, message: String) {
    let (res_status, res_msg) = world.response.take().expect("No response received");
    assert_eq!(res_status, status, "Expected {status} {text} response, got {res_status}");
    assert!(res_msg.contains(&message), "Expected response to contain '{message}', got '{res_msg}'");
}

#[then(expr = "I receive a {int} {word} response")]
fn receive_response_code(world: &mut BppWorld, status: u16, text: String) {
    let (res_status, _res_msg) = world.response.clone().expect("No response received");
    assert_eq!(res_status, status, "Expected {status} {text} response, got {res_status}");
}

#[then(expr = "the BAP receives an {word} callback matching:")]
async fn callback_matches(world: &mut BppWorld, action: String, step: &Step) {
    let expected = step.docstring().expect("No expected callback");
    let callback = world.wait_for_callback(&action).await.unwrap_or_else(|| panic!("No {action} callback received"));
    let actual = callback.body.to_string();
    assert!(json_is_subset_of(expected, &actual), "Expected callback to contain '{expected}', got '{actual}'");
}

#[then(expr = "the {word} callback has {int} entries at {string}")]
async fn callback_array_length(world: &mut BppWorld, action: String, count: usize, pointer: String) {
    let callback = world.wait_for_callback(&action).await.unwrap_or_else(|| panic!("No {action} callback received"));
    let len = callback.body.pointer(&pointer).and_then(Value::as_array).map(Vec::len);
    assert_eq!(len, Some(count), "Unexpected value at {pointer}: {}", callback.body);
}

#[then(expr = "the BAP receives no callback within {int} ms")]
async fn no_callback(world: &mut BppWorld, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    let callbacks = world.network().callbacks();
    assert!(callbacks.is_empty(), "Expected no callbacks, got {callbacks:?}");
}

#[then(expr = "Shopify was queried for {string}")]
fn shopify_queried(world: &mut BppWorld, search: String) {
    let queries = world.network().queries();
    assert!(queries.contains(&search), "Expected a query for '{search}', got {queries:?}");
}

#[then("Shopify was not queried")]
fn shopify_not_queried(world: &mut BppWorld) {
    let queries = world.network().queries();
    assert!(queries.is_empty(), "Expected no Shopify queries, got {queries:?}");
}
