//! A stand-in for everything the BPP talks to over the network.
//!
//! One HTTP server plays two roles:
//! * the Shopify Admin GraphQL endpoint, answering product searches from a seeded product list, and
//! * a BAP, recording every `on_*` callback posted to `/bap/on_<action>`.
//!
//! Product searches are answered by evaluating the `tag:` terms of the search string against each product's tags.
//! Every product is also tagged with its own id.
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
};

use actix_web::{dev::ServerHandle, web, App, HttpRequest, HttpResponse, HttpServer};
use log::*;
use serde_json::{json, Value};

pub const BAP_PATH: &str = "/bap";
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockProduct {
    pub id: String,
    pub title: String,
    pub price: String,
    pub tags: Vec<String>,
}

impl MockProduct {
    fn has_tag(&self, tag: &str) -> bool {
        self.id == tag || self.tags.iter().any(|t| t == tag)
    }

    fn matches(&self, search: &str) -> bool {
        search.split(" AND ").all(|clause| {
            clause
                .trim()
                .trim_start_matches('(')
                .trim_end_matches(')')
                .split(" OR ")
                .any(|term| term.trim().strip_prefix("tag:").is_some_and(|t| self.has_tag(t)))
        })
    }

    fn as_node(&self) -> Value {
        json!({
            "node": {
                "id": self.id,
                "title": self.title,
                "variants": {"edges": [{"node": {"price": self.price}}]}
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCallback {
    pub action: String,
    pub body: Value,
}

#[derive(Debug, Default)]
pub struct NetworkState {
    pub products: Vec<MockProduct>,
    /// The search strings of every product query received, in order.
    pub queries: Vec<String>,
    pub callbacks: Vec<RecordedCallback>,
    pub shopify_down: bool,
    pub reject_callbacks: bool,
}

#[derive(Debug, Clone)]
pub struct MockNetwork {
    state: Arc<Mutex<NetworkState>>,
    addr: SocketAddr,
    handle: ServerHandle,
}

impl MockNetwork {
    /// Binds the mock network to a free local port and starts serving. Must be called from within a tokio runtime.
    pub fn start() -> Result<Self, std::io::Error> {
        let state = Arc::new(Mutex::new(NetworkState::default()));
        let data = web::Data::from(Arc::clone(&state));
        let srv = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/admin/api/{version}/graphql.json", web::post().to(graphql))
                .route("/bap/{action}", web::post().to(callback))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = srv.addrs().first().copied().ok_or_else(|| std::io::Error::other("Mock network has no address"))?;
        let srv = srv.run();
        let handle = srv.handle();
        tokio::spawn(async move {
            if let Err(e) = srv.await {
                warn!("🕸️ Mock network error: {e}");
            }
        });
        info!("🕸️ Mock network listening on {addr}");
        Ok(Self { state, addr, handle })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn bap_uri(&self) -> String {
        format!("{}{BAP_PATH}", self.url())
    }

    pub fn state(&self) -> MutexGuard<'_, NetworkState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_products(&self, products: impl IntoIterator<Item = MockProduct>) {
        self.state().products.extend(products);
    }

    pub fn callbacks(&self) -> Vec<RecordedCallback> {
        self.state().callbacks.clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.state().queries.clone()
    }

    pub async fn stop(&self) {
        self.handle.stop(true).await;
    }
}

async fn graphql(req: HttpRequest, body: web::Json<Value>, state: web::Data<Mutex<NetworkState>>) -> HttpResponse {
    let token = req.headers().get("X-Shopify-Access-Token").and_then(|v| v.to_str().ok()).unwrap_or_default();
    if token.trim().is_empty() {
        return HttpResponse::Unauthorized().json(json!({"errors": "[API] Invalid API key or access token"}));
    }
    let query = body["query"].as_str().unwrap_or_default();
    let Some(search) = search_string(query) else {
        return HttpResponse::Ok().json(json!({"errors": [{"message": "Field 'products' is missing a query"}]}));
    };
    let mut state = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    debug!("🕸️ Shopify product search: {search}");
    state.queries.push(search.clone());
    if state.shopify_down {
        return HttpResponse::InternalServerError().body("Internal Server Error");
    }
    let edges = state.products.iter().filter(|p| p.matches(&search)).take(PAGE_SIZE).map(MockProduct::as_node);
    HttpResponse::Ok().json(json!({
        "data": {"products": {"edges": edges.collect::<Vec<Value>>()}},
        "extensions": {"cost": {"requestedQueryCost": 12, "actualQueryCost": 4}}
    }))
}

async fn callback(path: web::Path<String>, body: web::Bytes, state: web::Data<Mutex<NetworkState>>) -> HttpResponse {
    let action = path.into_inner();
    let body = match serde_json::from_slice::<Value>(&body) {
        Ok(v) => v,
        Err(e) => return HttpResponse::BadRequest().body(format!("Callback is not JSON. {e}")),
    };
    let mut state = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    info!("🕸️ BAP received {action} for message {}", body["context"]["message_id"]);
    state.callbacks.push(RecordedCallback { action, body });
    if state.reject_callbacks {
        return HttpResponse::InternalServerError().json(json!({"error": "BAP unavailable"}));
    }
    HttpResponse::Ok().json(json!({"message": {"ack": {"status": "ACK"}}}))
}

/// Extracts the `query: "..."` argument from a products query.
fn search_string(query: &str) -> Option<String> {
    const MARKER: &str = "query: \"";
    let start = query.find(MARKER)? + MARKER.len();
    let mut search = String::new();
    let mut chars = query[start..].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => search.push(chars.next()?),
            '"' => return Some(search),
            c => search.push(c),
        }
    }
    None
}
