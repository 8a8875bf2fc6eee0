use std::{sync::mpsc::channel, time::Duration};

use actix_web::dev::ServerHandle;
use cucumber::World;
use e2e::mock_network::{MockNetwork, RecordedCallback};
use log::*;
use ondc_bpp_server::{config::ServerConfig, server::create_server_instance};
use ondc_common::Secret;
use ondc_engine::{ParticipantConfig, WorkerConfig};
use reqwest::{Client, Method, RequestBuilder, StatusCode};

const CALLBACK_WAIT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, World)]
pub struct BppWorld {
    pub config: ServerConfig,
    pub network: Option<MockNetwork>,
    pub server_handle: Option<ServerHandle>,
    pub response: Option<(StatusCode, String)>,
}

impl Default for BppWorld {
    fn default() -> Self {
        let _ = env_logger::try_init().ok();
        let mut config = ServerConfig::new("127.0.0.1", 20000 + rand::random::<u16>() % 10_000);
        config.shopify.admin_access_token = Secret::new("shpat_e2e_test_token".to_string());
        config.shopify.request_timeout = Duration::from_secs(5);
        config.transform.participant =
            ParticipantConfig { bpp_id: "seller.e2e.test".into(), bpp_uri: "https://seller.e2e.test/ondc".into() };
        config.worker = WorkerConfig { job_timeout: Duration::from_secs(10), ..Default::default() };
        config.callback_timeout = Duration::from_secs(5);
        Self { config, network: None, server_handle: None, response: None }
    }
}

impl BppWorld {
    pub fn start_network(&mut self) -> &MockNetwork {
        if self.network.is_none() {
            let network = MockNetwork::start().expect("Error starting mock network");
            self.network = Some(network);
        }
        self.network()
    }

    pub fn network(&self) -> &MockNetwork {
        self.network.as_ref().expect("Mock network not started")
    }

    pub async fn start_server(&mut self) {
        let shop_url = self.start_network().url();
        self.config.shopify.shop_url = shop_url;
        let config = self.config.clone();
        let shop = &config.shopify.shop_url;
        info!("🌍️ Starting server on {}:{} against storefront {shop}", config.host, config.port);
        let (tx, rx) = channel();
        tokio::spawn(async move {
            let srv = create_server_instance(config).expect("Error creating server instance");
            let _res = tx.send(srv.handle());
            match srv.await {
                Ok(_) => info!("🌍️ Server shut down"),
                Err(e) => warn!("🌍️ Server error: {e}"),
            }
        });
        let handle = rx.recv().unwrap();
        info!("🌍️ Server started");
        self.server_handle = Some(handle);
    }

    pub async fn stop(&mut self) {
        if let Some(h) = self.server_handle.take() {
            info!("🌍️ Stopping server");
            h.stop(true).await;
        }
        if let Some(network) = self.network.take() {
            network.stop().await;
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request(Method::GET, path, |req| req).await
    }

    pub async fn post_json(&self, path: &str, body: String) -> (StatusCode, String) {
        self.request(Method::POST, path, |req| req.header("Content-Type", "application/json").body(body)).await
    }

    pub async fn request<F>(&self, method: Method, path: &str, req: F) -> (StatusCode, String)
    where F: FnOnce(RequestBuilder) -> RequestBuilder {
        let path = path.trim_start_matches('/');
        let url = format!("http://{}:{}/{path}", self.config.host, self.config.port);
        debug!("🌍️ Querying {url}");
        let client = Client::new();
        let request = req(client.request(method, url));
        let res = request.send().await.expect("Error getting response");
        let code = res.status();
        let body = res.text().await.expect("Error parsing response body");
        (code, body)
    }

    /// Waits for the BAP to receive a callback for `action`.
    pub async fn wait_for_callback(&self, action: &str) -> Option<RecordedCallback> {
        let deadline = tokio::time::Instant::now() + CALLBACK_WAIT;
        loop {
            if let Some(cb) = self.network().callbacks().into_iter().find(|c| c.action == action) {
                return Some(cb);
            }
            if tokio::time::Instant::now() >= deadline {
                return None;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
