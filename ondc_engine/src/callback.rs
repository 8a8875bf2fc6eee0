//! Delivery of `on_*` documents to the BAP.
use std::time::Duration;

use async_trait::async_trait;
use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
    StatusCode,
};

use crate::{errors::CallbackError, ondc_types::OndcResponse, traits::CallbackSender};

/// A serialized response, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackPayload {
    pub bap_uri: String,
    /// The callback action, e.g. `on_search`
    pub action: String,
    pub transaction_id: String,
    pub message_id: String,
    /// Pretty-printed JSON body
    pub body: String,
}

impl CallbackPayload {
    pub fn from_response<R: OndcResponse>(response: &R) -> Result<Self, CallbackError> {
        let ctx = response.context();
        let body = serde_json::to_string_pretty(response)
            .map_err(|e| CallbackError::Serialization(ctx.action.clone(), e.to_string()))?;
        Ok(Self {
            bap_uri: ctx.bap_uri.clone(),
            action: ctx.action.clone(),
            transaction_id: ctx.transaction_id.clone(),
            message_id: ctx.message_id.clone(),
            body,
        })
    }

    /// The full callback URL, `<bap_uri>/<action>`
    pub fn url(&self) -> Result<String, CallbackError> {
        let base = self.bap_uri.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(CallbackError::MissingCallbackUri);
        }
        Ok(format!("{base}/{}", self.action))
    }
}

/// Posts callbacks over HTTP. Only `200 OK` counts as delivered.
#[derive(Clone)]
pub struct HttpCallbackSender {
    client: Client,
}

impl HttpCallbackSender {
    pub fn new(timeout: Duration) -> Result<Self, CallbackError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CallbackError::Initialization(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CallbackSender for HttpCallbackSender {
    async fn send(&self, payload: CallbackPayload) -> Result<(), CallbackError> {
        let url = payload.url()?;
        debug!("📤️ Sending {} to {url} with payload:\n{}", payload.action, payload.body);
        let response = self.client.post(&url).body(payload.body).send().await.map_err(|e| {
            CallbackError::Transport { action: payload.action.clone(), url: url.clone(), reason: e.to_string() }
        })?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CallbackError::Rejected { action: payload.action, url, status: status.as_u16() });
        }
        info!("📤️ Successfully sent {} response for message ID: {}", payload.action, payload.message_id);
        Ok(())
    }
}
