use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ParticipantConfig;

/// The ONDC core version spoken by this BPP. It is stamped on every outbound context.
pub const CORE_VERSION: &str = "1.2.0";

/// The request operations this BPP answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OndcAction {
    Search,
    Select,
    Init,
}

impl OndcAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Select => "select",
            Self::Init => "init",
        }
    }

    /// The action name used for the asynchronous response, e.g. `on_search`.
    pub fn callback_action(&self) -> &'static str {
        match self {
            Self::Search => "on_search",
            Self::Select => "on_select",
            Self::Init => "on_init",
        }
    }
}

impl Display for OndcAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub domain: String,
    pub action: String,
    pub country: String,
    pub city: String,
    pub core_version: String,
    pub bap_id: String,
    /// The base URI that the `on_*` response is posted to.
    pub bap_uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bpp_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bpp_uri: String,
    pub transaction_id: String,
    pub message_id: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}

impl Context {
    /// Builds the context for the asynchronous response to a request carrying this context.
    ///
    /// The correlation fields (`transaction_id`, `message_id`) and the BAP's identity are copied verbatim, and the BPP
    /// identity is taken from `participant`.
    pub fn reply(&self, action: OndcAction, participant: &ParticipantConfig) -> Self {
        Self {
            domain: self.domain.clone(),
            action: action.callback_action().to_string(),
            country: self.country.clone(),
            city: self.city.clone(),
            core_version: CORE_VERSION.to_string(),
            bap_id: self.bap_id.clone(),
            bap_uri: self.bap_uri.clone(),
            bpp_id: participant.bpp_id.clone(),
            bpp_uri: participant.bpp_uri.clone(),
            transaction_id: self.transaction_id.clone(),
            message_id: self.message_id.clone(),
            timestamp: ondc_timestamp(Utc::now()),
            ttl: String::default(),
        }
    }
}

/// Formats a timestamp the way ONDC expects it: RFC 3339, UTC, with millisecond precision.
pub fn ondc_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// An `on_*` document that can be delivered to the BAP.
pub trait OndcResponse: Serialize {
    fn context(&self) -> &Context;
}
