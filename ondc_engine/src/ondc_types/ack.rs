use serde::{Deserialize, Serialize};

/// The synchronous acknowledgement returned for every well-formed request: `{"message":{"ack":{"status":"ACK"}}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub message: AckMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckMessage {
    pub ack: Ack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub status: String,
}

impl AckResponse {
    pub fn ack() -> Self {
        Self { message: AckMessage { ack: Ack { status: "ACK".to_string() } } }
    }
}
