use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CallbackError {
    #[error("The request did not supply a callback URI (context.bap_uri)")]
    MissingCallbackUri,
    #[error("Could not serialize the {0} response. {1}")]
    Serialization(String, String),
    #[error("Could not deliver {action} to {url}. {reason}")]
    Transport { action: String, url: String, reason: String },
    #[error("{action} to {url} was rejected with status {status}")]
    Rejected { action: String, url: String, status: u16 },
    #[error("Could not initialize the callback client. {0}")]
    Initialization(String),
}

#[derive(Debug, Clone, Error)]
pub enum BppError {
    #[error("Callback delivery failed. {0}")]
    Callback(#[from] CallbackError),
}

#[derive(Debug, Clone, Error)]
pub enum JobQueueError {
    #[error("The job queue is closed. The background worker is no longer running.")]
    Closed,
}
