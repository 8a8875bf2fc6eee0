use async_trait::async_trait;

use crate::{callback::CallbackPayload, errors::CallbackError};

#[async_trait]
pub trait CallbackSender: Send + Sync {
    /// Delivers the payload to `<bap_uri>/<action>`. Exactly one attempt is made.
    async fn send(&self, payload: CallbackPayload) -> Result<(), CallbackError>;
}
