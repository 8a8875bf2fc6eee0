//! Request handler definitions
//!
//! Define each route and it handler here.
//!
//! The ONDC endpoints never do any storefront work themselves. Each one decodes the request, puts it on the
//! [`JobQueue`] and answers with the fixed ACK. The `on_*` document is posted to the BAP later by the background
//! worker. Queuing is the only thing a handler waits for, and only when the queue is full.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use ondc_engine::{
    ondc_types::{AckResponse, InitRequest, SearchRequest, SelectRequest},
    BppJob,
    JobQueue,
};
use serde::de::DeserializeOwned;

use crate::errors::ServerError;

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   ONDC  ----------------------------------------------------
#[post("/search")]
pub async fn search(body: web::Bytes, queue: web::Data<JobQueue>) -> Result<HttpResponse, ServerError> {
    let request = decode_request::<SearchRequest>("search", &body)?;
    debug!("💻️ Received search for city {} [{}]", request.context.city, request.context.message_id);
    acknowledge(request, &queue).await
}

#[post("/select")]
pub async fn select(body: web::Bytes, queue: web::Data<JobQueue>) -> Result<HttpResponse, ServerError> {
    let request = decode_request::<SelectRequest>("select", &body)?;
    debug!(
        "💻️ Received select for {} items [{}]",
        request.message.order.items.len(),
        request.context.message_id
    );
    acknowledge(request, &queue).await
}

#[post("/init")]
pub async fn init(body: web::Bytes, queue: web::Data<JobQueue>) -> Result<HttpResponse, ServerError> {
    let request = decode_request::<InitRequest>("init", &body)?;
    debug!("💻️ Received init for {} items [{}]", request.message.order.items.len(), request.context.message_id);
    acknowledge(request, &queue).await
}

fn decode_request<T: DeserializeOwned>(action: &str, body: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        warn!("💻️ Error decoding {action} request: {e}");
        ServerError::InvalidRequestBody(e.to_string())
    })
}

async fn acknowledge<R: Into<BppJob>>(request: R, queue: &JobQueue) -> Result<HttpResponse, ServerError> {
    let job = request.into();
    let message_id = job.context().message_id.clone();
    let action = job.action();
    queue.submit(job).await.map_err(|e| {
        error!("💻️ Could not queue {action} [{message_id}]. {e}");
        ServerError::from(e)
    })?;
    trace!("💻️ {action} [{message_id}] queued");
    Ok(HttpResponse::Ok().json(AckResponse::ack()))
}
