use std::{sync::Arc, time::Duration};

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use ondc_engine::{BppApi, BppWorker, HttpCallbackSender, JobQueue};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::ShopifyCatalog,
    routes::{health, init, search, select},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let srv = create_server_instance(config)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Builds the request pipeline, starts the background worker and binds the HTTP server.
///
/// Must be called from within a tokio runtime, since the worker is spawned immediately. The worker shuts down once the
/// server (and with it, every handle on the job queue) has stopped.
pub fn create_server_instance(config: ServerConfig) -> Result<Server, ServerError> {
    let catalog = ShopifyCatalog::new(config.shopify.clone());
    let sender = HttpCallbackSender::new(config.callback_timeout)?;
    let api = Arc::new(BppApi::new(catalog, sender, config.transform.clone()));
    let (queue, receiver) = JobQueue::new(config.worker.queue_size);
    let _worker = BppWorker::new(config.worker, receiver).start(api);
    info!(
        "🚀️ BPP worker started. Queue size {}, {} concurrent jobs",
        config.worker.queue_size, config.worker.max_concurrent_jobs
    );
    let queue = web::Data::new(queue);
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ondc_bpp::access_log"))
            .app_data(queue.clone())
            .service(health)
            .service(search)
            .service(select)
            .service(init)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
