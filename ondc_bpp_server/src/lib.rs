//! # ONDC BPP server
//! This crate hosts the HTTP front end of the BPP. It is responsible for:
//! Accepting ONDC `search`, `select` and `init` requests from buyer apps (BAPs).
//! Acknowledging each well-formed request immediately, and queuing it for background processing.
//! Wiring the Shopify storefront and the HTTP callback sender into the [`ondc_engine::BppApi`] pipeline.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/search`, `/select`, `/init`: The ONDC request endpoints. The `on_*` answer is posted to the BAP later.

pub mod cli;
pub mod config;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
