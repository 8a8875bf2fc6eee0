//! ONDC BPP Engine
//!
//! The engine answers ONDC `search`, `select` and `init` requests on behalf of a storefront. It is
//! storefront-agnostic: products are fetched through the [`ProductCatalog`] trait, and responses are delivered through
//! the [`CallbackSender`] trait.
//!
//! The library is divided into these sections:
//! 1. The ONDC document types ([`mod@ondc_types`]), for both the inbound requests and the `on_*` callbacks.
//! 2. The transformers ([`mod@transformers`]). These are pure functions that turn a request plus a product list into
//!    the callback document.
//! 3. The request pipeline ([`BppApi`]), which queries the catalog, runs a transformer and delivers the result.
//! 4. A bounded background worker ([`mod@worker`]) that runs the pipeline for each request. Request handlers can
//!    therefore acknowledge a request immediately.
pub mod bpp_api;
pub mod callback;
pub mod config;
pub mod errors;
pub mod ondc_types;
pub mod traits;
pub mod transformers;
pub mod worker;

pub use bpp_api::BppApi;
pub use callback::{CallbackPayload, HttpCallbackSender};
pub use config::{BillingConfig, ParticipantConfig, PaymentConfig, TransformConfig};
pub use errors::{BppError, CallbackError, JobQueueError};
pub use traits::{CallbackSender, ProductCatalog};
pub use worker::{BppJob, BppWorker, JobQueue, WorkerConfig};
