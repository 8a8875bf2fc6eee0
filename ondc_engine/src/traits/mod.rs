//! # Backend seams
//!
//! This module defines the interface contracts between the BPP engine and the outside world.
//!
//! * [`ProductCatalog`] fetches products from a storefront. Implementations are expected to degrade any failure to an
//!   empty list, so that the pipeline always produces a (possibly empty) response.
//! * [`CallbackSender`] delivers a finished `on_*` document to the BAP.
//!
//! The server crate wires in the Shopify catalog and the HTTP callback sender. Tests substitute mocks.
mod callback_sender;
mod product_catalog;

pub use callback_sender::CallbackSender;
pub use product_catalog::ProductCatalog;
