mod amount;
mod catalog;

pub mod op;
mod secret;

pub use amount::{Amount, AmountParseError, Percentage};
pub use catalog::{NormalizedProduct, ProductFilter};
pub use secret::Secret;
