use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A storefront product, reduced to the fields the ONDC documents need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    /// The storefront's own product id, e.g. `gid://shopify/Product/8123456`
    pub id: String,
    pub title: String,
    /// Decimal price of the first variant, as reported by the storefront. Empty if the product has no variants.
    pub price: String,
}

impl NormalizedProduct {
    pub fn new<S: Into<String>>(id: S, title: S, price: S) -> Self {
        Self { id: id.into(), title: title.into(), price: price.into() }
    }
}

/// The criterion used to select products from the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Products tagged with the given location code (e.g. `std:080`)
    City(String),
    /// Products tagged with both the location code and the category id
    CityAndCategory { city: String, category: String },
    /// Products tagged with any of the given product ids
    ProductIds(Vec<String>),
}

impl ProductFilter {
    /// True if the filter has nothing to search for.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::City(city) => city.trim().is_empty(),
            Self::CityAndCategory { city, category } => city.trim().is_empty() && category.trim().is_empty(),
            Self::ProductIds(ids) => ids.iter().all(|id| id.trim().is_empty()),
        }
    }
}

impl Display for ProductFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City(city) => write!(f, "city '{city}'"),
            Self::CityAndCategory { city, category } => write!(f, "city '{city}' and category '{category}'"),
            Self::ProductIds(ids) => write!(f, "product ids [{}]", ids.join(", ")),
        }
    }
}
