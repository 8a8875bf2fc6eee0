//! Shapes of the Admin GraphQL responses used by this crate.
use ondc_common::NormalizedProduct;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub variants: Connection<VariantNode>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VariantNode {
    #[serde(default)]
    pub price: String,
}

/// The `data` object of a `products(first: n, query: "...")` query.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductSearchResult {
    pub products: Connection<ProductNode>,
}

impl From<ProductNode> for NormalizedProduct {
    fn from(node: ProductNode) -> Self {
        let price = node.variants.edges.into_iter().next().map(|e| e.node.price).unwrap_or_default();
        Self { id: node.id, title: node.title, price }
    }
}

impl ProductSearchResult {
    pub fn into_products(self) -> Vec<NormalizedProduct> {
        self.products.edges.into_iter().map(|e| NormalizedProduct::from(e.node)).collect()
    }
}
