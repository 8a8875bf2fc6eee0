use std::fmt::Debug;

use log::*;
use ondc_common::{NormalizedProduct, ProductFilter};

use crate::{
    callback::CallbackPayload,
    config::TransformConfig,
    errors::BppError,
    ondc_types::{InitRequest, OndcResponse, SearchRequest, SelectRequest},
    traits::{CallbackSender, ProductCatalog},
    transformers,
    worker::BppJob,
};

/// `BppApi` runs the request pipeline: it queries the catalog, transforms the products into the `on_*` document and
/// hands the document to the callback sender.
pub struct BppApi<C, S> {
    catalog: C,
    sender: S,
    config: TransformConfig,
}

impl<C, S> Debug for BppApi<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BppApi ({})", self.config.participant.bpp_id)
    }
}

impl<C, S> BppApi<C, S> {
    pub fn new(catalog: C, sender: S, config: TransformConfig) -> Self {
        Self { catalog, sender, config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

impl<C, S> BppApi<C, S>
where
    C: ProductCatalog,
    S: CallbackSender,
{
    pub async fn process(&self, job: BppJob) -> Result<(), BppError> {
        match job {
            BppJob::Search(request) => self.process_search(&request).await,
            BppJob::Select(request) => self.process_select(&request).await,
            BppJob::Init(request) => self.process_init(&request).await,
        }
    }

    /// Answers a search with the catalog of products tagged for the requested city (and category, if given).
    pub async fn process_search(&self, request: &SearchRequest) -> Result<(), BppError> {
        let filter = request.product_filter();
        info!("🔍️ Processing search for {filter} [{}]", request.context.message_id);
        let products = self.fetch(&filter).await;
        let response = transformers::on_search(&self.config, request, &products);
        self.deliver(&response).await
    }

    /// Answers a select with a quote for the selected products.
    pub async fn process_select(&self, request: &SelectRequest) -> Result<(), BppError> {
        let filter = ProductFilter::ProductIds(request.requested_item_ids());
        info!("🛒️ Processing select for {filter} [{}]", request.context.message_id);
        let products = self.fetch(&filter).await;
        let response = transformers::on_select(&self.config, request, &products);
        self.deliver(&response).await
    }

    /// Answers an init with the priced order, billing and payment terms.
    pub async fn process_init(&self, request: &InitRequest) -> Result<(), BppError> {
        let filter = ProductFilter::ProductIds(request.requested_item_ids());
        info!("🧾️ Processing init for {filter} [{}]", request.context.message_id);
        let products = self.fetch(&filter).await;
        let response = transformers::on_init(&self.config, request, &products);
        self.deliver(&response).await
    }

    async fn fetch(&self, filter: &ProductFilter) -> Vec<NormalizedProduct> {
        let products = self.catalog.fetch_products(filter).await;
        if products.is_empty() {
            info!("🔍️ No products found for {filter}");
        }
        products
    }

    async fn deliver<R: OndcResponse>(&self, response: &R) -> Result<(), BppError> {
        let payload = CallbackPayload::from_response(response)?;
        self.sender.send(payload).await?;
        Ok(())
    }
}
