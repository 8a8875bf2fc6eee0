use async_trait::async_trait;
use mockall::mock;
use ondc_common::{NormalizedProduct, ProductFilter};
use ondc_engine::{CallbackError, CallbackPayload, CallbackSender, ProductCatalog};

mock! {
    pub Catalog {}
    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn fetch_products(&self, filter: &ProductFilter) -> Vec<NormalizedProduct>;
    }
}

mock! {
    pub Sender {}
    #[async_trait]
    impl CallbackSender for Sender {
        async fn send(&self, payload: CallbackPayload) -> Result<(), CallbackError>;
    }
}
