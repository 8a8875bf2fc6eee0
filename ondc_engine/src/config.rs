use ondc_common::{Amount, Percentage};

pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_DISCOUNT_PERCENT: u32 = 10;
/// The delivery fee, in hundredths (30.00)
pub const DEFAULT_DELIVERY_FEE: i64 = 3_000;

/// Everything the response transformers need to know about this seller. It is built once at startup; the
/// transformers never read the environment themselves.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    pub participant: ParticipantConfig,
    pub currency: String,
    /// Applied to the product total once for every accepted offer that does not name its own percentage.
    pub default_discount: Percentage,
    pub delivery_fee: Amount,
    pub billing: BillingConfig,
    pub payment: PaymentConfig,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            participant: ParticipantConfig::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            default_discount: Percentage::from_percent(DEFAULT_DISCOUNT_PERCENT),
            delivery_fee: Amount::from_hundredths(DEFAULT_DELIVERY_FEE),
            billing: BillingConfig::default(),
            payment: PaymentConfig::default(),
        }
    }
}

/// This BPP's identity on the network, stamped on every response context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantConfig {
    pub bpp_id: String,
    pub bpp_uri: String,
}

/// The seller's billing placeholder returned in `on_init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingConfig {
    pub name: String,
    pub building: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub area_code: String,
    pub email: String,
    pub phone: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            name: "Seller NP".to_string(),
            building: "Seller NP Towers".to_string(),
            locality: "Koramangala".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            country: "IND".to_string(),
            area_code: "560034".to_string(),
            email: "support@sellerNP.com".to_string(),
            phone: "9886098860".to_string(),
        }
    }
}

/// Payment terms returned in `on_init`. These are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub uri: String,
    pub finder_fee_type: String,
    pub finder_fee_amount: String,
    pub withholding_amount: String,
    pub success_code: String,
    pub error_code: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            uri: "https://sellerNP.com/pay".to_string(),
            finder_fee_type: "percent".to_string(),
            finder_fee_amount: "3".to_string(),
            withholding_amount: "0.00".to_string(),
            success_code: "SUCCESS".to_string(),
            error_code: "FAILURE".to_string(),
        }
    }
}
