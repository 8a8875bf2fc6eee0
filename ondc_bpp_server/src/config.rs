//! Server configuration
//!
//! All configuration is read once at startup by [`ServerConfig::from_env_or_default`]. A missing or unparseable value
//! is logged and replaced with its default, so the server always starts.
use std::{env, fmt::Display, str::FromStr, time::Duration};

use log::*;
use ondc_common::{Amount, Percentage};
use ondc_engine::{
    config::{DEFAULT_CURRENCY, DEFAULT_DELIVERY_FEE, DEFAULT_DISCOUNT_PERCENT},
    BillingConfig,
    ParticipantConfig,
    PaymentConfig,
    TransformConfig,
    WorkerConfig,
};
use shopify_tools::ShopifyConfig;

const DEFAULT_BPP_HOST: &str = "127.0.0.1";
const DEFAULT_BPP_PORT: u16 = 9090;
const DEFAULT_CALLBACK_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shopify: ShopifyConfig,
    pub transform: TransformConfig,
    pub worker: WorkerConfig,
    /// Upper bound on the time a single `on_*` callback may take.
    pub callback_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BPP_HOST.to_string(),
            port: DEFAULT_BPP_PORT,
            shopify: ShopifyConfig::default(),
            transform: TransformConfig::default(),
            worker: WorkerConfig::default(),
            callback_timeout: DEFAULT_CALLBACK_TIMEOUT,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("BPP_HOST").ok().unwrap_or_else(|| DEFAULT_BPP_HOST.into());
        let port = parse_env("BPP_PORT", DEFAULT_BPP_PORT);
        let shopify = ShopifyConfig::new_from_env_or_default();
        let transform = transform_config_from_env();
        let worker = worker_config_from_env();
        let callback_timeout =
            Duration::from_secs(parse_env("BPP_CALLBACK_TIMEOUT_SECS", DEFAULT_CALLBACK_TIMEOUT.as_secs()));
        Self { host, port, shopify, transform, worker, callback_timeout }
    }
}

fn transform_config_from_env() -> TransformConfig {
    let bpp_id = env::var("BPP_ID").ok().unwrap_or_else(|| {
        warn!("🪛️ BPP_ID is not set. Responses will not identify this BPP.");
        String::default()
    });
    let bpp_uri = env::var("BPP_URI").ok().unwrap_or_else(|| {
        warn!("🪛️ BPP_URI is not set. Responses will not identify this BPP.");
        String::default()
    });
    let currency = env_or("BPP_CURRENCY", DEFAULT_CURRENCY);
    let default_discount =
        parse_env("BPP_DEFAULT_DISCOUNT_PERCENT", Percentage::from_percent(DEFAULT_DISCOUNT_PERCENT));
    let delivery_fee = parse_env("BPP_DELIVERY_FEE", Amount::from_hundredths(DEFAULT_DELIVERY_FEE));
    let b = BillingConfig::default();
    let billing = BillingConfig {
        name: env_or("BPP_BILLING_NAME", &b.name),
        building: env_or("BPP_BILLING_BUILDING", &b.building),
        locality: env_or("BPP_BILLING_LOCALITY", &b.locality),
        city: env_or("BPP_BILLING_CITY", &b.city),
        state: env_or("BPP_BILLING_STATE", &b.state),
        country: env_or("BPP_BILLING_COUNTRY", &b.country),
        area_code: env_or("BPP_BILLING_AREA_CODE", &b.area_code),
        email: env_or("BPP_BILLING_EMAIL", &b.email),
        phone: env_or("BPP_BILLING_PHONE", &b.phone),
    };
    let p = PaymentConfig::default();
    let payment = PaymentConfig {
        uri: env_or("BPP_PAYMENT_URI", &p.uri),
        finder_fee_type: env_or("BPP_FINDER_FEE_TYPE", &p.finder_fee_type),
        finder_fee_amount: env_or("BPP_FINDER_FEE_AMOUNT", &p.finder_fee_amount),
        withholding_amount: env_or("BPP_WITHHOLDING_AMOUNT", &p.withholding_amount),
        success_code: env_or("BPP_COLLECTION_SUCCESS_CODE", &p.success_code),
        error_code: env_or("BPP_COLLECTION_ERROR_CODE", &p.error_code),
    };
    info!("🪛️ Quoting in {currency}. {default_discount}% per applied offer, delivery fee {delivery_fee}");
    TransformConfig {
        participant: ParticipantConfig { bpp_id, bpp_uri },
        currency,
        default_discount,
        delivery_fee,
        billing,
        payment,
    }
}

fn worker_config_from_env() -> WorkerConfig {
    let defaults = WorkerConfig::default();
    WorkerConfig {
        queue_size: parse_env("BPP_JOB_QUEUE_SIZE", defaults.queue_size),
        max_concurrent_jobs: parse_env("BPP_MAX_CONCURRENT_JOBS", defaults.max_concurrent_jobs),
        job_timeout: Duration::from_secs(parse_env("BPP_JOB_TIMEOUT_SECS", defaults.job_timeout.as_secs())),
    }
}

/// Reads a string setting. Blank values count as unset.
fn env_or(name: &str, default: &str) -> String {
    env::var(name).ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
        debug!("🪛️ {name} is not set. Using the default, {default}.");
        default.to_string()
    })
}

/// Reads and parses a setting, falling back to `default` if it is missing or invalid.
fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(name) {
        Ok(s) => s.trim().parse::<T>().unwrap_or_else(|e| {
            error!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
            default
        }),
        Err(_) => {
            debug!("🪛️ {name} is not set. Using the default, {default}.");
            default
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_with_fallback() {
        env::set_var("BPP_TEST_PORT_OK", "8080");
        env::set_var("BPP_TEST_PORT_BAD", "eighty");
        assert_eq!(parse_env("BPP_TEST_PORT_OK", 1u16), 8080);
        assert_eq!(parse_env("BPP_TEST_PORT_BAD", 1u16), 1);
        assert_eq!(parse_env("BPP_TEST_PORT_MISSING", 1u16), 1);
        env::set_var("BPP_TEST_FEE", "45.5");
        assert_eq!(parse_env("BPP_TEST_FEE", Amount::default()), Amount::from_hundredths(4550));
        env::set_var("BPP_TEST_DISCOUNT", "12.5%");
        assert_eq!(parse_env("BPP_TEST_DISCOUNT", Percentage::default()), Percentage::from_basis_points(1250));
    }

    #[test]
    fn blank_strings_use_the_default() {
        env::set_var("BPP_TEST_BLANK", "  ");
        assert_eq!(env_or("BPP_TEST_BLANK", "INR"), "INR");
        env::set_var("BPP_TEST_SET", "USD");
        assert_eq!(env_or("BPP_TEST_SET", "INR"), "USD");
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 9090);
        assert_eq!(config.callback_timeout, Duration::from_secs(30));
        assert_eq!(config.transform.delivery_fee.to_string(), "30.00");
        assert_eq!(config.worker.max_concurrent_jobs, 32);
    }
}
