use std::{env, fmt::Display, str::FromStr};

use log::*;
use upg_common::{helpers::non_blank, Secret};
use url::Url;

use crate::{ChecksumSecret, UnipayError};

pub const DEFAULT_TEST_URL: &str = "https://unipaynetuat.innoviti.com:13001/FlohNetwork/saleTrans";
pub const DEFAULT_PRODUCTION_URL: &str = "https://unipaynet.innoviti.com/FlohNetwork/saleTrans";

/// Selects which gateway endpoint payment requests are posted to.
///
/// The mode is fixed when the configuration is loaded and passed explicitly to every URL lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatewayMode {
    #[default]
    Test,
    Production,
}

impl GatewayMode {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for GatewayMode {
    type Err = UnipayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "production" | "prod" | "live" => Ok(Self::Production),
            _ => Err(UnipayError::InvalidMode(s.to_string())),
        }
    }
}

impl Display for GatewayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Test => f.write_str("test"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEndpoints {
    pub test_url: String,
    pub production_url: String,
}

impl Default for GatewayEndpoints {
    fn default() -> Self {
        Self { test_url: DEFAULT_TEST_URL.to_string(), production_url: DEFAULT_PRODUCTION_URL.to_string() }
    }
}

impl GatewayEndpoints {
    pub fn service_url(&self, mode: GatewayMode) -> &str {
        match mode {
            GatewayMode::Test => &self.test_url,
            GatewayMode::Production => &self.production_url,
        }
    }
}

/// Merchant account settings for the Unipay gateway.
#[derive(Debug, Clone, Default)]
pub struct UnipayConfig {
    pub mode: GatewayMode,
    pub endpoints: GatewayEndpoints,
    pub merchant_id: String,
    pub sub_merchant_id: Option<String>,
    /// Used for every payment request when the caller does not supply one.
    pub processing_code: Option<String>,
    pub secret: ChecksumSecret,
}

impl UnipayConfig {
    pub fn new(mode: GatewayMode, merchant_id: &str, secret: ChecksumSecret) -> Self {
        Self { mode, merchant_id: merchant_id.to_string(), secret, ..Default::default() }
    }

    pub fn new_from_env_or_default() -> Self {
        let mode = match env::var("UPG_UNIPAY_MODE") {
            Ok(s) => s.parse::<GatewayMode>().unwrap_or_else(|e| {
                error!("🪛️ {e} Falling back to the test gateway.");
                GatewayMode::Test
            }),
            Err(_) => {
                warn!("🪛️ UPG_UNIPAY_MODE not set, using the test gateway");
                GatewayMode::Test
            },
        };
        let mut endpoints = GatewayEndpoints::default();
        if let Some(url) = endpoint_from_env("UPG_UNIPAY_TEST_URL") {
            info!("🪛️ Using {url} as the Unipay test endpoint");
            endpoints.test_url = url;
        }
        if let Some(url) = endpoint_from_env("UPG_UNIPAY_PRODUCTION_URL") {
            info!("🪛️ Using {url} as the Unipay production endpoint");
            endpoints.production_url = url;
        }
        let merchant_id = non_blank(env::var("UPG_UNIPAY_MERCHANT_ID").ok()).unwrap_or_else(|| {
            warn!("🪛️ UPG_UNIPAY_MERCHANT_ID not set. Payment requests will carry an empty merchant id.");
            String::default()
        });
        let sub_merchant_id = non_blank(env::var("UPG_UNIPAY_SUB_MERCHANT_ID").ok());
        let processing_code = non_blank(env::var("UPG_UNIPAY_PROCESSING_CODE").ok());
        let secret = Secret::new(env::var("UPG_UNIPAY_SECRET").unwrap_or_else(|_| {
            warn!("🪛️ UPG_UNIPAY_SECRET not set. No gateway callback will pass checksum verification.");
            String::default()
        }));
        if mode.is_production() && secret.is_empty() {
            error!("🚨️ The gateway is in production mode but no checksum secret has been configured.");
        }
        Self { mode, endpoints, merchant_id, sub_merchant_id, processing_code, secret }
    }

    /// The URL payment forms are submitted to, for the configured mode.
    pub fn service_url(&self) -> &str {
        self.endpoints.service_url(self.mode)
    }
}

/// Reads an endpoint override. Values that are not absolute URLs are ignored.
fn endpoint_from_env(var: &str) -> Option<String> {
    let value = non_blank(env::var(var).ok())?;
    match validate_endpoint(&value) {
        Ok(()) => Some(value),
        Err(e) => {
            error!("🪛️ {var} is not a valid URL. {e}. Using the default endpoint instead.");
            None
        },
    }
}

fn validate_endpoint(value: &str) -> Result<(), url::ParseError> {
    Url::parse(value).map(|_| ())
}
