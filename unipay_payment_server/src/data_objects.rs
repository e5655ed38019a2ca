use std::fmt::Display;

use serde::{Deserialize, Serialize};
use unipay_tools::{
    helpers::unipay_amount,
    Customer,
    MerchantDefined,
    PaymentOutcome,
    RequestBuilder,
    RequestOptions,
    ReturnHandler,
    SignedFieldSet,
    UnipayConfig,
    UnipayError,
    Verifiable,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// A merchant's request to start a payment. Merchant id, sub-merchant id and the checksum secret come from the server
/// configuration, never from the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub processing_code: Option<String>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub merchant_defined: MerchantDefined,
}

impl CheckoutRequest {
    pub fn into_request_builder(self, config: &UnipayConfig) -> Result<RequestBuilder, UnipayError> {
        let defaults = RequestOptions::from_config(config);
        let amount = self.amount.as_deref().map(unipay_amount).transpose()?;
        let options = RequestOptions {
            amount,
            currency: self.currency,
            description: self.description,
            processing_code: self.processing_code.or(defaults.processing_code),
            customer: self.customer,
            return_url: self.return_url,
            merchant_defined: self.merchant_defined,
            ..defaults
        };
        Ok(RequestBuilder::new(self.order_id, &config.merchant_id, options))
    }
}

/// The fields to post (in order) and where to post them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub url: String,
    pub fields: SignedFieldSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnResult {
    pub order_id: String,
    pub status: PaymentOutcome,
    pub success: bool,
    pub verified: bool,
    pub message: String,
}

impl From<&ReturnHandler> for ReturnResult {
    fn from(ret: &ReturnHandler) -> Self {
        Self {
            order_id: ret.order_id().to_string(),
            status: ret.status(),
            success: ret.success(),
            verified: ret.is_verified(),
            message: ret.message().to_string(),
        }
    }
}
