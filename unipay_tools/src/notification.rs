//! # Gateway callbacks
//!
//! Once a payment has been processed, the gateway posts a `transresponse` form parameter to the merchant. The checksum
//! in that document is NOT computed the same way as the outbound request checksum. The gateway concatenates five
//! values without any separator, and signs the result as a single value:
//!
//! ```text
//!    md5hex({orderId}{merchantId}{UnipayId}{resCode}{resmsg}|{secret})
//! ```
//!
//! The checksum is verified when the [`Notification`] is constructed. Nothing in the payload should be trusted unless
//! [`Notification::acknowledge`] returns true.
//!
//! A notification only answers "is this message authentic?". Whether it belongs to the order the merchant expects is
//! answered by [`ReturnHandler`](crate::ReturnHandler).

use std::{collections::HashMap, fmt::Display};

use log::*;
use upg_common::Paise;

use crate::{
    data_objects::PaymentOutcome,
    traits::{Signable, Verifiable},
    transresponse::TransResponse,
    ChecksumSecret,
};

pub const CHECKSUM_MISMATCH_MESSAGE: &str = "Return checksum not matching the data provided";
pub const SUCCESS_RESPONSE_CODE: &str = "00";

#[derive(Debug, Clone)]
pub struct Notification {
    response: TransResponse,
    diagnostic: Option<String>,
}

impl Notification {
    /// Builds a notification from the `transresponse` XML document.
    pub fn new(xml: &str, secret: &ChecksumSecret) -> Self {
        Self::from_response(TransResponse::from_xml(xml), secret)
    }

    /// Builds a notification from decoded form parameters.
    pub fn from_params(params: &HashMap<String, String>, secret: &ChecksumSecret) -> Self {
        Self::from_response(TransResponse::from_params(params), secret)
    }

    /// Builds a notification from a raw `application/x-www-form-urlencoded` request body.
    pub fn from_post(body: &str, secret: &ChecksumSecret) -> Self {
        Self::from_response(TransResponse::from_post(body), secret)
    }

    pub fn from_response(response: TransResponse, secret: &ChecksumSecret) -> Self {
        let mut notification = Self { response, diagnostic: None };
        let expected = notification.signature(secret);
        if expected == notification.response.checksum {
            debug!("🔐️ Checksum for order [{}] verified ✅️", notification.invoice());
        } else {
            warn!(
                "🔐️ Checksum for order [{}] (transaction [{}]) does not match. Treating the callback as forged.",
                notification.invoice(),
                notification.transaction_id()
            );
            notification.diagnostic = Some(CHECKSUM_MISMATCH_MESSAGE.to_string());
        }
        notification
    }

    /// The merchant's order id, as echoed by the gateway.
    pub fn invoice(&self) -> &str {
        &self.response.order_id
    }

    pub fn item_id(&self) -> &str {
        self.invoice()
    }

    pub fn transaction_id(&self) -> &str {
        &self.response.transaction_id
    }

    pub fn account(&self) -> &str {
        &self.response.merchant_id
    }

    pub fn response_code(&self) -> &str {
        &self.response.response_code
    }

    pub fn processing_code(&self) -> &str {
        &self.response.processing_code
    }

    /// The checksum supplied by the gateway.
    pub fn checksum(&self) -> &str {
        &self.response.checksum
    }

    /// The `resmsg` text exactly as sent by the gateway.
    pub fn gateway_message(&self) -> &str {
        &self.response.message
    }

    /// The verification diagnostic if the checksum did not match, otherwise the gateway's result message.
    pub fn message(&self) -> &str {
        self.diagnostic.as_deref().unwrap_or(&self.response.message)
    }

    pub fn status(&self) -> PaymentOutcome {
        if self.response_code() == SUCCESS_RESPONSE_CODE {
            PaymentOutcome::Completed
        } else {
            PaymentOutcome::Failed
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == PaymentOutcome::Completed
    }

    /// The callback does not carry the settled amount, so this is always zero.
    pub fn gross(&self) -> Paise {
        Paise::default()
    }

    pub fn checksum_ok(&self) -> bool {
        self.diagnostic.is_none()
    }

    /// Whether the callback should be accepted. Only the checksum is considered.
    pub fn acknowledge(&self) -> bool {
        self.checksum_ok()
    }

    /// Whether `order_id` is the order this notification reports on.
    pub fn invoice_ok<O: Display>(&self, order_id: O) -> bool {
        order_id.to_string() == self.invoice()
    }

    pub fn response(&self) -> &TransResponse {
        &self.response
    }
}

impl Signable for Notification {
    fn checksum_values(&self) -> Vec<String> {
        let r = &self.response;
        let joined = [&r.order_id, &r.merchant_id, &r.transaction_id, &r.response_code, &r.message]
            .into_iter()
            .map(String::as_str)
            .collect::<String>();
        vec![joined]
    }
}

impl Verifiable for Notification {
    fn is_verified(&self) -> bool {
        self.checksum_ok()
    }

    fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}
