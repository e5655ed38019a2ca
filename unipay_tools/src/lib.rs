//! # Unipay tools
//!
//! Message signing and verification for the Innoviti Unipay payment gateway.
//!
//! * [`RequestBuilder`] assembles and signs the form fields that start a payment.
//! * [`Notification`] parses and verifies the gateway's asynchronous callback.
//! * [`ReturnHandler`] resolves the browser redirect, checking that it confirms the expected order.
//!
//! All of these are plain values with no I/O. Transport is left to the host application.

mod config;
mod data_objects;
mod error;
mod field_set;
mod notification;
mod request_builder;
mod return_handler;
mod traits;

pub mod helpers;
pub mod mapping;
pub mod signer;
pub mod transresponse;

pub use config::{GatewayEndpoints, GatewayMode, UnipayConfig, DEFAULT_PRODUCTION_URL, DEFAULT_TEST_URL};
pub use data_objects::PaymentOutcome;
pub use error::UnipayError;
pub use field_set::SignedFieldSet;
pub use notification::{Notification, CHECKSUM_MISMATCH_MESSAGE, SUCCESS_RESPONSE_CODE};
pub use request_builder::{Customer, MerchantDefined, RequestBuilder, RequestOptions};
pub use return_handler::ReturnHandler;
pub use signer::sign;
pub use traits::{Signable, Verifiable};
pub use upg_common::Secret;

/// The key shared with the gateway for computing checksums.
pub type ChecksumSecret = upg_common::Secret<String>;
