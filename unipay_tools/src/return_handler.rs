//! # Browser redirects
//!
//! After paying, the customer's browser is redirected back to the merchant with the same `transresponse` payload the
//! gateway posts in its callback. The redirect carries no signature of its own, so [`ReturnHandler`] verifies the
//! embedded notification, and additionally checks that it reports on the order the merchant expects.
//!
//! Note that [`ReturnHandler::success`] reflects the notification's own status only. A payload for a different order
//! that completed will report `status() == Mismatch` while `success()` is still true.

use std::{collections::HashMap, fmt::Display};

use log::*;

use crate::{
    data_objects::PaymentOutcome,
    notification::Notification,
    traits::{Signable, Verifiable},
    ChecksumSecret,
};

#[derive(Debug, Clone)]
pub struct ReturnHandler {
    order_id: String,
    notification: Notification,
}

impl ReturnHandler {
    /// `order_id` is the order the merchant expects this redirect to confirm.
    pub fn new<O: Display>(xml: &str, order_id: O, secret: &ChecksumSecret) -> Self {
        Self::from_notification(Notification::new(xml, secret), order_id)
    }

    pub fn from_params<O: Display>(params: &HashMap<String, String>, order_id: O, secret: &ChecksumSecret) -> Self {
        Self::from_notification(Notification::from_params(params, secret), order_id)
    }

    pub fn from_post<O: Display>(body: &str, order_id: O, secret: &ChecksumSecret) -> Self {
        Self::from_notification(Notification::from_post(body, secret), order_id)
    }

    pub fn from_notification<O: Display>(notification: Notification, order_id: O) -> Self {
        Self { order_id: order_id.to_string(), notification }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn status(&self) -> PaymentOutcome {
        if self.notification.invoice_ok(&self.order_id) {
            self.notification.status()
        } else {
            info!(
                "💳️ Redirect for order [{}] carries a response for order [{}]",
                self.order_id,
                self.notification.invoice()
            );
            PaymentOutcome::Mismatch
        }
    }

    pub fn success(&self) -> bool {
        self.notification.status() == PaymentOutcome::Completed
    }

    pub fn message(&self) -> &str {
        self.notification.message()
    }
}

impl Signable for ReturnHandler {
    fn checksum_values(&self) -> Vec<String> {
        self.notification.checksum_values()
    }
}

impl Verifiable for ReturnHandler {
    fn is_verified(&self) -> bool {
        self.notification.is_verified()
    }

    fn diagnostic(&self) -> Option<&str> {
        self.notification.diagnostic()
    }
}
