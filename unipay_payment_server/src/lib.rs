//! # Unipay payment server
//! This crate hosts the HTTP endpoints of the Unipay gateway integration. It is responsible for:
//! Signing payment requests for the merchant's checkout page.
//! Receiving and verifying the gateway's server-to-server callbacks.
//! Resolving the customer's browser redirect into a final payment status.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/unipay/checkout`: Returns the signed form fields and the gateway URL for a new payment.
//! * `/unipay/notify`: The callback route the gateway posts transaction results to.
//! * `/unipay/return/{order_id}`: The route the customer's browser is redirected to after paying.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;

pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
