//! # Outbound payment requests
//!
//! A payment is started by submitting a form (usually auto-submitted from the customer's browser) to the gateway's
//! service URL. [`RequestBuilder`] assembles those form fields and signs them.
//!
//! The checksum covers exactly ten fields, in this order:
//!
//! ```text
//!    orderId|merchantId|subMerchantId|amt|cur|Cname|mobile|emailId|processingCode|redirUrl|{secret}
//! ```
//!
//! A field that was never set still occupies its position as an empty string. The merchant-defined fields
//! (`mdf1`..`mdf5`) and the description (`proSku`) are submitted but not signed.

use std::fmt::Display;

use log::*;
use serde::{Deserialize, Serialize};
use upg_common::INR_CURRENCY_CODE;

use crate::{
    config::UnipayConfig,
    field_set::SignedFieldSet,
    mapping::{wire_name, MAPPINGS, OUTBOUND_CHECKSUM_FIELDS},
    traits::Signable,
    ChecksumSecret,
    UnipayError,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Free-text slots the gateway echoes back to the merchant untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantDefined {
    pub var1: Option<String>,
    pub var2: Option<String>,
    pub var3: Option<String>,
    pub var4: Option<String>,
    pub var5: Option<String>,
}

impl MerchantDefined {
    pub fn slots(&self) -> [Option<&str>; 5] {
        [&self.var1, &self.var2, &self.var3, &self.var4, &self.var5].map(|v| v.as_deref())
    }
}

/// Optional request data. `secret` signs the request and is never emitted as a field.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub amount: Option<String>,
    /// Defaults to `INR`
    pub currency: Option<String>,
    pub description: Option<String>,
    pub submerchant_id: Option<String>,
    pub processing_code: Option<String>,
    pub customer: Customer,
    pub return_url: Option<String>,
    pub merchant_defined: MerchantDefined,
    pub secret: ChecksumSecret,
}

impl RequestOptions {
    /// Options pre-populated with the merchant-level settings from `config`.
    pub fn from_config(config: &UnipayConfig) -> Self {
        Self {
            submerchant_id: config.sub_merchant_id.clone(),
            processing_code: config.processing_code.clone(),
            secret: config.secret.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    fields: SignedFieldSet,
    secret: ChecksumSecret,
}

impl RequestBuilder {
    pub fn new<O: Display>(order_id: O, account: &str, options: RequestOptions) -> Self {
        let m = &MAPPINGS;
        let mut fields = SignedFieldSet::new();
        fields.add_field(m.order, order_id);
        fields.add_field(m.account, account);
        let RequestOptions {
            amount,
            currency,
            description,
            submerchant_id,
            processing_code,
            customer,
            return_url,
            merchant_defined,
            secret,
        } = options;
        let optional = [
            (m.submerchant_id, submerchant_id.as_deref()),
            (m.amount, amount.as_deref()),
            (m.currency, Some(currency.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or(INR_CURRENCY_CODE))),
            (m.description, description.as_deref()),
            (m.customer.name, customer.name.as_deref()),
            (m.customer.email, customer.email.as_deref()),
            (m.customer.phone, customer.phone.as_deref()),
            (m.processing_code, processing_code.as_deref()),
            (m.return_url, return_url.as_deref()),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.add_field(name, value);
            }
        }
        for (name, value) in m.merchant_defined.iter().zip(merchant_defined.slots()) {
            if let Some(value) = value {
                fields.add_field(name, value);
            }
        }
        debug!("💳️ Prepared payment request with fields [{}]", fields.names().join(", "));
        Self { fields, secret }
    }

    /// Sets a field by its wire name. The checksum field is reserved.
    pub fn add_field<V: Display>(&mut self, name: &str, value: V) -> Result<&mut Self, UnipayError> {
        if name == MAPPINGS.checksum {
            return Err(UnipayError::ReservedField(name.to_string()));
        }
        if !self.fields.add_field(name, value) {
            trace!("💳️ Ignoring blank value for {name}");
        }
        Ok(self)
    }

    /// Sets a field by its logical name, e.g. `amount` or `customer.email`.
    pub fn set<V: Display>(&mut self, logical_name: &str, value: V) -> Result<&mut Self, UnipayError> {
        let name = wire_name(logical_name).ok_or_else(|| UnipayError::UnknownField(logical_name.to_string()))?;
        self.add_field(name, value)
    }

    /// The fields that will be submitted, without the checksum.
    pub fn fields(&self) -> &SignedFieldSet {
        &self.fields
    }

    pub fn checksum(&self) -> String {
        self.signature(&self.secret)
    }

    /// All request fields, followed by the checksum field.
    pub fn render_fields(&self) -> SignedFieldSet {
        let mut rendered = self.fields.clone();
        rendered.add_field(MAPPINGS.checksum, self.checksum());
        rendered
    }

    /// The signed request as an `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        self.render_fields().to_form_urlencoded()
    }
}

impl Signable for RequestBuilder {
    fn checksum_values(&self) -> Vec<String> {
        self.fields.values_for(&OUTBOUND_CHECKSUM_FIELDS)
    }
}
