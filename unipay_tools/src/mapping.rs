//! Wire names of the Unipay payment request fields.
//!
//! Callers address fields by a logical name (`amount`, `customer.email`, `merchant_defined.var2`, ...). The gateway
//! knows them by the wire names in [`FIELD_TABLE`]. Grouped fields are also available as nested structures through
//! [`MAPPINGS`].

pub struct CustomerMapping {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub struct FieldMappings {
    pub order: &'static str,
    pub account: &'static str,
    pub submerchant_id: &'static str,
    pub amount: &'static str,
    pub currency: &'static str,
    pub description: &'static str,
    pub processing_code: &'static str,
    pub return_url: &'static str,
    pub checksum: &'static str,
    pub customer: CustomerMapping,
    /// `var1` through `var5`
    pub merchant_defined: [&'static str; 5],
}

pub const MAPPINGS: FieldMappings = FieldMappings {
    order: "orderId",
    account: "merchantId",
    submerchant_id: "subMerchantId",
    amount: "amt",
    currency: "cur",
    description: "proSku",
    processing_code: "processingCode",
    return_url: "redirUrl",
    checksum: "chksum",
    customer: CustomerMapping { name: "Cname", email: "emailId", phone: "mobile" },
    merchant_defined: ["mdf1", "mdf2", "mdf3", "mdf4", "mdf5"],
};

/// Logical name to wire name.
pub const FIELD_TABLE: [(&str, &str); 17] = [
    ("order", "orderId"),
    ("account", "merchantId"),
    ("submerchant_id", "subMerchantId"),
    ("amount", "amt"),
    ("currency", "cur"),
    ("description", "proSku"),
    ("processing_code", "processingCode"),
    ("return_url", "redirUrl"),
    ("checksum", "chksum"),
    ("customer.name", "Cname"),
    ("customer.email", "emailId"),
    ("customer.phone", "mobile"),
    ("merchant_defined.var1", "mdf1"),
    ("merchant_defined.var2", "mdf2"),
    ("merchant_defined.var3", "mdf3"),
    ("merchant_defined.var4", "mdf4"),
    ("merchant_defined.var5", "mdf5"),
];

/// The fields an outbound request checksum is computed over, in signing order.
pub const OUTBOUND_CHECKSUM_FIELDS: [&str; 10] = [
    MAPPINGS.order,
    MAPPINGS.account,
    MAPPINGS.submerchant_id,
    MAPPINGS.amount,
    MAPPINGS.currency,
    MAPPINGS.customer.name,
    MAPPINGS.customer.phone,
    MAPPINGS.customer.email,
    MAPPINGS.processing_code,
    MAPPINGS.return_url,
];

/// The form parameter that carries the XML document in gateway callbacks and browser redirects.
pub const TRANSRESPONSE_PARAM: &str = "transresponse";

pub fn wire_name(logical_name: &str) -> Option<&'static str> {
    FIELD_TABLE.iter().find(|(logical, _)| *logical == logical_name).map(|(_, wire)| *wire)
}
