//! Extraction of the `transresponse` XML document posted by the gateway.
//!
//! ```xml
//! <response>
//!   <resCode>00</resCode>
//!   <UnipayId>U9001</UnipayId>
//!   <orderId>A100</orderId>
//!   <merchantId>M1</merchantId>
//!   <procCode>PC1</procCode>
//!   <checkSum>...</checkSum>
//!   <resmsg>Transaction Successful</resmsg>
//! </response>
//! ```
//!
//! Tags are matched by local name anywhere in the document. A tag that does not appear reads as the empty string.
//! Extraction never fails. Unclosed or mismatched tags are tolerated the way an HTML parser would: an end tag closes
//! the nearest open element of the same name, and stray end tags are ignored. If the reader hits an unrecoverable
//! error, the values read before it are kept.

use std::collections::HashMap;

use log::*;
use quick_xml::{events::Event, Reader};
use serde::Serialize;

use crate::mapping::TRANSRESPONSE_PARAM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseTag {
    ResponseCode,
    TransactionId,
    OrderId,
    MerchantId,
    ProcessingCode,
    Checksum,
    Message,
}

impl ResponseTag {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"resCode" => Some(Self::ResponseCode),
            b"UnipayId" => Some(Self::TransactionId),
            b"orderId" => Some(Self::OrderId),
            b"merchantId" => Some(Self::MerchantId),
            b"procCode" => Some(Self::ProcessingCode),
            b"checkSum" => Some(Self::Checksum),
            b"resmsg" => Some(Self::Message),
            _ => None,
        }
    }
}

struct OpenTag {
    name: Vec<u8>,
    tag: Option<ResponseTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransResponse {
    pub response_code: String,
    pub transaction_id: String,
    pub order_id: String,
    pub merchant_id: String,
    pub processing_code: String,
    pub checksum: String,
    pub message: String,
}

impl TransResponse {
    pub fn from_xml(xml: &str) -> Self {
        let mut result = Self::default();
        let mut reader = Reader::from_str(xml);
        reader.check_end_names(false);
        let mut open_tags: Vec<OpenTag> = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = e.local_name().as_ref().to_vec();
                    let tag = ResponseTag::from_name(&name);
                    open_tags.push(OpenTag { name, tag });
                },
                Ok(Event::End(e)) => {
                    let name = e.local_name();
                    match open_tags.iter().rposition(|t| t.name == name.as_ref()) {
                        Some(pos) => open_tags.truncate(pos),
                        None => trace!("📨️ Ignoring stray end tag in transresponse"),
                    }
                },
                Ok(Event::Text(t)) => {
                    let text = t.unescape().map(|s| s.into_owned()).unwrap_or_else(|e| {
                        debug!("📨️ Could not unescape text in transresponse ({e}). Using the raw value.");
                        String::from_utf8_lossy(&t).into_owned()
                    });
                    result.append_text(&open_tags, &text);
                },
                Ok(Event::CData(c)) => {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    result.append_text(&open_tags, &text);
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    warn!("📨️ transresponse is not well-formed XML. {e} at position {}", reader.buffer_position());
                    break;
                },
                Ok(_) => {},
            }
        }
        result
    }

    /// Extracts the document from decoded form parameters. A missing parameter is treated as an empty document.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        match params.get(TRANSRESPONSE_PARAM) {
            Some(xml) => Self::from_xml(xml),
            None => {
                warn!("📨️ No {TRANSRESPONSE_PARAM} parameter in gateway payload");
                Self::default()
            },
        }
    }

    /// Extracts the document from a raw `application/x-www-form-urlencoded` body.
    pub fn from_post(body: &str) -> Self {
        Self::from_params(&parse_form_params(body))
    }

    fn append_text(&mut self, open_tags: &[OpenTag], text: &str) {
        for tag in open_tags.iter().filter_map(|t| t.tag) {
            self.field_mut(tag).push_str(text);
        }
    }

    fn field_mut(&mut self, tag: ResponseTag) -> &mut String {
        match tag {
            ResponseTag::ResponseCode => &mut self.response_code,
            ResponseTag::TransactionId => &mut self.transaction_id,
            ResponseTag::OrderId => &mut self.order_id,
            ResponseTag::MerchantId => &mut self.merchant_id,
            ResponseTag::ProcessingCode => &mut self.processing_code,
            ResponseTag::Checksum => &mut self.checksum,
            ResponseTag::Message => &mut self.message,
        }
    }
}

/// Decodes a form body into a map. When a key repeats, the last value wins.
pub fn parse_form_params(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.trim().as_bytes()).into_owned().collect()
}
