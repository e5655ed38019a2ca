//! # Unipay checksums
//!
//! Every message exchanged with the gateway carries a checksum computed over an ordered list of plain-text values and
//! the merchant's shared secret:
//!
//! ```text
//!    md5hex({value_1}|{value_2}|...|{value_n}|{secret})
//! ```
//!
//! The digest is rendered as lowercase hexadecimal. Values are used exactly as given; no trimming or escaping takes
//! place, so a value that itself contains `|` produces a different (but still deterministic) digest input.
//!
//! Outbound requests and inbound callbacks sign different value lists. See
//! [`RequestBuilder`](crate::RequestBuilder) and [`Notification`](crate::Notification).

use crate::ChecksumSecret;

pub const CHECKSUM_SEPARATOR: &str = "|";

/// The exact byte sequence that is hashed for the given values and secret.
pub fn signature_input<S: AsRef<str>>(values: &[S], secret: &ChecksumSecret) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(secret.reveal().as_str()))
        .collect::<Vec<&str>>()
        .join(CHECKSUM_SEPARATOR)
}

/// Computes the lowercase hex MD5 checksum of `values` followed by `secret`, joined with `|`.
pub fn sign<S: AsRef<str>>(values: &[S], secret: &ChecksumSecret) -> String {
    let digest = md5::compute(signature_input(values, secret).as_bytes());
    format!("{digest:x}")
}
