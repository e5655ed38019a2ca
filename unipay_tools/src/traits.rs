use crate::{signer::sign, ChecksumSecret};

/// A message that can produce the ordered list of values its checksum is computed over.
pub trait Signable {
    fn checksum_values(&self) -> Vec<String>;

    fn signature(&self, secret: &ChecksumSecret) -> String {
        sign(&self.checksum_values(), secret)
    }
}

/// A message whose authenticity has been checked against its checksum.
pub trait Verifiable {
    fn is_verified(&self) -> bool;

    /// A human-readable reason for a failed verification, or `None` if the message verified.
    fn diagnostic(&self) -> Option<&str>;
}
