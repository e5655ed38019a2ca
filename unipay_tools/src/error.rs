use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UnipayError {
    #[error("'{0}' is not a valid gateway mode. Use 'test' or 'production'.")]
    InvalidMode(String),
    #[error("'{0}' is not a known Unipay request field")]
    UnknownField(String),
    #[error("'{0}' is computed by the request builder and cannot be set directly")]
    ReservedField(String),
    #[error("Invalid currency amount: {0}")]
    InvalidAmount(String),
}
