use thiserror::Error;

/// Errors returned when parsing a candidate short token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("token is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token decodes to {len} bytes; at most 8 are allowed")]
    TooLong { len: usize },
    #[error("token value does not fit in 63 bits")]
    Overflow,
    #[error("token has a non-minimal encoding (leading zero byte)")]
    NonCanonical,
}
