//! SDK error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid public key `{0}`")]
    InvalidPubkey(String),

    #[error("seal must be {expected} bytes, got {actual}")]
    InvalidSealLength { expected: usize, actual: usize },

    #[error("selector {0:?} is assigned to more than one verifier")]
    DuplicateSelector([u8; 4]),

    #[error("selector {0:?} is already registered with the router")]
    SelectorRegistered([u8; 4]),

    #[error("no selectors left to assign")]
    SelectorsExhausted,

    #[error("failed to encode instruction: {0}")]
    Encoding(String),
}

pub type SdkResult<T> = std::result::Result<T, SdkError>;
