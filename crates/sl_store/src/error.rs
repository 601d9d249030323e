use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Crypto error: {0}")]
    Crypto(#[from] sl_crypto::CryptoError),

    #[error("Identity already registered: {0}")]
    DuplicateIdentity(String),

    #[error("Unknown identity: {0}")]
    UnknownIdentity(String),

    #[error("Current secret is incorrect")]
    IncorrectSecret,

    #[error("Malformed credential record: {0}")]
    MalformedRecord(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
