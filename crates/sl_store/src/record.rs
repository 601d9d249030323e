//! Credential records — the persisted shape of a stored credential.
//!
//! Format (stable, do not change): lowercase hex of the 16-byte salt
//! (32 chars), one `:`, lowercase hex of the 64-byte derived key
//! (128 chars). Hex only produces `0-9a-f`, so the delimiter cannot occur
//! inside either segment.

use serde::{Deserialize, Serialize};

use sl_crypto::kdf::{DerivedKey, DERIVED_KEY_LEN, SALT_LEN};

use crate::error::StoreError;

/// Separates the hex-encoded salt from the hex-encoded key.
pub const DELIMITER: char = ':';

/// One stored credential: identity + `salt_hex:key_hex`.
/// Created at signup; replaced wholesale by a secret change, never edited
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub identity: String,
    pub encoded: String,
}

/// Encode a salt + derived key into the stored credential text.
pub fn encode_credential(salt: &[u8; SALT_LEN], key: &DerivedKey) -> String {
    format!(
        "{}{}{}",
        hex::encode(salt),
        DELIMITER,
        hex::encode(key.as_bytes())
    )
}

/// Split and decode a stored credential into (salt, key).
///
/// Any defect — missing or extra delimiter, non-hex characters, wrong
/// segment length — is a `MalformedRecord`: the record signals registry
/// corruption and is never repaired.
pub fn decode_credential(
    encoded: &str,
) -> Result<([u8; SALT_LEN], [u8; DERIVED_KEY_LEN]), StoreError> {
    let mut segments = encoded.split(DELIMITER);
    let (salt_hex, key_hex) = match (segments.next(), segments.next(), segments.next()) {
        (Some(salt), Some(key), None) => (salt, key),
        _ => {
            return Err(StoreError::MalformedRecord(format!(
                "expected exactly one '{DELIMITER}' delimiter"
            )))
        }
    };

    let salt: [u8; SALT_LEN] = hex::decode(salt_hex)
        .map_err(|e| StoreError::MalformedRecord(format!("salt segment: {e}")))?
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            StoreError::MalformedRecord(format!("salt length {} != {SALT_LEN}", bytes.len()))
        })?;

    let key: [u8; DERIVED_KEY_LEN] = hex::decode(key_hex)
        .map_err(|e| StoreError::MalformedRecord(format!("key segment: {e}")))?
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            StoreError::MalformedRecord(format!("key length {} != {DERIVED_KEY_LEN}", bytes.len()))
        })?;

    Ok((salt, key))
}
