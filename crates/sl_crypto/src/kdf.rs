//! Key derivation for stored credentials.
//!
//! `derive_key` — scrypt, derives the 64-byte key that is stored
//!   (hex-encoded) alongside its salt in a credential record.
//!
//! `generate_salt` — fresh random 16-byte salt, one per signup.

use scrypt::Params;
use zeroize::ZeroizeOnDrop;

use crate::error::CryptoError;

/// Salt length in bytes. Stored hex-encoded (32 chars) next to the key.
pub const SALT_LEN: usize = 16;

/// Derived-key length in bytes, shared by signup and login.
/// Changing it invalidates every previously stored credential.
pub const DERIVED_KEY_LEN: usize = 64;

/// scrypt CPU/memory cost exponent: N = 2^14 = 16384.
pub const KDF_LOG_N: u8 = 14;
/// scrypt block size — memory use is 128 * N * r bytes (16 MiB here).
pub const KDF_BLOCK_SIZE: u32 = 8;
/// scrypt parallelism.
pub const KDF_PARALLELISM: u32 = 1;

/// 64-byte credential key derived from secret + salt. Zeroized on drop.
#[derive(Debug, ZeroizeOnDrop)]
pub struct DerivedKey(pub [u8; DERIVED_KEY_LEN]);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.0
    }
}

/// scrypt cost factors — defaults tuned for interactive logins.
///
/// These are store-level configuration, not persisted per record: every
/// credential in a registry must have been derived with the same factors,
/// or verification fails for older records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// log2 of the scrypt cost parameter N (CPU and memory hardness).
    pub log_n: u8,
    /// Block size r (memory hardness).
    pub r: u32,
    /// Parallelism p.
    pub p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            log_n: KDF_LOG_N,
            r: KDF_BLOCK_SIZE,
            p: KDF_PARALLELISM,
        }
    }
}

impl KdfParams {
    fn to_scrypt(self) -> Result<Params, CryptoError> {
        Params::new(self.log_n, self.r, self.p, DERIVED_KEY_LEN)
            .map_err(|e| CryptoError::KeyDerivation(e.to_string()))
    }
}

/// Derive a credential key from a secret + 16-byte salt.
/// The salt is stored alongside the derived key (not secret).
///
/// Deterministic: the same (secret, salt, params) always yields the same
/// key. An invalid cost-factor combination fails with `KeyDerivation` and
/// aborts the calling operation — it is never retried with different
/// parameters.
pub fn derive_key(
    secret: &[u8],
    salt: &[u8; SALT_LEN],
    params: &KdfParams,
) -> Result<DerivedKey, CryptoError> {
    let scrypt_params = params.to_scrypt()?;
    let mut output = [0u8; DERIVED_KEY_LEN];
    scrypt::scrypt(secret, salt, &scrypt_params, &mut output)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    Ok(DerivedKey(output))
}

/// Generate a fresh random 16-byte salt (one per signup; store with the key).
pub fn generate_salt() -> [u8; SALT_LEN] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
