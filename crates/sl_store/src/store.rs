//! CredentialStore — signup / login / secret-change orchestration.
//!
//! The store owns no state of its own beyond the derivation cost factors.
//! It derives, encodes, and compares; record storage and mutual exclusion
//! are delegated to the injected `CredentialRegistry`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sl_crypto::kdf::{self, KdfParams, SALT_LEN};
use sl_crypto::verify::constant_time_eq;

use crate::error::StoreError;
use crate::record::{self, CredentialRecord};
use crate::registry::{CredentialRegistry, RegistryError};

/// Salt for the burn derivation on an unknown identity, so a lookup miss
/// costs about as much wall-clock time as a wrong-password attempt and
/// does not leak identity existence. Parity across failure branches is
/// approximate, not exact.
const UNKNOWN_IDENTITY_SALT: [u8; SALT_LEN] = [0x5a; SALT_LEN];

/// Outcome of a login attempt.
///
/// Untrusted callers should only be shown the binary signal
/// (`is_success`); the failure reason exists for trusted audit paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    Success,
    Failure(LoginFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginFailure {
    UnknownIdentity,
    Mismatch,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

pub struct CredentialStore<R> {
    registry: R,
    params: KdfParams,
}

impl<R: CredentialRegistry> CredentialStore<R> {
    /// Store with the default derivation cost factors.
    pub fn new(registry: R) -> Self {
        Self::with_params(registry, KdfParams::default())
    }

    /// Store with explicit cost factors. Every record already in
    /// `registry` must have been produced with the same factors.
    pub fn with_params(registry: R, params: KdfParams) -> Self {
        Self { registry, params }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Register `identity` with a fresh salt + derived key.
    ///
    /// Duplicate identities are rejected. The check-and-insert is atomic
    /// in the registry, so concurrent signups cannot both win.
    pub fn signup(&self, identity: &str, secret: &str) -> Result<CredentialRecord, StoreError> {
        let salt = kdf::generate_salt();
        let key = kdf::derive_key(secret.as_bytes(), &salt, &self.params)?;
        let record = CredentialRecord {
            identity: identity.to_string(),
            encoded: record::encode_credential(&salt, &key),
        };

        match self.registry.insert(record.clone()) {
            Ok(()) => {
                info!(identity, "credential registered");
                Ok(record)
            }
            Err(RegistryError::Duplicate(id)) => Err(StoreError::DuplicateIdentity(id)),
            Err(e) => Err(StoreError::Registry(e)),
        }
    }

    /// Verify `secret` against the stored credential for `identity`.
    ///
    /// The re-derived key is compared to the stored key in constant time;
    /// the comparison leaks nothing about where the keys first differ. A
    /// malformed stored record is surfaced as an error (registry
    /// corruption), never repaired or retried.
    pub fn login(&self, identity: &str, secret: &str) -> Result<LoginOutcome, StoreError> {
        let record = match self.registry.get(identity) {
            Ok(record) => record,
            Err(RegistryError::NotFound(_)) => {
                // Burn a derivation so the miss path is not observably
                // cheaper than a wrong-password path.
                let _ = kdf::derive_key(secret.as_bytes(), &UNKNOWN_IDENTITY_SALT, &self.params)?;
                debug!(identity, "login failed: unknown identity");
                return Ok(LoginOutcome::Failure(LoginFailure::UnknownIdentity));
            }
            Err(e) => return Err(StoreError::Registry(e)),
        };

        let (salt, stored_key) = record::decode_credential(&record.encoded).inspect_err(|_| {
            warn!(identity, "stored credential is malformed");
        })?;
        let attempted = kdf::derive_key(secret.as_bytes(), &salt, &self.params)?;

        if constant_time_eq(attempted.as_bytes(), &stored_key) {
            info!(identity, "login succeeded");
            Ok(LoginOutcome::Success)
        } else {
            debug!(identity, "login failed: secret mismatch");
            Ok(LoginOutcome::Failure(LoginFailure::Mismatch))
        }
    }

    /// Replace the credential for `identity` after verifying `current`.
    ///
    /// A fresh salt is generated for the new secret and the old record is
    /// swapped out atomically. On any failure the stored record is left
    /// untouched.
    pub fn change_secret(
        &self,
        identity: &str,
        current: &str,
        new: &str,
    ) -> Result<CredentialRecord, StoreError> {
        let record = match self.registry.get(identity) {
            Ok(record) => record,
            Err(RegistryError::NotFound(id)) => return Err(StoreError::UnknownIdentity(id)),
            Err(e) => return Err(StoreError::Registry(e)),
        };

        let (salt, stored_key) = record::decode_credential(&record.encoded)?;
        let current_key = kdf::derive_key(current.as_bytes(), &salt, &self.params)?;
        if !constant_time_eq(current_key.as_bytes(), &stored_key) {
            debug!(identity, "secret change rejected: current secret mismatch");
            return Err(StoreError::IncorrectSecret);
        }

        let new_salt = kdf::generate_salt();
        let new_key = kdf::derive_key(new.as_bytes(), &new_salt, &self.params)?;
        let new_record = CredentialRecord {
            identity: identity.to_string(),
            encoded: record::encode_credential(&new_salt, &new_key),
        };

        match self.registry.replace(new_record.clone()) {
            Ok(()) => {
                info!(identity, "credential replaced");
                Ok(new_record)
            }
            Err(RegistryError::NotFound(id)) => Err(StoreError::UnknownIdentity(id)),
            Err(e) => Err(StoreError::Registry(e)),
        }
    }
}
