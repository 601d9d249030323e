//! sl_store — Saltline credential storage core
//!
//! # Storage strategy
//! The store never persists anything itself. Credentials are
//! `salt_hex:key_hex` strings built from `sl_crypto` output and handed to
//! an injected `CredentialRegistry` collaborator:
//! - signup — fresh salt → derive → encode → atomic insert
//! - login  — atomic read → decode → re-derive → constant-time compare
//! - change — verify the current secret, then atomic replace with a
//!   fresh salt
//!
//! Derivation is blocking by design (its cost is the security feature).
//! Callers that need responsiveness under load run these operations off
//! their latency-sensitive scheduling path; the store performs no internal
//! retries, timeouts, or locking beyond what the registry guarantees.

pub mod error;
pub mod record;
pub mod registry;
pub mod store;

pub use error::StoreError;
pub use record::CredentialRecord;
pub use registry::{CredentialRegistry, MemoryRegistry, RegistryError};
pub use store::{CredentialStore, LoginFailure, LoginOutcome};
