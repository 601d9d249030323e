//! sl_crypto — Saltline Credential Core cryptographic primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Zeroize derived key material on drop.
//! - Derivation is deliberately slow and memory-hard. That cost is the
//!   security feature; callers needing responsiveness run it off any
//!   latency-sensitive scheduling path.
//!
//! # Module layout
//! - `kdf`    — scrypt credential-key derivation + salt generation
//! - `verify` — length-checked constant-time equality
//! - `error`  — unified error type

pub mod error;
pub mod kdf;
pub mod verify;

pub use error::CryptoError;
