// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password credential derivation and verification.
//!
//! A credential is a pair of hex strings: a fresh 128-bit random salt and
//! the HMAC-SHA-256 of the password keyed by that salt. The plain
//! password is never stored.

use hmac::{Hmac, Mac};
use ring::rand::{SecureRandom, SystemRandom};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AppError;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Salt length in bytes (128 bits).
const SALT_LEN: usize = 16;

/// A derived credential, ready for storage.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Hex-encoded HMAC-SHA-256 digest
    pub hash: String,
    /// Hex-encoded salt
    pub salt: String,
}

/// Derive a fresh credential for `password`.
pub fn derive(password: &str) -> Result<Credential, AppError> {
    let mut salt = [0u8; SALT_LEN];
    SystemRandom::new().fill(&mut salt).map_err(|_| {
        AppError::Internal(anyhow::anyhow!("System RNG failure while generating salt"))
    })?;

    Ok(Credential {
        hash: hex::encode(digest(password, &salt)?),
        salt: hex::encode(salt),
    })
}

/// Verify `password` against a stored hash and salt pair.
///
/// Malformed stored fields verify false rather than erroring, and the
/// digest comparison is constant-time.
pub fn verify(password: &str, stored_hash: &str, stored_salt: &str) -> bool {
    let Ok(salt) = hex::decode(stored_salt) else {
        return false;
    };
    let Ok(expected) = hex::decode(stored_hash) else {
        return false;
    };
    let Ok(computed) = digest(password, &salt) else {
        return false;
    };

    computed.as_slice().ct_eq(expected.as_slice()).into()
}

/// HMAC-SHA-256 of `password` keyed by `salt`.
fn digest(password: &str, salt: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut mac = HmacSha256::new_from_slice(salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create HMAC: {}", e)))?;
    mac.update(password.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
