// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Salted PBKDF2-HMAC-SHA256 password verifiers.
//!
//! Plaintext passwords never leave this module; the directory only stores the
//! derived hash together with its salt and iteration count.

use std::num::NonZeroU32;

use ring::{
    digest, pbkdf2,
    rand::{SecureRandom, SystemRandom},
};

static PBKDF2_ALG: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

const HASH_LEN: usize = digest::SHA256_OUTPUT_LEN;
const SALT_LEN: usize = 16;

/// Iteration count for newly derived hashes.
pub const DEFAULT_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("system random source unavailable")]
    Rng,
}

/// Stored password verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: [u8; SALT_LEN],
    iterations: NonZeroU32,
    hash: [u8; HASH_LEN],
}

impl PasswordHash {
    /// Hash `password` with a fresh random salt.
    pub fn new(password: &str) -> Result<Self, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        SystemRandom::new()
            .fill(&mut salt)
            .map_err(|_| PasswordError::Rng)?;
        Ok(Self::with_salt(password, salt, DEFAULT_ITERATIONS))
    }

    pub fn with_salt(password: &str, salt: [u8; SALT_LEN], iterations: NonZeroU32) -> Self {
        let mut hash = [0u8; HASH_LEN];
        pbkdf2::derive(PBKDF2_ALG, iterations, &salt, password.as_bytes(), &mut hash);
        Self {
            salt,
            iterations,
            hash,
        }
    }

    /// Constant-time check of `password` against this verifier.
    pub fn verify(&self, password: &str) -> bool {
        pbkdf2::verify(
            PBKDF2_ALG,
            self.iterations,
            &self.salt,
            password.as_bytes(),
            &self.hash,
        )
        .is_ok()
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let hash = PasswordHash::new("express").unwrap();
        assert!(hash.verify("express"));
    }

    #[test]
    fn rejects_other_passwords() {
        let hash = PasswordHash::new("express").unwrap();
        assert!(!hash.verify("IDontKnow"));
        assert!(!hash.verify(""));
        assert!(!hash.verify("Express"));
    }

    #[test]
    fn salts_are_random() {
        let a = PasswordHash::new("express").unwrap();
        let b = PasswordHash::new("express").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn same_salt_is_deterministic() {
        let iterations = NonZeroU32::new(1_000).unwrap();
        let a = PasswordHash::with_salt("express", [7; SALT_LEN], iterations);
        let b = PasswordHash::with_salt("express", [7; SALT_LEN], iterations);
        assert_eq!(a, b);
    }
}
