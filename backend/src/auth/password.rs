//! Password hashing
//!
//! Two schemes are supported:
//!
//! - `sha256` (default): unsalted SHA-256, lowercase hex. Deterministic, so
//!   validation is a digest comparison and identical passwords share a
//!   digest across users.
//! - `argon2`: salted Argon2id PHC strings, verified with `verify_password`.
//!
//! Digests from one scheme never verify under the other.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Password hashing scheme used by the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Sha256,
    Argon2,
}

/// Password hashing service
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService {
    scheme: PasswordScheme,
}

impl PasswordService {
    pub fn new(scheme: PasswordScheme) -> Self {
        Self { scheme }
    }

    /// Hash a password (blocking when the scheme is argon2)
    pub fn hash(&self, password: &str) -> Result<String> {
        match self.scheme {
            PasswordScheme::Sha256 => Ok(sha256_hex(password)),
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
                Ok(hash.to_string())
            }
        }
    }

    /// Check a password against a stored digest
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool> {
        match self.scheme {
            PasswordScheme::Sha256 => Ok(sha256_hex(password) == stored),
            PasswordScheme::Argon2 => {
                let parsed = match PasswordHash::new(stored) {
                    Ok(parsed) => parsed,
                    // Not a PHC string, e.g. a record written under sha256
                    Err(_) => return Ok(false),
                };
                Ok(Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok())
            }
        }
    }
}

fn sha256_hex(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_digest() {
        let service = PasswordService::new(PasswordScheme::Sha256);
        assert_eq!(
            service.hash("password").unwrap(),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_sha256_is_deterministic() {
        let service = PasswordService::default();
        assert_eq!(service.hash("p").unwrap(), service.hash("p").unwrap());
        assert_ne!(service.hash("p").unwrap(), service.hash("q").unwrap());
    }

    #[test]
    fn test_sha256_verify() {
        let service = PasswordService::default();
        let digest = service.hash("secure_password_123").unwrap();
        assert!(service.verify("secure_password_123", &digest).unwrap());
        assert!(!service.verify("wrong_password", &digest).unwrap());
    }

    #[test]
    fn test_argon2_hash_and_verify() {
        let service = PasswordService::new(PasswordScheme::Argon2);
        let hash = service.hash("secure_password_123").unwrap();

        assert!(service.verify("secure_password_123", &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_argon2_salts_each_hash() {
        let service = PasswordService::new(PasswordScheme::Argon2);
        let hash1 = service.hash("test_password").unwrap();
        let hash2 = service.hash("test_password").unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);
        assert!(service.verify("test_password", &hash1).unwrap());
        assert!(service.verify("test_password", &hash2).unwrap());
    }

    #[test]
    fn test_schemes_do_not_cross_verify() {
        let sha = PasswordService::new(PasswordScheme::Sha256);
        let argon = PasswordService::new(PasswordScheme::Argon2);

        let sha_digest = sha.hash("p").unwrap();
        let argon_digest = argon.hash("p").unwrap();

        assert!(!argon.verify("p", &sha_digest).unwrap());
        assert!(!sha.verify("p", &argon_digest).unwrap());
    }
}
