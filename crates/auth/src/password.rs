use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::error::{AuthError, Result};

/// Password hasher producing self-describing PHC strings, so stored hashes
/// stay verifiable after the work factor changes.
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Build a hasher with the given work factor (Argon2 time cost).
    pub fn new(work_factor: u32) -> Result<Self> {
        let params = Params::new(Params::DEFAULT_M_COST, work_factor, Params::DEFAULT_P_COST, None)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Verify a password against a stored hash. The parameters encoded in
    /// the hash string take precedence over this hasher's own.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low work factor to keep tests fast.
    fn hasher() -> Hasher {
        Hasher::new(1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let h = hasher();
        let hash = h.hash("my_secure_password").unwrap();

        assert!(h.verify("my_secure_password", &hash).unwrap());
        assert!(!h.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_salts_produce_different_hashes() {
        let h = hasher();
        let hash1 = h.hash("same_password").unwrap();
        let hash2 = h.hash("same_password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(h.verify("same_password", &hash1).unwrap());
        assert!(h.verify("same_password", &hash2).unwrap());
    }

    #[test]
    fn test_verify_survives_work_factor_change() {
        let hash = Hasher::new(1).unwrap().hash("password123").unwrap();

        // A hasher tuned differently still verifies old hashes.
        assert!(Hasher::new(2).unwrap().verify("password123", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(hasher().verify("password", "not-a-phc-string").is_err());
    }
}
