//! Argon2 password hashing.
//!
//! Replaces the base64 "hashing" the original product shipped with.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use penmaster_core::ports::{AuthError, PasswordService};

/// Argon2-based password service with default parameters.
#[derive(Default)]
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_and_reject_wrong_password() {
        let service = Argon2PasswordService::new();
        let hash = service.hash("correct horse battery").unwrap();

        assert!(service.verify("correct horse battery", &hash).unwrap());
        assert!(!service.verify("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(service.verify("pw", "not-a-phc-string").is_err());
    }
}
