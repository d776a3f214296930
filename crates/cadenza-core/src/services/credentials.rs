use argon2::{
  Argon2,
  password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::errors::CoreError;
use crate::ports::CredentialHasher;

/// Argon2id with the crate's default parameters and a random salt per hash.
#[derive(Default)]
pub struct Argon2Hasher {
  argon2: Argon2<'static>,
}

impl CredentialHasher for Argon2Hasher {
  fn hash(&self, password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = self
      .argon2
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| CoreError::Credentials(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
  }

  fn verify(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed =
      PasswordHash::new(hash).map_err(|e| CoreError::Credentials(format!("invalid password hash format: {e}")))?;
    Ok(self.argon2.verify_password(password.as_bytes(), &parsed).is_ok())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hashes_are_salted_and_verifiable() {
    let hasher = Argon2Hasher::default();

    let first = hasher.hash("hunter22").unwrap();
    let second = hasher.hash("hunter22").unwrap();

    assert!(first.starts_with("$argon2id$"));
    assert_ne!(first, second);
    assert!(hasher.verify("hunter22", &first).unwrap());
    assert!(!hasher.verify("hunter23", &first).unwrap());
  }

  #[test]
  fn malformed_hash_is_an_error() {
    assert!(matches!(Argon2Hasher::default().verify("x", "plaintext"), Err(CoreError::Credentials(_))));
  }
}
