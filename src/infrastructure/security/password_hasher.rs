use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::PasswordHasher;

/// Argon2id password hasher implementation
///
/// Uses the Argon2id algorithm with secure parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the specified parameters
  pub fn new() -> Result<Self, AuthError> {
    let params = Params::new(19456, 2, 1, Some(32))
      .map_err(|e| AuthError::Hash(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  /// Hashes a plain text password using Argon2id with a random salt
  async fn hash(&self, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| AuthError::Hash(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
  }

  /// Verifies a plain text password against a stored hash
  ///
  /// Returns `Ok(false)` on a mismatch; errors only for a malformed hash.
  async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(password_hash)
      .map_err(|e| AuthError::Hash(format!("Invalid hash format: {}", e)))?;

    match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AuthError::Hash(format!(
        "Password verification failed: {}",
        e
      ))),
    }
  }
}
