use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::RefreshTokenGenerator;

/// Refresh token generator backed by the operating system's CSPRNG
///
/// Produces 32 random bytes encoded as base64, matching the refresh token
/// format stored alongside each user.
pub struct SecureRefreshTokenGenerator;

impl SecureRefreshTokenGenerator {
  pub fn new() -> Self {
    Self
  }
}

impl Default for SecureRefreshTokenGenerator {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl RefreshTokenGenerator for SecureRefreshTokenGenerator {
  async fn generate(&self) -> Result<String, AuthError> {
    let mut token_bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut token_bytes);

    Ok(STANDARD.encode(token_bytes))
  }
}
