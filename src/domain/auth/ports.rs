use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::{RefreshToken, User};
use super::errors::AuthError;

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

  /// Finds a user whose username or email matches the given value
  async fn find_by_username_or_email(&self, value: &str) -> Result<Option<User>, AuthError>;
}

/// Repository trait for refresh token persistence operations
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
  /// Appends a refresh token to a user's token list
  async fn add(&self, token: RefreshToken) -> Result<RefreshToken, AuthError>;

  /// Returns all refresh tokens for a user
  async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &str) -> Result<String, AuthError>;

  /// Verifies a plain text password against a stored hash
  async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}

/// A signed access token with its expiration instant
#[derive(Debug, Clone)]
pub struct IssuedAccessToken {
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

/// Service trait for signed access token issuance
#[async_trait]
pub trait AccessTokenIssuer: Send + Sync {
  /// Issues a signed access token carrying the user's identity claims
  async fn issue(&self, user: &User) -> Result<IssuedAccessToken, AuthError>;
}

/// Service trait for secure refresh token string generation
#[async_trait]
pub trait RefreshTokenGenerator: Send + Sync {
  /// Generates a cryptographically secure random token string
  async fn generate(&self) -> Result<String, AuthError>;
}
