use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// Login name (unique)
  pub username: String,
  /// Email address (unique)
  pub email: String,
  /// Hashed password using Argon2
  pub password_hash: String,
  /// Role names attached to the user
  pub roles: Vec<String>,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the default role
  pub fn new(username: String, email: String, password_hash: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      username,
      email,
      password_hash,
      roles: vec!["user".to_string()],
      created_at: Utc::now(),
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      username,
      email,
      password_hash,
      roles,
      created_at,
    }
  }
}

/// Long-lived refresh token appended to a user's token list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
  /// Database identifier (0 before the token is persisted)
  pub id: i64,
  /// Owning user
  pub user_id: Uuid,
  /// Opaque token string (base64 of 32 random bytes)
  pub token: String,
  /// Timestamp when the token was minted
  pub created_on: DateTime<Utc>,
  /// Timestamp after which the token is no longer usable
  pub expires_on: DateTime<Utc>,
  /// Timestamp of revocation, if the token was revoked
  pub revoked_on: Option<DateTime<Utc>>,
}

impl RefreshToken {
  /// Mints a new token for a user with the given time to live
  pub fn mint(user_id: Uuid, token: String, ttl: Duration) -> Self {
    let now = Utc::now();
    Self {
      id: 0,
      user_id,
      token,
      created_on: now,
      expires_on: now + ttl,
      revoked_on: None,
    }
  }

  /// Checks if the token has expired
  pub fn is_expired(&self) -> bool {
    self.expires_on <= Utc::now()
  }

  /// Checks if the token has been revoked
  pub fn is_revoked(&self) -> bool {
    self.revoked_on.is_some()
  }

  /// A token is active when it is neither expired nor revoked
  pub fn is_active(&self) -> bool {
    !self.is_expired() && !self.is_revoked()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_user_creation() {
    let user = User::new(
      "alice".to_string(),
      "alice@example.com".to_string(),
      "hashed_password".to_string(),
    );

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.roles, vec!["user".to_string()]);
  }

  #[test]
  fn test_fresh_token_is_active() {
    let token = RefreshToken::mint(Uuid::new_v4(), "token".to_string(), Duration::days(10));

    assert!(!token.is_expired());
    assert!(!token.is_revoked());
    assert!(token.is_active());
  }

  #[test]
  fn test_expired_token_is_not_active() {
    let mut token = RefreshToken::mint(Uuid::new_v4(), "token".to_string(), Duration::days(10));
    token.expires_on = Utc::now() - Duration::seconds(1);

    assert!(token.is_expired());
    assert!(!token.is_active());
  }

  #[test]
  fn test_revoked_token_is_not_active() {
    let mut token = RefreshToken::mint(Uuid::new_v4(), "token".to_string(), Duration::days(10));
    token.revoked_on = Some(Utc::now());

    assert!(!token.is_expired());
    assert!(token.is_revoked());
    assert!(!token.is_active());
  }
}
