use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;

use super::entities::{RefreshToken, User};
use super::errors::AuthError;
use super::ports::{
  AccessTokenIssuer, PasswordHasher, RefreshTokenGenerator, RefreshTokenRepository, UserRepository,
};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const DUPLICATE_USER_MESSAGE: &str = "There is already a user with the same username or email";
const REGISTRATION_FAILED_MESSAGE: &str = "Something went wrong, please try again";

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  /// Lifetime of minted refresh tokens in days
  pub refresh_token_ttl_days: i64,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      refresh_token_ttl_days: 10,
    }
  }
}

/// Outcome of an authentication operation.
///
/// Credential failures are carried here (`is_authed == false` plus a message)
/// rather than as errors; `AuthError` is reserved for infrastructure faults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
  pub is_authed: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub access_token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub access_token_expiration: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub refresh_token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub refresh_token_expiration: Option<DateTime<Utc>>,
}

impl AuthOutcome {
  fn failure(message: &str) -> Self {
    Self {
      is_authed: false,
      message: message.to_string(),
      username: None,
      email: None,
      access_token: None,
      access_token_expiration: None,
      refresh_token: None,
      refresh_token_expiration: None,
    }
  }
}

/// Authentication service implementing registration and login flows
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  refresh_token_repo: Arc<dyn RefreshTokenRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  access_token_issuer: Arc<dyn AccessTokenIssuer>,
  refresh_token_generator: Arc<dyn RefreshTokenGenerator>,
  config: AuthServiceConfig,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    access_token_issuer: Arc<dyn AccessTokenIssuer>,
    refresh_token_generator: Arc<dyn RefreshTokenGenerator>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      user_repo,
      refresh_token_repo,
      password_hasher,
      access_token_issuer,
      refresh_token_generator,
      config,
    }
  }

  /// Registers a new user and issues an access/refresh token pair
  ///
  /// # Errors
  /// Returns `AuthError` only for infrastructure failures; a duplicate email
  /// or a failed user insert produce a failure outcome instead.
  pub async fn register(
    &self,
    username: String,
    email: String,
    password: String,
  ) -> Result<AuthOutcome, AuthError> {
    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Ok(AuthOutcome::failure(DUPLICATE_USER_MESSAGE));
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let user = User::new(username, email, password_hash);

    let created = match self.user_repo.create(user).await {
      Ok(user) => user,
      Err(e) => {
        tracing::error!("User creation failed: {}", e);
        return Ok(AuthOutcome::failure(REGISTRATION_FAILED_MESSAGE));
      }
    };

    let access = self.access_token_issuer.issue(&created).await?;
    let refresh = self.mint_refresh_token(&created).await?;

    Ok(self.success_outcome(created, access.token, access.expires_at, refresh))
  }

  /// Authenticates a user by username or email and password
  ///
  /// On success the user's currently active refresh token is reused; a new
  /// one is minted and appended only when none is active.
  pub async fn login(
    &self,
    email_or_username: String,
    password: String,
  ) -> Result<AuthOutcome, AuthError> {
    let user = match self
      .user_repo
      .find_by_username_or_email(&email_or_username)
      .await?
    {
      Some(user) => user,
      None => return Ok(AuthOutcome::failure(INVALID_CREDENTIALS_MESSAGE)),
    };

    let password_matches = self
      .password_hasher
      .verify(&password, &user.password_hash)
      .await?;

    if !password_matches {
      return Ok(AuthOutcome::failure(INVALID_CREDENTIALS_MESSAGE));
    }

    let access = self.access_token_issuer.issue(&user).await?;

    let existing = self
      .refresh_token_repo
      .find_for_user(user.id)
      .await?
      .into_iter()
      .find(|t| t.is_active());

    let refresh = match existing {
      Some(token) => token,
      None => self.mint_refresh_token(&user).await?,
    };

    Ok(self.success_outcome(user, access.token, access.expires_at, refresh))
  }

  /// Exchanges a refresh token for a new access token. Not implemented.
  pub async fn refresh(&self, _refresh_token: String) -> Result<AuthOutcome, AuthError> {
    Err(AuthError::NotImplemented)
  }

  /// Revokes a refresh token. Not implemented.
  pub async fn revoke(&self, _refresh_token: String) -> Result<bool, AuthError> {
    Err(AuthError::NotImplemented)
  }

  async fn mint_refresh_token(&self, user: &User) -> Result<RefreshToken, AuthError> {
    let token = self.refresh_token_generator.generate().await?;
    let refresh = RefreshToken::mint(
      user.id,
      token,
      Duration::days(self.config.refresh_token_ttl_days),
    );
    self.refresh_token_repo.add(refresh).await
  }

  fn success_outcome(
    &self,
    user: User,
    access_token: String,
    access_token_expiration: DateTime<Utc>,
    refresh: RefreshToken,
  ) -> AuthOutcome {
    AuthOutcome {
      is_authed: true,
      message: String::new(),
      username: Some(user.username),
      email: Some(user.email),
      access_token: Some(access_token),
      access_token_expiration: Some(access_token_expiration),
      refresh_token: Some(refresh.token),
      refresh_token_expiration: Some(refresh.expires_on),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::ports::IssuedAccessToken;
  use async_trait::async_trait;
  use std::sync::Mutex;
  use uuid::Uuid;

  struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
  }

  impl InMemoryUserRepository {
    fn new() -> Self {
      Self {
        users: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
      self.users.lock().unwrap().push(user.clone());
      Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .find(|u| u.email == email)
          .cloned(),
      )
    }

    async fn find_by_username_or_email(&self, value: &str) -> Result<Option<User>, AuthError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .find(|u| u.username == value || u.email == value)
          .cloned(),
      )
    }
  }

  struct InMemoryRefreshTokenRepository {
    tokens: Mutex<Vec<RefreshToken>>,
  }

  impl InMemoryRefreshTokenRepository {
    fn new() -> Self {
      Self {
        tokens: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn add(&self, token: RefreshToken) -> Result<RefreshToken, AuthError> {
      let mut tokens = self.tokens.lock().unwrap();
      let mut token = token;
      token.id = tokens.len() as i64 + 1;
      tokens.push(token.clone());
      Ok(token)
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, AuthError> {
      Ok(
        self
          .tokens
          .lock()
          .unwrap()
          .iter()
          .filter(|t| t.user_id == user_id)
          .cloned()
          .collect(),
      )
    }
  }

  struct PlainHasher;

  #[async_trait]
  impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
      Ok(format!("hash:{}", password))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
      Ok(password_hash == format!("hash:{}", password))
    }
  }

  struct StaticIssuer;

  #[async_trait]
  impl AccessTokenIssuer for StaticIssuer {
    async fn issue(&self, user: &User) -> Result<IssuedAccessToken, AuthError> {
      Ok(IssuedAccessToken {
        token: format!("jwt-for-{}", user.username),
        expires_at: Utc::now() + Duration::minutes(30),
      })
    }
  }

  struct CountingGenerator {
    counter: Mutex<u32>,
  }

  #[async_trait]
  impl RefreshTokenGenerator for CountingGenerator {
    async fn generate(&self) -> Result<String, AuthError> {
      let mut counter = self.counter.lock().unwrap();
      *counter += 1;
      Ok(format!("refresh-{}", counter))
    }
  }

  fn service() -> AuthService {
    AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(InMemoryRefreshTokenRepository::new()),
      Arc::new(PlainHasher),
      Arc::new(StaticIssuer),
      Arc::new(CountingGenerator {
        counter: Mutex::new(0),
      }),
      AuthServiceConfig::default(),
    )
  }

  #[tokio::test]
  async fn test_register_issues_tokens() {
    let service = service();

    let outcome = service
      .register(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret123".to_string(),
      )
      .await
      .unwrap();

    assert!(outcome.is_authed);
    assert_eq!(outcome.username.as_deref(), Some("alice"));
    assert_eq!(outcome.email.as_deref(), Some("alice@example.com"));
    assert!(outcome.access_token.is_some());
    assert!(outcome.refresh_token.is_some());
  }

  #[tokio::test]
  async fn test_register_duplicate_email_fails_without_second_user() {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let service = AuthService::new(
      user_repo.clone(),
      Arc::new(InMemoryRefreshTokenRepository::new()),
      Arc::new(PlainHasher),
      Arc::new(StaticIssuer),
      Arc::new(CountingGenerator {
        counter: Mutex::new(0),
      }),
      AuthServiceConfig::default(),
    );

    service
      .register(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret123".to_string(),
      )
      .await
      .unwrap();

    let outcome = service
      .register(
        "alice2".to_string(),
        "alice@example.com".to_string(),
        "secret456".to_string(),
      )
      .await
      .unwrap();

    assert!(!outcome.is_authed);
    assert!(!outcome.message.is_empty());
    assert_eq!(user_repo.users.lock().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_login_unknown_user_fails() {
    let service = service();

    let outcome = service
      .login("nobody@example.com".to_string(), "secret123".to_string())
      .await
      .unwrap();

    assert!(!outcome.is_authed);
    assert_eq!(outcome.message, INVALID_CREDENTIALS_MESSAGE);
    assert!(outcome.refresh_token.is_none());
  }

  #[tokio::test]
  async fn test_login_wrong_password_fails() {
    let service = service();

    service
      .register(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret123".to_string(),
      )
      .await
      .unwrap();

    let outcome = service
      .login("alice".to_string(), "wrong".to_string())
      .await
      .unwrap();

    assert!(!outcome.is_authed);
    assert_eq!(outcome.message, INVALID_CREDENTIALS_MESSAGE);
  }

  #[tokio::test]
  async fn test_login_reuses_active_refresh_token() {
    let service = service();

    let registered = service
      .register(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret123".to_string(),
      )
      .await
      .unwrap();

    let first_login = service
      .login("alice".to_string(), "secret123".to_string())
      .await
      .unwrap();
    let second_login = service
      .login("alice@example.com".to_string(), "secret123".to_string())
      .await
      .unwrap();

    // The token minted at registration stays active and is reused
    assert_eq!(registered.refresh_token, first_login.refresh_token);
    assert_eq!(first_login.refresh_token, second_login.refresh_token);
  }

  #[tokio::test]
  async fn test_login_mints_new_token_when_none_active() {
    let token_repo = Arc::new(InMemoryRefreshTokenRepository::new());
    let service = AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      token_repo.clone(),
      Arc::new(PlainHasher),
      Arc::new(StaticIssuer),
      Arc::new(CountingGenerator {
        counter: Mutex::new(0),
      }),
      AuthServiceConfig::default(),
    );

    let registered = service
      .register(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "secret123".to_string(),
      )
      .await
      .unwrap();

    // Expire the registration token
    for token in token_repo.tokens.lock().unwrap().iter_mut() {
      token.expires_on = Utc::now() - Duration::seconds(1);
    }

    let login = service
      .login("alice".to_string(), "secret123".to_string())
      .await
      .unwrap();

    assert_ne!(registered.refresh_token, login.refresh_token);
    assert_eq!(token_repo.tokens.lock().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn test_refresh_and_revoke_are_not_implemented() {
    let service = service();

    assert!(matches!(
      service.refresh("token".to_string()).await,
      Err(AuthError::NotImplemented)
    ));
    assert!(matches!(
      service.revoke("token".to_string()).await,
      Err(AuthError::NotImplemented)
    ));
  }
}
