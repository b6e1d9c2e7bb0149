use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::auth::entities::RefreshToken;
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::RefreshTokenRepository;

/// SQLite implementation of the RefreshTokenRepository trait
pub struct SqliteRefreshTokenRepository {
  pool: SqlitePool,
}

impl SqliteRefreshTokenRepository {
  /// Creates a new instance of SqliteRefreshTokenRepository
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the refresh_tokens table
#[derive(Debug, sqlx::FromRow)]
struct RefreshTokenRow {
  id: i64,
  user_id: String,
  token: String,
  created_on: DateTime<Utc>,
  expires_on: DateTime<Utc>,
  revoked_on: Option<DateTime<Utc>>,
}

impl TryFrom<RefreshTokenRow> for RefreshToken {
  type Error = RepositoryError;

  fn try_from(row: RefreshTokenRow) -> Result<Self, Self::Error> {
    let user_id = Uuid::parse_str(&row.user_id)
      .map_err(|e| RepositoryError::DatabaseError(format!("Invalid user id: {}", e)))?;

    Ok(RefreshToken {
      id: row.id,
      user_id,
      token: row.token,
      created_on: row.created_on,
      expires_on: row.expires_on,
      revoked_on: row.revoked_on,
    })
  }
}

#[async_trait]
impl RefreshTokenRepository for SqliteRefreshTokenRepository {
  async fn add(&self, token: RefreshToken) -> Result<RefreshToken, AuthError> {
    let row = sqlx::query_as::<_, RefreshTokenRow>(
      r#"
      INSERT INTO refresh_tokens (user_id, token, created_on, expires_on, revoked_on)
      VALUES (?, ?, ?, ?, ?)
      RETURNING id, user_id, token, created_on, expires_on, revoked_on
      "#,
    )
    .bind(token.user_id.to_string())
    .bind(&token.token)
    .bind(token.created_on)
    .bind(token.expires_on)
    .bind(token.revoked_on)
    .fetch_one(&self.pool)
    .await?;

    Ok(RefreshToken::try_from(row)?)
  }

  async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, AuthError> {
    let rows = sqlx::query_as::<_, RefreshTokenRow>(
      r#"
      SELECT id, user_id, token, created_on, expires_on, revoked_on
      FROM refresh_tokens
      WHERE user_id = ?
      ORDER BY created_on
      "#,
    )
    .bind(user_id.to_string())
    .fetch_all(&self.pool)
    .await?;

    rows
      .into_iter()
      .map(|row| RefreshToken::try_from(row).map_err(AuthError::from))
      .collect()
  }
}
