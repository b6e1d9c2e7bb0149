use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::UserRepository;

/// SQLite implementation of the UserRepository trait
pub struct SqliteUserRepository {
  pool: SqlitePool,
}

impl SqliteUserRepository {
  /// Creates a new instance of SqliteUserRepository
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: String,
  username: String,
  email: String,
  password_hash: String,
  roles: String,
  created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = RepositoryError;

  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    let id = Uuid::parse_str(&row.id)
      .map_err(|e| RepositoryError::DatabaseError(format!("Invalid user id: {}", e)))?;
    let roles = row
      .roles
      .split(',')
      .filter(|r| !r.is_empty())
      .map(|r| r.to_string())
      .collect();

    Ok(User::from_db(
      id,
      row.username,
      row.email,
      row.password_hash,
      roles,
      row.created_at,
    ))
  }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
      INSERT INTO users (id, username, email, password_hash, roles, created_at)
      VALUES (?, ?, ?, ?, ?, ?)
      RETURNING id, username, email, password_hash, roles, created_at
      "#,
    )
    .bind(user.id.to_string())
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.roles.join(","))
    .bind(user.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(User::try_from(row)?)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      "SELECT id, username, email, password_hash, roles, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await?;

    match row {
      Some(row) => Ok(Some(User::try_from(row)?)),
      None => Ok(None),
    }
  }

  async fn find_by_username_or_email(&self, value: &str) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
      SELECT id, username, email, password_hash, roles, created_at
      FROM users
      WHERE username = ? OR email = ?
      "#,
    )
    .bind(value)
    .bind(value)
    .fetch_optional(&self.pool)
    .await?;

    match row {
      Some(row) => Ok(Some(User::try_from(row)?)),
      None => Ok(None),
    }
  }
}
