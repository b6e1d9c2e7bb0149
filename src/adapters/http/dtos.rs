use serde::Deserialize;
use validator::Validate;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
  /// Login name
  #[validate(length(
    min = 1,
    max = 64,
    message = "Username must be between 1 and 64 characters"
  ))]
  pub username: String,

  /// Email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// Plain text password
  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
  /// Login name or email address
  #[validate(length(min = 1, message = "Username or email is required"))]
  pub email_or_username: String,

  /// Plain text password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Request body for creating or updating a genre
#[derive(Debug, Clone, Deserialize)]
pub struct GenreRequest {
  pub name: Option<String>,
}

/// Request body for creating or updating a movie
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
  pub title: Option<String>,
  pub year: i64,
  pub rate: f64,
  #[serde(default)]
  pub storyline: String,
  pub genre_id: i64,
}

/// Request body for creating or updating a character
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRequest {
  pub name: Option<String>,
  pub movie_id: i64,
}
