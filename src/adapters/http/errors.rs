use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::adapters::http::envelope::ResponseEnvelope;
use crate::domain::auth::errors::{AuthError, RepositoryError};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request, failure envelope)
  Validation(String),

  /// Entity not found (404 Not Found, failure envelope)
  NotFound(String),

  /// Store failure caught at the HTTP boundary.
  ///
  /// Rendered as an opaque 400 with an empty body; the original error is
  /// only written to the log.
  Repository(RepositoryError),

  /// Authentication infrastructure failure
  Auth(AuthError),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Repository(err) => write!(f, "Repository error: {}", err),
      ApiError::Auth(err) => write!(f, "Authentication error: {}", err),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Repository(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(AuthError::NotImplemented) => StatusCode::NOT_IMPLEMENTED,
      ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    let message = match self {
      ApiError::Validation(msg) => msg.clone(),
      ApiError::NotFound(msg) => msg.clone(),
      ApiError::Repository(err) => {
        tracing::error!("Store error at HTTP boundary: {}", err);
        return HttpResponse::build(status).finish();
      }
      ApiError::Auth(AuthError::NotImplemented) => "Operation not implemented".to_string(),
      ApiError::Auth(err) => {
        tracing::error!("Authentication infrastructure error: {}", err);
        "An internal server error occurred".to_string()
      }
    };

    let envelope = ResponseEnvelope::<()>::failure(status.as_u16() as i32, message);

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(envelope)
  }
}

impl From<RepositoryError> for ApiError {
  fn from(error: RepositoryError) -> Self {
    ApiError::Repository(error)
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    ApiError::Auth(error)
  }
}

/// Convert validation errors from the validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
