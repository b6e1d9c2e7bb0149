use actix_web::{HttpResponse, cookie::Cookie, cookie::time::Duration as CookieDuration, web};
use chrono::Utc;
use validator::Validate;

use crate::adapters::http::dtos::{LoginRequest, RegisterRequest};
use crate::adapters::http::envelope::{
  FailureResponseFactory, ResponseFactory, SuccessResponseFactory, UnauthorizedResponseFactory,
};
use crate::adapters::http::errors::ApiError;
use crate::domain::auth::AuthOutcome;
use crate::domain::auth::AuthService;

const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Builds the success response for an authenticated outcome, attaching the
/// refresh token as an HTTP-only cookie scoped to the whole site.
fn authed_response(outcome: AuthOutcome) -> HttpResponse {
  let mut response = HttpResponse::Ok();

  if let (Some(token), Some(expires_on)) = (&outcome.refresh_token, outcome.refresh_token_expiration)
  {
    let max_age = (expires_on - Utc::now()).num_seconds().max(0);
    let cookie = Cookie::build(REFRESH_TOKEN_COOKIE, token.clone())
      .http_only(true)
      .path("/")
      .max_age(CookieDuration::seconds(max_age))
      .finish();
    response.cookie(cookie);
  }

  response.json(SuccessResponseFactory::new(200, outcome).create_response())
}

/// Handler for user registration
///
/// POST /api/auth/register
/// Response: 200 with the auth outcome and a refresh-token cookie; 400 with
/// a failure envelope when the email is taken or the payload is invalid.
pub async fn register(
  service: web::Data<AuthService>,
  body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
  body.validate()?;

  let request = body.into_inner();
  let outcome = service
    .register(request.username, request.email, request.password)
    .await?;

  if !outcome.is_authed {
    return Ok(
      HttpResponse::BadRequest()
        .json(FailureResponseFactory::new(400, outcome.message).create_response()),
    );
  }

  Ok(authed_response(outcome))
}

/// Handler for user login
///
/// POST /api/auth/login
/// Response: 200 with the auth outcome and a refresh-token cookie; 401 with
/// a failure envelope on invalid credentials (no cookie is set).
pub async fn login(
  service: web::Data<AuthService>,
  body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
  body.validate()?;

  let request = body.into_inner();
  let outcome = service
    .login(request.email_or_username, request.password)
    .await?;

  if !outcome.is_authed {
    return Ok(
      HttpResponse::Unauthorized()
        .json(UnauthorizedResponseFactory::new(outcome.message).create_response()),
    );
  }

  Ok(authed_response(outcome))
}
