use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{AccessTokenIssuer, IssuedAccessToken};
use crate::infrastructure::config::JwtConfig;

/// Claim set carried by issued access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
  /// Subject: the user's login name
  pub sub: String,
  /// Unique token identifier
  pub jti: String,
  pub email: String,
  /// User identifier
  pub uid: String,
  pub roles: Vec<String>,
  pub iss: String,
  pub aud: String,
  pub iat: i64,
  pub exp: i64,
}

/// Access token issuer signing HS256 JSON web tokens with a symmetric key
pub struct JwtAccessTokenIssuer {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  issuer: String,
  audience: String,
  ttl: Duration,
}

impl JwtAccessTokenIssuer {
  /// Creates an issuer from the jwt configuration section
  pub fn new(config: &JwtConfig) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
      issuer: config.issuer.clone(),
      audience: config.audience.clone(),
      ttl: Duration::minutes(config.access_token_ttl_minutes),
    }
  }

  /// Decodes and validates a token, returning its claims
  pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&self.issuer]);
    validation.set_audience(&[&self.audience]);

    let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
      .map_err(|e| AuthError::Token(format!("Token validation failed: {}", e)))?;

    Ok(data.claims)
  }
}

#[async_trait]
impl AccessTokenIssuer for JwtAccessTokenIssuer {
  async fn issue(&self, user: &User) -> Result<IssuedAccessToken, AuthError> {
    let now = Utc::now();
    let expires_at = truncate_to_seconds(now + self.ttl);

    let claims = AccessTokenClaims {
      sub: user.username.clone(),
      jti: Uuid::new_v4().to_string(),
      email: user.email.clone(),
      uid: user.id.to_string(),
      roles: user.roles.clone(),
      iss: self.issuer.clone(),
      aud: self.audience.clone(),
      iat: now.timestamp(),
      exp: expires_at.timestamp(),
    };

    let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AuthError::Token(format!("Token signing failed: {}", e)))?;

    Ok(IssuedAccessToken { token, expires_at })
  }
}

// The exp claim only carries whole seconds
fn truncate_to_seconds(instant: DateTime<Utc>) -> DateTime<Utc> {
  Utc
    .timestamp_opt(instant.timestamp(), 0)
    .single()
    .unwrap_or(instant)
}
