pub mod jwt_issuer;
pub mod password_hasher;
pub mod refresh_token_generator;

pub use jwt_issuer::{AccessTokenClaims, JwtAccessTokenIssuer};
pub use password_hasher::Argon2PasswordHasher;
pub use refresh_token_generator::SecureRefreshTokenGenerator;
