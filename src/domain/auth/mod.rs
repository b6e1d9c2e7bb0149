pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use entities::{RefreshToken, User};
pub use errors::{AuthError, RepositoryError};
pub use services::{AuthOutcome, AuthService, AuthServiceConfig};
