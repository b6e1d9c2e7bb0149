pub mod dtos;
pub mod envelope;
pub mod errors;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use dtos::{CharacterRequest, GenreRequest, LoginRequest, MovieRequest, RegisterRequest};
pub use envelope::{
  FailureResponseFactory, ResponseEnvelope, ResponseFactory, SuccessResponseFactory,
  UnauthorizedResponseFactory,
};
pub use errors::ApiError;
pub use routes::{
  configure_auth_routes, configure_character_routes, configure_genre_routes,
  configure_movie_routes,
};
