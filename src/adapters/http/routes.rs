use actix_web::web;
use std::sync::Arc;

use crate::domain::auth::AuthService;

use super::handlers::{auth, characters, genres, movies};

/// Configure authentication routes
///
/// Mounts the authentication endpoints under the provided scope
/// (e.g. /api/auth).
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login - Authenticate and issue tokens
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig, service: Arc<AuthService>) {
  cfg
    .app_data(web::Data::from(service))
    .route("/register", web::post().to(auth::register))
    .route("/login", web::post().to(auth::login));
}

/// Configure genre CRUD routes under the provided scope (e.g. /api/genres)
pub fn configure_genre_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("", web::get().to(genres::get_all))
    .route("", web::post().to(genres::create))
    .route("/{id}", web::put().to(genres::update))
    .route("/{id}", web::delete().to(genres::delete));
}

/// Configure movie CRUD routes under the provided scope (e.g. /api/movies)
pub fn configure_movie_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("", web::get().to(movies::get_all))
    .route("", web::post().to(movies::create))
    .route("/{id}", web::put().to(movies::update))
    .route("/{id}", web::delete().to(movies::delete));
}

/// Configure character CRUD routes under the provided scope
/// (e.g. /api/characters)
pub fn configure_character_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("", web::get().to(characters::get_all))
    .route("", web::post().to(characters::create))
    .route("/{id}", web::put().to(characters::update))
    .route("/{id}", web::delete().to(characters::delete));
}
