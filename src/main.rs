use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinebase::{
  adapters::http::{
    configure_auth_routes, configure_character_routes, configure_genre_routes,
    configure_movie_routes,
  },
  domain::auth::{AuthService, AuthServiceConfig},
  infrastructure::{
    config::Config,
    persistence::sqlite::{SqliteRefreshTokenRepository, SqliteUserRepository},
    security::{Argon2PasswordHasher, JwtAccessTokenIssuer, SecureRefreshTokenGenerator},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cinebase=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Cinebase application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Opening database: {}", config.database.url);

  let connect_options = SqliteConnectOptions::from_str(&config.database.url)
    .map_err(|e| {
      tracing::error!("Invalid database URL: {}", e);
      std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("Invalid database URL: {}", e),
      )
    })?
    .create_if_missing(true);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    SqlitePoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect_with(connect_options),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database open timed out after {} seconds",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database open timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to open database: {}", e);
    std::io::Error::other(format!("Database error: {}", e))
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories and security services
  let user_repo = Arc::new(SqliteUserRepository::new(db_pool.clone()));
  let refresh_token_repo = Arc::new(SqliteRefreshTokenRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(Argon2PasswordHasher::new().expect("Failed to build hasher"));
  let access_token_issuer = Arc::new(JwtAccessTokenIssuer::new(&config.jwt));
  let refresh_token_generator = Arc::new(SecureRefreshTokenGenerator::new());

  let auth_service = Arc::new(AuthService::new(
    user_repo,
    refresh_token_repo,
    password_hasher,
    access_token_issuer,
    refresh_token_generator,
    AuthServiceConfig {
      refresh_token_ttl_days: config.jwt.refresh_token_ttl_days,
    },
  ));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Database pool for the catalog handlers
      .app_data(web::Data::new(db_pool.clone()))
      // Configure API routes
      .service(
        web::scope("/api/auth")
          .configure(|cfg| configure_auth_routes(cfg, auth_service.clone())),
      )
      .service(web::scope("/api/genres").configure(configure_genre_routes))
      .service(web::scope("/api/movies").configure(configure_movie_routes))
      .service(web::scope("/api/characters").configure(configure_character_routes))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
